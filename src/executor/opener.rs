//! Opening the created file
//!
//! The editor command comes from the configuration, then `$VISUAL`, then
//! `$EDITOR`. Without any of them the path is printed instead so the caller
//! can pipe it somewhere.

use std::env;
use std::path::Path;
use std::process::Command;

use tracing::{debug, warn};

use crate::config::OpenConfig;
use crate::error::Result;

/// How a file ended up being handed to the user
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum OpenOutcome {
    /// Editor ran and exited successfully
    Launched(String),
    /// Path was written to stdout
    Printed,
}

/// Opens files with the configured editor
#[derive(Debug, Clone, Default)]
pub struct Opener {
    /// Program followed by its leading arguments
    command: Option<Vec<String>>,
}

impl Opener {
    /// Build an opener from configuration and the process environment
    pub fn from_config(config: &OpenConfig) -> Self {
        if !config.enabled {
            return Self::disabled();
        }

        Self {
            command: resolve_command(
                config.command.as_deref(),
                env::var("VISUAL").ok(),
                env::var("EDITOR").ok(),
            ),
        }
    }

    /// Opener that only prints paths
    pub fn disabled() -> Self {
        Self { command: None }
    }

    pub fn command(&self) -> Option<&[String]> {
        self.command.as_deref()
    }

    /// Open `path`, or print it when no editor is available
    ///
    /// Editor failures are logged and fall back to printing.
    pub fn open(&self, path: &Path) -> Result<OpenOutcome> {
        let Some((program, args)) = self.command.as_ref().and_then(|c| c.split_first()) else {
            println!("{}", path.display());
            return Ok(OpenOutcome::Printed);
        };

        debug!("Opening {} with {}", path.display(), program);
        match Command::new(program).args(args).arg(path).status() {
            Ok(status) if status.success() => Ok(OpenOutcome::Launched(program.clone())),
            Ok(status) => {
                warn!("Editor '{}' exited with {}", program, status);
                println!("{}", path.display());
                Ok(OpenOutcome::Printed)
            }
            Err(e) => {
                warn!("Failed to start editor '{}': {}", program, e);
                println!("{}", path.display());
                Ok(OpenOutcome::Printed)
            }
        }
    }
}

/// First non-blank command among configured, `$VISUAL` and `$EDITOR`,
/// split on whitespace
fn resolve_command(
    configured: Option<&str>,
    visual: Option<String>,
    editor: Option<String>,
) -> Option<Vec<String>> {
    configured
        .map(str::to_string)
        .into_iter()
        .chain(visual)
        .chain(editor)
        .map(|cmd| cmd.split_whitespace().map(str::to_string).collect::<Vec<_>>())
        .find(|parts| !parts.is_empty())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn owned(s: &str) -> Option<String> {
        Some(s.to_string())
    }

    #[test]
    fn test_configured_command_wins() {
        let cmd = resolve_command(Some("code -g"), owned("vim"), owned("nano"));
        assert_eq!(cmd, Some(vec!["code".to_string(), "-g".to_string()]));
    }

    #[test]
    fn test_visual_before_editor() {
        assert_eq!(
            resolve_command(None, owned("hx"), owned("nano")),
            Some(vec!["hx".to_string()])
        );
        assert_eq!(
            resolve_command(None, None, owned("nano")),
            Some(vec!["nano".to_string()])
        );
    }

    #[test]
    fn test_blank_values_are_skipped() {
        assert_eq!(
            resolve_command(Some("  "), owned(""), owned("vi")),
            Some(vec!["vi".to_string()])
        );
        assert_eq!(resolve_command(None, None, None), None);
    }

    #[test]
    fn test_disabled_config() {
        let config = OpenConfig {
            enabled: false,
            command: Some("vim".to_string()),
        };
        assert!(Opener::from_config(&config).command().is_none());
    }

    #[test]
    fn test_disabled_opener_prints() {
        let outcome = Opener::disabled().open(Path::new("/tmp/x")).unwrap();
        assert_eq!(outcome, OpenOutcome::Printed);
    }

    #[cfg(unix)]
    #[test]
    fn test_launches_command_with_path() {
        let tmp = tempfile::tempdir().unwrap();
        let file = tmp.path().join("opened.txt");
        let opener = Opener {
            command: Some(vec!["touch".to_string()]),
        };

        let outcome = opener.open(&file).unwrap();
        assert_eq!(outcome, OpenOutcome::Launched("touch".to_string()));
        assert!(file.exists());
    }

    #[test]
    fn test_missing_program_falls_back_to_printing() {
        let opener = Opener {
            command: Some(vec!["quicknew-no-such-editor".to_string()]),
        };
        let outcome = opener.open(Path::new("/tmp/x")).unwrap();
        assert_eq!(outcome, OpenOutcome::Printed);
    }
}
