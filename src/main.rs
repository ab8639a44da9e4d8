//! quicknew - create a new file from a path prompt
//!
//! Shows a single-line prompt prefilled with a sensible directory. Tab cycles
//! through matching subdirectories, Enter creates any missing directories and
//! the file, and the result is opened in the configured editor.
//!
//! # Usage
//!
//! ```bash
//! # Interactive mode, starting next to the current document
//! quicknew --from src/main.rs
//!
//! # Create directly without the prompt
//! quicknew create ~/notes/today.md
//! ```

use std::path::PathBuf;
use std::sync::Arc;

use tracing::debug;
use tracing_subscriber::EnvFilter;

use quicknew::cli::{CliInterface, Commands};
use quicknew::error::Result;
use quicknew::executor::{FsFileCreator, Opener, SubmitExecutor};
use quicknew::paths::PathResolver;
use quicknew::prompt::completion::FsPathLister;
use quicknew::prompt::{PathPrompt, PromptEngine};

/// Environment variable holding a tracing filter directive
const LOG_ENV: &str = "QUICKNEW_LOG";

/// Application entry point
fn main() {
    if let Err(e) = run() {
        eprintln!("Error: {}", e);
        std::process::exit(1);
    }
}

/// Main application logic
///
/// This function orchestrates the application startup:
/// 1. Parse command-line arguments and load configuration
/// 2. Initialize logging
/// 3. Handle informational subcommands
/// 4. Create the file, either directly or through the prompt
/// 5. Open the result
///
/// # Returns
/// * `Result<()>` - Success or error
fn run() -> Result<()> {
    let cli = CliInterface::new()?;

    initialize_logging(&cli);

    if cli.handle_subcommand()? {
        return Ok(());
    }

    let cwd = std::env::current_dir()?;
    let executor = SubmitExecutor::new(
        PathResolver::new(),
        Arc::new(FsFileCreator::new()),
        cwd.clone(),
    );

    let created = match &cli.args().command {
        Some(Commands::Create { path }) => Some(executor.submit(path)?),
        _ => run_interactive_mode(&cli, &executor, cwd)?,
    };

    let Some(path) = created else {
        debug!("Nothing created");
        return Ok(());
    };

    Opener::from_config(&cli.config().open).open(&path)?;
    Ok(())
}

/// Show the prompt and submit whatever the user confirms
///
/// # Returns
/// * `Result<Option<PathBuf>>` - Created file, or `None` when cancelled
fn run_interactive_mode(
    cli: &CliInterface,
    executor: &SubmitExecutor,
    cwd: PathBuf,
) -> Result<Option<PathBuf>> {
    let resolver = PathResolver::new();
    let initial = cli.initial_buffer(&cwd, resolver.home());
    debug!("Initial buffer: {:?}", initial);

    let prompt_config = &cli.config().prompt;
    let engine = PromptEngine::new(
        PathPrompt::new(prompt_config.caption.clone(), prompt_config.color),
        Arc::new(FsPathLister::new()),
        resolver,
    );

    engine.run(&initial, |raw| executor.submit(raw))
}

/// Initialize logging system based on verbosity level
///
/// Command-line flags win over `QUICKNEW_LOG`, which wins over the
/// configuration file.
///
/// # Arguments
/// * `cli` - CLI interface with verbosity settings
fn initialize_logging(cli: &CliInterface) {
    let level = cli.config().logging.level.to_tracing_level();
    let from_env = if cli.has_log_flag() {
        None
    } else {
        EnvFilter::try_from_env(LOG_ENV).ok()
    };
    let filter = from_env.unwrap_or_else(|| EnvFilter::default().add_directive(level.into()));

    // Logs go to stderr so a printed path on stdout stays pipeable
    let subscriber = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .with_writer(std::io::stderr);

    if cli.config().logging.timestamps {
        subscriber.init();
    } else {
        subscriber.without_time().init();
    }
}
