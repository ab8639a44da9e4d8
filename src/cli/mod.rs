//! Command-line interface for quicknew
//!
//! This module handles:
//! - Command-line argument parsing using clap
//! - Configuration loading and CLI overrides
//! - Informational subcommands (version, completion, config)
//! - Choosing the text the prompt opens with

pub mod completion;

use clap::{Parser, Subcommand};
use std::io;
use std::path::{Path, PathBuf};

use crate::config::{Config, LogLevel};
use crate::error::Result;
use crate::paths;

/// quicknew - create a file from a path prompt
#[derive(Parser, Debug)]
#[command(
    name = "quicknew",
    version,
    about = "Create and open a new file, creating missing directories",
    long_about = "Type a path into a single-line prompt, press Tab to cycle through matching
subdirectories, and press Enter to create any missing directories and the file,
then open it in your editor."
)]
pub struct CliArgs {
    /// Active document; the prompt starts in its directory
    #[arg(long, value_name = "FILE")]
    pub from: Option<PathBuf>,

    /// Project folder, used when no active document is given (repeatable)
    #[arg(short = 'p', long = "project", value_name = "DIR")]
    pub projects: Vec<PathBuf>,

    /// Configuration file path
    #[arg(short = 'c', long = "config", value_name = "FILE")]
    pub config_file: Option<PathBuf>,

    /// Prompt caption
    #[arg(long, value_name = "TEXT")]
    pub caption: Option<String>,

    /// Print the path instead of opening it
    #[arg(long = "no-open")]
    pub no_open: bool,

    /// Disable colored output
    #[arg(long = "no-color")]
    pub no_color: bool,

    /// Quiet mode (errors only)
    #[arg(short = 'q', long)]
    pub quiet: bool,

    /// Verbose mode (detailed logging)
    #[arg(short = 'v', long)]
    pub verbose: bool,

    /// Very verbose mode (trace logging)
    #[arg(long = "vv")]
    pub very_verbose: bool,

    /// Subcommands
    #[command(subcommand)]
    pub command: Option<Commands>,
}

/// Subcommands for quicknew
#[derive(Subcommand, Debug, Clone, PartialEq, Eq)]
pub enum Commands {
    /// Show version information
    Version,

    /// Create a path without showing the prompt
    Create {
        /// Path to create, `~` is expanded
        #[arg(value_name = "PATH")]
        path: String,
    },

    /// Generate shell completion script
    Completion {
        /// Shell type (bash, zsh, fish)
        #[arg(value_name = "SHELL")]
        shell: String,
    },

    /// Show configuration
    Config {
        /// Show effective configuration
        #[arg(long)]
        show: bool,

        /// Validate configuration file
        #[arg(long)]
        validate: bool,
    },
}

/// CLI interface handler
pub struct CliInterface {
    /// Parsed command-line arguments
    args: CliArgs,

    /// Loaded configuration
    config: Config,
}

impl CliInterface {
    /// Create a new CLI interface from the process arguments
    ///
    /// # Returns
    /// * `Result<Self>` - New CLI interface or error
    pub fn new() -> Result<Self> {
        Self::from_args(CliArgs::parse())
    }

    /// Create a CLI interface from already parsed arguments
    pub fn from_args(args: CliArgs) -> Result<Self> {
        let config = Self::load_config(&args)?;
        Ok(Self { args, config })
    }

    /// Load configuration from file and merge with environment and arguments
    ///
    /// # Arguments
    /// * `args` - Command-line arguments
    ///
    /// # Returns
    /// * `Result<Config>` - Loaded configuration or error
    fn load_config(args: &CliArgs) -> Result<Config> {
        let mut config = Config::load_from_file(args.config_file.as_deref())?;

        if let Err(e) = config.validate() {
            eprintln!("Warning: Configuration validation failed: {}", e);
            eprintln!("Using default configuration instead.");
            config = Config::default();
        }

        config.apply_env();
        Self::apply_args_to_config(&mut config, args);

        Ok(config)
    }

    /// Get the configuration
    pub fn config(&self) -> &Config {
        &self.config
    }

    /// Get the CLI arguments
    pub fn args(&self) -> &CliArgs {
        &self.args
    }

    /// Whether any logging flag was given on the command line
    pub fn has_log_flag(&self) -> bool {
        self.args.quiet || self.args.verbose || self.args.very_verbose
    }

    /// Text the interactive prompt opens with
    ///
    /// A relative `--from` document is resolved against `cwd`.
    pub fn initial_buffer(&self, cwd: &Path, home: Option<&Path>) -> String {
        let document = self.args.from.as_ref().map(|doc| cwd.join(doc));
        paths::initial_buffer(document.as_deref(), &self.config.project.folders, home)
    }

    /// Apply CLI arguments to configuration
    ///
    /// Overrides configuration values with CLI arguments where provided
    ///
    /// # Arguments
    /// * `config` - Configuration to modify
    fn apply_args_to_config(config: &mut Config, args: &CliArgs) {
        Self::apply_prompt_args(config, args);
        Self::apply_logging_args(config, args);

        if args.no_open {
            config.open.enabled = false;
        }

        if !args.projects.is_empty() {
            let mut folders = args.projects.clone();
            folders.append(&mut config.project.folders);
            config.project.folders = folders;
        }
    }

    /// Apply prompt-related CLI arguments to configuration
    fn apply_prompt_args(config: &mut Config, args: &CliArgs) {
        if let Some(caption) = &args.caption {
            config.prompt.caption = caption.clone();
        }

        if args.no_color {
            config.prompt.color = false;
        }
    }

    /// Apply logging-related CLI arguments to configuration
    fn apply_logging_args(config: &mut Config, args: &CliArgs) {
        config.logging.level = if args.very_verbose {
            LogLevel::Trace
        } else if args.verbose {
            LogLevel::Debug
        } else if args.quiet {
            LogLevel::Error
        } else {
            config.logging.level
        };
    }

    /// Handle informational subcommands
    ///
    /// # Returns
    /// * `Result<bool>` - True if subcommand was handled, false to continue
    pub fn handle_subcommand(&self) -> Result<bool> {
        match &self.args.command {
            Some(Commands::Version) => {
                self.show_version();
                Ok(true)
            }
            Some(Commands::Completion { shell }) => {
                completion::generate_completion(shell, &mut io::stdout())?;
                Ok(true)
            }
            Some(Commands::Config { show, validate }) => {
                self.handle_config_command(*show, *validate)?;
                Ok(true)
            }
            Some(Commands::Create { .. }) | None => Ok(false),
        }
    }

    /// Show version information
    fn show_version(&self) {
        println!("quicknew version {}", env!("CARGO_PKG_VERSION"));
    }

    /// Handle `config` subcommand
    fn handle_config_command(&self, show: bool, validate: bool) -> Result<()> {
        if validate {
            let path = self
                .args
                .config_file
                .clone()
                .unwrap_or_else(Config::default_path);
            Config::load_from_file(Some(path.as_path()))?.validate()?;
            println!("Configuration is valid: {}", path.display());
        }

        if show || !validate {
            print!("{}", self.config.to_toml_string()?);
        }

        Ok(())
    }
}
