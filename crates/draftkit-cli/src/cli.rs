//! CLI argument parsing and command definitions.
//!
//! Every command that reads content takes an input path, where `-` means
//! standard input.

use clap::{Parser, Subcommand, ValueEnum};
use draftkit_core::ThemeId;
use draftkit_forms::Mode;

// ============================================================================
// CLI argument types
// ============================================================================

/// Top-level CLI arguments.
#[derive(Parser, Debug)]
#[command(name = "draftkit", author, about, long_about = None)]
pub struct CliArgs {
    /// Path to configuration file.
    #[arg(short, long, env = "DRAFTKIT_CONFIG", global = true)]
    pub config: Option<String>,

    /// Enable verbose output.
    #[arg(short, long, global = true)]
    pub verbose: bool,

    /// Suppress non-essential output.
    #[arg(short, long, global = true)]
    pub quiet: bool,

    /// Print JSON on a single line.
    #[arg(long, global = true)]
    pub compact: bool,

    /// Subcommand to execute.
    #[command(subcommand)]
    pub command: Option<Command>,
}

/// Top-level commands.
#[derive(Subcommand, Debug)]
pub enum Command {
    /// Print version information.
    Version,

    /// Configuration operations.
    Config(ConfigCommand),

    /// Draft operations.
    Draft(DraftCommand),

    /// Signup/login form operations.
    Form(FormCommand),

    /// Section title operations.
    Titles(TitlesCommand),

    /// Category taxonomy operations.
    Taxonomy(TaxonomyCommand),

    /// List the content themes.
    Themes,
}

// ============================================================================
// Config
// ============================================================================

/// Config-specific subcommands.
#[derive(Parser, Debug)]
pub struct ConfigCommand {
    /// Config subcommand to execute.
    #[command(subcommand)]
    pub command: ConfigAction,
}

/// Available config subcommands.
#[derive(Subcommand, Debug)]
pub enum ConfigAction {
    /// Show the resolved config file path.
    Path,

    /// Get a configuration value by dotted key.
    Get {
        /// Dotted key (e.g., "draft.timezone").
        key: String,
    },

    /// Set a configuration value by dotted key.
    Set {
        /// Dotted key (e.g., "draft.timezone").
        key: String,

        /// Value to set.
        value: String,
    },

    /// Create a default configuration file.
    Init {
        /// Output file path (defaults to XDG config path).
        #[arg(short, long)]
        file: Option<String>,

        /// Overwrite existing file.
        #[arg(long)]
        force: bool,
    },

    /// Export configuration as environment variables.
    Export {
        /// Format as Docker --env flags.
        #[arg(long)]
        docker_env: bool,
    },
}

// ============================================================================
// Draft
// ============================================================================

/// Draft-specific subcommands.
#[derive(Parser, Debug)]
pub struct DraftCommand {
    /// Draft subcommand to execute.
    #[command(subcommand)]
    pub command: DraftAction,
}

/// Available draft subcommands.
#[derive(Subcommand, Debug)]
pub enum DraftAction {
    /// Split pasted text into its JSON objects.
    Split {
        /// Input file, or `-` for stdin.
        #[arg(default_value = "-")]
        input: String,
    },

    /// Load every pasted draft and print a summary of each.
    Parse {
        /// Input file, or `-` for stdin.
        #[arg(default_value = "-")]
        input: String,
    },

    /// Load every pasted draft and print submission payloads.
    Payload {
        /// Input file, or `-` for stdin.
        #[arg(default_value = "-")]
        input: String,
    },

    /// Print an empty draft for a theme.
    New {
        /// Theme id.
        #[arg(short, long, value_enum, default_value = "policy")]
        theme: ThemeArg,
    },

    /// Parse pipe-delimited source lines.
    Sources {
        /// Input file, or `-` for stdin.
        #[arg(default_value = "-")]
        input: String,
    },
}

// ============================================================================
// Form
// ============================================================================

/// Form-specific subcommands.
#[derive(Parser, Debug)]
pub struct FormCommand {
    /// Form subcommand to execute.
    #[command(subcommand)]
    pub command: FormAction,
}

/// Available form subcommands.
#[derive(Subcommand, Debug)]
pub enum FormAction {
    /// Print the default form config.
    Default,

    /// Normalize a stored form document.
    Normalize {
        /// Input file, or `-` for stdin.
        #[arg(default_value = "-")]
        input: String,
    },

    /// Normalize then validate a form document for saving.
    Validate {
        /// Input file, or `-` for stdin.
        #[arg(default_value = "-")]
        input: String,
    },

    /// Check submitted values against a form config.
    Check {
        /// Screen the values were submitted from.
        #[arg(short, long, value_enum, default_value = "register")]
        mode: ModeArg,

        /// Form config file.
        form: String,

        /// JSON object of field id to value, or `-` for stdin.
        #[arg(default_value = "-")]
        values: String,
    },
}

// ============================================================================
// Titles
// ============================================================================

/// Section title subcommands.
#[derive(Parser, Debug)]
pub struct TitlesCommand {
    /// Titles subcommand to execute.
    #[command(subcommand)]
    pub command: TitlesAction,
}

/// Available titles subcommands.
#[derive(Subcommand, Debug)]
pub enum TitlesAction {
    /// Merge stored overrides onto the default titles.
    Merge {
        /// Overrides file, or `-` for stdin. Defaults only when omitted.
        overrides: Option<String>,
    },

    /// Resolve one title by dotted path.
    Get {
        /// Dotted path (e.g., "general.easySummary.title").
        path: String,

        /// Overrides file to merge first.
        #[arg(short, long)]
        overrides: Option<String>,
    },

    /// Set one title in an overrides file, creating it if needed.
    Set {
        /// Overrides file.
        overrides: String,

        /// Dotted path (e.g., "themes.health.guide").
        path: String,

        /// New title.
        value: String,
    },

    /// List editable title paths.
    Paths {
        /// Print the grouped editor layout instead of bare paths.
        #[arg(long)]
        groups: bool,
    },
}

// ============================================================================
// Taxonomy
// ============================================================================

/// Taxonomy subcommands.
#[derive(Parser, Debug)]
pub struct TaxonomyCommand {
    /// Taxonomy subcommand to execute.
    #[command(subcommand)]
    pub command: TaxonomyAction,
}

/// Available taxonomy subcommands.
#[derive(Subcommand, Debug)]
pub enum TaxonomyAction {
    /// Print the category tree of a theme.
    List {
        /// Theme id.
        #[arg(short, long, value_enum, default_value = "policy")]
        theme: ThemeArg,
    },

    /// Resolve a category pair against a theme's taxonomy.
    Resolve {
        /// Theme id.
        #[arg(short, long, value_enum, default_value = "policy")]
        theme: ThemeArg,

        /// Category.
        category: String,

        /// Subcategory.
        #[arg(default_value = "")]
        subcategory: String,
    },
}

// ============================================================================
// Value enums
// ============================================================================

/// Theme ids accepted on the command line.
#[derive(Clone, Copy, Debug, PartialEq, Eq, ValueEnum)]
pub enum ThemeArg {
    Policy,
    Parenting,
    Lifestyle,
    Health,
    Stocks,
    Support,
    Ai,
    Groupbuy,
}

impl From<ThemeArg> for ThemeId {
    fn from(arg: ThemeArg) -> Self {
        match arg {
            ThemeArg::Policy => ThemeId::Policy,
            ThemeArg::Parenting => ThemeId::Parenting,
            ThemeArg::Lifestyle => ThemeId::Lifestyle,
            ThemeArg::Health => ThemeId::Health,
            ThemeArg::Stocks => ThemeId::Stocks,
            ThemeArg::Support => ThemeId::Support,
            ThemeArg::Ai => ThemeId::Ai,
            ThemeArg::Groupbuy => ThemeId::Groupbuy,
        }
    }
}

/// Form screens accepted on the command line.
#[derive(Clone, Copy, Debug, PartialEq, Eq, ValueEnum)]
pub enum ModeArg {
    Login,
    Register,
}

impl From<ModeArg> for Mode {
    fn from(arg: ModeArg) -> Self {
        match arg {
            ModeArg::Login => Mode::Login,
            ModeArg::Register => Mode::Register,
        }
    }
}

// ============================================================================
// Tests
// ============================================================================
