//! The `draftkit` application.
//!
//! [`DraftkitCli`] owns the loaded configuration and dispatches parsed
//! arguments to the handler modules. Handlers compute values and this
//! module prints them.

use std::path::Path;

use draftkit_core::Result;
use draftkit_forms::{create_default_form_config, normalize_form_config};
use serde::Serialize;
use tracing_subscriber::EnvFilter;

use crate::cli::{CliArgs, Command, DraftAction, FormAction, TaxonomyAction, TitlesAction};
use crate::config::DraftkitConfig;
use crate::io::{read_input, read_json, render};
use crate::{config_handlers, draft_handlers, form_handlers, taxonomy_handlers, titles_handlers};

// ============================================================================
// DraftkitCli
// ============================================================================

/// The CLI application.
pub struct DraftkitCli {
    name: String,
    config: DraftkitConfig,
    version: String,
}

impl DraftkitCli {
    /// Create from CLI args, loading config from file/env.
    pub fn from_args(name: impl Into<String>, args: &CliArgs) -> Result<Self> {
        let config = DraftkitConfig::load(args.config.as_deref())?;
        Ok(Self::new(name, config))
    }

    pub fn new(name: impl Into<String>, config: DraftkitConfig) -> Self {
        Self {
            name: name.into(),
            config,
            version: env!("CARGO_PKG_VERSION").to_string(),
        }
    }

    /// Override the version string.
    pub fn with_version(mut self, version: impl Into<String>) -> Self {
        self.version = version.into();
        self
    }

    pub fn config(&self) -> &DraftkitConfig {
        &self.config
    }

    /// Initialise tracing-based logging.
    ///
    /// Uses `RUST_LOG` if set, otherwise a level from the verbosity flags.
    /// Library crates log through `log`, which the subscriber picks up.
    pub fn init_logging(&self, verbose: bool, quiet: bool) {
        let filter = if std::env::var("RUST_LOG").is_ok() {
            EnvFilter::from_default_env()
        } else if quiet {
            EnvFilter::new("warn")
        } else if verbose {
            EnvFilter::new("debug")
        } else {
            EnvFilter::new("info")
        };

        // A subscriber may already be set, e.g. in tests.
        let _ = tracing_subscriber::fmt()
            .with_env_filter(filter)
            .with_writer(std::io::stderr)
            .try_init();
    }

    /// Run the CLI with the given arguments.
    pub fn run(&self, args: CliArgs) -> Result<()> {
        self.init_logging(args.verbose, args.quiet);
        let out = Output {
            pretty: self.config.output.pretty && !args.compact,
        };

        match args.command {
            Some(Command::Version) => {
                println!("{} {}", self.config.project_name, self.version);
                Ok(())
            }
            Some(Command::Config(cmd)) => {
                config_handlers::handle_config_command(args.config.as_deref(), cmd.command)
            }
            Some(Command::Draft(cmd)) => self.handle_draft(cmd.command, out),
            Some(Command::Form(cmd)) => self.handle_form(cmd.command, out),
            Some(Command::Titles(cmd)) => self.handle_titles(cmd.command, out),
            Some(Command::Taxonomy(cmd)) => self.handle_taxonomy(cmd.command, out),
            Some(Command::Themes) => out.print(&taxonomy_handlers::themes()),
            None => {
                println!("{} {} (use --help for usage)", self.name, self.version);
                Ok(())
            }
        }
    }

    fn handle_draft(&self, action: DraftAction, out: Output) -> Result<()> {
        match action {
            DraftAction::Split { input } => {
                for object in draft_handlers::split(&read_input(&input)?)? {
                    println!("{object}");
                }
                Ok(())
            }
            DraftAction::Parse { input } => {
                let loader = self.config.loader()?;
                out.print(&draft_handlers::parse(&loader, &read_input(&input)?)?)
            }
            DraftAction::Payload { input } => {
                let loader = self.config.loader()?;
                out.print(&draft_handlers::payloads(&loader, &read_input(&input)?)?)
            }
            DraftAction::New { theme } => {
                let loader = self.config.loader()?;
                out.print(&draft_handlers::new_draft(&loader, theme.into()))
            }
            DraftAction::Sources { input } => {
                out.print(&draft_handlers::sources(&read_input(&input)?))
            }
        }
    }

    fn handle_form(&self, action: FormAction, out: Output) -> Result<()> {
        match action {
            FormAction::Default => out.print(&create_default_form_config()),
            FormAction::Normalize { input } => {
                out.print(&normalize_form_config(&read_json(&input)?))
            }
            FormAction::Validate { input } => {
                out.print(&form_handlers::validate_document(&read_json(&input)?)?)
            }
            FormAction::Check { mode, form, values } => {
                form_handlers::check(&read_json(&form)?, mode.into(), &read_json(&values)?)?;
                println!("ok");
                Ok(())
            }
        }
    }

    fn handle_titles(&self, action: TitlesAction, out: Output) -> Result<()> {
        match action {
            TitlesAction::Merge { overrides } => {
                let overrides = overrides.as_deref().map(read_json).transpose()?;
                out.print(&titles_handlers::merge(overrides.as_ref()))
            }
            TitlesAction::Get { path, overrides } => {
                let overrides = overrides.as_deref().map(read_json).transpose()?;
                println!("{}", titles_handlers::get(&path, overrides.as_ref()));
                Ok(())
            }
            TitlesAction::Set {
                overrides,
                path,
                value,
            } => {
                titles_handlers::set(Path::new(&overrides), &path, &value, out.pretty)?;
                println!("Set {path} in {overrides}");
                Ok(())
            }
            TitlesAction::Paths { groups } => {
                let paths = titles_handlers::paths(groups)?;
                match paths.as_array() {
                    Some(list) if !groups => {
                        for path in list.iter().filter_map(|p| p.as_str()) {
                            println!("{path}");
                        }
                        Ok(())
                    }
                    _ => out.print(&paths),
                }
            }
        }
    }

    fn handle_taxonomy(&self, action: TaxonomyAction, out: Output) -> Result<()> {
        match action {
            TaxonomyAction::List { theme } => out.print(&taxonomy_handlers::list(theme.into())),
            TaxonomyAction::Resolve {
                theme,
                category,
                subcategory,
            } => out.print(&taxonomy_handlers::resolve(
                theme.into(),
                &category,
                &subcategory,
            )),
        }
    }
}

/// Where command results go.
#[derive(Clone, Copy, Debug)]
struct Output {
    pretty: bool,
}

impl Output {
    fn print(&self, value: &impl Serialize) -> Result<()> {
        println!("{}", render(value, self.pretty)?);
        Ok(())
    }
}

// ============================================================================
// Tests
// ============================================================================
