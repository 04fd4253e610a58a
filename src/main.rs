use std::io;
use std::path::PathBuf;

use anyhow::{Context, Result, bail};
use clap::{Args, Parser, Subcommand};
use log::info;

use clinical_severity::app::render_form;
use clinical_severity::utils::logging::init_logging;
use clinical_severity::{Event, FrontEnd, FrontEndConfig, InputForm, Reply};

/// Classify clinical severity from a handful of measurements
#[derive(Debug, Parser)]
#[command(name = "clinical-severity", version, about)]
struct Cli {
    #[command(flatten)]
    options: GlobalOptions,

    #[command(subcommand)]
    command: Command,
}

#[derive(Debug, Args)]
struct GlobalOptions {
    /// JSON configuration file
    #[arg(long, global = true)]
    config: Option<PathBuf>,

    /// Built-in schema name or path to a JSON schema
    #[arg(long, global = true)]
    schema: Option<String>,

    /// Classifier artifact (JSON)
    #[arg(long, global = true)]
    model: Option<PathBuf>,

    /// Scaler artifact (JSON)
    #[arg(long, global = true)]
    scaler: Option<PathBuf>,

    /// Pass inputs containing zeros to the model instead of rejecting them
    #[arg(long, global = true)]
    accept_zero: bool,
}

#[derive(Debug, Subcommand)]
enum Command {
    /// Print the form with its bounds and help text
    Describe,
    /// Print the resolved schema as JSON
    Schema,
    /// Classify once; unspecified measurements keep their defaults
    Predict {
        /// Measurement as feature=value, repeatable
        #[arg(long = "set", value_name = "FEATURE=VALUE")]
        values: Vec<String>,
    },
    /// Read commands from stdin until `quit`
    Interactive,
}

impl GlobalOptions {
    /// Configuration file values, overridden by command-line flags
    fn into_config(self) -> Result<FrontEndConfig> {
        let config = match &self.config {
            Some(path) => FrontEndConfig::from_file(path)
                .with_context(|| format!("Failed to load configuration {}", path.display()))?,
            None => FrontEndConfig::default(),
        };

        Ok(config.with_overrides(
            self.schema.as_deref(),
            self.model,
            self.scaler,
            self.accept_zero,
        ))
    }
}

fn main() -> Result<()> {
    // Setup logging
    init_logging("info");

    let cli = Cli::parse();
    let config = cli.options.into_config()?;

    match cli.command {
        Command::Describe => {
            let schema = config.resolve_schema().context("Failed to resolve schema")?;
            println!("{}", render_form(&schema, &InputForm::from_schema(&schema)));
        }
        Command::Schema => {
            let schema = config.resolve_schema().context("Failed to resolve schema")?;
            println!("{}", schema.to_json()?);
        }
        Command::Predict { values } => {
            let mut front_end =
                FrontEnd::from_config(&config).context("Failed to start the classifier")?;
            for assignment in &values {
                let Event::Set { feature, value } = Event::parse(assignment)? else {
                    bail!("Expected FEATURE=VALUE, got '{assignment}'");
                };
                let stored = front_end.form_mut().set(&feature, value)?;
                if stored != value {
                    info!("{feature} adjusted from {value} to {stored}");
                }
            }

            if let Reply::Prediction { message, .. } = front_end.predict()? {
                println!("{message}");
            }
        }
        Command::Interactive => {
            let mut front_end =
                FrontEnd::from_config(&config).context("Failed to start the classifier")?;
            let stdin = io::stdin();
            front_end.run(stdin.lock(), io::stdout().lock())?;
        }
    }

    Ok(())
}
