//! The interactive front-end
//!
//! Input collection and classification are decoupled: editing a control only
//! touches the form, and the model is consulted solely on [`Event::Predict`].

use std::io::{BufRead, Write};

use crate::classify::{Prediction, classify_with_policy};
use crate::config::{CompletenessPolicy, FrontEndConfig};
use crate::error::{Error, Result};
use crate::input::InputForm;
use crate::model::ModelArtifacts;
use crate::schema::{FormSchema, RangeTable};

pub mod event;

pub use event::{COMMANDS, Event};

/// Response to an event
#[derive(Debug, Clone, PartialEq)]
pub enum Reply {
    /// Text to show the user
    Text(String),
    /// The prediction together with its rendered message
    Prediction { prediction: Prediction, message: String },
    /// The session is over
    Quit,
}

impl Reply {
    /// The text to display, if any
    #[must_use]
    pub fn text(&self) -> Option<&str> {
        match self {
            Self::Text(text) | Self::Prediction { message: text, .. } => Some(text.as_str()),
            Self::Quit => None,
        }
    }
}

/// A schema, its form state and the loaded artifacts
#[derive(Debug)]
pub struct FrontEnd {
    schema: FormSchema,
    form: InputForm,
    models: ModelArtifacts,
    policy: CompletenessPolicy,
}

impl FrontEnd {
    /// Assemble a front-end, failing if the artifacts do not fit the schema
    pub fn new(
        schema: FormSchema,
        models: ModelArtifacts,
        policy: CompletenessPolicy,
    ) -> Result<Self> {
        schema.validate()?;
        models.check_schema(&schema)?;
        let form = InputForm::from_schema(&schema);
        Ok(Self {
            schema,
            form,
            models,
            policy,
        })
    }

    /// Resolve the schema and load the artifacts named by `config`
    pub fn from_config(config: &FrontEndConfig) -> Result<Self> {
        let schema = config.resolve_schema()?;
        let models = ModelArtifacts::load(&config.artifact_paths(&schema))?;
        log::info!(
            "Front-end ready: schema '{}' with {} features",
            schema.name,
            schema.feature_count()
        );
        Self::new(schema, models, config.completeness)
    }

    #[must_use]
    pub fn schema(&self) -> &FormSchema {
        &self.schema
    }

    #[must_use]
    pub fn form(&self) -> &InputForm {
        &self.form
    }

    pub fn form_mut(&mut self) -> &mut InputForm {
        &mut self.form
    }

    /// Title, subtitle and every control with its help text
    #[must_use]
    pub fn render_page(&self) -> String {
        render_form(&self.schema, &self.form)
    }

    /// Classify the current form contents
    pub fn predict(&self) -> Result<Reply> {
        let prediction = classify_with_policy(&self.models, &self.form.snapshot(), self.policy)?;
        Ok(Reply::Prediction {
            prediction,
            message: prediction.message(&self.schema.outcome),
        })
    }

    /// Apply one event
    pub fn handle(&mut self, event: Event) -> Result<Reply> {
        match event {
            Event::Set { feature, value } => {
                let stored = self.form.set(&feature, value)?;
                let control = self
                    .form
                    .control(&feature)
                    .ok_or_else(|| Error::UnknownFeature(feature.clone()))?;
                Ok(Reply::Text(format!(
                    "{} = {}",
                    control.spec().display_label(),
                    if stored == value {
                        control.display_value()
                    } else {
                        format!("{} (adjusted from {value})", control.display_value())
                    }
                )))
            }
            Event::Reset => {
                self.form.reset();
                Ok(Reply::Text("All measurements reset to defaults".to_string()))
            }
            Event::Show => Ok(Reply::Text(self.render_page())),
            Event::Ranges => Ok(Reply::Text(render_ranges(&self.schema.range_table()))),
            Event::Predict => self.predict(),
            Event::Help => Ok(Reply::Text(COMMANDS.to_string())),
            Event::Quit => Ok(Reply::Quit),
        }
    }

    /// Line-oriented session: one command per line until `quit` or end of input
    ///
    /// Command and prediction errors are reported and the session continues.
    pub fn run<R: BufRead, W: Write>(&mut self, input: R, mut output: W) -> Result<()> {
        let io_err = |e: std::io::Error| Error::io("<terminal>", e);

        writeln!(output, "{}", self.render_page()).map_err(io_err)?;
        writeln!(output, "\nType 'help' for commands.").map_err(io_err)?;

        for line in input.lines() {
            let line = line.map_err(io_err)?;
            if line.trim().is_empty() {
                continue;
            }

            match Event::parse(&line).and_then(|event| self.handle(event)) {
                Ok(Reply::Quit) => break,
                Ok(reply) => {
                    if let Some(text) = reply.text() {
                        writeln!(output, "{text}").map_err(io_err)?;
                    }
                }
                Err(e) => {
                    log::debug!("Command '{}' failed: {e}", line.trim());
                    writeln!(output, "Error: {e}").map_err(io_err)?;
                }
            }
        }
        Ok(())
    }
}

/// Render a schema's page for the current form values
#[must_use]
pub fn render_form(schema: &FormSchema, form: &InputForm) -> String {
    let mut page = format!(
        "{}\n{}\n{}\n",
        schema.title,
        "=".repeat(schema.title.chars().count()),
        schema.subtitle
    );
    for control in form.controls() {
        page.push('\n');
        page.push_str(&control.describe());
    }
    page
}

/// Render the reference ranges, one measurement per line
#[must_use]
pub fn render_ranges(table: &RangeTable) -> String {
    if table.is_empty() {
        return "No reference ranges defined".to_string();
    }
    let mut text = "Reference ranges:".to_string();
    for (name, bands) in table.iter() {
        text.push_str(&format!("\n  {name}: {}", bands.help_text()));
    }
    text
}
