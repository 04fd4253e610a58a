//! Front-end events and their text syntax

use std::str::FromStr;

use crate::error::{Error, Result};

/// Help text listing every command
pub const COMMANDS: &str = "\
Commands:
  set <feature> <value>   adjust a measurement (also: <feature>=<value>)
  reset                   restore every measurement to its default
  show                    display the form
  ranges                  list the reference ranges per severity band
  predict                 classify the current measurements
  help                    show this list
  quit                    leave";

/// Something the user did
#[derive(Debug, Clone, PartialEq)]
pub enum Event {
    Set { feature: String, value: f64 },
    Reset,
    Show,
    Ranges,
    Predict,
    Help,
    Quit,
}

impl Event {
    /// Parse one command line
    pub fn parse(line: &str) -> Result<Self> {
        let line = line.trim();
        if line.is_empty() {
            return Err(Error::Command("empty command".to_string()));
        }

        if let Some((feature, value)) = line.split_once('=') {
            let feature = feature.trim();
            let feature = match feature.split_once(char::is_whitespace) {
                Some((command, rest)) if command.eq_ignore_ascii_case("set") => rest,
                _ => feature,
            };
            return Self::set(feature, value);
        }

        let (command, rest) = line
            .split_once(char::is_whitespace)
            .map_or((line, ""), |(c, r)| (c, r.trim()));

        match command.to_ascii_lowercase().as_str() {
            "set" => {
                let (feature, value) = rest.rsplit_once(char::is_whitespace).ok_or_else(|| {
                    Error::Command("usage: set <feature> <value>".to_string())
                })?;
                Self::set(feature, value)
            }
            "reset" => Ok(Self::Reset),
            "show" => Ok(Self::Show),
            "ranges" => Ok(Self::Ranges),
            "predict" => Ok(Self::Predict),
            "help" | "?" => Ok(Self::Help),
            "quit" | "exit" => Ok(Self::Quit),
            other => Err(Error::Command(format!(
                "unknown command '{other}', type 'help' for a list"
            ))),
        }
    }

    fn set(feature: &str, value: &str) -> Result<Self> {
        let feature = feature.trim();
        if feature.is_empty() {
            return Err(Error::Command("missing feature name".to_string()));
        }
        let value = value.trim();
        let value = value
            .parse::<f64>()
            .map_err(|_| Error::InvalidValue(format!("'{value}' is not a number")))?;
        Ok(Self::Set {
            feature: feature.to_string(),
            value,
        })
    }
}

impl FromStr for Event {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        Self::parse(s)
    }
}
