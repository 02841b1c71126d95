use crate::console::record::{Line, Record};
use crate::error::{ConsoleError, DecodeError};
use crate::utils::decode::{decode_frame, Decoded};
use crate::utils::fallback::FallbackDecoder;
use crate::utils::frame::Frame;
use log::warn;
use serde_derive::Serialize;

#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub enum OutputFormat {
    Text,
    Json,
}

#[derive(Serialize)]
struct JsonRecord<'a> {
    #[serde(flatten)]
    record: &'a Record,
    #[serde(skip_serializing_if = "Option::is_none")]
    description: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    error: Option<String>,
}

#[derive(Serialize)]
struct JsonPassthrough<'a> {
    passthrough: &'a str,
}

/// Turns tokenized lines into output lines
pub struct Decorator {
    fallback: Box<dyn FallbackDecoder + Send>,
    format: OutputFormat,
}

impl Decorator {
    pub fn new(fallback: Box<dyn FallbackDecoder + Send>, format: OutputFormat) -> Decorator {
        Decorator { fallback, format }
    }

    pub fn describe(&self, record: &Record) -> Result<Decoded, DecodeError> {
        let frame = Frame::from_hex(&record.frame)?;
        decode_frame(&frame, self.fallback.as_ref())
    }

    pub fn decorate(&self, record: &Record) -> Result<String, ConsoleError> {
        let description = self.describe(record);
        if let Err(e) = &description {
            warn!("Failed to decode '{}': {}", record.frame, e);
        }
        match self.format {
            OutputFormat::Text => {
                let description = match description {
                    Ok(d) => d.to_string(),
                    Err(e) => format!("Decode error: {}", e),
                };
                Ok(format!(
                    "{} {:<6} {} {:<1} {:<4} # {}",
                    record.state,
                    record.frame,
                    record.addressing,
                    record.direction.unwrap_or(' '),
                    record.output,
                    description
                ))
            }
            OutputFormat::Json => {
                let (description, error) = match description {
                    Ok(d) => (Some(d.to_string()), None),
                    Err(e) => (None, Some(e.to_string())),
                };
                Ok(serde_json::to_string(&JsonRecord {
                    record,
                    description,
                    error,
                })?)
            }
        }
    }

    /// Output for one line, `None` if nothing should be printed
    pub fn render(&self, line: &Line) -> Result<Option<String>, ConsoleError> {
        match line {
            Line::Record(record) => self.decorate(record).map(Some),
            Line::Noise => Ok(None),
            Line::Passthrough(text) => match self.format {
                OutputFormat::Text => Ok(Some(text.clone())),
                OutputFormat::Json => Ok(Some(serde_json::to_string(&JsonPassthrough {
                    passthrough: text,
                })?)),
            },
        }
    }
}
