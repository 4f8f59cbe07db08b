//! Recorded command/output pairs from a non-interactive run.

use super::interpreter::Interpreter;
use crate::error::ApiError;
use crate::store::NamespaceStore;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TranscriptEntry {
    pub command: String,
    pub output: Vec<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Transcript {
    pub entries: Vec<TranscriptEntry>,
}

impl Transcript {
    /// Run every line through `interpreter`, recording what each one printed.
    pub fn record<S, I>(interpreter: &mut Interpreter<S>, lines: I) -> Self
    where
        S: NamespaceStore,
        I: IntoIterator,
        I::Item: AsRef<str>,
    {
        let entries = lines
            .into_iter()
            .map(|line| {
                let command = line.as_ref().trim().to_string();
                let output = interpreter.execute(&command);
                TranscriptEntry { command, output }
            })
            .collect();
        Self { entries }
    }

    /// Render as the reference terminal did: `> command` followed by output.
    pub fn to_text(&self) -> String {
        let mut out = String::new();
        for entry in &self.entries {
            out.push_str(&format!("> {}\n", entry.command));
            for line in &entry.output {
                out.push_str(line);
                out.push('\n');
            }
        }
        out
    }

    pub fn to_json(&self) -> Result<String, ApiError> {
        Ok(serde_json::to_string_pretty(self)?)
    }
}
