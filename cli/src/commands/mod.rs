//! Command implementations for the studyhub CLI.
//!
//! Each command module provides:
//! - Args struct for clap argument parsing
//! - execute() function that performs the command
//! - Human-readable and JSON output formatting

pub mod add;
pub mod delete;
pub mod list;
pub mod update;

use anyhow::Result;
use clap::ValueEnum;
use colored::Colorize;
use serde::{Deserialize, Serialize};

use studyhub_core::ResourceKind;

/// Common error type for HTTP requests and pre-flight checks.
#[derive(Debug, thiserror::Error)]
pub enum CliError {
    #[error("HTTP request failed: {0}")]
    Http(#[from] reqwest::Error),

    #[error("Server error ({status}): {message}")]
    Server { status: u16, message: String },

    #[error("{field} is required")]
    MissingField { field: &'static str },
}

/// Resource collection selector for command arguments.
#[derive(Debug, Clone, Copy, ValueEnum)]
pub enum Kind {
    Notes,
    Videos,
    Tools,
}

impl Kind {
    /// The core resource kind this selector names.
    pub fn resource(self) -> ResourceKind {
        match self {
            Self::Notes => ResourceKind::Note,
            Self::Videos => ResourceKind::Video,
            Self::Tools => ResourceKind::Tool,
        }
    }
}

/// Build the HTTP client shared by all commands.
pub fn build_client() -> reqwest::Client {
    reqwest::Client::new()
}

/// Print output in JSON or human-readable format.
pub fn output<T: Serialize + HumanReadable>(value: &T, human: bool) -> Result<()> {
    if human {
        value.print_human();
    } else {
        println!("{}", serde_json::to_string_pretty(value)?);
    }
    Ok(())
}

/// Trait for types that can be printed in human-readable format.
pub trait HumanReadable {
    fn print_human(&self);
}

/// Response from updating or deleting a record.
#[derive(Debug, Deserialize, Serialize)]
pub struct MessageResponse {
    pub message: String,
}

impl HumanReadable for MessageResponse {
    fn print_human(&self) {
        println!("{}", self.message.green().bold());
    }
}

/// Make an HTTP request and handle common error cases.
pub async fn make_request<T: serde::de::DeserializeOwned>(
    request: reqwest::RequestBuilder,
) -> Result<T, CliError> {
    let response = request.send().await?;
    let status = response.status();

    if status.is_success() {
        Ok(response.json::<T>().await?)
    } else {
        let body = response.text().await.unwrap_or_default();

        // Error bodies are {message, error}; fall back to the raw text.
        let message = serde_json::from_str::<serde_json::Value>(&body)
            .ok()
            .and_then(|json| {
                json.get("message")
                    .and_then(|v| v.as_str())
                    .map(String::from)
            })
            .unwrap_or(body);

        Err(CliError::Server {
            status: status.as_u16(),
            message,
        })
    }
}

/// Reject blank values the way the web form does, before any request is
/// issued.
pub fn require_present(field: &'static str, value: &str) -> Result<String, CliError> {
    let trimmed = value.trim();
    if trimmed.is_empty() {
        Err(CliError::MissingField { field })
    } else {
        Ok(trimmed.to_string())
    }
}

/// Truncate a string for display, adding ellipsis if needed.
pub fn truncate(s: &str, max_len: usize) -> String {
    if s.len() <= max_len {
        s.to_string()
    } else {
        format!("{}...", &s[..max_len.saturating_sub(3)])
    }
}
