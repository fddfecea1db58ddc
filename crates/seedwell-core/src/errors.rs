//! Structured error types for seeding and sampling.

use std::collections::BTreeMap;
use std::fmt::{self, Display};

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Structured payload attached to every [`RandError`] variant.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ErrorInfo {
    /// Stable machine readable error code.
    pub code: String,
    /// Human readable diagnostic message.
    pub message: String,
    /// Contextual key value pairs (bounds, word counts, etc.).
    #[serde(default)]
    pub context: BTreeMap<String, String>,
    /// Optional hint that may help the caller resolve the issue.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub hint: Option<String>,
}

impl ErrorInfo {
    /// Creates a new error payload with the provided code and message.
    pub fn new(code: impl Into<String>, message: impl Into<String>) -> Self {
        Self {
            code: code.into(),
            message: message.into(),
            context: BTreeMap::new(),
            hint: None,
        }
    }

    /// Adds a context entry to the payload.
    pub fn with_context(mut self, key: impl Into<String>, value: impl Into<String>) -> Self {
        self.context.insert(key.into(), value.into());
        self
    }

    /// Sets a human readable hint for remediation.
    pub fn with_hint(mut self, hint: impl Into<String>) -> Self {
        self.hint = Some(hint.into());
        self
    }
}

/// Canonical error type for seedwell.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, Error)]
#[serde(tag = "family", content = "detail")]
pub enum RandError {
    /// The entropy source could not produce a value.
    #[error("entropy unavailable: {0}")]
    EntropyUnavailable(ErrorInfo),
    /// A sampling range with `min > max` was requested.
    #[error("invalid range: {0}")]
    InvalidRange(ErrorInfo),
    /// Seed material violated its invariants.
    #[error("invalid seed: {0}")]
    InvalidSeed(ErrorInfo),
    /// Generator configuration was rejected.
    #[error("config error: {0}")]
    Config(ErrorInfo),
}

impl Display for ErrorInfo {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} (code: {})", self.message, self.code)?;
        if !self.context.is_empty() {
            write!(f, " | context: [")?;
            for (idx, (key, value)) in self.context.iter().enumerate() {
                if idx > 0 {
                    write!(f, ", ")?;
                }
                write!(f, "{key}={value}")?;
            }
            write!(f, "]")?;
        }
        if let Some(hint) = &self.hint {
            write!(f, " | hint: {hint}")?;
        }
        Ok(())
    }
}

impl RandError {
    /// Returns a reference to the payload describing the error.
    pub fn info(&self) -> &ErrorInfo {
        match self {
            RandError::EntropyUnavailable(info)
            | RandError::InvalidRange(info)
            | RandError::InvalidSeed(info)
            | RandError::Config(info) => info,
        }
    }

    /// Builds the error reported for a `min > max` range.
    pub(crate) fn invalid_range(min: impl Display, max: impl Display) -> Self {
        RandError::InvalidRange(
            ErrorInfo::new("min-exceeds-max", "range lower bound exceeds upper bound")
                .with_context("min", min.to_string())
                .with_context("max", max.to_string())
                .with_hint("pass the bounds as (min, max) with min <= max"),
        )
    }
}
