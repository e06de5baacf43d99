//! Parse options.
//!
//! Options can be built in code with the `with_*` methods or read from the
//! `[directive]` table of a TOML file:
//!
//! ```toml
//! [directive]
//! leaf = true
//! text = true
//! leaf_group = "labels"
//! max_indent = 2
//! trace = false
//! ```

use std::path::{Path, PathBuf};

use serde::Deserialize;

/// Largest indent allowed in front of a leaf directive.
const MAX_INDENT_LIMIT: usize = 3;

/// How the parenthesized group of a leaf directive is read.
///
/// The two forms are exclusive: a tokenizer reads `(...)` either as
/// [`Args`](Self::Args) or as [`Labels`](Self::Labels), never both.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ParenGroup {
    /// Keyed or positional values: `(a, key="value")`.
    #[default]
    Args,
    /// Plain positional labels: `(first, "second one")`.
    Labels,
}

/// Options for [`tokenize`](crate::tokenize) and friends.
#[derive(Clone, Debug, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct ParseOptions {
    /// Recognize `@@name` leaf directives at the start of a line.
    pub leaf: bool,
    /// Recognize `@name` text directives anywhere in a line.
    pub text: bool,
    /// Reading of `(...)` in leaf directives.
    pub leaf_group: ParenGroup,
    /// Columns of indentation allowed in front of a leaf directive.
    pub max_indent: usize,
    /// Emit `tracing` records for attempts and quoted values.
    pub trace: bool,
}

impl Default for ParseOptions {
    fn default() -> Self {
        Self {
            leaf: true,
            text: true,
            leaf_group: ParenGroup::Args,
            max_indent: MAX_INDENT_LIMIT,
            trace: false,
        }
    }
}

/// File layout: options live under `[directive]`.
#[derive(Debug, Default, Deserialize)]
#[serde(default)]
struct ConfigFile {
    directive: ParseOptions,
}

impl ParseOptions {
    /// Create options with default values.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Enable or disable leaf directives.
    #[must_use]
    pub fn with_leaf(mut self, enabled: bool) -> Self {
        self.leaf = enabled;
        self
    }

    /// Enable or disable text directives.
    #[must_use]
    pub fn with_text(mut self, enabled: bool) -> Self {
        self.text = enabled;
        self
    }

    /// Set how leaf directives read `(...)`.
    #[must_use]
    pub fn with_leaf_group(mut self, group: ParenGroup) -> Self {
        self.leaf_group = group;
        self
    }

    /// Set the indentation allowed before a leaf directive.
    #[must_use]
    pub fn with_max_indent(mut self, max_indent: usize) -> Self {
        self.max_indent = max_indent;
        self
    }

    /// Enable or disable tokenizer tracing.
    #[must_use]
    pub fn with_trace(mut self, trace: bool) -> Self {
        self.trace = trace;
        self
    }

    /// Parse options from TOML text.
    ///
    /// A missing `[directive]` table yields the defaults.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::Parse`] for invalid TOML and
    /// [`ConfigError::Validation`] for out-of-range values.
    pub fn from_toml_str(content: &str) -> Result<Self, ConfigError> {
        let file: ConfigFile = toml::from_str(content)?;
        file.directive.validate()?;
        Ok(file.directive)
    }

    /// Load options from a TOML file.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::NotFound`] if the file doesn't exist, or any
    /// error from [`from_toml_str`](Self::from_toml_str).
    pub fn load(path: &Path) -> Result<Self, ConfigError> {
        if !path.exists() {
            return Err(ConfigError::NotFound(path.to_path_buf()));
        }
        let content = std::fs::read_to_string(path)?;
        Self::from_toml_str(&content)
    }

    /// Check that all values are in range.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::Validation`] if `max_indent` exceeds 3.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.max_indent > MAX_INDENT_LIMIT {
            return Err(ConfigError::Validation(format!(
                "directive.max_indent must be at most {MAX_INDENT_LIMIT}, got {}",
                self.max_indent
            )));
        }
        Ok(())
    }
}

/// Configuration error.
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    /// File not found.
    #[error("Configuration file not found: {}", .0.display())]
    NotFound(PathBuf),
    /// I/O error.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
    /// TOML parsing error.
    #[error("TOML parse error: {0}")]
    Parse(#[from] toml::de::Error),
    /// Validation error.
    #[error("Invalid configuration: {0}")]
    Validation(String),
}
