//! Template settings
//!
//! Delimiters and default parameter values loaded from a JSON or YAML
//! document.

use paramstring_domain::{Bindings, Delimiters};
use serde::{Deserialize, Serialize};

use crate::error::{ApplicationError, ApplicationResult};
use crate::placeholder::{ParseSession, Resolution};

/// How templates are parsed and which values they are resolved with.
///
/// ```json
/// {
///   "delimiters": ["{", "}"],
///   "parameters": { "Drive": "C:" }
/// }
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TemplateSettings {
    /// Markers bounding a placeholder.
    pub delimiters: Delimiters,

    /// Values bound to every template rendered with these settings.
    #[serde(default)]
    pub parameters: Bindings,
}

impl TemplateSettings {
    /// Creates settings with no parameters.
    #[must_use]
    pub fn new(delimiters: Delimiters) -> Self {
        Self {
            delimiters,
            parameters: Bindings::new(),
        }
    }

    /// Parses settings from JSON.
    ///
    /// # Errors
    ///
    /// Returns [`ApplicationError::Settings`] if the document is invalid,
    /// including invalid delimiter lists.
    pub fn from_json(document: &str) -> ApplicationResult<Self> {
        serde_json::from_str(document).map_err(|e| ApplicationError::Settings(e.to_string()))
    }

    /// Parses settings from YAML.
    ///
    /// # Errors
    ///
    /// Returns [`ApplicationError::Settings`] if the document is invalid,
    /// including invalid delimiter lists.
    pub fn from_yaml(document: &str) -> ApplicationResult<Self> {
        serde_yaml::from_str(document).map_err(|e| ApplicationError::Settings(e.to_string()))
    }

    /// Serializes the settings to pretty-printed JSON.
    ///
    /// # Errors
    ///
    /// Returns [`ApplicationError::Settings`] if serialization fails.
    pub fn to_json(&self) -> ApplicationResult<String> {
        serde_json::to_string_pretty(self).map_err(|e| ApplicationError::Settings(e.to_string()))
    }

    /// Opens a session over `template` with these delimiters and parameters.
    ///
    /// # Errors
    ///
    /// Returns a domain error if the template is malformed.
    pub fn session(&self, template: &str) -> ApplicationResult<ParseSession> {
        let mut session = ParseSession::extract(template, self.delimiters.clone())?;
        session.bind_all(self.parameters.clone());
        Ok(session)
    }

    /// Extracts, binds and resolves `template` in one step.
    ///
    /// # Errors
    ///
    /// Returns a domain error if the template is malformed.
    pub fn render(&self, template: &str) -> ApplicationResult<Resolution> {
        Ok(self.session(template)?.resolve())
    }
}
