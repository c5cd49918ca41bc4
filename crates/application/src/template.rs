//! Parametrized string facade
//!
//! Wraps a template together with its parse session so values can be bound
//! before or after extraction, and the template resolved in one call.

use paramstring_domain::{Bindings, Delimiters, DomainResult};

use crate::placeholder::ParseSession;

/// A template string with named placeholders.
///
/// # Examples
///
/// ```
/// use paramstring_application::ParametrizedString;
/// use paramstring_domain::Delimiters;
///
/// let mut template = ParametrizedString::new("{{Drive}}\\{{Directory}}_{{File}}");
/// template.set_parameter("Drive", "C:");
/// template.set_parameter("Directory", "Windows");
/// template.set_parameter("File", "myFile.doc");
///
/// let delimiters = Delimiters::from_strs(&["{{", "}}"]).unwrap();
/// let resolved = template.resolve_with(&delimiters).unwrap();
/// assert_eq!(resolved, "C:\\Windows_myFile.doc");
/// ```
#[derive(Debug, Clone)]
pub struct ParametrizedString {
    template: String,
    session: Option<ParseSession>,
    pending: Bindings,
}

impl ParametrizedString {
    /// Creates a new parametrized string.
    #[must_use]
    pub fn new(template: impl Into<String>) -> Self {
        Self {
            template: template.into(),
            session: None,
            pending: Bindings::new(),
        }
    }

    /// Returns the template text.
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.template
    }

    /// Returns the active session, if the template has been extracted.
    #[must_use]
    pub const fn session(&self) -> Option<&ParseSession> {
        self.session.as_ref()
    }

    /// Extracts the placeholder names with the given delimiters.
    ///
    /// Extracting again replaces the previous session but keeps every value
    /// bound so far.
    ///
    /// # Errors
    ///
    /// Returns a format error if the template is malformed for `delimiters`.
    pub fn parameter_names(&mut self, delimiters: &Delimiters) -> DomainResult<Vec<String>> {
        let session = self.open_session(delimiters)?;
        Ok(session
            .parameter_names()
            .into_iter()
            .map(str::to_string)
            .collect())
    }

    /// Binds a value to a name, before or after extraction.
    pub fn set_parameter(&mut self, name: impl Into<String>, value: impl Into<String>) {
        match self.session.as_mut() {
            Some(session) => session.set_parameter(name, value),
            None => self.pending.set(name, value),
        }
    }

    /// Resolves the template with the delimiters of the last extraction.
    ///
    /// The session and its bindings are discarded afterwards. Without a prior
    /// extraction the template is returned unchanged.
    pub fn resolve(&mut self) -> String {
        match self.session.take() {
            Some(session) => session.resolve().resolved,
            None => {
                if !self.pending.is_empty() {
                    tracing::warn!(
                        "Resolving template without extraction; dropping {} pending bindings",
                        self.pending.len()
                    );
                    self.pending.clear();
                }
                self.template.clone()
            }
        }
    }

    /// Extracts with the given delimiters, then resolves.
    ///
    /// # Errors
    ///
    /// Returns a format error if the template is malformed for `delimiters`.
    pub fn resolve_with(&mut self, delimiters: &Delimiters) -> DomainResult<String> {
        self.open_session(delimiters)?;
        Ok(self.resolve())
    }

    fn open_session(&mut self, delimiters: &Delimiters) -> DomainResult<&ParseSession> {
        let mut session = ParseSession::extract(self.template.clone(), delimiters.clone())?;

        let mut bindings = std::mem::take(&mut self.pending);
        if let Some(previous) = self.session.take() {
            bindings.merge(previous.bindings().clone());
        }
        session.bind_all(bindings);

        Ok(&*self.session.insert(session))
    }
}

impl From<&str> for ParametrizedString {
    fn from(template: &str) -> Self {
        Self::new(template)
    }
}

impl From<String> for ParametrizedString {
    fn from(template: String) -> Self {
        Self::new(template)
    }
}
