//! Parse sessions
//!
//! A session owns everything derived from one template: its delimiters, the
//! unescaped working copy, the placeholder spans and the values bound to them.

use paramstring_domain::{Bindings, Delimiters, DomainResult, PlaceholderSpan};

use super::extraction::{Extraction, extract};

/// Result of resolving a session.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Resolution {
    /// The resolved string.
    pub resolved: String,

    /// Names that were replaced, once per occurrence.
    pub substituted: Vec<String>,

    /// Names left in place because no non-empty value was bound, once per occurrence.
    pub unresolved: Vec<String>,

    /// Whether every placeholder was replaced.
    pub is_complete: bool,
}

impl Resolution {
    /// Creates a result for text with no placeholders.
    #[must_use]
    pub fn no_placeholders(text: &str) -> Self {
        Self {
            resolved: text.to_string(),
            substituted: Vec::new(),
            unresolved: Vec::new(),
            is_complete: true,
        }
    }

    /// Returns the count of replaced placeholders.
    #[must_use]
    pub fn substituted_count(&self) -> usize {
        self.substituted.len()
    }

    /// Returns the count of placeholders left in place.
    #[must_use]
    pub fn unresolved_count(&self) -> usize {
        self.unresolved.len()
    }
}

/// Extraction state and bindings for one template.
///
/// Sessions are independent values: two sessions over equal text never share
/// bindings.
///
/// # Examples
///
/// ```
/// use paramstring_application::placeholder::ParseSession;
/// use paramstring_domain::Delimiters;
///
/// let delimiters = Delimiters::from_chars(&['{', '}']).unwrap();
/// let mut session = ParseSession::extract("{Drive}\\{Directory}_{File}", delimiters).unwrap();
/// assert_eq!(session.parameter_names(), vec!["Drive", "Directory", "File"]);
///
/// session.set_parameter("Drive", "C:");
/// session.set_parameter("Directory", "Mes Documents");
/// session.set_parameter("File", "File.txt");
/// assert_eq!(session.resolve().resolved, "C:\\Mes Documents_File.txt");
/// ```
#[derive(Debug, Clone)]
pub struct ParseSession {
    source: String,
    delimiters: Delimiters,
    extraction: Extraction,
    bindings: Bindings,
}

impl ParseSession {
    /// Extracts the placeholders of `source` and opens a session over it.
    ///
    /// # Errors
    ///
    /// Returns a format error if `source` is malformed for `delimiters`.
    pub fn extract(source: impl Into<String>, delimiters: Delimiters) -> DomainResult<Self> {
        let source = source.into();
        let extraction = extract(&source, &delimiters)?;
        Ok(Self {
            source,
            delimiters,
            extraction,
            bindings: Bindings::new(),
        })
    }

    /// Returns the original template.
    #[must_use]
    pub fn source(&self) -> &str {
        &self.source
    }

    /// Returns the delimiters the template was parsed with.
    #[must_use]
    pub const fn delimiters(&self) -> &Delimiters {
        &self.delimiters
    }

    /// Returns the template with escaped markers collapsed.
    #[must_use]
    pub fn unescaped(&self) -> &str {
        &self.extraction.unescaped
    }

    /// Returns the placeholders in order of appearance.
    #[must_use]
    pub fn placeholders(&self) -> &[PlaceholderSpan] {
        &self.extraction.spans
    }

    /// Returns the placeholder names in order of appearance, duplicates included.
    #[must_use]
    pub fn parameter_names(&self) -> Vec<&str> {
        self.extraction.names()
    }

    /// Returns the current bindings.
    #[must_use]
    pub const fn bindings(&self) -> &Bindings {
        &self.bindings
    }

    /// Binds a value to a name. The last value bound wins; an empty value
    /// leaves the placeholder unresolved.
    pub fn set_parameter(&mut self, name: impl Into<String>, value: impl Into<String>) {
        let name = name.into();
        tracing::trace!("Binding parameter {:?}", name);
        self.bindings.set(name, value);
    }

    /// Removes the value bound to a name.
    pub fn clear_parameter(&mut self, name: &str) -> Option<String> {
        self.bindings.remove(name)
    }

    /// Binds every entry of `bindings`, overriding existing values.
    pub fn bind_all(&mut self, bindings: Bindings) {
        self.bindings.merge(bindings);
    }

    /// Resolves the template without ending the session.
    #[must_use]
    pub fn preview(&self) -> Resolution {
        substitute(&self.extraction, &self.bindings)
    }

    /// Resolves the template and ends the session.
    #[must_use]
    pub fn resolve(self) -> Resolution {
        let resolution = substitute(&self.extraction, &self.bindings);
        tracing::debug!(
            "Resolved template: {} substituted, {} unresolved",
            resolution.substituted_count(),
            resolution.unresolved_count()
        );
        resolution
    }
}

/// Replaces every bound placeholder in one left-to-right pass.
///
/// Substituted text is never scanned again.
fn substitute(extraction: &Extraction, bindings: &Bindings) -> Resolution {
    let text = extraction.unescaped.as_str();
    if extraction.spans.is_empty() {
        return Resolution::no_placeholders(text);
    }

    let mut substituted = Vec::new();
    let mut unresolved = Vec::new();
    let mut result = String::with_capacity(text.len());
    let mut last_end = 0;

    for span in &extraction.spans {
        // Append text before this placeholder
        result.push_str(&text[last_end..span.range.start]);

        if let Some(value) = bindings.get(&span.name) {
            result.push_str(value);
            substituted.push(span.name.clone());
        } else {
            // Keep the original placeholder text for unbound names
            result.push_str(&text[span.range.clone()]);
            unresolved.push(span.name.clone());
        }

        last_end = span.range.end;
    }

    result.push_str(&text[last_end..]);

    let is_complete = unresolved.is_empty();
    Resolution {
        resolved: result,
        substituted,
        unresolved,
        is_complete,
    }
}
