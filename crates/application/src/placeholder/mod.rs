//! Placeholder parsing and resolution
//!
//! Provides scanning, extraction and resolution of delimited placeholders such
//! as `$Name$`, `{Name}` or `$$Name$$`.
//!
//! # Usage
//!
//! ```
//! use paramstring_application::placeholder::{ParseSession, parameter_names};
//! use paramstring_domain::Delimiters;
//!
//! let delimiters = Delimiters::from_strs(&["$$"]).unwrap();
//! let names = parameter_names("$$Drive$$\\$$Directory$$_$$File$$", &delimiters).unwrap();
//! assert_eq!(names, vec!["Drive", "Directory", "File"]);
//!
//! let mut session = ParseSession::extract("$$Drive$$\\Temp", delimiters).unwrap();
//! session.set_parameter("Drive", "C:");
//! assert_eq!(session.resolve().resolved, "C:\\Temp");
//! ```

pub mod extraction;
pub mod scanner;
pub mod session;

use paramstring_domain::{Delimiters, DomainResult};

pub use extraction::{Extraction, extract};
pub use scanner::scan;
pub use session::{ParseSession, Resolution};

/// Extracts just the placeholder names of a template, in order of appearance.
///
/// # Errors
///
/// Returns a format error if `template` is malformed for `delimiters`.
pub fn parameter_names(template: &str, delimiters: &Delimiters) -> DomainResult<Vec<String>> {
    Ok(extract(template, delimiters)?
        .spans
        .into_iter()
        .map(|span| span.name)
        .collect())
}

/// Returns true if the template contains at least one placeholder.
///
/// Malformed templates are reported as having none.
#[must_use]
pub fn has_placeholders(template: &str, delimiters: &Delimiters) -> bool {
    extract(template, delimiters).is_ok_and(|extraction| !extraction.spans.is_empty())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parameter_names_is_idempotent() {
        let delimiters = Delimiters::from_chars(&['$']).unwrap();
        let template = "$Drive$\\$Directory$_$File$";
        let first = parameter_names(template, &delimiters).unwrap();
        let second = parameter_names(template, &delimiters).unwrap();
        assert_eq!(first, second);
        assert_eq!(first, vec!["Drive", "Directory", "File"]);
    }

    #[test]
    fn test_has_placeholders() {
        let delimiters = Delimiters::from_chars(&['{', '}']).unwrap();
        assert!(has_placeholders("Hello {name}!", &delimiters));
        assert!(!has_placeholders("Hello World!", &delimiters));
        assert!(!has_placeholders("Hello {name", &delimiters));
    }
}
