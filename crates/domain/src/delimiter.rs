//! Delimiter configuration
//!
//! A template is parsed with either one marker that both opens and closes a
//! placeholder (`$Name$`) or with a distinct start and end marker (`{Name}`).

use serde::{Deserialize, Serialize};

use crate::error::ConfigurationError;

/// The markers that bound a placeholder.
///
/// Serialized as a list of one or two strings, so `["$"]` and `["{", "}"]`
/// are both valid configuration values.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "Vec<String>", into = "Vec<String>")]
pub enum Delimiters {
    /// The same marker opens and closes a placeholder.
    Single(String),
    /// Distinct opening and closing markers.
    Pair {
        /// Opening marker.
        start: String,
        /// Closing marker.
        end: String,
    },
}

impl Delimiters {
    /// Creates a single-marker configuration.
    pub fn single(marker: impl Into<String>) -> Result<Self, ConfigurationError> {
        let marker = marker.into();
        if marker.is_empty() {
            return Err(ConfigurationError::EmptyDelimiter { index: 0 });
        }
        Ok(Self::Single(marker))
    }

    /// Creates a start/end configuration.
    ///
    /// Identical markers collapse to [`Delimiters::Single`].
    pub fn pair(
        start: impl Into<String>,
        end: impl Into<String>,
    ) -> Result<Self, ConfigurationError> {
        let start = start.into();
        let end = end.into();
        if start.is_empty() {
            return Err(ConfigurationError::EmptyDelimiter { index: 0 });
        }
        if end.is_empty() {
            return Err(ConfigurationError::EmptyDelimiter { index: 1 });
        }
        if start == end {
            return Ok(Self::Single(start));
        }
        Ok(Self::Pair { start, end })
    }

    /// Builds delimiters from a list of one or two markers.
    ///
    /// # Examples
    ///
    /// ```
    /// use paramstring_domain::Delimiters;
    ///
    /// let delimiters = Delimiters::from_strs(&["{{", "}}"]).unwrap();
    /// assert_eq!(delimiters.start(), "{{");
    /// assert_eq!(delimiters.end(), "}}");
    ///
    /// assert!(Delimiters::from_strs(&["(", ",", ")"]).is_err());
    /// ```
    pub fn from_strs<S: AsRef<str>>(markers: &[S]) -> Result<Self, ConfigurationError> {
        Self::from_markers(markers, "delimiter_strings")
    }

    /// Builds delimiters from a list of one or two single-character markers.
    pub fn from_chars(markers: &[char]) -> Result<Self, ConfigurationError> {
        let markers: Vec<String> = markers.iter().map(char::to_string).collect();
        Self::from_markers(&markers, "delimiter_chars")
    }

    fn from_markers<S: AsRef<str>>(
        markers: &[S],
        parameter: &'static str,
    ) -> Result<Self, ConfigurationError> {
        match markers {
            [] => Err(ConfigurationError::MissingDelimiter { parameter }),
            [marker] => Self::single(marker.as_ref()),
            [start, end] => Self::pair(start.as_ref(), end.as_ref()),
            _ => Err(ConfigurationError::TooManyDelimiters {
                parameter,
                count: markers.len(),
            }),
        }
    }

    /// Returns the opening marker.
    #[must_use]
    pub fn start(&self) -> &str {
        match self {
            Self::Single(marker) => marker,
            Self::Pair { start, .. } => start,
        }
    }

    /// Returns the closing marker.
    #[must_use]
    pub fn end(&self) -> &str {
        match self {
            Self::Single(marker) => marker,
            Self::Pair { end, .. } => end,
        }
    }

    /// Returns true if the same marker opens and closes placeholders.
    #[must_use]
    pub const fn is_single(&self) -> bool {
        matches!(self, Self::Single(_))
    }

    /// Wraps a name in the markers, producing the placeholder text.
    #[must_use]
    pub fn wrap(&self, name: &str) -> String {
        let capacity = self.start().len() + name.len() + self.end().len();
        let mut wrapped = String::with_capacity(capacity);
        wrapped.push_str(self.start());
        wrapped.push_str(name);
        wrapped.push_str(self.end());
        wrapped
    }
}

impl TryFrom<Vec<String>> for Delimiters {
    type Error = ConfigurationError;

    fn try_from(markers: Vec<String>) -> Result<Self, Self::Error> {
        Self::from_strs(&markers)
    }
}

impl From<Delimiters> for Vec<String> {
    fn from(delimiters: Delimiters) -> Self {
        match delimiters {
            Delimiters::Single(marker) => vec![marker],
            Delimiters::Pair { start, end } => vec![start, end],
        }
    }
}
