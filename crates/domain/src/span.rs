//! Placeholder spans

use std::ops::Range;

/// A placeholder located in the unescaped copy of a template.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PlaceholderSpan {
    /// The placeholder name (without markers).
    pub name: String,

    /// Byte range of the name, from the end of the opening marker to the start
    /// of the closing marker.
    pub name_range: Range<usize>,

    /// Byte range of the whole placeholder including both markers.
    pub range: Range<usize>,
}

impl PlaceholderSpan {
    /// Creates a span from the offsets of its opening and closing markers.
    #[must_use]
    pub fn new(
        name: impl Into<String>,
        open: usize,
        name_range: Range<usize>,
        end_width: usize,
    ) -> Self {
        let range = open..name_range.end + end_width;
        Self {
            name: name.into(),
            name_range,
            range,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_span_covers_markers() {
        let text = "x{{name}}y";
        let span = PlaceholderSpan::new("name", 1, 3..7, 2);
        assert_eq!(&text[span.range.clone()], "{{name}}");
        assert_eq!(&text[span.name_range.clone()], "name");
    }
}
