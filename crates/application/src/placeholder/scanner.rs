//! Delimiter scanner
//!
//! Locates every marker occurrence in a template and classifies it as a
//! placeholder boundary or as an escaped (doubled) literal.

use paramstring_domain::{Delimiters, EscapedDelimiter, ScanResult};

/// Occurrences of one marker.
#[derive(Debug, Default)]
struct MarkerScan {
    boundaries: Vec<usize>,
    escapes: Vec<EscapedDelimiter>,
}

/// Scans a template for the given delimiters.
///
/// A marker repeated right after itself (`$*$*`) is an escape, unless it sits
/// at offset 0, which is always a boundary. Longer runs are consumed pairwise
/// from the left. Doubled multi-character markers are reported in
/// [`ScanResult::escapes`]; doubled single-character markers are skipped and
/// stay in the text as they are.
///
/// # Examples
///
/// ```
/// use paramstring_application::placeholder::scanner::scan;
/// use paramstring_domain::Delimiters;
///
/// let delimiters = Delimiters::single("$*").unwrap();
/// let result = scan("$*Drive$*$*$*", &delimiters);
/// assert_eq!(result.start_positions, vec![0, 11]);
/// assert_eq!(result.escaped_positions(), vec![7]);
/// ```
#[must_use]
pub fn scan(source: &str, delimiters: &Delimiters) -> ScanResult {
    let result = match delimiters {
        Delimiters::Single(marker) => {
            let found = scan_marker(source, marker);
            ScanResult {
                start_positions: found.boundaries,
                end_positions: Vec::new(),
                escapes: found.escapes,
            }
        }
        Delimiters::Pair { start, end } => {
            let opening = scan_marker(source, start);
            let closing = scan_marker(source, end);
            let mut escapes = opening.escapes;
            escapes.extend(closing.escapes);
            ScanResult {
                start_positions: opening.boundaries,
                end_positions: closing.boundaries,
                escapes,
            }
        }
    };

    tracing::debug!(
        "Scanned {} bytes: {} boundaries, {} escapes",
        source.len(),
        result.boundary_count(),
        result.escapes.len()
    );

    result
}

fn scan_marker(source: &str, marker: &str) -> MarkerScan {
    let haystack = source.as_bytes();
    let needle = marker.as_bytes();
    let width = needle.len();
    let single_char = marker.chars().count() == 1;

    let mut found = MarkerScan::default();
    if width == 0 {
        return found;
    }

    let mut i = 0;
    while i < haystack.len() {
        if !haystack[i..].starts_with(needle) {
            i += 1;
            continue;
        }

        let doubled = haystack[i + width..].starts_with(needle);
        if i == 0 || !doubled {
            found.boundaries.push(i);
            i += width;
            continue;
        }

        if !single_char {
            tracing::trace!("Escaped delimiter {:?} at offset {}", marker, i);
            found.escapes.push(EscapedDelimiter::new(i, width));
        }
        i += 2 * width;
    }

    found
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    fn single(marker: &str) -> Delimiters {
        Delimiters::single(marker).unwrap()
    }

    fn pair(start: &str, end: &str) -> Delimiters {
        Delimiters::pair(start, end).unwrap()
    }

    #[test]
    fn test_single_char_marker() {
        let result = scan("$Drive$\\$Directory$_$File$", &single("$"));
        assert_eq!(result.start_positions, vec![0, 6, 8, 18, 20, 25]);
        assert!(result.end_positions.is_empty());
        assert!(result.escapes.is_empty());
    }

    #[test]
    fn test_pair_markers() {
        let result = scan("{Drive}\\{Directory}_{File}", &pair("{", "}"));
        assert_eq!(result.start_positions, vec![0, 8, 20]);
        assert_eq!(result.end_positions, vec![6, 18, 25]);
    }

    #[test]
    fn test_no_markers() {
        let result = scan("{{Drive}}\\{{Directory}}", &single("$"));
        assert_eq!(result, ScanResult::default());
    }

    #[test]
    fn test_doubled_single_char_is_skipped() {
        let result = scan("Cost $$5 for $Item$", &single("$"));
        assert_eq!(result.start_positions, vec![13, 18]);
        assert!(result.escapes.is_empty());
    }

    #[test]
    fn test_doubled_single_char_at_start_is_boundary() {
        let result = scan("$$x", &single("$"));
        assert_eq!(result.start_positions, vec![0, 1]);
    }

    #[test]
    fn test_single_char_at_end_is_boundary() {
        let result = scan("a$", &single("$"));
        assert_eq!(result.start_positions, vec![1]);
    }

    #[test]
    fn test_multi_char_marker() {
        let result = scan("$$Drive$$\\$$Directory$$_$$File$$", &single("$$"));
        assert_eq!(result.start_positions, vec![0, 7, 10, 21, 24, 30]);
        assert!(result.escapes.is_empty());
    }

    #[test]
    fn test_multi_char_escape() {
        let result = scan("**Drive****Directory****File**", &single("**"));
        assert_eq!(result.start_positions, vec![0, 28]);
        assert_eq!(result.escaped_positions(), vec![7, 20]);
        assert!(result.escapes.iter().all(|escape| escape.width == 2));
    }

    #[test]
    fn test_marker_at_offset_zero_is_never_escaped() {
        let result = scan("$*$*x$*", &single("$*"));
        assert_eq!(result.start_positions, vec![0, 2, 5]);
        assert!(result.escapes.is_empty());
    }

    #[test]
    fn test_triple_marker_consumed_pairwise() {
        // The first two copies form an escape; the third is a boundary.
        let result = scan("a$*$*$*b$*", &single("$*"));
        assert_eq!(result.escaped_positions(), vec![1]);
        assert_eq!(result.start_positions, vec![5, 8]);
    }

    #[test]
    fn test_partial_match_is_not_a_marker() {
        let result = scan("$x/Drive$*/", &single("$*/"));
        assert_eq!(result.start_positions, vec![8]);
    }

    #[test]
    fn test_pair_escapes_from_both_markers() {
        let result = scan("a{{{{b}}}}c", &pair("{{", "}}"));
        assert!(result.start_positions.is_empty());
        assert!(result.end_positions.is_empty());
        assert_eq!(result.escaped_positions(), vec![1, 6]);
    }

    #[test]
    fn test_multibyte_marker() {
        let result = scan("«Name» and «Other»", &pair("«", "»"));
        assert_eq!(result.start_positions, vec![0, 13]);
        assert_eq!(result.end_positions, vec![6, 20]);
    }
}
