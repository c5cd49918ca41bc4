//! Pairing and extraction engine
//!
//! Turns scanner output into placeholder spans over the unescaped copy of a
//! template.

use paramstring_domain::{
    Delimiters, DomainResult, EscapedDelimiter, FormatError, PlaceholderSpan, ScanResult,
};

use super::scanner::scan;

/// The unescaped working copy of a template and the placeholders found in it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Extraction {
    /// The template with one copy of every escaped marker removed.
    pub unescaped: String,

    /// Placeholders in order of appearance.
    pub spans: Vec<PlaceholderSpan>,
}

impl Extraction {
    /// Returns the placeholder names in order of appearance, duplicates included.
    #[must_use]
    pub fn names(&self) -> Vec<&str> {
        self.spans.iter().map(|span| span.name.as_str()).collect()
    }
}

/// Maps byte offsets of the original template onto the unescaped copy.
///
/// Each escape removes `width` bytes at its position, so an offset moves left
/// by the total width of every escape that starts before it.
struct Rebase {
    positions: Vec<usize>,
    removed_before: Vec<usize>,
}

impl Rebase {
    fn new(escapes: &[EscapedDelimiter]) -> Self {
        let mut positions = Vec::with_capacity(escapes.len());
        let mut removed_before = Vec::with_capacity(escapes.len() + 1);
        removed_before.push(0);

        let mut removed = 0;
        for escape in escapes {
            positions.push(escape.position);
            removed += escape.width;
            removed_before.push(removed);
        }

        Self {
            positions,
            removed_before,
        }
    }

    fn apply(&self, offset: usize) -> usize {
        let preceding = self.positions.partition_point(|&position| position < offset);
        offset.saturating_sub(self.removed_before[preceding])
    }
}

/// Scans a template and extracts its placeholders.
///
/// # Errors
///
/// Returns a [`FormatError`] if the template has an odd number of boundaries,
/// if distinct start and end markers do not appear equally often, or if a
/// placeholder closes before it opens or overlaps the previous one. No partial
/// result is returned.
///
/// # Examples
///
/// ```
/// use paramstring_application::placeholder::extraction::extract;
/// use paramstring_domain::Delimiters;
///
/// let delimiters = Delimiters::single("**").unwrap();
/// let extraction = extract("**Drive****Directory****File**", &delimiters).unwrap();
/// assert_eq!(extraction.names(), vec!["Drive**Directory**File"]);
/// ```
pub fn extract(source: &str, delimiters: &Delimiters) -> DomainResult<Extraction> {
    let scan_result = scan(source, delimiters);
    extract_from_scan(source, delimiters, scan_result)
}

/// Builds an [`Extraction`] from a scan of `source`.
fn extract_from_scan(
    source: &str,
    delimiters: &Delimiters,
    mut scan_result: ScanResult,
) -> DomainResult<Extraction> {
    if !scan_result.is_even() {
        let count = scan_result.boundary_count();
        return Err(FormatError::UnterminatedPlaceholder { count }.into());
    }
    check_offsets(source, delimiters, &scan_result)?;

    scan_result.escapes.sort_by_key(|escape| escape.position);
    drop_overlapping(&mut scan_result.escapes);
    let unescaped = unescape(source, &scan_result.escapes);
    let rebase = Rebase::new(&scan_result.escapes);

    let pairs = pair_boundaries(&scan_result, delimiters.is_single())?;
    let start_width = delimiters.start().len();
    let end_width = delimiters.end().len();

    let mut spans = Vec::with_capacity(pairs.len());
    let mut previous_end = 0;
    for (open, close) in pairs {
        let open = rebase.apply(open);
        let close = rebase.apply(close);
        let name_start = open + start_width;

        if open < previous_end || close < name_start {
            return Err(FormatError::MisorderedPair { open, close }.into());
        }

        let name = unescaped
            .get(name_start..close)
            .ok_or(FormatError::MisorderedPair { open, close })?;
        let span = PlaceholderSpan::new(name, open, name_start..close, end_width);
        if unescaped.get(span.range.clone()).is_none() {
            return Err(FormatError::OffsetOutOfRange {
                offset: span.range.end,
                len: unescaped.len(),
            }
            .into());
        }
        previous_end = span.range.end;
        spans.push(span);
    }

    tracing::debug!(
        "Extracted {} placeholders ({} escapes removed)",
        spans.len(),
        scan_result.escapes.len()
    );

    Ok(Extraction { unescaped, spans })
}

/// Rejects any boundary or escape whose marker does not lie on character
/// boundaries inside `source`.
fn check_offsets(
    source: &str,
    delimiters: &Delimiters,
    scan_result: &ScanResult,
) -> DomainResult<()> {
    let start_width = delimiters.start().len();
    let end_width = delimiters.end().len();
    let markers = scan_result
        .start_positions
        .iter()
        .map(|&position| (position, start_width))
        .chain(
            scan_result
                .end_positions
                .iter()
                .map(|&position| (position, end_width)),
        )
        .chain(
            scan_result
                .escapes
                .iter()
                .map(|escape| (escape.position, escape.width)),
        );

    for (position, width) in markers {
        let fits = position
            .checked_add(width)
            .and_then(|end| source.get(position..end))
            .is_some();
        if !fits {
            return Err(FormatError::OffsetOutOfRange {
                offset: position,
                len: source.len(),
            }
            .into());
        }
    }

    Ok(())
}

/// Keeps only escapes that do not overlap an earlier one. `escapes` must be sorted.
///
/// Overlaps only happen when the start and end markers share characters.
fn drop_overlapping(escapes: &mut Vec<EscapedDelimiter>) {
    let mut covered = 0;
    escapes.retain(|escape| {
        if escape.position < covered {
            return false;
        }
        covered = escape.position + 2 * escape.width;
        true
    });
}

/// Removes one copy of every escaped marker. `escapes` must be sorted.
fn unescape(source: &str, escapes: &[EscapedDelimiter]) -> String {
    if escapes.is_empty() {
        return source.to_string();
    }

    let removed: usize = escapes.iter().map(|escape| escape.width).sum();
    let mut unescaped = String::with_capacity(source.len().saturating_sub(removed));
    let mut last = 0;
    for escape in escapes {
        unescaped.push_str(&source[last..escape.position]);
        last = escape.position + escape.width;
    }
    unescaped.push_str(&source[last..]);
    unescaped
}

/// Pairs opening and closing boundaries by discovery order.
fn pair_boundaries(scan_result: &ScanResult, single: bool) -> DomainResult<Vec<(usize, usize)>> {
    let starts = &scan_result.start_positions;
    let ends = &scan_result.end_positions;

    if single {
        return Ok(starts
            .chunks_exact(2)
            .map(|pair| (pair[0], pair[1]))
            .collect());
    }

    if starts.len() != ends.len() {
        return Err(FormatError::UnbalancedDelimiters {
            starts: starts.len(),
            ends: ends.len(),
        }
        .into());
    }

    Ok(starts.iter().copied().zip(ends.iter().copied()).collect())
}

#[cfg(test)]
mod tests {
    use super::*;
    use paramstring_domain::DomainError;
    use pretty_assertions::assert_eq;

    fn single(marker: &str) -> Delimiters {
        Delimiters::single(marker).unwrap()
    }

    fn pair(start: &str, end: &str) -> Delimiters {
        Delimiters::pair(start, end).unwrap()
    }

    #[test]
    fn test_extract_single_char() {
        let extraction = extract("$Drive$\\$Directory$_$File$", &single("$")).unwrap();
        assert_eq!(extraction.names(), vec!["Drive", "Directory", "File"]);
        assert_eq!(extraction.unescaped, "$Drive$\\$Directory$_$File$");
    }

    #[test]
    fn test_extract_pair() {
        let extraction = extract("{Drive}\\{Directory}_{File}", &pair("{", "}")).unwrap();
        assert_eq!(extraction.names(), vec!["Drive", "Directory", "File"]);
        assert_eq!(extraction.spans[1].range, 8..19);
        assert_eq!(extraction.spans[1].name_range, 9..18);
    }

    #[test]
    fn test_extract_multi_char_pair() {
        let extraction = extract("{{Drive}}\\{{Directory}}_{{File}}", &pair("{{", "}}")).unwrap();
        assert_eq!(extraction.names(), vec!["Drive", "Directory", "File"]);
    }

    #[test]
    fn test_extract_three_char_marker() {
        let extraction =
            extract("$*/Drive$*/\\$*/Directory$*/_$*/File$*/", &single("$*/")).unwrap();
        assert_eq!(extraction.names(), vec!["Drive", "Directory", "File"]);
    }

    #[test]
    fn test_side_by_side_escapes() {
        let extraction = extract("**Drive****Directory****File**", &single("**")).unwrap();
        assert_eq!(extraction.unescaped, "**Drive**Directory**File**");
        assert_eq!(extraction.names(), vec!["Drive**Directory**File"]);
        assert_eq!(extraction.spans[0].range, 0..26);
    }

    #[test]
    fn test_escape_inside_name() {
        let extraction = extract("$*Drive$*$*$*", &single("$*")).unwrap();
        assert_eq!(extraction.unescaped, "$*Drive$*$*");
        assert_eq!(extraction.names(), vec!["Drive$*"]);
        assert_eq!(extraction.spans[0].range, 0..11);
    }

    #[test]
    fn test_escape_before_placeholder_shifts_offsets() {
        let extraction = extract("a$*$*b $*x$* c", &single("$*")).unwrap();
        assert_eq!(extraction.unescaped, "a$*b $*x$* c");
        assert_eq!(extraction.names(), vec!["x"]);
        assert_eq!(extraction.spans[0].range, 5..10);
    }

    #[test]
    fn test_escapes_of_both_markers() {
        let extraction = extract("x{{{{ {{name}} }}}}", &pair("{{", "}}")).unwrap();
        assert_eq!(extraction.unescaped, "x{{ {{name}} }}");
        assert_eq!(extraction.names(), vec!["name"]);
        assert_eq!(extraction.spans[0].range, 4..12);
    }

    #[test]
    fn test_duplicate_names_kept() {
        let extraction = extract("{a}-{b}-{a}", &pair("{", "}")).unwrap();
        assert_eq!(extraction.names(), vec!["a", "b", "a"]);
    }

    #[test]
    fn test_empty_name() {
        let extraction = extract("x{}y", &pair("{", "}")).unwrap();
        assert_eq!(extraction.names(), vec![""]);
    }

    #[test]
    fn test_no_placeholders() {
        let extraction = extract("{{Drive}}\\{{Directory}}", &single("$")).unwrap();
        assert!(extraction.spans.is_empty());
        assert_eq!(extraction.unescaped, "{{Drive}}\\{{Directory}}");
    }

    #[test]
    fn test_odd_boundary_count() {
        let err = extract("$Drive$\\$Directory_$File$", &single("$")).unwrap_err();
        assert_eq!(
            err,
            DomainError::Format(FormatError::UnterminatedPlaceholder { count: 5 })
        );
    }

    #[test]
    fn test_unbalanced_pair() {
        let err = extract("{a{b", &pair("{", "}")).unwrap_err();
        assert!(matches!(
            err,
            DomainError::Format(FormatError::UnbalancedDelimiters { starts: 2, ends: 0 })
        ));

        let err = extract("{a}b}c}", &pair("{", "}")).unwrap_err();
        assert!(matches!(
            err,
            DomainError::Format(FormatError::UnbalancedDelimiters { starts: 1, ends: 3 })
        ));
    }

    #[test]
    fn test_close_before_open() {
        let err = extract("}a{", &pair("{", "}")).unwrap_err();
        assert_eq!(
            err,
            DomainError::Format(FormatError::MisorderedPair { open: 2, close: 0 })
        );
    }

    #[test]
    fn test_nested_pairs_rejected() {
        let err = extract("{a{b}c}", &pair("{", "}")).unwrap_err();
        assert!(matches!(
            err,
            DomainError::Format(FormatError::MisorderedPair { .. })
        ));
    }

    #[test]
    fn test_markers_sharing_characters() {
        // The end escape at 2 overlaps the start escape at 3 and is dropped.
        let extraction = extract("abbababa", &pair("ab", "ba")).unwrap();
        assert_eq!(extraction.unescaped, "abbaba");
        assert_eq!(extraction.names(), vec!["ba"]);
        assert_eq!(extraction.spans[0].range, 0..6);

        // Here the close overlaps its own opening marker.
        let err = extract("xabababa", &pair("ab", "ba")).unwrap_err();
        assert_eq!(
            err,
            DomainError::Format(FormatError::MisorderedPair { open: 3, close: 4 })
        );
    }

    #[test]
    fn test_escape_outside_source_rejected() {
        let scan_result = ScanResult {
            escapes: vec![EscapedDelimiter::new(10, 2)],
            ..ScanResult::default()
        };
        let err = extract_from_scan("abc", &single("$*"), scan_result).unwrap_err();
        assert_eq!(
            err,
            DomainError::Format(FormatError::OffsetOutOfRange { offset: 10, len: 3 })
        );
    }

    #[test]
    fn test_boundary_off_char_boundary_rejected() {
        let scan_result = ScanResult {
            start_positions: vec![1, 2],
            ..ScanResult::default()
        };
        let err = extract_from_scan("\u{e9}$", &single("$"), scan_result).unwrap_err();
        assert_eq!(
            err,
            DomainError::Format(FormatError::OffsetOutOfRange { offset: 1, len: 3 })
        );
    }

    #[test]
    fn test_overlapping_escapes_dropped() {
        let mut escapes = vec![
            EscapedDelimiter::new(1, 2),
            EscapedDelimiter::new(3, 2),
            EscapedDelimiter::new(5, 2),
        ];
        drop_overlapping(&mut escapes);
        assert_eq!(escapes, vec![EscapedDelimiter::new(1, 2), EscapedDelimiter::new(5, 2)]);
    }

    #[test]
    fn test_rebase_cumulative_shift() {
        let rebase = Rebase::new(&[EscapedDelimiter::new(2, 2), EscapedDelimiter::new(10, 3)]);
        assert_eq!(rebase.apply(0), 0);
        assert_eq!(rebase.apply(2), 2);
        assert_eq!(rebase.apply(6), 4);
        assert_eq!(rebase.apply(16), 11);
    }
}
