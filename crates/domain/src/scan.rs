//! Raw delimiter positions found in a template

/// A doubled multi-character marker that stands for one literal copy of itself.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct EscapedDelimiter {
    /// Byte offset of the first copy in the original template.
    pub position: usize,
    /// Byte length of one copy of the marker.
    pub width: usize,
}

impl EscapedDelimiter {
    /// Creates a new escaped delimiter record.
    #[must_use]
    pub const fn new(position: usize, width: usize) -> Self {
        Self { position, width }
    }
}

/// Byte offsets of every delimiter occurrence in the original template.
///
/// In single-marker mode every boundary lands in `start_positions` and
/// `end_positions` stays empty.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ScanResult {
    /// Offsets of opening markers (all markers in single-marker mode).
    pub start_positions: Vec<usize>,

    /// Offsets of closing markers.
    pub end_positions: Vec<usize>,

    /// Escaped markers, in discovery order.
    pub escapes: Vec<EscapedDelimiter>,
}

impl ScanResult {
    /// Total number of genuine boundaries.
    #[must_use]
    pub fn boundary_count(&self) -> usize {
        self.start_positions.len() + self.end_positions.len()
    }

    /// Returns true if every opened placeholder can be closed.
    #[must_use]
    pub fn is_even(&self) -> bool {
        self.boundary_count() % 2 == 0
    }

    /// Offsets of the escaped markers.
    #[must_use]
    pub fn escaped_positions(&self) -> Vec<usize> {
        self.escapes.iter().map(|escape| escape.position).collect()
    }
}
