//! Paramstring Domain - Core types for parametrized strings
//!
//! This crate defines the data model shared by the scanner, the extraction
//! engine and the resolution facade.
//! All types here are pure Rust with no I/O dependencies.

pub mod binding;
pub mod delimiter;
pub mod error;
pub mod scan;
pub mod span;

pub use binding::Bindings;
pub use delimiter::Delimiters;
pub use error::{ConfigurationError, DomainError, DomainResult, FormatError};
pub use scan::{EscapedDelimiter, ScanResult};
pub use span::PlaceholderSpan;
