//! Paramstring Application - Placeholder extraction and resolution
//!
//! Scans templates for delimited placeholders, extracts their names, and
//! substitutes bound values back into the template.

pub mod error;
pub mod placeholder;
pub mod settings;
pub mod template;

pub use error::{ApplicationError, ApplicationResult};
pub use placeholder::{ParseSession, Resolution, has_placeholders, parameter_names};
pub use settings::TemplateSettings;
pub use template::ParametrizedString;
