//! YAML header manifest parser for headgrid.

mod error;
mod manifest;
mod validate;

pub use error::ParseError;
pub use manifest::{HeaderManifest, SUPPORTED_VERSIONS};
pub use validate::{validate_columns, ValidationWarning};
