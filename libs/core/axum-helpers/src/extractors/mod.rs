//! Extractors that reject with [`crate::errors::ErrorResponse`] bodies.

pub mod id_path;
pub mod validated_json;

pub use id_path::IdPath;
pub use validated_json::ValidatedJson;
