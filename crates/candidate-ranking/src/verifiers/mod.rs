//! Artifact verification entrypoints.

pub mod schema_checks;

pub use schema_checks::{run_schema_checks, SchemaCheck, SchemaCheckPlan, SchemaCheckReport};
