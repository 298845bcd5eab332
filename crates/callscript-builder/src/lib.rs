//! Fluent builder for call-control script documents.
//!
//! Wraps the schema types from `callscript-types` in an append-only
//! accumulator: one method per action kind, each pushing a single step onto
//! the document's `main` section. The builder never validates and never
//! fails; it trusts the caller and defers semantic checks to the platform
//! that executes the document.

pub mod builder;

pub use builder::ScriptBuilder;
