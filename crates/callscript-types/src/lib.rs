//! Schema types for call-control script documents.
//!
//! This crate models the declarative script format an external telephony
//! platform executes: a document of named sections, each an ordered list of
//! steps, where a step is either a control-flow statement or a call-control
//! method. The crate holds shapes only -- it performs no validation beyond
//! Rust's own typing and never interprets a document.
//!
//! Zero infrastructure dependencies -- only serde, serde_json, thiserror.

pub mod ai;
pub mod document;
pub mod error;
pub mod method;
pub mod statement;
