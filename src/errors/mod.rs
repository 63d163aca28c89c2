//! Error types and diagnostics for the front end.
//!
//! This module defines:
//!
//! - `Error`, the per-program lexical or syntactic failure with its position
//! - `GrammarInitError`, the fatal failure to compile a grammar
//! - `Diagnostic`, the rendered, locatable report handed to callers

pub mod diagnostic;
pub mod errors;
