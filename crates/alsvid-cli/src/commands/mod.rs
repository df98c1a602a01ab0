//! CLI command implementations.

pub mod common;
pub mod create;
pub mod submit;
