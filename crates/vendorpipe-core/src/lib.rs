//! Vendorpipe Core - Foundations for the vendoring pipeline
//!
//! This crate provides the error types and repository-root path resolution
//! shared by the vendoring task crates.

pub mod error;
pub mod paths;

pub use error::{PathError, Result, TaskError, VendorpipeError};
pub use paths::RepoRoot;
