//! Templates and output path resolution for emugen.
//!
//! - [`files`] - the mock header and test stub templates
//! - [`resolve`] - test stub placement below the tests directory
//! - [`builder`] - the indented text builder both templates render through

// Miette's derive macro generates code that triggers these warnings
#![allow(unused_assignments)]

pub mod builder;
pub mod files;
pub mod resolve;

pub use files::{MockHeader, TestStub};
pub use resolve::{ResolveError, Resolved, TestLocation};
