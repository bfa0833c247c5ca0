//! Core utilities and types for the emugen stub generator.
//!
//! This crate provides the naming transforms and file writing rules shared
//! by the template crate and the command line.

mod file;
mod naming;
pub mod paths;

// File operations
pub use file::{FileRules, GeneratedFile, Overwrite, WriteResult};
// Name transforms
pub use naming::{SplitMode, macro_guard, mock_class_name, split_words, test_file_stem};
