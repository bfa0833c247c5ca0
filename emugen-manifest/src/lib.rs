// Miette's derive macro generates code that triggers these warnings
#![allow(unused_assignments)]

mod config;
mod error;

pub use config::{Config, PathsConfig};
pub use error::{Error, Result};
