//! plugload library - expose modules for testing

pub mod commands;
pub mod common;

pub use common::{init_tracing, GlobalOpts};
