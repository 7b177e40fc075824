//! Error types

mod template;

pub use template::*;
