//! Error types for acquisition, configuration and rendering

pub mod fx_error;

pub use fx_error::*;
