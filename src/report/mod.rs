//! Report rendering

pub mod chart;
pub mod writer;

pub use chart::*;
pub use writer::*;
