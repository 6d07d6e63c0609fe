//! Core data types and structures

pub mod currency;
pub mod series;
pub mod results;

pub use currency::*;
pub use series::*;
pub use results::*;
