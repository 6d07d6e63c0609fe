//! Rate acquisition over HTTP

pub mod fetcher;
pub mod retry;

pub use fetcher::*;
pub use retry::*;
