//! Configuration management for the analytics run

pub mod settings;
pub mod cli;

pub use settings::*;
pub use cli::*;

use lazy_static::lazy_static;

lazy_static! {
    pub static ref CONFIG: Config = Config::load();
}
