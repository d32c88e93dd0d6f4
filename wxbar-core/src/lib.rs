//! Core library for the `wxbar` status line.
//!
//! This crate defines:
//! - Configuration & credentials handling
//! - The owfont icon table (condition code to glyph)
//! - Abstraction over the weather provider
//! - The poll boundary that turns one fetch into one display line
//!
//! It is used by `wxbar-cli`, but can also be reused by other binaries or bar widgets.

pub mod config;
pub mod error;
pub mod icons;
pub mod model;
pub mod provider;
pub mod status;

pub use config::{Config, FontConfig};
pub use error::PollError;
pub use model::{Units, WeatherRequest, WeatherSnapshot};
pub use provider::WeatherProvider;
pub use status::{StatusPoller, format_status};

#[cfg(test)]
mod tests {
    // use super::*;

    #[test]
    fn it_works() {}
}
