//! Library surface of the configuration wizard CLI.

pub mod logging;
pub mod profile;
pub mod settings;
