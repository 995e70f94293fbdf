//! Run settings
//!
//! Everything a command needs to know about where and how to run, resolved
//! once from the command line and passed to every handler.

mod settings;

pub use settings::Settings;
