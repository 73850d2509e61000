//! Batch configuration, read from YAML (or JSON) files.
//!
//! - [`Config`]: top-level loader, validation and the derived conversion options
//! - [`OutputConfig`]: where and in which formats results are written
//! - [`ManualEntry`]: an explicitly listed tile/metatile file pair

mod main;
mod manual;
mod output;

pub use main::Config;
pub use manual::ManualEntry;
pub use output::{OutputConfig, OutputType};
