//! # tileset
//!
//! Converts 2bpp tile data (`*.chr`) and the metatile sets indexing it (`*.mtiles`) into PNG
//! images and a portable JSON form, and back.
//!
//! The work is split over three crates:
//! - [`tileset_core`]: data model, range index, tile cache, codecs and JSON
//! - [`tileset_image`]: compositing and PNG output
//! - `tileset` (this crate): batch configuration and processing, and the `tileset` binary
//!
//! ## Usage Example
//!
//! ```rust,no_run
//! use tileset::{batch::Processor, config::Config};
//!
//! let config = Config::from_string("auto: assets\noutput:\n  type: png_only").unwrap();
//! let summary = Processor::new(config).unwrap().run().unwrap();
//! println!("{summary}");
//! ```

pub mod batch;
pub mod config;
