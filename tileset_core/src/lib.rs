//! Index, cache and codecs for 2bpp tile data and the metatile sets built from it.
//!
//! None of the structures here are synchronised. They are meant for single threaded batch
//! work; share them across threads only behind a lock.

pub mod cache;

pub mod codec;

pub mod constants;

mod error;
pub use error::{Result, TilesetError};

pub mod extract;

pub mod index;

pub mod json;

mod path;
pub use path::normalize_path;

pub mod tree;

pub mod types;
