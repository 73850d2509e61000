mod png;

pub use png::*;
