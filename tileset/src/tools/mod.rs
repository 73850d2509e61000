pub mod extract;
pub mod pack;
pub mod render;
pub mod run;
