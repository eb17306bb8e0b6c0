// src/utils/mod.rs
mod clipboard;
mod format;
mod io;

pub use clipboard::*;
pub use format::*;
pub use io::*;
