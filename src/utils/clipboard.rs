// src/utils/clipboard.rs
use std::io;
use base64::{engine::general_purpose, Engine as _};
use console::Term;

/// OSC 52 escape sequence asking the terminal to put `text` on the clipboard.
pub fn osc52_sequence(text: &str) -> String {
    format!("\x1b]52;c;{}\x07", general_purpose::STANDARD.encode(text.as_bytes()))
}

// Copy through the terminal; works over SSH when the emulator allows OSC 52
pub fn copy_to_clipboard(term: &Term, text: &str) -> io::Result<()> {
    if !term.is_term() {
        return Err(io::Error::new(
            io::ErrorKind::Unsupported,
            "stdout is not a terminal",
        ));
    }
    term.write_str(&osc52_sequence(text))?;
    term.flush()
}
