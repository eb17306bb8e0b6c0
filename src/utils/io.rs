// src/utils/io.rs
use std::io::{self, BufRead};
use std::path::PathBuf;

/// Get the application data directory, if the platform has one
pub fn get_app_data_dir() -> Option<PathBuf> {
    directories::ProjectDirs::from("com", "password-checker", "password-checker")
        .map(|proj_dirs| proj_dirs.data_local_dir().to_path_buf())
}

/// Read one line as a password. Only the line ending is removed; leading
/// and trailing spaces are part of the password.
pub fn read_password_line<R: BufRead>(reader: &mut R) -> io::Result<String> {
    let mut line = String::new();
    reader.read_line(&mut line)?;

    if line.ends_with('\n') {
        line.pop();
        if line.ends_with('\r') {
            line.pop();
        }
    }

    Ok(line)
}
