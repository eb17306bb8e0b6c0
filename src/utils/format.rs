// src/utils/format.rs

pub const BAR_WIDTH: usize = 20;

// Render a 0-100 percentage as a fixed-width bar
pub fn strength_bar(percent: u8, width: usize) -> String {
    let percent = percent.min(100) as usize;
    let filled = (percent * width + 50) / 100;
    format!("{}{}", "█".repeat(filled), "░".repeat(width - filled))
}
