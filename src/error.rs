//! Error types for color conversion.

use thiserror::Error;

/// Width of one rendered pair token (`0xRR`) plus its separating space.
const PAIR_COLUMN_WIDTH: usize = 5;

#[derive(Debug, Error, PartialEq, Eq)]
pub enum ConvertError {
    /// No color code was given on the command line.
    #[error("Hex color code expected as argument.")]
    MissingArgument,

    /// The code is not exactly six characters long.
    #[error("Proper hex color code expected: got {len} characters, need 6.")]
    InvalidLength { len: usize },

    /// One of the three pairs is not a valid hex byte.
    #[error("Invalid hex code:\n{}\n{}", render_pairs(.pairs), caret_line(.index))]
    InvalidHexDigit { index: usize, pairs: [String; 3] },

    /// Channels could not be rendered as JSON.
    #[error("Failed to serialize channels: {0}")]
    Serialize(String),
}

fn render_pairs(pairs: &[String; 3]) -> String {
    pairs
        .iter()
        .map(|p| format!("0x{p}"))
        .collect::<Vec<_>>()
        .join(" ")
}

fn caret_line(index: &usize) -> String {
    format!("{}^^^^", " ".repeat(index * PAIR_COLUMN_WIDTH))
}
