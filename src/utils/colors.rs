//! Terminal colors and styling for CLI output.

use colored::{ColoredString, Colorize};

/// Message type for different levels of output
#[derive(Debug, Clone, Copy)]
pub enum MessageType {
    Success,
    Error,
    Hint,
}

impl MessageType {
    /// Apply color to a message based on its type
    pub fn colorize(&self, message: &str) -> String {
        match self {
            MessageType::Success => message.green().to_string(),
            MessageType::Error => message.red().to_string(),
            MessageType::Hint => message.dimmed().to_string(),
        }
    }

    /// Get the prefix for this message type
    pub fn prefix(&self) -> &str {
        match self {
            MessageType::Success => "✓",
            MessageType::Error => "✗",
            MessageType::Hint => "💡",
        }
    }

    /// Format a message with prefix and color
    pub fn format(&self, message: &str) -> String {
        format!("{} {}", self.prefix(), self.colorize(message))
    }
}

/// Print a success message (green)
pub fn success(message: &str) {
    println!("{}", MessageType::Success.format(message));
}

/// Print a hint message (dimmed)
pub fn hint(message: &str) {
    println!("{}", MessageType::Hint.format(message));
}

/// Format a header/title (bold, cyan)
pub fn header(message: &str) -> ColoredString {
    message.bold().cyan()
}

/// Paint `text` with a `#RRGGBB` color. Falls back to plain text if the
/// color string does not parse.
pub fn paint_hex(text: &str, hex: &str) -> ColoredString {
    match parse_hex(hex) {
        Some((r, g, b)) => text.truecolor(r, g, b),
        None => text.normal(),
    }
}

/// Parse a `#RRGGBB` string into its components.
pub fn parse_hex(hex: &str) -> Option<(u8, u8, u8)> {
    let digits = hex.strip_prefix('#')?;
    if digits.len() != 6 || !digits.is_ascii() {
        return None;
    }
    let r = u8::from_str_radix(&digits[0..2], 16).ok()?;
    let g = u8::from_str_radix(&digits[2..4], 16).ok()?;
    let b = u8::from_str_radix(&digits[4..6], 16).ok()?;
    Some((r, g, b))
}
