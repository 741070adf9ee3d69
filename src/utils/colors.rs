//! Styling of list cells.

use ansi_term::{Colour, Style};

/// Completed tasks are struck through and dimmed.
pub fn style_text(text: &str, completed: bool) -> String {
    if completed {
        Style::new()
            .strikethrough()
            .fg(Colour::Fixed(245))
            .paint(text)
            .to_string()
    } else {
        text.to_string()
    }
}

pub fn style_due(value: &str, overdue: bool) -> String {
    if overdue {
        Colour::Red.bold().paint(value).to_string()
    } else {
        value.to_string()
    }
}

pub fn style_checkbox(completed: bool) -> String {
    if completed {
        Colour::Green.paint("[x]").to_string()
    } else {
        "[ ]".to_string()
    }
}

/// Placeholder for an empty cell.
pub fn dim(value: &str) -> String {
    Colour::Fixed(245).paint(value).to_string()
}
