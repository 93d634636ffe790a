//! Style definitions for the shell output.

use crossterm::style::{Attribute, Color, ContentStyle};

fn fg(color: Color) -> ContentStyle {
    ContentStyle {
        foreground_color: Some(color),
        ..ContentStyle::default()
    }
}

fn bold(color: Color) -> ContentStyle {
    ContentStyle {
        attributes: Attribute::Bold.into(),
        ..fg(color)
    }
}

// =============================================================================
// Contact list styles
// =============================================================================

/// Style for screen titles (bold magenta).
pub fn title_style() -> ContentStyle {
    bold(Color::Magenta)
}

/// Style for contact names (bold, bright).
pub fn contact_name_style() -> ContentStyle {
    bold(Color::White)
}

// =============================================================================
// Message list styles
// =============================================================================

pub fn own_message_style() -> ContentStyle {
    fg(Color::White)
}

pub fn other_message_style() -> ContentStyle {
    fg(Color::Cyan)
}

/// Style for tags, timestamps, seen marks and hints (dimmed).
pub fn meta_style() -> ContentStyle {
    fg(Color::DarkGrey)
}

/// Style for the in-progress edit banner.
pub fn edit_banner_style() -> ContentStyle {
    fg(Color::Yellow)
}

// =============================================================================
// Notices
// =============================================================================

pub fn info_style() -> ContentStyle {
    fg(Color::Green)
}

pub fn error_style() -> ContentStyle {
    bold(Color::Red)
}
