//! Tech-level colours.

use colored::Color;

/// Map colour for a tech-level code such as `"TL4"`.
pub fn tech_level_color(code: &str) -> Color {
    match code {
        "TL0" => Color::White,
        "TL1" => Color::Red,
        "TL2" => Color::Yellow,
        "TL3" => Color::Magenta,
        "TL4" | "TL4+" => Color::Green,
        "TL5" => Color::Cyan,
        _ => Color::White,
    }
}

/// Wrap one character in a foreground escape and a reset.
///
/// Always emits the escape, whatever the terminal supports.
pub fn paint(ch: char, color: Color) -> String {
    format!("\x1b[{}m{ch}\x1b[0m", color.to_fg_str())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn known_codes() {
        assert_eq!(tech_level_color("TL0"), Color::White);
        assert_eq!(tech_level_color("TL1"), Color::Red);
        assert_eq!(tech_level_color("TL2"), Color::Yellow);
        assert_eq!(tech_level_color("TL3"), Color::Magenta);
        assert_eq!(tech_level_color("TL4"), Color::Green);
        assert_eq!(tech_level_color("TL4+"), Color::Green);
        assert_eq!(tech_level_color("TL5"), Color::Cyan);
    }

    #[test]
    fn unknown_codes_are_white() {
        assert_eq!(tech_level_color("TL9"), Color::White);
        assert_eq!(tech_level_color(""), Color::White);
    }

    #[test]
    fn paint_escapes() {
        assert_eq!(paint('x', Color::Green), "\x1b[32mx\x1b[0m");
        assert_eq!(paint('y', Color::Cyan), "\x1b[36my\x1b[0m");
    }
}
