//! Text and Markdown write-ups.
//!
//! Headers and two-column key/value tables are the only building blocks the
//! per-system write-ups need. Plain text aligns the key column; Markdown
//! emits pipe tables.

use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::SkError;

/// Output style for write-ups.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum OutputFormat {
    /// Plain text.
    Text,
    /// Markdown.
    Markdown,
}

impl OutputFormat {
    /// Every supported format.
    pub const ALL: [OutputFormat; 2] = [Self::Text, Self::Markdown];

    /// File extension used for this format.
    pub fn extension(self) -> &'static str {
        match self {
            Self::Text => "txt",
            Self::Markdown => "md",
        }
    }
}

impl std::fmt::Display for OutputFormat {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.extension())
    }
}

impl FromStr for OutputFormat {
    type Err = SkError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "txt" | "text" => Ok(Self::Text),
            "md" | "markdown" => Ok(Self::Markdown),
            other => Err(SkError::UnknownFormat(other.to_string())),
        }
    }
}

/// Types that can render themselves as a write-up.
pub trait Format {
    /// Render in the given output format.
    fn format(&self, fmt: OutputFormat) -> String;
}

/// A header line. `level` follows HTML/Markdown, 1 being the largest.
pub fn header(fmt: OutputFormat, level: usize, text: &str) -> String {
    match fmt {
        OutputFormat::Text => format!("{text}\n"),
        OutputFormat::Markdown => format!("{} {text}\n\n", "#".repeat(level.max(1))),
    }
}

/// A two-column table.
///
/// With a `title` the table starts a new block: plain text prints the title
/// on its own line, Markdown uses it as the header row. Without one, the
/// rows continue the previous table.
pub fn table(fmt: OutputFormat, title: Option<&str>, rows: &[(&str, &str)]) -> String {
    let mut out = String::new();

    match fmt {
        OutputFormat::Text => {
            if let Some(title) = title {
                out.push_str(title);
                out.push('\n');
            }
            let width = rows.iter().map(|(k, _)| k.chars().count()).max().unwrap_or(0);
            for (key, value) in rows {
                if value.is_empty() {
                    out.push_str(&format!("{key}\n"));
                } else {
                    out.push_str(&format!("{key:<width$} : {value}\n"));
                }
            }
        }
        OutputFormat::Markdown => {
            if let Some(title) = title {
                out.push_str(&format!("| {title} | |\n| --- | --- |\n"));
            }
            for (key, value) in rows {
                out.push_str(&format!("| {} | {} |\n", escape_cell(key), escape_cell(value)));
            }
        }
    }

    out
}

fn escape_cell(text: &str) -> String {
    text.replace('|', "\\|")
}
