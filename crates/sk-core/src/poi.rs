use serde::{Deserialize, Serialize};

use crate::format::{Format, OutputFormat, table};

/// A point of interest somewhere in a star system.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Poi {
    /// What the point is, e.g. "Asteroid base".
    pub point: String,
    /// Who is there.
    pub occupied_by: String,
    /// What is going on.
    pub situation: String,
}

impl Format for Poi {
    fn format(&self, fmt: OutputFormat) -> String {
        table(
            fmt,
            Some(self.point.as_str()),
            &[
                ("Occupied By", self.occupied_by.as_str()),
                ("Situation", self.situation.as_str()),
            ],
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn text_write_up() {
        let poi = Poi {
            point: "Asteroid base".into(),
            occupied_by: "Wage-slave miners".into(),
            situation: "Life support failing".into(),
        };
        assert_eq!(
            poi.format(OutputFormat::Text),
            "Asteroid base\nOccupied By : Wage-slave miners\nSituation   : Life support failing\n"
        );
    }
}
