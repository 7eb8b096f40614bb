//! Price direction models

use serde::{Deserialize, Serialize};

/// Movement of a sample relative to a reference price
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Direction {
    Up,
    Down,
    Unchanged,
}

impl Direction {
    /// Exact comparison, no tolerance band
    pub fn classify(current: f64, reference: f64) -> Direction {
        if current > reference {
            Direction::Up
        } else if current < reference {
            Direction::Down
        } else {
            Direction::Unchanged
        }
    }

    pub fn glyph(self) -> &'static str {
        match self {
            Direction::Up => "▲",
            Direction::Down => "▼",
            Direction::Unchanged => "-",
        }
    }

    pub fn color_name(self) -> &'static str {
        match self {
            Direction::Up => "green",
            Direction::Down => "red",
            Direction::Unchanged => "gray",
        }
    }

    /// Embed color for `color_name`
    pub fn embed_color(self) -> u32 {
        match self {
            Direction::Up => 0x00ff00,
            Direction::Down => 0xff0000,
            Direction::Unchanged => 0x808080,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_classify() {
        assert_eq!(Direction::classify(1801.0, 1800.0), Direction::Up);
        assert_eq!(Direction::classify(1799.0, 1800.0), Direction::Down);
        assert_eq!(Direction::classify(1800.0, 1800.0), Direction::Unchanged);
    }

    #[test]
    fn test_classify_has_no_epsilon() {
        assert_eq!(Direction::classify(25.0 + 1e-12, 25.0), Direction::Up);
        assert_eq!(Direction::classify(25.0 - 1e-12, 25.0), Direction::Down);
    }

    #[test]
    fn test_presentation_mapping() {
        assert_eq!(Direction::Up.glyph(), "▲");
        assert_eq!(Direction::Up.color_name(), "green");
        assert_eq!(Direction::Down.glyph(), "▼");
        assert_eq!(Direction::Down.color_name(), "red");
        assert_eq!(Direction::Unchanged.glyph(), "-");
        assert_eq!(Direction::Unchanged.color_name(), "gray");
    }
}
