//! DISC score model — the four-axis behavioral score every downstream derivation reads.
//!
//! Values are percentages but are NOT assumed to sum to 100. Stored and demo
//! profiles routinely carry partial sums, so nothing here normalizes or rejects
//! out-of-range input. Classification compares against absolute thresholds and
//! primary-vs-secondary ordering only.

use serde::{Deserialize, Serialize};

/// One DISC axis. Declaration order is the canonical tie-break order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum DiscAxis {
    /// Dominance
    Red,
    /// Influence
    Yellow,
    /// Steadiness
    Green,
    /// Conscientiousness
    Blue,
}

impl DiscAxis {
    /// Canonical order: red, yellow, green, blue.
    pub const ALL: [DiscAxis; 4] = [DiscAxis::Red, DiscAxis::Yellow, DiscAxis::Green, DiscAxis::Blue];

    pub fn as_str(&self) -> &'static str {
        match self {
            DiscAxis::Red => "red",
            DiscAxis::Yellow => "yellow",
            DiscAxis::Green => "green",
            DiscAxis::Blue => "blue",
        }
    }

    pub fn parse(name: &str) -> Option<Self> {
        match name.trim().to_ascii_lowercase().as_str() {
            "red" | "d" | "dominance" => Some(DiscAxis::Red),
            "yellow" | "i" | "influence" => Some(DiscAxis::Yellow),
            "green" | "s" | "steadiness" => Some(DiscAxis::Green),
            "blue" | "c" | "conscientiousness" => Some(DiscAxis::Blue),
            _ => None,
        }
    }
}

/// Raw DISC percentages for a candidate. Immutable once computed.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct DiscScore {
    pub red: f64,
    pub yellow: f64,
    pub green: f64,
    pub blue: f64,
}

/// One axis tagged with its value, as produced by [`DiscScore::ranked`].
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct RankedAxis {
    pub axis: DiscAxis,
    pub value: f64,
}

impl DiscScore {
    pub fn new(red: f64, yellow: f64, green: f64, blue: f64) -> Self {
        Self {
            red,
            yellow,
            green,
            blue,
        }
    }

    pub fn get(&self, axis: DiscAxis) -> f64 {
        match axis {
            DiscAxis::Red => self.red,
            DiscAxis::Yellow => self.yellow,
            DiscAxis::Green => self.green,
            DiscAxis::Blue => self.blue,
        }
    }

    /// Axes sorted descending by value.
    ///
    /// Stable sort over the canonical order, so equal values keep red before
    /// yellow before green before blue. NaN ranks below every number.
    pub fn ranked(&self) -> [RankedAxis; 4] {
        let mut ranked = DiscAxis::ALL.map(|axis| RankedAxis {
            axis,
            value: self.get(axis),
        });
        ranked.sort_by(|a, b| rank_key(b.value).total_cmp(&rank_key(a.value)));
        ranked
    }

    pub fn primary(&self) -> RankedAxis {
        self.ranked()[0]
    }

    pub fn secondary(&self) -> RankedAxis {
        self.ranked()[1]
    }

    /// True when no assessment data has been recorded.
    pub fn is_empty(&self) -> bool {
        DiscAxis::ALL.iter().all(|&axis| self.get(axis) == 0.0)
    }
}

/// Sort key with a total order: NaN sinks to the bottom, -0.0 ties with 0.0.
fn rank_key(value: f64) -> f64 {
    if value.is_nan() {
        f64::NEG_INFINITY
    } else if value == 0.0 {
        0.0
    } else {
        value
    }
}
