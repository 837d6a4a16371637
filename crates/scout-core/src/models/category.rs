use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

/// Research categories explored independently per entity.
///
/// The set and its order are fixed for the lifetime of the system; the
/// order is the tie-breaker for category selection.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum Category {
    DigitalInfrastructure,
    Commercial,
    Leadership,
    Operations,
    Partnerships,
}

impl Category {
    /// All categories in their fixed order.
    pub const ALL: [Category; 5] = [
        Category::DigitalInfrastructure,
        Category::Commercial,
        Category::Leadership,
        Category::Operations,
        Category::Partnerships,
    ];

    /// Stable kebab-case identifier.
    pub fn as_str(self) -> &'static str {
        match self {
            Category::DigitalInfrastructure => "digital-infrastructure",
            Category::Commercial => "commercial",
            Category::Leadership => "leadership",
            Category::Operations => "operations",
            Category::Partnerships => "partnerships",
        }
    }

    /// Position in the fixed order.
    pub fn ordinal(self) -> usize {
        Self::ALL
            .iter()
            .position(|c| *c == self)
            .unwrap_or(Self::ALL.len())
    }
}

impl fmt::Display for Category {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Category {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .iter()
            .copied()
            .find(|c| c.as_str() == s)
            .ok_or_else(|| format!("unknown category: {s}"))
    }
}
