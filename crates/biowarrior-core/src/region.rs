use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

/// Continental grouping used to aggregate country-level data. Serialized as
/// its display label.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub enum Region {
    Africa,
    Asia,
    Europe,
    #[serde(rename = "North America", alias = "NorthAmerica")]
    NorthAmerica,
    #[serde(rename = "South America", alias = "SouthAmerica")]
    SouthAmerica,
    Oceania,
    Unknown,
}

impl Region {
    /// The six resolvable regions, in the order the region selector lists them.
    pub const KNOWN: [Region; 6] = [
        Region::Africa,
        Region::Asia,
        Region::Europe,
        Region::NorthAmerica,
        Region::Oceania,
        Region::SouthAmerica,
    ];

    pub fn label(self) -> &'static str {
        match self {
            Region::Africa => "Africa",
            Region::Asia => "Asia",
            Region::Europe => "Europe",
            Region::NorthAmerica => "North America",
            Region::SouthAmerica => "South America",
            Region::Oceania => "Oceania",
            Region::Unknown => "Unknown",
        }
    }

    pub fn is_known(self) -> bool {
        self != Region::Unknown
    }
}

impl fmt::Display for Region {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ParseRegionError(pub String);

impl fmt::Display for ParseRegionError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "unrecognized region label {:?}", self.0)
    }
}

impl std::error::Error for ParseRegionError {}

impl FromStr for Region {
    type Err = ParseRegionError;

    /// Accepts the display label ("North America") or the variant name
    /// ("NorthAmerica"), case-insensitively. `Unknown` is not parseable.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let squashed: String = s
            .chars()
            .filter(|c| !c.is_whitespace() && *c != '_' && *c != '-')
            .flat_map(char::to_lowercase)
            .collect();
        match squashed.as_str() {
            "africa" => Ok(Region::Africa),
            "asia" => Ok(Region::Asia),
            "europe" => Ok(Region::Europe),
            "northamerica" => Ok(Region::NorthAmerica),
            "southamerica" => Ok(Region::SouthAmerica),
            "oceania" => Ok(Region::Oceania),
            _ => Err(ParseRegionError(s.to_string())),
        }
    }
}

/// Explanatory variable of the what-if model.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub enum Variable {
    Mining,
    Co2,
    Forest,
    Marine,
    Terrestrial,
}

impl Variable {
    pub const ALL: [Variable; 5] = [
        Variable::Mining,
        Variable::Co2,
        Variable::Forest,
        Variable::Marine,
        Variable::Terrestrial,
    ];

    /// Header of this variable's column in the observation table.
    pub fn column(self) -> &'static str {
        match self {
            Variable::Mining => "Mining",
            Variable::Co2 => "% change since 1990",
            Variable::Forest => "Forest",
            Variable::Marine => "Marine protected areas",
            Variable::Terrestrial => "Terrestrial protected areas",
        }
    }

    /// Short label used on the heatmap and slider captions.
    pub fn label(self) -> &'static str {
        match self {
            Variable::Mining => "Mining",
            Variable::Co2 => "CO2 Emissions",
            Variable::Forest => "Forest",
            Variable::Marine => "Marine protected areas",
            Variable::Terrestrial => "Terrestrial protected areas",
        }
    }
}

impl fmt::Display for Variable {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// Which per-region aggregate a time series holds.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Metric {
    /// Mean forest area.
    Forest,
    /// Mean mining share of value added, percent.
    Mining,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn labels_round_trip_through_from_str() {
        for region in Region::KNOWN {
            assert_eq!(region.label().parse::<Region>(), Ok(region));
        }
        assert_eq!("NorthAmerica".parse::<Region>(), Ok(Region::NorthAmerica));
        assert_eq!(" south america ".parse::<Region>(), Ok(Region::SouthAmerica));
    }

    #[test]
    fn serializes_as_label() {
        for region in Region::KNOWN.into_iter().chain([Region::Unknown]) {
            let json = serde_json::to_string(&region).unwrap();
            assert_eq!(json, format!("\"{}\"", region.label()));
            assert_eq!(serde_json::from_str::<Region>(&json).unwrap(), region);
        }
        let legacy: Region = serde_json::from_str("\"NorthAmerica\"").unwrap();
        assert_eq!(legacy, Region::NorthAmerica);
    }

    #[test]
    fn unknown_is_not_parseable() {
        assert!("Unknown".parse::<Region>().is_err());
        assert!("Antarctica".parse::<Region>().is_err());
        assert!(!Region::Unknown.is_known());
    }
}
