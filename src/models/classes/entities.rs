use serde::{Deserialize, Serialize};
use ts_rs::TS;

// 学期季节
#[derive(Debug, Clone, Copy, Serialize, PartialEq, TS)]
#[ts(export, export_to = "../frontend/src/types/generated/class.ts")]
pub enum Season {
    Spring,
    Summer,
    Fall,
}

impl Season {
    pub const SPRING: &'static str = "Spring";
    pub const SUMMER: &'static str = "Summer";
    pub const FALL: &'static str = "Fall";
}

impl<'de> Deserialize<'de> for Season {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: serde::Deserializer<'de>,
    {
        let s = String::deserialize(deserializer)?;
        s.parse().map_err(|_| {
            serde::de::Error::custom(format!(
                "无效的学期季节: '{s}'. 支持的季节: Spring, Summer, Fall"
            ))
        })
    }
}

impl std::fmt::Display for Season {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Season::Spring => write!(f, "{}", Season::SPRING),
            Season::Summer => write!(f, "{}", Season::SUMMER),
            Season::Fall => write!(f, "{}", Season::FALL),
        }
    }
}

impl std::str::FromStr for Season {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            Season::SPRING => Ok(Season::Spring),
            Season::SUMMER => Ok(Season::Summer),
            Season::FALL => Ok(Season::Fall),
            _ => Err(format!("Invalid season: {s}")),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_season_round_trip() {
        for season in [Season::Spring, Season::Summer, Season::Fall] {
            let parsed: Season = season.to_string().parse().unwrap();
            assert_eq!(parsed, season);
        }
    }

    #[test]
    fn test_invalid_season_rejected() {
        assert!("Winter".parse::<Season>().is_err());
        assert!("fall".parse::<Season>().is_err());
    }
}
