//! Goal difficulty tiers and custom difficulties.

use std::{fmt, str::FromStr};

#[cfg(feature = "schema")]
use schemars::JsonSchema;
use serde::{Deserialize, Deserializer, Serialize, Serializer};

/// Built-in difficulty tiers.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash)]
#[serde(rename_all = "lowercase")]
pub enum DifficultyTier {
    Easy,
    Medium,
    Hard,
    Extreme,
    Impossible,
}

impl DifficultyTier {
    pub fn as_str(&self) -> &'static str {
        match self {
            DifficultyTier::Easy => "easy",
            DifficultyTier::Medium => "medium",
            DifficultyTier::Hard => "hard",
            DifficultyTier::Extreme => "extreme",
            DifficultyTier::Impossible => "impossible",
        }
    }
}

/// Discriminant of a [`Difficulty`], which is all a rule ever matches on.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "schema", derive(JsonSchema))]
#[serde(rename_all = "lowercase")]
pub enum DifficultyKind {
    Easy,
    Medium,
    Hard,
    Extreme,
    Impossible,
    Custom,
}

impl DifficultyKind {
    pub fn as_str(&self) -> &'static str {
        match self {
            DifficultyKind::Easy => "easy",
            DifficultyKind::Medium => "medium",
            DifficultyKind::Hard => "hard",
            DifficultyKind::Extreme => "extreme",
            DifficultyKind::Impossible => "impossible",
            DifficultyKind::Custom => "custom",
        }
    }
}

impl FromStr for DifficultyKind {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "easy" => Ok(DifficultyKind::Easy),
            "medium" => Ok(DifficultyKind::Medium),
            "hard" => Ok(DifficultyKind::Hard),
            "extreme" => Ok(DifficultyKind::Extreme),
            "impossible" => Ok(DifficultyKind::Impossible),
            "custom" => Ok(DifficultyKind::Custom),
            _ => Err(format!("Invalid difficulty: {s}")),
        }
    }
}

impl fmt::Display for DifficultyKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Difficulty of a goal.
///
/// Custom difficulties only carry an opaque identifier; their display name
/// and color live with whoever renders them.
///
/// The string form is the tier name (`"hard"`) or `custom:<id>`, which is
/// also how the value is serialized and stored.
///
/// ```rust
/// use summit_core::models::{Difficulty, DifficultyKind, DifficultyTier};
///
/// let tier: Difficulty = "hard".parse().unwrap();
/// assert_eq!(tier, Difficulty::Tier(DifficultyTier::Hard));
///
/// let custom: Difficulty = "custom:marathon".parse().unwrap();
/// assert_eq!(custom.kind(), DifficultyKind::Custom);
/// assert_eq!(custom.to_string(), "custom:marathon");
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum Difficulty {
    Tier(DifficultyTier),
    Custom(String),
}

impl Difficulty {
    pub fn kind(&self) -> DifficultyKind {
        match self {
            Difficulty::Tier(DifficultyTier::Easy) => DifficultyKind::Easy,
            Difficulty::Tier(DifficultyTier::Medium) => DifficultyKind::Medium,
            Difficulty::Tier(DifficultyTier::Hard) => DifficultyKind::Hard,
            Difficulty::Tier(DifficultyTier::Extreme) => DifficultyKind::Extreme,
            Difficulty::Tier(DifficultyTier::Impossible) => DifficultyKind::Impossible,
            Difficulty::Custom(_) => DifficultyKind::Custom,
        }
    }
}

impl From<DifficultyTier> for Difficulty {
    fn from(tier: DifficultyTier) -> Self {
        Difficulty::Tier(tier)
    }
}

impl FromStr for Difficulty {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        if let Some(id) = s.strip_prefix("custom:") {
            if id.is_empty() {
                return Err("Custom difficulty requires an identifier".to_string());
            }
            return Ok(Difficulty::Custom(id.to_string()));
        }

        match s.parse::<DifficultyKind>()? {
            DifficultyKind::Easy => Ok(DifficultyTier::Easy.into()),
            DifficultyKind::Medium => Ok(DifficultyTier::Medium.into()),
            DifficultyKind::Hard => Ok(DifficultyTier::Hard.into()),
            DifficultyKind::Extreme => Ok(DifficultyTier::Extreme.into()),
            DifficultyKind::Impossible => Ok(DifficultyTier::Impossible.into()),
            DifficultyKind::Custom => {
                Err("Custom difficulty requires an identifier (custom:<id>)".to_string())
            }
        }
    }
}

impl fmt::Display for Difficulty {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Difficulty::Tier(tier) => f.write_str(tier.as_str()),
            Difficulty::Custom(id) => write!(f, "custom:{id}"),
        }
    }
}

impl Serialize for Difficulty {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_str(self)
    }
}

impl<'de> Deserialize<'de> for Difficulty {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let raw = String::deserialize(deserializer)?;
        raw.parse().map_err(serde::de::Error::custom)
    }
}

#[cfg(feature = "schema")]
impl JsonSchema for Difficulty {
    fn schema_name() -> std::borrow::Cow<'static, str> {
        "Difficulty".into()
    }

    fn json_schema(generator: &mut schemars::SchemaGenerator) -> schemars::Schema {
        String::json_schema(generator)
    }
}
