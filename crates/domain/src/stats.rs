//! Combat stats - the five bounded attributes every character carries.
//!
//! Provides type safety for stat references instead of using magic strings
//! like "strength" or "combat" throughout the client.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use crate::error::DomainError;

/// One of the five combat attributes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum StatKind {
    Strength,
    Speed,
    Durability,
    Power,
    Combat,
}

impl StatKind {
    /// All stats, in display and wire order.
    pub const ALL: [StatKind; 5] = [
        Self::Strength,
        Self::Speed,
        Self::Durability,
        Self::Power,
        Self::Combat,
    ];

    /// Returns the wire field name (e.g., "strength").
    pub fn field_name(&self) -> &'static str {
        match self {
            Self::Strength => "strength",
            Self::Speed => "speed",
            Self::Durability => "durability",
            Self::Power => "power",
            Self::Combat => "combat",
        }
    }

    /// Returns the label shown next to sliders and chart axes.
    pub fn display_name(&self) -> &'static str {
        match self {
            Self::Strength => "Strength",
            Self::Speed => "Speed",
            Self::Durability => "Durability",
            Self::Power => "Power",
            Self::Combat => "Combat",
        }
    }
}

impl fmt::Display for StatKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.field_name())
    }
}

impl FromStr for StatKind {
    type Err = DomainError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "strength" => Ok(Self::Strength),
            "speed" => Ok(Self::Speed),
            "durability" => Ok(Self::Durability),
            "power" => Ok(Self::Power),
            "combat" => Ok(Self::Combat),
            _ => Err(DomainError::parse(format!("Unknown stat: {}", s))),
        }
    }
}

/// A stat value in `[0, 100]`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Default, Serialize, Deserialize)]
#[serde(try_from = "i64", into = "i64")]
pub struct StatValue(u8);

impl StatValue {
    pub const MIN: u8 = 0;
    pub const MAX: u8 = 100;

    /// Strict constructor: rejects anything outside `[0, 100]`.
    pub fn new(kind: StatKind, value: i64) -> Result<Self, DomainError> {
        if value < i64::from(Self::MIN) || value > i64::from(Self::MAX) {
            return Err(DomainError::stat_out_of_range(kind.field_name(), value));
        }
        Ok(Self(value as u8))
    }

    /// Slider-style constructor: pins the value into range, the way a range
    /// input control does.
    pub fn clamped(value: i64) -> Self {
        Self(value.clamp(i64::from(Self::MIN), i64::from(Self::MAX)) as u8)
    }

    pub fn get(self) -> u8 {
        self.0
    }

    /// Fraction of the maximum, for progress bars and chart radii.
    pub fn ratio(self) -> f64 {
        f64::from(self.0) / f64::from(Self::MAX)
    }
}

impl fmt::Display for StatValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl TryFrom<i64> for StatValue {
    type Error = DomainError;

    fn try_from(value: i64) -> Result<Self, Self::Error> {
        if value < i64::from(Self::MIN) || value > i64::from(Self::MAX) {
            return Err(DomainError::validation(format!(
                "stat value {} is outside 0..=100",
                value
            )));
        }
        Ok(Self(value as u8))
    }
}

impl From<StatValue> for i64 {
    fn from(value: StatValue) -> Self {
        i64::from(value.0)
    }
}

/// The five combat stats of a character.
///
/// Serialized flat (one key per stat) so it can be flattened into the
/// character wire shape.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct StatBlock {
    pub strength: StatValue,
    pub speed: StatValue,
    pub durability: StatValue,
    pub power: StatValue,
    pub combat: StatValue,
}

impl StatBlock {
    pub fn get(&self, kind: StatKind) -> StatValue {
        match kind {
            StatKind::Strength => self.strength,
            StatKind::Speed => self.speed,
            StatKind::Durability => self.durability,
            StatKind::Power => self.power,
            StatKind::Combat => self.combat,
        }
    }

    pub fn set(&mut self, kind: StatKind, value: StatValue) {
        let slot = match kind {
            StatKind::Strength => &mut self.strength,
            StatKind::Speed => &mut self.speed,
            StatKind::Durability => &mut self.durability,
            StatKind::Power => &mut self.power,
            StatKind::Combat => &mut self.combat,
        };
        *slot = value;
    }

    /// Builder-style setter, handy in tests and fixtures.
    pub fn with(mut self, kind: StatKind, value: StatValue) -> Self {
        self.set(kind, value);
        self
    }

    /// Iterates stats in `StatKind::ALL` order.
    pub fn iter(&self) -> impl Iterator<Item = (StatKind, StatValue)> + '_ {
        StatKind::ALL.into_iter().map(move |kind| (kind, self.get(kind)))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_field_names_match_wire_format() {
        let names: Vec<_> = StatKind::ALL.iter().map(|k| k.field_name()).collect();
        assert_eq!(
            names,
            vec!["strength", "speed", "durability", "power", "combat"]
        );
    }

    #[test]
    fn test_stat_kind_from_str() {
        assert_eq!(StatKind::from_str("Speed").unwrap(), StatKind::Speed);
        assert_eq!(StatKind::from_str(" combat ").unwrap(), StatKind::Combat);
        assert!(StatKind::from_str("luck").is_err());
    }

    #[test]
    fn test_clamped_pins_into_range() {
        assert_eq!(StatValue::clamped(-5).get(), 0);
        assert_eq!(StatValue::clamped(55).get(), 55);
        assert_eq!(StatValue::clamped(250).get(), 100);
    }

    #[test]
    fn test_strict_constructor_rejects_out_of_range() {
        assert!(StatValue::new(StatKind::Power, 100).is_ok());
        let err = StatValue::new(StatKind::Power, 101).unwrap_err();
        assert_eq!(err, DomainError::stat_out_of_range("power", 101));
    }

    #[test]
    fn test_deserialize_rejects_out_of_range() {
        assert!(serde_json::from_str::<StatValue>("80").is_ok());
        assert!(serde_json::from_str::<StatValue>("101").is_err());
        assert!(serde_json::from_str::<StatValue>("-1").is_err());
    }

    #[test]
    fn test_stat_block_set_and_iter() {
        let mut block = StatBlock::default();
        block.set(StatKind::Durability, StatValue::clamped(90));

        assert_eq!(block.get(StatKind::Durability).get(), 90);
        assert_eq!(block.durability.get(), 90);

        let values: Vec<u8> = block.iter().map(|(_, v)| v.get()).collect();
        assert_eq!(values, vec![0, 0, 90, 0, 0]);
    }

    #[test]
    fn test_ratio() {
        assert_eq!(StatValue::clamped(50).ratio(), 0.5);
        assert_eq!(StatValue::clamped(100).ratio(), 1.0);
    }
}
