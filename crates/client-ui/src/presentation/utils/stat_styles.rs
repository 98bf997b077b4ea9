//! Stat styling
//!
//! Extension trait mapping each stat to its bar colour, kept out of the
//! domain crate.

use arena_domain::StatKind;

pub trait StatStyle {
    /// CSS colour for bars and slider accents
    fn accent_color(&self) -> &'static str;
}

impl StatStyle for StatKind {
    fn accent_color(&self) -> &'static str {
        match self {
            StatKind::Strength => "#e74c3c",
            StatKind::Speed => "#f1c40f",
            StatKind::Durability => "#2ecc71",
            StatKind::Power => "#9b59b6",
            StatKind::Combat => "#3498db",
        }
    }
}
