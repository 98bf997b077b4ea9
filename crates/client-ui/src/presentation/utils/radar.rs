//! Radar chart geometry
//!
//! One axis per stat, in `StatKind::ALL` order. The first axis points
//! straight up and the rest follow clockwise at equal angles. A value `v`
//! sits at `radius * v / 100` along its axis.

use std::f64::consts::PI;

use arena_domain::{StatBlock, StatKind, StatValue};

/// Background rings, as fractions of the full radius
pub const RING_LEVELS: [f64; 4] = [0.25, 0.5, 0.75, 1.0];

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct RadarGeometry {
    pub center: (f64, f64),
    pub radius: f64,
}

impl RadarGeometry {
    /// Square chart of side `size`, leaving `padding` for the labels.
    pub fn square(size: f64, padding: f64) -> Self {
        let half = size / 2.0;
        Self {
            center: (half, half),
            radius: (half - padding).max(0.0),
        }
    }

    /// Angle of the axis at `index`, in radians
    pub fn axis_angle(index: usize) -> f64 {
        let step = 2.0 * PI / StatKind::ALL.len() as f64;
        -PI / 2.0 + step * index as f64
    }

    /// Point at `fraction` of the radius along axis `index`
    pub fn point(&self, index: usize, fraction: f64) -> (f64, f64) {
        let angle = Self::axis_angle(index);
        let distance = self.radius * fraction.clamp(0.0, 1.0);
        (
            self.center.0 + distance * angle.cos(),
            self.center.1 + distance * angle.sin(),
        )
    }

    pub fn value_point(&self, index: usize, value: StatValue) -> (f64, f64) {
        self.point(index, value.ratio())
    }

    /// Polygon vertices for a stat block, one per axis
    pub fn stat_points(&self, stats: &StatBlock) -> Vec<(f64, f64)> {
        StatKind::ALL
            .iter()
            .enumerate()
            .map(|(i, kind)| self.value_point(i, stats.get(*kind)))
            .collect()
    }

    /// Vertices of the background ring at `level`
    pub fn ring_points(&self, level: f64) -> Vec<(f64, f64)> {
        (0..StatKind::ALL.len())
            .map(|i| self.point(i, level))
            .collect()
    }

    /// Where an axis label goes, a little past the outer ring
    pub fn label_point(&self, index: usize, offset: f64) -> (f64, f64) {
        let angle = Self::axis_angle(index);
        let distance = self.radius + offset;
        (
            self.center.0 + distance * angle.cos(),
            self.center.1 + distance * angle.sin(),
        )
    }
}

/// Format vertices for an SVG `points` attribute.
pub fn points_attr(points: &[(f64, f64)]) -> String {
    points
        .iter()
        .map(|(x, y)| format!("{:.2},{:.2}", x, y))
        .collect::<Vec<_>>()
        .join(" ")
}
