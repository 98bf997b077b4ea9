//! SVG radar chart of a stat block

use dioxus::prelude::*;

use arena_domain::{StatBlock, StatKind};

use crate::presentation::utils::radar::{points_attr, RadarGeometry, RING_LEVELS};

const LABEL_OFFSET: f64 = 14.0;

#[component]
pub fn RadarChart(stats: StatBlock, #[props(default = 300.0)] size: f64) -> Element {
    let geometry = RadarGeometry::square(size, 40.0);
    let (cx, cy) = geometry.center;
    let rings: Vec<String> = RING_LEVELS
        .iter()
        .map(|level| points_attr(&geometry.ring_points(*level)))
        .collect();
    let polygon = points_attr(&geometry.stat_points(&stats));

    rsx! {
        svg {
            class: "radar-chart",
            width: "{size}",
            height: "{size}",
            view_box: "0 0 {size} {size}",

            for ring in rings {
                polygon {
                    points: "{ring}",
                    fill: "none",
                    stroke: "#d0d4e0",
                    stroke_width: "1",
                }
            }

            for (i, kind) in StatKind::ALL.iter().enumerate() {
                {
                    let (x, y) = geometry.point(i, 1.0);
                    let (lx, ly) = geometry.label_point(i, LABEL_OFFSET);
                    let label = kind.display_name();
                    rsx! {
                        line {
                            x1: "{cx}",
                            y1: "{cy}",
                            x2: "{x}",
                            y2: "{y}",
                            stroke: "#d0d4e0",
                        }
                        text {
                            x: "{lx}",
                            y: "{ly}",
                            text_anchor: "middle",
                            dominant_baseline: "middle",
                            font_size: "11",
                            fill: "#4a5068",
                            "{label}"
                        }
                    }
                }
            }

            polygon {
                class: "radar-values",
                points: "{polygon}",
                fill: "rgba(52, 152, 219, 0.35)",
                stroke: "#2980b9",
                stroke_width: "2",
            }
        }
    }
}
