//! Labelled range input for one stat

use dioxus::prelude::*;

use arena_domain::{StatKind, StatValue};

use crate::presentation::utils::StatStyle;

/// Props for the StatSlider component
#[derive(Props, Clone, PartialEq)]
pub struct StatSliderProps {
    pub kind: StatKind,
    pub value: StatValue,
    /// Raw slider position; the form clamps it
    pub on_change: EventHandler<i64>,
    #[props(default)]
    pub disabled: bool,
}

#[component]
pub fn StatSlider(props: StatSliderProps) -> Element {
    let kind = props.kind;
    let value = props.value.get();
    let label = kind.display_name();
    let field = kind.field_name();
    let accent = kind.accent_color();
    let (min, max) = (StatValue::MIN, StatValue::MAX);

    rsx! {
        div {
            class: "stat-slider",
            style: "display: flex; align-items: center; gap: 0.75rem; margin: 0.4rem 0;",

            label {
                r#for: "stat-{field}",
                style: "width: 6.5rem;",
                "{label}"
            }
            input {
                id: "stat-{field}",
                name: "{field}",
                r#type: "range",
                min: "{min}",
                max: "{max}",
                value: "{value}",
                disabled: props.disabled,
                style: "flex: 1; accent-color: {accent};",
                oninput: move |e| {
                    if let Ok(raw) = e.value().parse::<i64>() {
                        props.on_change.call(raw);
                    }
                },
            }
            span {
                class: "stat-value",
                style: "width: 2.5rem; text-align: right;",
                "{value}"
            }
        }
    }
}
