use dioxus::prelude::*;
use tracing::info;

use crate::core::breakdown::{Breakdown, Slice};

use super::ChartKind;

/// Width/height of the SVG viewBox the ring is drawn in.
const VIEW_SIZE: f64 = 200.0;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum LegendPlacement {
    #[default]
    Right,
    Bottom,
}

impl LegendPlacement {
    pub fn for_width(width: Option<f64>, wide_min_px: f64) -> Self {
        match width {
            Some(w) if w < wide_min_px => Self::Bottom,
            _ => Self::Right,
        }
    }

    fn css_class(self) -> &'static str {
        match self {
            Self::Right => "doughnut--legend-right",
            Self::Bottom => "doughnut--legend-bottom",
        }
    }
}

#[component]
pub fn DoughnutChart(kind: ChartKind, breakdown: Breakdown, placement: LegendPlacement) -> Element {
    let mut hovered = use_signal(|| Option::<usize>::None);
    let active = hovered().and_then(|idx| breakdown.slices.get(idx).cloned());

    let (center_title, center_detail) = match active.as_ref() {
        Some(slice) => (slice.label.clone(), slice.tooltip_text()),
        None => ("Total".to_string(), breakdown.total_label()),
    };

    rsx! {
        div {
            id: "{kind.mount_id()}",
            class: "doughnut {placement.css_class()}",
            div { class: "doughnut__ring",
                svg {
                    class: "doughnut__svg",
                    view_box: "0 0 {VIEW_SIZE} {VIEW_SIZE}",
                    role: "img",
                    for slice in breakdown.slices.iter().cloned() {
                        {render_slice(kind, slice, hovered)}
                    }
                }
                div {
                    class: if active.is_some() { "doughnut__center doughnut__center--tooltip" } else { "doughnut__center" },
                    span { class: "doughnut__center-title", "{center_title}" }
                    span { class: "doughnut__center-detail", "{center_detail}" }
                }
            }
            ul { class: "doughnut__legend",
                for slice in breakdown.slices.iter() {
                    li {
                        key: "{slice.index}",
                        class: "doughnut__legend-item",
                        onmouseenter: {
                            let index = slice.index;
                            move |_| hovered.set(Some(index))
                        },
                        onmouseleave: move |_| hovered.set(None),
                        span {
                            class: "doughnut__legend-swatch",
                            style: "background-color: {slice.color}",
                        }
                        span { class: "doughnut__legend-text", "{slice.legend_text()}" }
                    }
                }
            }
        }
    }
}

fn render_slice(kind: ChartKind, slice: Slice, mut hovered: Signal<Option<usize>>) -> Element {
    let index = slice.index;
    let is_hovered = hovered() == Some(index);
    let fill = if is_hovered {
        slice.hover_color.clone()
    } else {
        slice.color.to_string()
    };
    let stroke_width = if is_hovered { "4" } else { "2" };
    let label = slice.label.clone();

    rsx! {
        path {
            key: "{index}",
            class: "doughnut__slice",
            d: "{slice.ring_path(VIEW_SIZE)}",
            fill: "{fill}",
            fill_rule: "evenodd",
            stroke: "#ffffff",
            stroke_width: "{stroke_width}",
            onmouseenter: move |_| hovered.set(Some(index)),
            onmouseleave: move |_| hovered.set(None),
            onclick: move |_| {
                info!(chart = kind.slug(), category = %label, "chart slice clicked");
            },
        }
    }
}
