use dioxus::prelude::*;
use grievance_core::config::{
    CHART_CX, CHART_CY, CHART_EMPTY_COLOR, CHART_RADIUS, CHART_VIEWBOX,
};
use grievance_core::view::chart::{count_summary, legend, CategoryCounts, PieChart};

/// Pie chart of complaint priorities and feedback, with legend and counts.
#[component]
pub fn ProportionChart(chart: PieChart, counts: CategoryCounts) -> Element {
    let view_box = format!("0 0 {} {}", CHART_VIEWBOX, CHART_VIEWBOX);
    let legend = legend();
    let summary = count_summary(&counts);

    rsx! {
        section { class: "gp-chart",
            h3 { class: "gp-section-title", "Complaints and Feedback" }
            div { class: "gp-chart-body",
                svg {
                    class: "gp-chart-svg",
                    view_box: "{view_box}",
                    width: "{CHART_VIEWBOX}",
                    height: "{CHART_VIEWBOX}",
                    if chart.is_empty() {
                        circle {
                            cx: "{CHART_CX}",
                            cy: "{CHART_CY}",
                            r: "{CHART_RADIUS}",
                            fill: CHART_EMPTY_COLOR,
                        }
                    }
                    for wedge in chart.wedges.iter() {
                        if wedge.is_full_circle() {
                            circle {
                                key: "{wedge.category:?}",
                                cx: "{CHART_CX}",
                                cy: "{CHART_CY}",
                                r: "{CHART_RADIUS}",
                                fill: wedge.color(),
                            }
                        } else {
                            path {
                                key: "{wedge.category:?}",
                                d: "{wedge.path}",
                                fill: wedge.color(),
                            }
                        }
                    }
                }
                div { class: "gp-chart-side",
                    div { class: "gp-legend",
                        for entry in legend.iter() {
                            div { key: "{entry.label}", class: "legend-item",
                                span {
                                    class: "legend-color-dot",
                                    style: "background-color: {entry.color}",
                                }
                                span { class: "legend-label", "{entry.label}" }
                            }
                        }
                    }
                    div { class: "gp-counts",
                        for entry in summary.iter() {
                            div { key: "{entry.label}", class: "count-item",
                                span { class: "count-label", "{entry.label}" }
                                span {
                                    class: "count-value",
                                    style: "color: {entry.color}",
                                    "{entry.value}"
                                }
                            }
                        }
                    }
                }
            }
        }
    }
}
