use std::f64::consts::PI;

use dominator::{events, html, svg, Dom};
use futures_signals::map_ref;
use futures_signals::signal::SignalExt;

use shared::types::{LabelItem, SalesNumber};
use shared::views::{count_by_product, count_by_status};

use crate::constants::{TAG_DIV, TAG_SECTION, TAG_SELECT, TAG_SPAN};
use crate::elements::inputs::option_el;
use crate::state::{STATUS_FILTER, STORE};
use crate::utils::target_value;

static CHART_COLORS: [&str; 11] = [
    "#4f46e5", "#10b981", "#f59e0b", "#ef4444", "#3b82f6", "#8b5cf6", "#ec4899", "#6b7280",
    "#14b8a6", "#f97316", "#84cc16",
];

fn css_class(label: &str) -> String {
    format!("app-dashboard__{label}")
}

fn color(index: usize) -> &'static str {
    CHART_COLORS[index % CHART_COLORS.len()]
}

pub fn dashboard_view() -> Dom {
    html!(TAG_SECTION, {
        .class(css_class("container"))
        .child_signal(
            map_ref! {
                let numbers = STORE.sales_numbers.signal_cloned(),
                let statuses = STORE.statuses.signal_cloned(),
                let status_filter = STATUS_FILTER.signal_cloned() =>
                Some(dashboard_content(numbers, statuses, status_filter))
            }
        )
    })
}

fn dashboard_content(numbers: &[SalesNumber], statuses: &[LabelItem], status_filter: &str) -> Dom {
    html!(TAG_DIV, {
        .children([
            html!(TAG_DIV, {
                .class(css_class("card"))
                .children([
                    html!("h2", {
                        .text("Números por Estado")
                    }),
                    status_chart(&count_by_status(numbers)),
                ])
            }),
            html!(TAG_DIV, {
                .class(css_class("card"))
                .children([
                    html!("h2", {
                        .text("Números por Producto")
                    }),
                    status_select(statuses, status_filter),
                    product_bars(&count_by_product(numbers, status_filter)),
                ])
            }),
        ])
    })
}

// === status pie ===

fn status_chart(counts: &[(String, usize)]) -> Dom {
    let total: usize = counts.iter().map(|(_, count)| count).sum();
    if total == 0 {
        return html!(TAG_DIV, {
            .class(css_class("empty"))
            .text("Sin datos todavía.")
        });
    }
    html!(TAG_DIV, {
        .class(css_class("pie"))
        .children([pie_svg(counts, total), legend(counts)])
    })
}

fn pie_svg(counts: &[(String, usize)], total: usize) -> Dom {
    // A single slice is the whole circle; the arc path degenerates there.
    if counts.len() == 1 {
        return svg!("svg", {
            .attr("viewBox", "0 0 32 32")
            .child(svg!("circle", {
                .attr("cx", "16")
                .attr("cy", "16")
                .attr("r", "16")
                .attr("fill", color(0))
            }))
        });
    }
    let mut start = -PI / 2.0;
    svg!("svg", {
        .attr("viewBox", "0 0 32 32")
        .children(counts.iter().enumerate().map(|(index, (_, count))| {
            let sweep = (*count as f64 / total as f64) * 2.0 * PI;
            let end = start + sweep;
            let path = svg!("path", {
                .attr("d", &arc_path(start, end))
                .attr("fill", color(index))
            });
            start = end;
            path
        }))
    })
}

fn arc_path(start: f64, end: f64) -> String {
    let (x0, y0) = point_on_rim(start);
    let (x1, y1) = point_on_rim(end);
    let large_arc = if end - start > PI { 1 } else { 0 };
    format!("M16,16 L{x0:.4},{y0:.4} A16,16 0 {large_arc} 1 {x1:.4},{y1:.4} Z")
}

fn point_on_rim(angle: f64) -> (f64, f64) {
    (16.0 + 16.0 * angle.cos(), 16.0 + 16.0 * angle.sin())
}

fn legend(counts: &[(String, usize)]) -> Dom {
    html!(TAG_DIV, {
        .class(css_class("legend"))
        .children(counts.iter().enumerate().map(|(index, (name, count))| {
            html!(TAG_DIV, {
                .class(css_class("legend-row"))
                .children([
                    html!(TAG_SPAN, {
                        .class(css_class("legend-swatch"))
                        .style("background-color", color(index))
                    }),
                    html!(TAG_SPAN, {
                        .text(&format!("{name}: {count}"))
                    }),
                ])
            })
        }))
    })
}

// === product bars ===

fn status_select(statuses: &[LabelItem], current: &str) -> Dom {
    let mut options = vec![option_el("", "Todos los Estados", current.is_empty())];
    options.extend(
        statuses
            .iter()
            .map(|status| option_el(&status.name, &status.name, status.name == current)),
    );
    html!(TAG_SELECT, {
        .children(options)
        .event(|e: events::Change| STATUS_FILTER.set(target_value(e.target())))
    })
}

fn product_bars(counts: &[(String, usize)]) -> Dom {
    let max = counts.iter().map(|(_, count)| *count).max().unwrap_or(0);
    if max == 0 {
        return html!(TAG_DIV, {
            .class(css_class("empty"))
            .text("Sin datos para este estado.")
        });
    }
    html!(TAG_DIV, {
        .class(css_class("bars"))
        .children(counts.iter().enumerate().map(|(index, (name, count))| {
            let width = (*count as f64 / max as f64) * 100.0;
            html!(TAG_DIV, {
                .class(css_class("bar-row"))
                .children([
                    html!(TAG_SPAN, {
                        .class(css_class("bar-label"))
                        .text(name)
                    }),
                    html!(TAG_DIV, {
                        .class(css_class("bar"))
                        .style("width", &format!("{width:.1}%"))
                        .style("background-color", color(index))
                        .text(&count.to_string())
                    }),
                ])
            })
        }))
    })
}
