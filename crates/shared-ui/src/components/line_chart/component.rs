use dioxus::prelude::*;

/// Drawing box of the chart in viewBox units.
const CHART_WIDTH: f64 = 640.0;
const CHART_HEIGHT: f64 = 360.0;
/// Inset between the viewBox edge and the plotted area.
const CHART_PADDING: f64 = 32.0;
/// Number of horizontal grid rows.
const GRID_ROWS: usize = 4;

/// One named line of a [`LineChart`].
#[derive(Debug, Clone, PartialEq)]
pub struct ChartSeries {
    pub name: String,
    pub color: String,
    pub values: Vec<f64>,
}

impl ChartSeries {
    pub fn new(name: impl Into<String>, color: impl Into<String>, values: Vec<f64>) -> Self {
        Self {
            name: name.into(),
            color: color.into(),
            values,
        }
    }
}

/// Minimum and maximum across every series, padded when degenerate so the
/// scale never divides by zero. A constant series plots as a centered
/// horizontal line.
fn value_bounds(series: &[ChartSeries]) -> (f64, f64) {
    let mut min = f64::INFINITY;
    let mut max = f64::NEG_INFINITY;
    for s in series {
        for &v in &s.values {
            min = min.min(v);
            max = max.max(v);
        }
    }
    if !min.is_finite() || !max.is_finite() {
        return (0.0, 1.0);
    }
    if min == max {
        return (min - 1.0, max + 1.0);
    }
    (min, max)
}

/// X coordinate of sample `i` out of `n` evenly spaced samples.
fn x_at(i: usize, n: usize) -> f64 {
    if n < 2 {
        return CHART_WIDTH / 2.0;
    }
    CHART_PADDING + (i as f64 / (n - 1) as f64) * (CHART_WIDTH - 2.0 * CHART_PADDING)
}

/// Y coordinate of `value` on a scale from `min` (bottom) to `max` (top).
fn y_at(value: f64, min: f64, max: f64) -> f64 {
    let range = max - min;
    CHART_HEIGHT - CHART_PADDING - ((value - min) / range) * (CHART_HEIGHT - 2.0 * CHART_PADDING)
}

/// SVG `points` attribute for one series on the shared scale.
fn polyline_points(values: &[f64], min: f64, max: f64) -> String {
    values
        .iter()
        .enumerate()
        .map(|(i, &v)| format!("{:.1},{:.1}", x_at(i, values.len()), y_at(v, min, max)))
        .collect::<Vec<_>>()
        .join(" ")
}

/// A multi-series line chart rendered as inline SVG: dashed grid rows,
/// one polyline per series, x-axis labels, and a legend row.
#[component]
pub fn LineChart(labels: Vec<String>, series: Vec<ChartSeries>) -> Element {
    let (min, max) = value_bounds(&series);

    let x_left = CHART_PADDING;
    let x_right = CHART_WIDTH - CHART_PADDING;
    let grid_ys: Vec<f64> = (0..=GRID_ROWS)
        .map(|row| {
            CHART_PADDING
                + (row as f64 / GRID_ROWS as f64) * (CHART_HEIGHT - 2.0 * CHART_PADDING)
        })
        .collect();

    let label_y = CHART_HEIGHT - CHART_PADDING + 18.0;
    let axis_x = CHART_PADDING - 6.0;
    let axis_top_y = CHART_PADDING + 4.0;
    let axis_bottom_y = CHART_HEIGHT - CHART_PADDING + 4.0;

    let label_count = labels.len();
    let placed_labels: Vec<(f64, String)> = labels
        .into_iter()
        .enumerate()
        .map(|(i, label)| (x_at(i, label_count), label))
        .collect();

    rsx! {
        document::Link { rel: "stylesheet", href: asset!("./style.css") }
        div { class: "line-chart",
            svg {
                class: "line-chart-canvas",
                view_box: "0 0 {CHART_WIDTH} {CHART_HEIGHT}",
                preserve_aspect_ratio: "xMidYMid meet",

                for gy in grid_ys {
                    line {
                        class: "line-chart-grid",
                        x1: "{x_left}",
                        x2: "{x_right}",
                        y1: "{gy}",
                        y2: "{gy}",
                        stroke_dasharray: "3 3",
                    }
                }

                for s in series.iter() {
                    polyline {
                        points: polyline_points(&s.values, min, max),
                        fill: "none",
                        stroke: "{s.color}",
                        stroke_width: "2",
                        stroke_linecap: "round",
                    }
                }

                for (x, label) in placed_labels {
                    text {
                        class: "line-chart-label",
                        x: "{x}",
                        y: "{label_y}",
                        text_anchor: "middle",
                        "{label}"
                    }
                }

                text {
                    class: "line-chart-label",
                    x: "{axis_x}",
                    y: "{axis_top_y}",
                    text_anchor: "end",
                    "{max:.0}"
                }
                text {
                    class: "line-chart-label",
                    x: "{axis_x}",
                    y: "{axis_bottom_y}",
                    text_anchor: "end",
                    "{min:.0}"
                }
            }

            div { class: "line-chart-legend",
                for s in series.iter() {
                    span { class: "line-chart-legend-item",
                        span {
                            class: "line-chart-swatch",
                            style: "background: {s.color};",
                        }
                        "{s.name}"
                    }
                }
            }
        }
    }
}
