//! Inline-SVG chart components for the analytics dashboard.
//!
//! No charting library: a sentiment pie and a per-course bar chart are
//! drawn directly, with the geometry kept in plain functions.

#[cfg(test)]
#[path = "charts_test.rs"]
mod charts_test;

use std::f64::consts::{FRAC_PI_2, TAU};

use leptos::prelude::*;

use crate::net::types::CourseFeedbackSummary;

const POSITIVE_COLOR: &str = "#10b981";
const NEGATIVE_COLOR: &str = "#ef4444";
const NEUTRAL_COLOR: &str = "#f59e0b";

/// Sentiment counts aggregated across all courses.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct SentimentTotals {
    pub positive: i64,
    pub negative: i64,
    pub neutral: i64,
}

impl SentimentTotals {
    pub fn from_rows(rows: &[CourseFeedbackSummary]) -> Self {
        rows.iter().fold(Self::default(), |acc, row| Self {
            positive: acc.positive + row.positive,
            negative: acc.negative + row.negative,
            neutral: acc.neutral + row.neutral,
        })
    }

    pub fn total(self) -> i64 {
        self.positive + self.negative + self.neutral
    }

    /// Labelled non-zero slices, in fixed display order.
    pub fn slices(self) -> Vec<(&'static str, &'static str, i64)> {
        [
            ("Positive", POSITIVE_COLOR, self.positive),
            ("Negative", NEGATIVE_COLOR, self.negative),
            ("Neutral", NEUTRAL_COLOR, self.neutral),
        ]
        .into_iter()
        .filter(|(_, _, value)| *value > 0)
        .collect()
    }
}

/// Point on the circle at `frac` of a full turn, measured clockwise from
/// the top.
fn polar(cx: f64, cy: f64, r: f64, frac: f64) -> (f64, f64) {
    let angle = frac * TAU - FRAC_PI_2;
    (cx + r * angle.cos(), cy + r * angle.sin())
}

/// SVG path for one pie slice spanning `[start, end]` turn fractions.
fn slice_path(cx: f64, cy: f64, r: f64, start: f64, end: f64) -> String {
    let (x1, y1) = polar(cx, cy, r, start);
    let (x2, y2) = polar(cx, cy, r, end);
    let large_arc = i32::from(end - start > 0.5);
    format!("M {cx:.2} {cy:.2} L {x1:.2} {y1:.2} A {r:.2} {r:.2} 0 {large_arc} 1 {x2:.2} {y2:.2} Z")
}

/// Bar height in pixels for `value` against the chart maximum.
fn bar_height(value: i64, max: i64, plot: f64) -> f64 {
    if max <= 0 || value <= 0 {
        0.0
    } else {
        plot * value as f64 / max as f64
    }
}

/// Overall sentiment distribution as a pie.
#[component]
pub fn SentimentPieChart(totals: SentimentTotals) -> impl IntoView {
    let slices = totals.slices();
    let total = totals.total();

    if total == 0 {
        return view! { <p class="chart__empty">"No data to display"</p> }.into_any();
    }

    // A single non-zero category is a full disc; an arc from a point back
    // to itself would collapse.
    let shapes = if slices.len() == 1 {
        let (label, color, value) = slices[0];
        vec![view! {
            <circle cx="80" cy="80" r="70" fill=color>
                <title>{format!("{label}: {value}")}</title>
            </circle>
        }
        .into_any()]
    } else {
        let mut start = 0.0;
        slices
            .iter()
            .map(|&(label, color, value)| {
                let frac = value as f64 / total as f64;
                let d = slice_path(80.0, 80.0, 70.0, start, start + frac);
                start += frac;
                view! {
                    <path d=d fill=color>
                        <title>{format!("{label}: {value}")}</title>
                    </path>
                }
                .into_any()
            })
            .collect::<Vec<_>>()
    };

    view! {
        <div class="chart chart--pie">
            <svg viewBox="0 0 160 160" role="img" aria-label="Sentiment distribution">
                {shapes}
            </svg>
            <ul class="chart__legend">
                {slices
                    .iter()
                    .map(|&(label, color, value)| {
                        let percent = 100.0 * value as f64 / total as f64;
                        view! {
                            <li class="chart__legend-item">
                                <span class="chart__swatch" style=format!("background:{color}")></span>
                                {format!("{label} {percent:.0}%")}
                            </li>
                        }
                    })
                    .collect::<Vec<_>>()}
            </ul>
        </div>
    }
    .into_any()
}

/// Per-course sentiment counts as grouped bars.
#[component]
pub fn FeedbackBarChart(rows: Vec<CourseFeedbackSummary>) -> impl IntoView {
    if rows.is_empty() {
        return view! { <p class="chart__empty">"No data to display"</p> }.into_any();
    }

    const GROUP_WIDTH: f64 = 70.0;
    const BAR_WIDTH: f64 = 16.0;
    const PLOT_HEIGHT: f64 = 120.0;
    const BASELINE: f64 = 130.0;

    let max = rows
        .iter()
        .flat_map(|r| [r.positive, r.negative, r.neutral])
        .max()
        .unwrap_or(0);
    let width = GROUP_WIDTH * rows.len() as f64 + 20.0;

    let groups = rows
        .iter()
        .enumerate()
        .map(|(i, row)| {
            let x0 = 10.0 + GROUP_WIDTH * i as f64;
            let bars = [
                (POSITIVE_COLOR, row.positive),
                (NEGATIVE_COLOR, row.negative),
                (NEUTRAL_COLOR, row.neutral),
            ]
            .into_iter()
            .enumerate()
            .map(|(j, (color, value))| {
                let h = bar_height(value, max, PLOT_HEIGHT);
                view! {
                    <rect
                        x=format!("{:.2}", x0 + BAR_WIDTH * j as f64)
                        y=format!("{:.2}", BASELINE - h)
                        width=format!("{BAR_WIDTH:.0}")
                        height=format!("{h:.2}")
                        fill=color
                    >
                        <title>{value.to_string()}</title>
                    </rect>
                }
            })
            .collect::<Vec<_>>();

            view! {
                <g>
                    {bars}
                    <text
                        x=format!("{:.2}", x0 + GROUP_WIDTH / 2.0 - BAR_WIDTH / 2.0)
                        y="148"
                        class="chart__bar-label"
                        text-anchor="middle"
                    >
                        {row.course_code.clone()}
                    </text>
                </g>
            }
        })
        .collect::<Vec<_>>();

    view! {
        <div class="chart chart--bars">
            <svg
                viewBox=format!("0 0 {width:.0} 160")
                role="img"
                aria-label="Feedback per course"
            >
                {groups}
            </svg>
        </div>
    }
    .into_any()
}
