//! Chart Components
//!
//! Coverage charts drawn on an HTML5 Canvas: weekly progress lines,
//! planned/actual velocity bars and the subject completion pie.

use leptos::*;
use std::f64::consts::PI;
use wasm_bindgen::JsCast;
use web_sys::{CanvasRenderingContext2d, HtmlCanvasElement};

use syllabus_sync::analytics::{Series, SubjectCompletion, TeachingVelocity};

const BACKGROUND: &str = "#ffffff";
const GRID: &str = "#e5e7eb"; // gray-200
const AXIS_TEXT: &str = "#6b7280"; // gray-500
const PLANNED_COLOR: &str = "#94a3b8";
const ACTUAL_COLOR: &str = "#3b82f6";

/// Plot area inside the canvas
struct Frame {
    left: f64,
    top: f64,
    width: f64,
    height: f64,
}

impl Frame {
    fn new(canvas: &HtmlCanvasElement) -> Self {
        let margin_left = 40.0;
        let margin_right = 20.0;
        let margin_top = 20.0;
        let margin_bottom = 40.0;

        Self {
            left: margin_left,
            top: margin_top,
            width: canvas.width() as f64 - margin_left - margin_right,
            height: canvas.height() as f64 - margin_top - margin_bottom,
        }
    }

    fn bottom(&self) -> f64 {
        self.top + self.height
    }

    /// Canvas y for `value` on a 0..=`max` axis
    fn y(&self, value: f64, max: f64) -> f64 {
        self.bottom() - (value / max) * self.height
    }
}

fn context(canvas: &HtmlCanvasElement) -> Option<CanvasRenderingContext2d> {
    canvas
        .get_context("2d")
        .ok()
        .flatten()
        .and_then(|ctx| ctx.dyn_into::<CanvasRenderingContext2d>().ok())
}

fn clear(ctx: &CanvasRenderingContext2d, canvas: &HtmlCanvasElement) {
    ctx.set_fill_style(&BACKGROUND.into());
    ctx.fill_rect(0.0, 0.0, canvas.width() as f64, canvas.height() as f64);
}

/// Horizontal grid with five steps up to `max`
fn draw_grid(ctx: &CanvasRenderingContext2d, frame: &Frame, max: f64) {
    ctx.set_stroke_style(&GRID.into());
    ctx.set_line_width(1.0);
    ctx.set_font("12px sans-serif");

    for i in 0..=5 {
        let value = max * i as f64 / 5.0;
        let y = frame.y(value, max);

        ctx.begin_path();
        ctx.move_to(frame.left, y);
        ctx.line_to(frame.left + frame.width, y);
        ctx.stroke();

        ctx.set_fill_style(&AXIS_TEXT.into());
        let _ = ctx.fill_text(&format!("{}", value.round()), 5.0, y + 4.0);
    }
}

/// Labels centered under each of `labels.len()` equal slots
fn draw_slot_labels(ctx: &CanvasRenderingContext2d, frame: &Frame, labels: &[String]) {
    if labels.is_empty() {
        return;
    }
    ctx.set_fill_style(&AXIS_TEXT.into());
    ctx.set_font("12px sans-serif");

    let slot = frame.width / labels.len() as f64;
    for (i, label) in labels.iter().enumerate() {
        let x = frame.left + slot * (i as f64 + 0.5);
        let _ = ctx.fill_text(label, x - 3.0 * label.len() as f64, frame.bottom() + 20.0);
    }
}

fn draw_empty(ctx: &CanvasRenderingContext2d, canvas: &HtmlCanvasElement) {
    ctx.set_fill_style(&AXIS_TEXT.into());
    ctx.set_font("16px sans-serif");
    let _ = ctx.fill_text(
        "No data to display",
        canvas.width() as f64 / 2.0 - 70.0,
        canvas.height() as f64 / 2.0,
    );
}

/// Weekly progress, one line per subject
#[component]
pub fn ProgressLineChart(
    #[prop(into)]
    series: Signal<Vec<Series>>,
    labels: Vec<String>,
) -> impl IntoView {
    let canvas_ref = create_node_ref::<html::Canvas>();

    create_effect(move |_| {
        let series = series.get();
        if let Some(canvas) = canvas_ref.get() {
            draw_progress_lines(&canvas, &series, &labels);
        }
    });

    view! {
        <div>
            <canvas node_ref=canvas_ref width="800" height="300" class="w-full h-72 rounded-lg" />
            <div class="flex justify-center flex-wrap gap-4 mt-2">
                {move || {
                    series
                        .get()
                        .into_iter()
                        .map(|s| view! { <LegendEntry color=s.color label=s.name.to_string() /> })
                        .collect_view()
                }}
            </div>
        </div>
    }
}

/// Planned against actual topics per month
#[component]
pub fn VelocityBarChart(data: Vec<TeachingVelocity>, max: u32) -> impl IntoView {
    let canvas_ref = create_node_ref::<html::Canvas>();

    create_effect(move |_| {
        if let Some(canvas) = canvas_ref.get() {
            draw_velocity_bars(&canvas, &data, max);
        }
    });

    view! {
        <div>
            <canvas node_ref=canvas_ref width="800" height="300" class="w-full h-72 rounded-lg" />
            <div class="flex justify-center gap-4 mt-2">
                <LegendEntry color=PLANNED_COLOR label="Planned Topics".to_string() />
                <LegendEntry color=ACTUAL_COLOR label="Actual Topics".to_string() />
            </div>
        </div>
    }
}

/// Share of completion per subject
#[component]
pub fn CompletionPieChart(data: Vec<SubjectCompletion>) -> impl IntoView {
    let canvas_ref = create_node_ref::<html::Canvas>();
    let legend = data.clone();

    create_effect(move |_| {
        if let Some(canvas) = canvas_ref.get() {
            draw_completion_pie(&canvas, &data);
        }
    });

    view! {
        <div>
            <canvas node_ref=canvas_ref width="400" height="300" class="w-full h-72 rounded-lg" />
            <div class="flex justify-center flex-wrap gap-4 mt-2">
                {legend
                    .into_iter()
                    .map(|c| view! { <LegendEntry color=c.color label=format!("{} {}%", c.name, c.value) /> })
                    .collect_view()}
            </div>
        </div>
    }
}

#[component]
fn LegendEntry(color: &'static str, label: String) -> impl IntoView {
    view! {
        <div class="flex items-center space-x-2">
            <div class="w-3 h-3 rounded-full" style=format!("background-color: {}", color) />
            <span class="text-sm text-gray-600">{label}</span>
        </div>
    }
}

fn draw_progress_lines(canvas: &HtmlCanvasElement, series: &[Series], labels: &[String]) {
    let Some(ctx) = context(canvas) else {
        return;
    };
    clear(&ctx, canvas);

    if series.is_empty() || labels.is_empty() {
        draw_empty(&ctx, canvas);
        return;
    }

    let frame = Frame::new(canvas);
    let max = 100.0;
    draw_grid(&ctx, &frame, max);
    draw_slot_labels(&ctx, &frame, labels);

    let slot = frame.width / labels.len() as f64;
    let x = |i: usize| frame.left + slot * (i as f64 + 0.5);

    for s in series {
        ctx.set_stroke_style(&s.color.into());
        ctx.set_line_width(2.0);
        ctx.begin_path();
        for (i, value) in s.points.iter().enumerate() {
            let y = frame.y(*value as f64, max);
            if i == 0 {
                ctx.move_to(x(i), y);
            } else {
                ctx.line_to(x(i), y);
            }
        }
        ctx.stroke();

        ctx.set_fill_style(&s.color.into());
        for (i, value) in s.points.iter().enumerate() {
            ctx.begin_path();
            let _ = ctx.arc(x(i), frame.y(*value as f64, max), 4.0, 0.0, PI * 2.0);
            ctx.fill();
        }
    }
}

fn draw_velocity_bars(canvas: &HtmlCanvasElement, data: &[TeachingVelocity], max: u32) {
    let Some(ctx) = context(canvas) else {
        return;
    };
    clear(&ctx, canvas);

    if data.is_empty() || max == 0 {
        draw_empty(&ctx, canvas);
        return;
    }

    let frame = Frame::new(canvas);
    // Round the axis up to the next multiple of ten
    let max = ((max + 9) / 10 * 10) as f64;
    draw_grid(&ctx, &frame, max);

    let labels: Vec<String> = data.iter().map(|v| v.month.to_string()).collect();
    draw_slot_labels(&ctx, &frame, &labels);

    let slot = frame.width / data.len() as f64;
    let bar = slot * 0.3;

    for (i, v) in data.iter().enumerate() {
        let center = frame.left + slot * (i as f64 + 0.5);
        for (offset, value, color) in [
            (-bar, v.planned, PLANNED_COLOR),
            (0.0, v.actual, ACTUAL_COLOR),
        ] {
            let top = frame.y(value as f64, max);
            ctx.set_fill_style(&color.into());
            ctx.fill_rect(center + offset, top, bar, frame.bottom() - top);
        }
    }
}

fn draw_completion_pie(canvas: &HtmlCanvasElement, data: &[SubjectCompletion]) {
    let Some(ctx) = context(canvas) else {
        return;
    };
    clear(&ctx, canvas);

    let total: f64 = data.iter().map(|c| c.value as f64).sum();
    if total <= 0.0 {
        draw_empty(&ctx, canvas);
        return;
    }

    let cx = canvas.width() as f64 / 2.0;
    let cy = canvas.height() as f64 / 2.0;
    let radius = cx.min(cy) - 20.0;

    let mut start = -PI / 2.0;
    for slice in data {
        let sweep = slice.value as f64 / total * PI * 2.0;
        ctx.set_fill_style(&slice.color.into());
        ctx.begin_path();
        ctx.move_to(cx, cy);
        let _ = ctx.arc(cx, cy, radius, start, start + sweep);
        ctx.close_path();
        ctx.fill();
        start += sweep;
    }
}
