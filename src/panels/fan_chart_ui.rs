//! Painting and pointer handling for a [`FanChart`].

use egui::{Align2, Color32, FontId, Mesh, Pos2, Rect, Sense, Shape, Stroke, Ui, Vec2};

use crate::chart::{ChartContext, ChartHit, FanChart};
use crate::data::bands::BandPoint;
use crate::data::scale::LinearScale;

const TICK_LEN: f32 = 4.0;
const TICK_FONT: f32 = 11.0;

/// Draw `chart` into the available width and route clicks through `ctx`.
///
/// Returns the widget response and whatever a click landed on this frame.
pub fn show_fan_chart(
    ui: &mut Ui,
    chart: &mut FanChart,
    ctx: &mut ChartContext<'_>,
) -> (egui::Response, Option<ChartHit>) {
    let now = ui.input(|i| i.time);
    chart.advance(now);

    let width = ui.available_width().max(120.0);
    let height = chart.config().height;
    chart.set_size(width, height);

    let (response, painter) = ui.allocate_painter(Vec2::new(width, height), Sense::click());
    let margin = chart.config().margin;
    let origin = response.rect.min + Vec2::new(margin.left, margin.top);
    let to_screen = |x: f64, y: f64| Pos2::new(origin.x + x as f32, origin.y + y as f32);
    let to_plot = |p: Pos2| [f64::from(p.x - origin.x), f64::from(p.y - origin.y)];

    let hovered = response.hover_pos().and_then(|p| chart.hit_test(to_plot(p)));
    let look = chart.config().look.clone();

    if let Some(ChartHit::Slice(step)) = &hovered {
        if let Some(region) = chart.slice_regions().get(*step) {
            let rect = Rect::from_min_size(
                to_screen(region.x, 0.0),
                Vec2::new(region.width as f32, region.height as f32),
            );
            painter.rect_filled(rect, 0.0, look.slice_hover_fill);
        }
    }

    if chart.bands_visible() {
        for (band, fill) in chart.bands().iter().zip(look.band_fills) {
            let points = band.points_at(now);
            painter.add(Shape::mesh(band_mesh(&points, fill, &to_screen)));
        }
    }

    if chart.baseline().visible {
        let y = chart.baseline().y_at(now);
        let (dash, gap) = look.baseline_dash;
        painter.extend(Shape::dashed_line(
            &[to_screen(0.0, y), to_screen(chart.scales().width(), y)],
            Stroke::new(look.baseline_width, look.baseline_color),
            dash,
            gap,
        ));
    }

    let hovered_line = match &hovered {
        Some(ChartHit::Line { index, .. }) => Some(*index),
        _ => None,
    };
    for (i, line) in chart.lines().iter().enumerate() {
        let pts: Vec<Pos2> = line.points().iter().map(|p| to_screen(p[0], p[1])).collect();
        let width = if hovered_line == Some(i) {
            look.hover_line_width
        } else {
            look.line_width
        };
        painter.add(Shape::line(pts, Stroke::new(width, line.color)));
    }

    for mark in chart.filter_marks() {
        painter.line_segment(
            [to_screen(mark.x0, mark.y), to_screen(mark.x1, mark.y)],
            Stroke::new(look.filter_mark_width, look.filter_mark_color),
        );
    }

    draw_axes(&painter, chart, now, &to_screen, look.axis_color);

    if hovered.is_some() {
        ui.ctx().set_cursor_icon(egui::CursorIcon::PointingHand);
    }

    ctx.anchor = response.rect;
    let mut hit = None;
    if response.clicked() {
        if let Some(pos) = response.interact_pointer_pos() {
            hit = chart.click(to_plot(pos), ctx);
        }
    }

    if chart.is_animating() {
        ui.ctx().request_repaint();
    }
    (response, hit)
}

/// Triangulate a band outline into a filled mesh, one quad per segment.
fn band_mesh(points: &[BandPoint], fill: Color32, to_screen: &impl Fn(f64, f64) -> Pos2) -> Mesh {
    let mut mesh = Mesh::default();
    for p in points {
        mesh.colored_vertex(to_screen(p.x, p.upper), fill);
        mesh.colored_vertex(to_screen(p.x, p.lower), fill);
    }
    for i in 1..points.len() as u32 {
        let (a, b, c, d) = (2 * i - 2, 2 * i - 1, 2 * i, 2 * i + 1);
        mesh.add_triangle(a, b, c);
        mesh.add_triangle(b, d, c);
    }
    mesh
}

fn draw_axes(
    painter: &egui::Painter,
    chart: &FanChart,
    now: f64,
    to_screen: &impl Fn(f64, f64) -> Pos2,
    color: Color32,
) {
    let stroke = Stroke::new(1.0, color);
    let font = FontId::proportional(TICK_FONT);
    let (w, h) = (chart.scales().width(), chart.scales().height());
    let ticks = chart.config().tick_count;

    // x axis along the bottom
    let x = chart.scales().displayed_x(now);
    painter.line_segment([to_screen(0.0, h), to_screen(w, h)], stroke);
    for t in x.ticks(ticks) {
        let px = x.map(t);
        if !(0.0..=w).contains(&px) {
            continue;
        }
        let base = to_screen(px, h);
        painter.line_segment([base, base + Vec2::new(0.0, TICK_LEN)], stroke);
        painter.text(
            base + Vec2::new(0.0, TICK_LEN + 1.0),
            Align2::CENTER_TOP,
            format_tick(t, &x, ticks),
            font.clone(),
            color,
        );
    }

    // y axis on the right
    let y = chart.scales().displayed_y(now);
    painter.line_segment([to_screen(w, 0.0), to_screen(w, h)], stroke);
    for t in y.ticks(ticks / 2) {
        let py = y.map(t);
        if !(0.0..=h).contains(&py) {
            continue;
        }
        let base = to_screen(w, py);
        painter.line_segment([base, base + Vec2::new(TICK_LEN, 0.0)], stroke);
        painter.text(
            base + Vec2::new(TICK_LEN + 2.0, 0.0),
            Align2::LEFT_CENTER,
            format_tick(t, &y, ticks / 2),
            font.clone(),
            color,
        );
    }
}

/// Tick label with as many decimals as the tick spacing needs.
fn format_tick(value: f64, scale: &LinearScale, count: usize) -> String {
    let span = (scale.domain[1] - scale.domain[0]).abs();
    let step = span / count.max(1) as f64;
    let decimals = if step >= 1.0 || step == 0.0 {
        0
    } else {
        (-step.log10().floor()) as usize
    };
    format!("{:.*}", decimals, value)
}
