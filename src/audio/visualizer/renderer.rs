// src/audio/visualizer/renderer.rs
//! Paints geometry shape lists onto a braille canvas.

use ratatui::{
    layout::Rect,
    style::Color,
    symbols::Marker,
    widgets::{
        canvas::{Canvas, Context, Line as CanvasLine},
        Block, Borders,
    },
    Frame,
};

use super::geometry::Shape;
use crate::theme::Palette;

/// Virtual pixels per terminal cell with the braille marker.
const PX_PER_COL: u16 = 2;
const PX_PER_ROW: u16 = 4;

/// Virtual pixel dimensions of a terminal area.
pub fn canvas_size(area: Rect) -> (f64, f64) {
    (
        f64::from(area.width.saturating_sub(2) * PX_PER_COL),
        f64::from(area.height.saturating_sub(2) * PX_PER_ROW),
    )
}

/// Render one frame of shapes. Dark themes fill the canvas black first so
/// the spectrum keeps its contrast regardless of terminal colors.
pub fn render_shapes(
    f: &mut Frame<'_>,
    area: Rect,
    title: &str,
    shapes: &[Shape],
    palette: &Palette,
) {
    let (width, height) = canvas_size(area);
    let block = Block::default().borders(Borders::ALL).title(title.to_string());

    let mut canvas = Canvas::default()
        .block(block)
        .marker(Marker::Braille)
        .x_bounds([0.0, width])
        .y_bounds([0.0, height]);
    if palette.dark_background {
        canvas = canvas.background_color(Color::Black);
    }

    let canvas = canvas.paint(|ctx| {
        for shape in shapes {
            paint_shape(ctx, shape);
        }
    });
    f.render_widget(canvas, area);
}

fn paint_shape(ctx: &mut Context<'_>, shape: &Shape) {
    match shape {
        Shape::Rect { x, y, w, h, color } => {
            // Filled rectangle: vertical strokes one virtual pixel apart.
            let mut sx = *x;
            let right = x + w;
            while sx <= right {
                ctx.draw(&CanvasLine {
                    x1: sx,
                    y1: *y,
                    x2: sx,
                    y2: y + h,
                    color: *color,
                });
                sx += 1.0;
            }
        }
        Shape::Segment {
            x1,
            y1,
            x2,
            y2,
            width,
            color,
        } => {
            draw_stroke(ctx, *x1, *y1, *x2, *y2, *width, *color);
        }
        Shape::Polyline {
            points,
            width,
            color,
        } => {
            for pair in points.windows(2) {
                draw_stroke(
                    ctx, pair[0].0, pair[0].1, pair[1].0, pair[1].1, *width, *color,
                );
            }
        }
    }
}

/// A line with an approximate stroke width: extra passes offset along the
/// segment's minor axis.
fn draw_stroke(ctx: &mut Context<'_>, x1: f64, y1: f64, x2: f64, y2: f64, width: f64, color: Color) {
    let (ox, oy) = if (x2 - x1).abs() >= (y2 - y1).abs() {
        (0.0, 1.0)
    } else {
        (1.0, 0.0)
    };
    let passes = (width.max(1.0)) as usize;
    for i in 0..passes {
        let shift = i as f64;
        ctx.draw(&CanvasLine {
            x1: x1 + ox * shift,
            y1: y1 + oy * shift,
            x2: x2 + ox * shift,
            y2: y2 + oy * shift,
            color,
        });
    }
}
