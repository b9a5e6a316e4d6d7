// src/audio/visualizer/geometry.rs
//! Pure draw-list geometry for the four visualization modes.
//!
//! Everything here is plain math over a virtual pixel canvas (origin
//! bottom-left, y up): one frame of analysis bytes in, a list of shapes
//! out. Painting happens in `renderer.rs`. Keeping this pure makes the
//! bounds invariants directly testable.

use ratatui::style::Color;

use crate::theme::Palette;

/// Blocky-bar layout: 8px blocks with 2px gaps, one block per 10 units of
/// magnitude.
const BLOCK_HEIGHT: f64 = 8.0;
const BLOCK_GAP: f64 = 2.0;
const BLOCK_STEP: f64 = BLOCK_HEIGHT + BLOCK_GAP;

/// Mirrored mode: midline sits this far below vertical center.
const MIRROR_DROP: f64 = 50.0;

/// Circular mode: inner radius of the radial segments.
const INNER_RADIUS: f64 = 50.0;

#[derive(Debug, Clone, PartialEq)]
pub enum Shape {
    /// Filled axis-aligned rectangle.
    Rect {
        x: f64,
        y: f64,
        w: f64,
        h: f64,
        color: Color,
    },
    /// Straight segment with a stroke width in virtual pixels.
    Segment {
        x1: f64,
        y1: f64,
        x2: f64,
        y2: f64,
        width: f64,
        color: Color,
    },
    /// Connected polyline.
    Polyline {
        points: Vec<(f64, f64)>,
        width: f64,
        color: Color,
    },
}

/// Classic spectrum bars. Width per bar is canvas_width / bin_count * 2.5;
/// height maps magnitude bytes straight to pixels, clamped to the canvas.
pub fn bars(frame: &[u8], width: f64, height: f64, palette: &Palette) -> Vec<Shape> {
    let mut shapes = Vec::new();
    if frame.is_empty() || width <= 0.0 || height <= 0.0 {
        return shapes;
    }
    let bar_width = width / frame.len() as f64 * 2.5;
    let mut x = 0.0;

    for &magnitude in frame {
        if x >= width {
            break;
        }
        // Wide-bar layouts (few bins) clamp to the remaining canvas.
        let draw_width = bar_width.min(width - x);
        if palette.blocky {
            blocky_bar(&mut shapes, x, draw_width, magnitude, height, palette);
        } else {
            gradient_bar(&mut shapes, x, draw_width, magnitude, height, palette);
        }
        x += bar_width + 1.0;
    }
    shapes
}

/// Discrete stacked blocks, color-banded by stack position, with one white
/// highlight block on top of a non-empty stack.
fn blocky_bar(
    shapes: &mut Vec<Shape>,
    x: f64,
    bar_width: f64,
    magnitude: u8,
    height: f64,
    palette: &Palette,
) {
    let count = (magnitude / 10) as usize;
    for i in 0..count {
        let y = i as f64 * BLOCK_STEP;
        if y + BLOCK_HEIGHT > height {
            return;
        }
        let color = if i > 16 {
            palette.end
        } else if i >= 10 {
            palette.mid
        } else {
            palette.start
        };
        shapes.push(Shape::Rect {
            x,
            y,
            w: bar_width,
            h: BLOCK_HEIGHT,
            color,
        });
    }
    if count > 0 {
        let y = count as f64 * BLOCK_STEP;
        if y + BLOCK_HEIGHT <= height {
            shapes.push(Shape::Rect {
                x,
                y,
                w: bar_width,
                h: BLOCK_HEIGHT,
                color: palette.highlight,
            });
        }
    }
}

/// Continuous bar as a bottom-to-top start/mid/end gradient, approximated
/// by thirds.
fn gradient_bar(
    shapes: &mut Vec<Shape>,
    x: f64,
    bar_width: f64,
    magnitude: u8,
    height: f64,
    palette: &Palette,
) {
    let bar_height = (magnitude as f64).min(height);
    if bar_height <= 0.0 {
        return;
    }
    let third = bar_height / 3.0;
    for (i, color) in [palette.start, palette.mid, palette.end].into_iter().enumerate() {
        shapes.push(Shape::Rect {
            x,
            y: i as f64 * third,
            w: bar_width,
            h: third,
            color,
        });
    }
}

/// Upward bars over a reference midline 50px below vertical center, with a
/// dimmed downward mirror at 0.6 of the upward height.
pub fn mirrored(frame: &[u8], width: f64, height: f64, palette: &Palette) -> Vec<Shape> {
    let mut shapes = Vec::new();
    if frame.is_empty() || width <= 0.0 || height <= 0.0 {
        return shapes;
    }
    let midline = (height / 2.0 - MIRROR_DROP).clamp(0.0, height);
    let bar_width = width / frame.len() as f64 * 2.5;
    let mut x = 0.0;

    for &magnitude in frame {
        if x >= width {
            break;
        }
        let draw_width = bar_width.min(width - x);
        let up = (magnitude as f64 * 0.8).min(height - midline);
        let down = (up * 0.6).min(midline);
        if up > 0.0 {
            shapes.push(Shape::Rect {
                x,
                y: midline,
                w: draw_width,
                h: up,
                color: palette.start,
            });
        }
        if down > 0.0 {
            shapes.push(Shape::Rect {
                x,
                y: midline - down,
                w: draw_width,
                h: down,
                color: palette.mirror,
            });
        }
        x += bar_width + 1.0;
    }

    shapes.push(Shape::Segment {
        x1: 0.0,
        y1: midline,
        x2: width,
        y2: midline,
        width: 1.0,
        color: palette.line,
    });
    shapes
}

/// Radial segments evenly distributed over a full turn, reaching from
/// radius 50 to 50 + magnitude * 0.8, clamped inside the canvas.
pub fn circular(frame: &[u8], width: f64, height: f64, palette: &Palette) -> Vec<Shape> {
    let mut shapes = Vec::new();
    if frame.is_empty() || width <= 0.0 || height <= 0.0 {
        return shapes;
    }
    let cx = width / 2.0;
    let cy = height / 2.0;
    let max_radius = cx.min(width - cx).min(cy).min(height - cy);
    let inner = INNER_RADIUS.min(max_radius);

    for (i, &magnitude) in frame.iter().enumerate() {
        let angle = i as f64 / frame.len() as f64 * std::f64::consts::TAU;
        let outer = (INNER_RADIUS + magnitude as f64 * 0.8).min(max_radius);
        if outer <= inner {
            continue;
        }
        let (sin, cos) = angle.sin_cos();
        shapes.push(Shape::Segment {
            x1: cx + inner * cos,
            y1: cy + inner * sin,
            x2: cx + outer * cos,
            y2: cy + outer * sin,
            width: 2.0,
            color: palette.line,
        });
    }
    shapes
}

/// Single connected polyline across the full width; samples map from
/// [0, 255] to a vertical offset around center.
pub fn waveform(frame: &[u8], width: f64, height: f64, palette: &Palette) -> Vec<Shape> {
    if frame.is_empty() || width <= 0.0 || height <= 0.0 {
        return Vec::new();
    }
    let step = width / frame.len() as f64;
    let points = frame
        .iter()
        .enumerate()
        .map(|(i, &sample)| {
            let v = sample as f64 / 128.0 - 1.0;
            let y = (height / 2.0 + v * height / 2.0).clamp(0.0, height);
            (i as f64 * step, y)
        })
        .collect();

    vec![Shape::Polyline {
        points,
        width: if palette.thin_waveform { 1.0 } else { 2.0 },
        color: palette.line,
    }]
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::theme::ThemeId;

    const W: f64 = 512.0;
    const H: f64 = 256.0;

    fn assert_in_bounds(shapes: &[Shape], width: f64, height: f64) {
        for shape in shapes {
            match shape {
                Shape::Rect { x, y, w, h, .. } => {
                    assert!(*w >= 0.0 && *h >= 0.0, "negative extent: {shape:?}");
                    assert!(*x >= 0.0 && *y >= 0.0, "out of bounds: {shape:?}");
                    assert!(x + w <= width + 1e-6, "out of bounds: {shape:?}");
                    assert!(y + h <= height + 1e-6, "out of bounds: {shape:?}");
                }
                Shape::Segment { x1, y1, x2, y2, .. } => {
                    for (x, y) in [(x1, y1), (x2, y2)] {
                        assert!(
                            (0.0..=width + 1e-6).contains(x) && (0.0..=height + 1e-6).contains(y),
                            "out of bounds: {shape:?}"
                        );
                    }
                }
                Shape::Polyline { points, .. } => {
                    for (x, y) in points {
                        assert!(
                            (0.0..=width + 1e-6).contains(x) && (0.0..=height + 1e-6).contains(y),
                            "out of bounds: {shape:?}"
                        );
                    }
                }
            }
        }
    }

    fn frames() -> Vec<Vec<u8>> {
        vec![
            vec![],
            vec![0; 256],
            vec![255; 256],
            (0..=255).collect(),
            vec![128; 7],
        ]
    }

    #[test]
    fn all_modes_stay_within_canvas_bounds() {
        for theme in ThemeId::ALL {
            let palette = theme.palette();
            for frame in frames() {
                assert_in_bounds(&bars(&frame, W, H, &palette), W, H);
                assert_in_bounds(&mirrored(&frame, W, H, &palette), W, H);
                assert_in_bounds(&circular(&frame, W, H, &palette), W, H);
                assert_in_bounds(&waveform(&frame, W, H, &palette), W, H);
            }
        }
    }

    #[test]
    fn all_modes_survive_a_tiny_canvas() {
        let palette = ThemeId::Amp.palette();
        let frame = vec![200u8; 256];
        for (w, h) in [(1.0, 1.0), (10.0, 4.0), (40.0, 16.0)] {
            assert_in_bounds(&bars(&frame, w, h, &palette), w, h);
            assert_in_bounds(&mirrored(&frame, w, h, &palette), w, h);
            assert_in_bounds(&circular(&frame, w, h, &palette), w, h);
            assert_in_bounds(&waveform(&frame, w, h, &palette), w, h);
        }
    }

    #[test]
    fn shape_counts_never_exceed_bin_count() {
        let palette = ThemeId::Aqua.palette();
        let frame = vec![90u8; 256];
        assert!(circular(&frame, W, H, &palette).len() <= frame.len());
        // One gradient bar is at most three rects; mirrored at most two
        // rects per bar plus the reference line.
        assert!(bars(&frame, W, H, &palette).len() <= frame.len() * 3);
        assert!(mirrored(&frame, W, H, &palette).len() <= frame.len() * 2 + 1);
        assert_eq!(waveform(&frame, W, H, &palette).len(), 1);
    }

    #[test]
    fn blocky_bars_band_colors_by_stack_position() {
        let palette = ThemeId::Amp.palette();
        assert!(palette.blocky);
        // Magnitude 255 -> 25 blocks; tall canvas so none are clipped.
        let shapes = bars(&[255], 32.0, 400.0, &palette);
        let colors: Vec<Color> = shapes
            .iter()
            .map(|s| match s {
                Shape::Rect { color, .. } => *color,
                _ => panic!("bars mode emits rects only"),
            })
            .collect();
        assert_eq!(colors.len(), 26); // 25 blocks + highlight
        assert_eq!(colors[0], palette.start);
        assert_eq!(colors[9], palette.start);
        assert_eq!(colors[10], palette.mid);
        assert_eq!(colors[16], palette.mid);
        assert_eq!(colors[17], palette.end);
        assert_eq!(colors[25], palette.highlight);
    }

    #[test]
    fn silent_blocky_bar_has_no_highlight() {
        let palette = ThemeId::Console.palette();
        let shapes = bars(&[0, 5], 64.0, 200.0, &palette);
        assert!(shapes.is_empty());
    }

    #[test]
    fn gradient_bar_stacks_start_mid_end() {
        let palette = ThemeId::Aqua.palette();
        let shapes = bars(&[120], 16.0, 256.0, &palette);
        assert_eq!(shapes.len(), 3);
        match (&shapes[0], &shapes[2]) {
            (
                Shape::Rect { y: y0, color: c0, .. },
                Shape::Rect { y: y2, color: c2, .. },
            ) => {
                assert!(y0 < y2);
                assert_eq!(*c0, palette.start);
                assert_eq!(*c2, palette.end);
            }
            _ => panic!("expected rects"),
        }
    }

    #[test]
    fn mirrored_mirror_is_shorter_and_below_the_midline() {
        let palette = ThemeId::Cathode.palette();
        let shapes = mirrored(&[200], 64.0, 400.0, &palette);
        let midline = 400.0 / 2.0 - 50.0;
        let rects: Vec<&Shape> = shapes
            .iter()
            .filter(|s| matches!(s, Shape::Rect { .. }))
            .collect();
        assert_eq!(rects.len(), 2);
        match (rects[0], rects[1]) {
            (Shape::Rect { y: up_y, h: up_h, .. }, Shape::Rect { y: down_y, h: down_h, .. }) => {
                assert_eq!(*up_y, midline);
                assert!((up_h * 0.6 - down_h).abs() < 1e-9);
                assert!((down_y + down_h - midline).abs() < 1e-9);
            }
            _ => unreachable!(),
        }
        // Reference line present at the midline.
        assert!(shapes.iter().any(
            |s| matches!(s, Shape::Segment { y1, y2, .. } if *y1 == midline && *y2 == midline)
        ));
    }

    #[test]
    fn waveform_width_follows_the_theme_family() {
        let frame = vec![128u8; 512];
        let thin = waveform(&frame, W, H, &ThemeId::Console.palette());
        let thick = waveform(&frame, W, H, &ThemeId::Amp.palette());
        match (&thin[0], &thick[0]) {
            (Shape::Polyline { width: w1, .. }, Shape::Polyline { width: w2, .. }) => {
                assert_eq!(*w1, 1.0);
                assert_eq!(*w2, 2.0);
            }
            _ => panic!("expected polylines"),
        }
    }

    #[test]
    fn waveform_centers_silence() {
        let frame = vec![128u8; 64];
        let shapes = waveform(&frame, W, H, &ThemeId::Aqua.palette());
        match &shapes[0] {
            Shape::Polyline { points, .. } => {
                assert_eq!(points.len(), 64);
                for (_, y) in points {
                    assert_eq!(*y, H / 2.0);
                }
            }
            _ => panic!("expected polyline"),
        }
    }
}
