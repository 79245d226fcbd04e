//! Animated lattice behind the hero section.
//!
//! A fixed set of points drifts across the area; pairs that come close are
//! joined by a faint dotted line. Point parameters come from a fixed seed,
//! so the field is deterministic and the function stays stateless — the
//! phase argument alone moves it.

use core::array;

use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use ratatui::Frame;
use ratatui::layout::Rect;
use ratatui::style::Style;
use ratatui::text::Span;
use ratatui::widgets::Paragraph;

use crate::theme::{Glyphs, Palette};

const POINT_COUNT: usize = 12;
/// Join threshold as a fraction of the diagonal.
const MAX_LINK_DISTANCE: f32 = 0.28;
const SEED: u64 = 0x0b0b;

#[derive(Debug, Clone, Copy)]
struct Point {
    x: f32,
    y: f32,
    vx: f32,
    vy: f32,
}

fn points() -> [Point; POINT_COUNT] {
    let mut rng = StdRng::seed_from_u64(SEED);
    array::from_fn(|_| Point {
        x: rng.random_range(0.0..1.0),
        y: rng.random_range(0.0..1.0),
        vx: rng.random_range(-0.05..0.05),
        vy: rng.random_range(-0.03..0.03),
    })
}

fn position_at(point: Point, phase: f32) -> (f32, f32) {
    (
        (point.x + point.vx * phase).rem_euclid(1.0),
        (point.y + point.vy * phase).rem_euclid(1.0),
    )
}

/// Render the lattice into `area`. Cheap enough to run every frame.
pub fn draw_background(
    frame: &mut Frame,
    area: Rect,
    phase: f32,
    palette: &Palette,
    glyphs: &Glyphs,
) {
    if area.width < 4 || area.height < 4 {
        return;
    }

    let positions: Vec<(u16, u16)> = points()
        .iter()
        .map(|p| {
            let (x, y) = position_at(*p, phase);
            (
                area.x + (x * f32::from(area.width - 1)).round() as u16,
                area.y + (y * f32::from(area.height - 1)).round() as u16,
            )
        })
        .collect();

    let style = Style::default().fg(palette.net);
    let max_link = {
        let w = f32::from(area.width);
        let h = f32::from(area.height);
        (w * w + h * h).sqrt() * MAX_LINK_DISTANCE
    };

    // Links first so nodes draw over them.
    for (i, a) in positions.iter().enumerate() {
        for b in positions.iter().skip(i + 1) {
            let dx = f32::from(a.0.abs_diff(b.0));
            // Cells are roughly twice as tall as wide; weight y so links
            // look round on screen.
            let dy = f32::from(a.1.abs_diff(b.1)) * 2.0;
            if (dx * dx + dy * dy).sqrt() <= max_link {
                draw_dotted_line(frame, area, *a, *b, glyphs.link, style);
            }
        }
    }

    for (x, y) in positions {
        let cell = Rect::new(x, y, 1, 1);
        frame.render_widget(Paragraph::new(Span::styled(glyphs.node, style)), cell);
    }
}

/// Sparse Bresenham walk: every other step gets a dot, endpoints stay
/// clear for the node glyphs.
fn draw_dotted_line(
    frame: &mut Frame,
    bounds: Rect,
    from: (u16, u16),
    to: (u16, u16),
    glyph: &str,
    style: Style,
) {
    let (mut x, mut y) = (i32::from(from.0), i32::from(from.1));
    let (x1, y1) = (i32::from(to.0), i32::from(to.1));
    let dx = (x1 - x).abs();
    let dy = -(y1 - y).abs();
    let sx = if x < x1 { 1 } else { -1 };
    let sy = if y < y1 { 1 } else { -1 };
    let mut err = dx + dy;
    let mut step = 0usize;

    loop {
        if x == x1 && y == y1 {
            break;
        }
        let inside = x >= i32::from(bounds.x)
            && y >= i32::from(bounds.y)
            && x < i32::from(bounds.x + bounds.width)
            && y < i32::from(bounds.y + bounds.height);
        if step % 2 == 1 && inside {
            let cell = Rect::new(x as u16, y as u16, 1, 1);
            frame.render_widget(Paragraph::new(Span::styled(glyph, style)), cell);
        }
        step += 1;
        let e2 = 2 * err;
        if e2 >= dy {
            err += dy;
            x += sx;
        }
        if e2 <= dx {
            err += dx;
            y += sy;
        }
    }
}
