//! Primitive raster drawing driven by style structs.
//!
//! Lines use Bresenham's algorithm with the dash pattern applied per
//! step; circles use the midpoint algorithm.

use crate::color::Rgba;
use crate::style::{FillPattern, FillStyle, LinePattern, LineStyle, MarkerShape, MarkerStyle};
use crate::surface::Surface;

/// Dash cycle as (on, off) step counts.
fn dash_cycle(pattern: LinePattern) -> Option<(u32, u32)> {
    match pattern {
        LinePattern::Solid => None,
        LinePattern::Dashed => Some((6, 4)),
        LinePattern::Dotted => Some((1, 3)),
        LinePattern::DashDot => Some((6, 3)),
    }
}

/// Draw a styled line between two pixel coordinates.
pub fn draw_line(surface: &mut Surface, x0: i32, y0: i32, x1: i32, y1: i32, style: &LineStyle) {
    let dx = (x1 - x0).abs();
    let dy = -(y1 - y0).abs();
    let sx = if x0 < x1 { 1 } else { -1 };
    let sy = if y0 < y1 { 1 } else { -1 };
    let mut err = dx + dy;

    let cycle = dash_cycle(style.pattern);
    let thick = style.width.max(1) as i32;
    let steep = dy.abs() > dx;

    let mut x = x0;
    let mut y = y0;
    let mut step: u32 = 0;

    loop {
        let on = match cycle {
            None => true,
            Some((on_len, off_len)) => step % (on_len + off_len) < on_len,
        };
        if on {
            // widen perpendicular to the major axis
            for t in 0..thick {
                let off = t - thick / 2;
                let (px, py) = if steep { (x + off, y) } else { (x, y + off) };
                if px >= 0 && py >= 0 {
                    surface.set_pixel(px as u32, py as u32, style.color);
                }
            }
        }
        if x == x1 && y == y1 {
            break;
        }
        step += 1;
        let e2 = 2 * err;
        if e2 >= dy {
            if x == x1 {
                break;
            }
            err += dy;
            x += sx;
        }
        if e2 <= dx {
            if y == y1 {
                break;
            }
            err += dx;
            y += sy;
        }
    }
}

/// Draw a rectangle outline.
pub fn draw_rect_outline(surface: &mut Surface, x: i32, y: i32, w: u32, h: u32, style: &LineStyle) {
    let x1 = x + w as i32 - 1;
    let y1 = y + h as i32 - 1;
    draw_line(surface, x, y, x1, y, style);
    draw_line(surface, x, y1, x1, y1, style);
    draw_line(surface, x, y, x, y1, style);
    draw_line(surface, x1, y, x1, y1, style);
}

/// Fill a rectangle according to a fill style.
///
/// Hollow fills draw nothing; hatched fills draw diagonal lines.
pub fn fill_styled_rect(surface: &mut Surface, x: i32, y: i32, w: u32, h: u32, style: &FillStyle) {
    match style.pattern {
        FillPattern::Hollow => {}
        FillPattern::Solid => surface.fill_rect(x, y, w, h, style.color),
        FillPattern::Hatched => {
            let hatch = LineStyle {
                color: style.color,
                ..LineStyle::default()
            };
            let spacing = 6;
            let w = w as i32;
            let h = h as i32;
            let mut offset = -h;
            while offset < w {
                let x_start = (x + offset).max(x);
                let y_start = y + (x_start - x - offset);
                let x_end = (x + offset + h - 1).min(x + w - 1);
                let y_end = y + (x_end - x - offset);
                if x_end >= x_start {
                    draw_line(surface, x_start, y_start, x_end, y_end, &hatch);
                }
                offset += spacing;
            }
        }
    }
}

fn draw_circle_outline(surface: &mut Surface, cx: i32, cy: i32, r: i32, color: Rgba) {
    let mut x = r;
    let mut y = 0;
    let mut err = 1 - r;

    while x >= y {
        for (px, py) in [
            (cx + x, cy + y),
            (cx - x, cy + y),
            (cx + x, cy - y),
            (cx - x, cy - y),
            (cx + y, cy + x),
            (cx - y, cy + x),
            (cx + y, cy - x),
            (cx - y, cy - x),
        ] {
            if px >= 0 && py >= 0 {
                surface.set_pixel(px as u32, py as u32, color);
            }
        }
        y += 1;
        if err < 0 {
            err += 2 * y + 1;
        } else {
            x -= 1;
            err += 2 * (y - x) + 1;
        }
    }
}

fn fill_circle(surface: &mut Surface, cx: i32, cy: i32, r: i32, color: Rgba) {
    for dy in -r..=r {
        for dx in -r..=r {
            if dx * dx + dy * dy <= r * r {
                let (px, py) = (cx + dx, cy + dy);
                if px >= 0 && py >= 0 {
                    surface.set_pixel(px as u32, py as u32, color);
                }
            }
        }
    }
}

/// Draw a marker centered at a pixel coordinate.
pub fn draw_marker(surface: &mut Surface, cx: i32, cy: i32, style: &MarkerStyle) {
    let r = style.size.max(1.0) as i32;
    let color = style.color;
    let line = LineStyle {
        color,
        ..LineStyle::default()
    };

    match style.shape {
        MarkerShape::Dot => {
            if cx >= 0 && cy >= 0 {
                surface.set_pixel(cx as u32, cy as u32, color);
            }
        }
        MarkerShape::Circle => draw_circle_outline(surface, cx, cy, r, color),
        MarkerShape::FilledCircle => fill_circle(surface, cx, cy, r, color),
        MarkerShape::Square => {
            draw_rect_outline(surface, cx - r, cy - r, 2 * r as u32 + 1, 2 * r as u32 + 1, &line);
        }
        MarkerShape::FilledSquare => {
            surface.fill_rect(cx - r, cy - r, 2 * r as u32 + 1, 2 * r as u32 + 1, color);
        }
        MarkerShape::Cross => {
            draw_line(surface, cx - r, cy - r, cx + r, cy + r, &line);
            draw_line(surface, cx - r, cy + r, cx + r, cy - r, &line);
        }
        MarkerShape::Plus => {
            draw_line(surface, cx - r, cy, cx + r, cy, &line);
            draw_line(surface, cx, cy - r, cx, cy + r, &line);
        }
        MarkerShape::Diamond => {
            draw_line(surface, cx, cy - r, cx + r, cy, &line);
            draw_line(surface, cx + r, cy, cx, cy + r, &line);
            draw_line(surface, cx, cy + r, cx - r, cy, &line);
            draw_line(surface, cx - r, cy, cx, cy - r, &line);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn surface() -> Surface {
        Surface::new(32, 32).expect("surface creation should succeed")
    }

    fn count_non_white(s: &Surface) -> usize {
        (0..s.height())
            .flat_map(|y| (0..s.width()).map(move |x| (x, y)))
            .filter(|&(x, y)| s.pixel(x, y) != Some(Rgba::WHITE))
            .count()
    }

    #[test]
    fn test_draw_line_horizontal() {
        let mut s = surface();
        let style = LineStyle::default();
        draw_line(&mut s, 0, 5, 10, 5, &style);
        assert_eq!(s.pixel(0, 5), Some(Rgba::BLACK));
        assert_eq!(s.pixel(10, 5), Some(Rgba::BLACK));
        assert_eq!(s.pixel(11, 5), Some(Rgba::WHITE));
    }

    #[test]
    fn test_draw_line_diagonal() {
        let mut s = surface();
        draw_line(&mut s, 0, 0, 10, 10, &LineStyle::default());
        assert_eq!(s.pixel(5, 5), Some(Rgba::BLACK));
    }

    #[test]
    fn test_dashed_line_has_gaps() {
        let mut s = surface();
        let style = LineStyle {
            pattern: LinePattern::Dashed,
            ..LineStyle::default()
        };
        draw_line(&mut s, 0, 5, 31, 5, &style);
        let solid = {
            let mut s2 = surface();
            draw_line(&mut s2, 0, 5, 31, 5, &LineStyle::default());
            count_non_white(&s2)
        };
        assert!(count_non_white(&s) < solid);
    }

    #[test]
    fn test_thick_line_wider() {
        let mut s = surface();
        let style = LineStyle {
            width: 3,
            ..LineStyle::default()
        };
        draw_line(&mut s, 0, 5, 31, 5, &style);
        assert_eq!(s.pixel(10, 4), Some(Rgba::BLACK));
        assert_eq!(s.pixel(10, 6), Some(Rgba::BLACK));
    }

    #[test]
    fn test_rect_outline() {
        let mut s = surface();
        draw_rect_outline(&mut s, 2, 2, 10, 10, &LineStyle::default());
        assert_eq!(s.pixel(2, 2), Some(Rgba::BLACK));
        assert_eq!(s.pixel(11, 11), Some(Rgba::BLACK));
        assert_eq!(s.pixel(5, 5), Some(Rgba::WHITE));
    }

    #[test]
    fn test_fill_styled_rect_solid() {
        let mut s = surface();
        let style = FillStyle {
            color: Rgba::BLUE,
            pattern: FillPattern::Solid,
        };
        fill_styled_rect(&mut s, 2, 2, 4, 4, &style);
        assert_eq!(s.pixel(3, 3), Some(Rgba::BLUE));
    }

    #[test]
    fn test_fill_styled_rect_hollow_draws_nothing() {
        let mut s = surface();
        let style = FillStyle {
            color: Rgba::BLUE,
            pattern: FillPattern::Hollow,
        };
        fill_styled_rect(&mut s, 2, 2, 8, 8, &style);
        assert_eq!(count_non_white(&s), 0);
    }

    #[test]
    fn test_fill_styled_rect_hatched_partial() {
        let mut s = surface();
        let style = FillStyle {
            color: Rgba::BLUE,
            pattern: FillPattern::Hatched,
        };
        fill_styled_rect(&mut s, 0, 0, 20, 20, &style);
        let painted = count_non_white(&s);
        assert!(painted > 0);
        assert!(painted < 20 * 20);
    }

    #[test]
    fn test_markers_paint_pixels() {
        for shape in [
            MarkerShape::Dot,
            MarkerShape::Circle,
            MarkerShape::FilledCircle,
            MarkerShape::Square,
            MarkerShape::FilledSquare,
            MarkerShape::Cross,
            MarkerShape::Plus,
            MarkerShape::Diamond,
        ] {
            let mut s = surface();
            let style = MarkerStyle {
                shape,
                ..MarkerStyle::default()
            };
            draw_marker(&mut s, 16, 16, &style);
            assert!(count_non_white(&s) > 0, "shape {shape:?} painted nothing");
        }
    }

    #[test]
    fn test_filled_circle_center() {
        let mut s = surface();
        let style = MarkerStyle {
            shape: MarkerShape::FilledCircle,
            ..MarkerStyle::default()
        };
        draw_marker(&mut s, 16, 16, &style);
        assert_eq!(s.pixel(16, 16), Some(Rgba::BLACK));
    }

    #[test]
    fn test_marker_offscreen_is_safe() {
        let mut s = surface();
        draw_marker(&mut s, -5, -5, &MarkerStyle::default());
    }
}
