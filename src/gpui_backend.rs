//! GPUI painter for the digitizer overlay.
//!
//! Paints a [`RenderList`] built by [`build_overlay`](crate::render::build_overlay)
//! on top of the page image. `origin` is the window position of the page's
//! top-left corner; all commands are offset by it.

use gpui::{
    App, BorderStyle, Bounds, Corners, Edges, PathBuilder, Pixels, Point, TextRun, Window, font,
    point, px, quad,
};

use crate::geom::ViewPoint;
use crate::render::{Color, LineStyle, MarkerStyle, RenderCommand, RenderList, TextStyle};

/// Paint every command of the overlay.
pub fn paint_overlay(list: &RenderList, origin: Point<Pixels>, window: &mut Window, cx: &mut App) {
    for command in list.commands() {
        match command {
            RenderCommand::Polyline { points, style } => {
                paint_polyline(window, origin, points, *style);
            }
            RenderCommand::Points { points, style } => {
                paint_points(window, origin, points, *style);
            }
            RenderCommand::Text {
                position,
                text,
                style,
            } => {
                paint_text(window, cx, origin, *position, text, style);
            }
        }
    }
}

fn to_window(origin: Point<Pixels>, pt: ViewPoint) -> Point<Pixels> {
    point(origin.x + px(pt.x as f32), origin.y + px(pt.y as f32))
}

fn paint_polyline(window: &mut Window, origin: Point<Pixels>, points: &[ViewPoint], style: LineStyle) {
    let [first, rest @ ..] = points else {
        return;
    };
    if rest.is_empty() {
        return;
    }
    let mut builder = PathBuilder::stroke(px(style.width.max(0.5)));
    builder.move_to(to_window(origin, *first));
    for pt in rest {
        builder.line_to(to_window(origin, *pt));
    }
    if let Ok(path) = builder.build() {
        window.paint_path(path, to_rgba(style.color));
    }
}

fn paint_points(window: &mut Window, origin: Point<Pixels>, points: &[ViewPoint], style: MarkerStyle) {
    if points.is_empty() {
        return;
    }
    let half = style.size.max(2.0) * 0.5;
    for pt in points {
        let center = to_window(origin, *pt);
        let bounds = Bounds::from_corners(
            point(center.x - px(half), center.y - px(half)),
            point(center.x + px(half), center.y + px(half)),
        );
        window.paint_quad(quad(
            bounds,
            Corners::all(px(half)),
            to_rgba(style.color),
            Edges::all(px(1.0)),
            to_rgba(Color::BLACK),
            BorderStyle::default(),
        ));
    }
}

fn paint_text(
    window: &mut Window,
    cx: &mut App,
    origin: Point<Pixels>,
    position: ViewPoint,
    text: &str,
    style: &TextStyle,
) {
    if text.is_empty() {
        return;
    }
    let font_size = px(style.size);
    let run = TextRun {
        len: text.len(),
        font: font(".SystemUIFont"),
        color: gpui::Hsla::from(to_rgba(style.color)),
        background_color: None,
        underline: None,
        strikethrough: None,
    };
    let shaped = window
        .text_system()
        .shape_line(text.to_string().into(), font_size, &[run], None);
    let line_height = shaped.ascent + shaped.descent;
    // Anchor is the bottom-left corner of the label.
    let anchor = to_window(origin, position);
    let top_left = point(anchor.x, anchor.y - line_height);
    let _ = shaped.paint(top_left, line_height, window, cx);
}

fn to_rgba(color: Color) -> gpui::Rgba {
    gpui::Rgba {
        r: color.r,
        g: color.g,
        b: color.b,
        a: color.a,
    }
}
