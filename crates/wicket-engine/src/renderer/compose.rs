//! Builders for the draw plans the challenges replay.
//!
//! The piece outline is traced twice per layer: once to cut or fill it, and
//! once more under `SourceAtop` together with a large reversed circle. The
//! reversed winding turns the fill inside out, so the shadow attached to
//! that fill lands only on a rim just inside the outline.

use std::f32::consts::{FRAC_PI_2, PI, TAU};

use glam::Vec2;

use crate::components::piece::{PieceKind, PieceSpec, OFFSET_ANGLE};
use crate::components::text_item::TextItem;
use crate::renderer::ops::{CompositeMode, ImageRegion, PathCommand, Rect, Shadow, SurfaceOp};

/// Radius of the reversed rim circle, as a factor of the piece width.
const RIM_RADIUS_FACTOR: f32 = 1.2;

/// Closed outline for a piece, anchored at its own `x`/`y`.
pub fn piece_path(piece: &PieceSpec) -> Vec<PathCommand> {
    match piece.kind {
        PieceKind::Jigsaw => jigsaw_path(piece),
        PieceKind::RoundedRect => rounded_rect_path(piece),
    }
}

/// Jigsaw outline: knob on top and right, notch in the bottom, flat left.
///
/// Every knob is an arc of `TAU - 2 * OFFSET_ANGLE` whose chord endpoints
/// sit exactly on the body edge, so the neck is narrower than the bulb.
/// The bottom arc runs anticlockwise, which carves the notch inward.
fn jigsaw_path(piece: &PieceSpec) -> Vec<PathCommand> {
    let (x, y) = (piece.x, piece.y);
    let (w, h) = (piece.width, piece.height);
    let r = piece.bulge_radius;
    let offset = piece.bulge_offset;
    let bulge = piece.bulge_size();
    let a = OFFSET_ANGLE;

    vec![
        PathCommand::MoveTo {
            to: Vec2::new(x, y + bulge),
        },
        // top knob
        PathCommand::Arc {
            center: Vec2::new(x + w / 2.0, y + r),
            radius: r,
            start_angle: FRAC_PI_2 + a,
            end_angle: FRAC_PI_2 - a,
            anticlockwise: false,
        },
        PathCommand::LineTo {
            to: Vec2::new(x + w, y + bulge),
        },
        // right knob
        PathCommand::Arc {
            center: Vec2::new(x + w + offset, y + bulge + h / 2.0),
            radius: r,
            start_angle: PI + a,
            end_angle: PI - a,
            anticlockwise: false,
        },
        PathCommand::LineTo {
            to: Vec2::new(x + w, y + bulge + h),
        },
        // bottom notch
        PathCommand::Arc {
            center: Vec2::new(x + w / 2.0, y + h + r),
            radius: r,
            start_angle: FRAC_PI_2 - a,
            end_angle: FRAC_PI_2 + a,
            anticlockwise: true,
        },
        PathCommand::LineTo {
            to: Vec2::new(x, y + h + bulge),
        },
        PathCommand::LineTo {
            to: Vec2::new(x, y + bulge),
        },
    ]
}

/// Rounded-rect outline via four corner arcs.
fn rounded_rect_path(piece: &PieceSpec) -> Vec<PathCommand> {
    let (x, y) = (piece.x, piece.y);
    let (w, h) = (piece.width, piece.height);
    let radius = piece.corner_radius;

    vec![
        PathCommand::MoveTo {
            to: Vec2::new(x + radius, y),
        },
        PathCommand::ArcTo {
            c1: Vec2::new(x + w, y),
            c2: Vec2::new(x + w, y + h),
            radius,
        },
        PathCommand::ArcTo {
            c1: Vec2::new(x + w, y + h),
            c2: Vec2::new(x, y + h),
            radius,
        },
        PathCommand::ArcTo {
            c1: Vec2::new(x, y + h),
            c2: Vec2::new(x, y),
            radius,
        },
        PathCommand::ArcTo {
            c1: Vec2::new(x, y),
            c2: Vec2::new(x + w, y),
            radius,
        },
    ]
}

fn emit_path(ops: &mut Vec<SurfaceOp>, commands: &[PathCommand]) {
    ops.push(SurfaceOp::BeginPath);
    ops.extend(commands.iter().copied().map(SurfaceOp::Path));
}

/// The reversed circle that limits a rim shadow to the outline's inside.
fn rim_circle(piece: &PieceSpec, anchor_x: f32) -> PathCommand {
    PathCommand::Arc {
        center: Vec2::new(
            anchor_x + (piece.width / 2.0).ceil(),
            piece.y + (piece.height / 2.0).ceil(),
        ),
        radius: piece.width * RIM_RADIUS_FACTOR,
        start_angle: 0.0,
        end_angle: TAU,
        anticlockwise: true,
    }
}

/// Cut the missing-piece hole into the background layer: a translucent
/// white fill, then an inner shadow rim composited onto it.
///
/// The background image itself goes in afterwards under `DestinationOver`
/// (see the slide generator), so the hole keeps its shading.
pub fn missing_piece_ops(piece: &PieceSpec) -> Vec<SurfaceOp> {
    let outline = piece_path(piece);
    let mut ops = Vec::with_capacity(outline.len() * 2 + 12);

    ops.push(SurfaceOp::Save);
    emit_path(&mut ops, &outline);
    ops.push(SurfaceOp::Alpha { value: 0.8 });
    ops.push(SurfaceOp::FillColor {
        color: "#ffffff".into(),
    });
    ops.push(SurfaceOp::Fill);
    ops.push(SurfaceOp::Restore);

    ops.push(SurfaceOp::Save);
    ops.push(SurfaceOp::Composite {
        mode: CompositeMode::SourceAtop,
    });
    emit_path(&mut ops, &outline);
    ops.push(SurfaceOp::Path(rim_circle(piece, piece.x)));
    ops.push(SurfaceOp::Shadow(Shadow::new(
        "#000",
        Vec2::new(2.0, 2.0),
        16.0,
    )));
    ops.push(SurfaceOp::Fill);
    ops.push(SurfaceOp::Restore);

    ops
}

/// Render the floating piece into its strip canvas: outline filled with a
/// soft halo, clipped image blit, then a raised highlight rim.
///
/// The strip is `strip_width` wide and full canvas height; the piece sits
/// `strip_padding` from its left edge at the hole's own y. The piece's `x`
/// selects which vertical slice of the image the strip shows.
pub fn piece_strip_ops(
    piece: &PieceSpec,
    strip_padding: f32,
    strip_width: f32,
    canvas_height: f32,
) -> Vec<SurfaceOp> {
    let strip_piece = piece.at(strip_padding, piece.y);
    let outline = piece_path(&strip_piece);
    let mut ops = Vec::with_capacity(outline.len() * 2 + 14);

    ops.push(SurfaceOp::Save);
    emit_path(&mut ops, &outline);
    ops.push(SurfaceOp::Path(PathCommand::Close));
    ops.push(SurfaceOp::Shadow(Shadow::new("#000", Vec2::ZERO, 3.0)));
    ops.push(SurfaceOp::Fill);
    ops.push(SurfaceOp::Clip);
    ops.push(SurfaceOp::DrawImage {
        src: ImageRegion::Pixels(Rect::new(
            piece.x - strip_padding,
            0.0,
            strip_width,
            canvas_height,
        )),
        dst: Rect::new(0.0, 0.0, strip_width, canvas_height),
    });
    ops.push(SurfaceOp::Composite {
        mode: CompositeMode::SourceAtop,
    });
    emit_path(&mut ops, &outline);
    ops.push(SurfaceOp::Path(rim_circle(piece, strip_padding)));
    ops.push(SurfaceOp::Path(PathCommand::Close));
    ops.push(SurfaceOp::Shadow(Shadow::new(
        "rgba(255, 255, 255, .8)",
        Vec2::new(-1.0, -1.0),
        12.0,
    )));
    ops.push(SurfaceOp::FillColor {
        color: "#ffffaa".into(),
    });
    ops.push(SurfaceOp::Fill);
    ops.push(SurfaceOp::Restore);

    ops
}

/// Draw one rotated glyph around its box center.
pub fn glyph_ops(item: &TextItem) -> Vec<SurfaceOp> {
    let r = item.hit_radius();
    vec![
        SurfaceOp::Save,
        SurfaceOp::Translate { by: item.center() },
        SurfaceOp::Rotate {
            radians: item.angle.to_radians(),
        },
        SurfaceOp::FillColor {
            color: item.color.clone(),
        },
        SurfaceOp::FillText {
            text: item.text.clone(),
            font_size: item.font_size,
            at: Vec2::new(-r, -r),
        },
        SurfaceOp::Restore,
    ]
}

/// Draw the image's largest square, rotated by `degrees`, inside a circular
/// clip of diameter `size` at the surface origin.
pub fn rotated_disc_ops(size: f32, degrees: f32) -> Vec<SurfaceOp> {
    let r = size / 2.0;
    vec![
        SurfaceOp::Save,
        SurfaceOp::BeginPath,
        SurfaceOp::Path(PathCommand::Arc {
            center: Vec2::new(r, r),
            radius: r,
            start_angle: 0.0,
            end_angle: TAU,
            anticlockwise: false,
        }),
        SurfaceOp::Clip,
        SurfaceOp::Save,
        SurfaceOp::Translate {
            by: Vec2::new(r, r),
        },
        SurfaceOp::Rotate {
            radians: degrees.to_radians(),
        },
        SurfaceOp::DrawImage {
            src: ImageRegion::MinSquare,
            dst: Rect::new(-r, -r, size, size),
        },
        SurfaceOp::Restore,
        SurfaceOp::Restore,
    ]
}
