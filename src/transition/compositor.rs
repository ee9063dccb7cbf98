use crate::foundation::core::{Canvas, Rect, Transform2D};
use crate::scene::frame::{Clip, VisualFrame};
use crate::transition::kind::{Edge, TransitionKind};

/// Blend outgoing frame `a` into incoming frame `b`.
///
/// `progress` is the eased transition progress. At `progress <= 0` (or NaN) the result is
/// exactly `a`; at `progress >= 1` exactly `b`. In between, both frames become groups
/// stacked `a` below `b` and shaped by `kind`. The result depends only on the two frames
/// and `progress`.
pub fn composite(
    a: &VisualFrame,
    b: &VisualFrame,
    progress: f64,
    kind: TransitionKind,
    canvas: Canvas,
) -> VisualFrame {
    if progress.is_nan() || progress <= 0.0 {
        return a.clone();
    }
    if progress >= 1.0 {
        return b.clone();
    }
    let p = progress;
    let (w, h) = (f64::from(canvas.width), f64::from(canvas.height));
    let out = a.clone().into_group();
    let inc = b.clone().into_group();

    let layers = match kind {
        TransitionKind::Fade => vec![out.with_opacity(1.0 - p), inc.with_opacity(p)],
        TransitionKind::Slide { from } => {
            let (dir_x, dir_y) = edge_direction(from);
            let enter = 1.0 - p;
            vec![
                out.with_transform(Transform2D::translate(-dir_x * p * w, -dir_y * p * h)),
                inc.with_transform(Transform2D::translate(dir_x * enter * w, dir_y * enter * h)),
            ]
        }
        TransitionKind::Wipe { from } => {
            let rect = match from {
                Edge::Left => Rect::new(0.0, 0.0, p * w, h),
                Edge::Right => Rect::new((1.0 - p) * w, 0.0, w, h),
                Edge::Top => Rect::new(0.0, 0.0, w, p * h),
                Edge::Bottom => Rect::new(0.0, (1.0 - p) * h, w, h),
            };
            vec![out, inc.with_clip(Clip::Rect { rect })]
        }
        TransitionKind::ClockWipe => vec![
            out,
            inc.with_clip(Clip::Sweep {
                center: canvas.center(),
                sweep_deg: p * 360.0,
            }),
        ],
    };

    VisualFrame::with_layers(canvas, layers).normalized()
}

/// Unit offset, in canvas sizes, of a frame sitting just outside `edge`.
fn edge_direction(edge: Edge) -> (f64, f64) {
    match edge {
        Edge::Left => (-1.0, 0.0),
        Edge::Right => (1.0, 0.0),
        Edge::Top => (0.0, -1.0),
        Edge::Bottom => (0.0, 1.0),
    }
}

#[cfg(test)]
#[path = "../../tests/unit/transition/compositor.rs"]
mod tests;
