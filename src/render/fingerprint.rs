use std::fmt;

use crate::foundation::color::Rgba8;
use crate::foundation::core::{Point, Rect, Transform2D};
use crate::scene::frame::{Clip, Layer, LayerContent, Paint, Stroke, TextAlign, TextRun, VisualFrame};
use xxhash_rust::xxh3::Xxh3;

const XXH3_SEED: u64 = 0x8b5ad4a0c7d8e9f1;

/// Stable 128-bit digest of a rendered frame.
///
/// Every field is walked in declaration order; floats are hashed by bit pattern.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct FrameFingerprint {
    /// High 64 bits.
    pub hi: u64,
    /// Low 64 bits.
    pub lo: u64,
}

impl fmt::Display for FrameFingerprint {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:016x}{:016x}", self.hi, self.lo)
    }
}

/// Fingerprint `frame`.
pub fn fingerprint_frame(frame: &VisualFrame) -> FrameFingerprint {
    let mut h = StableHasher::new();
    h.write_u32(frame.width);
    h.write_u32(frame.height);
    write_layers(&mut h, &frame.layers);
    h.finish()
}

struct StableHasher {
    inner: Xxh3,
}

impl StableHasher {
    fn new() -> Self {
        Self {
            inner: Xxh3::with_seed(XXH3_SEED),
        }
    }

    fn write_bytes(&mut self, b: &[u8]) {
        self.inner.update(b);
    }

    fn write_u8(&mut self, v: u8) {
        self.write_bytes(&[v]);
    }

    fn write_bool(&mut self, v: bool) {
        self.write_u8(u8::from(v));
    }

    fn write_u32(&mut self, v: u32) {
        self.write_bytes(&v.to_le_bytes());
    }

    fn write_u64(&mut self, v: u64) {
        self.write_bytes(&v.to_le_bytes());
    }

    fn write_f64(&mut self, v: f64) {
        self.write_u64(v.to_bits());
    }

    fn write_str(&mut self, s: &str) {
        self.write_u64(s.len() as u64);
        self.write_bytes(s.as_bytes());
    }

    fn finish(self) -> FrameFingerprint {
        let v = self.inner.digest128();
        FrameFingerprint {
            hi: (v >> 64) as u64,
            lo: v as u64,
        }
    }
}

fn write_layers(h: &mut StableHasher, layers: &[Layer]) {
    h.write_u32(layers.len() as u32);
    for layer in layers {
        h.write_f64(layer.opacity);
        write_transform(h, &layer.transform);
        h.write_f64(layer.blur_px);
        match &layer.clip {
            None => h.write_u8(0),
            Some(Clip::Rect { rect }) => {
                h.write_u8(1);
                write_rect(h, *rect);
            }
            Some(Clip::Sweep { center, sweep_deg }) => {
                h.write_u8(2);
                write_point(h, *center);
                h.write_f64(*sweep_deg);
            }
        }
        write_content(h, &layer.content);
    }
}

fn write_content(h: &mut StableHasher, content: &LayerContent) {
    match content {
        LayerContent::Rect {
            rect,
            fill,
            radius,
            stroke,
        } => {
            h.write_u8(0);
            write_rect(h, *rect);
            write_paint(h, fill);
            h.write_f64(*radius);
            h.write_bool(stroke.is_some());
            if let Some(s) = stroke {
                write_stroke(h, s);
            }
        }
        LayerContent::Text(run) => {
            h.write_u8(1);
            write_text(h, run);
        }
        LayerContent::Line { from, to, stroke } => {
            h.write_u8(2);
            write_point(h, *from);
            write_point(h, *to);
            write_stroke(h, stroke);
        }
        LayerContent::Circle {
            center,
            radius,
            fill,
        } => {
            h.write_u8(3);
            write_point(h, *center);
            h.write_f64(*radius);
            write_color(h, *fill);
        }
        LayerContent::Group { children } => {
            h.write_u8(4);
            write_layers(h, children);
        }
    }
}

fn write_text(h: &mut StableHasher, run: &TextRun) {
    h.write_str(&run.text);
    write_point(h, run.origin);
    h.write_str(&run.font);
    h.write_f64(run.size);
    h.write_u32(u32::from(run.weight));
    write_color(h, run.color);
    h.write_u8(match run.align {
        TextAlign::Start => 0,
        TextAlign::Center => 1,
        TextAlign::End => 2,
    });
    h.write_bool(run.max_width.is_some());
    if let Some(w) = run.max_width {
        h.write_f64(w);
    }
}

fn write_paint(h: &mut StableHasher, paint: &Paint) {
    match paint {
        Paint::Solid(c) => {
            h.write_u8(0);
            write_color(h, *c);
        }
        Paint::Linear {
            start,
            end,
            from,
            to,
        } => {
            h.write_u8(1);
            write_point(h, *start);
            write_point(h, *end);
            write_color(h, *from);
            write_color(h, *to);
        }
    }
}

fn write_stroke(h: &mut StableHasher, s: &Stroke) {
    write_color(h, s.color);
    h.write_f64(s.width);
}

fn write_transform(h: &mut StableHasher, t: &Transform2D) {
    h.write_f64(t.translate.x);
    h.write_f64(t.translate.y);
    h.write_f64(t.rotation_rad);
    h.write_f64(t.scale.x);
    h.write_f64(t.scale.y);
    h.write_f64(t.anchor.x);
    h.write_f64(t.anchor.y);
}

fn write_rect(h: &mut StableHasher, r: Rect) {
    h.write_f64(r.x0);
    h.write_f64(r.y0);
    h.write_f64(r.x1);
    h.write_f64(r.y1);
}

fn write_point(h: &mut StableHasher, p: Point) {
    h.write_f64(p.x);
    h.write_f64(p.y);
}

fn write_color(h: &mut StableHasher, c: Rgba8) {
    h.write_bytes(&[c.r, c.g, c.b, c.a]);
}

#[cfg(test)]
#[path = "../../tests/unit/render/fingerprint.rs"]
mod tests;
