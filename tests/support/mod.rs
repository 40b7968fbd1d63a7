// Recording surface shared by the host-side integration tests.

#![allow(dead_code)]
use glam::Vec2;
use nodefield_core::{Rgba, Surface, Viewport};

#[derive(Clone, Debug, PartialEq)]
pub enum Op {
    Clear,
    Circle { center: Vec2, alpha: f32 },
    Line { from: Vec2, to: Vec2, alpha: f32 },
    Resize(Viewport),
}

#[derive(Default)]
pub struct Recorder {
    pub ops: Vec<Op>,
}

impl Recorder {
    pub fn circles(&self) -> impl Iterator<Item = (Vec2, f32)> + '_ {
        self.ops.iter().filter_map(|op| match op {
            Op::Circle { center, alpha } => Some((*center, *alpha)),
            _ => None,
        })
    }

    pub fn lines(&self) -> impl Iterator<Item = (Vec2, Vec2, f32)> + '_ {
        self.ops.iter().filter_map(|op| match op {
            Op::Line { from, to, alpha } => Some((*from, *to, *alpha)),
            _ => None,
        })
    }

    pub fn draw_calls(&self) -> usize {
        self.ops
            .iter()
            .filter(|op| !matches!(op, Op::Resize(_)))
            .count()
    }
}

impl Surface for Recorder {
    fn clear(&mut self, _width: f32, _height: f32) {
        self.ops.push(Op::Clear);
    }

    fn fill_circle(&mut self, center: Vec2, _radius: f32, color: Rgba) {
        self.ops.push(Op::Circle {
            center,
            alpha: color.a,
        });
    }

    fn stroke_line(&mut self, from: Vec2, to: Vec2, _width: f32, color: Rgba) {
        self.ops.push(Op::Line {
            from,
            to,
            alpha: color.a,
        });
    }

    fn resize(&mut self, viewport: Viewport) {
        self.ops.push(Op::Resize(viewport));
    }
}
