//! Node chain to renderable curve, plus tension-driven color.

use crate::cable::Node;
use crate::config::WireConfig;
use crate::constants::{ATTACHED_OPACITY, DETACHED_OPACITY, RELAXED_RGB, TAUT_RGB};
use glam::Vec2;
use std::fmt;

#[derive(Clone, Copy, Debug, PartialEq)]
pub enum PathCommand {
    MoveTo(Vec2),
    QuadTo { ctrl: Vec2, to: Vec2 },
    LineTo(Vec2),
}

/// Smooth curve through a node chain.
///
/// Each interior node becomes a quadratic control point ending at the
/// midpoint to its successor; a final straight segment reaches the last node.
/// `Display` writes SVG path data (`M x y Q cx cy, x y ... L x y`).
#[derive(Clone, Debug, Default, PartialEq)]
pub struct CablePath {
    commands: Vec<PathCommand>,
}

impl CablePath {
    pub fn from_nodes(nodes: &[Node]) -> Self {
        if nodes.len() < 2 {
            return Self::default();
        }
        let mut commands = Vec::with_capacity(nodes.len() + 1);
        commands.push(PathCommand::MoveTo(nodes[0].pos));
        for pair in nodes[1..].windows(2) {
            let ctrl = pair[0].pos;
            commands.push(PathCommand::QuadTo {
                ctrl,
                to: (ctrl + pair[1].pos) * 0.5,
            });
        }
        commands.push(PathCommand::LineTo(nodes[nodes.len() - 1].pos));
        Self { commands }
    }

    #[inline]
    pub fn commands(&self) -> &[PathCommand] {
        &self.commands
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.commands.is_empty()
    }
}

impl fmt::Display for CablePath {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (i, cmd) in self.commands.iter().enumerate() {
            if i > 0 {
                f.write_str(" ")?;
            }
            match cmd {
                PathCommand::MoveTo(p) => write!(f, "M {} {}", p.x, p.y)?,
                PathCommand::QuadTo { ctrl, to } => {
                    write!(f, "Q {} {}, {} {}", ctrl.x, ctrl.y, to.x, to.y)?
                }
                PathCommand::LineTo(p) => write!(f, "L {} {}", p.x, p.y)?,
            }
        }
        Ok(())
    }
}

/// How stretched a cable is, in [0, 1].
///
/// Zero until the span passes `slack_ratio` of rest length, reaching one
/// `range_ratio` of rest length later.
pub fn tension(span: f32, rest_length: f32, cfg: &WireConfig) -> f32 {
    let t = (span - rest_length * cfg.tension_slack_ratio) / (rest_length * cfg.tension_range_ratio);
    if t.is_nan() {
        return 0.0;
    }
    t.clamp(0.0, 1.0)
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Rgb {
    pub r: u8,
    pub g: u8,
    pub b: u8,
}

impl Rgb {
    pub const fn new(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b }
    }

    /// Shift from the relaxed toward the taut stroke color.
    pub fn lerp_tension(t: f32) -> Self {
        let t = t.clamp(0.0, 1.0);
        let ch = |i: usize| {
            let a = RELAXED_RGB[i] as f32;
            let b = TAUT_RGB[i] as f32;
            (a + (b - a) * t).round().clamp(0.0, 255.0) as u8
        };
        Self::new(ch(0), ch(1), ch(2))
    }
}

impl fmt::Display for Rgb {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "rgb({}, {}, {})", self.r, self.g, self.b)
    }
}

#[inline]
pub fn cable_opacity(detached: bool) -> f32 {
    if detached {
        DETACHED_OPACITY
    } else {
        ATTACHED_OPACITY
    }
}

/// Render-ready output for one cable in one frame.
#[derive(Clone, Debug, PartialEq)]
pub struct CableFrame {
    pub path: CablePath,
    pub color: Rgb,
    pub opacity: f32,
    pub tension: f32,
    /// Where the anchor marker goes.
    pub anchor: Vec2,
}
