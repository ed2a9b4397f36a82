//! Iterative distance-constraint relaxation.
//!
//! Each pass walks adjacent pairs once and nudges them toward
//! `segment_length`. A single pass under-constrains the chain; repeated passes
//! propagate corrections end to end, so `iterations` is the stiffness knob.

use crate::cable::Node;
use glam::Vec2;

/// Relax `nodes` toward uniform `segment_length` spacing.
///
/// Node 0 is the anchor and never moves here. When `pinned_end` is set, the
/// last node is snapped onto it before every pass and is likewise immovable.
pub fn relax(nodes: &mut [Node], segment_length: f32, iterations: usize, pinned_end: Option<Vec2>) {
    let n = nodes.len();
    if n < 2 {
        return;
    }
    let last = n - 1;
    for _ in 0..iterations {
        if let Some(p) = pinned_end {
            nodes[last].pos = p;
        }
        for i in 0..last {
            relax_pair(nodes, i, segment_length, pinned_end.is_some() && i + 1 == last);
        }
    }
}

#[inline]
fn relax_pair(nodes: &mut [Node], i: usize, segment_length: f32, tail_pinned: bool) {
    let head_fixed = i == 0;
    if head_fixed && tail_pinned {
        // two-node cable with both ends held
        return;
    }
    let delta = nodes[i + 1].pos - nodes[i].pos;
    let dist = delta.length();
    if dist == 0.0 {
        return;
    }
    let percent = (segment_length - dist) / dist / 2.0;
    let offset = delta * percent;
    if head_fixed {
        nodes[i + 1].pos += offset * 2.0;
    } else if tail_pinned {
        nodes[i].pos -= offset * 2.0;
    } else {
        nodes[i].pos -= offset;
        nodes[i + 1].pos += offset;
    }
}
