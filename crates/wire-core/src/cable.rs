//! Cable state: an ordered chain of Verlet nodes.
//!
//! Velocity is never stored. It is implied by the gap between `pos` and
//! `prev`, which the integrator rewrites every step.

use glam::Vec2;

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Node {
    pub pos: Vec2,
    pub prev: Vec2,
}

impl Node {
    /// A node at rest at `p`.
    #[inline]
    pub fn at(p: Vec2) -> Self {
        Self { pos: p, prev: p }
    }

    /// Displacement over the last step, before damping.
    #[inline]
    pub fn velocity(&self) -> Vec2 {
        self.pos - self.prev
    }
}

#[derive(Clone, Debug)]
pub struct Cable {
    nodes: Vec<Node>,
}

impl Cable {
    /// Seed a cable hanging straight down from `anchor`, one segment per node.
    pub fn hanging(anchor: Vec2, node_count: usize, segment_length: f32) -> Self {
        let nodes = (0..node_count)
            .map(|j| Node::at(anchor + Vec2::new(0.0, j as f32 * segment_length)))
            .collect();
        Self { nodes }
    }

    #[inline]
    pub fn nodes(&self) -> &[Node] {
        &self.nodes
    }

    #[inline]
    pub fn nodes_mut(&mut self) -> &mut [Node] {
        &mut self.nodes
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.nodes.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.nodes.is_empty()
    }

    #[inline]
    pub fn first(&self) -> Option<&Node> {
        self.nodes.first()
    }

    #[inline]
    pub fn last(&self) -> Option<&Node> {
        self.nodes.last()
    }

    /// Straight-line distance from the anchored end to the free end.
    pub fn span(&self) -> f32 {
        match (self.nodes.first(), self.nodes.last()) {
            (Some(a), Some(b)) => a.pos.distance(b.pos),
            _ => 0.0,
        }
    }

    /// Snap the first node onto the anchor, clearing its implied velocity.
    #[inline]
    pub fn pin_anchor(&mut self, anchor: Vec2) {
        if let Some(n) = self.nodes.first_mut() {
            *n = Node::at(anchor);
        }
    }
}
