use crate::cable::Node;
use glam::Vec2;

/// Advance every node except the anchor by one fixed Verlet step.
///
/// `velocity = (pos - prev) * damping; prev = pos; pos += velocity + (0, gravity)`.
/// The update order matters: damping is applied to the implied velocity
/// before `prev` is overwritten.
pub fn integrate(nodes: &mut [Node], gravity: f32, damping: f32) {
    let g = Vec2::new(0.0, gravity);
    for node in nodes.iter_mut().skip(1) {
        let vel = (node.pos - node.prev) * damping;
        node.prev = node.pos;
        node.pos += vel + g;
    }
}
