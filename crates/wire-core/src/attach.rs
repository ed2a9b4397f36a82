//! Attach/detach hysteresis for the cable group.
//!
//! All cables share a single flag. Scrolling past the page top lets the free
//! ends drop; bringing the pointer back near the words re-attaches them even
//! while scrolled; compact viewports always dangle.

use crate::config::WireConfig;
use glam::Vec2;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Transition {
    Detached,
    Attached,
}

/// Mean of all anchors, or `None` for an empty list.
pub fn centroid(anchors: &[Vec2]) -> Option<Vec2> {
    if anchors.is_empty() {
        return None;
    }
    let sum = anchors.iter().copied().fold(Vec2::ZERO, |acc, a| acc + a);
    Some(sum / anchors.len() as f32)
}

/// Pure detach rule for one evaluation.
///
/// `distance_to_anchors` is the pointer's distance to the anchor centroid.
pub fn should_detach(
    scroll_offset: f32,
    distance_to_anchors: f32,
    compact: bool,
    cfg: &WireConfig,
) -> bool {
    if compact {
        return true;
    }
    scroll_offset > cfg.scroll_detach_offset && distance_to_anchors >= cfg.reattach_distance
}

#[derive(Clone, Debug, Default)]
pub struct AttachmentController {
    detached: bool,
    last_distance: Option<f32>,
}

impl AttachmentController {
    /// Initial state: scrolled or compact pages start detached, with no
    /// proximity snap-back applied yet.
    pub fn starting(scroll_offset: f32, compact: bool, cfg: &WireConfig) -> Self {
        Self {
            detached: compact || scroll_offset > cfg.scroll_detach_offset,
            last_distance: None,
        }
    }

    #[inline]
    pub fn is_detached(&self) -> bool {
        self.detached
    }

    /// Pointer-to-centroid distance from the most recent evaluation.
    #[inline]
    pub fn last_distance(&self) -> Option<f32> {
        self.last_distance
    }

    /// Re-evaluate and report a change of state, if any.
    ///
    /// Without anchors the distance is undefined, so the previous flag is kept
    /// unless the compact override applies.
    pub fn update(
        &mut self,
        scroll_offset: f32,
        pointer: Vec2,
        anchors: &[Vec2],
        compact: bool,
        cfg: &WireConfig,
    ) -> Option<Transition> {
        let next = match centroid(anchors) {
            Some(c) => {
                let d = pointer.distance(c);
                self.last_distance = Some(d);
                should_detach(scroll_offset, d, compact, cfg)
            }
            None if compact => true,
            None => {
                log::debug!("[attach] no anchors; keeping detached={}", self.detached);
                self.detached
            }
        };
        if next == self.detached {
            return None;
        }
        self.detached = next;
        let t = if next {
            Transition::Detached
        } else {
            Transition::Attached
        };
        log::info!(
            "[attach] {:?} (scroll={:.0}, distance={:?})",
            t,
            scroll_offset,
            self.last_distance
        );
        Some(t)
    }
}
