//! The simulation context and its per-frame step.
//!
//! A [`Simulation`] owns every cable plus the shared attachment flag. It never
//! schedules itself: a front end (requestAnimationFrame, a test loop, the
//! native preview) calls [`Simulation::step`] once per frame.

use crate::attach::{AttachmentController, Transition};
use crate::cable::Cable;
use crate::config::{ConfigError, WireConfig};
use crate::integrate::integrate;
use crate::path::{cable_opacity, tension, CableFrame, CablePath, Rgb};
use crate::solver::relax;
use crate::state::FrameInput;
use glam::Vec2;

const DIAG_EVERY: u64 = 600; // frames between debug summaries

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum StepStatus {
    /// `initialize` has not run yet; nothing was touched.
    Uninitialized,
    /// Compact viewport: the loop keeps ticking but the physics is idle.
    Inert,
    Advanced,
}

/// Result of one [`Simulation::step`].
#[derive(Clone, Debug)]
pub struct Frame {
    pub status: StepStatus,
    pub transition: Option<Transition>,
    /// One entry per cable; `None` means the cable was skipped this frame
    /// (no anchor) and still shows its previous state.
    pub cables: Vec<Option<CableFrame>>,
}

impl Frame {
    fn idle(status: StepStatus) -> Self {
        Self {
            status,
            transition: None,
            cables: Vec::new(),
        }
    }
}

pub struct Simulation {
    config: WireConfig,
    cable_count: usize,
    cables: Vec<Cable>,
    attach: AttachmentController,
    frame_counter: u64,
    initialized: bool,
}

impl Simulation {
    pub fn new(config: WireConfig, cable_count: usize) -> Result<Self, ConfigError> {
        config.validate()?;
        Ok(Self {
            config,
            cable_count,
            cables: Vec::new(),
            attach: AttachmentController::default(),
            frame_counter: 0,
            initialized: false,
        })
    }

    /// Seed every cable hanging from its anchor and pick the starting
    /// attachment state. Cables without an anchor hang from the pointer.
    /// Calling this again re-seeds from scratch.
    pub fn initialize(&mut self, input: &FrameInput<'_>) {
        let seg = self.config.segment_length();
        let n = self.config.node_count;
        self.cables = (0..self.cable_count)
            .map(|i| {
                let anchor = input.anchors.get(i).copied().unwrap_or(input.pointer.pos);
                Cable::hanging(anchor, n, seg)
            })
            .collect();
        let compact = input.viewport.is_compact(self.config.compact_max_width);
        self.attach = AttachmentController::starting(input.scroll_offset, compact, &self.config);
        self.frame_counter = 0;
        self.initialized = true;
        log::info!(
            "[wires] initialized {} cables x {} nodes (segment {:.2}, detached={})",
            self.cables.len(),
            n,
            seg,
            self.attach.is_detached()
        );
    }

    /// Change the rest length between frames. Node history is kept; the
    /// solver pulls the chain toward the new spacing over the next frames.
    pub fn set_rest_length(&mut self, rest_length: f32) -> Result<(), ConfigError> {
        let next = WireConfig {
            rest_length,
            ..self.config.clone()
        };
        self.reconfigure(next)
    }

    /// Swap in a new configuration. Only a node count change re-seeds the
    /// cables, since the chain length is fixed per cable.
    pub fn reconfigure(&mut self, config: WireConfig) -> Result<(), ConfigError> {
        config.validate()?;
        let reseed = config.node_count != self.config.node_count;
        self.config = config;
        if reseed && self.initialized {
            let seg = self.config.segment_length();
            let n = self.config.node_count;
            for cable in &mut self.cables {
                let anchor = cable.first().map(|node| node.pos).unwrap_or(Vec2::ZERO);
                *cable = Cable::hanging(anchor, n, seg);
            }
            log::info!("[wires] node count changed to {}; cables re-seeded", n);
        } else {
            log::debug!(
                "[wires] reconfigured: rest={:.1} iterations={}",
                self.config.rest_length,
                self.config.iterations
            );
        }
        Ok(())
    }

    /// Advance the whole simulation by one frame.
    ///
    /// Order: attachment → per cable (pin anchor → integrate → relax → emit).
    pub fn step(&mut self, input: &FrameInput<'_>) -> Frame {
        if !self.initialized {
            return Frame::idle(StepStatus::Uninitialized);
        }
        let cfg = &self.config;
        if input.viewport.is_compact(cfg.compact_max_width) {
            return Frame::idle(StepStatus::Inert);
        }
        self.frame_counter += 1;

        let transition = self.attach.update(
            input.scroll_offset,
            input.pointer.pos,
            input.anchors,
            false,
            cfg,
        );
        let detached = self.attach.is_detached();
        let pinned_end = (!detached).then_some(input.pointer.pos);
        let seg = cfg.segment_length();

        let cables = self
            .cables
            .iter_mut()
            .enumerate()
            .map(|(i, cable)| {
                let anchor = *input.anchors.get(i)?;
                cable.pin_anchor(anchor);
                integrate(cable.nodes_mut(), cfg.gravity, cfg.damping);
                relax(cable.nodes_mut(), seg, cfg.iterations, pinned_end);
                Some(cable_frame(cable, anchor, cfg, detached))
            })
            .collect::<Vec<_>>();

        if self.frame_counter % DIAG_EVERY == 0 {
            log::debug!(
                "[wires] frame {} detached={} drawn={}/{}",
                self.frame_counter,
                detached,
                cables.iter().filter(|c| c.is_some()).count(),
                cables.len()
            );
        }

        Frame {
            status: StepStatus::Advanced,
            transition,
            cables,
        }
    }

    /// Render the current node state without advancing it. Cables without
    /// an entry in `anchors` mark their own first node.
    pub fn snapshot(&self, anchors: &[Vec2]) -> Vec<Option<CableFrame>> {
        let detached = self.attach.is_detached();
        self.cables
            .iter()
            .enumerate()
            .map(|(i, cable)| {
                let anchor = anchors
                    .get(i)
                    .copied()
                    .or_else(|| cable.first().map(|n| n.pos))?;
                Some(cable_frame(cable, anchor, &self.config, detached))
            })
            .collect()
    }

    #[inline]
    pub fn config(&self) -> &WireConfig {
        &self.config
    }

    #[inline]
    pub fn cables(&self) -> &[Cable] {
        &self.cables
    }

    #[inline]
    pub fn frame_counter(&self) -> u64 {
        self.frame_counter
    }

    #[inline]
    pub fn is_initialized(&self) -> bool {
        self.initialized
    }

    #[inline]
    pub fn is_detached(&self) -> bool {
        self.attach.is_detached()
    }

    /// Pointer-to-centroid distance from the latest evaluation, if any.
    #[inline]
    pub fn anchor_distance(&self) -> Option<f32> {
        self.attach.last_distance()
    }
}

fn cable_frame(cable: &Cable, anchor: Vec2, cfg: &WireConfig, detached: bool) -> CableFrame {
    let t = tension(cable.span(), cfg.rest_length, cfg);
    CableFrame {
        path: CablePath::from_nodes(cable.nodes()),
        color: Rgb::lerp_tension(t),
        opacity: cable_opacity(detached),
        tension: t,
        anchor,
    }
}
