use std::fmt::Write as _;

use glam::Vec2;
use wire_core::{
    CableFrame, FrameInput, PointerSnapshot, Simulation, StepStatus, Viewport,
    ANCHOR_MARKER_FILL, ANCHOR_MARKER_RADIUS, WIRE_COUNT,
};

const POINTER_ORBIT_RADIUS: f32 = 120.0;
const POINTER_ORBIT_SPEED: f32 = 0.03; // radians per frame
const SCROLLED_OFFSET: f32 = 400.0;

/// Heading words spread across the upper third of the viewport.
pub fn heading_anchors(vp: Viewport) -> Vec<Vec2> {
    let span = vp.width * 0.5;
    let left = (vp.width - span) * 0.5;
    (0..WIRE_COUNT)
        .map(|i| {
            let t = i as f32 / (WIRE_COUNT.max(2) - 1) as f32;
            Vec2::new(left + span * t, vp.height * 0.3)
        })
        .collect()
}

/// Scripted pointer: orbits below the heading, then parks in a far corner
/// once the page is scrolled.
pub fn scripted_pointer(frame: u32, vp: Viewport, scrolled: bool) -> Vec2 {
    if scrolled {
        return Vec2::new(vp.width - 40.0, vp.height - 40.0);
    }
    let angle = frame as f32 * POINTER_ORBIT_SPEED;
    Vec2::new(vp.width * 0.5, vp.height * 0.55) + Vec2::from_angle(angle) * POINTER_ORBIT_RADIUS
}

/// Seed `sim` under the heading and run `frames` scripted steps.
///
/// Returns the last advanced frame. On a compact viewport nothing advances,
/// so the seeded cables are rendered as they hang.
pub fn simulate(
    sim: &mut Simulation,
    vp: Viewport,
    frames: u32,
    scroll_after: Option<u32>,
) -> Vec<Option<CableFrame>> {
    let anchors = heading_anchors(vp);
    let input_at = |frame: u32| {
        let scrolled = scroll_after.is_some_and(|s| frame >= s);
        FrameInput {
            pointer: PointerSnapshot {
                pos: scripted_pointer(frame, vp, scrolled),
                active: true,
            },
            scroll_offset: if scrolled { SCROLLED_OFFSET } else { 0.0 },
            viewport: vp,
            anchors: &anchors,
        }
    };

    sim.initialize(&input_at(0));
    let mut last = None;
    for frame in 0..frames {
        let out = sim.step(&input_at(frame));
        if let Some(t) = out.transition {
            log::info!("[preview] frame {}: {:?}", frame, t);
        }
        if out.status == StepStatus::Advanced {
            last = Some(out.cables);
        }
    }
    last.unwrap_or_else(|| sim.snapshot(&anchors))
}

pub fn render_svg(vp: Viewport, cables: &[Option<CableFrame>]) -> String {
    let mut svg = String::new();
    _ = writeln!(
        svg,
        r#"<svg xmlns="http://www.w3.org/2000/svg" width="{w}" height="{h}" viewBox="0 0 {w} {h}">"#,
        w = vp.width,
        h = vp.height
    );
    for cable in cables.iter().flatten() {
        _ = writeln!(
            svg,
            r#"  <path d="{}" fill="none" stroke="{}" stroke-width="2" stroke-linecap="round" opacity="{}"/>"#,
            cable.path, cable.color, cable.opacity
        );
    }
    for cable in cables.iter().flatten() {
        _ = writeln!(
            svg,
            r#"  <circle cx="{}" cy="{}" r="{}" fill="{}"/>"#,
            cable.anchor.x, cable.anchor.y, ANCHOR_MARKER_RADIUS, ANCHOR_MARKER_FILL
        );
    }
    svg.push_str("</svg>\n");
    svg
}
