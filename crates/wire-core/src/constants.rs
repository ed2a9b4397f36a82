// Shared physics/visual tuning constants used by both web and native frontends.

// Cable shape
pub const WIRE_COUNT: usize = 5; // one cable per hooked heading word
pub const NODE_COUNT: usize = 14; // mass points per cable, anchor included
pub const REST_LENGTH: f32 = 150.0; // total rest length of one cable (px)

// Integration
pub const GRAVITY: f32 = 0.4; // downward acceleration per step²
pub const DAMPING: f32 = 0.96; // velocity kept per step (air resistance)

// Constraint solving
pub const SOLVER_ITERATIONS: usize = 25; // relaxation passes per frame; more = stiffer

// Attachment
pub const SCROLL_DETACH_OFFSET: f32 = 100.0; // scroll past this and cables let go
pub const REATTACH_DISTANCE: f32 = 300.0; // pointer this close to the words snaps back
pub const COMPACT_VIEWPORT_MAX_WIDTH: f32 = 768.0; // at or below this width cables only dangle

// Tension feedback
pub const TENSION_SLACK_RATIO: f32 = 0.9; // span below 90% of rest reads as slack
pub const TENSION_RANGE_RATIO: f32 = 0.4; // span range (of rest) mapped onto 0..1

// Palette
pub const RELAXED_RGB: [u8; 3] = [255, 107, 53];
pub const TAUT_RGB: [u8; 3] = [225, 87, 38];
pub const ANCHOR_MARKER_RADIUS: f32 = 3.0;
pub const ANCHOR_MARKER_FILL: &str = "#ff6b35";

// Opacity
pub const ATTACHED_OPACITY: f32 = 1.0;
pub const DETACHED_OPACITY: f32 = 0.3;
