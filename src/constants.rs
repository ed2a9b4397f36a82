// DOM hooks and timing used by the web frontend.

// Elements
pub const WIRE_SVG_ID: &str = "wireSvg";
pub const WIRE_PATH_ID_PREFIX: &str = "wire"; // wire1..wireN
pub const WORD_SELECTOR: &str = ".word[data-wire]";
pub const HERO_WORD_SELECTOR: &str = ".hero-title .word";
pub const CURSOR_DOT_SELECTOR: &str = ".cursor-dot";

// Classes toggled by the wire state
pub const VISIBLE_CLASS: &str = "visible";
pub const SCROLLED_CLASS: &str = "scrolled";
pub const HOOKED_CLASS: &str = "hooked";

// Timing
pub const WIRE_START_DELAY_MS: i32 = 1600; // wires appear once the intro has played
pub const MARKER_FADE: &str = "opacity 0.5s ease";
pub const FRAME_STATS_EVERY: u64 = 600; // frames between timing logs

// Anchor placement inside the last glyph's box (fractions of width/height)
pub const GLYPH_ANCHOR_INSET_X: f32 = 0.38;
pub const GLYPH_ANCHOR_INSET_Y: f32 = 0.18;
// Fallback when the word has no text: inset into the element box
pub const BOX_ANCHOR_INSET_X: f32 = 0.2;
pub const BOX_ANCHOR_INSET_Y: f32 = 0.25;

// Resize: rest length follows viewport width, capped at the desktop length
pub const REST_LENGTH_VIEWPORT_RATIO: f32 = 0.25;
