// Browser-side constants for mounting and the frame loop.

// Id given to a canvas created by `mount` when the page did not supply one
pub const CREATED_CANVAS_ID: &str = "nodefield-canvas";

// Seconds between `[frame]` statistics lines at debug level
pub const FRAME_STATS_INTERVAL_SEC: f32 = 5.0;

// Inline style that turns the canvas into a fixed, non-interactive backdrop
pub const BACKGROUND_STYLE: [(&str, &str); 7] = [
    ("position", "fixed"),
    ("top", "0"),
    ("left", "0"),
    ("width", "100%"),
    ("height", "100%"),
    ("z-index", "-1"),
    ("pointer-events", "none"),
];
