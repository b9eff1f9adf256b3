// Page wiring constants for the browser front-end.

// DOM element ids
pub const WEBCAM_ID: &str = "webcam";
pub const MAIN_VIDEO_ID: &str = "mainVideo";
pub const FLASH_OVERLAY_ID: &str = "transitionEffect";
pub const FIREWORKS_CANVAS_ID: &str = "fireworksCanvas";

// Face detection
pub const MODEL_URI: &str = "./models";
pub const DETECT_INTERVAL_MS: i32 = 200;

// Reveal sequence timer resolution
pub const SEQUENCE_TICK_MS: i32 = 50;

// CSS transition applied to camera, canvas and video fades
pub const FADE_TRANSITION: &str = "opacity 1.5s ease-in-out";
