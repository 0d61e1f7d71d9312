//! # OpenRad Viewport
//!
//! Configuration state for a single viewport in the viewer grid. Hanging
//! protocols and user interactions describe viewports with loosely-typed
//! option bags; this crate normalizes those bags into the canonical values
//! the rendering engine consumes, and tracks the bindings (engine, screen
//! element) a live viewport accumulates.

pub mod options;
pub mod viewport;

pub use options::{
    normalize_display_set_options, normalize_viewport_options, DisplaySetOptions,
    PublicDisplaySetOptions, PublicViewportOptions, ViewportOptions, Voi,
};
pub use viewport::{ElementHandle, ViewportInfo};
