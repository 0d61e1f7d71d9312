//! # OpenRad Core
//!
//! Canonical rendering vocabulary shared across the OpenRad viewer:
//! viewport types, slicing orientations, blend modes, and colors.
//!
//! Layout configuration reaches the viewer as loosely-typed string tokens.
//! The `from_token` mappers in this crate turn those tokens into the
//! canonical enums the rendering engine consumes, falling back to safe
//! defaults instead of failing on unrecognized input.

pub mod blend;
pub mod color;
pub mod orientation;
pub mod viewport_type;

pub use blend::BlendMode;
pub use color::Rgb;
pub use orientation::Orientation;
pub use viewport_type::ViewportType;
