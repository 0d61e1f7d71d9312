/// RGB color with components in `0.0..=1.0`, the range the rendering engine
/// consumes.
pub type Rgb = [f32; 3];

/// Default viewport background.
pub const BLACK: Rgb = [0.0, 0.0, 0.0];
