use serde::{Deserialize, Serialize};

/// Rendering mode of a viewport.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum ViewportType {
    /// Scrollable stack of 2D images, one slice shown at a time.
    Stack,
    /// Orthographic volume slicing (multi-planar reformat).
    Volume,
    /// Full 3D volume rendering.
    Volume3d,
}

impl ViewportType {
    /// Map a configuration token to a viewport type.
    ///
    /// Matching is case-insensitive. Unrecognized tokens fall back to
    /// `Stack` rather than failing.
    pub fn from_token(token: &str) -> Self {
        match token.to_ascii_lowercase().as_str() {
            "stack" => ViewportType::Stack,
            "volume" => ViewportType::Volume,
            "volume3d" | "volume_3d" => ViewportType::Volume3d,
            _ => ViewportType::Stack,
        }
    }
}

impl Default for ViewportType {
    fn default() -> Self {
        ViewportType::Stack
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_known_tokens() {
        assert_eq!(ViewportType::from_token("stack"), ViewportType::Stack);
        assert_eq!(ViewportType::from_token("volume"), ViewportType::Volume);
        assert_eq!(ViewportType::from_token("volume3d"), ViewportType::Volume3d);
        assert_eq!(ViewportType::from_token("volume_3d"), ViewportType::Volume3d);
    }

    #[test]
    fn test_tokens_match_case_insensitively() {
        assert_eq!(ViewportType::from_token("Stack"), ViewportType::Stack);
        assert_eq!(ViewportType::from_token("VOLUME"), ViewportType::Volume);
        assert_eq!(ViewportType::from_token("Volume3D"), ViewportType::Volume3d);
    }

    #[test]
    fn test_unknown_token_falls_back_to_stack() {
        assert_eq!(ViewportType::from_token("cinematic"), ViewportType::Stack);
        assert_eq!(ViewportType::from_token(""), ViewportType::Stack);
    }
}
