use serde::{Deserialize, Serialize};

/// Compositing rule applied when a display set is blended into a viewport.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum BlendMode {
    /// Plain alpha compositing.
    Composite,
    /// Maximum intensity projection (MIP).
    MaximumIntensity,
    /// Minimum intensity projection (MinIP).
    MinimumIntensity,
    /// Average intensity projection.
    AverageIntensity,
}

impl BlendMode {
    /// Map a configuration token to a blend mode.
    ///
    /// An absent or empty token selects `Composite`. Recognized tokens match
    /// case-insensitively; anything else yields `None` and the rendering
    /// engine keeps its own default.
    pub fn from_token(token: Option<&str>) -> Option<Self> {
        let token = match token {
            Some(t) if !t.is_empty() => t,
            _ => return Some(BlendMode::Composite),
        };

        match token.to_ascii_lowercase().as_str() {
            "composite" => Some(BlendMode::Composite),
            "mip" | "maximumintensityprojection" => Some(BlendMode::MaximumIntensity),
            "minip" | "minimumintensityprojection" => Some(BlendMode::MinimumIntensity),
            "avg" | "average" | "averageintensityprojection" => Some(BlendMode::AverageIntensity),
            _ => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_absent_or_empty_token_is_composite() {
        assert_eq!(BlendMode::from_token(None), Some(BlendMode::Composite));
        assert_eq!(BlendMode::from_token(Some("")), Some(BlendMode::Composite));
    }

    #[test]
    fn test_known_tokens() {
        assert_eq!(
            BlendMode::from_token(Some("MIP")),
            Some(BlendMode::MaximumIntensity)
        );
        assert_eq!(
            BlendMode::from_token(Some("minip")),
            Some(BlendMode::MinimumIntensity)
        );
        assert_eq!(
            BlendMode::from_token(Some("average")),
            Some(BlendMode::AverageIntensity)
        );
        assert_eq!(
            BlendMode::from_token(Some("Composite")),
            Some(BlendMode::Composite)
        );
    }

    #[test]
    fn test_unknown_token_is_none() {
        assert_eq!(BlendMode::from_token(Some("screen")), None);
        assert_eq!(BlendMode::from_token(Some("multiply")), None);
    }
}
