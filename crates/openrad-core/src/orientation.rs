use serde::{Deserialize, Serialize};

/// Slicing orientation of a volume viewport.
///
/// Expressed as the slice-plane normal plus the in-plane up direction, both
/// in patient (LPS) coordinates, which is the form the rendering engine's
/// camera expects.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Orientation {
    /// Unit normal of the slice plane.
    pub slice_normal: [f64; 3],
    /// Up direction within the slice plane.
    pub view_up: [f64; 3],
}

impl Orientation {
    /// Axial (transverse) plane.
    pub const AXIAL: Orientation = Orientation {
        slice_normal: [0.0, 0.0, -1.0],
        view_up: [0.0, -1.0, 0.0],
    };

    /// Sagittal (lateral) plane.
    pub const SAGITTAL: Orientation = Orientation {
        slice_normal: [1.0, 0.0, 0.0],
        view_up: [0.0, 0.0, 1.0],
    };

    /// Coronal (frontal) plane.
    pub const CORONAL: Orientation = Orientation {
        slice_normal: [0.0, 1.0, 0.0],
        view_up: [0.0, 0.0, 1.0],
    };

    /// Map an orientation token to its plane.
    ///
    /// Matching is case-insensitive; unknown or absent tokens fall back to
    /// axial.
    pub fn from_token(token: Option<&str>) -> Self {
        match token.map(|t| t.to_ascii_lowercase()).as_deref() {
            Some("axial") => Orientation::AXIAL,
            Some("coronal") => Orientation::CORONAL,
            Some("sagittal") => Orientation::SAGITTAL,
            _ => Orientation::AXIAL,
        }
    }
}

impl Default for Orientation {
    fn default() -> Self {
        Orientation::AXIAL
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_tokens_map_to_planes() {
        assert_eq!(Orientation::from_token(Some("axial")), Orientation::AXIAL);
        assert_eq!(
            Orientation::from_token(Some("coronal")),
            Orientation::CORONAL
        );
        assert_eq!(
            Orientation::from_token(Some("Sagittal")),
            Orientation::SAGITTAL
        );
    }

    #[test]
    fn test_unknown_or_absent_token_is_axial() {
        assert_eq!(Orientation::from_token(None), Orientation::AXIAL);
        assert_eq!(Orientation::from_token(Some("oblique")), Orientation::AXIAL);
    }

    #[test]
    fn test_planes_are_distinct() {
        assert_ne!(Orientation::AXIAL, Orientation::SAGITTAL);
        assert_ne!(Orientation::AXIAL, Orientation::CORONAL);
        assert_ne!(Orientation::SAGITTAL, Orientation::CORONAL);
    }
}
