use openrad_core::{BlendMode, Orientation, Rgb, ViewportType};
use serde::{Deserialize, Serialize};

/// Token a bag uses for a plain image-stack viewport.
pub const STACK: &str = "stack";
/// Token a bag uses for a reconstructed-volume viewport.
pub const VOLUME: &str = "volume";
/// Tool group bound to a viewport that does not name one.
pub const DEFAULT_TOOL_GROUP_ID: &str = "default";

// ── Viewport options ─────────────────────────────────────────────────────

/// Loosely-typed viewport options as supplied by hanging protocols and UI
/// state. Every field is optional; normalization fills the gaps.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct PublicViewportOptions {
    pub viewport_type: Option<String>,
    pub tool_group_id: Option<String>,
    pub viewport_id: Option<String>,
    pub orientation: Option<String>,
    pub background: Option<Rgb>,
    pub initial_view: Option<String>,
}

impl PublicViewportOptions {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_viewport_type(mut self, viewport_type: &str) -> Self {
        self.viewport_type = Some(viewport_type.to_string());
        self
    }

    pub fn with_tool_group_id(mut self, tool_group_id: &str) -> Self {
        self.tool_group_id = Some(tool_group_id.to_string());
        self
    }

    pub fn with_viewport_id(mut self, viewport_id: &str) -> Self {
        self.viewport_id = Some(viewport_id.to_string());
        self
    }

    pub fn with_orientation(mut self, orientation: &str) -> Self {
        self.orientation = Some(orientation.to_string());
        self
    }

    pub fn with_background(mut self, background: Rgb) -> Self {
        self.background = Some(background);
        self
    }

    pub fn with_initial_view(mut self, initial_view: &str) -> Self {
        self.initial_view = Some(initial_view.to_string());
        self
    }
}

/// Canonical viewport options after normalization.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ViewportOptions {
    pub viewport_id: String,
    pub viewport_type: ViewportType,
    pub orientation: Orientation,
    pub tool_group_id: String,
    pub background: Option<Rgb>,
    pub initial_view: Option<String>,
}

/// Resolve a public viewport bag against the owning viewport's id.
///
/// Absent fields take their defaults: the viewport type token falls back to
/// `"stack"` before mapping, the tool group to [`DEFAULT_TOOL_GROUP_ID`].
/// Any `viewport_id` carried inside the bag is ignored in favor of the
/// `viewport_id` argument.
pub fn normalize_viewport_options(
    public: &PublicViewportOptions,
    viewport_id: &str,
) -> ViewportOptions {
    normalize_viewport_options_with(public, viewport_id, ViewportType::from_token)
}

/// [`normalize_viewport_options`] with a caller-supplied viewport-type mapper.
pub fn normalize_viewport_options_with(
    public: &PublicViewportOptions,
    viewport_id: &str,
    map_viewport_type: impl Fn(&str) -> ViewportType,
) -> ViewportOptions {
    let viewport_type = map_viewport_type(public.viewport_type.as_deref().unwrap_or(STACK));

    // Orientation is only honored for volume viewports; every other type is
    // pinned to axial.
    let orientation = if is_volume_token(public.viewport_type.as_deref()) {
        Orientation::from_token(public.orientation.as_deref())
    } else {
        Orientation::AXIAL
    };

    let tool_group_id = public
        .tool_group_id
        .clone()
        .unwrap_or_else(|| DEFAULT_TOOL_GROUP_ID.to_string());

    ViewportOptions {
        viewport_id: viewport_id.to_string(),
        viewport_type,
        orientation,
        tool_group_id,
        background: public.background,
        initial_view: public.initial_view.clone(),
    }
}

/// The raw token decides whether orientation applies, not the mapped type.
fn is_volume_token(token: Option<&str>) -> bool {
    token.is_some_and(|t| t.eq_ignore_ascii_case(VOLUME))
}

// ── Display-set options ──────────────────────────────────────────────────

/// A VOI window in modality units. Both bounds absent means unset, which
/// is distinct from a window of zero width.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct Voi {
    pub window_width: Option<f64>,
    pub window_center: Option<f64>,
}

impl Voi {
    pub fn new(window_width: f64, window_center: f64) -> Self {
        Self {
            window_width: Some(window_width),
            window_center: Some(window_center),
        }
    }

    pub fn is_empty(&self) -> bool {
        self.window_width.is_none() && self.window_center.is_none()
    }
}

/// Loosely-typed display-set options as supplied by a caller.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct PublicDisplaySetOptions {
    pub voi: Option<Voi>,
    pub voi_inverted: Option<bool>,
    pub blend_mode: Option<String>,
    pub colormap: Option<String>,
}

impl PublicDisplaySetOptions {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_voi(mut self, voi: Voi) -> Self {
        self.voi = Some(voi);
        self
    }

    pub fn with_voi_inverted(mut self, voi_inverted: bool) -> Self {
        self.voi_inverted = Some(voi_inverted);
        self
    }

    pub fn with_blend_mode(mut self, blend_mode: &str) -> Self {
        self.blend_mode = Some(blend_mode.to_string());
        self
    }

    pub fn with_colormap(mut self, colormap: &str) -> Self {
        self.colormap = Some(colormap.to_string());
        self
    }
}

/// Canonical display-set options after normalization.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DisplaySetOptions {
    pub voi: Voi,
    pub voi_inverted: bool,
    pub blend_mode: Option<BlendMode>,
    pub colormap: Option<String>,
}

/// Resolve a sequence of public display-set bags, one entry per bag.
///
/// Order is preserved. An empty `voi` stays unset, `voi_inverted` defaults
/// to `false`, and the blend token maps through [`BlendMode::from_token`].
pub fn normalize_display_set_options(public: &[PublicDisplaySetOptions]) -> Vec<DisplaySetOptions> {
    normalize_display_set_options_with(public, BlendMode::from_token)
}

/// [`normalize_display_set_options`] with a caller-supplied blend-mode mapper.
pub fn normalize_display_set_options_with(
    public: &[PublicDisplaySetOptions],
    map_blend_mode: impl Fn(Option<&str>) -> Option<BlendMode>,
) -> Vec<DisplaySetOptions> {
    public
        .iter()
        .map(|entry| DisplaySetOptions {
            voi: entry.voi.unwrap_or_default(),
            voi_inverted: entry.voi_inverted.unwrap_or(false),
            blend_mode: map_blend_mode(entry.blend_mode.as_deref()),
            colormap: entry.colormap.clone(),
        })
        .collect()
}
