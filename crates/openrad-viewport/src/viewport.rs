use openrad_core::{color, Orientation, Rgb, ViewportType};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::options::{
    normalize_display_set_options, normalize_viewport_options, DisplaySetOptions,
    PublicDisplaySetOptions, PublicViewportOptions, ViewportOptions,
};

/// Opaque handle for the screen element a viewport renders into.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct ElementHandle(Uuid);

impl ElementHandle {
    pub fn new() -> Self {
        Self(Uuid::new_v4())
    }
}

impl Default for ElementHandle {
    fn default() -> Self {
        Self::new()
    }
}

/// Configuration unit for one viewport in the grid.
///
/// Keeps the slot's identity, its bindings to the rendering engine and
/// screen element, and the latest normalized option snapshots. Snapshots
/// are replaced wholesale; the rendering engine reads them when it
/// rebuilds the viewport.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ViewportInfo {
    viewport_index: usize,
    viewport_id: String,
    rendering_engine_id: Option<String>,
    element: Option<ElementHandle>,
    viewport_options: ViewportOptions,
    display_set_options: Vec<DisplaySetOptions>,
}

impl ViewportInfo {
    /// Create a descriptor for the grid slot `viewport_index`, already
    /// carrying the normalized form of empty option bags.
    pub fn new(viewport_index: usize, viewport_id: &str) -> Self {
        Self {
            viewport_index,
            viewport_id: viewport_id.to_string(),
            rendering_engine_id: None,
            element: None,
            viewport_options: normalize_viewport_options(
                &PublicViewportOptions::default(),
                viewport_id,
            ),
            display_set_options: normalize_display_set_options(&[
                PublicDisplaySetOptions::default(),
            ]),
        }
    }

    // ── Identity & bindings ──────────────────────────────────────────────

    pub fn set_viewport_index(&mut self, viewport_index: usize) {
        self.viewport_index = viewport_index;
    }

    pub fn get_viewport_index(&self) -> usize {
        self.viewport_index
    }

    /// Rename the viewport. Snapshots taken under the old id are kept
    /// until the next `set_public_viewport_options` call.
    pub fn set_viewport_id(&mut self, viewport_id: &str) {
        self.viewport_id = viewport_id.to_string();
    }

    pub fn get_viewport_id(&self) -> &str {
        &self.viewport_id
    }

    pub fn set_rendering_engine_id(&mut self, rendering_engine_id: &str) {
        self.rendering_engine_id = Some(rendering_engine_id.to_string());
    }

    pub fn get_rendering_engine_id(&self) -> Option<&str> {
        self.rendering_engine_id.as_deref()
    }

    pub fn set_element(&mut self, element: ElementHandle) {
        self.element = Some(element);
    }

    pub fn get_element(&self) -> Option<ElementHandle> {
        self.element
    }

    // ── Option snapshots ─────────────────────────────────────────────────

    /// Normalize a public viewport bag against this viewport's id and
    /// store the result.
    pub fn set_public_viewport_options(&mut self, public: &PublicViewportOptions) {
        let options = normalize_viewport_options(public, &self.viewport_id);
        log::debug!(
            "viewport '{}': {:?} viewport, tool group '{}'",
            self.viewport_id,
            options.viewport_type,
            options.tool_group_id
        );
        self.set_viewport_options(options);
    }

    /// Store already-canonical viewport options verbatim.
    pub fn set_viewport_options(&mut self, options: ViewportOptions) {
        self.viewport_options = options;
    }

    pub fn get_viewport_options(&self) -> &ViewportOptions {
        &self.viewport_options
    }

    /// Normalize a sequence of public display-set bags and store the
    /// result, replacing any previous entries.
    pub fn set_public_display_set_options(&mut self, public: &[PublicDisplaySetOptions]) {
        let options = normalize_display_set_options(public);
        log::debug!(
            "viewport '{}': {} display set(s) configured",
            self.viewport_id,
            options.len()
        );
        self.set_display_set_options(options);
    }

    /// Store already-canonical display-set options verbatim.
    pub fn set_display_set_options(&mut self, options: Vec<DisplaySetOptions>) {
        self.display_set_options = options;
    }

    pub fn get_display_set_options(&self) -> &[DisplaySetOptions] {
        &self.display_set_options
    }

    // ── Resolved accessors ───────────────────────────────────────────────

    /// Background color the engine should clear with. Black when the
    /// options never set one.
    pub fn get_background(&self) -> Rgb {
        self.viewport_options.background.unwrap_or(color::BLACK)
    }

    pub fn get_viewport_type(&self) -> ViewportType {
        self.viewport_options.viewport_type
    }

    pub fn get_orientation(&self) -> Orientation {
        self.viewport_options.orientation
    }

    pub fn get_tool_group_id(&self) -> &str {
        &self.viewport_options.tool_group_id
    }
}
