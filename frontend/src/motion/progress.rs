//! Maps "how far the page has scrolled into a container" to the visual
//! state of a pinned target element.

use super::easing::{clamp_unit, ease_out_cubic, lerp};
use super::viewport::Viewport;
use web_sys::HtmlElement;

/// How eased progress turns into visual properties.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum VisualPolicy {
    /// Shrinks from `start_scale` to 1 while panning from the top edge to
    /// the centre. Opacity stays at 1.
    ScalePan { start_scale: f64 },
    /// Fades and grows in over the first `reveal_fraction` of a viewport
    /// height. No easing curve, the ramp is short enough.
    OpacityScale { reveal_fraction: f64, start_scale: f64 },
}

impl VisualPolicy {
    pub const SCALE_PAN: Self = Self::ScalePan { start_scale: 3.0 };
    pub const OPACITY_SCALE: Self = Self::OpacityScale {
        reveal_fraction: 0.1,
        start_scale: 0.9,
    };
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ProgressConfig {
    /// Scroll distance of the whole effect, in viewport heights.
    pub span_vh: f64,
    /// Height of the fixed navigation bar; the effect starts when the
    /// container reaches its bottom edge.
    pub nav_height: f64,
    pub policy: VisualPolicy,
}

impl ProgressConfig {
    /// Effect span in pixels for the given viewport.
    pub fn span_px(&self, viewport_height: f64) -> f64 {
        self.span_vh * viewport_height
    }
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct VisualState {
    pub opacity: f64,
    pub scale: f64,
    pub translate_y: f64,
}

impl VisualState {
    /// Translation first, then scale.
    pub fn transform(&self) -> String {
        format!("translateY({:.2}px) scale({:.4})", self.translate_y, self.scale)
    }

    pub fn opacity_css(&self) -> String {
        format!("{:.4}", self.opacity)
    }

    pub fn apply(&self, element: &HtmlElement) {
        let style = element.style();
        if let Err(e) = style.set_property("opacity", &self.opacity_css()) {
            log::warn!("failed to set opacity: {:?}", e);
        }
        if let Err(e) = style.set_property("transform", &self.transform()) {
            log::warn!("failed to set transform: {:?}", e);
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ScrollProgressMapper {
    config: ProgressConfig,
}

impl ScrollProgressMapper {
    pub fn new(config: ProgressConfig) -> Self {
        Self { config }
    }

    /// Pixels scrolled past the point where the container top meets the nav
    /// bar. Negative before entry.
    pub fn scrolled_into(&self, container_top: f64) -> f64 {
        -(container_top - self.config.nav_height)
    }

    /// Linear progress clamped to [0, 1].
    pub fn progress(&self, container_top: f64, viewport_height: f64) -> f64 {
        let span = self.config.span_px(viewport_height);
        if span <= 0.0 {
            return 0.0;
        }
        clamp_unit(self.scrolled_into(container_top) / span)
    }

    pub fn visual_state(&self, container_top: f64, viewport_height: f64) -> VisualState {
        match self.config.policy {
            VisualPolicy::ScalePan { start_scale } => {
                let p = ease_out_cubic(self.progress(container_top, viewport_height));
                let start_offset = (start_scale - 1.0) * viewport_height / 2.0;
                VisualState {
                    opacity: 1.0,
                    scale: lerp(start_scale, 1.0, p),
                    translate_y: lerp(start_offset, 0.0, p),
                }
            }
            VisualPolicy::OpacityScale {
                reveal_fraction,
                start_scale,
            } => {
                let reveal = reveal_fraction * viewport_height;
                let p = if reveal > 0.0 {
                    clamp_unit(self.scrolled_into(container_top) / reveal)
                } else {
                    1.0
                };
                VisualState {
                    opacity: clamp_unit(4.0 * p + 0.1),
                    scale: lerp(start_scale, 1.0, p),
                    translate_y: 0.0,
                }
            }
        }
    }

    /// Reads live geometry for `container_id`. `None` when it is missing.
    pub fn sample<V: Viewport>(&self, viewport: &V, container_id: &str) -> Option<VisualState> {
        let top = viewport.element_top(container_id)?;
        Some(self.visual_state(top, viewport.viewport_height()))
    }
}
