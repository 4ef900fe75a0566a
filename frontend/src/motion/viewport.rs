use wasm_bindgen::JsCast;
use web_sys::{HtmlElement, Window};

/// Live layout values the scroll effects read. Implemented over `web_sys`
/// in the browser and by plain structs in tests.
pub trait Viewport {
    /// Vertical document scroll offset in pixels.
    fn scroll_y(&self) -> f64;

    fn viewport_height(&self) -> f64;

    /// Top edge of the element relative to the viewport
    /// (`getBoundingClientRect().top`).
    fn element_top(&self, id: &str) -> Option<f64>;

    /// Top edge of the element relative to the document.
    fn element_offset(&self, id: &str) -> Option<f64> {
        self.element_top(id).map(|top| top + self.scroll_y())
    }
}

#[derive(Clone)]
pub struct BrowserViewport {
    window: Window,
}

impl BrowserViewport {
    pub fn new() -> Option<Self> {
        web_sys::window().map(|window| Self { window })
    }

    pub fn window(&self) -> &Window {
        &self.window
    }

    pub fn element(&self, id: &str) -> Option<HtmlElement> {
        self.window
            .document()?
            .get_element_by_id(id)?
            .dyn_into::<HtmlElement>()
            .ok()
    }

    pub fn has_element(&self, id: &str) -> bool {
        self.element(id).is_some()
    }

    /// First element matching `selector` inside the element with `id`.
    pub fn child(&self, id: &str, selector: &str) -> Option<HtmlElement> {
        self.element(id)?
            .query_selector(selector)
            .ok()??
            .dyn_into::<HtmlElement>()
            .ok()
    }

    pub fn scroll_to(&self, offset: f64) {
        self.window.scroll_to_with_x_and_y(0.0, offset);
    }
}

impl Viewport for BrowserViewport {
    fn scroll_y(&self) -> f64 {
        self.window.scroll_y().unwrap_or(0.0)
    }

    fn viewport_height(&self) -> f64 {
        self.window
            .inner_height()
            .ok()
            .and_then(|h| h.as_f64())
            .unwrap_or(0.0)
    }

    fn element_top(&self, id: &str) -> Option<f64> {
        self.element(id).map(|el| el.get_bounding_client_rect().top())
    }
}

#[cfg(test)]
pub(crate) mod testing {
    use super::Viewport;
    use std::collections::HashMap;

    /// Fixed geometry: elements are stored by document offset.
    #[derive(Debug, Default, Clone)]
    pub struct SyntheticViewport {
        pub scroll_y: f64,
        pub height: f64,
        pub offsets: HashMap<String, f64>,
    }

    impl SyntheticViewport {
        pub fn new(height: f64) -> Self {
            Self {
                height,
                ..Default::default()
            }
        }

        pub fn with_element(mut self, id: &str, offset: f64) -> Self {
            self.offsets.insert(id.to_string(), offset);
            self
        }

        pub fn scrolled_to(mut self, y: f64) -> Self {
            self.scroll_y = y;
            self
        }
    }

    impl Viewport for SyntheticViewport {
        fn scroll_y(&self) -> f64 {
            self.scroll_y
        }

        fn viewport_height(&self) -> f64 {
            self.height
        }

        fn element_top(&self, id: &str) -> Option<f64> {
            self.offsets.get(id).map(|offset| offset - self.scroll_y)
        }
    }

    #[test]
    fn offset_is_scroll_independent() {
        let vp = SyntheticViewport::new(800.0)
            .with_element("a", 1200.0)
            .scrolled_to(300.0);
        assert_eq!(vp.element_top("a"), Some(900.0));
        assert_eq!(vp.element_offset("a"), Some(1200.0));
        assert_eq!(vp.element_top("missing"), None);
    }
}
