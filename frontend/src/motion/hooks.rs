//! Yew hooks that bind the scroll effects to the live page.

use std::cell::{Cell, RefCell};
use std::rc::{Rc, Weak};

use gloo_timers::callback::Timeout;
use wasm_bindgen::prelude::Closure;
use wasm_bindgen::{JsCast, JsValue};
use web_sys::js_sys;
use web_sys::{Element, IntersectionObserver, IntersectionObserverEntry, IntersectionObserverInit, Window};
use yew::prelude::*;

use super::progress::{ProgressConfig, ScrollProgressMapper};
use super::scheduler::{FrameGate, Throttle};
use super::snapper::{AutoScrollSnapper, SnapConfig};
use super::viewport::{BrowserViewport, Viewport};
use crate::config;

type FrameCallback = Rc<RefCell<Option<Closure<dyn FnMut()>>>>;
type TimerSlot = Rc<RefCell<Option<Timeout>>>;

/// A callback registered on the window for a fixed set of events, plus the
/// animation frame and throttle timer it may have queued.
struct WindowBinding {
    window: Window,
    events: &'static [&'static str],
    callback: Closure<dyn Fn()>,
    frame: FrameCallback,
    frame_id: Rc<Cell<Option<i32>>>,
    timer: Option<TimerSlot>,
}

impl WindowBinding {
    fn attach(
        window: Window,
        events: &'static [&'static str],
        callback: Closure<dyn Fn()>,
        frame: FrameCallback,
        frame_id: Rc<Cell<Option<i32>>>,
    ) -> Self {
        for event in events {
            if let Err(e) =
                window.add_event_listener_with_callback(event, callback.as_ref().unchecked_ref())
            {
                log::warn!("failed to listen for {}: {:?}", event, e);
            }
        }
        Self {
            window,
            events,
            callback,
            frame,
            frame_id,
            timer: None,
        }
    }

    fn with_timer(mut self, timer: TimerSlot) -> Self {
        self.timer = Some(timer);
        self
    }

    fn detach(self) {
        for event in self.events {
            let _ = self
                .window
                .remove_event_listener_with_callback(event, self.callback.as_ref().unchecked_ref());
        }
        if let Some(id) = self.frame_id.take() {
            let _ = self.window.cancel_animation_frame(id);
        }
        self.frame.borrow_mut().take();
        // Dropping a pending `Timeout` cancels it.
        if let Some(timer) = self.timer {
            timer.borrow_mut().take();
        }
    }
}

fn request_frame(window: &Window, frame: &FrameCallback, frame_id: &Cell<Option<i32>>) -> bool {
    let Some(callback) = frame.borrow().as_ref().map(|cb| cb.as_ref().clone()) else {
        return false;
    };
    match window.request_animation_frame(callback.unchecked_ref()) {
        Ok(id) => {
            frame_id.set(Some(id));
            true
        }
        Err(e) => {
            log::warn!("requestAnimationFrame failed: {:?}", e);
            false
        }
    }
}

fn into_destructor(binding: Option<WindowBinding>) -> impl FnOnce() {
    move || {
        if let Some(binding) = binding {
            binding.detach();
        }
    }
}

/// Drives the pinned element matching `target_selector` inside
/// `container_id` from scroll progress. No-op when either is missing.
#[hook]
pub fn use_scroll_progress(
    container_id: &'static str,
    target_selector: &'static str,
    progress: ProgressConfig,
) {
    use_effect_with_deps(
        move |_| into_destructor(bind_scroll_progress(container_id, target_selector, progress)),
        (container_id, target_selector),
    );
}

fn bind_scroll_progress(
    container_id: &'static str,
    target_selector: &'static str,
    progress: ProgressConfig,
) -> Option<WindowBinding> {
    let viewport = BrowserViewport::new()?;
    let Some(target) = viewport.child(container_id, target_selector) else {
        log::debug!("no {} inside #{}, scroll progress disabled", target_selector, container_id);
        return None;
    };
    let mapper = ScrollProgressMapper::new(progress);

    let render: Rc<dyn Fn()> = {
        let viewport = viewport.clone();
        Rc::new(move || {
            if let Some(state) = mapper.sample(&viewport, container_id) {
                state.apply(&target);
            }
        })
    };

    let gate = Rc::new(RefCell::new(FrameGate::new()));
    let frame_id = Rc::new(Cell::new(None));
    let frame: FrameCallback = Rc::new(RefCell::new(Some(Closure::new({
        let gate = gate.clone();
        let render = render.clone();
        let frame_id = frame_id.clone();
        move || {
            frame_id.set(None);
            gate.borrow_mut().complete();
            render();
        }
    }))));

    let on_scroll = Closure::<dyn Fn()>::new({
        let window = viewport.window().clone();
        let frame = Rc::downgrade(&frame);
        let frame_id = frame_id.clone();
        move || {
            let should_schedule = gate.borrow_mut().request();
            if !should_schedule {
                return;
            }
            let scheduled = frame
                .upgrade()
                .map(|frame| request_frame(&window, &frame, &frame_id))
                .unwrap_or(false);
            if !scheduled {
                gate.borrow_mut().complete();
            }
        }
    });

    // Reflect the restored scroll position before the first scroll event.
    render();

    Some(WindowBinding::attach(
        viewport.window().clone(),
        &["scroll", "resize"],
        on_scroll,
        frame,
        frame_id,
    ))
}

/// Auto-advances through the dead zones of the given showcase sections.
#[hook]
pub fn use_auto_scroll_snap(section_ids: &'static [&'static str], span_vh: f64, snap: SnapConfig) {
    use_effect_with_deps(
        move |_| into_destructor(bind_auto_scroll(section_ids, span_vh, snap)),
        section_ids,
    );
}

fn bind_auto_scroll(
    section_ids: &'static [&'static str],
    span_vh: f64,
    snap: SnapConfig,
) -> Option<WindowBinding> {
    let viewport = BrowserViewport::new()?;
    if !section_ids.iter().any(|id| viewport.has_element(id)) {
        log::debug!("no showcase sections on page, auto-scroll disabled");
        return None;
    }

    let snapper = Rc::new(RefCell::new(AutoScrollSnapper::new(snap, viewport.scroll_y())));
    let frame_id = Rc::new(Cell::new(None));
    let frame: FrameCallback = Rc::new(RefCell::new(None));

    let step = Closure::<dyn FnMut()>::new({
        let snapper = snapper.clone();
        let viewport = viewport.clone();
        let handle: Weak<RefCell<Option<Closure<dyn FnMut()>>>> = Rc::downgrade(&frame);
        let frame_id = frame_id.clone();
        move || {
            frame_id.set(None);
            let Some(step) = snapper.borrow_mut().tick(js_sys::Date::now()) else {
                return;
            };
            viewport.scroll_to(step.offset);
            if step.done {
                return;
            }
            if let Some(frame) = handle.upgrade() {
                if !request_frame(viewport.window(), &frame, &frame_id) {
                    // Without frames the tween can never finish; jump to the end.
                    if let Some(last) = snapper.borrow_mut().tick(f64::INFINITY) {
                        viewport.scroll_to(last.offset);
                    }
                }
            }
        }
    });
    *frame.borrow_mut() = Some(step);

    // Runs when the throttle timer fires, against the offset current then.
    let evaluate: Rc<dyn Fn()> = Rc::new({
        let snapper = snapper.clone();
        let viewport = viewport.clone();
        let handle = Rc::downgrade(&frame);
        let frame_id = frame_id.clone();
        move || {
            let offset = viewport.scroll_y();
            let span = span_vh * viewport.viewport_height();
            let starts: Vec<f64> = section_ids
                .iter()
                .filter_map(|id| viewport.element_offset(id))
                .collect();
            let started = snapper
                .borrow_mut()
                .observe(offset, &starts, span, js_sys::Date::now());
            if started.is_none() {
                return;
            }
            if let Some(frame) = handle.upgrade() {
                if !request_frame(viewport.window(), &frame, &frame_id) {
                    if let Some(last) = snapper.borrow_mut().tick(f64::INFINITY) {
                        viewport.scroll_to(last.offset);
                    }
                }
            }
        }
    });

    let throttle = Rc::new(RefCell::new(Throttle::new(snap.throttle_ms)));
    let timer: TimerSlot = Rc::new(RefCell::new(None));

    let on_scroll = Closure::<dyn Fn()>::new({
        let timer = timer.clone();
        move || {
            if snapper.borrow().is_animating() {
                return;
            }
            let should_arm = throttle.borrow_mut().try_arm();
            if !should_arm {
                return;
            }
            let interval = throttle.borrow().interval_ms();
            let throttle = throttle.clone();
            let evaluate = evaluate.clone();
            // Replaces the previous, already fired, timeout.
            *timer.borrow_mut() = Some(Timeout::new(interval, move || {
                throttle.borrow_mut().fire();
                evaluate();
            }));
        }
    });

    Some(
        WindowBinding::attach(
            viewport.window().clone(),
            &["scroll"],
            on_scroll,
            frame,
            frame_id,
        )
        .with_timer(timer),
    )
}

/// Adds [`config::VISIBLE_CLASS`] to every `.fade-up` element once it
/// scrolls into view.
#[hook]
pub fn use_fade_up() {
    use_effect_with_deps(
        move |_| {
            let observer = observe_fade_up();
            move || {
                if let Some((observer, _callback)) = observer {
                    observer.disconnect();
                }
            }
        },
        (),
    );
}

type IntersectionCallback = Closure<dyn FnMut(js_sys::Array, IntersectionObserver)>;

fn observe_fade_up() -> Option<(IntersectionObserver, IntersectionCallback)> {
    let document = web_sys::window()?.document()?;
    let callback = IntersectionCallback::new(|entries: js_sys::Array, _: IntersectionObserver| {
        for entry in entries.iter() {
            let Ok(entry) = entry.dyn_into::<IntersectionObserverEntry>() else {
                continue;
            };
            if entry.is_intersecting() {
                let _ = entry.target().class_list().add_1(config::VISIBLE_CLASS);
            }
        }
    });

    let init = IntersectionObserverInit::new();
    init.set_threshold(&JsValue::from_f64(config::FADE_UP_THRESHOLD));
    init.set_root_margin("0px");
    let observer = match IntersectionObserver::new_with_options(callback.as_ref().unchecked_ref(), &init) {
        Ok(observer) => observer,
        Err(e) => {
            log::warn!("IntersectionObserver unavailable: {:?}", e);
            return None;
        }
    };

    let nodes = document.query_selector_all(config::FADE_UP_SELECTOR).ok()?;
    for i in 0..nodes.length() {
        if let Some(element) = nodes.item(i).and_then(|node| node.dyn_into::<Element>().ok()) {
            observer.observe(&element);
        }
    }
    Some((observer, callback))
}
