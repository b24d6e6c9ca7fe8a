use std::cell::RefCell;
use std::rc::Rc;

use log::warn;
use wasm_bindgen::prelude::*;
use wasm_bindgen::JsCast;
use web_sys::js_sys::Array;
use web_sys::{
    Document, Element, HtmlElement, IntersectionObserver, IntersectionObserverEntry,
    IntersectionObserverInit, Window,
};

use crate::error::HostError;
use crate::motion::reveal::{report_points, RevealRegistry, VisibilityWatcher};
use crate::motion::scroll::{FrameScheduler, ScrollHost};

pub fn window() -> Result<Window, HostError> {
    web_sys::window().ok_or(HostError::NoWindow)
}

pub fn document() -> Result<Document, HostError> {
    window()?.document().ok_or(HostError::NoDocument)
}

/// Scroll position of the browser window, measured against the live DOM.
pub struct WindowScroll {
    window: Window,
    document: Document,
}

impl WindowScroll {
    pub fn new() -> Result<Self, HostError> {
        let window = window()?;
        let document = window.document().ok_or(HostError::NoDocument)?;
        Ok(Self { window, document })
    }
}

impl ScrollHost for WindowScroll {
    fn scroll_y(&self) -> f64 {
        self.window.scroll_y().unwrap_or(0.0)
    }

    fn anchor_top(&self, anchor: &str) -> Option<f64> {
        self.document
            .get_element_by_id(anchor)
            .map(|element| element.get_bounding_client_rect().top())
    }

    fn nav_height(&self) -> f64 {
        self.document
            .query_selector("nav")
            .ok()
            .flatten()
            .and_then(|nav| nav.dyn_into::<HtmlElement>().ok())
            .map(|nav| nav.offset_height() as f64)
            .unwrap_or(0.0)
    }

    fn scroll_to(&self, y: f64) {
        self.window.scroll_to_with_x_and_y(0.0, y);
    }
}

/// `requestAnimationFrame` timed against `performance.now()`.
pub struct AnimationFrames {
    window: Window,
}

impl AnimationFrames {
    pub fn new() -> Result<Self, HostError> {
        Ok(Self { window: window()? })
    }
}

impl FrameScheduler for AnimationFrames {
    fn now(&self) -> f64 {
        self.window
            .performance()
            .map(|performance| performance.now())
            .unwrap_or(0.0)
    }

    fn request_frame(&self, callback: Box<dyn FnOnce(f64)>) {
        let frame = Closure::once_into_js(move |timestamp: f64| callback(timestamp));
        if let Err(err) = self.window.request_animation_frame(frame.unchecked_ref()) {
            warn!("requestAnimationFrame failed: {}", HostError::from(err));
        }
    }
}

type EntryCallback = Closure<dyn FnMut(Array, IntersectionObserver)>;

/// One observer and the targets it still waits on.
struct WatchGroup {
    threshold: f64,
    observer: IntersectionObserver,
    registry: Rc<RefCell<RevealRegistry<Element>>>,
    _callback: EntryCallback,
}

impl WatchGroup {
    fn new(threshold: f64) -> Result<Self, HostError> {
        let registry = Rc::new(RefCell::new(RevealRegistry::new(threshold)));
        let entries_registry = registry.clone();
        let callback = Closure::<dyn FnMut(Array, IntersectionObserver)>::new(
            move |entries: Array, observer: IntersectionObserver| {
                for entry in entries.iter() {
                    let Ok(entry) = entry.dyn_into::<IntersectionObserverEntry>() else {
                        continue;
                    };
                    let target = entry.target();
                    let revealed = entries_registry.borrow_mut().crossing(
                        &target,
                        entry.intersection_ratio(),
                        entry.is_intersecting(),
                    );
                    if let Some(on_visible) = revealed {
                        observer.unobserve(&target);
                        on_visible();
                    }
                }
            },
        );

        let options = IntersectionObserverInit::new();
        let points: Array = report_points(threshold)
            .into_iter()
            .map(JsValue::from_f64)
            .collect();
        options.set_threshold(&points);
        let observer =
            IntersectionObserver::new_with_options(callback.as_ref().unchecked_ref(), &options)?;

        Ok(Self {
            threshold,
            observer,
            registry,
            _callback: callback,
        })
    }
}

/// Visibility watching backed by one `IntersectionObserver` per threshold.
#[derive(Default)]
pub struct IntersectionWatcher {
    groups: Vec<WatchGroup>,
}

impl IntersectionWatcher {
    pub fn new() -> Self {
        Self::default()
    }

    fn group_for(&mut self, threshold: f64) -> Result<&WatchGroup, HostError> {
        let index = match self
            .groups
            .iter()
            .position(|group| group.threshold == threshold)
        {
            Some(index) => index,
            None => {
                self.groups.push(WatchGroup::new(threshold)?);
                self.groups.len() - 1
            }
        };
        Ok(&self.groups[index])
    }
}

impl VisibilityWatcher for IntersectionWatcher {
    type Target = Element;

    fn watch(&mut self, target: Element, threshold: f64, on_visible: Box<dyn FnOnce()>) {
        let group = match self.group_for(threshold) {
            Ok(group) => group,
            Err(err) => {
                warn!("cannot watch element visibility: {}", err);
                return;
            }
        };
        group.registry.borrow_mut().register(target.clone(), on_visible);
        group.observer.observe(&target);
    }

    fn unwatch_all(&mut self) {
        for group in self.groups.drain(..) {
            group.observer.disconnect();
            group.registry.borrow_mut().clear();
        }
    }
}

/// Elements currently carrying `class`, in document order.
pub fn elements_with_class(document: &Document, class: &str) -> Result<Vec<Element>, HostError> {
    let nodes = document.query_selector_all(&format!(".{}", class))?;
    Ok((0..nodes.length())
        .filter_map(|index| nodes.item(index))
        .filter_map(|node| node.dyn_into::<Element>().ok())
        .collect())
}
