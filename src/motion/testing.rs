//! In-memory stand-ins for the browser capabilities, used by unit tests.

use std::cell::{Cell, RefCell};
use std::collections::HashMap;

use crate::motion::reveal::{RevealRegistry, VisibilityWatcher};
use crate::motion::scroll::{FrameScheduler, ScrollHost};

/// A document with absolutely positioned anchors and a recorded scroll position.
pub struct FakePage {
    y: Cell<f64>,
    nav_height: f64,
    anchors: HashMap<String, f64>,
    writes: RefCell<Vec<f64>>,
}

impl FakePage {
    pub fn new(nav_height: f64) -> Self {
        Self {
            y: Cell::new(0.0),
            nav_height,
            anchors: HashMap::new(),
            writes: RefCell::new(Vec::new()),
        }
    }

    pub fn with_anchor(mut self, id: &str, document_top: f64) -> Self {
        self.anchors.insert(id.to_string(), document_top);
        self
    }

    pub fn set_y(&self, y: f64) {
        self.y.set(y);
    }

    pub fn current_y(&self) -> f64 {
        self.y.get()
    }

    pub fn writes(&self) -> Vec<f64> {
        self.writes.borrow().clone()
    }
}

impl ScrollHost for FakePage {
    fn scroll_y(&self) -> f64 {
        self.y.get()
    }

    fn anchor_top(&self, anchor: &str) -> Option<f64> {
        self.anchors.get(anchor).map(|top| top - self.y.get())
    }

    fn nav_height(&self) -> f64 {
        self.nav_height
    }

    fn scroll_to(&self, y: f64) {
        self.y.set(y);
        self.writes.borrow_mut().push(y);
    }
}

/// Frame clock that only ticks when the test advances it.
#[derive(Default)]
pub struct ManualFrames {
    now: Cell<f64>,
    queue: RefCell<Vec<Box<dyn FnOnce(f64)>>>,
}

impl ManualFrames {
    pub fn pending(&self) -> usize {
        self.queue.borrow().len()
    }

    /// Moves the clock forward and delivers one frame to every waiting callback.
    pub fn advance(&self, ms: f64) {
        self.now.set(self.now.get() + ms);
        let due = std::mem::take(&mut *self.queue.borrow_mut());
        for callback in due {
            callback(self.now.get());
        }
    }

    pub fn run_for(&self, total_ms: f64, frame_ms: f64) {
        let mut elapsed = 0.0;
        while elapsed < total_ms {
            let step = frame_ms.min(total_ms - elapsed);
            self.advance(step);
            elapsed += step;
        }
    }
}

impl FrameScheduler for ManualFrames {
    fn now(&self) -> f64 {
        self.now.get()
    }

    fn request_frame(&self, callback: Box<dyn FnOnce(f64)>) {
        self.queue.borrow_mut().push(callback);
    }
}

/// Watcher over named sections whose intersection ratios the test drives by hand.
#[derive(Default)]
pub struct ScriptedWatcher {
    registry: Option<RevealRegistry<&'static str>>,
    registrations: usize,
    released: bool,
}

impl ScriptedWatcher {
    pub fn registrations(&self) -> usize {
        self.registrations
    }

    pub fn released(&self) -> bool {
        self.released
    }

    pub fn is_watching(&self, section: &'static str) -> bool {
        self.registry
            .as_ref()
            .map_or(false, |registry| registry.is_watching(&section))
    }

    /// Reports that `section` is now `ratio` visible.
    pub fn report(&mut self, section: &'static str, ratio: f64) {
        let fired = self
            .registry
            .as_mut()
            .and_then(|registry| registry.crossing(&section, ratio, ratio > 0.0));
        if let Some(on_visible) = fired {
            on_visible();
        }
    }
}

impl VisibilityWatcher for ScriptedWatcher {
    type Target = &'static str;

    fn watch(&mut self, target: Self::Target, threshold: f64, on_visible: Box<dyn FnOnce()>) {
        self.registrations += 1;
        self.registry
            .get_or_insert_with(|| RevealRegistry::new(threshold))
            .register(target, on_visible);
    }

    fn unwatch_all(&mut self) {
        if let Some(registry) = self.registry.as_mut() {
            registry.clear();
        }
        self.released = true;
    }
}
