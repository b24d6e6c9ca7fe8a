use log::debug;

/// Extra report point past the threshold, so a crossing the host measures a
/// hair under the threshold is followed by another report.
const FOLLOW_UP_STEP: f64 = 0.05;

/// Visibility ratios at which a host should report intersection changes.
pub fn report_points(threshold: f64) -> Vec<f64> {
    let follow_up = (threshold + FOLLOW_UP_STEP).min(1.0);
    if follow_up > threshold {
        vec![threshold, follow_up]
    } else {
        vec![threshold]
    }
}

/// Capability for "tell me once when this target becomes visible".
pub trait VisibilityWatcher {
    type Target;

    /// Calls `on_visible` the first time at least `threshold` of `target` is
    /// in the viewport, then stops watching that target.
    fn watch(&mut self, target: Self::Target, threshold: f64, on_visible: Box<dyn FnOnce()>);

    /// Releases every registration still pending.
    fn unwatch_all(&mut self);
}

/// Targets waiting for their first qualifying intersection.
pub struct RevealRegistry<K> {
    threshold: f64,
    pending: Vec<(K, Box<dyn FnOnce()>)>,
}

impl<K: PartialEq> RevealRegistry<K> {
    pub fn new(threshold: f64) -> Self {
        Self {
            threshold,
            pending: Vec::new(),
        }
    }

    pub fn register(&mut self, target: K, on_visible: Box<dyn FnOnce()>) {
        if self.is_watching(&target) {
            return;
        }
        self.pending.push((target, on_visible));
    }

    /// Handles an intersection change. Returns the target's callback when this
    /// change reveals it; the target is no longer watched afterwards.
    pub fn crossing(
        &mut self,
        target: &K,
        ratio: f64,
        is_intersecting: bool,
    ) -> Option<Box<dyn FnOnce()>> {
        if !is_intersecting || ratio < self.threshold {
            return None;
        }
        let index = self.pending.iter().position(|(key, _)| key == target)?;
        let (_, on_visible) = self.pending.swap_remove(index);
        Some(on_visible)
    }

    pub fn is_watching(&self, target: &K) -> bool {
        self.pending.iter().any(|(key, _)| key == target)
    }

    pub fn clear(&mut self) {
        self.pending.clear();
    }
}

/// Registers every target with `watcher`; `mark` runs once per revealed target.
/// Returns how many targets were registered. An empty target list registers nothing.
pub fn observe_reveals<W, M>(watcher: &mut W, targets: Vec<W::Target>, threshold: f64, mark: M) -> usize
where
    W: VisibilityWatcher,
    W::Target: Clone + 'static,
    M: Fn(&W::Target) + Clone + 'static,
{
    if targets.is_empty() {
        debug!("no reveal targets on the page");
        return 0;
    }
    let count = targets.len();
    for target in targets {
        let mark = mark.clone();
        let marked = target.clone();
        watcher.watch(target, threshold, Box::new(move || mark(&marked)));
    }
    debug!("watching {} reveal targets at threshold {}", count, threshold);
    count
}

#[cfg(test)]
mod tests {
    use std::cell::RefCell;
    use std::collections::HashMap;
    use std::rc::Rc;

    use super::*;
    use crate::motion::testing::ScriptedWatcher;

    type Marks = Rc<RefCell<HashMap<&'static str, u32>>>;

    fn watch_sections(watcher: &mut ScriptedWatcher, sections: &[&'static str]) -> (usize, Marks) {
        let marks: Marks = Rc::default();
        let recorder = marks.clone();
        let registered = observe_reveals(watcher, sections.to_vec(), 0.1, move |section| {
            *recorder.borrow_mut().entry(*section).or_insert(0) += 1;
        });
        (registered, marks)
    }

    #[test]
    fn below_threshold_does_not_reveal() {
        let mut watcher = ScriptedWatcher::default();
        let (_, marks) = watch_sections(&mut watcher, &["about"]);

        watcher.report("about", 0.05);

        assert!(marks.borrow().is_empty());
        assert!(watcher.is_watching("about"));
    }

    #[test]
    fn crossing_threshold_reveals_and_unwatches() {
        let mut watcher = ScriptedWatcher::default();
        let (_, marks) = watch_sections(&mut watcher, &["about", "services"]);

        watcher.report("about", 0.05);
        watcher.report("about", 0.15);

        assert_eq!(marks.borrow().get("about"), Some(&1));
        assert!(!watcher.is_watching("about"));
        assert!(watcher.is_watching("services"));
    }

    #[test]
    fn each_target_is_revealed_at_most_once() {
        let mut watcher = ScriptedWatcher::default();
        let (_, marks) = watch_sections(&mut watcher, &["home", "industries"]);

        for ratio in [0.2, 0.0, 0.6, 1.0, 0.3] {
            watcher.report("home", ratio);
            watcher.report("industries", ratio);
        }

        assert_eq!(marks.borrow().get("home"), Some(&1));
        assert_eq!(marks.borrow().get("industries"), Some(&1));
    }

    #[test]
    fn empty_page_registers_nothing() {
        let mut watcher = ScriptedWatcher::default();
        let (registered, marks) = watch_sections(&mut watcher, &[]);

        assert_eq!(registered, 0);
        assert_eq!(watcher.registrations(), 0);
        watcher.unwatch_all();
        assert!(watcher.released());
        assert!(marks.borrow().is_empty());
    }

    #[test]
    fn teardown_drops_pending_targets() {
        let mut watcher = ScriptedWatcher::default();
        let (registered, marks) = watch_sections(&mut watcher, &["about", "contact"]);
        assert_eq!(registered, 2);

        watcher.unwatch_all();
        watcher.report("contact", 0.9);

        assert!(!watcher.is_watching("about"));
        assert!(marks.borrow().is_empty());
    }

    #[test]
    fn registry_ignores_non_intersecting_entries() {
        let mut registry = RevealRegistry::new(0.1);
        registry.register(7u32, Box::new(|| {}));

        assert!(registry.crossing(&7, 0.5, false).is_none());
        assert!(registry.crossing(&8, 0.5, true).is_none());
        assert!(registry.crossing(&7, 0.5, true).is_some());
        assert!(!registry.is_watching(&7));
    }

    #[test]
    fn ratio_just_under_threshold_waits_for_a_later_report() {
        let mut watcher = ScriptedWatcher::default();
        let (_, marks) = watch_sections(&mut watcher, &["about"]);

        watcher.report("about", 0.0991);
        watcher.report("about", 0.0999999);
        assert!(marks.borrow().is_empty());
        assert!(watcher.is_watching("about"));

        watcher.report("about", 0.15);
        assert_eq!(marks.borrow().get("about"), Some(&1));
    }

    #[test]
    fn hosts_report_again_after_the_threshold() {
        assert_eq!(report_points(0.1), vec![0.1, 0.1 + FOLLOW_UP_STEP]);
        assert_eq!(report_points(0.98), vec![0.98, 1.0]);
        assert_eq!(report_points(1.0), vec![1.0]);
    }

    #[test]
    fn duplicate_registration_keeps_the_first() {
        let fired = Rc::new(RefCell::new(Vec::new()));
        let mut registry = RevealRegistry::new(0.1);
        for label in ["first", "second"] {
            let fired = fired.clone();
            registry.register("hero", Box::new(move || fired.borrow_mut().push(label)));
        }
        if let Some(on_visible) = registry.crossing(&"hero", 0.4, true) {
            on_visible();
        }

        assert_eq!(*fired.borrow(), vec!["first"]);
        assert!(registry.crossing(&"hero", 0.9, true).is_none());
    }
}
