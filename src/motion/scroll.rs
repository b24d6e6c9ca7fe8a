use std::cell::Cell;
use std::rc::Rc;

use log::debug;

use crate::config::NAV_PADDING_PX;
use crate::motion::easing::Easing;

/// Reads and writes the document's vertical scroll position.
pub trait ScrollHost {
    fn scroll_y(&self) -> f64;
    /// Top edge of the anchor's element relative to the viewport, if it exists.
    fn anchor_top(&self, anchor: &str) -> Option<f64>;
    /// Height of the fixed navigation header.
    fn nav_height(&self) -> f64;
    fn scroll_to(&self, y: f64);
}

/// The host's display-refresh clock.
pub trait FrameScheduler {
    /// Milliseconds on the same monotonic clock the frame timestamps use.
    fn now(&self) -> f64;
    fn request_frame(&self, callback: Box<dyn FnOnce(f64)>);
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct ScrollConfig {
    pub duration_ms: f64,
    pub easing: Easing,
}

impl Default for ScrollConfig {
    fn default() -> Self {
        Self {
            duration_ms: 900.0,
            easing: Easing::Linear,
        }
    }
}

/// A single animation from `start_y` to `target_y`.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct ScrollPlan {
    pub start_y: f64,
    pub target_y: f64,
    pub started_at: f64,
    pub duration_ms: f64,
    pub easing: Easing,
}

impl ScrollPlan {
    /// Measures where `anchor` sits below the nav header. `None` when the anchor is missing.
    pub fn measure<H: ScrollHost + ?Sized>(
        host: &H,
        anchor: &str,
        started_at: f64,
        config: ScrollConfig,
    ) -> Option<Self> {
        let top = host.anchor_top(anchor)?;
        let start_y = host.scroll_y();
        Some(Self {
            start_y,
            target_y: start_y + top - host.nav_height() - NAV_PADDING_PX,
            started_at,
            duration_ms: config.duration_ms,
            easing: config.easing,
        })
    }

    pub fn progress(&self, now: f64) -> f64 {
        if self.duration_ms <= 0.0 {
            return 1.0;
        }
        ((now - self.started_at) / self.duration_ms).clamp(0.0, 1.0)
    }

    pub fn position(&self, t: f64) -> f64 {
        self.start_y + (self.target_y - self.start_y) * self.easing.apply(t)
    }
}

/// Animates the scroll position toward named anchors.
///
/// Starting a new animation cancels the one in flight: every frame callback
/// carries the generation it was started under and stops once a newer one
/// exists.
pub struct AnchorScroller<H, F> {
    host: Rc<H>,
    frames: Rc<F>,
    config: ScrollConfig,
    generation: Rc<Cell<u64>>,
}

impl<H, F> AnchorScroller<H, F>
where
    H: ScrollHost + 'static,
    F: FrameScheduler + 'static,
{
    pub fn new(host: H, frames: F, config: ScrollConfig) -> Self {
        Self {
            host: Rc::new(host),
            frames: Rc::new(frames),
            config,
            generation: Rc::new(Cell::new(0)),
        }
    }

    #[cfg(test)]
    pub fn host(&self) -> &H {
        &self.host
    }

    #[cfg(test)]
    pub fn frames(&self) -> &F {
        &self.frames
    }

    /// Starts scrolling toward `anchor`, over `duration_ms` or the configured duration.
    /// Returns `false` without touching the scroll position if the anchor is missing.
    pub fn scroll_to(&self, anchor: &str, duration_ms: Option<f64>) -> bool {
        let config = ScrollConfig {
            duration_ms: duration_ms.unwrap_or(self.config.duration_ms),
            ..self.config
        };
        let Some(plan) = ScrollPlan::measure(&*self.host, anchor, self.frames.now(), config) else {
            debug!("no element with id '{}', nothing to scroll to", anchor);
            return false;
        };
        let ticket = self.generation.get().wrapping_add(1);
        self.generation.set(ticket);
        debug!(
            "scrolling to '{}': {:.0} -> {:.0} over {}ms",
            anchor, plan.start_y, plan.target_y, plan.duration_ms
        );
        schedule_step(
            self.host.clone(),
            self.frames.clone(),
            self.generation.clone(),
            ticket,
            plan,
        );
        true
    }

    /// Stops the animation in flight, if any.
    pub fn cancel(&self) {
        self.generation.set(self.generation.get().wrapping_add(1));
    }
}

fn schedule_step<H, F>(
    host: Rc<H>,
    frames: Rc<F>,
    generation: Rc<Cell<u64>>,
    ticket: u64,
    plan: ScrollPlan,
) where
    H: ScrollHost + 'static,
    F: FrameScheduler + 'static,
{
    let next_frames = frames.clone();
    frames.request_frame(Box::new(move |now| {
        if generation.get() != ticket {
            return;
        }
        let t = plan.progress(now);
        host.scroll_to(plan.position(t));
        if t < 1.0 {
            schedule_step(host, next_frames, generation, ticket, plan);
        }
    }));
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::motion::testing::{FakePage, ManualFrames};

    const NAV: f64 = 64.0;

    fn scroller(config: ScrollConfig) -> AnchorScroller<FakePage, ManualFrames> {
        let page = FakePage::new(NAV)
            .with_anchor("home", 0.0)
            .with_anchor("about", 900.0)
            .with_anchor("services", 1800.0)
            .with_anchor("contact", 4200.0);
        AnchorScroller::new(page, ManualFrames::default(), config)
    }

    fn expected_target(document_top: f64) -> f64 {
        document_top - NAV - NAV_PADDING_PX
    }

    #[test]
    fn lands_on_anchor_below_nav_after_duration() {
        let scroller = scroller(ScrollConfig::default());
        assert!(scroller.scroll_to("services", None));

        scroller.frames().run_for(900.0, 16.0);

        let final_y = scroller.host().current_y();
        assert!((final_y - expected_target(1800.0)).abs() <= 1.0, "ended at {}", final_y);
        assert_eq!(scroller.frames().pending(), 0);
    }

    #[test]
    fn accounts_for_current_scroll_offset() {
        let scroller = scroller(ScrollConfig {
            duration_ms: 1200.0,
            easing: Easing::CubicInOut,
        });
        scroller.host().set_y(2500.0);

        assert!(scroller.scroll_to("about", None));
        scroller.frames().run_for(1300.0, 16.0);

        assert!((scroller.host().current_y() - expected_target(900.0)).abs() <= 1.0);
    }

    #[test]
    fn missing_anchor_is_a_silent_no_op() {
        let scroller = scroller(ScrollConfig::default());
        scroller.host().set_y(321.0);

        assert!(!scroller.scroll_to("careers", None));

        assert_eq!(scroller.frames().pending(), 0);
        assert!(scroller.host().writes().is_empty());
        assert_eq!(scroller.host().current_y(), 321.0);
    }

    #[test]
    fn linear_profile_moves_at_constant_speed() {
        let scroller = scroller(ScrollConfig::default());
        assert!(scroller.scroll_to("about", None));

        scroller.frames().advance(450.0);

        let halfway = expected_target(900.0) / 2.0;
        assert!((scroller.host().current_y() - halfway).abs() <= 1.0);
    }

    #[test]
    fn positions_never_overshoot_the_target() {
        let scroller = scroller(ScrollConfig {
            duration_ms: 1200.0,
            easing: Easing::CubicInOut,
        });
        assert!(scroller.scroll_to("contact", None));
        scroller.frames().run_for(1500.0, 16.0);

        let target = expected_target(4200.0);
        let writes = scroller.host().writes();
        assert!(writes.windows(2).all(|pair| pair[1] >= pair[0]));
        assert!(writes.iter().all(|y| *y <= target + 1e-9));
    }

    #[test]
    fn zero_duration_jumps_on_first_frame() {
        let scroller = scroller(ScrollConfig::default());
        assert!(scroller.scroll_to("about", Some(0.0)));

        scroller.frames().advance(16.0);

        assert_eq!(scroller.host().writes(), vec![expected_target(900.0)]);
        assert_eq!(scroller.frames().pending(), 0);
    }

    #[test]
    fn second_invocation_cancels_the_first() {
        let scroller = scroller(ScrollConfig::default());
        assert!(scroller.scroll_to("contact", None));
        scroller.frames().run_for(300.0, 16.0);
        let interrupted_at = scroller.host().current_y();
        assert!(interrupted_at > 0.0 && interrupted_at < expected_target(4200.0));

        assert!(scroller.scroll_to("about", None));
        let writes_before = scroller.host().writes().len();
        scroller.frames().run_for(1000.0, 16.0);

        let about = expected_target(900.0);
        assert!((scroller.host().current_y() - about).abs() <= 1.0);
        // Only the newer animation writes after the handover.
        let after = &scroller.host().writes()[writes_before..];
        assert!(after
            .iter()
            .all(|y| (*y - interrupted_at) * (about - interrupted_at) >= -1e-9));
        assert_eq!(scroller.frames().pending(), 0);
    }

    #[test]
    fn cancel_stops_pending_frames_from_writing() {
        let scroller = scroller(ScrollConfig::default());
        assert!(scroller.scroll_to("services", None));
        scroller.frames().advance(100.0);
        let written = scroller.host().writes().len();

        scroller.cancel();
        scroller.frames().run_for(1000.0, 16.0);

        assert_eq!(scroller.host().writes().len(), written);
    }
}
