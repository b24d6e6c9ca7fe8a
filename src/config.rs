use log::Level;

use crate::motion::easing::Easing;
use crate::motion::scroll::ScrollConfig;

/// Breathing room left between the nav header and a scrolled-to section.
pub const NAV_PADDING_PX: f64 = 8.0;

/// Class marking sections that fade in on first view.
pub const REVEAL_CLASS: &str = "reveal";
pub const REVEAL_VISIBLE_CLASS: &str = "reveal-visible";

/// Scroll offset after which the nav gets its shadow.
pub const NAV_SCROLLED_AFTER_PX: f64 = 10.0;

#[cfg(debug_assertions)]
pub fn log_level() -> Level {
    Level::Debug
}

#[cfg(not(debug_assertions))]
pub fn log_level() -> Level {
    Level::Info
}

/// Every timing knob of the page's animations.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct MotionSettings {
    pub scroll: ScrollConfig,
    /// Fraction of a section that must be visible before it is revealed.
    pub reveal_threshold: f64,
    /// Delay between consecutive grid items fading in.
    pub stagger_ms: u32,
    pub hero_delay_ms: u32,
    pub progress_bar: bool,
}

impl MotionSettings {
    pub fn plain() -> Self {
        Self {
            scroll: ScrollConfig {
                duration_ms: 900.0,
                easing: Easing::Linear,
            },
            reveal_threshold: 0.1,
            stagger_ms: 0,
            hero_delay_ms: 0,
            progress_bar: false,
        }
    }

    pub fn elaborate() -> Self {
        Self {
            scroll: ScrollConfig {
                duration_ms: 1200.0,
                easing: Easing::CubicInOut,
            },
            reveal_threshold: 0.1,
            stagger_ms: 90,
            hero_delay_ms: 150,
            progress_bar: true,
        }
    }

    /// Inline style delaying the `index`-th item of a staggered group.
    pub fn stagger_style(&self, index: usize) -> String {
        format!("transition-delay: {}ms;", self.stagger_ms as usize * index)
    }
}

pub fn motion() -> MotionSettings {
    if cfg!(feature = "elaborate-motion") {
        MotionSettings::elaborate()
    } else {
        MotionSettings::plain()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn both_profiles_scroll_within_the_default_window() {
        for settings in [MotionSettings::plain(), MotionSettings::elaborate()] {
            assert!((900.0..=1200.0).contains(&settings.scroll.duration_ms));
            assert_eq!(settings.reveal_threshold, 0.1);
        }
    }

    #[test]
    fn plain_profile_has_no_extra_timing() {
        let plain = MotionSettings::plain();
        assert_eq!(plain.scroll.easing, Easing::Linear);
        assert_eq!(plain.stagger_style(3), "transition-delay: 0ms;");
        assert!(!plain.progress_bar);
    }

    #[test]
    fn elaborate_profile_staggers_items() {
        let elaborate = MotionSettings::elaborate();
        assert_eq!(elaborate.scroll.easing, Easing::CubicInOut);
        assert_eq!(elaborate.stagger_style(0), "transition-delay: 0ms;");
        assert_eq!(elaborate.stagger_style(4), "transition-delay: 360ms;");
    }
}
