use std::rc::Rc;

use gloo_timers::callback::Timeout;
use log::{debug, warn};
use web_sys::Element;
use yew::prelude::*;
use yew_hooks::prelude::*;

use crate::config::{REVEAL_CLASS, REVEAL_VISIBLE_CLASS};
use crate::motion::dom::{self, AnimationFrames, IntersectionWatcher, WindowScroll};
use crate::motion::reveal::{observe_reveals, VisibilityWatcher};
use crate::motion::scroll::{AnchorScroller, ScrollConfig};

pub type PageScroller = AnchorScroller<WindowScroll, AnimationFrames>;

/// Scroller bound to the browser window, cancelled when the component unmounts.
/// `None` when the page runs without a window.
#[hook]
pub fn use_anchor_scroller(config: ScrollConfig) -> Rc<Option<PageScroller>> {
    let scroller = use_memo(
        |config| match WindowScroll::new().and_then(|host| Ok((host, AnimationFrames::new()?))) {
            Ok((host, frames)) => Some(AnchorScroller::new(host, frames, *config)),
            Err(err) => {
                warn!("smooth scrolling disabled: {}", err);
                None
            }
        },
        config,
    );

    {
        let scroller = scroller.clone();
        use_unmount(move || {
            if let Some(scroller) = scroller.as_ref() {
                scroller.cancel();
            }
        });
    }

    scroller
}

/// Marks every `.reveal` element present at mount as visible once `threshold`
/// of it scrolls into view. Registrations are released on unmount.
#[hook]
pub fn use_reveal_on_scroll(threshold: f64) {
    use_effect_with_deps(
        move |threshold| {
            let mut watcher = IntersectionWatcher::new();
            match dom::document().and_then(|document| dom::elements_with_class(&document, REVEAL_CLASS)) {
                Ok(targets) => {
                    observe_reveals(&mut watcher, targets, *threshold, |element: &Element| {
                        if let Err(err) = element.class_list().add_1(REVEAL_VISIBLE_CLASS) {
                            warn!("could not reveal section: {:?}", err);
                        }
                    });
                }
                Err(err) => warn!("reveal animations disabled: {}", err),
            }
            move || {
                debug!("releasing reveal observers");
                watcher.unwatch_all();
            }
        },
        threshold,
    );
}

/// `false` until `delay_ms` after mount, then `true`.
#[hook]
pub fn use_entrance(delay_ms: u32) -> bool {
    let entered = use_state(|| false);
    {
        let entered = entered.clone();
        use_effect_with_deps(
            move |delay_ms| {
                let timeout = Timeout::new(*delay_ms, move || entered.set(true));
                move || drop(timeout)
            },
            delay_ms,
        );
    }
    *entered
}
