use std::rc::Rc;

use log::{debug, info};
use yew::Reducible;

use crate::motion::scroll::{AnchorScroller, FrameScheduler, ScrollHost};

/// In-page navigation targets, in page order.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Section {
    Home,
    About,
    Services,
    Industries,
    Contact,
}

impl Section {
    pub const ALL: [Section; 5] = [
        Section::Home,
        Section::About,
        Section::Services,
        Section::Industries,
        Section::Contact,
    ];

    /// Element id and URL fragment of the section.
    pub fn anchor(self) -> &'static str {
        match self {
            Section::Home => "home",
            Section::About => "about",
            Section::Services => "services",
            Section::Industries => "industries",
            Section::Contact => "contact",
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            Section::Home => "Home",
            Section::About => "About",
            Section::Services => "Services",
            Section::Industries => "Industries",
            Section::Contact => "Contact",
        }
    }

    pub fn href(self) -> String {
        format!("#{}", self.anchor())
    }
}

/// Interaction state owned by the page.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct PageState {
    pub menu_open: bool,
    pub spinning: bool,
}

pub enum PageAction {
    ToggleMenu,
    /// An in-page link was followed.
    Navigated(Section),
    HoverPortrait(bool),
    TogglePortrait,
}

impl Reducible for PageState {
    type Action = PageAction;

    fn reduce(self: Rc<Self>, action: Self::Action) -> Rc<Self> {
        let next = match action {
            PageAction::ToggleMenu => PageState {
                menu_open: !self.menu_open,
                ..(*self).clone()
            },
            PageAction::Navigated(section) => {
                if !self.menu_open {
                    return self;
                }
                debug!("closing menu after jumping to {}", section.anchor());
                PageState {
                    menu_open: false,
                    ..(*self).clone()
                }
            }
            PageAction::HoverPortrait(spinning) => PageState {
                spinning,
                ..(*self).clone()
            },
            PageAction::TogglePortrait => PageState {
                spinning: !self.spinning,
                ..(*self).clone()
            },
        };
        Rc::new(next)
    }
}

/// Starts the scroll toward `section` and returns the action that closes the menu.
pub fn follow_link<H, F>(scroller: Option<&AnchorScroller<H, F>>, section: Section) -> PageAction
where
    H: ScrollHost + 'static,
    F: FrameScheduler + 'static,
{
    info!("navigating to {}", section.anchor());
    if let Some(scroller) = scroller {
        scroller.scroll_to(section.anchor(), None);
    }
    PageAction::Navigated(section)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::motion::scroll::ScrollConfig;
    use crate::motion::testing::{FakePage, ManualFrames};

    fn page_scroller() -> AnchorScroller<FakePage, ManualFrames> {
        let page = Section::ALL
            .iter()
            .enumerate()
            .fold(FakePage::new(72.0), |page, (index, section)| {
                page.with_anchor(section.anchor(), index as f64 * 1000.0)
            });
        AnchorScroller::new(page, ManualFrames::default(), ScrollConfig::default())
    }

    #[test]
    fn menu_button_toggles_the_menu() {
        let state = Rc::new(PageState::default());
        let state = state.reduce(PageAction::ToggleMenu);
        assert!(state.menu_open);
        let state = state.reduce(PageAction::ToggleMenu);
        assert!(!state.menu_open);
    }

    #[test]
    fn contact_link_closes_open_menu_and_starts_scrolling() {
        let scroller = page_scroller();
        let state = Rc::new(PageState {
            menu_open: true,
            spinning: false,
        });

        let action = follow_link(Some(&scroller), Section::Contact);
        let state = state.reduce(action);

        assert!(!state.menu_open);
        assert_eq!(scroller.frames().pending(), 1);
        scroller.frames().run_for(900.0, 16.0);
        assert!((scroller.host().current_y() - (4000.0 - 72.0 - 8.0)).abs() <= 1.0);
    }

    #[test]
    fn navigating_with_closed_menu_keeps_state() {
        let state = Rc::new(PageState::default());
        let next = state.clone().reduce(PageAction::Navigated(Section::About));
        assert!(Rc::ptr_eq(&state, &next));
    }

    #[test]
    fn navigation_without_a_window_still_closes_the_menu() {
        let state = Rc::new(PageState {
            menu_open: true,
            spinning: true,
        });
        let action = follow_link::<FakePage, ManualFrames>(None, Section::Services);
        let state = state.reduce(action);
        assert!(!state.menu_open);
        assert!(state.spinning);
    }

    #[test]
    fn portrait_spin_is_independent_of_the_menu() {
        let state = Rc::new(PageState::default());
        let state = state.reduce(PageAction::HoverPortrait(true));
        assert!(state.spinning && !state.menu_open);
        let state = state.reduce(PageAction::TogglePortrait);
        assert!(!state.spinning);
        let state = state.reduce(PageAction::TogglePortrait);
        let state = state.reduce(PageAction::ToggleMenu);
        assert!(state.spinning && state.menu_open);
        let state = state.reduce(PageAction::HoverPortrait(false));
        assert!(!state.spinning && state.menu_open);
    }

    #[test]
    fn anchors_are_unique_fragments() {
        let anchors: std::collections::HashSet<_> =
            Section::ALL.iter().map(|section| section.anchor()).collect();
        assert_eq!(anchors.len(), Section::ALL.len());
        assert_eq!(Section::Industries.href(), "#industries");
    }
}
