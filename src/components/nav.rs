use web_sys::MouseEvent;
use yew::prelude::*;
use yew_hooks::prelude::*;

use crate::config::NAV_SCROLLED_AFTER_PX;
use crate::content::COMPANY;
use crate::state::Section;

#[derive(Properties, PartialEq)]
pub struct NavProps {
    pub menu_open: bool,
    pub on_toggle_menu: Callback<()>,
    pub on_navigate: Callback<Section>,
}

/// Whether the page has moved far enough for the nav to lift off it.
pub fn nav_is_scrolled(scroll_y: f64) -> bool {
    scroll_y > NAV_SCROLLED_AFTER_PX
}

/// Link that animates to its section instead of jumping to the fragment.
fn section_link(section: Section, class: &'static str, on_navigate: &Callback<Section>) -> Html {
    let onclick = {
        let on_navigate = on_navigate.clone();
        Callback::from(move |e: MouseEvent| {
            e.prevent_default();
            on_navigate.emit(section);
        })
    };
    html! {
        <a href={section.href()} class={class} {onclick}>
            {section.label()}
        </a>
    }
}

#[function_component(Nav)]
pub fn nav(props: &NavProps) -> Html {
    let NavProps {
        menu_open,
        on_toggle_menu,
        on_navigate,
    } = props;
    let (_, scroll_y) = use_window_scroll();
    let scrolled = nav_is_scrolled(scroll_y);

    let toggle_menu = {
        let on_toggle_menu = on_toggle_menu.clone();
        Callback::from(move |e: MouseEvent| {
            e.prevent_default();
            on_toggle_menu.emit(());
        })
    };

    html! {
        <nav class={classes!("top-nav", scrolled.then(|| "scrolled"))}>
            <div class="nav-content">
                <div class="nav-logo">{COMPANY}</div>

                <div class="nav-links">
                    { for Section::ALL.iter().map(|section| section_link(*section, "nav-link", on_navigate)) }
                </div>

                <button
                    class={classes!("burger-menu", menu_open.then(|| "open"))}
                    aria-label="Toggle menu"
                    onclick={toggle_menu}
                >
                    <span></span>
                    <span></span>
                    <span></span>
                </button>
            </div>
            {
                if *menu_open {
                    html! {
                        <div class="mobile-menu">
                            { for Section::ALL.iter().map(|section| section_link(*section, "mobile-link", on_navigate)) }
                        </div>
                    }
                } else {
                    html! {}
                }
            }
            <style>
                {r#"
                .top-nav {
                    position: fixed;
                    top: 0;
                    left: 0;
                    right: 0;
                    z-index: 50;
                    background: rgba(255, 255, 255, 0.9);
                    backdrop-filter: blur(4px);
                    transition: box-shadow 0.3s ease;
                }
                .top-nav.scrolled {
                    box-shadow: 0 1px 6px rgba(0, 0, 0, 0.08);
                }
                .nav-content {
                    max-width: 72rem;
                    margin: 0 auto;
                    padding: 1rem 1.5rem;
                    display: flex;
                    justify-content: space-between;
                    align-items: center;
                }
                .nav-logo {
                    font-size: 1.5rem;
                    font-weight: 700;
                    color: #dc2626;
                }
                .nav-links {
                    display: flex;
                    gap: 2rem;
                }
                .nav-link, .mobile-link {
                    color: #374151;
                    text-decoration: none;
                    transition: color 0.2s ease;
                }
                .nav-link:hover, .mobile-link:hover {
                    color: #dc2626;
                }
                .burger-menu {
                    display: none;
                    flex-direction: column;
                    gap: 5px;
                    background: none;
                    border: none;
                    padding: 0.5rem;
                    cursor: pointer;
                }
                .burger-menu span {
                    width: 22px;
                    height: 2px;
                    background: #374151;
                    transition: transform 0.3s ease, opacity 0.3s ease;
                }
                .burger-menu.open span:nth-child(1) {
                    transform: translateY(7px) rotate(45deg);
                }
                .burger-menu.open span:nth-child(2) {
                    opacity: 0;
                }
                .burger-menu.open span:nth-child(3) {
                    transform: translateY(-7px) rotate(-45deg);
                }
                .mobile-menu {
                    display: none;
                    flex-direction: column;
                    padding: 0.5rem 1.5rem 1rem;
                    border-top: 1px solid #e5e7eb;
                }
                .mobile-link {
                    padding: 0.5rem;
                }
                @media (max-width: 768px) {
                    .nav-links {
                        display: none;
                    }
                    .burger-menu, .mobile-menu {
                        display: flex;
                    }
                }
                "#}
            </style>
        </nav>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn nav_lifts_only_past_the_first_few_pixels() {
        assert!(!nav_is_scrolled(0.0));
        assert!(!nav_is_scrolled(NAV_SCROLLED_AFTER_PX));
        assert!(nav_is_scrolled(NAV_SCROLLED_AFTER_PX + 1.0));
    }
}
