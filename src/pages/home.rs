use log::info;
use yew::prelude::*;

use crate::components::{
    about::About,
    contact::Contact,
    footer::Footer,
    hero::Hero,
    nav::Nav,
    progress_bar::ProgressBar,
    rates::Rates,
    services::{Industries, Services},
    why_us::WhyUs,
};
use crate::config::{self, MotionSettings};
use crate::motion::hooks::{use_anchor_scroller, use_entrance, use_reveal_on_scroll};
use crate::state::{follow_link, PageAction, PageState, Section};

#[derive(Properties, PartialEq)]
pub struct HomeProps {
    #[prop_or_else(config::motion)]
    pub motion: MotionSettings,
}

#[function_component(Home)]
pub fn home(props: &HomeProps) -> Html {
    let motion = props.motion;
    let state = use_reducer(PageState::default);
    let scroller = use_anchor_scroller(motion.scroll);
    let entered = use_entrance(motion.hero_delay_ms);
    use_reveal_on_scroll(motion.reveal_threshold);

    {
        use_effect_with_deps(
            move |_| {
                info!("Home page mounted");
                || info!("Home page unmounted")
            },
            (),
        );
    }

    let on_navigate = {
        let state = state.clone();
        let scroller = scroller.clone();
        Callback::from(move |section: Section| {
            state.dispatch(follow_link((*scroller).as_ref(), section));
        })
    };

    let on_toggle_menu = {
        let state = state.clone();
        Callback::from(move |_: ()| state.dispatch(PageAction::ToggleMenu))
    };

    let on_portrait_hover = {
        let state = state.clone();
        Callback::from(move |hovering: bool| state.dispatch(PageAction::HoverPortrait(hovering)))
    };

    let on_portrait_click = {
        let state = state.clone();
        Callback::from(move |_: ()| state.dispatch(PageAction::TogglePortrait))
    };

    html! {
        <div class="home-page">
            {
                if motion.progress_bar {
                    html! { <ProgressBar /> }
                } else {
                    html! {}
                }
            }
            <Nav
                menu_open={state.menu_open}
                {on_toggle_menu}
                on_navigate={on_navigate.clone()}
            />
            <Hero
                spinning={state.spinning}
                {entered}
                {on_portrait_hover}
                {on_portrait_click}
                {on_navigate}
            />
            <About {motion} />
            <WhyUs {motion} />
            <Services {motion} />
            <Industries {motion} />
            <Rates />
            <Contact />
            <Footer />
            <style>
                {r#"
                html {
                    scroll-behavior: auto;
                }
                body {
                    margin: 0;
                    font-family: -apple-system, BlinkMacSystemFont, "Segoe UI", Roboto, Helvetica, Arial, sans-serif;
                    background: #f9fafb;
                }
                .home-page section {
                    padding: 4rem 1.5rem;
                }
                .container {
                    max-width: 72rem;
                    margin: 0 auto;
                }
                .container.narrow {
                    max-width: 56rem;
                }
                .container.centered {
                    text-align: center;
                }
                .section-heading {
                    text-align: center;
                    margin-bottom: 3rem;
                }
                .section-heading h2 {
                    font-size: clamp(1.875rem, 4vw, 2.25rem);
                    font-weight: 700;
                    color: #111827;
                    margin: 0 0 1rem;
                }
                .section-heading p {
                    color: #4b5563;
                    margin: 0;
                }
                .reveal {
                    opacity: 0;
                    transform: translateY(24px);
                    transition: opacity 0.7s ease-out, transform 0.7s ease-out;
                }
                .reveal.reveal-visible {
                    opacity: 1;
                    transform: none;
                }
                .reveal .stagger {
                    opacity: 0;
                    transform: translateY(12px);
                    transition-property: opacity, transform;
                    transition-duration: 0.5s;
                    transition-timing-function: ease-out;
                }
                .reveal.reveal-visible .stagger {
                    opacity: 1;
                    transform: none;
                }
                @media (prefers-reduced-motion: reduce) {
                    .reveal, .reveal .stagger, .hero-content {
                        opacity: 1;
                        transform: none;
                        transition: none;
                    }
                }
                "#}
            </style>
        </div>
    }
}
