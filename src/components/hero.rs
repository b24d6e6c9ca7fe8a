use web_sys::MouseEvent;
use yew::prelude::*;

use crate::content::{COMPANY, FOUNDED, INTRO, TAGLINE};
use crate::state::Section;

#[derive(Properties, PartialEq)]
pub struct HeroProps {
    pub spinning: bool,
    /// Whether the entrance transition has started.
    pub entered: bool,
    pub on_portrait_hover: Callback<bool>,
    pub on_portrait_click: Callback<()>,
    pub on_navigate: Callback<Section>,
}

#[function_component(Hero)]
pub fn hero(props: &HeroProps) -> Html {
    let jump_to = |section: Section| {
        let on_navigate = props.on_navigate.clone();
        Callback::from(move |e: MouseEvent| {
            e.prevent_default();
            on_navigate.emit(section);
        })
    };

    let onmouseenter = {
        let on_portrait_hover = props.on_portrait_hover.clone();
        Callback::from(move |_: MouseEvent| on_portrait_hover.emit(true))
    };
    let onmouseleave = {
        let on_portrait_hover = props.on_portrait_hover.clone();
        Callback::from(move |_: MouseEvent| on_portrait_hover.emit(false))
    };
    let onclick = {
        let on_portrait_click = props.on_portrait_click.clone();
        Callback::from(move |_: MouseEvent| on_portrait_click.emit(()))
    };

    html! {
        <section id={Section::Home.anchor()} class="hero reveal">
            <div class={classes!("hero-content", props.entered.then(|| "entered"))}>
                <div class="hero-text">
                    <div class="hero-kicker">
                        <span class="dot"></span>
                        <span>{"Staffing & employment services"}</span>
                    </div>
                    <h1>
                        {"Hi, We're"}<br />
                        <span class="accent">{COMPANY}</span>
                    </h1>
                    <p class="hero-tagline">{TAGLINE}</p>
                    <p class="hero-intro">{INTRO}</p>
                    <button class="hero-cta" onclick={jump_to(Section::Contact)}>
                        {"Contact Us"}
                    </button>
                    <a class="scroll-hint" href={Section::About.href()} onclick={jump_to(Section::About)}>
                        <span class="bar"></span>
                        {"Scroll down"}
                    </a>
                </div>

                <div
                    class="portrait"
                    aria-label="Profile image interactive area"
                    {onmouseenter}
                    {onmouseleave}
                    {onclick}
                >
                    <div class="portrait-glow"></div>
                    <div class={classes!("portrait-ring", props.spinning.then(|| "spinning"))}>
                        <div class="portrait-inner">
                            <img src="/assets/display.svg" alt="Profile" />
                        </div>
                    </div>
                    <div class="portrait-badge">{format!("Since {}", FOUNDED)}</div>
                </div>
            </div>
            <style>
                {r#"
                .hero {
                    padding: 6rem 1.5rem 3rem;
                }
                .hero-content {
                    max-width: 72rem;
                    margin: 0 auto;
                    display: flex;
                    flex-wrap: wrap;
                    align-items: center;
                    justify-content: space-between;
                    gap: 2rem;
                    opacity: 0;
                    transform: translateY(16px);
                    transition: opacity 0.8s ease, transform 0.8s ease;
                }
                .hero-content.entered {
                    opacity: 1;
                    transform: none;
                }
                .hero-text {
                    flex: 1 1 24rem;
                }
                .hero-kicker {
                    display: flex;
                    align-items: center;
                    gap: 0.5rem;
                    font-size: 0.875rem;
                    color: #4b5563;
                    margin-bottom: 1rem;
                }
                .hero-kicker .dot {
                    width: 8px;
                    height: 8px;
                    border-radius: 50%;
                    background: #ef4444;
                }
                .hero h1 {
                    font-size: clamp(2.25rem, 5vw, 3.75rem);
                    font-weight: 700;
                    color: #111827;
                    margin: 0 0 1rem;
                }
                .hero .accent {
                    color: #dc2626;
                }
                .hero-tagline {
                    font-size: 1.125rem;
                    color: #4b5563;
                }
                .hero-intro {
                    color: #374151;
                    line-height: 1.6;
                    margin-bottom: 2rem;
                }
                .hero-cta {
                    background: #dc2626;
                    color: white;
                    border: none;
                    border-radius: 0.5rem;
                    padding: 0.75rem 2rem;
                    cursor: pointer;
                    box-shadow: 0 10px 15px rgba(220, 38, 38, 0.2);
                    transition: background 0.3s ease, transform 0.3s ease;
                }
                .hero-cta:hover {
                    background: #b91c1c;
                    transform: scale(1.05);
                }
                .scroll-hint {
                    display: flex;
                    align-items: center;
                    gap: 0.5rem;
                    margin-top: 2rem;
                    font-size: 0.875rem;
                    color: #4b5563;
                    text-decoration: none;
                }
                .scroll-hint .bar {
                    width: 24px;
                    height: 4px;
                    border-radius: 2px;
                    background: #ef4444;
                }
                .portrait {
                    position: relative;
                    flex: 0 0 auto;
                    margin: 0 auto;
                    cursor: pointer;
                }
                .portrait-glow {
                    position: absolute;
                    inset: 0;
                    z-index: -1;
                    border-radius: 50%;
                    background: rgba(239, 68, 68, 0.2);
                    filter: blur(40px);
                    opacity: 0;
                    transition: opacity 0.7s ease;
                }
                .portrait:hover .portrait-glow {
                    opacity: 1;
                }
                .portrait-ring {
                    width: 18rem;
                    height: 18rem;
                    border-radius: 50%;
                    display: flex;
                    align-items: center;
                    justify-content: center;
                    background: linear-gradient(135deg, #f87171, #dc2626);
                    box-shadow: 0 20px 25px rgba(0, 0, 0, 0.15);
                    transition: transform 0.7s ease-out;
                }
                .portrait:hover .portrait-ring {
                    transform: scale(1.05);
                }
                .portrait-ring.spinning {
                    animation: portrait-spin 8s linear infinite;
                }
                @keyframes portrait-spin {
                    from { transform: rotate(0deg); }
                    to { transform: rotate(360deg); }
                }
                .portrait-inner {
                    width: 14rem;
                    height: 14rem;
                    border-radius: 50%;
                    background: white;
                    overflow: hidden;
                }
                .portrait-inner img {
                    width: 100%;
                    height: 100%;
                    object-fit: cover;
                }
                .portrait-badge {
                    position: absolute;
                    right: -1rem;
                    bottom: -1rem;
                    background: white;
                    padding: 0.75rem;
                    border-radius: 0.5rem;
                    color: #dc2626;
                    font-weight: 600;
                    box-shadow: 0 10px 15px rgba(0, 0, 0, 0.1);
                }
                "#}
            </style>
        </section>
    }
}
