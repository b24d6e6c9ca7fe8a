use yew::prelude::*;

use crate::components::heading::SectionHeading;
use crate::config::MotionSettings;
use crate::content::{INDUSTRIES, SERVICES};
use crate::state::Section;

#[derive(Properties, PartialEq)]
pub struct GridProps {
    pub motion: MotionSettings,
}

#[function_component(Services)]
pub fn services(props: &GridProps) -> Html {
    html! {
        <section id={Section::Services.anchor()} class="services reveal">
            <div class="container">
                <SectionHeading title="Our Services" subtitle="End-to-end staffing solutions" />
                <div class="service-grid">
                    { for SERVICES.iter().enumerate().map(|(index, card)| html! {
                        <div class="service-card stagger" style={props.motion.stagger_style(index)}>
                            <div class="service-icon">{card.icon}</div>
                            <h3>{card.title}</h3>
                            <p>{card.detail}</p>
                        </div>
                    }) }
                </div>
            </div>
            <style>
                {r#"
                .services {
                    background: white;
                }
                .service-grid {
                    display: grid;
                    grid-template-columns: repeat(auto-fit, minmax(16rem, 1fr));
                    gap: 2rem;
                }
                .service-card {
                    background: #f9fafb;
                    padding: 1.5rem;
                    border-radius: 0.75rem;
                    transition: box-shadow 0.3s ease, transform 0.3s ease;
                }
                .reveal-visible .service-card:hover {
                    box-shadow: 0 10px 15px rgba(0, 0, 0, 0.1);
                    transform: translateY(-0.5rem);
                }
                .service-icon {
                    width: 3rem;
                    height: 3rem;
                    border-radius: 0.5rem;
                    background: #fee2e2;
                    display: flex;
                    align-items: center;
                    justify-content: center;
                    font-size: 1.5rem;
                    margin-bottom: 1rem;
                }
                .service-card h3 {
                    font-size: 1.25rem;
                    color: #1f2937;
                    margin: 0 0 0.75rem;
                }
                .service-card p {
                    color: #4b5563;
                    margin: 0;
                }
                "#}
            </style>
        </section>
    }
}

#[function_component(Industries)]
pub fn industries(props: &GridProps) -> Html {
    html! {
        <section id={Section::Industries.anchor()} class="industries reveal">
            <div class="container">
                <SectionHeading title="Industries & Roles" subtitle="Skilled and general trades we cover" />
                <div class="industry-grid">
                    { for INDUSTRIES.iter().enumerate().map(|(index, card)| html! {
                        <div class="industry-card stagger" style={props.motion.stagger_style(index)}>
                            <div class="industry-icon">{card.icon}</div>
                            <h4>{card.title}</h4>
                            <p>{card.detail}</p>
                        </div>
                    }) }
                </div>
            </div>
            <style>
                {r#"
                .industries {
                    background: #f9fafb;
                }
                .industry-grid {
                    display: grid;
                    grid-template-columns: repeat(auto-fit, minmax(13rem, 1fr));
                    gap: 1.5rem;
                }
                .industry-card {
                    background: white;
                    padding: 1.5rem;
                    border-radius: 0.5rem;
                    text-align: center;
                    box-shadow: 0 1px 2px rgba(0, 0, 0, 0.05);
                }
                .industry-card:hover {
                    box-shadow: 0 4px 6px rgba(0, 0, 0, 0.1);
                }
                .industry-icon {
                    font-size: 2rem;
                    margin-bottom: 0.75rem;
                }
                .industry-card h4 {
                    margin: 0;
                    color: #1f2937;
                }
                .industry-card p {
                    margin: 0.5rem 0 0;
                    font-size: 0.875rem;
                    color: #4b5563;
                }
                "#}
            </style>
        </section>
    }
}
