use yew::prelude::*;

use crate::components::heading::SectionHeading;
use crate::config::MotionSettings;
use crate::content::{ABOUT, STATS};
use crate::state::Section;

#[derive(Properties, PartialEq)]
pub struct AboutProps {
    pub motion: MotionSettings,
}

#[function_component(About)]
pub fn about(props: &AboutProps) -> Html {
    html! {
        <section id={Section::About.anchor()} class="about reveal">
            <div class="container">
                <SectionHeading title="About Us" subtitle="Our introduction" />
                <div class="about-grid">
                    <div class="about-card">
                        <div class="about-icon">{"👥"}</div>
                        <h3>{"Trusted Staffing Partner"}</h3>
                    </div>
                    <div class="about-body">
                        <p>{ABOUT}</p>
                        <div class="stats">
                            { for STATS.iter().enumerate().map(|(index, stat)| html! {
                                <div class="stat stagger" style={props.motion.stagger_style(index)}>
                                    <div class="stat-value">{stat.value}</div>
                                    <div class="stat-label">{stat.label}</div>
                                </div>
                            }) }
                        </div>
                        <button class="secondary-cta">{"Download CV"}</button>
                    </div>
                </div>
            </div>
            <style>
                {r#"
                .about {
                    background: white;
                }
                .about-grid {
                    display: grid;
                    grid-template-columns: repeat(auto-fit, minmax(20rem, 1fr));
                    gap: 3rem;
                    align-items: center;
                }
                .about-card {
                    height: 20rem;
                    border-radius: 1rem;
                    display: flex;
                    flex-direction: column;
                    align-items: center;
                    justify-content: center;
                    background: linear-gradient(135deg, #fee2e2, #fecaca);
                }
                .about-icon {
                    font-size: 4rem;
                    margin-bottom: 1rem;
                }
                .about-card h3 {
                    font-size: 1.25rem;
                    color: #1f2937;
                }
                .about-body p {
                    color: #374151;
                    line-height: 1.6;
                    margin-bottom: 2rem;
                }
                .stats {
                    display: grid;
                    grid-template-columns: repeat(3, 1fr);
                    gap: 2rem;
                    margin-bottom: 2rem;
                    text-align: center;
                }
                .stat-value {
                    font-size: 1.5rem;
                    font-weight: 700;
                    color: #dc2626;
                }
                .stat-label {
                    font-size: 0.875rem;
                    color: #4b5563;
                }
                .secondary-cta {
                    background: #dc2626;
                    color: white;
                    border: none;
                    border-radius: 0.5rem;
                    padding: 0.5rem 1.5rem;
                    cursor: pointer;
                }
                .secondary-cta:hover {
                    background: #b91c1c;
                }
                "#}
            </style>
        </section>
    }
}
