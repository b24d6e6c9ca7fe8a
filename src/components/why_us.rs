use yew::prelude::*;

use crate::components::heading::SectionHeading;
use crate::config::MotionSettings;
use crate::content::{REASONS, SKILLS};

#[derive(Properties, PartialEq)]
pub struct WhyUsProps {
    pub motion: MotionSettings,
}

#[function_component(WhyUs)]
pub fn why_us(props: &WhyUsProps) -> Html {
    html! {
        <section class="why-us reveal">
            <div class="container narrow">
                <SectionHeading title="Why Choose Us" subtitle="Our commitment to excellence" />
                <div class="why-grid">
                    <div class="skills">
                        { for SKILLS.iter().enumerate().map(|(index, skill)| html! {
                            <div class="skill">
                                <div class="skill-header">
                                    <span>{skill.name}</span>
                                    <span class="skill-percent">{format!("{}%", skill.percent)}</span>
                                </div>
                                <div class="skill-track">
                                    // Width grows from zero once the section is revealed.
                                    <div
                                        class="skill-fill"
                                        style={format!("--fill: {}%; {}", skill.percent, props.motion.stagger_style(index))}
                                    ></div>
                                </div>
                            </div>
                        }) }
                    </div>
                    <div class="reasons">
                        { for REASONS.iter().enumerate().map(|(index, reason)| html! {
                            <div class="reason stagger" style={props.motion.stagger_style(index)}>
                                <span class="check">{"✔"}</span>
                                <div>
                                    <h4>{reason.title}</h4>
                                    <p>{reason.detail}</p>
                                </div>
                            </div>
                        }) }
                    </div>
                </div>
            </div>
            <style>
                {r#"
                .why-us {
                    background: #f9fafb;
                }
                .why-grid {
                    display: grid;
                    grid-template-columns: repeat(auto-fit, minmax(18rem, 1fr));
                    gap: 2rem;
                }
                .skills {
                    display: flex;
                    flex-direction: column;
                    gap: 1.5rem;
                }
                .skill {
                    background: white;
                    border-radius: 0.5rem;
                    padding: 1rem;
                    box-shadow: 0 1px 2px rgba(0, 0, 0, 0.05);
                }
                .skill-header {
                    display: flex;
                    justify-content: space-between;
                    margin-bottom: 0.5rem;
                    color: #374151;
                    font-weight: 500;
                }
                .skill-percent {
                    color: #dc2626;
                    font-weight: 600;
                }
                .skill-track {
                    height: 0.5rem;
                    border-radius: 0.5rem;
                    background: #e5e7eb;
                    overflow: hidden;
                }
                .skill-fill {
                    height: 100%;
                    width: 0;
                    border-radius: 0.5rem;
                    background: #ef4444;
                    transition: width 1s ease-out;
                }
                .reveal-visible .skill-fill {
                    width: var(--fill);
                }
                .reasons {
                    display: flex;
                    flex-direction: column;
                    gap: 1.5rem;
                }
                .reason {
                    display: flex;
                    align-items: flex-start;
                    gap: 0.75rem;
                }
                .reason .check {
                    color: #22c55e;
                    margin-top: 0.2rem;
                }
                .reason h4 {
                    margin: 0;
                    color: #1f2937;
                }
                .reason p {
                    margin: 0.25rem 0 0;
                    font-size: 0.875rem;
                    color: #4b5563;
                }
                "#}
            </style>
        </section>
    }
}
