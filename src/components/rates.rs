use yew::prelude::*;

use crate::components::heading::SectionHeading;
use crate::content::TERMS;

#[function_component(Rates)]
pub fn rates() -> Html {
    html! {
        <section class="rates reveal">
            <div class="container narrow centered">
                <SectionHeading title="Rates & Terms" subtitle="Flexible and transparent pricing" />
                <div class="terms-grid">
                    { for TERMS.iter().map(|term| html! {
                        <div class="term">
                            <h3>{term.title}</h3>
                            { for term.lines.iter().map(|line| html! { <p>{*line}</p> }) }
                        </div>
                    }) }
                </div>
            </div>
            <style>
                {r#"
                .rates {
                    background: white;
                }
                .terms-grid {
                    display: grid;
                    grid-template-columns: repeat(auto-fit, minmax(14rem, 1fr));
                    gap: 2rem;
                }
                .term {
                    background: #fef2f2;
                    padding: 2rem;
                    border-radius: 0.75rem;
                }
                .term h3 {
                    color: #991b1b;
                    margin: 0 0 1rem;
                }
                .term p {
                    color: #dc2626;
                    margin: 0;
                }
                "#}
            </style>
        </section>
    }
}
