use yew::prelude::*;

use crate::components::heading::SectionHeading;
use crate::content::CONTACT_DETAILS;
use crate::state::Section;

/// Contact details and an enquiry form. The form has no submit handler.
#[function_component(Contact)]
pub fn contact() -> Html {
    html! {
        <section id={Section::Contact.anchor()} class="contact">
            <div class="container">
                <SectionHeading title="Contact Us" subtitle="Get in touch for your staffing needs" />
                <div class="contact-grid">
                    <div class="contact-details">
                        { for CONTACT_DETAILS.iter().map(|detail| html! {
                            <div class="contact-detail">
                                <div class="contact-icon">{detail.icon}</div>
                                <div>
                                    <h4>{detail.label}</h4>
                                    { for detail.lines.iter().map(|line| html! { <p>{*line}</p> }) }
                                </div>
                            </div>
                        }) }
                    </div>
                    <div class="contact-form-card">
                        <form class="contact-form">
                            <label>
                                {"Name"}
                                <input type="text" placeholder="Your name" />
                            </label>
                            <label>
                                {"Email"}
                                <input type="email" placeholder="your@email.com" />
                            </label>
                            <label>
                                {"Project"}
                                <textarea rows="4" placeholder="Tell us about your staffing needs..."></textarea>
                            </label>
                            <button type="submit">{"Send Message"}</button>
                        </form>
                    </div>
                </div>
            </div>
            <style>
                {r#"
                .contact {
                    background: #f9fafb;
                }
                .contact-grid {
                    display: grid;
                    grid-template-columns: repeat(auto-fit, minmax(20rem, 1fr));
                    gap: 3rem;
                }
                .contact-details {
                    display: flex;
                    flex-direction: column;
                    gap: 1.5rem;
                }
                .contact-detail {
                    display: flex;
                    align-items: center;
                    gap: 1rem;
                }
                .contact-icon {
                    width: 3rem;
                    height: 3rem;
                    border-radius: 0.5rem;
                    background: #fee2e2;
                    display: flex;
                    align-items: center;
                    justify-content: center;
                    font-size: 1.25rem;
                }
                .contact-detail h4 {
                    margin: 0;
                    color: #1f2937;
                }
                .contact-detail p {
                    margin: 0;
                    color: #4b5563;
                }
                .contact-form-card {
                    background: white;
                    padding: 2rem;
                    border-radius: 0.75rem;
                    box-shadow: 0 1px 2px rgba(0, 0, 0, 0.05);
                }
                .contact-form {
                    display: flex;
                    flex-direction: column;
                }
                .contact-form label {
                    display: flex;
                    flex-direction: column;
                    gap: 0.5rem;
                    font-size: 0.875rem;
                    font-weight: 500;
                    color: #374151;
                    margin-top: 1rem;
                }
                .contact-form input, .contact-form textarea {
                    padding: 0.75rem 1rem;
                    border: 1px solid #d1d5db;
                    border-radius: 0.5rem;
                    font: inherit;
                }
                .contact-form input:focus, .contact-form textarea:focus {
                    outline: 2px solid #ef4444;
                    border-color: transparent;
                }
                .contact-form button {
                    margin-top: 1.5rem;
                    background: #dc2626;
                    color: white;
                    border: none;
                    border-radius: 0.5rem;
                    padding: 0.75rem;
                    cursor: pointer;
                }
                .contact-form button:hover {
                    background: #b91c1c;
                }
                "#}
            </style>
        </section>
    }
}
