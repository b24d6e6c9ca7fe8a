use yew::prelude::*;

use crate::content::{COMPANY, TAGLINE};

#[function_component(Footer)]
pub fn footer() -> Html {
    html! {
        <footer class="site-footer">
            <p>{format!("© 2024 {}. All rights reserved. {}.", COMPANY, TAGLINE)}</p>
            <style>
                {r#"
                .site-footer {
                    background: #dc2626;
                    color: white;
                    text-align: center;
                    padding: 2rem 1.5rem;
                }
                "#}
            </style>
        </footer>
    }
}
