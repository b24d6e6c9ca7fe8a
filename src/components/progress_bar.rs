use yew::prelude::*;
use yew_hooks::prelude::*;

use crate::motion::dom;

/// Fraction of the scrollable distance already scrolled, in `[0, 1]`.
pub fn scroll_progress(scroll_y: f64, document_height: f64, viewport_height: f64) -> f64 {
    let scrollable = document_height - viewport_height;
    if scrollable <= 0.0 {
        return 0.0;
    }
    (scroll_y / scrollable).clamp(0.0, 1.0)
}

#[function_component(ProgressBar)]
pub fn progress_bar() -> Html {
    let (_, scroll_y) = use_window_scroll();
    let (_, viewport_height) = use_window_size();
    let document_height = dom::document()
        .ok()
        .and_then(|document| document.document_element())
        .map(|root| root.scroll_height() as f64)
        .unwrap_or(0.0);
    let progress = scroll_progress(scroll_y, document_height, viewport_height);

    html! {
        <div class="scroll-progress" role="presentation">
            <div class="scroll-progress-fill" style={format!("width: {:.2}%;", progress * 100.0)}></div>
            <style>
                {r#"
                .scroll-progress {
                    position: fixed;
                    top: 0;
                    left: 0;
                    right: 0;
                    height: 3px;
                    z-index: 60;
                    pointer-events: none;
                }
                .scroll-progress-fill {
                    height: 100%;
                    background: #dc2626;
                    transition: width 0.1s linear;
                }
                "#}
            </style>
        </div>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn top_and_bottom_of_the_page() {
        assert_eq!(scroll_progress(0.0, 5000.0, 1000.0), 0.0);
        assert_eq!(scroll_progress(4000.0, 5000.0, 1000.0), 1.0);
        assert_eq!(scroll_progress(1000.0, 5000.0, 1000.0), 0.25);
    }

    #[test]
    fn short_documents_report_no_progress() {
        assert_eq!(scroll_progress(0.0, 800.0, 1000.0), 0.0);
        assert_eq!(scroll_progress(50.0, 1000.0, 1000.0), 0.0);
    }

    #[test]
    fn overscroll_is_clamped() {
        assert_eq!(scroll_progress(-40.0, 5000.0, 1000.0), 0.0);
        assert_eq!(scroll_progress(4100.0, 5000.0, 1000.0), 1.0);
    }
}
