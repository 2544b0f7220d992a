use crate::{App, Msg, Page};
use yew::html::Scope;
use yew::prelude::*;

/// Renders the application header with page navigation
pub fn render_header(current: Page, link: &Scope<App>) -> Html {
    let nav_button = |page: Page, icon: &'static str, label: &'static str| {
        html! {
            <button
                class={classes!("nav-link", (page == current).then_some("active"))}
                onclick={link.callback(move |_| Msg::Navigate(page))}
            >
                <i class={classes!("fa-solid", icon)}></i>{ format!(" {}", label) }
            </button>
        }
    };

    html! {
        <header class="app-header">
            <h1><i class="fa-solid fa-seedling"></i> {" CropCare"}</h1>
            <p class="subtitle">{"Leaf disease prediction and crop recommendations"}</p>
            <nav class="app-nav">
                { nav_button(Page::Predictor, "fa-leaf", "Disease Predictor") }
                { nav_button(Page::Recommendations, "fa-wheat-awn", "Crop Recommendations") }
            </nav>
        </header>
    }
}
