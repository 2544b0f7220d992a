mod api;
mod browser_file;
mod components;
mod config;

use components::crop_recommender::CropRecommender;
use components::disease_predictor::DiseasePredictor;
use components::header::render_header;
use config::AppConfig;
use yew::prelude::*;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Page {
    Predictor,
    Recommendations,
}

pub enum Msg {
    Navigate(Page),
}

// Root component. Leaving a page unmounts it, which drops its flow and
// releases any preview it still holds.
pub struct App {
    page: Page,
    config: AppConfig,
}

impl Component for App {
    type Message = Msg;
    type Properties = ();

    fn create(_ctx: &Context<Self>) -> Self {
        Self {
            page: Page::Predictor,
            config: AppConfig::load(),
        }
    }

    fn update(&mut self, _ctx: &Context<Self>, msg: Self::Message) -> bool {
        match msg {
            Msg::Navigate(page) if page != self.page => {
                log::debug!("Navigating to {:?}", page);
                self.page = page;
                true
            }
            Msg::Navigate(_) => false,
        }
    }

    fn view(&self, ctx: &Context<Self>) -> Html {
        html! {
            <div class="container">
                { render_header(self.page, ctx.link()) }

                <main class="main-content">
                {
                    match self.page {
                        Page::Predictor => html! {
                            <DiseasePredictor classifier={self.config.classifier.clone()} />
                        },
                        Page::Recommendations => html! {
                            <CropRecommender generative={self.config.generative.clone()} />
                        },
                    }
                }
                </main>

                <footer class="app-footer">
                    <p>{"CropCare | Fullstack Rust WASM"}</p>
                </footer>
            </div>
        }
    }
}

fn main() {
    wasm_logger::init(wasm_logger::Config::default());
    log::info!("App starting...");
    yew::Renderer::<App>::new().render();
}
