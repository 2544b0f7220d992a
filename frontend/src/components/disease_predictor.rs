use super::handlers;
use super::preview_area::{render_preview_area, render_submit_button};
use super::results::render_results;
use super::upload_section::render_upload_section;
use super::utils::render_error_message;
use crate::api::HttpClassifier;
use crate::browser_file::BrowserFile;
use shared::{ClassifierConfig, ClassifyError, ImageSubmissionFlow, PredictionResult};
use yew::prelude::*;

pub enum Msg {
    FileChosen(BrowserFile),
    Submit,
    Finished(Result<PredictionResult, ClassifyError>),
    Clear,
}

#[derive(Properties, PartialEq)]
pub struct DiseasePredictorProps {
    pub classifier: ClassifierConfig,
}

pub struct DiseasePredictor {
    pub(crate) flow: ImageSubmissionFlow<BrowserFile>,
    pub(crate) classifier: HttpClassifier,
}

impl Component for DiseasePredictor {
    type Message = Msg;
    type Properties = DiseasePredictorProps;

    fn create(ctx: &Context<Self>) -> Self {
        Self {
            flow: ImageSubmissionFlow::new(),
            classifier: HttpClassifier::new(&ctx.props().classifier),
        }
    }

    fn changed(&mut self, ctx: &Context<Self>, _old_props: &Self::Properties) -> bool {
        self.classifier = HttpClassifier::new(&ctx.props().classifier);
        true
    }

    fn update(&mut self, ctx: &Context<Self>, msg: Self::Message) -> bool {
        match msg {
            Msg::FileChosen(file) => handlers::handle_file_chosen(self, file),
            Msg::Submit => handlers::handle_classify(self, ctx),
            Msg::Finished(outcome) => handlers::handle_classification_finished(self, outcome),
            Msg::Clear => handlers::handle_clear_image(self),
        }
    }

    fn view(&self, ctx: &Context<Self>) -> Html {
        let onsubmit = ctx.link().callback(|e: SubmitEvent| {
            e.prevent_default();
            Msg::Submit
        });

        html! {
            <section class="card">
                <header class="card-header">
                    <h2>{"Plant Disease Predictor"}</h2>
                    <p class="subtitle">{"Upload an image of a plant leaf to identify potential diseases"}</p>
                </header>

                <form class="card-content" {onsubmit}>
                    { render_upload_section(self, ctx) }
                    { render_preview_area(self, ctx) }
                    { render_error_message(self.flow.error()) }
                    { render_submit_button(self) }
                </form>

                { render_results(self) }

                <footer class="card-footer">
                    <p>{ format!("API Endpoint: {}", ctx.props().classifier.endpoint) }</p>
                </footer>
            </section>
        }
    }
}
