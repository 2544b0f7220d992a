use super::handlers;
use super::recommendation_form::{render_parameter_form, render_recommendation};
use super::toasts::{ActiveToast, render_toasts};
use super::utils::render_error_message;
use crate::api::{GeminiClient, Unconfigured};
use shared::{
    ConfigError, GenerateError, GenerativeConfig, GenerativeTextService, ParameterSubmissionFlow,
};
use std::rc::Rc;
use yew::prelude::*;

pub enum Msg {
    FieldChanged(String, String),
    Submit,
    Finished(Result<String, GenerateError>),
    Clear,
    DismissToast(u64),
}

#[derive(Properties, PartialEq)]
pub struct CropRecommenderProps {
    pub generative: Result<GenerativeConfig, ConfigError>,
}

pub struct CropRecommender {
    pub(crate) flow: ParameterSubmissionFlow,
    pub(crate) service: Rc<dyn GenerativeTextService>,
    pub(crate) toasts: Vec<ActiveToast>,
    pub(crate) validation_error: Option<String>,
}

fn build_service(config: &Result<GenerativeConfig, ConfigError>) -> Rc<dyn GenerativeTextService> {
    match config {
        Ok(config) => Rc::new(GeminiClient::new(config.clone())),
        Err(e) => Rc::new(Unconfigured(e.clone())),
    }
}

impl CropRecommender {
    /// Moves the flow's pending notifications into the toast stack.
    pub(crate) fn flush_notifications(&mut self, ctx: &Context<Self>) {
        let on_expire = ctx.link().callback(Msg::DismissToast);
        for notification in self.flow.take_notifications() {
            self.toasts
                .push(ActiveToast::schedule(notification, on_expire.clone()));
        }
    }
}

impl Component for CropRecommender {
    type Message = Msg;
    type Properties = CropRecommenderProps;

    fn create(ctx: &Context<Self>) -> Self {
        Self {
            flow: ParameterSubmissionFlow::new(),
            service: build_service(&ctx.props().generative),
            toasts: Vec::new(),
            validation_error: None,
        }
    }

    fn changed(&mut self, ctx: &Context<Self>, _old_props: &Self::Properties) -> bool {
        self.service = build_service(&ctx.props().generative);
        true
    }

    fn update(&mut self, ctx: &Context<Self>, msg: Self::Message) -> bool {
        match msg {
            Msg::FieldChanged(name, value) => handlers::handle_field_changed(self, name, value),
            Msg::Submit => handlers::handle_recommend(self, ctx),
            Msg::Finished(outcome) => handlers::handle_recommendation_finished(self, ctx, outcome),
            Msg::Clear => handlers::handle_clear_inputs(self),
            Msg::DismissToast(id) => handlers::handle_dismiss_toast(self, id),
        }
    }

    fn view(&self, ctx: &Context<Self>) -> Html {
        let config_banner = match &ctx.props().generative {
            Ok(_) => html! {},
            Err(e) => html! {
                <div class="config-banner">
                    <i class="fa-solid fa-triangle-exclamation"></i>
                    { format!(" Recommendation service is not configured ({}).", e) }
                </div>
            },
        };

        html! {
            <section class="card">
                { render_toasts(&self.toasts, ctx.link().callback(Msg::DismissToast)) }
                <header class="card-header">
                    <h2>{"Crop Recommendations"}</h2>
                    <p class="subtitle">{"Enter soil and climate measurements to get a crop suggestion"}</p>
                </header>

                { config_banner }
                { render_parameter_form(self, ctx) }
                { render_error_message(self.validation_error.as_deref()) }
                { render_recommendation(self) }
            </section>
        }
    }
}
