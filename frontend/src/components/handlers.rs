use super::crop_recommender::{self, CropRecommender};
use super::disease_predictor::{self, DiseasePredictor};
use crate::api::HttpClassifier;
use crate::browser_file::BrowserFile;
use shared::{
    ClassificationService, ClassifyError, FlowError, GenerateError, GenerativeTextService,
    PredictionResult, RecommendationRequest,
};
use std::rc::Rc;
use wasm_bindgen_futures::spawn_local;
use yew::prelude::*;

// Disease predictor

pub fn handle_file_chosen(model: &mut DiseasePredictor, file: BrowserFile) -> bool {
    match model.flow.select_file(file) {
        Ok(()) => true,
        Err(e) => {
            log::warn!("Ignoring file selection: {}", e);
            false
        }
    }
}

pub fn handle_classify(model: &mut DiseasePredictor, ctx: &Context<DiseasePredictor>) -> bool {
    match model.flow.begin_submit() {
        Ok(file) => {
            send_classification_request(ctx, model.classifier.clone(), file);
            true
        }
        Err(FlowError::AlreadyInFlight) => false,
        // The flow has already recorded the validation message.
        Err(_) => true,
    }
}

pub fn handle_classification_finished(
    model: &mut DiseasePredictor,
    outcome: Result<PredictionResult, ClassifyError>,
) -> bool {
    model.flow.finish(outcome);
    true
}

pub fn handle_clear_image(model: &mut DiseasePredictor) -> bool {
    if !model.flow.can_clear() {
        log::debug!("Ignoring clear while a classification is in flight");
        return false;
    }
    model.flow.clear();
    true
}

pub fn send_classification_request(
    ctx: &Context<DiseasePredictor>,
    classifier: HttpClassifier,
    file: BrowserFile,
) {
    let link = ctx.link().clone();
    spawn_local(async move {
        let outcome = classifier.classify(&file).await;
        link.send_message(disease_predictor::Msg::Finished(outcome));
    });
}

// Crop recommender

pub fn handle_field_changed(model: &mut CropRecommender, name: String, value: String) -> bool {
    model.validation_error = None;
    if let Err(e) = model.flow.update_field(&name, value) {
        log::warn!("{}", e);
        return false;
    }
    true
}

pub fn handle_recommend(model: &mut CropRecommender, ctx: &Context<CropRecommender>) -> bool {
    match model.flow.begin_submit() {
        Ok(request) => {
            model.validation_error = None;
            send_recommendation_request(ctx, Rc::clone(&model.service), request);
            model.flush_notifications(ctx);
            true
        }
        Err(FlowError::AlreadyInFlight) => false,
        Err(e) => {
            model.validation_error = Some(e.to_string());
            true
        }
    }
}

pub fn handle_recommendation_finished(
    model: &mut CropRecommender,
    ctx: &Context<CropRecommender>,
    outcome: Result<String, GenerateError>,
) -> bool {
    model.flow.finish(outcome);
    model.flush_notifications(ctx);
    true
}

pub fn handle_clear_inputs(model: &mut CropRecommender) -> bool {
    model.flow.clear();
    model.validation_error = None;
    true
}

pub fn handle_dismiss_toast(model: &mut CropRecommender, id: u64) -> bool {
    let before = model.toasts.len();
    model.toasts.retain(|toast| toast.id != id);
    model.toasts.len() != before
}

pub fn send_recommendation_request(
    ctx: &Context<CropRecommender>,
    service: Rc<dyn GenerativeTextService>,
    request: RecommendationRequest,
) {
    let link = ctx.link().clone();
    spawn_local(async move {
        let outcome = service.generate(&request).await;
        link.send_message(crop_recommender::Msg::Finished(outcome));
    });
}
