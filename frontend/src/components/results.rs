use super::disease_predictor::DiseasePredictor;
use shared::Prediction;
use yew::prelude::*;

pub fn render_results(model: &DiseasePredictor) -> Html {
    let Some(results) = model.flow.results() else {
        return html! {};
    };

    if results.is_empty() {
        return html! { <p class="no-results-message">{"The classifier returned no predictions for this image."}</p> };
    }

    html! {
        <div class="results-container">
            <h3>{"Prediction Results"}</h3>
            <div class="result-bars">
                { for results.iter().map(render_prediction) }
            </div>
        </div>
    }
}

fn render_prediction(prediction: &Prediction) -> Html {
    let percentage = prediction.percentage();

    html! {
        <div class="result-item">
            <div class="result-label">{ &prediction.label }</div>
            <div class="result-bar-container">
                <div class="result-bar" style={format!("width: {}%", percentage)}></div>
            </div>
            <div class="result-value">{ format!("{:.2}%", percentage) }</div>
        </div>
    }
}
