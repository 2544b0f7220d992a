use super::crop_recommender::{CropRecommender, Msg};
use super::markdown::render_markdown;
use super::utils::debounce;
use shared::FieldName;
use strum::IntoEnumIterator;
use web_sys::HtmlInputElement;
use yew::prelude::*;

pub fn render_parameter_form(model: &CropRecommender, ctx: &Context<CropRecommender>) -> Html {
    let link = ctx.link().clone();
    let in_flight = model.flow.status().is_in_flight();

    let onsubmit = link.callback(|e: SubmitEvent| {
        e.prevent_default();
        Msg::Submit
    });

    html! {
        <form class="parameter-form" {onsubmit}>
            { for FieldName::iter().map(|field| render_field(model, ctx, field)) }

            <div class="button-container">
                <button type="submit" class="analyze-btn" disabled={in_flight}>
                    { if in_flight { "Generating..." } else { "Get Recommendations" } }
                </button>
                <button
                    type="button"
                    class="analyze-btn secondary"
                    onclick={debounce(300, move || link.send_message(Msg::Clear))}
                >
                    {"Clear"}
                </button>
            </div>
        </form>
    }
}

fn render_field(model: &CropRecommender, ctx: &Context<CropRecommender>, field: FieldName) -> Html {
    let name = field.to_string();
    let oninput = ctx.link().callback(|e: InputEvent| {
        let input: HtmlInputElement = e.target_unchecked_into();
        Msg::FieldChanged(input.name(), input.value())
    });

    html! {
        <div class="form-field" key={name.clone()}>
            <label for={name.clone()}>{ format!("{}:", field.form_label()) }</label>
            <input
                type="number"
                id={name.clone()}
                name={name}
                step={field.step()}
                value={model.flow.inputs().get(field).to_string()}
                placeholder={field.placeholder()}
                {oninput}
                required=true
            />
        </div>
    }
}

pub fn render_recommendation(model: &CropRecommender) -> Html {
    let Some(text) = model.flow.response_text() else {
        return html! {};
    };

    html! {
        <div class="recommendation">
            <h2>{"Recommendations:"}</h2>
            <div class="recommendation-body">
                { render_markdown(text) }
            </div>
        </div>
    }
}
