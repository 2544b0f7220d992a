use super::disease_predictor::{DiseasePredictor, Msg};
use super::utils::{debounce, truncate_name};
use shared::UploadFile;
use yew::prelude::*;

pub fn render_preview_area(model: &DiseasePredictor, ctx: &Context<DiseasePredictor>) -> Html {
    let Some(url) = model.flow.preview() else {
        return html! {};
    };

    let link = ctx.link().clone();
    let file_name = model
        .flow
        .selected_file()
        .map(|file| file.name())
        .unwrap_or_default();

    html! {
        <div id="preview-container">
            <p class="preview-title">{"Image Preview:"}</p>
            <div class="preview-frame">
                <img id="actual-image-preview" src={url.to_string()} alt={file_name.clone()} />
            </div>
            <p class="preview-filename" title={file_name.clone()}>{ truncate_name(&file_name, 40) }</p>
            <button
                type="button"
                id="clear-image-btn"
                class="analyze-btn outline"
                disabled={!model.flow.can_clear()}
                onclick={debounce(300, move || link.send_message(Msg::Clear))}
            >
                <i class="fa-solid fa-trash"></i>{" Clear Image"}
            </button>
        </div>
    }
}

pub fn render_submit_button(model: &DiseasePredictor) -> Html {
    let in_flight = model.flow.status().is_in_flight();

    html! {
        <>
            <button
                type="submit"
                class="analyze-btn"
                disabled={!model.flow.can_submit()}
            >
                { render_submit_button_content(in_flight) }
            </button>
            if in_flight {
                <div class="progress"><div class="progress-fill pulse"></div></div>
            }
        </>
    }
}

fn render_submit_button_content(in_flight: bool) -> Html {
    if in_flight {
        html! { <><i class="fa-solid fa-spinner fa-spin"></i>{" Analyzing Image..."}</> }
    } else {
        html! { <><i class="fa-solid fa-magnifying-glass"></i>{" Predict Disease"}</> }
    }
}
