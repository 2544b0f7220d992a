use super::disease_predictor::{DiseasePredictor, Msg};
use super::utils::debounce;
use crate::browser_file::BrowserFile;
use wasm_bindgen::JsCast;
use web_sys::HtmlInputElement;
use yew::prelude::*;

const FILE_INPUT_ID: &str = "image-upload";

pub fn render_upload_section(model: &DiseasePredictor, ctx: &Context<DiseasePredictor>) -> Html {
    // The picker is replaced by the preview once a file is chosen.
    if model.flow.selected_file().is_some() {
        return html! {};
    }

    let link = ctx.link();
    let handle_change = link.batch_callback(|e: Event| {
        let input: HtmlInputElement = e.target_unchecked_into();
        let chosen = input
            .files()
            .and_then(|files| files.item(0))
            .map(BrowserFile::from);

        input.set_value("");
        chosen.map(Msg::FileChosen)
    });

    let trigger_file_input = Callback::from(|_| {
        let input = web_sys::window()
            .and_then(|window| window.document())
            .and_then(|document| document.get_element_by_id(FILE_INPUT_ID));
        if let Some(input) = input {
            if let Ok(html_input) = input.dyn_into::<web_sys::HtmlElement>() {
                html_input.click();
            }
        }
    });

    html! {
        <div class="upload-section">
            <input
                type="file"
                id={FILE_INPUT_ID}
                accept="image/*"
                style="display: none;"
                onchange={handle_change}
            />

            <div
                id="drop-zone"
                class="upload-area"
                onclick={debounce(300, {
                    let trigger_file_input = trigger_file_input.clone();
                    move || trigger_file_input.emit(())
                })}
            >
                <div class="upload-placeholder">
                    <i class="fa-solid fa-upload"></i>
                    <p>{"Click to upload an image"}</p>
                    <p class="file-types">{"JPG, PNG, GIF up to 10MB"}</p>
                </div>
            </div>
        </div>
    }
}
