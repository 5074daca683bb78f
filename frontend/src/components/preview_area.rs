use super::super::UploadForm;
use yew::prelude::*;

pub fn render_preview_area(model: &UploadForm) -> Html {
    match model.state.preview() {
        Some(uri) => html! {
            <img id="actual-image-preview" class="preview" src={uri.to_string()} alt="preview" />
        },
        None => html! {},
    }
}
