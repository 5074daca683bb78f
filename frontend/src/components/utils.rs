use super::super::UploadForm;
use gloo_file::File as GlooFile;
use web_sys::HtmlInputElement;
use yew::prelude::*;

pub fn first_file(input: &HtmlInputElement) -> Option<GlooFile> {
    input
        .files()
        .and_then(|files| files.item(0))
        .map(GlooFile::from)
}

pub fn render_spinner(model: &UploadForm) -> Html {
    if model.state.is_loading() {
        html! { <div class="spinner"></div> }
    } else {
        html! {}
    }
}

pub fn render_error_message(model: &UploadForm) -> Html {
    let message = model.state.error_message();
    if message.is_empty() {
        html! {}
    } else {
        html! { <p class="error-message">{ message }</p> }
    }
}
