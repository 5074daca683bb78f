use super::super::{Msg, UploadForm};
use super::preview_area::render_preview_area;
use super::utils::first_file;
use web_sys::HtmlInputElement;
use yew::prelude::*;

pub fn render_upload_section(model: &UploadForm, ctx: &Context<UploadForm>) -> Html {
    let config = &ctx.props().config;
    let link = ctx.link();

    let handle_change = link.callback(|e: Event| {
        let input: HtmlInputElement = e.target_unchecked_into();
        Msg::FileChosen(first_file(&input))
    });

    let handle_submit = link.callback(|e: SubmitEvent| {
        e.prevent_default();
        Msg::Submit
    });

    html! {
        <form class="upload-form" onsubmit={handle_submit}>
            <input
                type="file"
                id="file-input"
                class="file-input"
                accept={config.accept.clone()}
                onchange={handle_change}
            />

            { render_preview_area(model) }

            <button type="submit" class="upload-btn" disabled={model.state.is_loading()}>
                { model.state.submit_label() }
            </button>
        </form>
    }
}
