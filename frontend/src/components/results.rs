use super::super::UploadForm;
use shared::FormConfig;
use yew::prelude::*;

pub fn render_results(model: &UploadForm, config: &FormConfig) -> Html {
    let Some(banner) = model.state.banner(config) else {
        return html! {};
    };

    html! {
        <div
            class={classes!("result-box", if banner.alarming { "positive" } else { "negative" })}
            style={banner.style.inline_css()}
        >
            { banner.text() }
            {
                if let Some(confidence) = banner.confidence_text() {
                    html! { <span class="confidence">{ confidence }</span> }
                } else {
                    html! {}
                }
            }
        </div>
    }
}
