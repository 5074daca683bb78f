mod api;
mod components;

use components::{handlers, header, results, upload_section, utils};
use gloo_file::File as GlooFile;
use gloo_file::callbacks::FileReader;
use shared::{FormConfig, FormState, Prediction, PreviewTicket, SubmitTicket, UploadError};
use yew::prelude::*;

// Yew msg components
pub enum Msg {
    // File operations
    FileChosen(Option<GlooFile>),
    PreviewReady(PreviewTicket, String),
    PreviewFailed(PreviewTicket, String),

    // Prediction
    Submit,
    Settled(SubmitTicket, Result<Prediction, UploadError>),
}

#[derive(Properties, PartialEq)]
pub struct UploadFormProps {
    #[prop_or_default]
    pub config: FormConfig,
}

// Main component
pub struct UploadForm {
    state: FormState,
    file: Option<GlooFile>,
    preview_reader: Option<FileReader>,
}

impl Component for UploadForm {
    type Message = Msg;
    type Properties = UploadFormProps;

    fn create(_ctx: &Context<Self>) -> Self {
        Self {
            state: FormState::new(),
            file: None,
            preview_reader: None,
        }
    }

    fn update(&mut self, ctx: &Context<Self>, msg: Self::Message) -> bool {
        match msg {
            Msg::FileChosen(file) => handlers::handle_file_chosen(self, ctx, file),
            Msg::PreviewReady(ticket, uri) => handlers::handle_preview_ready(self, ticket, uri),
            Msg::PreviewFailed(ticket, reason) => {
                handlers::handle_preview_failed(self, ticket, reason)
            }
            Msg::Submit => handlers::handle_submit(self, ctx),
            Msg::Settled(ticket, outcome) => handlers::handle_settled(self, ticket, outcome),
        }
    }

    fn view(&self, ctx: &Context<Self>) -> Html {
        let config = &ctx.props().config;

        html! {
            <div class="container">
                <div class="overlay">
                    <div class={classes!("card", self.state.phase().to_string())}>
                        { header::render_header(&config.title) }
                        { upload_section::render_upload_section(self, ctx) }
                        { utils::render_spinner(self) }
                        { results::render_results(self, config) }
                        { utils::render_error_message(self) }
                    </div>
                </div>
            </div>
        }
    }
}

fn load_config() -> FormConfig {
    match FormConfig::from_yaml(include_str!("../../config/form.yaml")) {
        Ok(config) => config,
        Err(e) => {
            log::error!("{}; falling back to defaults", e);
            FormConfig::default()
        }
    }
}

fn main() {
    wasm_logger::init(wasm_logger::Config::default());
    log::info!("App starting...");
    yew::Renderer::<UploadForm>::with_props(UploadFormProps {
        config: load_config(),
    })
    .render();
}
