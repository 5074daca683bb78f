use super::super::{Msg, UploadForm};
use crate::api::request_prediction;
use gloo_file::File as GlooFile;
use gloo_file::callbacks::{FileReader, read_as_bytes};
use shared::{Prediction, PreviewTicket, SelectedFile, SubmitTicket, UploadError, data_uri};
use wasm_bindgen_futures::spawn_local;
use yew::prelude::*;

pub fn handle_file_chosen(
    model: &mut UploadForm,
    ctx: &Context<UploadForm>,
    file: Option<GlooFile>,
) -> bool {
    // Dropping a pending reader aborts it.
    model.preview_reader = None;

    let selected = file
        .as_ref()
        .map(|f| SelectedFile::new(f.name(), f.raw_mime_type(), f.size()));
    let ticket = model.state.select_file(selected);
    model.file = file;

    if let (Some(ticket), Some(file)) = (ticket, model.file.as_ref()) {
        model.preview_reader = Some(start_preview(ctx, ticket, file));
    }

    true
}

fn start_preview(ctx: &Context<UploadForm>, ticket: PreviewTicket, file: &GlooFile) -> FileReader {
    let link = ctx.link().clone();
    let mime_type = file.raw_mime_type();

    read_as_bytes(file, move |result| match result {
        Ok(bytes) => link.send_message(Msg::PreviewReady(ticket, data_uri(&mime_type, &bytes))),
        Err(e) => link.send_message(Msg::PreviewFailed(ticket, format!("{:?}", e))),
    })
}

pub fn handle_preview_ready(model: &mut UploadForm, ticket: PreviewTicket, uri: String) -> bool {
    if model.state.apply_preview(ticket, uri) {
        model.preview_reader = None;
        true
    } else {
        false
    }
}

pub fn handle_preview_failed(
    model: &mut UploadForm,
    ticket: PreviewTicket,
    reason: String,
) -> bool {
    log::warn!("Preview could not be read ({:?}): {}", ticket, reason);
    if model.state.preview_failed(ticket) {
        model.preview_reader = None;
    }
    false
}

pub fn handle_submit(model: &mut UploadForm, ctx: &Context<UploadForm>) -> bool {
    let Some(ticket) = model.state.begin_submit() else {
        return true;
    };

    match model.file.clone() {
        Some(file) => send_prediction_request(ctx, ticket, file),
        None => {
            model.state.settle(ticket, Err(UploadError::NoFileSelected));
        }
    }

    true
}

pub fn handle_settled(
    model: &mut UploadForm,
    ticket: SubmitTicket,
    outcome: Result<Prediction, UploadError>,
) -> bool {
    model.state.settle(ticket, outcome)
}

pub fn send_prediction_request(ctx: &Context<UploadForm>, ticket: SubmitTicket, file: GlooFile) {
    let link = ctx.link().clone();
    let config = ctx.props().config.clone();

    spawn_local(async move {
        let outcome = request_prediction(&config, &file).await;

        match &outcome {
            Ok(prediction) => {
                log::info!("Request #{} -> {}", ticket.request_id(), prediction.label)
            }
            Err(e) => log::error!("Request #{} failed: {}", ticket.request_id(), e.detail()),
        }

        link.send_message(Msg::Settled(ticket, outcome));
    });
}
