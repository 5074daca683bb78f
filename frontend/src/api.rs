use gloo_file::File as GlooFile;
use gloo_net::http::Request;
use gloo_timers::callback::Timeout;
use shared::{FormConfig, Prediction, Reply, UploadError, interpret_exchange};
use web_sys::{AbortController, FormData};

/// Posts `file` as a single multipart part and interprets the reply.
///
/// The request is aborted once `config.timeout_ms` elapses; an abort is
/// reported like any other failure to reach the server.
pub async fn request_prediction(
    config: &FormConfig,
    file: &GlooFile,
) -> Result<Prediction, UploadError> {
    let form_data = FormData::new()
        .map_err(|e| UploadError::Transport(format!("FormData unavailable: {:?}", e)))?;
    form_data
        .append_with_blob_and_filename(&config.field_name, file.as_ref(), &file.name())
        .map_err(|e| UploadError::Transport(format!("Failed to attach file: {:?}", e)))?;

    let controller = AbortController::new()
        .map_err(|e| UploadError::Transport(format!("AbortController unavailable: {:?}", e)))?;
    let _deadline = {
        let controller = controller.clone();
        let timeout_ms = config.timeout_ms;
        Timeout::new(timeout_ms, move || {
            log::warn!("Request timed out after {} ms", timeout_ms);
            controller.abort();
        })
    };

    log::info!("Sending request to: {}", config.endpoint);

    // The browser fills in `multipart/form-data; boundary=...` for FormData bodies.
    let request = Request::post(&config.endpoint)
        .abort_signal(Some(&controller.signal()))
        .body(form_data)
        .map_err(|e| UploadError::Transport(format!("Failed to build request: {}", e)))?;

    let reply = match request.send().await {
        Ok(response) => Ok(Reply {
            status: response.status(),
            body: response.text().await.map_err(|e| e.to_string()),
        }),
        Err(e) => Err(format!("Network error: {}", e)),
    };

    interpret_exchange(reply)
}
