//! Upload/result state machine behind the upload form.
//!
//! The browser side owns the file handle, the preview reader and the
//! request future; every state change goes through [`FormState`].

use crate::api::Prediction;
use crate::config::{BannerStyle, FormConfig};
use crate::error::UploadError;
use crate::preview::SelectedFile;
use log::debug;

#[derive(Debug, Clone, Copy, PartialEq, Eq, strum_macros::AsRefStr, strum_macros::Display)]
#[strum(serialize_all = "kebab-case")]
pub enum Phase {
    Idle,
    Submitting,
    Result,
    Error,
}

/// Issued per selection; a preview only lands if its ticket is still current.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PreviewTicket {
    generation: u64,
}

/// Issued per dispatched request.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SubmitTicket {
    request_id: u64,
}

impl SubmitTicket {
    pub fn request_id(&self) -> u64 {
        self.request_id
    }
}

/// Result banner as it should be rendered.
#[derive(Debug, Clone, PartialEq)]
pub struct Banner<'a> {
    pub label: &'a str,
    /// Probability of `label`, in `0.0..=1.0`.
    pub confidence: Option<f32>,
    pub alarming: bool,
    pub style: &'a BannerStyle,
}

impl Banner<'_> {
    pub fn text(&self) -> String {
        format!("{} Result: {}", self.style.icon, self.label)
    }

    pub fn confidence_text(&self) -> Option<String> {
        self.confidence.map(|c| format!(" ({:.1}%)", c * 100.0))
    }
}

#[derive(Debug, Default)]
pub struct FormState {
    selected: Option<SelectedFile>,
    preview: Option<String>,
    result: Option<Prediction>,
    error: Option<UploadError>,
    loading: bool,
    generation: u64,
    last_request: u64,
    in_flight: Option<u64>,
}

impl FormState {
    pub fn new() -> Self {
        Self::default()
    }

    /// Replaces the selection and drops any outcome of the previous one.
    ///
    /// Returns a ticket when a preview read should be started. Any ticket
    /// handed out earlier is invalidated.
    pub fn select_file(&mut self, file: Option<SelectedFile>) -> Option<PreviewTicket> {
        self.generation += 1;
        self.result = None;
        self.error = None;
        self.preview = None;

        debug!(
            "Selection #{}: {}",
            self.generation,
            file.as_ref().map_or("<none>", |f| f.name.as_str())
        );

        self.selected = file;
        self.selected.as_ref().map(|_| PreviewTicket {
            generation: self.generation,
        })
    }

    /// Stores a finished preview. Returns false if the selection moved on.
    pub fn apply_preview(&mut self, ticket: PreviewTicket, data_uri: String) -> bool {
        if ticket.generation != self.generation || self.selected.is_none() {
            debug!("Discarding stale preview #{}", ticket.generation);
            return false;
        }
        self.preview = Some(data_uri);
        true
    }

    /// Notes a failed preview read. Returns true if it belonged to the
    /// current selection; the preview stays unset either way.
    pub fn preview_failed(&self, ticket: PreviewTicket) -> bool {
        ticket.generation == self.generation && self.selected.is_some()
    }

    /// Starts a submit attempt.
    ///
    /// Without a file this records the validation error and returns `None`;
    /// no request may be sent. While a request is in flight it is a no-op.
    pub fn begin_submit(&mut self) -> Option<SubmitTicket> {
        if self.loading {
            debug!("Submit ignored, request #{} in flight", self.last_request);
            return None;
        }
        if self.selected.is_none() {
            self.error = Some(UploadError::NoFileSelected);
            return None;
        }

        self.loading = true;
        self.error = None;
        self.result = None;
        self.last_request += 1;
        self.in_flight = Some(self.last_request);

        Some(SubmitTicket {
            request_id: self.last_request,
        })
    }

    /// Records the outcome of a request. Returns false for unknown tickets.
    pub fn settle(
        &mut self,
        ticket: SubmitTicket,
        outcome: Result<Prediction, UploadError>,
    ) -> bool {
        if self.in_flight != Some(ticket.request_id) {
            debug!("Ignoring settlement of request #{}", ticket.request_id);
            return false;
        }

        self.in_flight = None;
        self.loading = false;
        match outcome {
            Ok(prediction) => {
                self.result = Some(prediction);
                self.error = None;
            }
            Err(err) => {
                self.result = None;
                self.error = Some(err);
            }
        }
        true
    }

    pub fn preview(&self) -> Option<&str> {
        self.preview.as_deref()
    }

    /// Empty when there is no error.
    pub fn error_message(&self) -> String {
        self.error.as_ref().map(ToString::to_string).unwrap_or_default()
    }

    pub fn is_loading(&self) -> bool {
        self.loading
    }

    pub fn phase(&self) -> Phase {
        if self.loading {
            Phase::Submitting
        } else if self.error.is_some() {
            Phase::Error
        } else if self.result.is_some() {
            Phase::Result
        } else {
            Phase::Idle
        }
    }

    pub fn submit_label(&self) -> &'static str {
        if self.loading { "Analyzing..." } else { "Upload Image" }
    }

    pub fn banner<'a>(&'a self, config: &'a FormConfig) -> Option<Banner<'a>> {
        let prediction = self.result.as_ref()?;
        Some(Banner {
            label: &prediction.label,
            confidence: prediction.label_confidence(&config.positive_label),
            alarming: prediction.is_positive(&config.positive_label),
            style: config.banner_style(&prediction.label),
        })
    }
}

#[cfg(test)]
impl FormState {
    fn selected_file(&self) -> Option<&SelectedFile> {
        self.selected.as_ref()
    }

    /// Empty when there is no successful prediction.
    fn prediction_label(&self) -> &str {
        self.result.as_ref().map_or("", |p| p.label.as_str())
    }

    fn error(&self) -> Option<&UploadError> {
        self.error.as_ref()
    }
}
