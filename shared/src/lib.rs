pub mod api;
pub mod config;
pub mod error;
pub mod preview;
pub mod state;

pub use api::{
    ErrorResponse, PredictResponse, Prediction, Reply, interpret_exchange, interpret_response,
};
pub use config::{BannerStyle, FormConfig, Palette};
pub use error::{ConfigError, UploadError};
pub use preview::{SelectedFile, data_uri};
pub use state::{Banner, FormState, Phase, PreviewTicket, SubmitTicket};
