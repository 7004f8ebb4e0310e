//! Blood Group Classifier Common Library
//!
//! CLIとWeb(WASM)で共有される型・検証・画面状態

pub mod controller;
pub mod error;
pub mod render;
pub mod types;
pub mod validation;

pub use controller::{
    Completion, PendingPrediction, PreviewTicket, RequestTicket, SelectedFile, UploadController,
    ViewState,
};
pub use error::{PredictError, UploadError};
pub use render::{PredictionRow, ResultView, DETAILS_HEADER};
pub use types::{
    HealthStatus, Prediction, PredictionResponse, CLASS_LABELS, HEALTH_PATH, PREDICTION_FAILED_MESSAGE,
    PREDICT_PATH, UPLOAD_FIELD_NAME,
};
pub use validation::{
    mime_type_for_extension, validate_file, FileMeta, ALLOWED_EXTENSIONS, ALLOWED_MIME_TYPES,
    MAX_FILE_SIZE,
};
