//! SentiHotel: a hotel review sentiment page and the proxy that forwards
//! reviews to an external model server.

pub mod client;
pub mod config;
pub mod error;
pub mod extractors;
pub mod prediction;
pub mod routes;
pub mod telemetry;
pub mod ui;

pub use client::ModelServerClient;
pub use config::Config;
pub use error::{HotelResult, SentiHotelError};
pub use prediction::{Prediction, PredictionResult, Sentiment};
pub use routes::{router, AppState};
pub use ui::{render_prediction, request_prediction, ConfidenceBar, ReviewForm};
