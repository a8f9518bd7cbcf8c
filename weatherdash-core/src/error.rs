use thiserror::Error;

/// Errors surfaced by the core pipeline.
///
/// Either a full reading makes it through to rendering or one of these
/// comes back; there is no partial data path.
#[derive(Debug, Error)]
pub enum DashboardError {
    /// Transport failure or non-success HTTP status from the provider.
    #[error("weather provider unavailable{}: {detail}", fmt_status(.status))]
    ProviderUnavailable { status: Option<u16>, detail: String },

    /// A required field was missing from an otherwise well-formed response.
    #[error("weather data unavailable: response is missing `{field}`")]
    DataUnavailable { field: &'static str },

    /// The response body was not the JSON shape we expect.
    #[error("failed to decode provider response: {0}")]
    Decode(#[from] serde_json::Error),

    #[error("configuration error: {0}")]
    Config(String),
}

fn fmt_status(status: &Option<u16>) -> String {
    match status {
        Some(code) => format!(" (status {code})"),
        None => String::new(),
    }
}
