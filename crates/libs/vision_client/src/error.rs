use thiserror::Error;

#[derive(Error, Debug)]
pub enum VisionError {
    #[error("HTTP request failed: {0}")]
    Http(#[from] reqwest::Error),

    #[error("Analysis service returned an error (status {status}): {body}")]
    Api {
        status: reqwest::StatusCode,
        body: String,
    },
}
