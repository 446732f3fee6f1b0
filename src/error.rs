#[derive(thiserror::Error, Debug)]
pub enum ApiError {
    #[error("request failed: {0}")]
    Request(#[from] gloo_net::Error),
    #[error("server responded with status {0}")]
    Status(u16),
}
