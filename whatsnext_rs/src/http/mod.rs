mod rest_type;
mod whatsnext;

pub use rest_type::ItemType;
pub use whatsnext::{WhatsNext, WHATSNEXT_URL};

#[derive(Debug, thiserror::Error)]
pub enum FetchError {
    #[error("Server status code {0}")]
    Status(u16),

    #[error(transparent)]
    Request(#[from] reqwest::Error),

    #[error(transparent)]
    Decode(#[from] serde_json::Error),
}
