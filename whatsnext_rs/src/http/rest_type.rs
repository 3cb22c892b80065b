use serde::{Deserialize, Serialize};

#[derive(Debug, Serialize, Deserialize)]
pub struct ItemType {
    pub url: String,

    pub body: String,

    pub url_title: String,
}
