use url::Url;

use super::FetchError;
use crate::Item;

pub const WHATSNEXT_URL: &str = "http://www.whitehouse.gov/facts/json/whatsnext/economy";

pub struct WhatsNext {
    base_url: Url,
}

impl WhatsNext {
    pub fn new(base_url: Url) -> Self {
        Self { base_url }
    }

    pub async fn fetch_items(&self) -> Result<Vec<Item>, FetchError> {
        let response = reqwest::get(self.base_url.as_str()).await?;

        // 成功ステータスでなければコードを添えてエラー
        if !response.status().is_success() {
            return Err(FetchError::Status(response.status().as_u16()));
        }

        let body = response.text().await?;
        let items = crate::deserialize(&body)?;
        Ok(items)
    }
}
