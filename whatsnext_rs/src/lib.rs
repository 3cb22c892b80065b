mod renderer;

pub mod clients;
pub mod http;

use http::ItemType;
pub use renderer::HtmlRenderer;

// レンダリング対象のリンク
#[derive(Debug, Clone)]
pub struct Item {
    pub url: String,
    pub body: String,
    pub url_title: String,
}

impl Item {
    pub(crate) fn new(item_type: ItemType) -> Self {
        Self {
            url: item_type.url,
            body: item_type.body,
            url_title: item_type.url_title,
        }
    }
}

pub fn deserialize(str: &str) -> serde_json::Result<Vec<Item>> {
    let item_types = serde_json::from_str::<Vec<ItemType>>(str)?;
    let items = item_types.into_iter().map(Item::new).collect();
    Ok(items)
}
