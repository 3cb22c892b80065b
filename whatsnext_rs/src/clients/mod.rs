use crate::Item;

pub trait IClient {
    fn fetch_items(&mut self) -> Result<Vec<Item>, Box<dyn std::error::Error>>;
}

// ネットワークに出ずにフィードのサンプルを返すクライアント
#[derive(Default)]
pub struct SampleClient;

impl IClient for SampleClient {
    fn fetch_items(&mut self) -> Result<Vec<Item>, Box<dyn std::error::Error>> {
        let data = include_str!("example.json");
        let items = crate::deserialize(data)?;
        Ok(items)
    }
}

#[cfg(test)]
mod tests {
    use super::{IClient, SampleClient};

    #[test]
    fn fetch_items() {
        let items = SampleClient::default().fetch_items().unwrap();

        assert_eq!(items.len(), 3);
        assert_eq!(items[0].url_title, "Economic Growth");
        assert_eq!(items[2].url, "/facts/whatsnext/economy/trade");
    }
}
