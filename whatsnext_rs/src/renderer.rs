use itertools::Itertools;

use crate::Item;

pub struct HtmlRenderer;

impl HtmlRenderer {
    // 値はエスケープせずそのまま埋め込む
    pub fn render_anchor(item: &Item) -> String {
        format!(
            r#"<a href="{}" alt="{}">{}</a><br />"#,
            item.url, item.body, item.url_title
        )
    }

    pub fn render_page(items: &[Item]) -> String {
        let anchors = items.iter().map(Self::render_anchor).join("\n");

        // 原文ママのテンプレート
        format!(
            r#"<html>
  <head><title>Whitehouse Data</title></head>
  <body>
  <h2>Economic Futures from the Whitehouse"</h2>
  {}
  </body>
<html>
"#,
            anchors
        )
    }
}
