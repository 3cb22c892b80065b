use whatsnext_rs::clients::IClient;
use whatsnext_rs::HtmlRenderer;

fn main() {
    let items = whatsnext_rs::clients::SampleClient::default()
        .fetch_items()
        .unwrap();
    println!("{}", HtmlRenderer::render_page(&items));
}
