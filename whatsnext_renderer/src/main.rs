use clap::Parser;
use url::Url;
use whatsnext_rs::http::{WhatsNext, WHATSNEXT_URL};
use whatsnext_rs::HtmlRenderer;

/// Fetches the whatsnext feed and renders it as an HTML page
#[derive(Parser, Debug)]
#[command(version)]
struct Args {
    /// ex. --base-url http://localhost:8080/facts/json/whatsnext/economy
    #[arg(long = "base-url", default_value = WHATSNEXT_URL)]
    base_url: String,
}

async fn run() {
    let args = Args::parse();

    let base_url = match Url::parse(&args.base_url) {
        Ok(base_url) => base_url,
        Err(error) => {
            eprintln!("{}", error);
            std::process::exit(1);
        }
    };

    let client = WhatsNext::new(base_url);
    let items = match client.fetch_items().await {
        Ok(items) => items,
        // ステータスエラーは "Server status code <N>" と表示される
        Err(error) => {
            eprintln!("{}", error);
            std::process::exit(1);
        }
    };

    // ページの出力
    println!("{}", HtmlRenderer::render_page(&items));
}

#[tokio::main]
async fn main() {
    run().await;
}
