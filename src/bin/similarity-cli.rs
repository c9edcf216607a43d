use clap::Parser;
use serde_json::{json, Value};

#[derive(Parser)]
#[command(name = "similarity-cli")]
#[command(about = "Ask a running similarity proxy how close a word is to its reference word", long_about = None)]
struct Cli {
    #[arg(short, long, default_value = "http://localhost:8000")]
    url: String,

    /// Send the word as a JSON body instead of a query parameter
    #[arg(short, long)]
    post: bool,

    /// Word to compare
    word: String,
}

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    let cli = Cli::parse();
    let client = reqwest::Client::new();

    let request = if cli.post {
        client.post(&cli.url).json(&json!({ "value": cli.word }))
    } else {
        client.get(&cli.url).query(&[("value", cli.word.as_str())])
    };

    let res = request.send().await?;
    let status = res.status();
    let body: Value = res.json().await?;

    if !status.is_success() {
        eprintln!("Error: proxy returned status {}", status);
        eprintln!("{}", serde_json::to_string_pretty(&body)?);
        std::process::exit(1);
    }

    println!("{}", serde_json::to_string_pretty(&body)?);
    Ok(())
}
