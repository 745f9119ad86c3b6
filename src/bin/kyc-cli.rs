use clap::Parser;
use serde_json::{json, Value};

#[derive(Parser)]
#[command(name = "kyc-cli")]
#[command(about = "Submit a KYC analysis request to a running kyc-analyzer", long_about = None)]
struct Cli {
    #[arg(short, long, default_value = "http://localhost:8080")]
    url: String,

    /// S3 bucket holding both images.
    #[arg(short, long)]
    bucket: String,

    /// Object key of the selfie.
    #[arg(short, long)]
    selfie: String,

    /// Object key of the identity document.
    #[arg(short, long)]
    document: String,
}

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    let cli = Cli::parse();
    let client = reqwest::Client::new();

    let res = client
        .post(&cli.url)
        .json(&json!({
            "bucket": cli.bucket,
            "selfieImage": cli.selfie,
            "documentImage": cli.document,
        }))
        .send()
        .await?;

    let status = res.status();
    if !status.is_success() {
        eprintln!("Error: analyzer returned status {}", status);
        if let Ok(text) = res.text().await {
            if !text.is_empty() {
                eprintln!("Response: {}", text);
            }
        }
        return Ok(());
    }

    let json: Value = res.json().await?;
    println!("{}", serde_json::to_string_pretty(&json)?);
    Ok(())
}
