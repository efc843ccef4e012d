mod main_lib;

use clap::Parser;
use main_lib::{init_tracing, Args};
use openfigi::{ClientConfig, OpenFigiClient};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    dotenvy::dotenv().ok();
    let args = Args::parse();
    init_tracing();

    let config = args.apply(ClientConfig::from_env());
    let client = OpenFigiClient::from_config(&config)?;
    let request = args.request()?;

    tracing::debug!("Looking up {} {}", args.id_type, args.value);
    let records = client.execute(request).await?;
    println!("{}", serde_json::to_string_pretty(&records)?);
    Ok(())
}
