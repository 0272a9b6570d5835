//! Local test runner: invoke either handler with a JSON event file,
//! without a hosting environment.
//!
//! Secrets come from the local override file (`local_secrets.json` by
//! default); the managed store is only contacted if that file is missing.

use std::path::PathBuf;

use clap::{Parser, ValueEnum};
use waypost_core::{ApiRequest, EventRequest, InvocationContext};
use waypost_functions::{api, event, Bootstrap, SecretsConfig};

#[derive(Copy, Clone, Debug, ValueEnum)]
enum Function {
    Api,
    Event,
}

#[derive(Parser)]
#[command(
    name = "local-invoke",
    about = "Invoke a Waypost handler locally with a JSON event file"
)]
struct Args {
    /// Which handler to invoke.
    #[arg(long, short, value_enum)]
    function: Function,

    /// Path to the JSON event payload.
    #[arg(long, short)]
    event_file: PathBuf,

    /// Local secrets file consulted instead of the managed store.
    #[arg(long, default_value = "local_secrets.json")]
    secrets_file: PathBuf,
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let args = Args::parse();

    let mut config = SecretsConfig::from_env();
    config.local_secrets_path = args.secrets_file;
    let bootstrap = Bootstrap::init(config).await?;

    let raw = std::fs::read_to_string(&args.event_file)?;
    let ctx = InvocationContext::generated();

    let (status_code, body) = match args.function {
        Function::Api => {
            let request: ApiRequest = serde_json::from_str(&raw)?;
            let response = api::manager::handle(&bootstrap.api_router, &ctx, &request).await;
            (response.status_code, response.body)
        }
        Function::Event => {
            let request: EventRequest = serde_json::from_str(&raw)?;
            let response = event::manager::handle(&bootstrap.event_router, &ctx, &request).await;
            (response.status_code, response.body)
        }
    };

    println!("Status Code: {status_code}");
    println!("Response Body: {body}");
    Ok(())
}
