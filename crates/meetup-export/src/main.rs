use anyhow::Result;
use meetup_export::{run_export, ExportConfig, MeetupClient};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

#[tokio::main]
async fn main() -> Result<()> {
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "meetup_export=info,meetup_types=info".into()),
        )
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .try_init()?;

    tracing::info!("Get data from Meetup API and write to CSV");

    let config = ExportConfig::default();
    let client = MeetupClient::new(config.base_url.clone());

    if let Err(e) = run_export(&client, &config).await {
        tracing::error!("{}", e);
        std::process::exit(1);
    }

    tracing::info!("Done.");
    Ok(())
}
