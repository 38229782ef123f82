use account_lifecycle::{LifecycleService, Settings, SupabaseProviders};
use color_eyre::eyre::Result;
use tracing_error::ErrorLayer;
use tracing_subscriber::{EnvFilter, fmt, layer::SubscriberExt, util::SubscriberInitExt};

#[tokio::main]
async fn main() -> Result<()> {
    color_eyre::install()?;
    init_tracing()?;

    let settings = Settings::load()?;
    let missing_for_eraser = settings.missing_for_eraser();
    if !missing_for_eraser.is_empty() {
        tracing::warn!(
            missing = %missing_for_eraser.join(", "),
            "Account deletion will answer 500 until configured"
        );
    }
    let missing_for_otp = settings.missing_for_otp();
    if !missing_for_otp.is_empty() {
        tracing::warn!(
            missing = %missing_for_otp.join(", "),
            "OTP delivery will answer 500 until configured"
        );
    }

    let listener = tokio::net::TcpListener::bind(&settings.service.address).await?;
    let providers = SupabaseProviders::new(settings)?;

    tracing::info!("Starting account service...");
    LifecycleService::new(providers)
        .run_standalone(listener)
        .await?;

    Ok(())
}

pub fn init_tracing() -> Result<()> {
    let fmt_layer = fmt::layer().compact();

    let filter_layer = EnvFilter::try_from_default_env().or_else(|_| EnvFilter::try_new("info"))?;

    tracing_subscriber::registry()
        .with(filter_layer)
        .with(fmt_layer)
        .with(ErrorLayer::default())
        .init();

    Ok(())
}
