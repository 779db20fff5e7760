use dailytally::commands::Cli;
use dailytally::libs::messages::macros::is_debug_mode;
use tracing_subscriber::{fmt, layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

fn setup_logging() {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("dailytally=debug,info"));
    tracing_subscriber::registry().with(filter).with(fmt::layer().with_target(false)).init();
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    dotenv::dotenv().ok();
    if is_debug_mode() {
        setup_logging();
    }

    Cli::menu().await
}
