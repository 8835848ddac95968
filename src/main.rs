use tracing::{error, info};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};
use warden::bot;
use warden::config::{denylist, Settings};

#[tokio::main]
async fn main() {
    // Load .env file if present
    dotenvy::dotenv().ok();

    // Initialize tracing
    tracing_subscriber::registry()
        .with(EnvFilter::from_default_env())
        .with(tracing_subscriber::fmt::layer())
        .init();

    info!("Starting Warden Discord Bot");

    // Load settings
    let settings = match Settings::from_env() {
        Ok(s) => s,
        Err(e) => {
            error!("Failed to load settings: {}", e);
            std::process::exit(1);
        }
    };

    // Load the denylist once; the bot is useless without it
    let denylist = match denylist::load(&settings.denylist_path) {
        Ok(d) => d,
        Err(e) => {
            error!(
                "Failed to load denylist from {}: {}",
                settings.denylist_path, e
            );
            std::process::exit(1);
        }
    };

    info!("Loaded {} denylist terms", denylist.len());

    // Start the bot
    if let Err(e) = bot::framework::run(settings, denylist).await {
        error!("Bot error: {}", e);
        std::process::exit(1);
    }
}
