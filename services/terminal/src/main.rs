use terminal::config::Config;
use terminal::market::{MarketState, SeedParams};
use terminal::router::create_router;
use terminal::state::AppState;
use terminal::ticker;

use tokio::net::TcpListener;

#[tokio::main]
async fn main() -> Result<(), anyhow::Error> {
    // Initialize tracing
    tracing_subscriber::fmt::init();

    tracing::info!("Starting terminal backend service");

    let config = Config::from_env()?;

    // Seed the market with synthetic depth around the initial price, or
    // start empty when no seed levels are configured.
    let market = if config.seed_levels > 0 {
        MarketState::seeded(&SeedParams {
            initial_price: config.initial_price,
            tick: config.tick_size,
            levels_per_side: config.seed_levels,
            level_quantity: config.seed_quantity,
            timestamp: ticker::now_nanos(),
        })?
    } else {
        MarketState::new()
    };

    let state = AppState::new(market);

    // Background synthetic price ticks
    tokio::spawn(ticker::run(
        state.clone(),
        config.tick_interval,
        config.tick_seed,
        config.initial_price,
    ));

    let app = create_router(state);

    let listener = TcpListener::bind(config.bind).await?;
    tracing::info!("Listening on {}", config.bind);
    axum::serve(listener, app).await?;

    Ok(())
}
