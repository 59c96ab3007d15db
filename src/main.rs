use std::sync::Arc;

use tokio::sync::Notify;

use webgate::config::{AppState, Config};
use webgate::host::DetachedHost;
use webgate::{logger, server};

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let cfg = Config::load()?;
    logger::init(&cfg)?;

    let mut runtime_builder = tokio::runtime::Builder::new_multi_thread();
    runtime_builder.enable_all();
    if let Some(workers) = cfg.server.workers {
        runtime_builder.worker_threads(workers);
    }
    let runtime = runtime_builder.build()?;

    runtime.block_on(async_main(cfg))
}

async fn async_main(cfg: Config) -> Result<(), Box<dyn std::error::Error>> {
    let addr = cfg.socket_addr()?;

    let listener = match server::create_reusable_listener(addr) {
        Ok(listener) => listener,
        Err(e) => {
            logger::log_bind_failed(&addr, &e);
            return Err(e.into());
        }
    };

    // Standalone runs have no game server to bridge to.
    let state = Arc::new(AppState::new(cfg, Arc::new(DetachedHost))?);
    logger::log_gateway_start(&addr, &state.config);

    let shutdown = Arc::new(Notify::new());
    let shutdown_trigger = Arc::clone(&shutdown);
    tokio::spawn(async move {
        if tokio::signal::ctrl_c().await.is_ok() {
            shutdown_trigger.notify_one();
        }
    });

    server::run(listener, state, shutdown).await;
    Ok(())
}
