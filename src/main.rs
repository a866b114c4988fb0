use std::path::PathBuf;

use anyhow::Result;
use canova::engine::EngineApp;
use canova::engine::core::EngineConfig;
use canova::game::CanovaGame;
use canova::game::config::GameConfig;

fn main() -> Result<()> {
    init_tracing();

    // Optional first argument: path to a RON game config.
    let config = match std::env::args_os().nth(1).map(PathBuf::from) {
        Some(path) => GameConfig::load(&path)?,
        None => GameConfig::default(),
    };

    let app = EngineApp::new(EngineConfig::default(), CanovaGame::new(config));
    app.run()
}

fn init_tracing() {
    let subscriber = tracing_subscriber::FmtSubscriber::builder()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .finish();

    if tracing::subscriber::set_global_default(subscriber).is_err() {
        eprintln!("tracing subscriber already set");
    }
}
