mod config;
mod render;
mod routes;
mod services;
mod state;
mod workspace;

#[tokio::main]
async fn main() {
    dotenvy::dotenv().ok();
    tracing_subscriber::fmt::init();

    let config = config::AppConfig::from_env().expect("invalid configuration");
    let state = state::AppState::with_stub_generator(config.cookie_secure);

    // Spawn background idle-session sweeper.
    let _sweeper = services::session::spawn_session_sweeper(
        state.sessions.clone(),
        config.session_sweep_interval,
        config.session_idle_ttl,
    );

    let app = routes::app(state);
    let listener = tokio::net::TcpListener::bind((config.bind_addr, config.port))
        .await
        .expect("failed to bind");

    let port = config.port;
    tracing::info!(%port, bind_addr = %config.bind_addr, "neocel listening");
    axum::serve(listener, app).await.expect("server failed");
}
