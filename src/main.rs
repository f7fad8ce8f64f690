#[tokio::main]
async fn main() {
    tracing_subscriber::fmt().with_env_filter("info").init();

    if let Err(message) = n8n_console::routes::serve().await {
        eprintln!("failed to start console: {message}");
        std::process::exit(1);
    }
}
