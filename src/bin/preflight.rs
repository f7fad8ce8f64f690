use n8n_console::client::{API_KEY_VAR, API_URL_VAR};
use n8n_console::preflight::{self, PreflightSummary, ResolvedEnvironment};
use n8n_console::routes;
use tokio::io::{AsyncBufReadExt, BufReader};

#[tokio::main]
async fn main() {
    tracing_subscriber::fmt().with_env_filter("info").init();

    print_banner();

    let mut summary = PreflightSummary::default();

    summary.runtime_ok = check_runtime();
    if !summary.runtime_ok {
        std::process::exit(1);
    }

    summary.components_ok = check_components();
    if !summary.components_ok {
        std::process::exit(1);
    }

    let environment = check_environment();
    summary.environment_ok = environment.ok;

    summary.connection_ok = if environment.ok {
        check_connection(&environment).await
    } else {
        false
    };

    print_summary(&summary);
    start_application().await;
}

fn print_banner() {
    println!(
        "\n🚀 n8n Control Center - Quick Start\n======================================\n"
    );
}

fn check_runtime() -> bool {
    println!("🔌 Checking UI port ({})...", routes::BIND_ADDR);
    match std::net::TcpListener::bind(routes::BIND_ADDR) {
        Ok(_) => {
            println!("✅ port 7860 - Available");
            true
        }
        Err(err) => {
            println!("❌ port 7860 - {err}");
            println!("💡 Stop whatever is holding the port and run again.");
            false
        }
    }
}

fn check_components() -> bool {
    println!("\n📦 Checking console components...");
    let mut missing = Vec::new();

    for (name, result) in [
        ("http client", preflight::check_http_component()),
        ("console template", preflight::check_template_component()),
    ] {
        match result {
            Ok(()) => println!("✅ {name} - OK"),
            Err(err) => {
                println!("❌ {name} - {err}");
                missing.push(name);
            }
        }
    }

    if !missing.is_empty() {
        println!("\n⚠️ Broken components: {}", missing.join(", "));
        return false;
    }
    true
}

fn check_environment() -> ResolvedEnvironment {
    println!("\n🔧 Checking environment variables...");
    let resolved = preflight::resolve_environment(
        std::env::var(API_URL_VAR).ok(),
        std::env::var(API_KEY_VAR).ok(),
    );

    println!("📡 {API_URL_VAR}: {}", resolved.api_url);

    if resolved.ok {
        println!("✅ {API_KEY_VAR} - Found");
    } else {
        println!("⚠️ {API_KEY_VAR} not found");
        println!("💡 Get an API key from n8n Settings > API");
    }

    resolved
}

async fn check_connection(environment: &ResolvedEnvironment) -> bool {
    println!("\n🌐 Testing n8n connection ({})...", environment.api_url);
    let outcome =
        preflight::probe_api(&environment.api_url, environment.api_key.as_deref()).await;
    println!("{}", outcome.describe());
    outcome.passed()
}

fn print_summary(summary: &PreflightSummary) {
    println!("\n📊 STATUS SUMMARY:");
    println!(
        "{} Runtime: {}",
        if summary.runtime_ok { "✅" } else { "❌" },
        if summary.runtime_ok { "OK" } else { "Error" }
    );
    println!(
        "{} Components: {}",
        if summary.components_ok { "✅" } else { "❌" },
        if summary.components_ok { "OK" } else { "Error" }
    );
    println!(
        "{} Environment: {}",
        if summary.environment_ok { "✅" } else { "⚠️" },
        if summary.environment_ok { "OK" } else { "Missing" }
    );
    println!(
        "{} n8n Connection: {}",
        if summary.connection_ok { "✅" } else { "❌" },
        if summary.connection_ok { "OK" } else { "Error" }
    );
}

async fn start_application() {
    println!("\n🚀 Starting n8n Control Center...");
    println!("📍 Will open at: http://localhost:7860");
    println!("🔄 Press ENTER to start, Ctrl+C to cancel...");

    let mut line = String::new();
    let mut reader = BufReader::new(tokio::io::stdin());
    tokio::select! {
        _ = tokio::signal::ctrl_c() => {
            println!("\n👋 Cancelled.");
            std::process::exit(0);
        }
        result = reader.read_line(&mut line) => {
            if let Err(err) = result {
                eprintln!("❌ failed to read confirmation: {err}");
                std::process::exit(1);
            }
        }
    }

    if let Err(message) = routes::serve().await {
        eprintln!("❌ failed to start console: {message}");
        std::process::exit(1);
    }
}
