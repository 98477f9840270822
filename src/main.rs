//! crypto_bench - AES-128-CTR round trip benchmark function
//!
//! Two modes:
//!
//! ```text
//! crypto_bench [--env dev] [--port 5000]
//!     Serve the function over HTTP (POST / or /function/crypto).
//!
//! crypto_bench --invoke '{"length_of_message":1000,"num_of_iterations":100}'
//!              [--warm-up N] [--average N]
//!     Run the harness locally and print a latency report.
//! ```

use anyhow::Context;

use crypto_bench::bench::BenchmarkRequest;
use crypto_bench::config::AppConfig;
use crypto_bench::driver;
use crypto_bench::gateway::{self, state::AppState};

// ============================================================
// ARGUMENTS
// ============================================================

fn get_arg(names: &[&str]) -> Option<String> {
    let args: Vec<String> = std::env::args().collect();
    for i in 0..args.len() {
        if names.contains(&args[i].as_str()) && i + 1 < args.len() {
            return Some(args[i + 1].clone());
        }
    }
    None
}

fn get_env() -> String {
    get_arg(&["--env", "-e"]).unwrap_or_else(|| "dev".to_string())
}

/// Get port override from command line (--port argument)
fn get_port_override() -> anyhow::Result<Option<u16>> {
    get_arg(&["--port"])
        .map(|p| p.parse().with_context(|| format!("Invalid --port: {}", p)))
        .transpose()
}

fn get_count(name: &str) -> anyhow::Result<Option<usize>> {
    get_arg(&[name])
        .map(|v| v.parse().with_context(|| format!("Invalid {}: {}", name, v)))
        .transpose()
}

// ============================================================
// MAIN
// ============================================================

fn main() -> anyhow::Result<()> {
    let env = get_env();
    let app_config = AppConfig::load(&env)?;
    let invoke_payload = get_arg(&["--invoke"]);
    // Driver mode prints its JSON report on stdout; keep log lines off it.
    let _log_guard = crypto_bench::logging::init_logging(&app_config, invoke_payload.is_some());

    tracing::info!(
        "Starting crypto_bench {} in {} mode",
        env!("GIT_HASH"),
        env
    );

    // Local driver mode: no server
    if let Some(payload) = invoke_payload {
        let req = BenchmarkRequest::from_slice(payload.as_bytes())?;
        let mut driver_config = app_config.driver.clone();
        if let Some(n) = get_count("--warm-up")? {
            driver_config.warm_up_count = n;
        }
        if let Some(n) = get_count("--average")? {
            driver_config.average = n;
        }
        driver_config.validate()?;

        let report = driver::run(&req, &driver_config)?;
        println!("{}", serde_json::to_string_pretty(&report)?);
        return Ok(());
    }

    let gateway_config = &app_config.gateway;
    let port = get_port_override()?.unwrap_or(gateway_config.port);

    let rt = tokio::runtime::Runtime::new().context("Failed to create tokio runtime")?;
    rt.block_on(gateway::run_server(
        &gateway_config.host,
        port,
        AppState::from_env(),
    ))
}
