//! backplane-config: load a backplane config and print a redacted summary.
//!
//! Startup sequence:
//!   1. Load .env (if present)
//!   2. Init logger
//!   3. Load config
//!   4. Resolve credentials and print the summary

use backplane_config::{config, error::BackplaneError, logger};
use tracing::info;

fn main() {
    if let Err(e) = run() {
        eprintln!("error: {e}");
        std::process::exit(1);
    }
}

fn run() -> Result<(), BackplaneError> {
    // Load .env if present; the file is optional.
    let _ = dotenvy::dotenv();

    let args = parse_cli_args();

    match args.log_level {
        Some(level) => logger::init(level, true)?,
        None => match std::env::var("BACKPLANE_LOG_LEVEL") {
            Ok(level) => {
                logger::parse_level(&level)?;
                logger::init(&level, true)?
            }
            Err(_) => logger::init(logger::DEFAULT_LEVEL, false)?,
        },
    }

    let config = config::load(args.config_path.as_deref())?;
    let masked_uri = config.redis_uri_masked()?;

    info!(
        backplane_type = %config.kind(),
        redis_uri = masked_uri.as_deref().unwrap_or("<unset>"),
        nodes = config.redis_nodes().len(),
        queues = config.queues().len(),
        "backplane config loaded"
    );

    // Resolving exercises the credential file without ever printing its contents.
    let has_password = config.redis_password()?.is_some();

    println!("type:             {}", config.kind());
    println!("redis uri:        {}", masked_uri.as_deref().unwrap_or("<unset>"));
    println!("redis username:   {}", config.redis_username().unwrap_or("<unset>"));
    println!("redis password:   {}", if has_password { config::REDACTION_MARKER } else { "<unset>" });
    if let Some(ca) = config.redis_certificate_authority_file() {
        println!("trusted CA:       {}", ca.display());
    }
    println!("pool max total:   {}", config.jedis_pool_max_total());
    println!("timeout:          {:?}", config.timeout());
    println!("max attempts:     {}", config.max_attempts());
    println!("priority queue:   {}", config.priority_queue());
    for queue in config.queues() {
        println!("queue:            {}", queue.name());
    }

    Ok(())
}

struct CliArgs {
    log_level: Option<&'static str>,
    config_path: Option<String>,
}

fn parse_cli_args() -> CliArgs {
    let mut verbosity = 0u8;
    let mut config_path = None;

    let mut iter = std::env::args().skip(1);
    while let Some(arg) = iter.next() {
        match arg.as_str() {
            "-h" | "--help" => {
                println!("Usage: backplane-config [OPTIONS]");
                println!();
                println!("Options:");
                println!("  -h, --help                 Print help");
                println!("  -f, --config <PATH>        Path to configuration file (default: {})", config::DEFAULT_CONFIG_PATH);
                println!("  -v, -vv, -vvv, -vvvv       Increase logging verbosity");
                std::process::exit(0);
            }
            "-f" | "--config" => {
                if let Some(path) = iter.next() {
                    config_path = Some(path);
                } else {
                    eprintln!("error: -f/--config requires a path argument");
                    std::process::exit(1);
                }
            }
            "--verbose" => verbosity = verbosity.saturating_add(1),
            a => {
                if let Some(count) = logger::verbosity_flag(a) {
                    verbosity = verbosity.saturating_add(count);
                }
            }
        }
    }

    CliArgs { log_level: logger::level_for_verbosity(verbosity), config_path }
}
