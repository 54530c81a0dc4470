use std::env;

use anyhow::{Context, Result};
use onebrc::Config;
use tracing_subscriber::EnvFilter;

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")),
        )
        .with_writer(std::io::stderr)
        .init();

    let mut config = Config::default();
    if let Some(path) = env::args_os().nth(1) {
        config.path = path.into();
    }

    let report = onebrc::run(&config)
        .with_context(|| format!("failed to aggregate {}", config.path.display()))?;
    println!("{report}");
    println!("{} stations", report.len());
    Ok(())
}
