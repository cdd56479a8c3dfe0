//! Bring the point store schema up to date and optionally clear stored points.
#![cfg_attr(not(any(test, doctest)), deny(clippy::unwrap_used))]
#![cfg_attr(not(any(test, doctest)), deny(clippy::expect_used))]

use std::env;
use std::io;

use clap::Parser;
use geojson_points::outbound::persistence::{apply_migrations, truncate_points};
use tracing::warn;
use tracing_subscriber::{EnvFilter, fmt};

const DATABASE_URL_ENV: &str = "GEOJSON_DATABASE_URL";

/// `reset-points` command arguments.
#[derive(Debug, Clone, Parser)]
#[command(
    name = "reset-points",
    about = "Apply point store migrations and optionally delete every stored point",
    version
)]
struct CliArgs {
    /// Database connection URL. Falls back to `GEOJSON_DATABASE_URL` when omitted.
    #[arg(long = "database-url", value_name = "url")]
    database_url: Option<String>,
    /// Delete every stored point after migrating.
    #[arg(long)]
    truncate: bool,
}

fn main() -> io::Result<()> {
    init_tracing();

    let args = CliArgs::try_parse().map_err(io::Error::other)?;
    let database_url = resolve_database_url(args.database_url, env::var(DATABASE_URL_ENV).ok())?;

    let applied = apply_migrations(&database_url).map_err(io::Error::other)?;
    println!("applied {applied} migration(s)");

    if args.truncate {
        truncate_points(&database_url).map_err(io::Error::other)?;
        println!("stored points deleted");
    }
    Ok(())
}

/// Install the global subscriber, warning rather than failing when one is
/// already set.
fn init_tracing() {
    if let Err(e) = fmt().with_env_filter(EnvFilter::from_default_env()).try_init() {
        warn!(error = %e, "tracing init failed");
    }
}

fn resolve_database_url(explicit: Option<String>, from_env: Option<String>) -> io::Result<String> {
    if let Some(value) = explicit {
        if value.trim().is_empty() {
            return Err(io::Error::new(
                io::ErrorKind::InvalidInput,
                "--database-url must not be empty when provided",
            ));
        }
        return Ok(value);
    }

    from_env
        .filter(|value| !value.trim().is_empty())
        .ok_or_else(|| {
            io::Error::new(
                io::ErrorKind::InvalidInput,
                format!("database URL missing: set --database-url or {DATABASE_URL_ENV}"),
            )
        })
}
