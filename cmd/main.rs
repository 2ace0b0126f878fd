use std::io::Write;
use std::process::ExitCode;

use clap::Parser;
use log::{error, info};

use zone_cache::cache::ZoneCache;
use zone_cache::error::{Error, Result};

mod config;

#[derive(Parser)]
struct Args {
    #[clap(short, long)]
    config: String,

    /// Zone names to look up
    #[clap(required = true)]
    zones: Vec<String>,
}

#[tokio::main(flavor = "current_thread")]
async fn main() -> ExitCode {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    let args = Args::parse();
    match run(args).await {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            error!("{}", e);
            report_failure(&mut std::io::stderr(), &e);
            ExitCode::FAILURE
        }
    }
}

// Printed even when logging is off.
fn report_failure<W: Write>(out: &mut W, err: &Error) {
    let _ = writeln!(out, "zone-cache: {}", err);
}

async fn run(args: Args) -> Result<()> {
    let cfg = config::Parser::parse_yaml(&args.config)?;
    let directory = cfg.directory.into_directory()?;
    let cache = ZoneCache::new(directory);

    let zones = cache.lookup(&args.zones).await?;

    let mut found: Vec<_> = zones.values().collect();
    found.sort_by(|a, b| a.name.cmp(&b.name));
    for zone in found {
        println!("{}\t{}\t{}", zone.name, zone.id, zone.zone_type);
    }

    info!(
        "{} of {} requested zones found, {} cached",
        zones.len(),
        args.zones.len(),
        cache.len().await
    );
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_report_failure_writes_error() {
        let mut out = Vec::new();
        report_failure(&mut out, &Error::ConfigError("bad endpoint".to_string()));
        assert_eq!(
            String::from_utf8(out).unwrap(),
            "zone-cache: Config error: bad endpoint\n"
        );
    }
}
