use clap::Parser;
use port_resolver::utils::logger;
use port_resolver::{resolve_port_detailed, CliConfig, OutputFormat, PortSource, Result};
use std::io::Write;

fn write_port(config: &CliConfig) -> Result<()> {
    let resolved = resolve_port_detailed();
    match resolved.source {
        PortSource::Environment => tracing::debug!("Using port {} from PORT", resolved.port),
        PortSource::Default => tracing::debug!("PORT unset or empty, using default {}", resolved.port),
    }

    let mut stdout = std::io::stdout().lock();
    match config.format {
        OutputFormat::Plain => writeln!(stdout, "{}", resolved.port)?,
        OutputFormat::Json => {
            serde_json::to_writer(&mut stdout, &resolved)?;
            writeln!(stdout)?;
        }
    }
    stdout.flush()?;
    Ok(())
}

fn main() {
    let config = CliConfig::parse();

    logger::init_cli_logger(config.verbose);
    tracing::debug!("CLI config: {:?}", config);

    if let Err(e) = write_port(&config) {
        tracing::error!("Failed to write resolved port: {}", e);
        eprintln!("error: {}", e);
        std::process::exit(1);
    }
}
