use std::net::IpAddr;
use std::path::PathBuf;

use clap::Parser;

/// Port used when none is given or the given one is unusable.
pub const DEFAULT_PORT: u16 = 8080;

/// Extract geographic coordinates from free text over HTTP.
#[derive(Debug, Parser)]
#[command(name = "coordex", about, version)]
pub struct Cli {
    /// Port to listen on (1-65535). Invalid values fall back to 8080
    #[arg(value_name = "PORT")]
    pub port: Option<String>,

    /// Address to bind
    #[arg(long, default_value = "0.0.0.0")]
    pub host: IpAddr,

    /// Extract from FILE ('-' for stdin), print the JSON result and exit
    #[arg(long, value_name = "FILE")]
    pub input: Option<PathBuf>,
}

impl Cli {
    /// The port to bind, falling back to [`DEFAULT_PORT`] with a warning.
    pub fn port(&self) -> u16 {
        match self.port.as_deref() {
            None => DEFAULT_PORT,
            Some(raw) => parse_port(raw).unwrap_or_else(|reason| {
                tracing::warn!(port = raw, %reason, "using default port {DEFAULT_PORT}");
                DEFAULT_PORT
            }),
        }
    }
}

/// Parse a port number in `1..=65535`.
pub fn parse_port(raw: &str) -> Result<u16, String> {
    let value: u32 = raw
        .trim()
        .parse()
        .map_err(|_| format!("'{raw}' is not a number"))?;
    match u16::try_from(value) {
        Ok(port) if port != 0 => Ok(port),
        _ => Err(format!("{value} is outside 1-65535")),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn valid_ports() {
        assert_eq!(parse_port("1"), Ok(1));
        assert_eq!(parse_port("8081"), Ok(8081));
        assert_eq!(parse_port("65535"), Ok(65535));
    }

    #[test]
    fn invalid_ports() {
        assert!(parse_port("0").is_err());
        assert!(parse_port("65536").is_err());
        assert!(parse_port("-1").is_err());
        assert!(parse_port("http").is_err());
        assert!(parse_port("").is_err());
    }

    #[test]
    fn default_and_fallback() {
        let cli = Cli::parse_from(["coordex"]);
        assert_eq!(cli.port(), DEFAULT_PORT);
        let cli = Cli::parse_from(["coordex", "abc"]);
        assert_eq!(cli.port(), DEFAULT_PORT);
        let cli = Cli::parse_from(["coordex", "9000"]);
        assert_eq!(cli.port(), 9000);
    }

    #[test]
    fn host_defaults_to_all_interfaces() {
        let cli = Cli::parse_from(["coordex"]);
        assert_eq!(cli.host.to_string(), "0.0.0.0");
        assert!(cli.input.is_none());
    }
}
