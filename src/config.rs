use clap::Parser;
use std::net::SocketAddr;
use std::path::PathBuf;

/// Browse a pre-computed hotel payload in the browser.
#[derive(Debug, Parser)]
#[command(name = "hotel_viewer", version, about)]
pub struct Config {
    /// Viewer payload produced by the data pipeline
    #[arg(long, env = "HOTELS_JSON", default_value = "outputs/hotels.json")]
    pub data: PathBuf,

    /// Address to listen on
    #[arg(long, env = "VIEWER_BIND", default_value = "127.0.0.1:3000")]
    pub bind: SocketAddr,

    /// Worker threads serving requests
    #[arg(long, env = "VIEWER_WORKERS", default_value_t = 8)]
    pub workers: usize,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults() {
        let config = Config::try_parse_from(["hotel_viewer"]).unwrap();
        assert_eq!(config.bind, "127.0.0.1:3000".parse().unwrap());
        assert_eq!(config.workers, 8);
    }

    #[test]
    fn flags_override_defaults() {
        let config = Config::try_parse_from([
            "hotel_viewer",
            "--data",
            "/tmp/cancun.json",
            "--bind",
            "0.0.0.0:8080",
            "--workers",
            "2",
        ])
        .unwrap();
        assert_eq!(config.data, PathBuf::from("/tmp/cancun.json"));
        assert_eq!(config.bind.port(), 8080);
        assert_eq!(config.workers, 2);
    }

    #[test]
    fn rejects_a_bad_bind_address() {
        assert!(Config::try_parse_from(["hotel_viewer", "--bind", "localhost"]).is_err());
    }
}
