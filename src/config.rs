use std::path::PathBuf;

use anyhow::anyhow;
use clap::Parser;

use crate::geo::Coordinate;

#[derive(Debug, Clone, Parser)]
#[command(name = "party-invite", about = "Invites customers living near the office")]
pub struct Config {
    /// Port to listen on
    #[arg(long, env = "PORT", default_value_t = 8081)]
    pub port: u16,

    /// Latitude of the office, in decimal degrees
    #[arg(long, env = "OFFICE_LATITUDE", default_value_t = 53.339428, allow_negative_numbers = true)]
    pub latitude: f64,

    /// Longitude of the office, in decimal degrees
    #[arg(long, env = "OFFICE_LONGITUDE", default_value_t = -6.257664, allow_negative_numbers = true)]
    pub longitude: f64,

    /// Append logs to this file instead of stderr
    #[arg(long, env = "LOG_PATH")]
    pub log_path: Option<PathBuf>,
}

impl Config {
    /// Reads flags, falling back to the environment and a `.env` file.
    pub fn load() -> Self {
        dotenv::dotenv().ok();
        Self::parse()
    }

    pub fn listen_addr(&self) -> String {
        format!("0.0.0.0:{}", self.port)
    }

    /// The office location as a validated coordinate.
    pub fn reference(&self) -> anyhow::Result<Coordinate> {
        Coordinate::from_degrees(self.longitude, self.latitude).map_err(|e| {
            anyhow!(
                "invalid office location (longitude {}, latitude {}): {e}",
                self.longitude,
                self.latitude
            )
        })
    }

    pub fn log(&self) {
        log::info!("Port: {}", self.port);
        log::info!(
            "Office location: longitude {}, latitude {}",
            self.longitude,
            self.latitude
        );
        match &self.log_path {
            Some(path) => log::info!("Log file: {}", path.display()),
            None => log::info!("Logging to stderr"),
        }
    }
}
