use std::net::{IpAddr, Ipv4Addr, SocketAddr};
use std::time::Duration;

use adressen_core::{
    AdressenConfig, DEFAULT_ADDRESS_MATCH_ENDPOINT, DEFAULT_COUNTRY, DEFAULT_LOCATION_ENDPOINT,
    DEFAULT_PRIMARY_LANGUAGE, DEFAULT_SUGGESTION_ENDPOINT, Endpoints, SearchStrategy,
};
use clap::{Parser, ValueEnum};

/// Free-text search pipeline, as named on the command line.
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum StrategyArg {
    /// One location call per search.
    Direct,
    /// Suggestions fanned out to location calls.
    SuggestThenLocate,
    /// Suggestions, locations, then address-match calls.
    SuggestLocateMatch,
}

impl From<StrategyArg> for SearchStrategy {
    fn from(s: StrategyArg) -> Self {
        match s {
            StrategyArg::Direct => Self::Direct,
            StrategyArg::SuggestThenLocate => Self::SuggestThenLocate,
            StrategyArg::SuggestLocateMatch => Self::SuggestLocateMatch,
        }
    }
}

/// Log output format.
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum LogFormat {
    /// Human-readable lines.
    Text,
    /// One JSON object per event.
    Json,
}

/// Service settings; every flag can also come from the environment.
#[derive(Debug, Clone, Parser)]
#[command(name = "adressen-service", version, about = "Fuzzy address search over the Flemish registries")]
pub struct Args {
    /// Address to bind.
    #[arg(long, env = "ADRESSEN_BIND", default_value_t = IpAddr::V4(Ipv4Addr::UNSPECIFIED))]
    pub bind: IpAddr,
    /// Port to listen on.
    #[arg(long, env = "PORT", default_value_t = 80)]
    pub port: u16,

    /// Fuzzy suggestion endpoint.
    #[arg(long, env = "ADRESSEN_SUGGESTION_ENDPOINT", default_value = DEFAULT_SUGGESTION_ENDPOINT)]
    pub suggestion_endpoint: String,
    /// Location endpoint.
    #[arg(long, env = "ADRESSEN_LOCATION_ENDPOINT", default_value = DEFAULT_LOCATION_ENDPOINT)]
    pub location_endpoint: String,
    /// Address-match endpoint.
    #[arg(long, env = "ADRESSEN_ADDRESS_MATCH_ENDPOINT", default_value = DEFAULT_ADDRESS_MATCH_ENDPOINT)]
    pub address_match_endpoint: String,

    /// Country written onto every address.
    #[arg(long, env = "ADRESSEN_COUNTRY", default_value = DEFAULT_COUNTRY)]
    pub country: String,
    /// Language whose display names get the country suffix.
    #[arg(long, env = "ADRESSEN_PRIMARY_LANGUAGE", default_value = DEFAULT_PRIMARY_LANGUAGE)]
    pub primary_language: String,
    /// Free-text search pipeline.
    #[arg(long, env = "ADRESSEN_SEARCH_STRATEGY", value_enum, default_value_t = StrategyArg::Direct)]
    pub search_strategy: StrategyArg,

    /// Per-upstream-call timeout in milliseconds.
    #[arg(long, env = "ADRESSEN_UPSTREAM_TIMEOUT_MS", default_value_t = 5_000)]
    pub upstream_timeout_ms: u64,
    /// Deadline for a fanned-out stage in milliseconds.
    #[arg(long, env = "ADRESSEN_REQUEST_TIMEOUT_MS")]
    pub request_timeout_ms: Option<u64>,

    /// Log output format; filtering follows `RUST_LOG`.
    #[arg(long, env = "ADRESSEN_LOG_FORMAT", value_enum, default_value_t = LogFormat::Text)]
    pub log_format: LogFormat,
}

impl Args {
    /// Socket address to listen on.
    #[must_use]
    pub const fn addr(&self) -> SocketAddr {
        SocketAddr::new(self.bind, self.port)
    }

    /// Orchestrator configuration described by these settings.
    #[must_use]
    pub fn to_config(&self) -> AdressenConfig {
        AdressenConfig {
            endpoints: Endpoints {
                suggestion: self.suggestion_endpoint.clone(),
                location: self.location_endpoint.clone(),
                address_match: self.address_match_endpoint.clone(),
            },
            default_country: self.country.clone(),
            primary_language: self.primary_language.clone(),
            search_strategy: self.search_strategy.into(),
            upstream_timeout: Duration::from_millis(self.upstream_timeout_ms),
            request_timeout: self.request_timeout_ms.map(Duration::from_millis),
            ..AdressenConfig::default()
        }
    }
}
