//! Adressen-specific address records, report envelopes, configuration primitives
//! and the unified error type.
#![warn(missing_docs)]

pub mod address;
mod capability;
mod config;
mod error;
mod reports;

pub use address::{
    AddressEnvelope, AddressMatch, FullAddress, GeographicName, IdentityKey, Identificator,
    Location,
};
pub use capability::Capability;
pub use config::{
    AdressenConfig, DEFAULT_ADDRESS_MATCH_ENDPOINT, DEFAULT_COUNTRY, DEFAULT_LOCATION_ENDPOINT,
    DEFAULT_PRIMARY_LANGUAGE, DEFAULT_SUGGESTION_ENDPOINT, Endpoints, SearchStrategy,
};
pub use error::AdressenError;
pub use reports::{Resolution, SearchReport};
