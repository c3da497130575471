use geobook_entities::{address::Address, geo::MapPoint};
use thiserror::Error;

/// A transient transport or provider failure.
///
/// Anything a later attempt might recover from: network errors,
/// rate limiting, provider exceptions.
#[derive(Debug, Error)]
#[error("geocoding provider failure: {0}")]
pub struct GeoCodingError(#[from] pub anyhow::Error);

pub trait GeoCodingGateway {
    /// A single, unretried lookup.
    ///
    /// Returns `Ok(None)` if the provider explicitly reports no match
    /// for the given address.
    fn resolve_address_lat_lng(&self, addr: &Address)
        -> Result<Option<MapPoint>, GeoCodingError>;
}

impl<G: GeoCodingGateway + ?Sized> GeoCodingGateway for &G {
    fn resolve_address_lat_lng(
        &self,
        addr: &Address,
    ) -> Result<Option<MapPoint>, GeoCodingError> {
        (**self).resolve_address_lat_lng(addr)
    }
}

impl<G: GeoCodingGateway + ?Sized> GeoCodingGateway for Box<G> {
    fn resolve_address_lat_lng(
        &self,
        addr: &Address,
    ) -> Result<Option<MapPoint>, GeoCodingError> {
        (**self).resolve_address_lat_lng(addr)
    }
}
