use anyhow::anyhow;
use geocoding::{Forward, Openstreetmap, Point};
use itertools::Itertools;

use geobook_core::gateways::geocode::{GeoCodingError, GeoCodingGateway};
use geobook_entities::{address::Address, geo::MapPoint};

/// Geocoding gateway backed by the OpenStreetMap Nominatim service.
pub struct Nominatim {
    api: Openstreetmap,
}

impl Nominatim {
    #[allow(clippy::new_without_default)]
    pub fn new() -> Self {
        Self {
            api: Openstreetmap::new(),
        }
    }

    pub fn with_endpoint(endpoint: String) -> Self {
        Self {
            api: Openstreetmap::new_with_endpoint(endpoint),
        }
    }
}

fn address_to_forward_query_string(addr: &Address) -> String {
    let addr_parts = [&addr.street, &addr.city, &addr.state, &addr.country];
    addr_parts
        .into_iter()
        .filter(|part| !part.trim().is_empty())
        .join(", ")
}

// A malformed position is a permanent provider reply, not a transient
// failure: it must map to "no match" so that it is never retried.
fn position_from_point(query: &str, point: &Point<f64>) -> Option<MapPoint> {
    // x = longitude, y = latitude
    match MapPoint::try_from_lat_lng_deg(point.y(), point.x()) {
        Ok(pos) => Some(pos),
        Err(err) => {
            log::warn!("Ignoring malformed position from Nominatim for '{query}': {err}");
            None
        }
    }
}

impl GeoCodingGateway for Nominatim {
    fn resolve_address_lat_lng(
        &self,
        addr: &Address,
    ) -> Result<Option<MapPoint>, GeoCodingError> {
        let query = address_to_forward_query_string(addr);
        let points: Vec<Point<f64>> = self
            .api
            .forward(&query)
            .map_err(|err| GeoCodingError(anyhow!(err)))?;
        let Some(point) = points.first() else {
            log::debug!("Nominatim could not find a match for '{query}'");
            return Ok(None);
        };
        Ok(position_from_point(&query, point))
    }
}
