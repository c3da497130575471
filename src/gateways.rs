use geobook_gateways::nominatim::Nominatim;

use crate::config;

pub fn geocoding_gateway(cfg: &config::Geocoding) -> Nominatim {
    match &cfg.endpoint {
        Some(endpoint) => {
            log::info!("Using custom Nominatim endpoint {endpoint}");
            Nominatim::with_endpoint(endpoint.clone())
        }
        None => Nominatim::new(),
    }
}
