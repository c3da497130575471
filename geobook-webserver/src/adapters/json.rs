//! JSON types of the public API.
//!
//! Kept separate from the domain entities so that the wire format
//! can evolve independently of the internal representation.

use geobook_core::usecases;
use geobook_entities::address;
use serde::{Deserialize, Serialize};

#[derive(Debug, Serialize, Deserialize)]
pub struct NewAddress {
    pub street: String,
    pub city: String,
    pub state: String,
    pub country: String,
    /// Ignored: the position is always resolved server-side.
    pub latitude: Option<f64>,
    /// Ignored: the position is always resolved server-side.
    pub longitude: Option<f64>,
}

impl From<NewAddress> for usecases::NewAddress {
    fn from(from: NewAddress) -> Self {
        let NewAddress {
            street,
            city,
            state,
            country,
            latitude,
            longitude,
        } = from;
        Self {
            street,
            city,
            state,
            country,
            lat: latitude,
            lng: longitude,
        }
    }
}

#[derive(Debug, Serialize, Deserialize)]
pub struct UpdateAddress {
    pub street: String,
    pub city: String,
    pub state: String,
    pub country: String,
    pub latitude: f64,
    pub longitude: f64,
}

impl From<UpdateAddress> for usecases::UpdateAddress {
    fn from(from: UpdateAddress) -> Self {
        let UpdateAddress {
            street,
            city,
            state,
            country,
            latitude,
            longitude,
        } = from;
        Self {
            street,
            city,
            state,
            country,
            lat: latitude,
            lng: longitude,
        }
    }
}

#[derive(Debug, Serialize, Deserialize)]
pub struct Address {
    pub id: i64,
    pub street: String,
    pub city: String,
    pub state: String,
    pub country: String,
    pub latitude: f64,
    pub longitude: f64,
}

impl From<address::AddressEntry> for Address {
    fn from(from: address::AddressEntry) -> Self {
        let address::AddressEntry { id, address, pos } = from;
        let address::Address {
            street,
            city,
            state,
            country,
        } = address;
        Self {
            id: id.into(),
            street,
            city,
            state,
            country,
            latitude: pos.lat_deg(),
            longitude: pos.lng_deg(),
        }
    }
}

/// Error response of the JSON API.
#[derive(Debug, Serialize, Deserialize)]
pub struct Error {
    pub http_status: u16,
    pub message: String,
}
