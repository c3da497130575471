pub mod repositories;
pub mod resolver;
pub mod usecases;

pub mod gateways {
    pub mod geocode;
}

pub mod entities {
    pub use geobook_entities::{address::*, geo::*, id::*};
}
