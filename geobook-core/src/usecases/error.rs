use crate::{repositories, resolver::ResolutionError};
use thiserror::Error;

#[derive(Debug, Error)]
pub enum Error {
    #[error("The address is incomplete")]
    IncompleteAddress,
    #[error("Invalid position")]
    InvalidPosition,
    #[error("Invalid distance")]
    InvalidDistance,
    #[error("The address could not be located")]
    AddressNotLocatable,
    #[error("The geocoding service is currently unavailable")]
    UpstreamUnavailable,
    #[error("The request was cancelled")]
    Cancelled,
    #[error("No addresses found within the given distance")]
    NoResults,
    #[error(transparent)]
    Repo(#[from] repositories::Error),
}

impl From<ResolutionError> for Error {
    fn from(err: ResolutionError) -> Self {
        match err {
            ResolutionError::NotFound => Self::AddressNotLocatable,
            ResolutionError::Failed { .. } => Self::UpstreamUnavailable,
            ResolutionError::Cancelled => Self::Cancelled,
        }
    }
}

impl From<geobook_entities::geo::CoordInvalidation> for Error {
    fn from(_: geobook_entities::geo::CoordInvalidation) -> Self {
        Self::InvalidPosition
    }
}
