use super::json_error_response;
use anyhow::anyhow;
use geobook_application::error::AppError;
pub use geobook_core::{repositories::Error as RepoError, usecases::Error as ParameterError};
use rocket::{
    self,
    http::Status,
    response::{self, Responder},
    serde::json::Error as JsonError,
};
use thiserror::Error;

#[derive(Debug, Error)]
pub enum Error {
    #[error(transparent)]
    App(#[from] AppError),
    #[error("{0}")]
    OtherWithStatus(#[source] anyhow::Error, Status),
    #[error(transparent)]
    Other(#[from] anyhow::Error),
}

impl From<JsonError<'_>> for Error {
    fn from(err: JsonError) -> Self {
        match err {
            JsonError::Io(err) => Self::OtherWithStatus(anyhow!(err), Status::UnprocessableEntity),
            JsonError::Parse(_str, err) => {
                Self::OtherWithStatus(anyhow!(err), Status::UnprocessableEntity)
            }
        }
    }
}

impl From<ParameterError> for Error {
    fn from(err: ParameterError) -> Self {
        Self::App(err.into())
    }
}

impl From<RepoError> for Error {
    fn from(err: RepoError) -> Self {
        AppError::from(err).into()
    }
}

impl<'r, 'o: 'r> Responder<'r, 'o> for Error {
    fn respond_to(self, req: &rocket::Request) -> response::Result<'o> {
        match self {
            Error::App(err) => {
                if let AppError::Business(ref err) = err {
                    let status = match err {
                        ParameterError::IncompleteAddress
                        | ParameterError::InvalidPosition
                        | ParameterError::InvalidDistance => Some(Status::BadRequest),
                        ParameterError::AddressNotLocatable
                        | ParameterError::NoResults
                        | ParameterError::Repo(RepoError::NotFound) => Some(Status::NotFound),
                        ParameterError::UpstreamUnavailable | ParameterError::Cancelled => {
                            Some(Status::ServiceUnavailable)
                        }
                        ParameterError::Repo(RepoError::Other(_)) => None,
                    };
                    if let Some(status) = status {
                        return json_error_response(req, err, status);
                    }
                }
                error!("Error: {err}");
                Err(Status::InternalServerError)
            }
            Error::OtherWithStatus(err, status) => json_error_response(req, &err, status),
            Error::Other(err) => {
                error!("Error: {err}");
                Err(Status::InternalServerError)
            }
        }
    }
}
