#[macro_use]
extern crate log;

mod create_address;
mod delete_address;
mod find_nearby;
mod update_address;

pub mod prelude {
    pub use super::{
        create_address::*, delete_address::*, find_nearby::*, update_address::*,
    };
}

pub mod error;

pub type Result<T> = std::result::Result<T, error::AppError>;

pub(crate) use geobook_core::{
    entities::*,
    gateways::geocode::GeoCodingGateway,
    repositories::*,
    resolver::{CancellationFlag, Resolver, Sleep},
    usecases,
};

#[cfg(test)]
pub(crate) mod tests;

pub(crate) mod sqlite {
    pub use geobook_db_sqlite::Connections;
}
