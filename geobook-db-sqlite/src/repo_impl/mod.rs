use diesel::{
    self,
    prelude::{Connection as _, *},
    result::Error as DieselError,
};

use geobook_core::{entities::*, repositories as repo};

use super::*;

mod address;

type Result<T> = std::result::Result<T, repo::Error>;

pub fn from_diesel_err(err: DieselError) -> repo::Error {
    match err {
        DieselError::NotFound => repo::Error::NotFound,
        _ => repo::Error::Other(err.into()),
    }
}

diesel::define_sql_function! {
    fn last_insert_rowid() -> BigInt;
}

fn from_row(row: models::Address) -> AddressEntry {
    let models::Address {
        id,
        street,
        city,
        state,
        country,
        lat,
        lng,
    } = row;
    AddressEntry {
        id: Id::from(id),
        address: Address {
            street,
            city,
            state,
            country,
        },
        // Coordinates have been validated before they were stored.
        pos: MapPoint::from_lat_lng_deg(lat, lng),
    }
}

fn to_insertable(draft: &AddressDraft) -> models::NewAddress<'_> {
    models::NewAddress {
        street: &draft.address.street,
        city: &draft.address.city,
        state: &draft.address.state,
        country: &draft.address.country,
        lat: draft.pos.lat_deg(),
        lng: draft.pos.lng_deg(),
    }
}
