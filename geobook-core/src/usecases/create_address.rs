use super::prelude::*;

/// Inbound payload for creating a new record.
///
/// Coordinates may be supplied by the caller but are always overwritten
/// by the resolver: the stored position is resolver-derived without
/// exception.
#[derive(Debug, Clone, Default)]
pub struct NewAddress {
    pub street: String,
    pub city: String,
    pub state: String,
    pub country: String,
    pub lat: Option<f64>,
    pub lng: Option<f64>,
}

pub fn prepare_new_address(new_address: NewAddress) -> Result<Address> {
    let NewAddress {
        street,
        city,
        state,
        country,
        lat,
        lng,
    } = new_address;
    let address = Address {
        street,
        city,
        state,
        country,
    };
    if !address.is_complete() {
        return Err(Error::IncompleteAddress);
    }
    if lat.is_some() || lng.is_some() {
        log::debug!("Ignoring caller-supplied coordinates (overwritten by the resolver)");
    }
    Ok(address)
}

pub fn store_new_address<R: AddressRepo>(repo: &R, draft: AddressDraft) -> Result<AddressEntry> {
    let id = repo.insert_address(&draft)?;
    let AddressDraft { address, pos } = draft;
    Ok(AddressEntry { id, address, pos })
}
