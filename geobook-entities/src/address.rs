use crate::{geo::MapPoint, id::Id};

/// A postal address.
#[rustfmt::skip]
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct Address {
    pub street  : String,
    pub city    : String,
    pub state   : String,
    pub country : String,
}

impl Address {
    /// Every stored record requires all four components.
    pub fn is_complete(&self) -> bool {
        !self.street.trim().is_empty()
            && !self.city.trim().is_empty()
            && !self.state.trim().is_empty()
            && !self.country.trim().is_empty()
    }
}

/// A validated and resolved address without an identity yet.
#[derive(Debug, Clone, PartialEq)]
pub struct AddressDraft {
    pub address: Address,
    pub pos: MapPoint,
}

/// A persisted address record.
///
/// The coordinates are authoritative once stored and are never
/// recomputed implicitly.
#[derive(Debug, Clone, PartialEq)]
pub struct AddressEntry {
    pub id: Id,
    pub address: Address,
    pub pos: MapPoint,
}
