use super::prelude::*;

/// Tolerance applied to the radius comparison so that a radius of zero
/// still matches records with exactly the queried coordinates despite
/// floating-point noise.
pub const PROXIMITY_TOLERANCE_KM: f64 = 1e-6;

/// Stable O(n) proximity filter: keeps every entry whose great-circle
/// distance to `center` does not exceed `radius`, preserving the input
/// order.
pub fn filter_addresses_within(
    center: MapPoint,
    radius: Distance,
    entries: Vec<AddressEntry>,
) -> Vec<AddressEntry> {
    debug_assert!(radius.is_valid());
    let max_km = radius.to_kilometers() + PROXIMITY_TOLERANCE_KM;
    entries
        .into_iter()
        .filter(|entry| MapPoint::distance(center, entry.pos).to_kilometers() <= max_km)
        .collect()
}
