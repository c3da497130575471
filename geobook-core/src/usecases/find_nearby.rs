use super::{filter_address::filter_addresses_within, prelude::*};

/// Proximity query over all stored records.
///
/// An empty match set is surfaced as `Error::NoResults` so that callers
/// can distinguish "query succeeded with zero matches" from a failed
/// query.
pub fn find_nearby<R: AddressRepo>(
    repo: &R,
    center: MapPoint,
    radius: Distance,
) -> Result<Vec<AddressEntry>> {
    if !radius.is_valid() {
        return Err(Error::InvalidDistance);
    }
    let entries = repo.all_addresses()?;
    let nearby = filter_addresses_within(center, radius, entries);
    if nearby.is_empty() {
        return Err(Error::NoResults);
    }
    Ok(nearby)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::repositories::{self, AddressRepo};

    #[derive(Default)]
    struct InMemoryRepo {
        entries: Vec<AddressEntry>,
    }

    impl AddressRepo for InMemoryRepo {
        fn insert_address(&self, _: &AddressDraft) -> repositories::Result<Id> {
            unreachable!();
        }
        fn update_address(&self, _: &Id, _: &AddressDraft) -> repositories::Result<()> {
            unreachable!();
        }
        fn delete_address(&self, _: &Id) -> repositories::Result<()> {
            unreachable!();
        }
        fn all_addresses(&self) -> repositories::Result<Vec<AddressEntry>> {
            Ok(self.entries.clone())
        }
        fn count_addresses(&self) -> repositories::Result<usize> {
            Ok(self.entries.len())
        }
    }

    fn entry(id: i64, lat: f64, lng: f64) -> AddressEntry {
        AddressEntry {
            id: Id::from(id),
            address: Address {
                street: "unnamed".into(),
                city: "unnamed".into(),
                state: "unnamed".into(),
                country: "unnamed".into(),
            },
            pos: MapPoint::from_lat_lng_deg(lat, lng),
        }
    }

    #[test]
    fn no_results_on_empty_repository() {
        let repo = InMemoryRepo::default();
        let center = MapPoint::from_lat_lng_deg(40.7128, -74.0060);
        let err = find_nearby(&repo, center, Distance::from_kilometers(500.0)).unwrap_err();
        assert!(matches!(err, Error::NoResults));
    }

    #[test]
    fn reject_negative_radius() {
        let repo = InMemoryRepo {
            entries: vec![entry(1, 40.7128, -74.0060)],
        };
        let center = MapPoint::from_lat_lng_deg(40.7128, -74.0060);
        let err = find_nearby(&repo, center, Distance::from_kilometers(-1.0)).unwrap_err();
        assert!(matches!(err, Error::InvalidDistance));
    }

    #[test]
    fn return_matches_within_radius() {
        let repo = InMemoryRepo {
            entries: vec![entry(1, 42.3601, -71.0589), entry(2, 34.0522, -118.2437)],
        };
        let center = MapPoint::from_lat_lng_deg(40.7128, -74.0060);
        let results = find_nearby(&repo, center, Distance::from_kilometers(500.0)).unwrap();
        assert_eq!(1, results.len());
        assert_eq!(Id::from(1), results[0].id);
    }
}
