
pub mod prelude {
    use std::{
        cell::Cell,
        collections::HashMap,
        time::Duration,
    };

    pub use anyhow::anyhow;

    pub use geobook_core::{
        entities::*,
        gateways::geocode::{GeoCodingError, GeoCodingGateway},
        repositories::{Error as RepoError, *},
        resolver::{CancellationFlag, Resolver, RetryPolicy, Sleep},
        usecases,
    };

    pub mod sqlite {
        pub use crate::sqlite::*;
    }

    pub use crate::{error::AppError, prelude as flows};

    pub struct NoSleep;

    impl Sleep for NoSleep {
        fn sleep(&self, _: Duration) {}
    }

    /// Programmable geocoder: looks up coordinates by street name and
    /// optionally fails transiently a fixed number of times first.
    #[derive(Default)]
    pub struct FakeGeoCodingGateway {
        responses: HashMap<String, (f64, f64)>,
        transient_failures: Cell<u32>,
        pub calls: Cell<u32>,
    }

    impl FakeGeoCodingGateway {
        pub fn locate(mut self, street: &str, lat: f64, lng: f64) -> Self {
            self.responses.insert(street.to_string(), (lat, lng));
            self
        }

        pub fn fail_transiently(self, times: u32) -> Self {
            self.transient_failures.set(times);
            self
        }
    }

    impl GeoCodingGateway for FakeGeoCodingGateway {
        fn resolve_address_lat_lng(
            &self,
            addr: &Address,
        ) -> std::result::Result<Option<MapPoint>, GeoCodingError> {
            self.calls.set(self.calls.get() + 1);
            let failures = self.transient_failures.get();
            if failures > 0 {
                self.transient_failures.set(failures - 1);
                return Err(GeoCodingError(anyhow!("simulated provider outage")));
            }
            Ok(self
                .responses
                .get(&addr.street)
                .map(|&(lat, lng)| MapPoint::from_lat_lng_deg(lat, lng)))
        }
    }

    pub fn test_retry_policy() -> RetryPolicy {
        RetryPolicy {
            max_attempts: 3,
            base_delay: Duration::from_millis(1),
            max_delay: Duration::from_millis(4),
        }
    }

    pub struct BackendFixture {
        pub db_connections: sqlite::Connections,
        pub geocoder: FakeGeoCodingGateway,
    }

    impl BackendFixture {
        pub fn new(geocoder: FakeGeoCodingGateway) -> Self {
            let _ = env_logger::builder().is_test(true).try_init();
            let db_connections = sqlite::Connections::init(":memory:", 1).unwrap();
            geobook_db_sqlite::run_embedded_database_migrations(
                db_connections.exclusive().unwrap(),
            )
            .unwrap();
            Self {
                db_connections,
                geocoder,
            }
        }

        pub fn resolver(&self) -> Resolver<&FakeGeoCodingGateway, NoSleep> {
            Resolver::with_sleep(&self.geocoder, test_retry_policy(), NoSleep)
        }

        pub fn create_address(&self, new_address: usecases::NewAddress) -> crate::Result<AddressEntry> {
            flows::create_address(
                &self.db_connections,
                &self.resolver(),
                new_address,
                &CancellationFlag::default(),
            )
        }

        pub fn stored_count(&self) -> usize {
            self.db_connections
                .shared()
                .unwrap()
                .count_addresses()
                .unwrap()
        }
    }

    pub fn new_address(street: &str) -> usecases::NewAddress {
        usecases::NewAddress {
            street: street.into(),
            city: "Springfield".into(),
            state: "IL".into(),
            country: "USA".into(),
            lat: None,
            lng: None,
        }
    }
}
