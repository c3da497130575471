use std::time::Duration;

use rocket::{
    http::{ContentType, Status},
    local::blocking::Client,
};

use super::*;
use crate::adapters::json;
use geobook_core::{
    gateways::geocode::GeoCodingError,
    resolver::{Resolver, RetryPolicy},
};
use geobook_entities::{address::Address, geo::MapPoint};

struct StubGeocoder;

impl GeoCodingGateway for StubGeocoder {
    fn resolve_address_lat_lng(
        &self,
        addr: &Address,
    ) -> Result<Option<MapPoint>, GeoCodingError> {
        Ok(match addr.city.as_str() {
            "New York" => Some(MapPoint::from_lat_lng_deg(40.7128, -74.0060)),
            "Boston" => Some(MapPoint::from_lat_lng_deg(42.3601, -71.0589)),
            "Los Angeles" => Some(MapPoint::from_lat_lng_deg(34.0522, -118.2437)),
            _ => None,
        })
    }
}

fn test_client() -> Client {
    let db = Connections::init(":memory:", 1).unwrap();
    geobook_db_sqlite::run_embedded_database_migrations(db.exclusive().unwrap()).unwrap();
    let gateway: BoxedGeoCodingGateway = Box::new(StubGeocoder);
    let resolver = Resolver::new(
        gateway,
        RetryPolicy {
            max_attempts: 1,
            base_delay: Duration::from_millis(1),
            max_delay: Duration::from_millis(1),
        },
    );
    let options = InstanceOptions {
        mounts: mounts(),
        rocket_cfg: Some(RocketCfg::debug_default()),
    };
    Client::tracked(rocket_instance(options, db, resolver)).unwrap()
}

fn new_address_json(city: &str) -> String {
    format!(r#"{{"street":"1 Main St","city":"{city}","state":"XX","country":"USA"}}"#)
}

fn post_address(client: &Client, city: &str) -> json::Address {
    let res = client
        .post("/addresses")
        .header(ContentType::JSON)
        .body(new_address_json(city))
        .dispatch();
    assert_eq!(res.status(), Status::Ok);
    serde_json::from_str(&res.into_string().unwrap()).unwrap()
}

#[test]
fn create_address() {
    let client = test_client();
    let created = post_address(&client, "Boston");
    assert_eq!(created.city, "Boston");
    assert_eq!(created.latitude, 42.3601);
    assert_eq!(created.longitude, -71.0589);
}

#[test]
fn create_address_ignores_client_coordinates() {
    let client = test_client();
    let body = r#"{"street":"1 Main St","city":"Boston","state":"XX","country":"USA","latitude":1.0,"longitude":2.0}"#;
    let res = client
        .post("/addresses")
        .header(ContentType::JSON)
        .body(body)
        .dispatch();
    assert_eq!(res.status(), Status::Ok);
    let created: json::Address = serde_json::from_str(&res.into_string().unwrap()).unwrap();
    assert_eq!(created.latitude, 42.3601);
    assert_eq!(created.longitude, -71.0589);
}

#[test]
fn create_address_that_cannot_be_located() {
    let client = test_client();
    let res = client
        .post("/addresses")
        .header(ContentType::JSON)
        .body(new_address_json("Atlantis"))
        .dispatch();
    assert_eq!(res.status(), Status::NotFound);
    let err: json::Error = serde_json::from_str(&res.into_string().unwrap()).unwrap();
    assert_eq!(err.http_status, 404);
}

#[test]
fn create_address_with_incomplete_input() {
    let client = test_client();
    let body = r#"{"street":"","city":"Boston","state":"XX","country":"USA"}"#;
    let res = client
        .post("/addresses")
        .header(ContentType::JSON)
        .body(body)
        .dispatch();
    assert_eq!(res.status(), Status::BadRequest);
}

#[test]
fn create_address_with_malformed_body() {
    let client = test_client();
    let res = client
        .post("/addresses")
        .header(ContentType::JSON)
        .body("{ not json")
        .dispatch();
    assert_eq!(res.status(), Status::UnprocessableEntity);
}

#[test]
fn find_nearby_addresses() {
    let client = test_client();
    post_address(&client, "Boston");
    post_address(&client, "Los Angeles");

    // Only Boston lies within 500 km of New York.
    let res = client
        .get("/addresses?lat=40.7128&lng=-74.0060&radius_km=500")
        .dispatch();
    assert_eq!(res.status(), Status::Ok);
    let results: Vec<json::Address> = serde_json::from_str(&res.into_string().unwrap()).unwrap();
    assert_eq!(results.len(), 1);
    assert_eq!(results[0].city, "Boston");

    let res = client
        .get("/addresses?lat=40.7128&lng=-74.0060&radius_km=5000")
        .dispatch();
    assert_eq!(res.status(), Status::Ok);
    let results: Vec<json::Address> = serde_json::from_str(&res.into_string().unwrap()).unwrap();
    assert_eq!(results.len(), 2);
}

#[test]
fn find_nearby_without_any_match() {
    let client = test_client();
    let res = client
        .get("/addresses?lat=40.7128&lng=-74.0060&radius_km=500")
        .dispatch();
    assert_eq!(res.status(), Status::NotFound);
}

#[test]
fn find_nearby_with_invalid_parameters() {
    let client = test_client();
    let res = client
        .get("/addresses?lat=91.0&lng=-74.0060&radius_km=500")
        .dispatch();
    assert_eq!(res.status(), Status::BadRequest);

    let res = client
        .get("/addresses?lat=40.7128&lng=-74.0060&radius_km=-1")
        .dispatch();
    assert_eq!(res.status(), Status::BadRequest);
}

#[test]
fn update_address() {
    let client = test_client();
    let created = post_address(&client, "Boston");

    let body = r#"{"street":"2 Back Bay","city":"Boston","state":"MA","country":"USA","latitude":42.3503,"longitude":-71.0810}"#;
    let res = client
        .put(format!("/addresses/{}", created.id))
        .header(ContentType::JSON)
        .body(body)
        .dispatch();
    assert_eq!(res.status(), Status::Ok);

    let res = client
        .get("/addresses?lat=42.3601&lng=-71.0589&radius_km=50")
        .dispatch();
    let results: Vec<json::Address> = serde_json::from_str(&res.into_string().unwrap()).unwrap();
    assert_eq!(results.len(), 1);
    assert_eq!(results[0].street, "2 Back Bay");
    assert_eq!(results[0].latitude, 42.3503);
}

#[test]
fn update_absent_address() {
    let client = test_client();
    let body = r#"{"street":"2 Back Bay","city":"Boston","state":"MA","country":"USA","latitude":42.3503,"longitude":-71.0810}"#;
    let res = client
        .put("/addresses/4711")
        .header(ContentType::JSON)
        .body(body)
        .dispatch();
    assert_eq!(res.status(), Status::NotFound);
}

#[test]
fn delete_address_is_idempotent() {
    let client = test_client();
    let created = post_address(&client, "Boston");

    let res = client.delete(format!("/addresses/{}", created.id)).dispatch();
    assert_eq!(res.status(), Status::Ok);
    let res = client.delete(format!("/addresses/{}", created.id)).dispatch();
    assert_eq!(res.status(), Status::Ok);

    let res = client
        .get("/addresses?lat=42.3601&lng=-71.0589&radius_km=50")
        .dispatch();
    assert_eq!(res.status(), Status::NotFound);
}
