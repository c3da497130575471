use std::{fmt::Display, result};

use rocket::{
    self, delete, get,
    http::Status,
    post, put,
    response::{self, Responder},
    routes,
    serde::json::{Error as JsonError, Json},
    Route, State,
};

use crate::adapters::json;
use geobook_application::prelude as flows;
use geobook_core::{resolver::CancellationFlag, usecases};
use geobook_db_sqlite::Connections;
use geobook_entities::{
    geo::{Distance, MapPoint},
    id::Id,
};

use super::GeoResolver;

mod error;

pub use self::error::Error as ApiError;

type Result<T> = result::Result<Json<T>, ApiError>;
type JsonResult<'a, T> = result::Result<Json<T>, JsonError<'a>>;

pub fn routes() -> Vec<Route> {
    routes![
        post_address,
        put_address,
        delete_address,
        get_addresses_nearby,
    ]
}

#[post("/addresses", format = "json", data = "<new_address>")]
fn post_address(
    db: &State<Connections>,
    resolver: &State<GeoResolver>,
    new_address: JsonResult<json::NewAddress>,
) -> Result<json::Address> {
    let new_address = new_address?.into_inner();
    let entry = flows::create_address(
        db.inner(),
        resolver.inner(),
        new_address.into(),
        &CancellationFlag::default(),
    )?;
    Ok(Json(entry.into()))
}

#[put("/addresses/<id>", format = "json", data = "<update>")]
fn put_address(
    db: &State<Connections>,
    id: i64,
    update: JsonResult<json::UpdateAddress>,
) -> Result<()> {
    let update = update?.into_inner();
    flows::update_address(db.inner(), Id::from(id), update.into())?;
    Ok(Json(()))
}

#[delete("/addresses/<id>")]
fn delete_address(db: &State<Connections>, id: i64) -> Result<()> {
    flows::delete_address(db.inner(), Id::from(id))?;
    Ok(Json(()))
}

#[get("/addresses?<lat>&<lng>&<radius_km>")]
fn get_addresses_nearby(
    db: &State<Connections>,
    lat: f64,
    lng: f64,
    radius_km: f64,
) -> Result<Vec<json::Address>> {
    let center = MapPoint::try_from_lat_lng_deg(lat, lng).map_err(usecases::Error::from)?;
    let entries = flows::find_nearby(db.inner(), center, Distance::from_kilometers(radius_km))?;
    Ok(Json(entries.into_iter().map(Into::into).collect()))
}

fn json_error_response<'r, 'o: 'r, E: Display>(
    req: &'r rocket::Request<'_>,
    err: &E,
    status: Status,
) -> response::Result<'o> {
    let message = err.to_string();
    let boundary_error = json::Error {
        http_status: status.code,
        message,
    };
    Json(boundary_error).respond_to(req).map(|mut res| {
        res.set_status(status);
        res
    })
}
