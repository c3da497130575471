use diesel::prelude::*;

use super::schema::addresses;

#[derive(Insertable, AsChangeset)]
#[diesel(table_name = addresses)]
pub struct NewAddress<'a> {
    pub street: &'a str,
    pub city: &'a str,
    pub state: &'a str,
    pub country: &'a str,
    pub lat: f64,
    pub lng: f64,
}

#[derive(Queryable)]
pub struct Address {
    pub id: i64,
    pub street: String,
    pub city: String,
    pub state: String,
    pub country: String,
    pub lat: f64,
    pub lng: f64,
}
