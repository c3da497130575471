use geobook_core::{
    gateways::geocode::GeoCodingGateway,
    resolver::{Resolver, RetryPolicy},
};
use geobook_db_sqlite::Connections;
use rocket::{config::Config as RocketCfg, Rocket, Route};

pub mod api;

#[cfg(test)]
mod tests;

pub type BoxedGeoCodingGateway = Box<dyn GeoCodingGateway + Send + Sync>;

/// The resolver shared by all request handlers.
pub type GeoResolver = Resolver<BoxedGeoCodingGateway>;

pub(crate) struct InstanceOptions {
    mounts: Vec<(&'static str, Vec<Route>)>,
    rocket_cfg: Option<RocketCfg>,
}

pub(crate) fn rocket_instance(
    options: InstanceOptions,
    db: Connections,
    resolver: GeoResolver,
) -> Rocket<rocket::Build> {
    let InstanceOptions { mounts, rocket_cfg } = options;

    let r = match rocket_cfg {
        Some(cfg) => rocket::custom(cfg),
        None => rocket::build(),
    };

    let mut instance = r.manage(db).manage(resolver);
    for (m, r) in mounts {
        instance = instance.mount(m, r);
    }
    instance
}

fn mounts() -> Vec<(&'static str, Vec<Route>)> {
    vec![("/", api::routes())]
}

pub async fn run(db: Connections, geocoding: BoxedGeoCodingGateway, retry: RetryPolicy) {
    let options = InstanceOptions {
        mounts: mounts(),
        rocket_cfg: None,
    };
    let resolver = Resolver::new(geocoding, retry);

    let instance = rocket_instance(options, db, resolver);
    if let Err(err) = instance.launch().await {
        error!("Unable to run web server: {err}");
    }
}
