use std::net::IpAddr;

use masjid_core::gateways::mosque::MosqueGateway;
use rocket::{config::Config as RocketCfg, Rocket, Route};

pub mod api;
mod cors;
#[cfg(feature = "frontend")]
mod frontend;
mod guards;

#[cfg(test)]
pub mod tests;

#[derive(Debug, Clone)]
pub struct Cfg {
    pub address: IpAddr,
    pub port: u16,
}

pub(crate) struct InstanceOptions {
    mounts: Vec<(&'static str, Vec<Route>)>,
    rocket_cfg: Option<RocketCfg>,
    version: &'static str,
}

pub(crate) struct Gateways {
    mosques: Box<dyn MosqueGateway + Send + Sync>,
}

pub(crate) fn rocket_instance(options: InstanceOptions, gateways: Gateways) -> Rocket<rocket::Build> {
    let InstanceOptions {
        mounts,
        rocket_cfg,
        version,
    } = options;
    let Gateways { mosques } = gateways;

    let r = match rocket_cfg {
        Some(cfg) => rocket::custom(cfg),
        None => rocket::build(),
    };

    let mut instance = r
        .attach(cors::Cors)
        .manage(guards::Mosques(mosques))
        .manage(guards::Version(version));

    for (m, r) in mounts {
        instance = instance.mount(m, r);
    }
    instance
}

#[cfg(not(feature = "frontend"))]
fn mounts() -> Vec<(&'static str, Vec<Route>)> {
    vec![("/api", api::routes())]
}

#[cfg(feature = "frontend")]
fn mounts() -> Vec<(&'static str, Vec<Route>)> {
    vec![("/api", api::routes()), ("/", frontend::routes())]
}

pub async fn run(
    cfg: Cfg,
    mosques: Box<dyn MosqueGateway + Send + Sync>,
    version: &'static str,
) -> anyhow::Result<()> {
    let Cfg { address, port } = cfg;
    let rocket_cfg = RocketCfg {
        address,
        port,
        ..RocketCfg::default()
    };
    let options = InstanceOptions {
        mounts: mounts(),
        rocket_cfg: Some(rocket_cfg),
        version,
    };
    let gateways = Gateways { mosques };
    info!("Starting web server on {address}:{port}");
    if let Err(err) = rocket_instance(options, gateways).launch().await {
        error!("Unable to run web server: {err}");
        anyhow::bail!("Web server terminated unexpectedly");
    }
    Ok(())
}
