#[macro_use]
extern crate log;

use masjid_core::gateways::mosque::MosqueGateway;

mod web;

pub use web::Cfg;

pub async fn run(
    cfg: Cfg,
    mosques: Box<dyn MosqueGateway + Send + Sync>,
    version: &'static str,
) -> anyhow::Result<()> {
    web::run(cfg, mosques, version).await
}
