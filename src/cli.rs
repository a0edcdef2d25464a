use std::{net::IpAddr, path::PathBuf};

use anyhow::Result;
use clap::Parser;
use masjid_gateways::mawaqit::{Mawaqit, MawaqitConfig};

use crate::config::{Config, Upstream, WebServer};

#[derive(Debug, Parser)]
#[command(version, about = "Find nearby mosques and their prayer times")]
pub struct Args {
    /// Configuration file
    #[arg(long, value_name = "FILE")]
    pub config: Option<PathBuf>,

    /// Listen on this port
    #[arg(long)]
    pub port: Option<u16>,

    /// Listen on this IP address
    #[arg(long)]
    pub address: Option<IpAddr>,
}

pub async fn run(args: Args) -> Result<()> {
    let Args {
        config,
        port,
        address,
    } = args;
    let Config {
        webserver,
        upstream,
    } = Config::try_load_from_file_or_default(config)?;

    let WebServer {
        address: cfg_address,
        port: cfg_port,
    } = webserver;
    let web_cfg = masjid_webserver::Cfg {
        address: address.unwrap_or(cfg_address),
        port: port.unwrap_or(cfg_port),
    };

    let Upstream {
        api_base_url,
        user_agent,
        timeout,
    } = upstream;
    log::info!("Use Mawaqit API at {api_base_url}");
    let mawaqit = Mawaqit::new(MawaqitConfig {
        api_base_url,
        user_agent,
        timeout,
    })?;

    masjid_webserver::run(web_cfg, Box::new(mawaqit), env!("CARGO_PKG_VERSION")).await
}
