use actix_files::Files;
use actix_web::web;
use log::{info, warn};

use crate::config::AssetConfig;

/// Whether the compiled front-end bundle exists. Called once at startup.
pub fn bundle_built(assets: &AssetConfig) -> bool {
    if !assets.dir.is_dir() {
        warn!(
            "Asset directory {:?} not found, {} will not be served",
            assets.dir, assets.packs_url
        );
        return false;
    }

    info!("Serving {:?} under {}", assets.dir, assets.packs_url);
    true
}

pub fn init(cfg: &mut web::ServiceConfig, assets: &AssetConfig) {
    cfg.service(Files::new(&assets.packs_url, &assets.dir));
}
