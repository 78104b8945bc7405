//! Converts `ukca-area-boundaries-simple.geojson` (EPSG:3857) in the working directory into
//! `uk.geojson` (EPSG:4326).

use reproj::{run, ReprojectConfig};

fn main() -> anyhow::Result<()> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    let summary = run(&ReprojectConfig::default())?;
    if let Some(crs) = summary.removed_crs {
        log::info!("Dropped CRS declaration {crs}");
    }

    Ok(())
}
