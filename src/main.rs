mod error;
mod garden;
mod manifest;
mod utils;

use std::path::Path;

use anyhow::Context;
use log::{debug, info};
use manifest::{generate_icons, MANIFEST};

fn main() -> anyhow::Result<()> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    info!("Generating {} garden icons...", MANIFEST.len());
    let generated =
        generate_icons(Path::new("."), MANIFEST).context("icon generation aborted")?;
    for icon in &generated {
        debug!("{} ({}px)", icon.path.display(), icon.size);
    }
    info!("Wrote {} files", generated.len());

    println!("\nAll icons generated successfully!");
    println!("The app icon has been updated for Android.");
    Ok(())
}
