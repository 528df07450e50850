use std::{env, io, path::PathBuf};

use directories::ProjectDirs;

const PROJECT_ROOT: &str = env!("CARGO_MANIFEST_DIR");
const ASSET_DIR_ENV: &str = "CREWBUILDER_ASSET_DIR";

/// Resolve the directory holding runtime assets (config file, port file copies).
///
/// `CREWBUILDER_ASSET_DIR` wins when set. Debug builds keep everything under
/// `dev_assets/` at the workspace root so local runs never touch the user's data dir.
pub fn asset_dir() -> io::Result<PathBuf> {
    let path = if let Ok(custom_dir) = env::var(ASSET_DIR_ENV) {
        PathBuf::from(custom_dir)
    } else if cfg!(debug_assertions) {
        PathBuf::from(PROJECT_ROOT).join("../../dev_assets")
    } else {
        ProjectDirs::from("ai", "crewbuilder", "crewbuilder")
            .ok_or_else(|| io::Error::new(io::ErrorKind::NotFound, "no home directory"))?
            .data_dir()
            .to_path_buf()
    };

    if !path.exists() {
        std::fs::create_dir_all(&path)?;
        tracing::info!("Created asset directory: {}", path.display());
    }

    Ok(path)
    // ✔ macOS → ~/Library/Application Support/crewbuilder
    // ✔ Linux → ~/.local/share/crewbuilder   (respects XDG_DATA_HOME)
    // ✔ Windows → %APPDATA%\crewbuilder\crewbuilder
}

pub fn config_path() -> io::Result<PathBuf> {
    Ok(asset_dir()?.join("config.json"))
}
