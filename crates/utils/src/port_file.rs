use std::{env, path::PathBuf};

use tokio::fs;

const PORT_DIR: &str = "crewbuilder";
const PORT_FILE: &str = "crewbuilder.port";

pub fn port_file_path() -> PathBuf {
    env::temp_dir().join(PORT_DIR).join(PORT_FILE)
}

/// Record the bound port so local tooling can discover an auto-assigned one.
pub async fn write_port_file(port: u16) -> std::io::Result<PathBuf> {
    let path = port_file_path();
    tracing::debug!("Writing port {} to {:?}", port, path);

    if let Some(dir) = path.parent() {
        fs::create_dir_all(dir).await?;
    }
    fs::write(&path, port.to_string()).await?;
    Ok(path)
}
