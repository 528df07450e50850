/// Open `url` in the default browser without blocking the runtime.
pub async fn open_browser(url: &str) -> std::io::Result<()> {
    let url = url.to_string();
    tokio::task::spawn_blocking(move || open::that(url))
        .await
        .map_err(std::io::Error::other)?
}
