pub const APP_VERSION: &str = env!("CARGO_PKG_VERSION");
pub const SERVICE_NAME: &str = "CrewBuilder Service";
