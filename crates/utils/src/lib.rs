pub mod assets;
pub mod browser;
pub mod port_file;
pub mod response;
pub mod version;
