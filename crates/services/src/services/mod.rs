pub mod catalog;
pub mod classifier;
pub mod config;
pub mod conversation;
pub mod pages;
pub mod preview;
pub mod timeline;
