pub mod activity;
pub mod conversation;
pub mod crew_member;
pub mod dashboard;
pub mod landing;
pub mod message;
pub mod navigation;
pub mod template;
