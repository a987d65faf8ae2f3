pub mod client;
pub mod config;
pub mod install_link;
pub mod invite;
pub mod platform;
pub mod safe_link;
