pub mod catalog;
pub mod element;
pub mod fractal;
pub mod nheko;
pub mod weechat;

pub use catalog::{Catalog, ClientFilter};
