pub mod builder;
#[allow(clippy::module_inception)]
pub mod client;
pub mod models;
pub mod urls;
