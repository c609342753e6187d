pub mod config;
pub mod logging;

pub mod crawler;
pub mod fetch;
pub mod job;
pub mod links;
pub mod mirror_path;
pub mod store;
pub mod visited;
