pub mod client;
pub mod config;
pub mod database;
pub mod form;
pub mod handler;
pub mod server;
pub mod store;
