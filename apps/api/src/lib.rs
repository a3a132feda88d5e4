pub mod assessment;
pub mod config;
pub mod db;
pub mod errors;
pub mod models;
pub mod profile;
pub mod routes;
pub mod state;
pub mod store;
