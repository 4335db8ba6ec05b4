pub mod app;
pub mod auth;
pub mod config;
pub mod db;
pub mod errors;
pub mod extract;
pub mod logging;
pub mod models;
pub mod routes;
pub mod services;
pub mod state;

#[cfg(test)]
pub mod testing;
