pub mod app;
pub mod config;
pub mod error;
pub mod extract;
pub mod openapi;
pub mod routes;
