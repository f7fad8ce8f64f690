pub mod client;
pub mod models;
pub mod preflight;
pub mod report;
pub mod routes;
pub mod services;
pub mod tools;
pub mod views;
