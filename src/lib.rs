pub mod commerce_client;
pub mod configuration;
pub mod constants;
pub mod domain;
pub mod errors;
pub mod gateway_client;
pub mod openapi;
pub mod pending_checkout;
pub mod redis;
pub mod routes;
pub mod schemas;
pub mod startup;
pub mod telemetry;
pub mod tests;
pub mod utils;
