pub mod api;
pub mod approx;
pub mod config;
pub mod customer;
pub mod error;
pub mod geo;
pub mod ingest;
pub mod invite;
