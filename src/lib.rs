pub mod apis;
pub mod catalog;
pub mod config;
pub mod constants;
pub mod domain;
pub mod error;
pub mod graphql;
pub mod logging;
pub mod observability;
pub mod server;
pub mod xml;

// Layered boundaries for application ports and their infrastructure
pub mod app;
pub mod infra;
