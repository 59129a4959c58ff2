/*
 * Responsibility
 * - public surface of the HTTP API (routes() re-export)
 */
pub mod docs;
pub mod dto;
pub mod extractors;
pub mod handlers;
mod routes;

pub use routes::routes;
