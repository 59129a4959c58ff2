/*
 * Responsibility
 * - public entry points of the middleware layers (apply functions)
 */
pub mod auth;
pub mod http;
