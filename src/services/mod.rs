/*
 * Responsibility
 * - domain logic that knows nothing about routing (auth decoding, ...)
 */
pub mod auth;
