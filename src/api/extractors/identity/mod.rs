/*!
 * Authenticated identity extractor
 *
 * Responsibility:
 * - hand the identity attached by the basic auth gate to handlers
 * - axum-specific glue lives in core, the plain type in types
 *
 * Public API:
 * - Identity
 * - CurrentUser
 */

mod core;
mod types;

pub use core::CurrentUser;
pub use types::Identity;
