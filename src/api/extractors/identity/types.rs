/*
 * Responsibility
 * - the "authenticated user" type handlers see
 * - the gate inserts it into request extensions; it lives for one request only
 */

/// Identity attached to a request that passed basic auth.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Identity {
    pub name: String,
}

impl Identity {
    pub fn new(name: impl Into<String>) -> Self {
        Self { name: name.into() }
    }
}
