/*
 * Responsibility
 * - shared context bound to the Router (AppState)
 * - cheap to Clone (PgPool is an Arc internally)
 * - basic auth credentials are owned by middleware::auth::basic
 */
use sqlx::PgPool;

#[derive(Clone, Debug)]
pub struct AppState {
    pub db: PgPool,
}

impl AppState {
    pub fn new(db: PgPool) -> Self {
        Self { db }
    }
}
