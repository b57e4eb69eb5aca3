//! Shared application state, passed to handlers by the router.

use crate::auth::JwtSecret;
use crate::db::DbPool;

/// Shared application state: the store handle and the token signer. Both
/// are injected here at startup; handlers never reach for globals.
#[derive(Clone)]
pub struct AppState {
    pub db: DbPool,
    pub jwt_secret: JwtSecret,
}

impl AppState {
    pub fn db(&self) -> &DbPool {
        &self.db
    }
    pub fn jwt_secret(&self) -> &JwtSecret {
        &self.jwt_secret
    }
}
