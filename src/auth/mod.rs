//! Authentication: register, login, current user, JWT.

mod handlers;
mod jwt;
mod service;

pub use handlers::{login, me, register};
pub use jwt::{Claims, JwtSecret};
pub use service::AuthAppService;
