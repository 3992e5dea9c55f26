// handlers/elevated/mod.rs - Elevated handlers (admin identity required)
//
// Routes here sit behind both `jwt_auth_middleware` and `require_admin`.
pub mod register;

pub use register::register;
