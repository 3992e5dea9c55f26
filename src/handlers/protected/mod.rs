// handlers/protected/mod.rs - Protected handlers (bearer token required)
//
// Every route here sits behind `jwt_auth_middleware`, which puts an
// `AuthUser` into the request extensions.
pub mod auth;
pub mod cambio_pensum;
pub mod consulta;
pub mod crud;
pub mod giros;
pub mod programas;
pub mod reintegros;
pub mod renovaciones;
pub mod usuarios;
