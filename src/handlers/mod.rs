// handlers/mod.rs - Handlers grouped by security tier
//
// Public (no auth) → Protected (bearer token) → Elevated (admin username)
pub mod elevated;
pub mod protected;
pub mod public;
