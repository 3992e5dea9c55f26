// handlers/public/mod.rs - Public handlers (no authentication required)
//
// Token acquisition, the liveness probe and the static front-end pages.
pub mod health;
pub mod login;
pub mod pages;

pub use health::healthz;
pub use login::login;
pub use pages::{consultar_page, login_page};
