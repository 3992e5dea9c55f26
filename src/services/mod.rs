pub mod crud;
pub mod giros;

pub use crud::{prepare_create, prepare_update};
pub use giros::{group_giros, Giro, GirosGroup};
