// handlers/public/mod.rs - Public handlers (no authentication required)
pub mod albums;
pub mod login;
pub mod mockapi;
