// handlers/mod.rs - handlers split by security tier
//
// Public (no auth) → Protected (bearer token required)
pub mod protected;
pub mod public;
pub mod utils;
