// handlers/protected/mod.rs - Handlers behind jwt_auth_middleware
//
// Every handler here can rely on an `AuthUser` request extension.
pub mod albums;
