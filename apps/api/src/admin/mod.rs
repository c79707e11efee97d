// Admin panel backend: stats, user and document management, webhook config.
// Every mutation is applied only after the underlying store confirms it, so a
// failed call leaves state untouched.

pub mod filter;
pub mod handlers;
