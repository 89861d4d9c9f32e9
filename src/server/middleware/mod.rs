//! Request middleware and access guards.
//!
//! - `auth` - Verifies bearer tokens against stored sessions and attaches `AuthUser`
//! - `hotel` - Rejects users whose ticket does not include a hotel stay

pub mod auth;
pub mod hotel;

#[cfg(test)]
mod test;
