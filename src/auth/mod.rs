//! # Authentication
//!
//! Admin credentials and bearer tokens.
//!
//! - [`password`] - the opaque hash/verify capability ([`Argon2Hasher`])
//! - [`token`] - minting and verifying signed, time-limited tokens ([`TokenIssuer`])
//! - [`service`] - the login and registration flows ([`AuthService`])

pub mod error;
pub mod password;
pub mod service;
pub mod token;

pub use error::*;
pub use password::*;
pub use service::*;
pub use token::*;
