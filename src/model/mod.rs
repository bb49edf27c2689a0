//! Pure data structures (records and DTOs) managed by the resource actors.

/// Declares a type-safe surrogate key: a `u32` newtype that the actor framework can
/// generate (`From<u32>`) and that serializes as a bare integer.
macro_rules! surrogate_id {
    ($(#[$meta:meta])* $name:ident) => {
        $(#[$meta])*
        #[derive(
            Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash,
            serde::Serialize, serde::Deserialize,
        )]
        #[serde(transparent)]
        pub struct $name(pub u32);

        impl From<u32> for $name {
            fn from(id: u32) -> Self {
                Self(id)
            }
        }

        impl std::fmt::Display for $name {
            fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
                write!(f, "{}", self.0)
            }
        }
    };
}

pub mod admin;
pub mod menu;
pub mod order;

pub use admin::*;
pub use menu::*;
pub use order::*;
