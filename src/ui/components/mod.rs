//! ShadCN-style avatar components.
//!
//! - [`Avatar`]: circular container
//! - [`AvatarImage`]: image shown once loaded
//! - [`AvatarFallback`]: content shown until then

mod avatar;

pub use avatar::{Avatar, AvatarFallback, AvatarImage};
