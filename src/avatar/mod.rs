//! Framework-independent avatar contract.
//!
//! An avatar has three parts: a circular container, an image and a fallback.
//! Each part owns a fixed marker and base style token; callers supply a style
//! override and an open set of properties that pass through untouched.
//!
//! - [`part`]: parts, caller props and composition into [`Instruction`]s
//! - [`attributes`]: the open attribute set and the [`Passthrough`] capability
//! - [`status`]: image loading state shared by image and fallback
//! - [`markup`]: HTML string rendering for callers without a reactive runtime

pub mod attributes;
pub mod markup;
pub mod part;
pub mod status;

pub use attributes::{AttributeError, Attributes, Passthrough};
pub use part::{AvatarPart, Instruction, PartProps};
pub use status::{ImageEvent, ImageLoadingStatus};
