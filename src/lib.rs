//! Leptos Avatar
//!
//! ShadCN-style avatar components: a circular container, an image that shows
//! once it has loaded and a fallback shown until then.
//!
//! # Architecture
//!
//! - **Style merge**: utility-class composition where later classes override
//!   conflicting earlier ones
//! - **Contract**: framework-independent parts, props and rendering
//!   instructions, plus HTML string rendering
//! - **UI**: Leptos SSR components on top of unstyled primitives
//!
//! # Modules
//!
//! - [`style`]: class merging ([`cn!`])
//! - [`avatar`]: parts, props, loading status and markup
//! - [`ui`]: Leptos components
//! - [`config`]: settings for the `avatar-render` binary
//! - [`render`]: avatar assembly for the `avatar-render` binary

pub mod avatar;
pub mod config;
pub mod render;
pub mod style;
pub mod ui;

pub use ui::components::{Avatar, AvatarFallback, AvatarImage};
