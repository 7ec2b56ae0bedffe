//! Leptos components.
//!
//! This module provides Leptos SSR components following ShadCN-UI design
//! principles.
//!
//! # Structure
//!
//! - [`components`]: styled avatar components
//! - [`primitives`]: unstyled building blocks that own loading state

pub mod components;
pub mod primitives;
