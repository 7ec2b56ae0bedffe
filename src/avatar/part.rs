//! Avatar parts and their composition into rendering instructions.

use serde::Serialize;
use tracing::debug;

use super::attributes::{AttributeError, Attributes, Passthrough};
use crate::cn;

/// Semantic part of an avatar.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub enum AvatarPart {
    /// Circular container.
    #[serde(rename = "avatar")]
    Root,
    /// Image filling the container.
    #[serde(rename = "avatar-image")]
    Image,
    /// Content shown while the image is unavailable.
    #[serde(rename = "avatar-fallback")]
    Fallback,
}

impl AvatarPart {
    /// Fixed `data-slot` marker identifying this part.
    #[must_use]
    pub const fn marker(self) -> &'static str {
        match self {
            Self::Root => "avatar",
            Self::Image => "avatar-image",
            Self::Fallback => "avatar-fallback",
        }
    }

    /// Base style token applied before any caller override.
    #[must_use]
    pub const fn base_classes(self) -> &'static str {
        match self {
            Self::Root => "relative flex size-8 shrink-0 overflow-hidden rounded-full",
            Self::Image => "aspect-square size-full",
            Self::Fallback => "bg-muted flex size-full items-center justify-center rounded-full",
        }
    }

    /// Composes caller props into a rendering instruction.
    ///
    /// The marker is always this part's own. A `class` carried in the open
    /// set is merged after the typed override; a `data-slot` is dropped.
    pub fn compose<F: Passthrough>(self, props: PartProps<F>) -> Instruction<F> {
        let PartProps { class, mut rest } = props;

        if let Some(ignored) = rest.take_marker() {
            debug!(
                part = self.marker(),
                ignored = %ignored,
                "Dropping caller-supplied data-slot"
            );
        }
        let extra = rest.take_class();

        Instruction {
            part: self,
            class: cn!(self.base_classes(), class, extra),
            rest,
        }
    }
}

/// Caller configuration for one part: a style override plus an open set of
/// properties forwarded unchanged.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct PartProps<F = Attributes> {
    /// Style override merged after the part's base classes.
    pub class: Option<String>,
    /// Everything else, forwarded verbatim.
    pub rest: F,
}

impl<F> PartProps<F> {
    /// Sets the style override.
    #[must_use]
    pub fn class(mut self, class: impl Into<String>) -> Self {
        self.class = Some(class.into());
        self
    }
}

impl PartProps<Attributes> {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Adds a forwarded attribute.
    pub fn attr(
        mut self,
        name: impl Into<String>,
        value: impl Into<String>,
    ) -> Result<Self, AttributeError> {
        self.rest.insert(name, value)?;
        Ok(self)
    }
}

/// Rendering instruction handed to the underlying primitive.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Instruction<F = Attributes> {
    pub part: AvatarPart,
    pub class: String,
    pub rest: F,
}

impl<F> Instruction<F> {
    #[must_use]
    pub fn marker(&self) -> &'static str {
        self.part.marker()
    }
}
