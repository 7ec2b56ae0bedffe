//! Avatar trees assembled from instructions.
//!
//! For HTML-first callers (HTMX fragments, static pages, the `avatar-render`
//! CLI) that build an avatar without writing a view. An [`Element`] renders
//! through the same primitives as the components in [`crate::ui`], so both
//! produce the same markup, and it serializes for JSON output.
//!
//! # Example
//!
//! ```rust
//! use leptos_avatar::avatar::{PartProps, markup};
//!
//! let html = markup::avatar(
//!     PartProps::new().class("ring-2"),
//!     vec![markup::avatar_fallback(PartProps::new(), vec!["AB".into()]).into()],
//! )
//! .to_html();
//! assert!(html.starts_with(r#"<span data-slot="avatar" class="#));
//! ```

use leptos::prelude::*;
use serde::Serialize;
use tracing::debug;

use super::attributes::Attributes;
use super::part::{AvatarPart, Instruction, PartProps};
use crate::ui::primitives::{FallbackPrimitive, ImagePrimitive, RootPrimitive};

/// Child of an [`Element`].
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(untagged)]
pub enum Node {
    /// Text content, escaped on render.
    Text(String),
    Element(Element),
}

impl From<&str> for Node {
    fn from(text: &str) -> Self {
        Self::Text(text.to_string())
    }
}

impl From<String> for Node {
    fn from(text: String) -> Self {
        Self::Text(text)
    }
}

impl From<Element> for Node {
    fn from(element: Element) -> Self {
        Self::Element(element)
    }
}

/// A composed avatar part with its children.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Element {
    pub instruction: Instruction<Attributes>,
    pub children: Vec<Node>,
}

impl Element {
    fn new(part: AvatarPart, props: PartProps, children: Vec<Node>) -> Self {
        Self {
            instruction: part.compose(props),
            children,
        }
    }

    /// Renders this element and its children to an HTML string.
    pub fn to_html(&self) -> String {
        let owner = Owner::new();
        owner.with(|| self.clone().into_view().to_html())
    }

    /// Converts the tree into the primitives' view.
    ///
    /// On the image, `src` and `alt` are taken out of the forwarded
    /// attributes and drive the loading status. Children of the image are
    /// ignored.
    pub fn into_view(self) -> AnyView {
        let Element {
            instruction: Instruction { part, class, mut rest },
            children,
        } = self;

        match part {
            AvatarPart::Root => {
                let children = into_views(children);
                view! {
                    <RootPrimitive data_slot=part.marker() class=class attrs=rest>
                        {children}
                    </RootPrimitive>
                }
                .into_any()
            }
            AvatarPart::Image => {
                if !children.is_empty() {
                    debug!(
                        part = part.marker(),
                        count = children.len(),
                        "Ignoring children of void element"
                    );
                }
                let src = rest.remove_ignore_case("src");
                let alt = rest.remove_ignore_case("alt");
                view! {
                    <ImagePrimitive
                        data_slot=part.marker()
                        class=class
                        src=src
                        alt=alt
                        attrs=rest
                        on_loading_status_change=None
                    />
                }
                .into_any()
            }
            AvatarPart::Fallback => {
                let children = into_views(children);
                view! {
                    <FallbackPrimitive data_slot=part.marker() class=class delay_ms=None attrs=rest>
                        {children}
                    </FallbackPrimitive>
                }
                .into_any()
            }
        }
    }
}

fn into_views(children: Vec<Node>) -> Vec<AnyView> {
    children
        .into_iter()
        .map(|child| match child {
            Node::Text(text) => text.into_any(),
            Node::Element(element) => element.into_view(),
        })
        .collect()
}

/// Avatar container.
pub fn avatar(props: PartProps, children: Vec<Node>) -> Element {
    Element::new(AvatarPart::Root, props, children)
}

/// Avatar image. `src`, `alt` and friends travel in the forwarded attributes.
pub fn avatar_image(props: PartProps) -> Element {
    Element::new(AvatarPart::Image, props, Vec::new())
}

/// Avatar fallback content.
pub fn avatar_fallback(props: PartProps, children: Vec<Node>) -> Element {
    Element::new(AvatarPart::Fallback, props, children)
}
