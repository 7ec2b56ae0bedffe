//! Avatar component with image and fallback support.

use leptos::prelude::*;

use crate::avatar::{Attributes, AvatarPart, ImageLoadingStatus, Instruction, PartProps};
use crate::ui::primitives::{FallbackPrimitive, ImagePrimitive, RootPrimitive};

fn compose(part: AvatarPart, class: Option<String>, attrs: Attributes) -> Instruction {
    part.compose(PartProps { class, rest: attrs })
}

/// Circular avatar container.
///
/// `attrs` are forwarded to the container element. A `class` among them is
/// merged after `class`; a `data-slot` is dropped so the marker stays
/// `avatar`. Raw Leptos spreads (`attr:title`) are applied by Leptos after
/// the component renders and bypass that filtering.
///
/// # Example
///
/// ```rust,ignore
/// view! {
///     <Avatar class="ring-2">
///         <AvatarImage src="/images/user.jpg" alt="User" />
///         <AvatarFallback>"JD"</AvatarFallback>
///     </Avatar>
/// }
/// ```
#[component]
pub fn Avatar(
    /// Additional CSS classes, overriding conflicting base classes.
    #[prop(optional, into)]
    class: Option<String>,
    /// Attributes forwarded to the container.
    #[prop(optional)]
    attrs: Attributes,
    /// Image and fallback.
    children: Children,
) -> impl IntoView {
    let Instruction { part, class, rest } = compose(AvatarPart::Root, class, attrs);

    view! {
        <RootPrimitive data_slot=part.marker() class=class attrs=rest>
            {children()}
        </RootPrimitive>
    }
}

/// Avatar image, shown once it has loaded.
///
/// Without a `src` (or with a blank one) the image fails right away and the
/// fallback shows.
#[component]
pub fn AvatarImage(
    /// Image source URL.
    #[prop(optional, into)]
    src: Option<String>,
    /// Alt text for the image.
    #[prop(optional, into)]
    alt: Option<String>,
    /// Additional CSS classes.
    #[prop(optional, into)]
    class: Option<String>,
    /// Attributes forwarded to the image.
    #[prop(optional)]
    attrs: Attributes,
    /// Called with each loading status change.
    #[prop(optional)]
    on_loading_status_change: Option<Callback<ImageLoadingStatus>>,
) -> impl IntoView {
    let Instruction { part, class, rest } = compose(AvatarPart::Image, class, attrs);

    view! {
        <ImagePrimitive
            data_slot=part.marker()
            class=class
            src=src
            alt=alt
            attrs=rest
            on_loading_status_change=on_loading_status_change
        />
    }
}

/// Fallback content (usually initials) shown while the image is unavailable.
#[component]
pub fn AvatarFallback(
    /// Additional CSS classes.
    #[prop(optional, into)]
    class: Option<String>,
    /// Milliseconds to wait before showing the fallback.
    #[prop(optional)]
    delay_ms: Option<u64>,
    /// Attributes forwarded to the fallback.
    #[prop(optional)]
    attrs: Attributes,
    /// Fallback content.
    children: Children,
) -> impl IntoView {
    let Instruction { part, class, rest } = compose(AvatarPart::Fallback, class, attrs);

    view! {
        <FallbackPrimitive data_slot=part.marker() class=class delay_ms=delay_ms attrs=rest>
            {children()}
        </FallbackPrimitive>
    }
}
