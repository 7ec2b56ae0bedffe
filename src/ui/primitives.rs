//! Unstyled avatar primitives.
//!
//! [`RootPrimitive`] owns the image loading status and shares it through
//! [`AvatarContext`]. [`ImagePrimitive`] drives that status from the
//! element's `load`/`error` events and [`FallbackPrimitive`] reads it, so the
//! two are never visible at the same time once the fallback delay elapsed.
//!
//! Both children are always emitted; visibility is toggled with the `hidden`
//! attribute so server-rendered markup hydrates into the same tree.
//!
//! Every primitive takes already-composed [`Attributes`]. They are spread
//! before the fixed `data-slot` and `class`, which the primitive always sets
//! itself.

use std::time::Duration;

use leptos::attr::any_attribute::{AnyAttribute, IntoAnyAttribute};
use leptos::attr::custom::custom_attribute;
use leptos::prelude::*;
use tracing::{debug, warn};

use crate::avatar::{Attributes, AvatarPart, ImageEvent, ImageLoadingStatus};

/// Loading status shared by the parts of one avatar.
#[derive(Debug, Clone, Copy)]
pub struct AvatarContext {
    pub status: RwSignal<ImageLoadingStatus>,
}

fn spread(attrs: Attributes) -> Vec<AnyAttribute> {
    attrs
        .iter()
        .map(|(name, value)| custom_attribute(name.to_string(), value.to_string()).into_any_attr())
        .collect()
}

fn avatar_context(part: AvatarPart) -> AvatarContext {
    use_context::<AvatarContext>().unwrap_or_else(|| {
        warn!(
            part = part.marker(),
            "Avatar part rendered outside of RootPrimitive"
        );
        AvatarContext {
            status: RwSignal::new(ImageLoadingStatus::Idle),
        }
    })
}

/// Container providing [`AvatarContext`] to its children.
#[component]
pub fn RootPrimitive(
    /// Part marker, rendered as `data-slot`.
    data_slot: &'static str,
    /// Final class list.
    #[prop(into)]
    class: String,
    /// Forwarded attributes.
    #[prop(optional)]
    attrs: Attributes,
    children: Children,
) -> impl IntoView {
    provide_context(AvatarContext {
        status: RwSignal::new(ImageLoadingStatus::Idle),
    });
    let attrs = spread(attrs);

    view! {
        <span {..attrs} data-slot=data_slot class=class>
            {children()}
        </span>
    }
}

/// Image element reporting its loading status to the enclosing root.
#[component]
pub fn ImagePrimitive(
    /// Part marker, rendered as `data-slot`.
    data_slot: &'static str,
    /// Final class list.
    #[prop(into)]
    class: String,
    /// Image source URL. Missing or blank sources fail immediately.
    src: Option<String>,
    /// Alt text.
    alt: Option<String>,
    /// Forwarded attributes.
    #[prop(optional)]
    attrs: Attributes,
    /// Invoked with every status change (client only).
    on_loading_status_change: Option<Callback<ImageLoadingStatus>>,
) -> impl IntoView {
    let status = avatar_context(AvatarPart::Image).status;
    status.set(ImageLoadingStatus::for_source(src.as_deref().unwrap_or_default()));
    let attrs = spread(attrs);

    let transition = move |event: ImageEvent| {
        let next = status.get_untracked().next(event);
        debug!(?event, ?next, "Avatar image status changed");
        status.set(next);
    };

    if let Some(callback) = on_loading_status_change {
        Effect::new(move |_| callback.run(status.get()));
    }

    view! {
        <img
            {..attrs}
            data-slot=data_slot
            class=class
            src=src
            alt=alt
            hidden=move || !status.get().shows_image()
            on:load=move |_| transition(ImageEvent::Load)
            on:error=move |_| transition(ImageEvent::Error)
        />
    }
}

/// Content shown while the image is not loaded.
///
/// With `delay_ms` set the fallback stays hidden until the delay elapsed,
/// which avoids a flash for images that load quickly. The timer only runs in
/// the browser, so a delayed fallback is server-rendered hidden.
#[component]
pub fn FallbackPrimitive(
    /// Part marker, rendered as `data-slot`.
    data_slot: &'static str,
    /// Final class list.
    #[prop(into)]
    class: String,
    /// Delay before the fallback may show.
    delay_ms: Option<u64>,
    /// Forwarded attributes.
    #[prop(optional)]
    attrs: Attributes,
    children: Children,
) -> impl IntoView {
    let status = avatar_context(AvatarPart::Fallback).status;
    let delay_elapsed = RwSignal::new(delay_ms.is_none());
    let attrs = spread(attrs);

    if let Some(ms) = delay_ms {
        Effect::new(move |_| {
            set_timeout(
                move || delay_elapsed.set(true),
                Duration::from_millis(ms),
            );
        });
    }

    view! {
        <span
            {..attrs}
            data-slot=data_slot
            class=class
            hidden=move || !status.get().shows_fallback(delay_elapsed.get())
        >
            {children()}
        </span>
    }
}
