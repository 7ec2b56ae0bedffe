//! Assembles the avatar described by CLI input and serializes it.

use tracing::debug;

use crate::avatar::markup::{self, Element, Node};
use crate::avatar::{AttributeError, Attributes, PartProps};
use crate::config::{Cli, OutputFormat, OutputSettings, Settings};

/// Builds the avatar tree: container, optional image, fallback.
pub fn build(cli: &Cli, settings: &Settings) -> Result<Element, AttributeError> {
    let mut children: Vec<Node> = Vec::with_capacity(2);

    if let Some(src) = &cli.src {
        let mut rest = Attributes::new().with("src", src.as_str())?;
        if let Some(alt) = &cli.alt {
            rest.insert("alt", alt.as_str())?;
        }
        children.push(
            markup::avatar_image(PartProps {
                class: cli.image_class.clone(),
                rest,
            })
            .into(),
        );
    }

    let text = cli.fallback.as_deref().unwrap_or(&settings.fallback.text);
    children.push(
        markup::avatar_fallback(
            PartProps {
                class: cli.fallback_class.clone(),
                rest: Attributes::new(),
            },
            vec![text.into()],
        )
        .into(),
    );

    let root = PartProps {
        class: cli.class.clone(),
        rest: cli.attributes()?,
    };
    debug!(
        attrs = root.rest.len(),
        has_image = cli.src.is_some(),
        "Building avatar"
    );
    Ok(markup::avatar(root, children))
}

/// Serializes the tree in the configured format.
pub fn render(avatar: &Element, output: &OutputSettings) -> Result<String, serde_json::Error> {
    match output.format {
        OutputFormat::Html => Ok(avatar.to_html()),
        OutputFormat::Json if output.pretty => serde_json::to_string_pretty(avatar),
        OutputFormat::Json => serde_json::to_string(avatar),
    }
}
