use clap::{Parser, ValueEnum};
use config::{Config, ConfigError, Environment, File};
use serde::Deserialize;

use crate::avatar::{AttributeError, Attributes};

#[derive(Parser, Debug)]
#[command(author, version, about = "Render an avatar as HTML or JSON", long_about = None)]
pub struct Cli {
    /// Config file path
    #[arg(short, long, env = "AVATAR_CONFIG")]
    pub config: Option<String>,

    /// Classes merged over the container's base classes
    #[arg(long)]
    pub class: Option<String>,

    /// Image source; the image is omitted when absent
    #[arg(long)]
    pub src: Option<String>,

    /// Image alt text
    #[arg(long)]
    pub alt: Option<String>,

    /// Fallback text (defaults to `fallback.text`)
    #[arg(long)]
    pub fallback: Option<String>,

    /// Classes merged over the image's base classes
    #[arg(long)]
    pub image_class: Option<String>,

    /// Classes merged over the fallback's base classes
    #[arg(long)]
    pub fallback_class: Option<String>,

    /// Extra container attribute, repeatable
    #[arg(long = "attr", value_name = "KEY=VALUE")]
    pub attrs: Vec<String>,

    /// Output format
    #[arg(long, value_enum)]
    pub format: Option<OutputFormat>,

    /// Pretty-print JSON output
    #[arg(long)]
    pub pretty: bool,
}

impl Cli {
    /// Container attributes collected from `--attr`.
    pub fn attributes(&self) -> Result<Attributes, AttributeError> {
        let mut attrs = Attributes::new();
        for pair in &self.attrs {
            attrs.insert_pair(pair)?;
        }
        Ok(attrs)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize, ValueEnum)]
#[serde(rename_all = "lowercase")]
pub enum OutputFormat {
    Html,
    Json,
}

impl OutputFormat {
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Html => "html",
            Self::Json => "json",
        }
    }
}

#[derive(Debug, Deserialize, Clone)]
pub struct Settings {
    pub output: OutputSettings,
    pub fallback: FallbackSettings,
}

#[derive(Debug, Deserialize, Clone)]
pub struct OutputSettings {
    pub format: OutputFormat,
    pub pretty: bool,
}

#[derive(Debug, Deserialize, Clone)]
pub struct FallbackSettings {
    pub text: String,
}

impl Settings {
    /// Layers defaults, the optional config file, `AVATAR_*` environment
    /// variables and CLI flags, in increasing priority.
    pub fn load(cli: &Cli) -> Result<Self, ConfigError> {
        let mut builder = Config::builder()
            .set_default("output.format", "html")?
            .set_default("output.pretty", false)?
            .set_default("fallback.text", "?")?;

        if let Some(path) = &cli.config {
            builder = builder.add_source(File::with_name(path));
        }

        // E.g. AVATAR_OUTPUT__FORMAT=json
        builder = builder.add_source(
            Environment::with_prefix("AVATAR")
                .prefix_separator("_")
                .separator("__")
                .try_parsing(true),
        );

        if let Some(format) = cli.format {
            builder = builder.set_override("output.format", format.as_str())?;
        }
        if cli.pretty {
            builder = builder.set_override("output.pretty", true)?;
        }
        if let Some(text) = &cli.fallback {
            builder = builder.set_override("fallback.text", text.as_str())?;
        }

        builder.build()?.try_deserialize()
    }

    pub fn load_from_args<I, T>(args: I) -> Result<(Cli, Self), ConfigError>
    where
        I: IntoIterator<Item = T>,
        T: Into<std::ffi::OsString> + Clone,
    {
        let cli =
            Cli::try_parse_from(args).map_err(|e| ConfigError::Message(e.to_string()))?;
        let settings = Self::load(&cli)?;
        Ok((cli, settings))
    }
}
