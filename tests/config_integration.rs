use leptos_avatar::config::{OutputFormat, Settings};
use serial_test::serial;
use std::env;
use std::io::Write;

// Helper to clear environment variables that might interfere with tests
fn clear_env_vars() {
    unsafe {
        env::remove_var("AVATAR_OUTPUT__FORMAT");
        env::remove_var("AVATAR_OUTPUT__PRETTY");
        env::remove_var("AVATAR_FALLBACK__TEXT");
        env::remove_var("AVATAR_CONFIG");
    }
}

#[test]
#[serial]
fn test_default_config() {
    clear_env_vars();

    let (_, settings) = Settings::load_from_args(["avatar-render"]).expect("defaults load");
    assert_eq!(settings.output.format, OutputFormat::Html);
    assert!(!settings.output.pretty);
    assert_eq!(settings.fallback.text, "?");
}

#[test]
#[serial]
fn test_env_override() {
    clear_env_vars();
    unsafe {
        env::set_var("AVATAR_OUTPUT__FORMAT", "json");
        env::set_var("AVATAR_FALLBACK__TEXT", "NA");
    }

    let (_, settings) = Settings::load_from_args(["avatar-render"]).expect("env loads");
    assert_eq!(settings.output.format, OutputFormat::Json);
    assert_eq!(settings.fallback.text, "NA");

    clear_env_vars();
}

#[test]
#[serial]
fn test_cli_beats_env() {
    clear_env_vars();
    unsafe {
        env::set_var("AVATAR_OUTPUT__FORMAT", "json");
    }

    let (cli, settings) =
        Settings::load_from_args(["avatar-render", "--format", "html", "--fallback", "AL"])
            .expect("args load");
    assert_eq!(settings.output.format, OutputFormat::Html);
    assert_eq!(settings.fallback.text, "AL");
    assert_eq!(cli.fallback.as_deref(), Some("AL"));

    clear_env_vars();
}

#[test]
#[serial]
fn test_file_load() -> anyhow::Result<()> {
    clear_env_vars();

    let mut file = tempfile::Builder::new().suffix(".yaml").tempfile()?;
    writeln!(file, "output:\n  format: json\n  pretty: true\nfallback:\n  text: \"--\"")?;
    let path = file.path().to_string_lossy().to_string();

    let (_, settings) = Settings::load_from_args(["avatar-render", "--config", path.as_str()])?;
    assert_eq!(settings.output.format, OutputFormat::Json);
    assert!(settings.output.pretty);
    assert_eq!(settings.fallback.text, "--");

    Ok(())
}

#[test]
#[serial]
fn test_invalid_format_is_rejected() {
    clear_env_vars();

    let result = Settings::load_from_args(["avatar-render", "--format", "xml"]);
    assert!(result.is_err());
}
