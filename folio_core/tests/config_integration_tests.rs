//! Integration tests for the configuration module

use folio_core::utils::config::{Config, THEME_DARK, THEME_LIGHT};
use pretty_assertions::assert_eq;
use serial_test::serial;
use std::env;
use std::fs;
use tempfile::TempDir;

#[test]
fn test_config_full_lifecycle() -> Result<(), Box<dyn std::error::Error>> {
    let temp_dir = TempDir::new()?;
    let config_path = temp_dir.path().join("test_config.yaml");

    let mut original_config = Config::default();
    original_config.set_theme(THEME_LIGHT);

    // Save the config
    original_config.save_to_file(&config_path)?;

    // Verify file exists and has content
    assert!(config_path.exists());
    let file_content = fs::read_to_string(&config_path)?;
    assert!(file_content.contains("theme"));
    assert!(file_content.contains("light"));

    // Load the config
    let loaded_config = Config::load_from_file(&config_path)?;
    assert_eq!(loaded_config.theme(), Some(THEME_LIGHT));

    Ok(())
}

#[test]
fn test_toggle_round_trip_overrides_system_preference(
) -> Result<(), Box<dyn std::error::Error>> {
    // Simulates: toggle, "reload", resolve. The persisted value must win
    // regardless of what the OS reports.
    let temp_dir = TempDir::new()?;
    let config_path = temp_dir.path().join("config.yaml");

    let mut config = Config::default();
    config.set_theme(THEME_LIGHT);
    config.set_theme(THEME_DARK);
    config.save_to_file(&config_path)?;

    let reloaded = Config::load_from_file(&config_path)?;
    assert_eq!(reloaded.theme(), Some(THEME_DARK));

    Ok(())
}

#[test]
#[serial]
fn test_config_load_or_default_flow() -> Result<(), Box<dyn std::error::Error>> {
    let temp_dir = TempDir::new()?;

    // Override HOME environment variable
    let original_home = env::var("HOME").ok();
    env::set_var("HOME", temp_dir.path());

    // No config file yet: defaults, no persisted theme
    let config = Config::load_or_default()?;
    assert!(config.theme().is_none());

    // Create a config file in the expected location (.folio/config.yaml)
    let folio_dir = temp_dir.path().join(".folio");
    fs::create_dir_all(&folio_dir)?;
    let config_path = folio_dir.join("config.yaml");

    let mut custom_config = Config::default();
    custom_config.set_theme(THEME_LIGHT);
    custom_config.save_to_file(&config_path)?;

    let loaded_config = Config::load_or_default()?;
    assert_eq!(loaded_config.theme(), Some(THEME_LIGHT));

    // Restore original HOME
    match original_home {
        Some(home) => env::set_var("HOME", home),
        None => env::remove_var("HOME"),
    }

    Ok(())
}

#[test]
#[serial]
fn test_save_creates_config_directory() -> Result<(), Box<dyn std::error::Error>> {
    let temp_dir = TempDir::new()?;

    let original_home = env::var("HOME").ok();
    env::set_var("HOME", temp_dir.path());

    let mut config = Config::default();
    config.set_theme(THEME_DARK);
    config.save()?;

    let expected = temp_dir.path().join(".folio").join("config.yaml");
    assert!(expected.exists());

    let reloaded = Config::load_or_default()?;
    assert_eq!(reloaded.theme(), Some(THEME_DARK));

    match original_home {
        Some(home) => env::set_var("HOME", home),
        None => env::remove_var("HOME"),
    }

    Ok(())
}

#[test]
#[serial]
fn test_get_config_path_uses_home() {
    let original_home = env::var("HOME").ok();
    env::set_var("HOME", "/test/home");

    assert_eq!(Config::get_config_path(), "/test/home/.folio/config.yaml");

    match original_home {
        Some(home) => env::set_var("HOME", home),
        None => env::remove_var("HOME"),
    }
}

#[test]
fn test_corrupt_config_falls_back_to_default() -> Result<(), Box<dyn std::error::Error>> {
    let temp_dir = TempDir::new()?;
    let config_path = temp_dir.path().join("config.yaml");
    fs::write(&config_path, ":::: not yaml ::::")?;

    assert!(Config::load_from_file(&config_path).is_err());

    Ok(())
}
