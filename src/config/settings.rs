use std::collections::HashMap;
use std::fs;
use std::path::Path;
use std::time::Duration;

use serde::Deserialize;

use crate::data::DEFAULT_PAGE_SIZE;
use crate::ui::action::Action;

use super::default_keys::default_keybindings;
use super::keys::{parse_key_notation, KeyCombo, KeyContext, KeybindingConfig};

/// Example configuration file contents (bundled with the binary)
pub const EXAMPLE_CONFIG: &str = include_str!("config.toml.example");

/// Default quiet period before a typed search is applied
pub const DEFAULT_SEARCH_DEBOUNCE_MS: u64 = 150;

/// Application configuration
#[derive(Debug, Clone)]
pub struct Config {
    /// Rows shown per table page
    pub page_size: usize,
    /// Quiet period before a typed search is applied
    pub search_debounce: Duration,
    /// Keybinding configuration
    pub keybindings: KeybindingConfig,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            page_size: DEFAULT_PAGE_SIZE,
            search_debounce: Duration::from_millis(DEFAULT_SEARCH_DEBOUNCE_MS),
            keybindings: default_keybindings(),
        }
    }
}

/// TOML representation of the `[directory]` section
#[derive(Debug, Clone, Default, Deserialize)]
pub struct TomlDirectoryConfig {
    pub page_size: Option<usize>,
    pub search_debounce_ms: Option<u64>,
}

/// TOML representation of keybinding configuration
///
/// Entries map an action name to a key, e.g. `add_record = "a"`.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct TomlKeybindings {
    /// Global keybindings (apply to all contexts)
    #[serde(flatten)]
    pub global: HashMap<String, toml::Value>,

    pub table: Option<HashMap<String, String>>,
    pub search: Option<HashMap<String, String>>,
    pub form: Option<HashMap<String, String>>,
    pub dialog: Option<HashMap<String, String>>,
}

/// TOML representation of the config file
#[derive(Debug, Clone, Default, Deserialize)]
pub struct TomlConfig {
    pub directory: Option<TomlDirectoryConfig>,
    pub keys: Option<TomlKeybindings>,
}

impl TomlKeybindings {
    /// Convert TOML keybindings to KeybindingConfig
    fn to_keybinding_config(&self) -> KeybindingConfig {
        let mut config = KeybindingConfig::new();

        for (action_name, value) in &self.global {
            // Context tables are picked up by their own fields
            let Some(key_str) = value.as_str() else {
                continue;
            };
            if let Some((combo, action)) = parse_binding(action_name, key_str) {
                config.global.insert(combo, action);
            }
        }

        let sections = [
            (KeyContext::Table, &self.table),
            (KeyContext::Search, &self.search),
            (KeyContext::Form, &self.form),
            (KeyContext::Dialog, &self.dialog),
        ];
        for (context, bindings) in sections {
            if let Some(bindings) = bindings {
                parse_context_bindings(&mut config, context, bindings);
            }
        }

        config
    }
}

fn parse_binding(action_name: &str, key_str: &str) -> Option<(KeyCombo, Action)> {
    let Some(action) = Action::from_name(action_name) else {
        tracing::warn!(action = action_name, "Unknown action in config, ignoring");
        return None;
    };
    match parse_key_notation(key_str) {
        Ok(combo) => Some((combo, action)),
        Err(e) => {
            tracing::warn!(action = action_name, key = key_str, error = %e, "Invalid key in config");
            None
        }
    }
}

/// Parse context-specific keybindings
fn parse_context_bindings(
    config: &mut KeybindingConfig,
    context: KeyContext,
    bindings: &HashMap<String, String>,
) {
    let context_map = config.context.entry(context).or_default();
    for (action_name, key_str) in bindings {
        if let Some((combo, action)) = parse_binding(action_name, key_str) {
            context_map.insert(combo, action);
        }
    }
}

impl Config {
    /// Load configuration from `path`, merging with defaults.
    ///
    /// The bundled example is written on first run. An unreadable or invalid
    /// file leaves the defaults in place.
    pub fn load(path: &Path) -> Self {
        if !path.exists() {
            Self::create_default_config(path);
        }

        match fs::read_to_string(path) {
            Ok(contents) => Self::from_toml_str(&contents),
            Err(e) => {
                tracing::warn!(path = %path.display(), error = %e, "Could not read config");
                Config::default()
            }
        }
    }

    /// Build a configuration from TOML text on top of the defaults
    pub fn from_toml_str(contents: &str) -> Self {
        let mut config = Config::default();

        let toml_config = match toml::from_str::<TomlConfig>(contents) {
            Ok(parsed) => parsed,
            Err(e) => {
                tracing::warn!(error = %e, "Invalid config.toml, using defaults");
                return config;
            }
        };

        if let Some(directory) = toml_config.directory {
            if let Some(page_size) = directory.page_size {
                config.page_size = page_size.max(1);
            }
            if let Some(ms) = directory.search_debounce_ms {
                config.search_debounce = Duration::from_millis(ms);
            }
        }

        // Merge user keybindings on top of defaults
        if let Some(keys) = toml_config.keys {
            config.keybindings.merge(keys.to_keybinding_config());
        }

        config
    }

    /// Create the default config file from the bundled example
    fn create_default_config(path: &Path) {
        if let Some(parent) = path.parent() {
            if let Err(e) = fs::create_dir_all(parent) {
                tracing::warn!(error = %e, "Failed to create config directory");
                return;
            }
        }

        if let Err(e) = fs::write(path, EXAMPLE_CONFIG) {
            tracing::warn!(error = %e, "Failed to write default config");
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn lookup(config: &Config, key: &str, ctx: KeyContext) -> Option<Action> {
        config
            .keybindings
            .get_action(&parse_key_notation(key).unwrap(), ctx)
    }

    #[test]
    fn test_example_config_parses_to_defaults() {
        let config = Config::from_toml_str(EXAMPLE_CONFIG);
        assert_eq!(config.page_size, DEFAULT_PAGE_SIZE);
        assert_eq!(config.search_debounce, Duration::from_millis(150));
    }

    #[test]
    fn test_directory_section() {
        let config = Config::from_toml_str(
            r#"
            [directory]
            page_size = 10
            search_debounce_ms = 300
            "#,
        );
        assert_eq!(config.page_size, 10);
        assert_eq!(config.search_debounce, Duration::from_millis(300));
    }

    #[test]
    fn test_zero_page_size_is_clamped() {
        let config = Config::from_toml_str("[directory]\npage_size = 0\n");
        assert_eq!(config.page_size, 1);
    }

    #[test]
    fn test_invalid_toml_falls_back_to_defaults() {
        let config = Config::from_toml_str("[directory\npage_size = ");
        assert_eq!(config.page_size, DEFAULT_PAGE_SIZE);
        assert_eq!(lookup(&config, "a", KeyContext::Table), Some(Action::AddRecord));
    }

    #[test]
    fn test_keys_merge_over_defaults() {
        let config = Config::from_toml_str(
            r#"
            [keys]
            quit = "C-x"

            [keys.table]
            add_record = "n"
            not_an_action = "z"
            "#,
        );
        assert_eq!(lookup(&config, "C-x", KeyContext::Form), Some(Action::Quit));
        assert_eq!(lookup(&config, "n", KeyContext::Table), Some(Action::AddRecord));
        // Defaults survive
        assert_eq!(lookup(&config, "a", KeyContext::Table), Some(Action::AddRecord));
        assert_eq!(lookup(&config, "z", KeyContext::Table), None);
    }

    #[test]
    fn test_load_writes_example_on_first_run() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("nested").join("config.toml");

        let config = Config::load(&path);

        assert_eq!(fs::read_to_string(&path).unwrap(), EXAMPLE_CONFIG);
        assert_eq!(config.page_size, DEFAULT_PAGE_SIZE);
    }

    #[test]
    fn test_load_reads_existing_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("config.toml");
        fs::write(&path, "[directory]\npage_size = 7\n").unwrap();

        assert_eq!(Config::load(&path).page_size, 7);
    }
}
