use anyhow::{bail, Context};
use iconmask_logging::LogFormat;
use iconmask_sets::OutputFormat;
use serde::Deserialize;
use std::collections::HashMap;
use std::fs;
use std::path::{Path, PathBuf};

/// Project config file looked up in the working directory
pub const LOCAL_CONFIG_FILE: &str = "iconmask.toml";

/// Built-in defaults, also the template written by `iconmask init`
pub const DEFAULT_CONFIG: &str = r#"
[sets.hero]
enabled = true
dir = "deps/heroicons/optimized"

[sets.lucide]
enabled = true
dir = "deps/lucide/icons"  # optional, skipped when missing

[content]
paths = []  # template roots to scan; empty emits every icon
extensions = ["html", "heex", "ex", "eex", "js", "jsx", "ts", "tsx", "vue", "svelte"]

[output]
path = ""  # empty writes to stdout
format = "css"  # css or json

[theme.spacing]
# "6" = "1.5rem"

[logging]
level = "info"  # trace, debug, info, warn, error
format = "pretty"  # pretty or json
"#;

#[derive(Debug, Deserialize, Clone)]
pub struct SetConfig {
    pub enabled: bool,
    pub dir: String,
}

#[derive(Debug, Deserialize, Clone)]
pub struct SetsConfig {
    pub hero: SetConfig,
    pub lucide: SetConfig,
}

#[derive(Debug, Deserialize, Clone)]
pub struct ContentConfig {
    #[serde(default)]
    pub paths: Vec<String>,
    #[serde(default)]
    pub extensions: Vec<String>,
}

#[derive(Debug, Deserialize, Clone)]
pub struct OutputConfig {
    #[serde(default)]
    pub path: String,
    #[serde(default)]
    pub format: OutputFormat,
}

#[derive(Debug, Deserialize, Clone, Default)]
pub struct ThemeConfig {
    #[serde(default)]
    pub spacing: HashMap<String, String>,
}

#[derive(Debug, Deserialize, Clone)]
pub struct LoggingConfig {
    pub level: String,
    #[serde(default)]
    pub format: LogFormat,
}

#[derive(Debug, Deserialize, Clone)]
pub struct Config {
    pub sets: SetsConfig,
    pub content: ContentConfig,
    pub output: OutputConfig,
    #[serde(default)]
    pub theme: ThemeConfig,
    pub logging: LoggingConfig,
}

impl Config {
    /// Load configuration with layered approach:
    /// 1. Built-in defaults
    /// 2. `./iconmask.toml` (optional), or `explicit` (required when given)
    /// 3. Environment variables with `ICONMASK__` prefix (highest priority)
    pub fn load(explicit: Option<&Path>) -> anyhow::Result<Self> {
        // Load .env file from current directory
        dotenvy::dotenv().ok();

        let mut config_builder = config::Config::builder().add_source(config::File::from_str(
            DEFAULT_CONFIG,
            config::FileFormat::Toml,
        ));

        config_builder = match explicit {
            Some(path) => {
                if !path.is_file() {
                    bail!("Config file not found: {}", path.display());
                }
                config_builder.add_source(config::File::new(
                    &path.to_string_lossy(),
                    config::FileFormat::Toml,
                ))
            }
            None => config_builder.add_source(
                config::File::new(LOCAL_CONFIG_FILE, config::FileFormat::Toml).required(false),
            ),
        };

        let config = config_builder
            .add_source(
                config::Environment::with_prefix("ICONMASK")
                    .separator("__")
                    .try_parsing(true)
                    .list_separator(",")
                    .with_list_parse_key("content.paths")
                    .with_list_parse_key("content.extensions"),
            )
            .build()
            .context("Failed to load configuration")?;

        let config: Self = config
            .try_deserialize()
            .context("Invalid configuration")?;
        config.validate()?;
        Ok(config)
    }

    fn validate(&self) -> anyhow::Result<()> {
        for (name, set) in [("hero", &self.sets.hero), ("lucide", &self.sets.lucide)] {
            if set.enabled && set.dir.trim().is_empty() {
                bail!("sets.{name}.dir must be set when the set is enabled");
            }
        }
        Ok(())
    }
}

/// Resolve a configured path: `~` is the home directory, relative paths
/// hang off `root`
pub fn resolve_path(root: &Path, raw: &str) -> PathBuf {
    let expanded = match raw.strip_prefix('~') {
        Some(rest) if rest.is_empty() || rest.starts_with('/') => match dirs::home_dir() {
            Some(home) => home.join(rest.trim_start_matches('/')),
            None => PathBuf::from(raw),
        },
        _ => PathBuf::from(raw),
    };

    if expanded.is_absolute() {
        expanded
    } else {
        root.join(expanded)
    }
}

/// Write the default config template, refusing to clobber unless `force`
pub fn write_default(path: &Path, force: bool) -> anyhow::Result<()> {
    if path.exists() && !force {
        bail!(
            "{} already exists (use --force to overwrite)",
            path.display()
        );
    }

    if let Some(dir) = path.parent().filter(|d| !d.as_os_str().is_empty()) {
        fs::create_dir_all(dir)
            .with_context(|| format!("Failed to create {}", dir.display()))?;
    }

    fs::write(path, DEFAULT_CONFIG.trim_start())
        .with_context(|| format!("Failed to write {}", path.display()))?;
    eprintln!("Created default config: {}", path.display());
    Ok(())
}
