use std::fs;
use std::path::{Path, PathBuf};

use serde::Deserialize;

use crate::error::{PageError, PageResult};

#[derive(Debug, Clone, Deserialize, PartialEq, Default)]
#[serde(default)]
pub struct Config {
    pub screen: ScreenConfig,
    pub anim: AnimConfig,
    pub demo: DemoConfig,
}

/// Logical screen dimensions used to derive slide-animation travel.
///
/// The defaults match the 240x240 panels the page stack was written for;
/// toolkit implementations backed by a resizable surface report their own
/// size instead.
#[derive(Debug, Clone, Copy, Deserialize, PartialEq, Eq)]
#[serde(default)]
pub struct ScreenConfig {
    pub width: i32,
    pub height: i32,
}

impl Default for ScreenConfig {
    fn default() -> Self {
        Self {
            width: 240,
            height: 240,
        }
    }
}

#[derive(Debug, Clone, Copy, Deserialize, PartialEq, Eq)]
#[serde(default)]
pub struct AnimConfig {
    /// Transition duration the demo descriptors use.
    pub default_duration_ms: u64,
    /// Ceiling for per-attribute durations; longer values are clamped.
    pub max_duration_ms: u64,
}

impl Default for AnimConfig {
    fn default() -> Self {
        Self {
            default_duration_ms: 200,
            max_duration_ms: 2_000,
        }
    }
}

#[derive(Debug, Clone, Copy, Deserialize, PartialEq, Eq)]
#[serde(default)]
pub struct DemoConfig {
    /// Frame-tick interval for the demo binary's event loop.
    pub tick_ms: u64,
}

impl Default for DemoConfig {
    fn default() -> Self {
        Self { tick_ms: 16 }
    }
}

impl Config {
    pub fn load() -> PageResult<Self> {
        let Some(path) = default_config_path() else {
            return Ok(Self::default());
        };
        Self::load_from_path(path)
    }

    pub fn load_from_path(path: impl AsRef<Path>) -> PageResult<Self> {
        let path = path.as_ref();
        if !path.exists() {
            return Ok(Self::default());
        }
        if !path.is_file() {
            return Err(PageError::invalid_config(format!(
                "config path is not a regular file: {}",
                path.display()
            )));
        }

        let raw = fs::read_to_string(path).map_err(|source| {
            PageError::io_with_context(
                source,
                format!("failed to read config: {}", path.display()),
            )
        })?;
        let parsed = toml::from_str::<Self>(&raw).map_err(|source| {
            PageError::invalid_config(format!(
                "failed to parse config {}: {source}",
                path.display()
            ))
        })?;
        Ok(parsed.sanitized())
    }

    fn sanitized(mut self) -> Self {
        self.screen.width = self.screen.width.max(1);
        self.screen.height = self.screen.height.max(1);
        self.anim.max_duration_ms = self.anim.max_duration_ms.max(1);
        self.anim.default_duration_ms = self
            .anim
            .default_duration_ms
            .min(self.anim.max_duration_ms);
        self.demo.tick_ms = self.demo.tick_ms.max(1);
        self
    }
}

pub fn default_config_path() -> Option<PathBuf> {
    if let Some(explicit) = std::env::var_os("PAGESTACK_CONFIG_PATH")
        && !explicit.is_empty()
    {
        return Some(PathBuf::from(explicit));
    }

    if let Some(xdg) = std::env::var_os("XDG_CONFIG_HOME")
        && !xdg.is_empty()
    {
        return Some(PathBuf::from(xdg).join("pagestack").join("config.toml"));
    }
    if let Some(home) = std::env::var_os("HOME")
        && !home.is_empty()
    {
        return Some(
            PathBuf::from(home)
                .join(".config")
                .join("pagestack")
                .join("config.toml"),
        );
    }
    if let Some(appdata) = std::env::var_os("APPDATA")
        && !appdata.is_empty()
    {
        return Some(PathBuf::from(appdata).join("pagestack").join("config.toml"));
    }
    None
}

#[cfg(test)]
mod tests {
    use std::fs;
    use std::path::PathBuf;
    use std::process;
    use std::time::{SystemTime, UNIX_EPOCH};

    use super::Config;

    fn unique_temp_path(suffix: &str) -> PathBuf {
        let nanos = SystemTime::now()
            .duration_since(UNIX_EPOCH)
            .expect("clock should be after unix epoch")
            .as_nanos();
        let mut path = std::env::temp_dir();
        path.push(format!(
            "pagestack_config_{suffix}_{}_{}",
            process::id(),
            nanos
        ));
        path
    }

    #[test]
    fn load_from_path_returns_defaults_for_missing_file() {
        let missing = unique_temp_path("missing.toml");
        let config = Config::load_from_path(&missing).expect("missing config should fallback");
        assert_eq!(config, Config::default());
    }

    #[test]
    fn load_from_path_applies_partial_overrides_and_sanitizes() {
        let path = unique_temp_path("custom.toml");
        fs::write(
            &path,
            r#"
            [screen]
            width = 0
            height = 320

            [anim]
            default_duration_ms = 5000
            max_duration_ms = 400

            [demo]
            tick_ms = 0
            "#,
        )
        .expect("config file should be written");

        let config = Config::load_from_path(&path).expect("config should parse");
        assert_eq!(config.screen.width, 1);
        assert_eq!(config.screen.height, 320);
        assert_eq!(config.anim.max_duration_ms, 400);
        assert_eq!(config.anim.default_duration_ms, 400);
        assert_eq!(config.demo.tick_ms, 1);

        fs::remove_file(&path).expect("config file should be removed");
    }
}
