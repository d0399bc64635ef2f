use std::collections::HashMap;
use std::env;
use std::fs;

/// The hosted mockapi collection the shipped app points at.
pub const DEFAULT_STORE_URL: &str = "https://66fc2a93c3a184a84d16505f.mockapi.io/Users";

/// Flat key=value settings, loaded from the file named by `CONFIG_FILE` with
/// the process environment as fallback per key.
#[derive(Debug, Default, Clone)]
pub struct AppConfig {
    values: HashMap<String, String>,
}

impl AppConfig {
    pub fn load() -> Self {
        match env::var("CONFIG_FILE") {
            Ok(path) => Self::from_file(&path).unwrap_or_else(|err| {
                tracing::warn!("ignoring unreadable config file {path}: {err}");
                Self::default()
            }),
            Err(_) => Self::default(),
        }
    }

    /// Shell-ish format: blank lines and `#` comments skipped, an optional
    /// `export ` prefix, single or double quotes stripped from values.
    pub fn from_file(path: &str) -> Result<Self, String> {
        let content = fs::read_to_string(path).map_err(|e| e.to_string())?;
        let mut values = HashMap::new();
        for (idx, line) in content.lines().enumerate() {
            let line = line.trim();
            if line.is_empty() || line.starts_with('#') {
                continue;
            }
            let line = line.strip_prefix("export ").unwrap_or(line);
            let Some((key, value)) = line.split_once('=') else {
                return Err(format!("Invalid config line {}: {}", idx + 1, line));
            };
            values.insert(key.trim().to_string(), unquote(value.trim()).to_string());
        }
        Ok(Self { values })
    }

    /// Config file wins over the environment.
    pub fn get(&self, key: &str) -> Option<String> {
        self.values
            .get(key)
            .cloned()
            .or_else(|| env::var(key).ok())
    }

    pub fn store_url(&self) -> String {
        self.get("STORE_URL")
            .unwrap_or_else(|| DEFAULT_STORE_URL.to_string())
    }
}

fn unquote(value: &str) -> &str {
    value
        .strip_prefix('"')
        .and_then(|v| v.strip_suffix('"'))
        .or_else(|| value.strip_prefix('\'').and_then(|v| v.strip_suffix('\'')))
        .unwrap_or(value)
}
