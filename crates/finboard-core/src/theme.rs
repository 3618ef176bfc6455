//! Theme preference: an explicit context object with a persisted side effect

use async_trait::async_trait;
use std::collections::{BTreeMap, HashMap};
use std::path::PathBuf;
use std::sync::Arc;
use tokio::sync::Mutex;

use crate::error::{CoreError, CoreResult};
use crate::types::Theme;

/// Key-value storage for user preferences
#[async_trait]
pub trait PreferenceStore: Send + Sync {
    /// Read a saved value, `None` when nothing was saved under `key`
    async fn load(&self, key: &str) -> CoreResult<Option<String>>;

    async fn save(&self, key: &str, value: &str) -> CoreResult<()>;
}

/// Store reference type
pub type PreferenceStoreRef = Arc<dyn PreferenceStore>;

/// Preferences kept in memory only
#[derive(Debug, Default)]
pub struct MemoryPreferenceStore {
    values: Mutex<HashMap<String, String>>,
}

impl MemoryPreferenceStore {
    pub fn new() -> Self {
        Self::default()
    }
}

#[async_trait]
impl PreferenceStore for MemoryPreferenceStore {
    async fn load(&self, key: &str) -> CoreResult<Option<String>> {
        Ok(self.values.lock().await.get(key).cloned())
    }

    async fn save(&self, key: &str, value: &str) -> CoreResult<()> {
        self.values.lock().await.insert(key.to_string(), value.to_string());
        Ok(())
    }
}

/// Preferences saved as a flat JSON object in a single file
#[derive(Debug, Clone)]
pub struct FilePreferenceStore {
    path: PathBuf,
}

type PreferenceMap = BTreeMap<String, serde_json::Value>;

impl FilePreferenceStore {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    /// File content, `None` when the file does not exist yet
    async fn read_raw(&self) -> CoreResult<Option<String>> {
        match tokio::fs::read_to_string(&self.path).await {
            Ok(content) => Ok(Some(content)),
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => Ok(None),
            Err(e) => Err(e.into()),
        }
    }

    /// Missing or blank content parses as an empty map
    fn parse(content: Option<&str>) -> CoreResult<PreferenceMap> {
        match content {
            Some(content) if !content.trim().is_empty() => Ok(serde_json::from_str(content)?),
            _ => Ok(PreferenceMap::new()),
        }
    }

    /// Written to a sibling temp file, then renamed into place
    async fn write_all(&self, values: &PreferenceMap) -> CoreResult<()> {
        if let Some(parent) = self.path.parent() {
            if !parent.as_os_str().is_empty() {
                tokio::fs::create_dir_all(parent).await?;
            }
        }
        let mut tmp = self.path.clone().into_os_string();
        tmp.push(".tmp");
        let tmp = PathBuf::from(tmp);

        let json = serde_json::to_string_pretty(values)?;
        tokio::fs::write(&tmp, json).await?;
        tokio::fs::rename(&tmp, &self.path).await?;
        Ok(())
    }
}

#[async_trait]
impl PreferenceStore for FilePreferenceStore {
    /// Non-string values come back as their JSON text
    async fn load(&self, key: &str) -> CoreResult<Option<String>> {
        let content = self.read_raw().await?;
        Ok(Self::parse(content.as_deref())?.remove(key).map(|value| match value {
            serde_json::Value::String(s) => s,
            other => other.to_string(),
        }))
    }

    /// Unparseable existing content is replaced rather than blocking the write
    async fn save(&self, key: &str, value: &str) -> CoreResult<()> {
        let content = self.read_raw().await?;
        let mut values = Self::parse(content.as_deref()).unwrap_or_else(|e| {
            log::warn!("Replacing unreadable preferences file {}: {}", self.path.display(), e);
            PreferenceMap::new()
        });
        values.insert(key.to_string(), serde_json::Value::String(value.to_string()));

        self.write_all(&values).await?;
        log::debug!("Saved preference {}={} to {}", key, value, self.path.display());
        Ok(())
    }
}

/// The active theme, owned by whoever renders the UI
pub struct ThemeContext {
    theme: Theme,
    store: PreferenceStoreRef,
}

impl ThemeContext {
    /// Preference key the theme is saved under
    pub const KEY: &'static str = "theme";

    /// Start from a saved value, or `default` when there is none
    pub fn init(saved: Option<Theme>, default: Theme, store: PreferenceStoreRef) -> Self {
        Self {
            theme: saved.unwrap_or(default),
            store,
        }
    }

    /// Read the saved theme from `store`.
    ///
    /// Unreadable storage or an unrecognised saved value falls back to `default`.
    pub async fn load(store: PreferenceStoreRef, default: Theme) -> Self {
        let saved = match store.load(Self::KEY).await {
            Ok(Some(value)) => match value.parse::<Theme>() {
                Ok(theme) => Some(theme),
                Err(e) => {
                    log::warn!("Ignoring saved theme: {}", e);
                    None
                }
            },
            Ok(None) => None,
            Err(e) => {
                log::warn!("Could not read saved theme, using {}: {}", default, e);
                None
            }
        };
        Self::init(saved, default, store)
    }

    pub fn theme(&self) -> Theme {
        self.theme
    }

    pub fn is_dark_mode(&self) -> bool {
        self.theme.is_dark()
    }

    /// Persist `theme`, then make it active. On a storage error the active theme is unchanged.
    pub async fn set(&mut self, theme: Theme) -> CoreResult<Theme> {
        self.store.save(Self::KEY, &theme.to_string()).await?;
        if self.theme != theme {
            log::info!("Theme changed: {} -> {}", self.theme, theme);
        }
        self.theme = theme;
        Ok(theme)
    }

    /// Set the theme from a user-supplied name such as `"Light"`
    pub async fn set_named(&mut self, name: &str) -> CoreResult<Theme> {
        let theme = name
            .parse::<Theme>()
            .map_err(|message| CoreError::InvalidValue { message })?;
        self.set(theme).await
    }

    pub async fn toggle(&mut self) -> CoreResult<Theme> {
        self.set(self.theme.toggled()).await
    }
}
