//! Application name configuration for storage paths

use std::path::PathBuf;

/// Environment variable that overrides the platform storage directory
pub const STORE_DIR_ENV: &str = "SHOPPING_LIST_STORE_DIR";

/// Application identifier used to determine storage location
///
/// The store uses the [XDG Base Directory Specification](https://specifications.freedesktop.org/basedir-spec/basedir-spec-latest.html)
/// on Linux and similar conventions on other platforms.
///
/// # Example
///
/// ```
/// use shopping_list_store::AppName;
///
/// let app_name = AppName::new("hu", "gavaller", "Bevasarlolista");
/// ```
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct AppName {
    pub qualifier: String,
    pub organization: String,
    pub application: String,
}

impl AppName {
    /// Create a new application name
    ///
    /// # Arguments
    ///
    /// * `qualifier` - Typically a reverse domain name (e.g., "com", "org")
    /// * `organization` - Your organization or username (e.g., "mycompany")
    /// * `application` - The application name (e.g., "myapp")
    pub fn new(
        qualifier: impl Into<String>,
        organization: impl Into<String>,
        application: impl Into<String>,
    ) -> Self {
        Self {
            qualifier: qualifier.into(),
            organization: organization.into(),
            application: application.into(),
        }
    }

    /// Get the storage directory for the application
    ///
    /// Uses `SHOPPING_LIST_STORE_DIR` when set, otherwise platform conventions:
    /// - Linux: `$XDG_CONFIG_HOME/<app>/store` or `~/.config/<app>/store`
    /// - macOS: `~/Library/Application Support/<qualifier>.<org>.<app>/store`
    /// - Windows: `%LOCALAPPDATA%\<org>\<app>\config\store`
    pub fn storage_dir(&self) -> PathBuf {
        if let Some(dir) = std::env::var_os(STORE_DIR_ENV).filter(|dir| !dir.is_empty()) {
            return PathBuf::from(dir);
        }

        directories::ProjectDirs::from(
            self.qualifier.as_str(),
            self.organization.as_str(),
            self.application.as_str(),
        )
        .map(|dirs| dirs.config_local_dir().to_path_buf())
        .unwrap_or_else(|| PathBuf::from("."))
        .join("store")
    }
}
