//! Persistence configuration.

/// Settings shared by the persistence adapters.
///
/// # Examples
///
/// ```
/// use taskboard::persistence::PersistenceConfig;
///
/// let config = PersistenceConfig::default();
/// assert_eq!(config.default_access_level, "member");
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PersistenceConfig {
    /// Access-level tag written into newly synced project-member rows.
    ///
    /// The domain does not interpret this value.
    pub default_access_level: String,
    /// Maximum number of pooled `PostgreSQL` connections.
    pub max_pool_size: u32,
}

impl Default for PersistenceConfig {
    fn default() -> Self {
        Self {
            default_access_level: "member".to_owned(),
            max_pool_size: 10,
        }
    }
}

impl PersistenceConfig {
    /// Sets the access level written for new member rows.
    #[must_use]
    pub fn with_default_access_level(mut self, access_level: impl Into<String>) -> Self {
        self.default_access_level = access_level.into();
        self
    }

    /// Sets the maximum pool size.
    #[must_use]
    pub const fn with_max_pool_size(mut self, max_pool_size: u32) -> Self {
        self.max_pool_size = max_pool_size;
        self
    }
}
