use super::SnapshotError;

/// String key/value persistence, one value per key (latest wins).
pub trait SnapshotStore: Send + Sync {
    /// Load the value stored under `key`.
    fn get_item(&self, key: &str) -> Result<Option<String>, SnapshotError>;

    /// Save (or overwrite) the value stored under `key`.
    fn set_item(&self, key: &str, value: &str) -> Result<(), SnapshotError>;

    /// Delete the value stored under `key`. Returns true if one existed.
    fn remove_item(&self, key: &str) -> Result<bool, SnapshotError>;
}
