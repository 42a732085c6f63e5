//! A registry-like hierarchical key-value store with pluggable backends.

#![deny(clippy::implicit_return)]
#![allow(clippy::needless_return)]

#[cfg(test)]
use mockall::automock;
use thiserror::Error;

pub mod import;
pub mod memory;
#[cfg(windows)]
pub mod windows;

/// Failure writing to or deleting from a registry-like store.
///
/// Reads never produce an error; a missing or unreadable record is reported
/// as absence instead.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum RegistryStoreError {
    /// The key could not be opened or created for writing.
    #[error("failed to open or create key `{key_path}`: {reason}")]
    OpenKey {
        /// Path of the key that was being opened.
        key_path: String,
        /// Backend description of the failure.
        reason: String,
    },
    /// The value could not be written.
    #[error("failed to write value `{value_name}` under `{key_path}`: {reason}")]
    WriteValue {
        /// Path of the key that was being written to.
        key_path: String,
        /// Name of the value that was being written.
        value_name: String,
        /// Backend description of the failure.
        reason: String,
    },
    /// The key and its subtree could not be deleted.
    #[error("failed to delete key `{key_path}`: {reason}")]
    DeleteKey {
        /// Path of the key that was being deleted.
        key_path: String,
        /// Backend description of the failure.
        reason: String,
    },
}

/// Hierarchical key-value storage with registry semantics.
///
/// Key paths are `\`-separated and rooted at the per-user hive
/// (HKEY_CURRENT_USER on Windows). Key and value names compare
/// case-insensitively. Reads report absence (missing key, missing value or
/// wrong value type) as [None]; writes create missing intermediate keys.
#[cfg_attr(test, automock)]
pub trait RegistryStore {
    /// Reads a string value, or [None] if the key or value is absent or the
    /// stored value is not a string.
    fn read_string_value(&self, key_path: &str, value_name: &str) -> Option<String>;

    /// Reads a 32-bit value, or [None] if the key or value is absent or the
    /// stored value is not a 32-bit number.
    fn read_u32_value(&self, key_path: &str, value_name: &str) -> Option<u32>;

    /// Writes a string value, creating the key path as needed.
    fn write_string_value(
        &mut self,
        key_path: &str,
        value_name: &str,
        value: &str,
    ) -> Result<(), RegistryStoreError>;

    /// Writes a 32-bit value, creating the key path as needed.
    fn write_u32_value(
        &mut self,
        key_path: &str,
        value_name: &str,
        value: u32,
    ) -> Result<(), RegistryStoreError>;

    /// Deletes a key and everything below it.
    ///
    /// Deleting an absent key is not an error.
    fn delete_key_tree(&mut self, key_path: &str) -> Result<(), RegistryStoreError>;
}

#[cfg(test)]
#[path = "../tests/registry/test_mod.rs"]
mod test_mod;
