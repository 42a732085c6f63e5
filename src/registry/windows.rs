//! Adapter for the live Windows registry.

use registry::{Data, Hive, RegKey, Security};

use super::{RegistryStore, RegistryStoreError};

/// A store backed by a registry hive of the current system.
pub struct WindowsRegistry {
    hive: Hive,
}

impl WindowsRegistry {
    /// Creates a store rooted at `HKEY_CURRENT_USER`, where the application
    /// keeps its per-user settings.
    pub fn current_user() -> Self {
        return WindowsRegistry {
            hive: Hive::CurrentUser,
        };
    }

    fn open_read(&self, key_path: &str) -> Option<RegKey> {
        return self.hive.open(key_path, Security::Read).ok();
    }

    fn create_write(&self, key_path: &str) -> Result<RegKey, RegistryStoreError> {
        return self
            .hive
            .create(key_path, Security::Read | Security::Write)
            .map_err(|error| {
                return RegistryStoreError::OpenKey {
                    key_path: key_path.to_owned(),
                    reason: error.to_string(),
                };
            });
    }
}

impl RegistryStore for WindowsRegistry {
    fn read_string_value(&self, key_path: &str, value_name: &str) -> Option<String> {
        let regkey = self.open_read(key_path)?;
        return match regkey.value(value_name) {
            Ok(Data::String(value)) => Some(value.to_string_lossy()),
            _ => None,
        };
    }

    fn read_u32_value(&self, key_path: &str, value_name: &str) -> Option<u32> {
        let regkey = self.open_read(key_path)?;
        return match regkey.value(value_name) {
            Ok(Data::U32(value)) => Some(value),
            _ => None,
        };
    }

    fn write_string_value(
        &mut self,
        key_path: &str,
        value_name: &str,
        value: &str,
    ) -> Result<(), RegistryStoreError> {
        let regkey = self.create_write(key_path)?;
        let data = value.to_owned().try_into().map_err(|_| {
            return RegistryStoreError::WriteValue {
                key_path: key_path.to_owned(),
                value_name: value_name.to_owned(),
                reason: "the value contains an interior NUL".to_owned(),
            };
        })?;
        return regkey
            .set_value(value_name.to_owned(), &Data::String(data))
            .map_err(|error| {
                return RegistryStoreError::WriteValue {
                    key_path: key_path.to_owned(),
                    value_name: value_name.to_owned(),
                    reason: error.to_string(),
                };
            });
    }

    fn write_u32_value(
        &mut self,
        key_path: &str,
        value_name: &str,
        value: u32,
    ) -> Result<(), RegistryStoreError> {
        let regkey = self.create_write(key_path)?;
        return regkey
            .set_value(value_name.to_owned(), &Data::U32(value))
            .map_err(|error| {
                return RegistryStoreError::WriteValue {
                    key_path: key_path.to_owned(),
                    value_name: value_name.to_owned(),
                    reason: error.to_string(),
                };
            });
    }

    fn delete_key_tree(&mut self, key_path: &str) -> Result<(), RegistryStoreError> {
        return match self.hive.delete(key_path, true) {
            // Deleting a key that was never created is not a failure.
            Ok(()) | Err(registry::key::Error::NotFound(..)) => Ok(()),
            Err(error) => Err(RegistryStoreError::DeleteKey {
                key_path: key_path.to_owned(),
                reason: error.to_string(),
            }),
        };
    }
}

#[cfg(test)]
#[path = "../tests/registry/test_windows_store.rs"]
mod test_windows_store;
