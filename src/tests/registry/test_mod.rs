//! Unit tests for the registry store seam.

use crate::registry::RegistryStoreError;

/// Test module for the store error type.
mod registry_store_error_test {
    use super::*;

    #[test]
    fn test_open_key_message() {
        let error = RegistryStoreError::OpenKey {
            key_path: r"Software\Explorer++\MainFont".to_string(),
            reason: "access is denied".to_string(),
        };
        assert_eq!(
            error.to_string(),
            r"failed to open or create key `Software\Explorer++\MainFont`: access is denied"
        );
    }

    #[test]
    fn test_write_value_message() {
        let error = RegistryStoreError::WriteValue {
            key_path: r"Software\Explorer++\MainFont".to_string(),
            value_name: "Name".to_string(),
            reason: "disk full".to_string(),
        };
        assert_eq!(
            error.to_string(),
            r"failed to write value `Name` under `Software\Explorer++\MainFont`: disk full"
        );
    }

    #[test]
    fn test_delete_key_message() {
        let error = RegistryStoreError::DeleteKey {
            key_path: r"Software\Explorer++Test".to_string(),
            reason: "access is denied".to_string(),
        };
        assert_eq!(
            error.to_string(),
            r"failed to delete key `Software\Explorer++Test`: access is denied"
        );
    }

    #[test]
    fn test_error_equality() {
        let first = RegistryStoreError::OpenKey {
            key_path: "a".to_string(),
            reason: "b".to_string(),
        };
        let second = RegistryStoreError::OpenKey {
            key_path: "a".to_string(),
            reason: "b".to_string(),
        };
        let different = RegistryStoreError::DeleteKey {
            key_path: "a".to_string(),
            reason: "b".to_string(),
        };
        assert_eq!(first, second);
        assert_ne!(first, different);
    }
}
