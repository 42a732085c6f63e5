//! Unit tests for the live registry adapter.
//!
//! These run against the real HKEY_CURRENT_USER hive, isolated under a
//! dedicated test key. Each test uses its own subkey so the suite can run in
//! parallel.

use crate::registry::windows::WindowsRegistry;
use crate::registry::RegistryStore;

const TEST_KEY_ROOT: &str = r"Software\Explorer++Test-rs";

/// Removes the test key tree on drop so failing assertions cannot leak keys
/// into the hive.
struct TestKeyGuard {
    key_path: String,
}

impl TestKeyGuard {
    fn new(subkey: &str) -> Self {
        let key_path = format!(r"{TEST_KEY_ROOT}\{subkey}");
        let mut store = WindowsRegistry::current_user();
        store.delete_key_tree(&key_path).unwrap();
        return TestKeyGuard { key_path };
    }
}

impl Drop for TestKeyGuard {
    fn drop(&mut self) {
        let mut store = WindowsRegistry::current_user();
        let _ = store.delete_key_tree(&self.key_path);
    }
}

/// Test module for reads and writes against the real hive.
mod windows_registry_test {
    use super::*;

    #[test]
    fn test_string_value_round_trip() {
        let guard = TestKeyGuard::new("StringRoundTrip");
        let mut store = WindowsRegistry::current_user();
        store
            .write_string_value(&guard.key_path, "Name", "Agency FB")
            .unwrap();
        assert_eq!(
            store.read_string_value(&guard.key_path, "Name"),
            Some("Agency FB".to_string())
        );
    }

    #[test]
    fn test_u32_value_round_trip() {
        let guard = TestKeyGuard::new("U32RoundTrip");
        let mut store = WindowsRegistry::current_user();
        store.write_u32_value(&guard.key_path, "Size", 20).unwrap();
        assert_eq!(store.read_u32_value(&guard.key_path, "Size"), Some(20));
    }

    #[test]
    fn test_read_missing_key() {
        let store = WindowsRegistry::current_user();
        let key_path = format!(r"{TEST_KEY_ROOT}\DoesNotExist");
        assert_eq!(store.read_string_value(&key_path, "Name"), None);
        assert_eq!(store.read_u32_value(&key_path, "Size"), None);
    }

    #[test]
    fn test_read_missing_value() {
        let guard = TestKeyGuard::new("MissingValue");
        let mut store = WindowsRegistry::current_user();
        store
            .write_string_value(&guard.key_path, "Name", "Agency FB")
            .unwrap();
        assert_eq!(store.read_string_value(&guard.key_path, "Other"), None);
    }

    #[test]
    fn test_type_mismatch_reads_as_absent() {
        let guard = TestKeyGuard::new("TypeMismatch");
        let mut store = WindowsRegistry::current_user();
        store.write_u32_value(&guard.key_path, "Size", 20).unwrap();
        assert_eq!(store.read_string_value(&guard.key_path, "Size"), None);
        store
            .write_string_value(&guard.key_path, "Name", "Agency FB")
            .unwrap();
        assert_eq!(store.read_u32_value(&guard.key_path, "Name"), None);
    }

    #[test]
    fn test_overwrite_replaces_value() {
        let guard = TestKeyGuard::new("Overwrite");
        let mut store = WindowsRegistry::current_user();
        store.write_u32_value(&guard.key_path, "Size", 20).unwrap();
        store.write_u32_value(&guard.key_path, "Size", 24).unwrap();
        assert_eq!(store.read_u32_value(&guard.key_path, "Size"), Some(24));
    }

    #[test]
    fn test_delete_key_tree_removes_values() {
        let guard = TestKeyGuard::new("Delete");
        let mut store = WindowsRegistry::current_user();
        store
            .write_string_value(&guard.key_path, "Name", "Agency FB")
            .unwrap();
        store.delete_key_tree(&guard.key_path).unwrap();
        assert_eq!(store.read_string_value(&guard.key_path, "Name"), None);
    }

    #[test]
    fn test_delete_absent_key_is_ok() {
        let mut store = WindowsRegistry::current_user();
        let key_path = format!(r"{TEST_KEY_ROOT}\NeverCreated");
        assert!(store.delete_key_tree(&key_path).is_ok());
    }

    #[test]
    fn test_interior_nul_write_is_reported() {
        let guard = TestKeyGuard::new("InteriorNul");
        let mut store = WindowsRegistry::current_user();
        let result = store.write_string_value(&guard.key_path, "Name", "bad\0name");
        assert!(result.is_err());
    }
}
