//! In-memory store with registry semantics.

use std::collections::BTreeMap;

use super::{RegistryStore, RegistryStoreError};

/// A stored value, restricted to the types the application persists.
#[derive(Debug, Clone, PartialEq, Eq)]
enum Value {
    /// A REG_SZ-style string value.
    String(String),
    /// A REG_DWORD-style 32-bit value.
    Dword(u32),
}

#[derive(Debug, Clone, Default)]
struct KeyNode {
    subkeys: BTreeMap<String, KeyNode>,
    values: BTreeMap<String, Value>,
}

/// An isolated, in-memory registry.
///
/// Backs the unit tests on every platform and lets callers stage registry
/// writes without touching the system. Each instance owns its own key tree;
/// dropping the instance drops everything it stored.
#[derive(Debug, Clone, Default)]
pub struct MemoryRegistry {
    root: KeyNode,
}

impl MemoryRegistry {
    /// Creates an empty store.
    pub fn new() -> Self {
        return MemoryRegistry::default();
    }

    fn find_key(&self, key_path: &str) -> Option<&KeyNode> {
        let mut node = &self.root;
        for segment in path_segments(key_path) {
            node = node.subkeys.get(&fold_name(segment))?;
        }
        return Some(node);
    }

    fn find_or_create_key(&mut self, key_path: &str) -> &mut KeyNode {
        let mut node = &mut self.root;
        for segment in path_segments(key_path) {
            node = node.subkeys.entry(fold_name(segment)).or_default();
        }
        return node;
    }

    fn read_value(&self, key_path: &str, value_name: &str) -> Option<&Value> {
        return self.find_key(key_path)?.values.get(&fold_name(value_name));
    }

    fn write_value(&mut self, key_path: &str, value_name: &str, value: Value) {
        self.find_or_create_key(key_path)
            .values
            .insert(fold_name(value_name), value);
    }
}

/// Registry key and value names compare case-insensitively; the original
/// casing never needs to be reproduced, so names are folded on the way in.
fn fold_name(name: &str) -> String {
    return name.to_lowercase();
}

/// Splits a `\`-separated key path, ignoring empty segments so stray
/// separators do not create phantom keys.
fn path_segments(key_path: &str) -> impl Iterator<Item = &str> {
    return key_path
        .split('\\')
        .filter(|segment| return !segment.is_empty());
}

impl RegistryStore for MemoryRegistry {
    fn read_string_value(&self, key_path: &str, value_name: &str) -> Option<String> {
        return match self.read_value(key_path, value_name) {
            Some(Value::String(value)) => Some(value.clone()),
            _ => None,
        };
    }

    fn read_u32_value(&self, key_path: &str, value_name: &str) -> Option<u32> {
        return match self.read_value(key_path, value_name) {
            Some(Value::Dword(value)) => Some(*value),
            _ => None,
        };
    }

    fn write_string_value(
        &mut self,
        key_path: &str,
        value_name: &str,
        value: &str,
    ) -> Result<(), RegistryStoreError> {
        self.write_value(key_path, value_name, Value::String(value.to_owned()));
        return Ok(());
    }

    fn write_u32_value(
        &mut self,
        key_path: &str,
        value_name: &str,
        value: u32,
    ) -> Result<(), RegistryStoreError> {
        self.write_value(key_path, value_name, Value::Dword(value));
        return Ok(());
    }

    fn delete_key_tree(&mut self, key_path: &str) -> Result<(), RegistryStoreError> {
        let mut segments: Vec<&str> = path_segments(key_path).collect();
        let leaf = match segments.pop() {
            Some(leaf) => leaf,
            None => {
                // Deleting the hive root clears the whole store.
                self.root = KeyNode::default();
                return Ok(());
            }
        };
        let mut node = &mut self.root;
        for segment in segments {
            match node.subkeys.get_mut(&fold_name(segment)) {
                Some(next) => node = next,
                // A parent key is absent, so there is nothing to delete.
                None => return Ok(()),
            }
        }
        node.subkeys.remove(&fold_name(leaf));
        return Ok(());
    }
}

#[cfg(test)]
#[path = "../tests/registry/test_memory.rs"]
mod test_memory;
