//! Load and save logic for the custom main font.
//!
//! A font is stored as two values under its setting location: the face name
//! (string) and the point size (a dword on the registry side, decimal
//! attribute text on the XML side). Both media share the same absence rule: a
//! font only loads when the name is present and the size holds a usable
//! number.

use log::warn;
use xmltree::Element;

use crate::font::CustomFont;
use crate::registry::{RegistryStore, RegistryStoreError};
use crate::xml;

/// Value/attribute under which the face name is stored.
const FONT_NAME_VALUE: &str = "Name";
/// Value/attribute under which the point size is stored.
const FONT_SIZE_VALUE: &str = "Size";

/// Loads the custom font stored under `key_path`.
///
/// # Arguments
///
/// * `store` - The registry medium to read from
/// * `key_path` - The key holding the font values
///
/// # Returns
///
/// The stored font, or `None` when the key, the name value or a usable size
/// value is missing.
pub fn load_custom_font_from_registry(
    store: &dyn RegistryStore,
    key_path: &str,
) -> Option<CustomFont> {
    let name = store.read_string_value(key_path, FONT_NAME_VALUE)?;
    let size = match store.read_u32_value(key_path, FONT_SIZE_VALUE) {
        Some(size) => size,
        None => {
            warn!(
                "Failed to load a usable size for font {:?} under registry key {}",
                name, key_path
            );
            return None;
        }
    };
    return Some(CustomFont::new(name, size));
}

/// Saves the custom font under `key_path`, creating the key as needed.
/// Existing font values are overwritten.
pub fn save_custom_font_to_registry(
    store: &mut dyn RegistryStore,
    key_path: &str,
    font: &CustomFont,
) -> Result<(), RegistryStoreError> {
    store.write_string_value(key_path, FONT_NAME_VALUE, font.name())?;
    store.write_u32_value(key_path, FONT_SIZE_VALUE, font.size())?;
    return Ok(());
}

/// Loads the custom font from a `Setting` element.
pub fn load_custom_font_from_xml(setting: &Element) -> Option<CustomFont> {
    let name = setting.attributes.get(FONT_NAME_VALUE)?;
    let size = match setting
        .attributes
        .get(FONT_SIZE_VALUE)
        .and_then(|text| return xml::decode_u32(text))
    {
        Some(size) => size,
        None => {
            warn!("Failed to load a usable size attribute for font {:?}", name);
            return None;
        }
    };
    return Some(CustomFont::new(name.clone(), size));
}

/// Writes the custom font onto a `Setting` element. Repeated saves overwrite
/// the previous attributes.
pub fn save_custom_font_to_xml(setting: &mut Element, font: &CustomFont) {
    setting
        .attributes
        .insert(FONT_NAME_VALUE.to_owned(), font.name().to_owned());
    setting
        .attributes
        .insert(FONT_SIZE_VALUE.to_owned(), font.size().to_string());
}

#[cfg(test)]
#[path = "./tests/test_storage.rs"]
mod test_storage;
