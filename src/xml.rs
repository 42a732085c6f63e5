//! Configuration document plumbing.
//!
//! Configuration documents are XML files with an `ExplorerPlusPlus` root, a
//! `Settings` section and one `Setting` element per setting, addressed by its
//! `name` attribute:
//!
//! ```xml
//! <ExplorerPlusPlus>
//!     <Settings>
//!         <Setting name="MainFont" Name="Agency FB" Size="20" />
//!     </Settings>
//! </ExplorerPlusPlus>
//! ```

use std::fs::{self, File};
use std::io::{self, BufReader};
use std::path::{Path, PathBuf};

use thiserror::Error;
use xmltree::{Element, EmitterConfig, XMLNode};

/// Name of the document root element.
pub const ROOT_ELEMENT: &str = "ExplorerPlusPlus";
/// Name of the section element grouping the application settings.
pub const SETTINGS_ELEMENT: &str = "Settings";
/// Name of a single setting element.
pub const SETTING_ELEMENT: &str = "Setting";
/// Attribute identifying which setting a `Setting` element stores.
pub const NAME_ATTRIBUTE: &str = "name";

#[derive(Debug, Error)]
pub enum XmlDocumentError {
    /// The document could not be read from disk.
    #[error("failed to read {}: {source}", .path.display())]
    Read { path: PathBuf, source: io::Error },
    /// The document content is not well-formed XML.
    #[error("failed to parse {}: {source}", .path.display())]
    Parse {
        path: PathBuf,
        source: xmltree::ParseError,
    },
    /// The document could not be written to disk.
    #[error("failed to write {}: {source}", .path.display())]
    Write { path: PathBuf, source: io::Error },
    /// The document tree could not be emitted as XML.
    #[error("failed to emit {}: {source}", .path.display())]
    Emit {
        path: PathBuf,
        source: xmltree::Error,
    },
}

/// Creates an empty document carrying only the root element.
pub fn new_document() -> Element {
    return Element::new(ROOT_ELEMENT);
}

/// Loads a configuration document.
pub fn load_document(path: &Path) -> Result<Element, XmlDocumentError> {
    let file = File::open(path).map_err(|error| {
        return XmlDocumentError::Read {
            path: path.to_owned(),
            source: error,
        };
    })?;
    return Element::parse(BufReader::new(file)).map_err(|error| {
        return XmlDocumentError::Parse {
            path: path.to_owned(),
            source: error,
        };
    });
}

/// Saves a configuration document, replacing `path` atomically.
///
/// The document is written to a sibling temp file and moved into place
/// afterwards, so a crash mid-write never truncates an existing document.
pub fn save_document(path: &Path, root: &Element) -> Result<(), XmlDocumentError> {
    let temp_path = path.with_extension("xml.tmp");
    write_document(&temp_path, root)?;
    return fs::rename(&temp_path, path).map_err(|error| {
        return XmlDocumentError::Write {
            path: path.to_owned(),
            source: error,
        };
    });
}

fn write_document(path: &Path, root: &Element) -> Result<(), XmlDocumentError> {
    let file = File::create(path).map_err(|error| {
        return XmlDocumentError::Write {
            path: path.to_owned(),
            source: error,
        };
    })?;
    root.write_with_config(
        &file,
        EmitterConfig::new().perform_indent(true).indent_string("\t"),
    )
    .map_err(|error| {
        return XmlDocumentError::Emit {
            path: path.to_owned(),
            source: error,
        };
    })?;
    let _ = file.sync_all();
    return Ok(());
}

/// Returns the settings section of the document, if present.
pub fn settings_section(root: &Element) -> Option<&Element> {
    return root.get_child(SETTINGS_ELEMENT);
}

/// Returns the mutable settings section, creating it when absent.
pub fn ensure_settings_section(root: &mut Element) -> &mut Element {
    if root.get_child(SETTINGS_ELEMENT).is_none() {
        root.children
            .push(XMLNode::Element(Element::new(SETTINGS_ELEMENT)));
    }
    return match root.get_mut_child(SETTINGS_ELEMENT) {
        Some(section) => section,
        None => unreachable!("the settings section was just created"),
    };
}

/// Finds the setting element carrying the given `name` attribute.
pub fn find_setting<'document>(root: &'document Element, name: &str) -> Option<&'document Element> {
    return settings_section(root)?
        .children
        .iter()
        .filter_map(|node| return node.as_element())
        .find(|element| return is_setting(element, name));
}

/// Mutable variant of [`find_setting`].
pub fn find_setting_mut<'document>(
    root: &'document mut Element,
    name: &str,
) -> Option<&'document mut Element> {
    return root
        .get_mut_child(SETTINGS_ELEMENT)?
        .children
        .iter_mut()
        .filter_map(|node| return node.as_mut_element())
        .find(|element| return is_setting(element, name));
}

/// Appends a `<Setting name="…">` element to the section and returns it.
pub fn append_setting<'section>(
    section: &'section mut Element,
    name: &str,
) -> &'section mut Element {
    let mut setting = Element::new(SETTING_ELEMENT);
    setting
        .attributes
        .insert(NAME_ATTRIBUTE.to_owned(), name.to_owned());
    section.children.push(XMLNode::Element(setting));
    return match section
        .children
        .last_mut()
        .and_then(|node| return node.as_mut_element())
    {
        Some(element) => element,
        None => unreachable!("the setting element was just appended"),
    };
}

/// Removes the setting element with the given name. Returns whether an
/// element was removed.
pub fn remove_setting(root: &mut Element, name: &str) -> bool {
    let section = match root.get_mut_child(SETTINGS_ELEMENT) {
        Some(section) => section,
        None => return false,
    };
    let length_before = section.children.len();
    section.children.retain(|node| {
        return match node.as_element() {
            Some(element) => !is_setting(element, name),
            None => true,
        };
    });
    return section.children.len() != length_before;
}

/// Decodes a numeric attribute. Returns `None` when the text does not hold an
/// unsigned decimal integer.
pub fn decode_u32(text: &str) -> Option<u32> {
    return text.trim().parse::<u32>().ok();
}

fn is_setting(element: &Element, name: &str) -> bool {
    return element.name == SETTING_ELEMENT
        && element.attributes.get(NAME_ATTRIBUTE).map(String::as_str) == Some(name);
}

#[cfg(test)]
#[path = "./tests/test_xml.rs"]
mod test_xml;
