//! Import of regedit-style export files.
//!
//! Parses the subset of the `Windows Registry Editor Version 5.00` format the
//! application's fixtures use and replays it into a [`RegistryStore`]. Test
//! data stays in the exact file format regedit produces, without shelling out
//! to `reg.exe`.

use thiserror::Error;

use super::{RegistryStore, RegistryStoreError};

/// First significant line of every supported import file.
pub const REG_FILE_HEADER: &str = "Windows Registry Editor Version 5.00";

const CURRENT_USER_HIVE: &str = "HKEY_CURRENT_USER";

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum RegImportError {
    /// The file does not start with the version 5.00 header line.
    #[error("missing \"Windows Registry Editor Version 5.00\" header line")]
    MissingHeader,
    /// A section names a hive other than HKEY_CURRENT_USER.
    #[error("line {line}: only HKEY_CURRENT_USER sections are supported, got \"{path}\"")]
    UnsupportedHive { line: usize, path: String },
    /// A value uses a data format outside the supported subset.
    #[error("line {line}: unsupported value data in \"{text}\"")]
    UnsupportedValue { line: usize, text: String },
    /// A line fits no supported construct.
    #[error("line {line}: malformed line \"{text}\"")]
    Malformed { line: usize, text: String },
    /// A value line appears outside of any key section.
    #[error("line {line}: value assignment outside of a key section")]
    ValueOutsideKey { line: usize },
    /// The backing store rejected a write.
    #[error(transparent)]
    Store(#[from] RegistryStoreError),
}

/// Replays `contents` into `store`.
///
/// Supported constructs: the header, `;` comments, `[HKEY_CURRENT_USER\…]`
/// sections, `[-HKEY_CURRENT_USER\…]` key-tree deletions, `"name"="string"`
/// with `\\` and `\"` escapes, `@` default values and `"name"=dword:XXXXXXXX`.
/// Anything else stops the import with a typed error; writes applied up to
/// that point stay applied.
pub fn import_reg(store: &mut dyn RegistryStore, contents: &str) -> Result<(), RegImportError> {
    // Exports come out of regedit UTF-16 encoded; a transcoded file may still
    // carry the BOM.
    let mut lines = contents
        .trim_start_matches('\u{feff}')
        .lines()
        .enumerate()
        .map(|(index, line)| return (index + 1, line.trim()))
        .filter(|(_, line)| return !line.is_empty() && !line.starts_with(';'));
    match lines.next() {
        Some((_, line)) if line == REG_FILE_HEADER => {}
        _ => return Err(RegImportError::MissingHeader),
    }
    let mut current_key: Option<String> = None;
    for (line_number, line) in lines {
        if line.starts_with('[') {
            current_key = apply_section(store, line_number, line)?;
        } else {
            match current_key.as_deref() {
                Some(key_path) => apply_value(store, line_number, line, key_path)?,
                None => return Err(RegImportError::ValueOutsideKey { line: line_number }),
            }
        }
    }
    return Ok(());
}

/// Applies a `[…]` section header line. Returns the key path subsequent value
/// lines write to, or `None` when the section deleted its key.
fn apply_section(
    store: &mut dyn RegistryStore,
    line_number: usize,
    line: &str,
) -> Result<Option<String>, RegImportError> {
    let section = match line
        .strip_prefix('[')
        .and_then(|rest| return rest.strip_suffix(']'))
    {
        Some(section) if !section.is_empty() => section,
        _ => {
            return Err(RegImportError::Malformed {
                line: line_number,
                text: line.to_owned(),
            })
        }
    };
    let (path, is_deletion) = match section.strip_prefix('-') {
        Some(path) => (path, true),
        None => (section, false),
    };
    let key_path = match strip_current_user_hive(path) {
        Some(key_path) => key_path.to_owned(),
        None => {
            return Err(RegImportError::UnsupportedHive {
                line: line_number,
                path: path.to_owned(),
            })
        }
    };
    if is_deletion {
        store.delete_key_tree(&key_path)?;
        return Ok(None);
    }
    return Ok(Some(key_path));
}

/// Strips the `HKEY_CURRENT_USER` prefix, case-insensitively. Hive names in
/// export files always spell the long form.
fn strip_current_user_hive(path: &str) -> Option<&str> {
    let mut segments = path.splitn(2, '\\');
    let hive = segments.next()?;
    if !hive.eq_ignore_ascii_case(CURRENT_USER_HIVE) {
        return None;
    }
    return Some(segments.next().unwrap_or(""));
}

fn apply_value(
    store: &mut dyn RegistryStore,
    line_number: usize,
    line: &str,
    key_path: &str,
) -> Result<(), RegImportError> {
    let malformed = || {
        return RegImportError::Malformed {
            line: line_number,
            text: line.to_owned(),
        };
    };
    let (value_name, rest) = match line.strip_prefix('@') {
        // `@` addresses the unnamed default value of the key.
        Some(rest) => (String::new(), rest),
        None => take_quoted(line).ok_or_else(malformed)?,
    };
    let data = rest
        .trim_start()
        .strip_prefix('=')
        .map(|data| return data.trim_start())
        .ok_or_else(malformed)?;
    if let Some(hex) = data.strip_prefix("dword:") {
        let value = u32::from_str_radix(hex, 16).map_err(|_| return malformed())?;
        store.write_u32_value(key_path, &value_name, value)?;
        return Ok(());
    }
    if data.starts_with('"') {
        let (value, trailing) = take_quoted(data).ok_or_else(malformed)?;
        if !trailing.trim().is_empty() {
            return Err(malformed());
        }
        store.write_string_value(key_path, &value_name, &value)?;
        return Ok(());
    }
    // hex(…) blobs, multi-line continuations and `=-` value deletion are
    // outside the supported subset.
    return Err(RegImportError::UnsupportedValue {
        line: line_number,
        text: line.to_owned(),
    });
}

/// Reads a leading `"…"` quoted string, unescaping `\\` and `\"`. Returns the
/// unescaped content and the remainder after the closing quote.
fn take_quoted(text: &str) -> Option<(String, &str)> {
    let mut characters = text.char_indices();
    match characters.next() {
        Some((_, '"')) => {}
        _ => return None,
    }
    let mut unescaped = String::new();
    while let Some((index, character)) = characters.next() {
        match character {
            '"' => return Some((unescaped, &text[index + 1..])),
            '\\' => match characters.next() {
                Some((_, escaped @ ('\\' | '"'))) => unescaped.push(escaped),
                _ => return None,
            },
            other => unescaped.push(other),
        }
    }
    // Unterminated quote.
    return None;
}

#[cfg(test)]
#[path = "../tests/registry/test_import.rs"]
mod test_import;
