//! CLI interface

use std::path::{Path, PathBuf};
use std::process::exit;

use clap::{ArgAction, Parser, Subcommand, ValueEnum};
use log::debug;
use xmltree::Element;

use crate::constants::{DEFAULT_CONFIG_FILE_NAME, MAIN_FONT_SETTING_NAME};
use crate::font::CustomFont;
use crate::init_logger;
use crate::storage::{load_custom_font_from_xml, save_custom_font_to_xml};
use crate::xml::{
    append_setting, ensure_settings_section, find_setting, find_setting_mut, load_document,
    new_document, remove_setting, save_document,
};

/// Main font settings tool for Explorer++-style configurations
///
/// The main CLI arguments
#[derive(Parser, Debug)]
#[clap(author, version, about, long_about = None)]
pub struct Args {
    /// Subcommand selecting the operation
    #[clap(subcommand)]
    command: Commands,
    /// Path of the XML configuration document
    #[clap(short, long, global = true, default_value = DEFAULT_CONFIG_FILE_NAME)]
    config: PathBuf,
    /// Use the registry medium instead of the configuration document
    #[clap(short, long, global = true, action = ArgAction::SetTrue)]
    registry: bool,
    /// Enable extensive logging
    #[clap(short, long, global = true, action = ArgAction::SetTrue)]
    debug: bool,
}

/// The ``command`` CLI subcommand
#[derive(Debug, Subcommand, PartialEq)]
enum Commands {
    /// Prints the stored main font
    ///
    /// Reads the configuration document by default and falls back to the
    /// registry (Windows only) when the document does not exist.
    Show,
    /// Stores the main font in the selected medium
    Set {
        /// Face name of the font, e.g. "Agency FB"
        name: String,
        /// Point size of the font
        size: u32,
    },
    /// Removes the stored main font from the selected medium
    Clear,
    /// Copies the stored main font from one medium to the other
    Migrate {
        /// Direction to migrate in
        #[clap(value_enum)]
        direction: MigrateDirection,
    },
}

/// Migration directions between the two storage media
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
enum MigrateDirection {
    /// Copy the registry font into the configuration document
    ToXml,
    /// Copy the configuration document font into the registry
    ToRegistry,
}

/// The main entrypoint
///
/// Initializes logging when requested and runs the selected subcommand.
pub fn entrypoint(args: Args) {
    if args.debug {
        init_logger();
    }
    match &args.command {
        Commands::Show => show_font(&args),
        Commands::Set { name, size } => set_font(&args, &CustomFont::new(name.clone(), *size)),
        Commands::Clear => clear_font(&args),
        Commands::Migrate { direction } => migrate_font(&args, *direction),
    }
}

fn show_font(args: &Args) {
    match stored_font(args) {
        Some(font) => println!("{font}"),
        None => println!("No custom main font is stored"),
    }
}

/// Resolves the font the application would use: the configuration document
/// wins over the registry, matching the application's load order.
fn stored_font(args: &Args) -> Option<CustomFont> {
    if args.registry {
        return registry_target::load_font();
    }
    if args.config.exists() {
        return load_font_from_document(&args.config);
    }
    if cfg!(windows) {
        debug!("Configuration document not found, falling back to the registry");
        return registry_target::load_font();
    }
    return None;
}

fn set_font(args: &Args, font: &CustomFont) {
    if args.registry {
        registry_target::save_font(font);
        println!("Stored {font} in the registry");
        return;
    }
    let mut root = load_or_new_document(&args.config);
    save_custom_font_to_xml(main_font_setting_mut(&mut root), font);
    save_document(&args.config, &root).expect("Failed to save the configuration document");
    println!("Stored {font} in {}", args.config.display());
}

fn clear_font(args: &Args) {
    if args.registry {
        registry_target::clear_font();
        println!("Removed the custom main font from the registry");
        return;
    }
    if !args.config.exists() {
        println!("No configuration document at {}", args.config.display());
        return;
    }
    let mut root = load_document(&args.config).expect("Failed to load the configuration document");
    if remove_setting(&mut root, MAIN_FONT_SETTING_NAME) {
        save_document(&args.config, &root).expect("Failed to save the configuration document");
        println!(
            "Removed the custom main font from {}",
            args.config.display()
        );
    } else {
        println!("No custom main font is stored in {}", args.config.display());
    }
}

fn migrate_font(args: &Args, direction: MigrateDirection) {
    match direction {
        MigrateDirection::ToXml => {
            let font = match registry_target::load_font() {
                Some(font) => font,
                None => {
                    eprintln!("No custom main font is stored in the registry");
                    exit(1);
                }
            };
            let mut root = load_or_new_document(&args.config);
            save_custom_font_to_xml(main_font_setting_mut(&mut root), &font);
            save_document(&args.config, &root).expect("Failed to save the configuration document");
            println!("Migrated {font} to {}", args.config.display());
        }
        MigrateDirection::ToRegistry => {
            let font = match load_font_from_document(&args.config) {
                Some(font) => font,
                None => {
                    eprintln!("No custom main font is stored in {}", args.config.display());
                    exit(1);
                }
            };
            registry_target::save_font(&font);
            println!("Migrated {font} to the registry");
        }
    }
}

/// Loads the font from the document, returning `None` when the document does
/// not exist or holds no usable font setting.
fn load_font_from_document(path: &Path) -> Option<CustomFont> {
    if !path.exists() {
        debug!("No configuration document at {}", path.display());
        return None;
    }
    let root = load_document(path).expect("Failed to load the configuration document");
    return find_setting(&root, MAIN_FONT_SETTING_NAME).and_then(load_custom_font_from_xml);
}

/// Loads the document at `path`, or starts a fresh one when absent.
fn load_or_new_document(path: &Path) -> Element {
    if path.exists() {
        return load_document(path).expect("Failed to load the configuration document");
    }
    debug!(
        "Starting a fresh configuration document at {}",
        path.display()
    );
    return new_document();
}

/// Returns the mutable MainFont setting element, creating the settings
/// section and the element as needed.
fn main_font_setting_mut(root: &mut Element) -> &mut Element {
    if find_setting(root, MAIN_FONT_SETTING_NAME).is_none() {
        append_setting(ensure_settings_section(root), MAIN_FONT_SETTING_NAME);
    }
    return match find_setting_mut(root, MAIN_FONT_SETTING_NAME) {
        Some(setting) => setting,
        None => unreachable!("the MainFont setting was just created"),
    };
}

#[cfg(windows)]
mod registry_target {
    use log::debug;

    use crate::constants::{MAIN_FONT_SETTING_NAME, REGISTRY_APP_KEY_PATH};
    use crate::font::CustomFont;
    use crate::registry::windows::WindowsRegistry;
    use crate::registry::RegistryStore;
    use crate::storage::{load_custom_font_from_registry, save_custom_font_to_registry};

    /// Registry key holding the main font values.
    fn key_path() -> String {
        return format!(r"{REGISTRY_APP_KEY_PATH}\{MAIN_FONT_SETTING_NAME}");
    }

    pub fn load_font() -> Option<CustomFont> {
        let store = WindowsRegistry::current_user();
        return load_custom_font_from_registry(&store, &key_path());
    }

    pub fn save_font(font: &CustomFont) {
        let mut store = WindowsRegistry::current_user();
        save_custom_font_to_registry(&mut store, &key_path(), font)
            .expect("Failed to write the font to the registry");
    }

    pub fn clear_font() {
        let mut store = WindowsRegistry::current_user();
        debug!("Deleting registry key {}", key_path());
        store
            .delete_key_tree(&key_path())
            .expect("Failed to delete the font registry key");
    }
}

#[cfg(not(windows))]
mod registry_target {
    use std::process::exit;

    use crate::font::CustomFont;

    fn exit_unsupported() -> ! {
        eprintln!("The registry storage medium is only available on Windows");
        exit(1);
    }

    pub fn load_font() -> Option<CustomFont> {
        exit_unsupported();
    }

    pub fn save_font(_font: &CustomFont) {
        exit_unsupported();
    }

    pub fn clear_font() {
        exit_unsupported();
    }
}

#[cfg(test)]
#[path = "./tests/test_cli.rs"]
mod test_cli;
