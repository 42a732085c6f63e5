//! Storage locations shared by the two settings media.

/// Registry key below HKEY_CURRENT_USER holding all application settings.
pub const REGISTRY_APP_KEY_PATH: &str = r"Software\Explorer++";

/// Name of the registry subkey / XML setting carrying the main font.
pub const MAIN_FONT_SETTING_NAME: &str = "MainFont";

/// File name of the portable XML configuration document.
pub const DEFAULT_CONFIG_FILE_NAME: &str = "config.xml";
