#![deny(clippy::implicit_return)]
#![allow(clippy::needless_return)]
//! Persistence of the Explorer++-style custom main font setting.
//!
//! The font is stored in one of two media: a key in the Windows registry or a
//! `Setting` element in a portable XML configuration document. The [`storage`]
//! module holds the load/save logic, [`registry`] and [`xml`] the media.

use simplelog::{
    format_description, ColorChoice, ConfigBuilder, LevelFilter, TermLogger, TerminalMode,
};

pub mod cli;
pub mod constants;
pub mod font;
pub mod registry;
pub mod storage;
pub mod xml;

/// Initializes the logger, writing to stderr so command output stays clean.
pub fn init_logger() {
    TermLogger::init(
        LevelFilter::Debug,
        ConfigBuilder::new()
            .set_time_format_custom(format_description!("[hour]:[minute]:[second].[subsecond]"))
            .build(),
        TerminalMode::Stderr,
        ColorChoice::Auto,
    )
    .unwrap();
    log_panics::init();
}
