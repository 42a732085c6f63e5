#![deny(clippy::implicit_return)]
#![allow(clippy::needless_return)]
use clap::Parser;
use expp_settings_lib::cli::{entrypoint, Args};

fn main() {
    entrypoint(Args::parse());
}
