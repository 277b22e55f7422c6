// buildenv: Build Environment Generator
//
// SPDX-FileCopyrightText: 2026 Romeo Ahmed
// SPDX-License-Identifier: GPL-3.0-or-later

//! Options command for buildenv.

use crate::config::Config;

/// Display loaded settings files and the effective options.
pub fn run_options_command(config: &Config, config_files: &[String]) {
    if config_files.is_empty() {
        println!("No settings files loaded");
    } else {
        for line in config_files {
            println!("{line}");
        }
    }
    println!();
    for line in config.format_options() {
        println!("{line}");
    }
}
