use std::fs;

use lipi_engine::settings;
use lipi_engine::SymbolTables;

use crate::die;

pub fn tables_export() {
    print!("{}", SymbolTables::default_toml());
}

pub fn tables_validate(file: &str) {
    let content = die!(fs::read_to_string(file), "Error reading {file}: {}");
    let t = die!(SymbolTables::from_toml(&content), "Error: {}");
    println!(
        "OK: {} vowels, {} consonants, {} vowel signs, {} clusters, {} exceptions",
        t.vowels().len(),
        t.consonants().len(),
        t.vowel_signs().len(),
        t.clusters().len(),
        t.exceptions().len()
    );
}

pub fn settings_export() {
    print!("{}", settings::default_toml());
}

pub fn settings_validate(file: &str) {
    let content = die!(fs::read_to_string(file), "Error reading {file}: {}");
    let s = die!(settings::parse_settings_toml(&content), "Error: {}");
    let c = s.conversion;
    println!(
        "OK: trigger_on_space={}, case_sensitive={}, preserve_punctuation={}, enable_exceptions={}",
        c.trigger_on_space, c.case_sensitive, c.preserve_punctuation, c.enable_exceptions
    );
}
