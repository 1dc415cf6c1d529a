use std::{collections::HashMap, path::PathBuf};

use parlor::{
    SceneConfig,
    config::{ASSET_DIR_VAR, TEXTURE_UNITS_VAR},
};

fn lookup(vars: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
    let vars: HashMap<String, String> = vars
        .iter()
        .map(|(key, value)| (key.to_string(), value.to_string()))
        .collect();
    move |key| vars.get(key).cloned()
}

#[test]
fn defaults_without_overrides() {
    let config = SceneConfig::from_lookup(lookup(&[]));
    assert_eq!(config, SceneConfig::default());
    assert_eq!(config.asset_dir, PathBuf::from("./assets"));
    assert_eq!(config.texture_units, 16);
}

#[test]
fn asset_dir_is_overridden() {
    let config = SceneConfig::from_lookup(lookup(&[(ASSET_DIR_VAR, "/srv/lounge")]));
    assert_eq!(config.asset_dir, PathBuf::from("/srv/lounge"));
}

#[test]
fn blank_asset_dir_is_ignored() {
    let config = SceneConfig::from_lookup(lookup(&[(ASSET_DIR_VAR, "  ")]));
    assert_eq!(config.asset_dir, PathBuf::from("./assets"));
}

#[test]
fn texture_units_are_parsed() {
    let config = SceneConfig::from_lookup(lookup(&[(TEXTURE_UNITS_VAR, " 8 ")]));
    assert_eq!(config.texture_units, 8);
}

#[test]
fn texture_units_are_clamped() {
    let none = SceneConfig::from_lookup(lookup(&[(TEXTURE_UNITS_VAR, "0")]));
    assert_eq!(none.texture_units, 1);

    let many = SceneConfig::from_lookup(lookup(&[(TEXTURE_UNITS_VAR, "64")]));
    assert_eq!(many.texture_units, 16);
}

#[test]
fn unparsable_texture_units_keep_the_default() {
    let config = SceneConfig::from_lookup(lookup(&[(TEXTURE_UNITS_VAR, "sixteen")]));
    assert_eq!(config.texture_units, 16);
}
