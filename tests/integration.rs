// SPDX-License-Identifier: MPL-2.0
use sticker_smash::app::{Phase, Session};
use sticker_smash::config::{self, Config, ExportTarget};
use sticker_smash::i18n::fluent::I18n;
use sticker_smash::stickers;
use std::path::PathBuf;
use tempfile::tempdir;

#[test]
fn test_language_change_via_config() {
    let dir = tempdir().expect("Failed to create temporary directory");
    let temp_config_file_path = dir.path().join("settings.toml");

    // 1. Initial config: en-US
    let initial_config = Config {
        language: Some("en-US".to_string()),
        export_target: None,
    };
    config::save_to_path(&initial_config, &temp_config_file_path)
        .expect("Failed to write initial config file");

    let loaded_initial_config = config::load_from_path(&temp_config_file_path)
        .expect("Failed to load initial config from path");
    let i18n_en = I18n::new(None, &loaded_initial_config);
    assert_eq!(i18n_en.current_locale().to_string(), "en-US");

    // 2. Change config to fr
    let french_config = Config {
        language: Some("fr".to_string()),
        export_target: None,
    };
    config::save_to_path(&french_config, &temp_config_file_path)
        .expect("Failed to write french config file");

    let loaded_french_config = config::load_from_path(&temp_config_file_path)
        .expect("Failed to load french config from path");
    let i18n_fr = I18n::new(None, &loaded_french_config);
    assert_eq!(i18n_fr.current_locale().to_string(), "fr");

    // CLI flag wins over the config file
    let i18n_cli = I18n::new(Some("en-US".to_string()), &loaded_french_config);
    assert_eq!(i18n_cli.current_locale().to_string(), "en-US");
}

#[test]
fn test_export_target_round_trips_through_config() {
    let dir = tempdir().expect("Failed to create temporary directory");
    let path = dir.path().join("settings.toml");

    let config = Config {
        language: None,
        export_target: Some(ExportTarget::Download),
    };
    config::save_to_path(&config, &path).expect("Failed to save config");

    let loaded = config::load_from_path(&path).expect("Failed to load config");
    assert_eq!(loaded.export_target, Some(ExportTarget::Download));
}

#[test]
fn test_full_editing_flow_through_public_api() {
    let mut session = Session::new();
    assert_eq!(session.phase(), Phase::Empty);

    // Picking a photo alone does not start editing
    session.set_selected_image(PathBuf::from("/tmp/photo.png"));
    assert_eq!(session.phase(), Phase::Empty);

    session.confirm();
    assert_eq!(session.phase(), Phase::Editing);

    session.open_picker();
    assert_eq!(session.phase(), Phase::EditingPicking);

    let (id, _) = stickers::catalog().next().expect("catalog is not empty");
    session.choose_sticker(id);
    assert_eq!(session.phase(), Phase::Editing);
    assert_eq!(session.chosen_sticker(), Some(id));

    let composition = session.composition();
    assert!(composition.background.is_some());
    assert_eq!(composition.sticker, Some(id));

    session.reset();
    assert_eq!(session.phase(), Phase::Empty);
    assert!(session.selected_image().is_none());
    assert!(session.chosen_sticker().is_none());
}

#[test]
fn test_confirm_without_photo_uses_placeholder() {
    let mut session = Session::new();
    session.confirm();

    assert_eq!(session.phase(), Phase::Editing);
    assert!(session.selected_image().is_none());

    // The composition reflects the placeholder background
    let composition = session.composition();
    assert!(composition.background.is_none());
}
