// SPDX-License-Identifier: MPL-2.0
use folio::config::{self, Config};
use folio::error::Error;
use folio::i18n::fluent::I18n;
use folio::infrastructure::engine_options::{self, EngineOptions};
use folio::ui::notifications::{Manager, Notification, Toast};
use folio::ui::viewer::DocumentViewer;
use tempfile::tempdir;

#[test]
fn test_language_change_via_config() {
    let dir = tempdir().expect("Failed to create temporary directory");
    let temp_config_file_path = dir.path().join("settings.toml");

    // 1. Initial config: en-US
    let mut initial_config = Config::default();
    initial_config.general.language = Some("en-US".to_string());
    config::save_to_path(&initial_config, &temp_config_file_path)
        .expect("Failed to write initial config file");

    let loaded_initial_config = config::load_from_path(&temp_config_file_path)
        .expect("Failed to load initial config from path");
    let i18n_en = I18n::new(None, &loaded_initial_config);
    assert_eq!(i18n_en.current_locale().to_string(), "en-US");

    // 2. Change config to fr
    let mut french_config = Config::default();
    french_config.general.language = Some("fr".to_string());
    config::save_to_path(&french_config, &temp_config_file_path)
        .expect("Failed to write french config file");

    let loaded_french_config = config::load_from_path(&temp_config_file_path)
        .expect("Failed to load french config from path");
    let i18n_fr = I18n::new(None, &loaded_french_config);
    assert_eq!(i18n_fr.current_locale().to_string(), "fr");

    dir.close().expect("Failed to close temporary directory");
}

#[test]
fn test_zoom_levels_from_settings_file() {
    let dir = tempdir().expect("Failed to create temporary directory");
    std::fs::write(
        dir.path().join("settings.toml"),
        "[viewer]\nzoom_levels = [50, 100, 300]\ndefault_zoom = 50\n",
    )
    .expect("Failed to write settings");

    let (config, warning) = config::load_with_override(Some(dir.path().to_path_buf()));
    assert!(warning.is_none());

    let viewer = DocumentViewer::from_config(&config);
    let percents: Vec<u16> = viewer.zoom_levels().iter().map(|l| l.percent()).collect();
    assert_eq!(percents, vec![50, 100, 300]);
    assert_eq!(viewer.zoom().percent(), 50);
}

#[test]
fn test_notification_limit_from_settings_file() {
    let dir = tempdir().expect("Failed to create temporary directory");
    std::fs::write(
        dir.path().join("settings.toml"),
        "[notifications]\nmax_visible = 1\n",
    )
    .expect("Failed to write settings");

    let (config, _) = config::load_with_override(Some(dir.path().to_path_buf()));
    let mut manager = Manager::with_max_visible(config.notifications.max_visible());
    manager.push(Notification::error("notification-load-error-title"));
    manager.push(Notification::error("notification-render-error-title"));

    assert_eq!(manager.visible_count(), 1);
    assert_eq!(manager.queued_count(), 1);
}

#[test]
fn test_load_error_toast_is_localized() {
    let mut config = Config::default();
    config.general.language = Some("fr".to_string());
    let i18n = I18n::new(None, &config);

    let notification = Notification::error("notification-load-error-title")
        .with_description("notification-load-error-general");
    let toast = Toast::resolve(&notification, &i18n);

    assert_eq!(toast.title, "Erreur de chargement du PDF");
    assert!(toast.description.is_some());
    assert!(toast.is_destructive());
}

#[test]
fn test_engine_options_install_once() {
    let first = EngineOptions::from_config(&Config::default().engine, "3.11.174");
    let installed = engine_options::install(first.clone()).expect("first install succeeds");
    assert_eq!(installed, &first);
    assert!(installed.worker_url().contains("3.11.174"));

    let second = EngineOptions::from_config(&Config::default().engine, "9.9.9");
    assert!(matches!(
        engine_options::install(second),
        Err(Error::EngineAlreadyInitialized)
    ));
    assert_eq!(engine_options::installed(), Some(&first));
}
