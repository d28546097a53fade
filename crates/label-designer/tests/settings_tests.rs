use label_designer::*;

#[test]
fn test_defaults_are_valid() {
    let settings = DesignerSettings::default();
    assert!(settings.validate().is_ok());
    assert_eq!(settings.default_dpi, 300.0);
    assert_eq!(settings.form.label_size, "62");
    assert_eq!(settings.form.font_size, 70);
    assert_eq!(settings.form.font_style, "Book");
    assert_eq!(settings.server.preview_path, "/api/preview");
}

#[test]
fn test_validation_errors() {
    let mut settings = DesignerSettings::default();
    settings.server.base_url = "not a url".to_string();
    assert!(matches!(settings.validate(), Err(DesignerError::Url(_))));

    let mut settings = DesignerSettings::default();
    settings.default_dpi = 0.0;
    match settings.validate() {
        Err(DesignerError::Config(msg)) => assert!(msg.contains("DPI")),
        other => panic!("Expected Config error, got {other:?}"),
    }

    let mut settings = DesignerSettings::default();
    settings.form.label_size = "999".to_string();
    assert!(matches!(settings.validate(), Err(DesignerError::Config(_))));
}

#[tokio::test]
async fn test_save_and_load_settings() {
    use tempfile::NamedTempFile;

    let mut settings = DesignerSettings::default();
    settings.server.base_url = "http://printer.local:8013".to_string();
    settings.form.label_size = "62red".to_string();
    settings.form.orientation = Orientation::Rotated;
    settings.form.print_type = PrintType::QrCode;
    settings.font_families = vec!["DejaVu Sans".to_string(), "DejaVu Serif".to_string()];

    let temp_file = NamedTempFile::new().unwrap();
    let path = temp_file.path();

    settings.save(path).await.unwrap();
    let loaded = DesignerSettings::load(path).await.unwrap();

    assert_eq!(loaded, settings);
}

#[tokio::test]
async fn test_partial_settings_use_defaults() {
    use tempfile::NamedTempFile;

    let temp_file = NamedTempFile::new().unwrap();
    tokio::fs::write(
        temp_file.path(),
        r#"{"server": {"base_url": "http://10.0.0.5:8013"}, "form": {"font_size": 40}}"#,
    )
    .await
    .unwrap();

    let loaded = DesignerSettings::load(temp_file.path()).await.unwrap();
    assert_eq!(loaded.server.base_url, "http://10.0.0.5:8013");
    assert_eq!(loaded.server.print_path, "/api/print");
    assert_eq!(loaded.form.font_size, 40);
    assert_eq!(loaded.form.label_size, "62");
    assert_eq!(loaded.label_sizes, LabelCatalog::brother_ql());
}

#[tokio::test]
async fn test_malformed_settings() {
    use tempfile::NamedTempFile;

    let temp_file = NamedTempFile::new().unwrap();
    tokio::fs::write(temp_file.path(), "{ nope").await.unwrap();

    match DesignerSettings::load(temp_file.path()).await {
        Err(DesignerError::Config(msg)) => assert!(msg.contains("Failed to parse")),
        other => panic!("Expected Config error, got {other:?}"),
    }
}
