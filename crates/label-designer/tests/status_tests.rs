use label_designer::constants::{STATUS_FAILURE, STATUS_IN_PROGRESS, STATUS_SUCCESS};
use label_designer::*;

#[test]
fn test_response_parsing() {
    let ok: PrintResponse = serde_json::from_str(r#"{"success": true}"#).unwrap();
    assert_eq!(PrintOutcome::from(ok), PrintOutcome::Printed);

    let failed: PrintResponse =
        serde_json::from_str(r#"{"success": false, "message": "Unknown label_size"}"#).unwrap();
    assert_eq!(
        PrintOutcome::from(failed),
        PrintOutcome::failed("Unknown label_size")
    );
}

#[test]
fn test_status_texts() {
    assert_eq!(PrintStatus::InProgress.message(), STATUS_IN_PROGRESS);
    assert_eq!(PrintStatus::Succeeded.message(), STATUS_SUCCESS);

    let failed = PrintStatus::from(PrintOutcome::failed("printer offline"));
    assert_eq!(failed.headline(), STATUS_FAILURE);
    assert_eq!(
        failed.message(),
        format!("{}\nprinter offline", STATUS_FAILURE)
    );
}

#[test]
fn test_terminal_states() {
    assert!(!PrintStatus::InProgress.is_terminal());
    assert!(PrintStatus::Succeeded.is_terminal());
    assert!(PrintStatus::Failed(String::new()).is_terminal());
}

#[test]
fn test_style_defaults() {
    let styles = StyleOptions::from_keys(vec!["Bold".into(), "Book".into(), "Regular".into()]);
    assert_eq!(styles.selected_style(), Some("Regular"));

    let styles = StyleOptions::from_keys(vec!["Book".into(), "Italic".into()]);
    assert_eq!(styles.selected_style(), Some("Book"));

    let styles = StyleOptions::from_keys(Vec::new());
    assert_eq!(styles.selected_style(), None);

    let mut styles = StyleOptions::from_keys(vec!["Bold".into(), "Italic".into()]);
    assert!(styles.select("Italic"));
    assert!(!styles.select("Regular"));
    assert_eq!(styles.selected_style(), Some("Italic"));
}
