mod common;

use common::{designer, png_file, preview_image, settle};
use label_designer::*;

fn preview_ticket(commands: &[DesignerCommand]) -> PreviewTicket {
    commands
        .iter()
        .find_map(|command| match command {
            DesignerCommand::RenderPreview { ticket, .. } => Some(*ticket),
            DesignerCommand::Upload {
                purpose: UploadPurpose::Preview(ticket),
                ..
            } => Some(*ticket),
            _ => None,
        })
        .expect("expected a preview command")
}

#[test]
fn test_startup_loads_styles_and_previews() {
    let mut designer = designer();
    let commands = designer.startup();

    assert_eq!(commands.len(), 2);
    assert!(matches!(
        &commands[0],
        DesignerCommand::LoadStyles { family } if family == "DejaVu Serif"
    ));
    assert!(matches!(&commands[1], DesignerCommand::RenderPreview { request, .. } if request.cut_once == 0));
}

#[test]
fn test_text_print_carries_cut_flag() {
    let mut designer = designer();

    let commands = designer.print(true);
    assert!(matches!(&commands[..], [DesignerCommand::SubmitPrint { request }] if request.cut_once == 1));

    designer.apply(DesignerUpdate::PrintFinished {
        outcome: PrintOutcome::Printed,
    });

    let commands = designer.print(false);
    assert!(matches!(&commands[..], [DesignerCommand::SubmitPrint { request }] if request.cut_once == 0));
}

#[test]
fn test_print_disables_controls_until_finished() {
    let mut designer = designer();

    designer.print(false);
    assert!(!designer.print_enabled());
    assert_eq!(designer.status(), Some(&PrintStatus::InProgress));

    // A second click while the first is outstanding sends nothing
    assert!(designer.print(false).is_empty());

    designer.apply(DesignerUpdate::PrintFinished {
        outcome: PrintResponse {
            success: true,
            message: None,
        }
        .into(),
    });
    assert!(designer.print_enabled());
    assert_eq!(designer.status(), Some(&PrintStatus::Succeeded));
}

#[test]
fn test_failed_print_reports_server_message() {
    let mut designer = designer();

    designer.print(false);
    designer.apply(DesignerUpdate::PrintFinished {
        outcome: PrintResponse {
            success: false,
            message: Some("X".to_string()),
        }
        .into(),
    });

    assert!(designer.print_enabled());
    let status = designer.status().unwrap();
    assert_eq!(status, &PrintStatus::Failed("X".to_string()));
    assert!(status.message().contains('X'));
}

#[test]
fn test_transport_failure_reenables_print() {
    let mut designer = designer();

    designer.print(false);
    designer.apply(DesignerUpdate::PrintFinished {
        outcome: PrintOutcome::failed("connection refused"),
    });

    assert!(designer.print_enabled());
    assert!(designer.status().unwrap().message().contains("connection refused"));
}

#[test]
fn test_settings_change_forces_black_on_single_color_tape() {
    let mut designer = designer();
    designer.form.label_size = "62red".to_string();
    designer.form.print_color = PrintColor::Red;
    designer.settings_changed();
    assert!(designer.controls().color_choice_enabled);
    assert_eq!(designer.form.print_color, PrintColor::Red);

    designer.form.label_size = "29".to_string();
    let commands = designer.settings_changed();
    assert!(!designer.controls().color_choice_enabled);
    assert_eq!(designer.form.print_color, PrintColor::Black);
    assert!(matches!(
        &commands[..],
        [DesignerCommand::RenderPreview { request, .. }] if request.print_color == PrintColor::Black
    ));
}

#[test]
fn test_stale_preview_is_discarded() {
    let mut designer = designer();

    let first = preview_ticket(&designer.settings_changed());
    designer.form.text = "newer".to_string();
    let second = preview_ticket(&designer.settings_changed());
    assert!(second > first);

    designer.apply(DesignerUpdate::PreviewRendered {
        ticket: second,
        image: preview_image(600, 300),
    });
    designer.apply(DesignerUpdate::PreviewRendered {
        ticket: first,
        image: preview_image(10, 10),
    });

    let shown = designer.preview().unwrap();
    assert_eq!((shown.width_px, shown.height_px), (600, 300));
    assert_eq!(designer.preview_size_label().unwrap(), "5.1 × 2.5 cm");
    assert_eq!(designer.preview_revision(), 1);
}

#[test]
fn test_failed_preview_keeps_previous_image() {
    let mut designer = designer();

    let ticket = preview_ticket(&designer.settings_changed());
    designer.apply(DesignerUpdate::PreviewRendered {
        ticket,
        image: preview_image(300, 150),
    });

    let ticket = preview_ticket(&designer.settings_changed());
    let commands = designer.apply(DesignerUpdate::PreviewFailed {
        ticket,
        message: "500".to_string(),
    });

    assert!(commands.is_empty());
    assert_eq!(designer.preview().unwrap().width_px, 300);
    assert_eq!(designer.preview_revision(), 1);
    assert_eq!(designer.status(), None);
}

#[test]
fn test_family_change_replaces_styles() {
    let mut designer = designer();

    let commands = designer.select_font_family("DejaVu Sans");
    assert!(matches!(
        &commands[..],
        [DesignerCommand::LoadStyles { family }] if family == "DejaVu Sans"
    ));

    let commands = designer.apply(DesignerUpdate::StylesLoaded {
        family: "DejaVu Sans".to_string(),
        styles: vec!["Bold".to_string(), "Book".to_string(), "Oblique".to_string()],
    });

    assert_eq!(designer.styles().styles, vec!["Bold", "Book", "Oblique"]);
    assert_eq!(designer.styles().selected_style(), Some("Book"));
    assert_eq!(designer.form.font_style, "Book");

    // Replacing the styles refreshes the preview with them
    assert!(matches!(
        &commands[..],
        [DesignerCommand::RenderPreview { request, .. }]
            if request.font_family == "DejaVu Sans" && request.font_style == "Book"
    ));
}

#[test]
fn test_styles_without_default_select_first() {
    let mut designer = designer();
    designer.select_font_family("Noto Mono");
    designer.apply(DesignerUpdate::StylesLoaded {
        family: "Noto Mono".to_string(),
        styles: vec!["Bold".to_string(), "Italic".to_string()],
    });

    assert_eq!(designer.styles().selected_style(), Some("Bold"));
    assert_eq!(designer.form.font_style, "Bold");
}

#[test]
fn test_styles_for_previous_family_are_ignored() {
    let mut designer = designer();
    designer.select_font_family("A");
    designer.select_font_family("B");

    let commands = designer.apply(DesignerUpdate::StylesLoaded {
        family: "A".to_string(),
        styles: vec!["Regular".to_string()],
    });

    assert!(commands.is_empty());
    assert_eq!(designer.form.font_family, "B");
}

#[test]
fn test_style_failure_keeps_options() {
    let mut designer = designer();
    let before = designer.styles().clone();

    let commands = designer.apply(DesignerUpdate::StylesFailed {
        family: designer.form.font_family.clone(),
        message: "404".to_string(),
    });

    assert!(commands.is_empty());
    assert_eq!(designer.styles(), &before);
}

#[test]
fn test_image_mode_previews_through_upload() {
    let mut designer = designer();
    designer.form.print_type = PrintType::Image;

    // Nothing to preview yet
    assert!(designer.settings_changed().is_empty());
    assert!(designer.controls().image_panel_visible);

    let commands = designer.add_file(png_file("logo.png"));
    match &commands[..] {
        [DesignerCommand::Upload {
            purpose: UploadPurpose::Preview(_),
            file,
            request,
            ..
        }] => {
            assert_eq!(file.name, "logo.png");
            assert_eq!(request.cut_once, 0);
            assert_eq!(request.print_type, PrintType::Image);
        }
        other => panic!("unexpected commands: {other:?}"),
    }
    assert_eq!(designer.uploads().state(), Some(FileState::Uploading));

    settle(&mut designer);
    assert_eq!(designer.uploads().state(), Some(FileState::Queued));
}

#[test]
fn test_second_file_evicts_first() {
    let mut designer = designer();
    designer.form.print_type = PrintType::Image;

    designer.add_file(png_file("first.png"));
    settle(&mut designer);
    designer.add_file(png_file("second.png"));

    assert_eq!(designer.uploads().len(), 1);
    assert_eq!(designer.uploads().file().unwrap().name, "second.png");
}

#[test]
fn test_removing_file_shows_placeholder() {
    let mut designer = designer();
    designer.form.print_type = PrintType::Image;

    let ticket = preview_ticket(&designer.add_file(png_file("logo.png")));
    designer.apply(DesignerUpdate::PreviewRendered {
        ticket,
        image: preview_image(200, 100),
    });
    settle(&mut designer);

    let commands = designer.remove_file();
    assert!(commands.is_empty());
    assert!(designer.uploads().is_empty());

    let shown = designer.preview().unwrap();
    assert_eq!((shown.width_px, shown.height_px), (1, 1));
}

#[test]
fn test_preview_of_removed_file_does_not_replace_placeholder() {
    let mut designer = designer();
    designer.form.print_type = PrintType::Image;

    let ticket = preview_ticket(&designer.add_file(png_file("logo.png")));
    designer.remove_file();
    designer.apply(DesignerUpdate::PreviewRendered {
        ticket,
        image: preview_image(200, 100),
    });

    assert_eq!(designer.preview().unwrap().width_px, 1);
}

#[test]
fn test_refresh_during_upload_is_deferred() {
    let mut designer = designer();
    designer.form.print_type = PrintType::Image;
    designer.add_file(png_file("logo.png"));

    designer.form.print_count = 2;
    assert!(designer.settings_changed().is_empty());

    let commands = settle(&mut designer);
    assert!(matches!(
        &commands[..],
        [DesignerCommand::Upload { purpose: UploadPurpose::Preview(_), request, .. }]
            if request.print_count == 2
    ));
}

#[test]
fn test_image_print_uploads_without_cut() {
    let mut designer = designer();
    designer.form.print_type = PrintType::Image;
    designer.add_file(png_file("logo.png"));
    settle(&mut designer);

    let commands = designer.print(true);
    assert!(matches!(
        &commands[..],
        [DesignerCommand::Upload { purpose: UploadPurpose::Print, request, .. }] if request.cut_once == 0
    ));
    assert!(!designer.print_enabled());

    designer.apply(DesignerUpdate::PrintFinished {
        outcome: PrintOutcome::Printed,
    });
    settle(&mut designer);
    assert!(designer.print_enabled());
    assert_eq!(designer.uploads().state(), Some(FileState::Queued));
}

#[test]
fn test_image_print_without_file_fails_immediately() {
    let mut designer = designer();
    designer.form.print_type = PrintType::Image;
    designer.settings_changed();

    assert!(designer.print(false).is_empty());
    assert!(designer.print_enabled());
    assert!(matches!(designer.status(), Some(PrintStatus::Failed(_))));
}

#[test]
fn test_print_waits_for_preview_upload() {
    let mut designer = designer();
    designer.form.print_type = PrintType::Image;
    designer.add_file(png_file("logo.png"));
    assert_eq!(designer.uploads().state(), Some(FileState::Uploading));

    assert!(designer.print(false).is_empty());
    assert!(!designer.print_enabled());
    assert_eq!(designer.status(), Some(&PrintStatus::InProgress));

    let commands = settle(&mut designer);
    assert!(matches!(
        &commands[..],
        [DesignerCommand::Upload { purpose: UploadPurpose::Print, file, request, .. }]
            if request.cut_once == 0 && file.name == "logo.png"
    ));
    assert_eq!(designer.uploads().state(), Some(FileState::Uploading));

    designer.apply(DesignerUpdate::PrintFinished {
        outcome: PrintOutcome::Printed,
    });
    assert!(settle(&mut designer).is_empty());
    assert!(designer.print_enabled());
    assert_eq!(designer.status(), Some(&PrintStatus::Succeeded));
}

#[test]
fn test_waiting_print_fails_when_file_removed() {
    let mut designer = designer();
    designer.form.print_type = PrintType::Image;
    designer.add_file(png_file("logo.png"));
    let upload = designer.uploads().id().unwrap();

    designer.print(false);
    designer.remove_file();

    assert!(designer.print_enabled());
    assert!(matches!(designer.status(), Some(PrintStatus::Failed(_))));
    assert!(designer.apply(DesignerUpdate::UploadSettled { upload }).is_empty());
}

#[test]
fn test_settle_of_replaced_file_keeps_new_upload_in_flight() {
    let mut designer = designer();
    designer.form.print_type = PrintType::Image;

    designer.add_file(png_file("first.png"));
    let first = designer.uploads().id().unwrap();
    designer.add_file(png_file("second.png"));
    assert_eq!(designer.uploads().state(), Some(FileState::Uploading));

    let commands = designer.apply(DesignerUpdate::UploadSettled { upload: first });
    assert!(commands.is_empty());
    assert_eq!(designer.uploads().state(), Some(FileState::Uploading));

    settle(&mut designer);
    assert_eq!(designer.uploads().state(), Some(FileState::Queued));
    assert_eq!(designer.uploads().file().unwrap().name, "second.png");
}
