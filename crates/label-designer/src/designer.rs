use crate::controls::ControlState;
use crate::form::FormState;
use crate::labels::LabelCatalog;
use crate::messages::{DesignerCommand, DesignerUpdate};
use crate::preview::{PreviewImage, PreviewTicket};
use crate::settings::DesignerSettings;
use crate::snapshot::PrintRequest;
use crate::status::{PrintOutcome, PrintStatus};
use crate::styles::StyleOptions;
use crate::upload::{FileState, QueuedFile, UploadPurpose, UploadQueue};

const NO_FILE_SELECTED: &str = "No image file selected";

/// Designer state and the rules that keep it consistent
///
/// Nothing here performs I/O. Every entry point returns the commands the
/// caller has to hand to the worker, and worker results come back through
/// [`Designer::apply`].
#[derive(Debug, Clone)]
pub struct Designer {
    /// Control values; call [`Designer::settings_changed`] after editing
    pub form: FormState,

    catalog: LabelCatalog,
    font_families: Vec<String>,
    dpi: f32,

    controls: ControlState,
    styles: StyleOptions,

    preview: Option<PreviewImage>,
    issued_ticket: PreviewTicket,
    displayed_ticket: Option<PreviewTicket>,
    preview_revision: u64,

    status: Option<PrintStatus>,
    print_enabled: bool,

    uploads: UploadQueue,
    refresh_deferred: bool,
    print_deferred: bool,
}

impl Designer {
    pub fn new(settings: &DesignerSettings) -> Self {
        let form = settings.form.clone();
        let controls = ControlState::derive(&form, &settings.label_sizes);

        Self {
            styles: StyleOptions::from_keys(vec![form.font_style.clone()]),
            form,
            catalog: settings.label_sizes.clone(),
            font_families: settings.font_families.clone(),
            dpi: settings.default_dpi,
            controls,
            preview: None,
            issued_ticket: PreviewTicket::default(),
            displayed_ticket: None,
            preview_revision: 0,
            status: None,
            print_enabled: true,
            uploads: UploadQueue::new(),
            refresh_deferred: false,
            print_deferred: false,
        }
    }

    // -------------------------------------------------------------------------
    // Accessors
    // -------------------------------------------------------------------------

    pub fn controls(&self) -> &ControlState {
        &self.controls
    }

    pub fn styles(&self) -> &StyleOptions {
        &self.styles
    }

    pub fn preview(&self) -> Option<&PreviewImage> {
        self.preview.as_ref()
    }

    /// Bumped whenever a different image is shown
    pub fn preview_revision(&self) -> u64 {
        self.preview_revision
    }

    /// Physical size readout of the current preview
    pub fn preview_size_label(&self) -> Option<String> {
        self.preview.as_ref().map(|image| image.size_label(self.dpi))
    }

    pub fn status(&self) -> Option<&PrintStatus> {
        self.status.as_ref()
    }

    pub fn print_enabled(&self) -> bool {
        self.print_enabled
    }

    pub fn uploads(&self) -> &UploadQueue {
        &self.uploads
    }

    pub fn catalog(&self) -> &LabelCatalog {
        &self.catalog
    }

    pub fn font_families(&self) -> &[String] {
        &self.font_families
    }

    pub fn dpi(&self) -> f32 {
        self.dpi
    }

    /// Request for the current form; previews never cut
    pub fn snapshot(&self, cut_once: bool) -> PrintRequest {
        PrintRequest::from_form(&self.form, cut_once)
    }

    // -------------------------------------------------------------------------
    // User intents
    // -------------------------------------------------------------------------

    /// Initial style lookup and preview
    pub fn startup(&mut self) -> Vec<DesignerCommand> {
        let mut commands = vec![DesignerCommand::LoadStyles {
            family: self.form.font_family.clone(),
        }];
        commands.extend(self.settings_changed());
        commands
    }

    pub fn select_font_family(&mut self, family: impl Into<String>) -> Vec<DesignerCommand> {
        self.form.font_family = family.into();
        vec![DesignerCommand::LoadStyles {
            family: self.form.font_family.clone(),
        }]
    }

    pub fn select_font_style(&mut self, style: &str) -> Vec<DesignerCommand> {
        if self.styles.select(style) {
            self.form.font_style = style.to_string();
        }
        self.settings_changed()
    }

    /// Re-derive the controls and refresh the preview
    pub fn settings_changed(&mut self) -> Vec<DesignerCommand> {
        self.controls = ControlState::derive(&self.form, &self.catalog);
        self.controls.constrain(&mut self.form);

        if !self.form.print_type.is_upload() {
            let ticket = self.issue_ticket();
            return vec![DesignerCommand::RenderPreview {
                ticket,
                request: self.snapshot(false),
            }];
        }

        match self.uploads.state() {
            None => Vec::new(),
            Some(FileState::Uploading) => {
                log::debug!("Upload in flight, preview refresh deferred");
                self.refresh_deferred = true;
                Vec::new()
            }
            Some(FileState::Queued) => {
                let ticket = self.issue_ticket();
                self.upload(UploadPurpose::Preview(ticket))
                    .into_iter()
                    .collect()
            }
        }
    }

    /// Submit the current label; `cut_once` cuts only after the last copy
    pub fn print(&mut self, cut_once: bool) -> Vec<DesignerCommand> {
        if !self.print_enabled {
            log::debug!("Print already in progress, ignoring request");
            return Vec::new();
        }

        self.print_enabled = false;
        self.status = Some(PrintStatus::InProgress);

        if !self.form.print_type.is_upload() {
            return vec![DesignerCommand::SubmitPrint {
                request: self.snapshot(cut_once),
            }];
        }

        match self.uploads.state() {
            None => {
                self.finish_print(PrintOutcome::failed(NO_FILE_SELECTED));
                Vec::new()
            }
            Some(FileState::Uploading) => {
                log::debug!("Upload in flight, print deferred");
                self.print_deferred = true;
                Vec::new()
            }
            Some(FileState::Queued) => self.upload(UploadPurpose::Print).into_iter().collect(),
        }
    }

    /// Queue a file, replacing any queued one, and preview it
    pub fn add_file(&mut self, file: QueuedFile) -> Vec<DesignerCommand> {
        if let Some(evicted) = self.uploads.add(file) {
            log::debug!("Replaced queued file {}", evicted.name);
        }
        self.settings_changed()
    }

    /// Drop the queued file and show the placeholder
    pub fn remove_file(&mut self) -> Vec<DesignerCommand> {
        self.uploads.remove();
        self.refresh_deferred = false;
        if std::mem::take(&mut self.print_deferred) {
            self.finish_print(PrintOutcome::failed(NO_FILE_SELECTED));
        }
        self.show_preview(PreviewImage::placeholder(), self.issued_ticket);
        self.settings_changed()
    }

    // -------------------------------------------------------------------------
    // Worker updates
    // -------------------------------------------------------------------------

    pub fn apply(&mut self, update: DesignerUpdate) -> Vec<DesignerCommand> {
        match update {
            DesignerUpdate::StylesLoaded { family, styles } => {
                if family != self.form.font_family {
                    log::debug!("Discarding styles for {}, {} is selected", family, self.form.font_family);
                    return Vec::new();
                }

                self.styles = StyleOptions::from_keys(styles);
                if let Some(style) = self.styles.selected_style() {
                    self.form.font_style = style.to_string();
                }
                self.settings_changed()
            }
            DesignerUpdate::StylesFailed { family, message } => {
                log::warn!("Failed to load styles for {}: {}", family, message);
                Vec::new()
            }
            DesignerUpdate::PreviewRendered { ticket, image } => {
                if self.displayed_ticket.is_some_and(|shown| ticket <= shown) {
                    log::debug!("Discarding stale preview {:?}", ticket);
                } else {
                    self.show_preview(image, ticket);
                }
                Vec::new()
            }
            DesignerUpdate::PreviewFailed { ticket, message } => {
                log::warn!("Preview {:?} failed: {}", ticket, message);
                Vec::new()
            }
            DesignerUpdate::PrintFinished { outcome } => {
                self.finish_print(outcome);
                Vec::new()
            }
            DesignerUpdate::UploadSettled { upload } => {
                if !self.uploads.requeue(upload) {
                    log::debug!("Upload {:?} belongs to a replaced file", upload);
                    return Vec::new();
                }

                // The print goes first; a deferred refresh waits for its settle
                if std::mem::take(&mut self.print_deferred) {
                    return self.upload(UploadPurpose::Print).into_iter().collect();
                }
                if std::mem::take(&mut self.refresh_deferred) {
                    self.settings_changed()
                } else {
                    Vec::new()
                }
            }
        }
    }

    fn issue_ticket(&mut self) -> PreviewTicket {
        self.issued_ticket = self.issued_ticket.next();
        self.issued_ticket
    }

    fn upload(&mut self, purpose: UploadPurpose) -> Option<DesignerCommand> {
        let (upload, file) = self.uploads.begin_upload()?;
        Some(DesignerCommand::Upload {
            upload,
            purpose,
            file,
            // Cutting only applies to the explicit text print action
            request: self.snapshot(false),
        })
    }

    fn show_preview(&mut self, image: PreviewImage, ticket: PreviewTicket) {
        self.preview = Some(image);
        self.displayed_ticket = Some(ticket);
        self.preview_revision += 1;
    }

    fn finish_print(&mut self, outcome: PrintOutcome) {
        let status = PrintStatus::from(outcome);
        if let PrintStatus::Failed(message) = &status {
            log::error!("Printing failed: {}", message);
        }
        self.status = Some(status);
        self.print_enabled = true;
    }
}
