use eframe::egui;
use label_designer::{Designer, DesignerClient, DesignerSettings, QueuedFile};
use label_designer_runtime::{DesignerCommand, DesignerUpdate, worker_task};
use std::path::PathBuf;
use std::time::Duration;
use tokio::sync::mpsc;

use crate::logger::AppLogger;
use crate::views::{show_designer, show_log_panel};

/// Results of background file work, delivered back to the UI thread
enum AppEvent {
    SettingsLoaded(DesignerSettings),
    FileLoaded(QueuedFile),
}

pub struct LabelDesignerApp {
    designer: Designer,
    settings: DesignerSettings,
    logger: AppLogger,

    // Async infrastructure
    command_tx: mpsc::UnboundedSender<DesignerCommand>,
    update_rx: mpsc::UnboundedReceiver<DesignerUpdate>,
    event_tx: mpsc::UnboundedSender<AppEvent>,
    event_rx: mpsc::UnboundedReceiver<AppEvent>,
    tokio_handle: tokio::runtime::Handle,

    preview_texture: Option<egui::TextureHandle>,
    texture_revision: u64,
}

impl LabelDesignerApp {
    pub fn new(
        _cc: &eframe::CreationContext<'_>,
        tokio_handle: tokio::runtime::Handle,
        settings: DesignerSettings,
        logger: AppLogger,
    ) -> anyhow::Result<Self> {
        let (command_tx, update_rx) = spawn_worker(&tokio_handle, &settings)?;
        let (event_tx, event_rx) = mpsc::unbounded_channel();

        let mut app = Self {
            designer: Designer::new(&settings),
            settings,
            logger,
            command_tx,
            update_rx,
            event_tx,
            event_rx,
            tokio_handle,
            preview_texture: None,
            texture_revision: 0,
        };

        let commands = app.designer.startup();
        app.dispatch(commands);
        Ok(app)
    }

    fn dispatch(&self, commands: Vec<DesignerCommand>) {
        for command in commands {
            if self.command_tx.send(command).is_err() {
                log::error!("Worker has stopped, command dropped");
            }
        }
    }

    /// Start over with new settings, on a fresh worker
    fn apply_settings(&mut self, settings: DesignerSettings) {
        match spawn_worker(&self.tokio_handle, &settings) {
            Ok((command_tx, update_rx)) => {
                // Dropping the old sender lets the old worker finish
                self.command_tx = command_tx;
                self.update_rx = update_rx;
            }
            Err(e) => {
                log::error!("Failed to apply settings: {}", e);
                return;
            }
        }

        self.designer = Designer::new(&settings);
        self.settings = settings;
        self.preview_texture = None;
        self.texture_revision = 0;

        let commands = self.designer.startup();
        self.dispatch(commands);
    }

    fn load_file(&self, path: PathBuf) {
        let event_tx = self.event_tx.clone();
        self.tokio_handle.spawn(async move {
            match QueuedFile::load(&path).await {
                Ok(file) => {
                    let _ = event_tx.send(AppEvent::FileLoaded(file));
                }
                Err(e) => log::error!("Cannot use {}: {}", path.display(), e),
            }
        });
    }

    fn save_settings(&self) {
        if let Some(path) = rfd::FileDialog::new()
            .add_filter("JSON", &["json"])
            .set_file_name("label_designer.json")
            .save_file()
        {
            let mut settings = self.settings.clone();
            settings.form = self.designer.form.clone();

            self.tokio_handle.spawn(async move {
                if let Err(e) = settings.save(&path).await {
                    log::error!("Failed to save settings: {}", e);
                } else {
                    log::info!("Settings saved to {}", path.display());
                }
            });
        }
    }

    fn load_settings(&self) {
        if let Some(path) = rfd::FileDialog::new()
            .add_filter("JSON", &["json"])
            .pick_file()
        {
            let event_tx = self.event_tx.clone();
            self.tokio_handle.spawn(async move {
                match DesignerSettings::load(&path).await {
                    Ok(settings) => {
                        log::info!("Settings loaded from {}", path.display());
                        let _ = event_tx.send(AppEvent::SettingsLoaded(settings));
                    }
                    Err(e) => log::error!("Failed to load settings: {}", e),
                }
            });
        }
    }

    fn sync_texture(&mut self, ctx: &egui::Context) {
        if self.designer.preview_revision() == self.texture_revision {
            return;
        }
        self.texture_revision = self.designer.preview_revision();

        let Some(preview) = self.designer.preview() else {
            self.preview_texture = None;
            return;
        };

        let color_image = egui::ColorImage::from_rgba_unmultiplied(
            [preview.width_px as usize, preview.height_px as usize],
            &preview.rgba,
        );

        if let Some(texture) = &mut self.preview_texture {
            texture.set(color_image, egui::TextureOptions::default());
        } else {
            self.preview_texture = Some(ctx.load_texture(
                "label_preview",
                color_image,
                egui::TextureOptions::default(),
            ));
        }
    }
}

fn spawn_worker(
    tokio_handle: &tokio::runtime::Handle,
    settings: &DesignerSettings,
) -> anyhow::Result<(
    mpsc::UnboundedSender<DesignerCommand>,
    mpsc::UnboundedReceiver<DesignerUpdate>,
)> {
    let client = DesignerClient::new(&settings.server)?;
    log::info!("Using label server at {}", client.base_url());

    let (command_tx, command_rx) = mpsc::unbounded_channel();
    let (update_tx, update_rx) = mpsc::unbounded_channel();
    tokio_handle.spawn(worker_task(client, command_rx, update_tx));

    Ok((command_tx, update_rx))
}

impl eframe::App for LabelDesignerApp {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        // Files dropped on the window go to the upload queue in image mode
        let dropped: Vec<PathBuf> = ctx.input(|i| {
            i.raw
                .dropped_files
                .iter()
                .filter_map(|file| file.path.clone())
                .collect()
        });
        if !dropped.is_empty() {
            if self.designer.controls().image_panel_visible {
                // Single slot, so only the last file sticks
                if let Some(path) = dropped.into_iter().last() {
                    self.load_file(path);
                }
            } else {
                log::warn!("Switch the content to Image / PDF to upload files");
            }
        }

        while let Ok(event) = self.event_rx.try_recv() {
            match event {
                AppEvent::SettingsLoaded(settings) => self.apply_settings(settings),
                AppEvent::FileLoaded(file) => {
                    log::info!("Queued {}", file.name);
                    let commands = self.designer.add_file(file);
                    self.dispatch(commands);
                }
            }
        }

        // Process all pending updates from worker
        while let Ok(update) = self.update_rx.try_recv() {
            let commands = self.designer.apply(update);
            self.dispatch(commands);
        }

        egui::TopBottomPanel::top("menu").show(ctx, |ui| {
            ui.horizontal(|ui| {
                if ui.button("💾 Save Settings").clicked() {
                    self.save_settings();
                }
                if ui.button("📂 Load Settings").clicked() {
                    self.load_settings();
                }
                ui.separator();
                ui.weak(self.settings.server.base_url.as_str());
            });
        });

        show_log_panel(ctx, &self.logger);

        self.sync_texture(ctx);

        let output = egui::CentralPanel::default()
            .show(ctx, |ui| {
                show_designer(ui, &mut self.designer, self.preview_texture.as_ref())
            })
            .inner;

        self.dispatch(output.commands);
        if let Some(path) = output.open_file {
            self.load_file(path);
        }

        // Worker results arrive without input events
        ctx.request_repaint_after(Duration::from_millis(100));
    }
}
