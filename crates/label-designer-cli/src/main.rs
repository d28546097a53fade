use anyhow::{Result, bail};
use clap::{Args, Parser, Subcommand, ValueEnum};
use label_designer::constants::LINE_SPACINGS;
use label_designer::{
    ControlState, DesignerClient, DesignerSettings, FormState, PrintOutcome, PrintRequest,
    PrintResponse, PrintStatus, PrintType, QueuedFile, StyleOptions,
};
use std::path::PathBuf;

#[derive(Parser)]
#[command(name = "qlabel", about = "Brother QL label designer CLI", version)]
struct Cli {
    /// Settings file (JSON)
    #[arg(short, long, global = true)]
    config: Option<PathBuf>,

    /// Label server base URL, overrides the settings file
    #[arg(long, env = "QLABEL_SERVER", global = true)]
    server: Option<String>,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// List the styles of a font family
    Styles {
        /// Font family (defaults to the configured one)
        #[arg(short, long)]
        family: Option<String>,
    },

    /// Render a label preview to a PNG file
    Preview {
        #[command(flatten)]
        form: FormArgs,

        /// PNG, JPEG or PDF to render instead of text
        #[arg(long)]
        image: Option<PathBuf>,

        /// Output PNG file
        #[arg(short, long)]
        output: PathBuf,
    },

    /// Print a label
    Print {
        #[command(flatten)]
        form: FormArgs,

        /// PNG, JPEG or PDF to print instead of text
        #[arg(long)]
        image: Option<PathBuf>,

        /// Cut only after the last copy
        #[arg(long)]
        cut_once: bool,
    },

    /// Show the request that would be sent, as JSON
    Snapshot {
        #[command(flatten)]
        form: FormArgs,

        /// Cut only after the last copy
        #[arg(long)]
        cut_once: bool,
    },
}

#[derive(Args)]
struct FormArgs {
    /// Label text
    #[arg(short, long)]
    text: Option<String>,

    /// Label size identifier, e.g. 62, 62red, 29x90, d24
    #[arg(short, long)]
    label_size: Option<String>,

    /// What the label carries
    #[arg(long, value_enum)]
    print_type: Option<PrintTypeArg>,

    #[arg(long)]
    font_family: Option<String>,

    #[arg(long)]
    font_style: Option<String>,

    #[arg(long)]
    font_size: Option<u32>,

    #[arg(long, value_enum)]
    align: Option<AlignArg>,

    /// Line spacing in percent
    #[arg(long, value_parser = parse_line_spacing)]
    line_spacing: Option<u32>,

    #[arg(long, value_enum)]
    orientation: Option<OrientationArg>,

    /// Top margin in percent of the font size (standard orientation)
    #[arg(long)]
    margin_top: Option<u32>,

    /// Bottom margin in percent of the font size (standard orientation)
    #[arg(long)]
    margin_bottom: Option<u32>,

    /// Left margin in percent of the font size (rotated orientation)
    #[arg(long)]
    margin_left: Option<u32>,

    /// Right margin in percent of the font size (rotated orientation)
    #[arg(long)]
    margin_right: Option<u32>,

    /// QR code module size
    #[arg(long)]
    qrcode_size: Option<u32>,

    #[arg(long, value_enum)]
    qrcode_correction: Option<CorrectionArg>,

    /// Number of copies
    #[arg(short = 'n', long, value_parser = clap::value_parser!(u32).range(1..))]
    count: Option<u32>,

    /// Colour plane (red needs two-colour tape)
    #[arg(long, value_enum)]
    color: Option<ColorArg>,
}

#[derive(Clone, Copy, ValueEnum)]
enum PrintTypeArg {
    Text,
    #[value(name = "qrcode")]
    QrCode,
    #[value(name = "qrcode-text")]
    QrCodeText,
    Image,
}

#[derive(Clone, Copy, ValueEnum)]
enum AlignArg {
    Left,
    Center,
    Right,
}

#[derive(Clone, Copy, ValueEnum)]
enum OrientationArg {
    Standard,
    Rotated,
}

#[derive(Clone, Copy, ValueEnum)]
enum CorrectionArg {
    L,
    M,
    Q,
    H,
}

#[derive(Clone, Copy, ValueEnum)]
enum ColorArg {
    Black,
    Red,
}

impl From<PrintTypeArg> for PrintType {
    fn from(arg: PrintTypeArg) -> Self {
        match arg {
            PrintTypeArg::Text => Self::Text,
            PrintTypeArg::QrCode => Self::QrCode,
            PrintTypeArg::QrCodeText => Self::QrCodeText,
            PrintTypeArg::Image => Self::Image,
        }
    }
}

impl From<AlignArg> for label_designer::TextAlign {
    fn from(arg: AlignArg) -> Self {
        match arg {
            AlignArg::Left => Self::Left,
            AlignArg::Center => Self::Center,
            AlignArg::Right => Self::Right,
        }
    }
}

impl From<OrientationArg> for label_designer::Orientation {
    fn from(arg: OrientationArg) -> Self {
        match arg {
            OrientationArg::Standard => Self::Standard,
            OrientationArg::Rotated => Self::Rotated,
        }
    }
}

impl From<CorrectionArg> for label_designer::QrCorrection {
    fn from(arg: CorrectionArg) -> Self {
        match arg {
            CorrectionArg::L => Self::L,
            CorrectionArg::M => Self::M,
            CorrectionArg::Q => Self::Q,
            CorrectionArg::H => Self::H,
        }
    }
}

impl From<ColorArg> for label_designer::PrintColor {
    fn from(arg: ColorArg) -> Self {
        match arg {
            ColorArg::Black => Self::Black,
            ColorArg::Red => Self::Red,
        }
    }
}

fn parse_line_spacing(value: &str) -> Result<u32, String> {
    let spacing: u32 = value.parse().map_err(|e| format!("{e}"))?;
    if LINE_SPACINGS.contains(&spacing) {
        Ok(spacing)
    } else {
        Err(format!("expected one of {:?}", LINE_SPACINGS))
    }
}

impl FormArgs {
    /// Overlay the given options on the configured defaults
    fn into_form(self, settings: &DesignerSettings) -> FormState {
        let mut form = settings.form.clone();

        if let Some(text) = self.text {
            form.text = text;
        }
        if let Some(label_size) = self.label_size {
            form.label_size = label_size;
        }
        if let Some(print_type) = self.print_type {
            form.print_type = print_type.into();
        }
        if let Some(family) = self.font_family {
            form.font_family = family;
        }
        if let Some(style) = self.font_style {
            form.font_style = style;
        }
        if let Some(size) = self.font_size {
            form.font_size = size;
        }
        if let Some(align) = self.align {
            form.align = align.into();
        }
        if let Some(spacing) = self.line_spacing {
            form.line_spacing = spacing;
        }
        if let Some(orientation) = self.orientation {
            form.orientation = orientation.into();
        }
        if let Some(margin) = self.margin_top {
            form.margin_top = margin;
        }
        if let Some(margin) = self.margin_bottom {
            form.margin_bottom = margin;
        }
        if let Some(margin) = self.margin_left {
            form.margin_left = margin;
        }
        if let Some(margin) = self.margin_right {
            form.margin_right = margin;
        }
        if let Some(size) = self.qrcode_size {
            form.qrcode_size = size;
        }
        if let Some(correction) = self.qrcode_correction {
            form.qrcode_correction = correction.into();
        }
        if let Some(count) = self.count {
            form.print_count = count;
        }
        if let Some(color) = self.color {
            form.print_color = color.into();
        }

        let controls = ControlState::derive(&form, &settings.label_sizes);
        controls.constrain(&mut form);
        form
    }
}

async fn load_upload(image: Option<PathBuf>, form: &mut FormState) -> Result<Option<QueuedFile>> {
    match image {
        Some(path) => {
            form.print_type = PrintType::Image;
            Ok(Some(QueuedFile::load(&path).await?))
        }
        None if form.print_type == PrintType::Image => {
            bail!("--print-type image needs --image <FILE>")
        }
        None => Ok(None),
    }
}

/// Status text of a finished print; failures become errors
fn print_report(response: PrintResponse) -> Result<String> {
    let status = PrintStatus::from(PrintOutcome::from(response));
    match status {
        PrintStatus::Failed(_) => bail!("{}", status.message()),
        _ => Ok(status.message()),
    }
}

#[tokio::main]
async fn main() -> Result<()> {
    pretty_env_logger::init();

    let cli = Cli::parse();

    let mut settings = match &cli.config {
        Some(path) => DesignerSettings::load(path).await?,
        None => DesignerSettings::default(),
    };
    if let Some(server) = cli.server {
        settings.server.base_url = server;
    }

    let client = DesignerClient::new(&settings.server)?;

    match cli.command {
        Commands::Styles { family } => {
            let family = family.unwrap_or_else(|| settings.form.font_family.clone());
            let styles = StyleOptions::from_keys(client.font_styles(&family).await?);

            if styles.styles.is_empty() {
                bail!("No styles found for font family {family}");
            }
            for (index, style) in styles.styles.iter().enumerate() {
                let marker = if styles.selected == Some(index) { "*" } else { " " };
                println!("{marker} {style}");
            }
        }

        Commands::Preview {
            form,
            image,
            output,
        } => {
            let mut form = form.into_form(&settings);
            let upload = load_upload(image, &mut form).await?;
            let request = PrintRequest::from_form(&form, false);

            let preview = match &upload {
                Some(file) => client.upload_preview(file, &request).await?,
                None => client.preview(&request).await?,
            };

            tokio::fs::write(&output, &preview.png).await?;
            println!(
                "Preview ({}) → {}",
                preview.size_label(settings.default_dpi),
                output.display()
            );
        }

        Commands::Print {
            form,
            image,
            cut_once,
        } => {
            let mut form = form.into_form(&settings);
            let upload = load_upload(image, &mut form).await?;

            let response = match &upload {
                Some(file) => {
                    if cut_once {
                        log::warn!("--cut-once is ignored when printing an image");
                    }
                    let request = PrintRequest::from_form(&form, false);
                    client.upload_print(file, &request).await?
                }
                None => {
                    let request = PrintRequest::from_form(&form, cut_once);
                    client.print(&request).await?
                }
            };

            println!("{}", print_report(response)?);
        }

        Commands::Snapshot { form, cut_once } => {
            let form = form.into_form(&settings);
            let request = PrintRequest::from_form(&form, cut_once);
            println!("{}", serde_json::to_string_pretty(&request)?);
        }
    }

    Ok(())
}
