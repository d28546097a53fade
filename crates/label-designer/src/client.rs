use crate::constants::{RETURN_FORMAT_BASE64, UPLOAD_PART_NAME};
use crate::preview::PreviewImage;
use crate::settings::ServerSettings;
use crate::snapshot::PrintRequest;
use crate::status::PrintResponse;
use crate::types::*;
use crate::upload::QueuedFile;
use reqwest::multipart::{Form, Part};
use reqwest::{Client, RequestBuilder, Response, Url};
use std::collections::BTreeMap;

/// HTTP client for the label server's style, preview and print endpoints
#[derive(Debug, Clone)]
pub struct DesignerClient {
    client: Client,
    base_url: Url,
    server: ServerSettings,
}

impl DesignerClient {
    pub fn new(server: &ServerSettings) -> Result<Self> {
        Ok(Self {
            client: Client::new(),
            base_url: Url::parse(&server.base_url)?,
            server: server.clone(),
        })
    }

    pub fn base_url(&self) -> &Url {
        &self.base_url
    }

    fn post(&self, path: &str) -> Result<RequestBuilder> {
        let mut uri = path.to_string();

        // Make sure we have the leading "/".
        if !uri.starts_with('/') {
            uri = format!("/{}", uri);
        }

        let url = self.base_url.join(&uri)?;
        Ok(self.client.post(url))
    }

    fn preview_request(&self) -> Result<RequestBuilder> {
        Ok(self
            .post(&self.server.preview_path)?
            .query(&[("return_format", RETURN_FORMAT_BASE64)]))
    }

    /// Style names available for a font family, sorted
    pub async fn font_styles(&self, family: &str) -> Result<Vec<String>> {
        let response = self
            .post(&self.server.styles_path)?
            .form(&[("font", family)])
            .send()
            .await?;

        let styles: BTreeMap<String, serde_json::Value> = check(response).await?.json().await?;
        Ok(styles.into_keys().collect())
    }

    /// Render the label described by `request`
    pub async fn preview(&self, request: &PrintRequest) -> Result<PreviewImage> {
        let response = self
            .preview_request()?
            .form(&request.fields())
            .send()
            .await?;

        let body = check(response).await?.text().await?;
        PreviewImage::from_base64(&body)
    }

    /// Print the label described by `request`
    pub async fn print(&self, request: &PrintRequest) -> Result<PrintResponse> {
        log::info!(
            "Submitting print of {} label(s) on {}",
            request.print_count,
            request.label_size
        );

        let response = self
            .post(&self.server.print_path)?
            .form(&request.fields())
            .send()
            .await?;

        Ok(check(response).await?.json().await?)
    }

    /// Render a label from an uploaded file
    pub async fn upload_preview(
        &self,
        file: &QueuedFile,
        request: &PrintRequest,
    ) -> Result<PreviewImage> {
        let response = self
            .preview_request()?
            .multipart(multipart_form(file, request)?)
            .send()
            .await?;

        let body = check(response).await?.text().await?;
        PreviewImage::from_base64(&body)
    }

    /// Print an uploaded file
    pub async fn upload_print(
        &self,
        file: &QueuedFile,
        request: &PrintRequest,
    ) -> Result<PrintResponse> {
        log::info!("Submitting print of uploaded file {}", file.name);

        let response = self
            .post(&self.server.print_path)?
            .multipart(multipart_form(file, request)?)
            .send()
            .await?;

        Ok(check(response).await?.json().await?)
    }
}

/// File part plus one text part per request field
fn multipart_form(file: &QueuedFile, request: &PrintRequest) -> Result<Form> {
    let part = Part::bytes(file.bytes.clone())
        .file_name(file.name.clone())
        .mime_str(file.kind.mime_type())?;

    let form = request
        .fields()
        .into_iter()
        .fold(Form::new(), |form, (name, value)| form.text(name, value));

    Ok(form.part(UPLOAD_PART_NAME, part))
}

async fn check(response: Response) -> Result<Response> {
    let status = response.status();
    if status.is_success() {
        return Ok(response);
    }

    let body = response.text().await.unwrap_or_default();
    Err(DesignerError::Server {
        status: status.as_u16(),
        body,
    })
}
