use crate::preview::PreviewTicket;
use crate::types::*;
use std::path::Path;

/// Accepted upload formats
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum UploadKind {
    Png,
    Jpeg,
    Pdf,
}

impl UploadKind {
    /// Classify by file extension, case-insensitively
    pub fn from_file_name(name: &str) -> Option<Self> {
        let extension = Path::new(name).extension()?.to_str()?.to_ascii_lowercase();
        match extension.as_str() {
            "png" => Some(UploadKind::Png),
            "jpg" | "jpeg" => Some(UploadKind::Jpeg),
            "pdf" => Some(UploadKind::Pdf),
            _ => None,
        }
    }

    pub fn mime_type(self) -> &'static str {
        match self {
            UploadKind::Png => "image/png",
            UploadKind::Jpeg => "image/jpeg",
            UploadKind::Pdf => "application/pdf",
        }
    }
}

/// A file waiting in the upload slot
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct QueuedFile {
    pub name: String,
    pub kind: UploadKind,
    pub bytes: Vec<u8>,
}

impl QueuedFile {
    pub fn new(name: impl Into<String>, bytes: Vec<u8>) -> Result<Self> {
        let name = name.into();
        let kind =
            UploadKind::from_file_name(&name).ok_or_else(|| DesignerError::UnsupportedFile(name.clone()))?;
        Ok(Self { name, kind, bytes })
    }

    pub async fn load(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let name = path
            .file_name()
            .and_then(|n| n.to_str())
            .ok_or_else(|| DesignerError::UnsupportedFile(path.display().to_string()))?
            .to_string();

        // Reject before reading a possibly large unsupported file
        if UploadKind::from_file_name(&name).is_none() {
            return Err(DesignerError::UnsupportedFile(name));
        }

        let bytes = tokio::fs::read(path).await?;
        Self::new(name, bytes)
    }
}

/// Where an upload's response goes
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum UploadPurpose {
    Preview(PreviewTicket),
    Print,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FileState {
    /// Ready to be sent
    Queued,
    /// A request carrying the file is outstanding
    Uploading,
}

/// Identifies one queued file across the uploads made with it
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct UploadId(pub u64);

/// Single-slot upload queue; nothing is sent until asked
#[derive(Debug, Clone, Default)]
pub struct UploadQueue {
    slot: Option<(UploadId, QueuedFile, FileState)>,
    last_id: u64,
}

impl UploadQueue {
    pub fn new() -> Self {
        Self::default()
    }

    /// Queue a file, returning the one it replaced
    pub fn add(&mut self, file: QueuedFile) -> Option<QueuedFile> {
        self.last_id += 1;
        self.slot
            .replace((UploadId(self.last_id), file, FileState::Queued))
            .map(|(_, evicted, _)| evicted)
    }

    pub fn remove(&mut self) -> Option<QueuedFile> {
        self.slot.take().map(|(_, file, _)| file)
    }

    pub fn id(&self) -> Option<UploadId> {
        self.slot.as_ref().map(|(id, _, _)| *id)
    }

    pub fn file(&self) -> Option<&QueuedFile> {
        self.slot.as_ref().map(|(_, file, _)| file)
    }

    pub fn state(&self) -> Option<FileState> {
        self.slot.as_ref().map(|(_, _, state)| *state)
    }

    pub fn is_empty(&self) -> bool {
        self.slot.is_none()
    }

    pub fn len(&self) -> usize {
        usize::from(self.slot.is_some())
    }

    /// Hand out the queued file for sending and mark it uploading
    pub fn begin_upload(&mut self) -> Option<(UploadId, QueuedFile)> {
        match &mut self.slot {
            Some((id, file, state @ FileState::Queued)) => {
                *state = FileState::Uploading;
                Some((*id, file.clone()))
            }
            _ => None,
        }
    }

    /// Make the file sendable again once its request has finished
    ///
    /// Returns false when `id` is not the queued file, e.g. for a request
    /// made with a file that has since been replaced.
    pub fn requeue(&mut self, id: UploadId) -> bool {
        match &mut self.slot {
            Some((queued, _, state)) if *queued == id => {
                *state = FileState::Queued;
                true
            }
            _ => false,
        }
    }
}
