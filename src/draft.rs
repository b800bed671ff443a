use crate::config::CompressionConfig;
use crate::compress::enforce_budget;
use crate::error::ComposerError;
use crate::types::{EncodedImage, OutgoingMessage};

/// Identifies one run of the image pipeline.
///
/// Only the ticket from the latest selection may write into the draft.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PipelineTicket(u64);

/// Result of handing a pipeline result to the draft.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Applied {
    Stored,
    /// A newer selection, a removal or a send happened in the meantime.
    Stale,
}

/// The in-progress, unsent message.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct Draft {
    pub text: String,
    preview: Option<EncodedImage>,
    compressed: Option<EncodedImage>,
    generation: u64,
}

impl Draft {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn preview(&self) -> Option<&EncodedImage> {
        self.preview.as_ref()
    }

    pub fn compressed(&self) -> Option<&EncodedImage> {
        self.compressed.as_ref()
    }

    /// Validate a file choice and start a new pipeline run for it.
    ///
    /// `mime` is the picked file's declared type, `None` when nothing was
    /// picked. On error the draft is left untouched.
    pub fn begin_selection(&mut self, mime: Option<&str>) -> Result<PipelineTicket, ComposerError> {
        let mime = mime.ok_or(ComposerError::NoFileSelected)?;
        if !mime.starts_with("image/") {
            return Err(ComposerError::InvalidFileType { mime: mime.to_string() });
        }
        Ok(self.next_ticket())
    }

    /// Store the full-resolution preview. Any earlier compression belonged to
    /// a different image and is dropped.
    pub fn apply_preview(&mut self, ticket: PipelineTicket, preview: EncodedImage) -> Applied {
        if !self.is_current(ticket) {
            return Applied::Stale;
        }
        self.preview = Some(preview);
        self.compressed = None;
        Applied::Stored
    }

    /// Store the recompressed image if it fits the budget.
    ///
    /// Stale results are discarded without error. A failed or oversized
    /// result clears the compressed slot and keeps the preview.
    pub fn apply_compressed(
        &mut self,
        ticket: PipelineTicket,
        result: Result<EncodedImage, ComposerError>,
        config: &CompressionConfig,
    ) -> Result<Applied, ComposerError> {
        if !self.is_current(ticket) {
            return Ok(Applied::Stale);
        }
        match result.and_then(|image| enforce_budget(image, config)) {
            Ok(image) => {
                self.compressed = Some(image);
                Ok(Applied::Stored)
            }
            Err(e) => {
                self.compressed = None;
                Err(e)
            }
        }
    }

    /// Drop the attachment and invalidate any pipeline still running.
    pub fn remove_image(&mut self) {
        self.preview = None;
        self.compressed = None;
        self.next_ticket();
    }

    pub fn can_submit(&self) -> bool {
        !self.text.trim().is_empty() || self.compressed.is_some()
    }

    /// The message to send, or `None` when there is nothing to send.
    pub fn outgoing(&self) -> Option<OutgoingMessage> {
        if !self.can_submit() {
            return None;
        }
        Some(OutgoingMessage {
            text: self.text.trim().to_string(),
            image: self.compressed.clone(),
        })
    }

    /// Reset after a successful send.
    pub fn clear(&mut self) {
        self.text.clear();
        self.remove_image();
    }

    fn next_ticket(&mut self) -> PipelineTicket {
        self.generation += 1;
        PipelineTicket(self.generation)
    }

    /// Whether `ticket` still belongs to the latest pipeline run.
    pub fn is_current(&self, ticket: PipelineTicket) -> bool {
        ticket.0 == self.generation
    }
}
