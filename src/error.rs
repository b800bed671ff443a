use thiserror::Error;

/// Everything that can go wrong while composing a message.
///
/// The `Display` text of each variant is what the user sees in a toast.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum ComposerError {
    #[error("No file selected")]
    NoFileSelected,

    #[error("Please select a valid image file")]
    InvalidFileType { mime: String },

    #[error("Image is still too large after compression!")]
    ImageTooLarge { len: usize, limit: usize },

    #[error("Could not read the selected file")]
    Read(String),

    #[error("Could not decode the selected image")]
    Decode(String),

    #[error("Image processing failed")]
    Canvas(String),

    #[error("Not an encoded image")]
    InvalidEncodedImage,

    #[error("Invalid compression settings: {0}")]
    Config(String),
}

/// Failure reported by the message sender.
#[derive(Debug, Clone, PartialEq, Error)]
#[error("failed to send message: {reason}")]
pub struct SendError {
    pub reason: String,
}

impl SendError {
    pub fn new(reason: impl Into<String>) -> Self {
        Self {
            reason: reason.into(),
        }
    }
}
