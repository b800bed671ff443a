use serde::{Deserialize, Serialize};

use crate::error::ComposerError;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Dimensions {
    pub width: u32,
    pub height: u32,
}

impl Dimensions {
    pub fn new(width: u32, height: u32) -> Self {
        Self { width, height }
    }
}

/// Image bytes carried as a `data:<mime>;base64,<payload>` URI.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct EncodedImage {
    data_url: String,
    // Byte offset of the ',' separating header and payload
    split: usize,
}

impl EncodedImage {
    pub fn parse(data_url: impl Into<String>) -> Result<Self, ComposerError> {
        let data_url = data_url.into();
        let split = {
            let rest = data_url
                .strip_prefix("data:")
                .ok_or(ComposerError::InvalidEncodedImage)?;
            let (header, payload) = rest
                .split_once(',')
                .ok_or(ComposerError::InvalidEncodedImage)?;
            let mime = header
                .strip_suffix(";base64")
                .ok_or(ComposerError::InvalidEncodedImage)?;
            if !mime.starts_with("image/") || payload.is_empty() {
                return Err(ComposerError::InvalidEncodedImage);
            }
            "data:".len() + header.len()
        };
        Ok(Self { data_url, split })
    }

    pub fn mime_type(&self) -> &str {
        &self.data_url["data:".len()..self.split - ";base64".len()]
    }

    pub fn payload(&self) -> &str {
        &self.data_url[self.split + 1..]
    }

    /// Length of the full data URI, which is what the size budget measures.
    pub fn encoded_len(&self) -> usize {
        self.data_url.len()
    }

    pub fn as_str(&self) -> &str {
        &self.data_url
    }
}

impl TryFrom<String> for EncodedImage {
    type Error = ComposerError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        Self::parse(value)
    }
}

impl From<EncodedImage> for String {
    fn from(image: EncodedImage) -> Self {
        image.data_url
    }
}

/// Payload handed to the message sender.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct OutgoingMessage {
    pub text: String,
    pub image: Option<EncodedImage>,
}

/// A message that has been accepted by the chat log.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ChatMessage {
    pub id: u64,
    pub text: String,
    pub image: Option<EncodedImage>,
}

impl ChatMessage {
    pub fn from_outgoing(id: u64, message: OutgoingMessage) -> Self {
        Self {
            id,
            text: message.text,
            image: message.image,
        }
    }
}
