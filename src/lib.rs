mod app;
mod chat_panel;

pub mod chat_log;
pub mod components;
pub mod compress;
pub mod config;
pub mod draft;
pub mod error;
pub mod pipeline;
pub mod sender;
pub mod toast;
pub mod types;

pub use components::{MessageInput, MessageInputProps};
pub use config::CompressionConfig;
pub use error::{ComposerError, SendError};
pub use sender::MessageSender;
pub use types::{EncodedImage, OutgoingMessage};

use app::App;
use wasm_bindgen::prelude::*;

#[wasm_bindgen(start)]
pub fn run_app() {
    wasm_logger::init(wasm_logger::Config::default());
    yew::Renderer::<App>::new().render();
}
