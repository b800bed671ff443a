use std::cell::RefCell;
use std::rc::Rc;
use web_sys::{File, HtmlInputElement};
use yew::functional::UseForceUpdateHandle;
use yew::prelude::*;

use crate::config::CompressionConfig;
use crate::error::ComposerError;
use crate::draft::{Applied, Draft, PipelineTicket};
use crate::pipeline;
use crate::sender::MessageSender;

/// Props for the message composer
#[derive(Properties, PartialEq)]
pub struct MessageInputProps {
    /// Delivers the composed message
    pub sender: MessageSender,

    /// Receives user-facing error text (toast)
    pub on_error: Callback<String>,

    /// Attachment downscale settings
    #[prop_or_default]
    pub config: CompressionConfig,

    #[prop_or(AttrValue::Static("Type a message..."))]
    pub placeholder: AttrValue,
}

/// Text box plus single-image attachment with client-side compression.
#[function_component(MessageInput)]
pub fn message_input(props: &MessageInputProps) -> Html {
    let draft = use_mut_ref(Draft::new);
    let update = use_force_update();
    let file_input_ref = use_node_ref();
    let config = *use_memo(props.config, CompressionConfig::sanitized);

    {
        let on_error = props.on_error.clone();
        // Keyed on the error rather than the config so NaN settings report once
        use_effect_with(props.config.validate().err(), move |invalid| {
            if let Some(err) = invalid {
                log::error!("{}, falling back to defaults", err);
                on_error.emit(err.to_string());
            }
            || ()
        });
    }

    let on_text_input = {
        let draft = draft.clone();
        let update = update.clone();
        Callback::from(move |e: InputEvent| {
            if let Some(input) = e.target_dyn_into::<HtmlInputElement>() {
                draft.borrow_mut().text = input.value();
                update.force_update();
            }
        })
    };

    let on_image_change = {
        let draft = draft.clone();
        let update = update.clone();
        let on_error = props.on_error.clone();
        Callback::from(move |e: Event| {
            let file = e
                .target_dyn_into::<HtmlInputElement>()
                .and_then(|input| input.files())
                .and_then(|files| files.get(0));
            let selection = file.ok_or(ComposerError::NoFileSelected).and_then(|file| {
                let ticket = draft.borrow_mut().begin_selection(Some(&file.type_()))?;
                Ok((ticket, file))
            });
            let (ticket, file) = match selection {
                Ok(selected) => selected,
                Err(err) => {
                    log::warn!("rejected attachment: {:?}", err);
                    on_error.emit(err.to_string());
                    return;
                }
            };

            wasm_bindgen_futures::spawn_local(run_pipeline(
                file,
                ticket,
                draft.clone(),
                update.clone(),
                on_error.clone(),
                config,
            ));
        })
    };

    let on_remove_image = {
        let draft = draft.clone();
        let update = update.clone();
        let file_input_ref = file_input_ref.clone();
        Callback::from(move |_: MouseEvent| {
            draft.borrow_mut().remove_image();
            reset_file_input(&file_input_ref);
            update.force_update();
        })
    };

    let on_pick_image = {
        let file_input_ref = file_input_ref.clone();
        Callback::from(move |_: MouseEvent| {
            if let Some(input) = file_input_ref.cast::<HtmlInputElement>() {
                input.click();
            }
        })
    };

    let on_submit = {
        let draft = draft.clone();
        let update = update.clone();
        let file_input_ref = file_input_ref.clone();
        let sender = props.sender.clone();
        Callback::from(move |e: SubmitEvent| {
            e.prevent_default();
            let message = draft.borrow().outgoing();
            let Some(message) = message else {
                return;
            };

            let draft = draft.clone();
            let update = update.clone();
            let file_input_ref = file_input_ref.clone();
            let send = sender.send(message);
            wasm_bindgen_futures::spawn_local(async move {
                match send.await {
                    Ok(()) => {
                        draft.borrow_mut().clear();
                        reset_file_input(&file_input_ref);
                        update.force_update();
                    }
                    // Draft is kept so the user can retry
                    Err(err) => log::error!("Failed to send message: {}", err),
                }
            });
        })
    };

    let (text, preview, can_submit) = {
        let draft = draft.borrow();
        (
            draft.text.clone(),
            draft.preview().map(|p| p.as_str().to_string()),
            draft.can_submit(),
        )
    };
    let has_preview = preview.is_some();

    html! {
        <div class="p-4 w-full" data-testid="message-input">
            if let Some(src) = preview {
                <div class="mb-3 flex items-center gap-2">
                    <div class="relative">
                        <img
                            src={src}
                            alt="Preview"
                            data-testid="image-preview"
                            class="w-20 h-20 object-cover rounded-lg border border-gray-300"
                        />
                        <button
                            type="button"
                            onclick={on_remove_image}
                            data-testid="remove-image"
                            class="absolute -top-1.5 -right-1.5 w-5 h-5 rounded-full bg-gray-200 text-xs flex items-center justify-center hover:bg-gray-300"
                        >
                            {"×"}
                        </button>
                    </div>
                </div>
            }

            <form onsubmit={on_submit} class="flex items-center gap-2">
                <div class="flex-1 flex gap-2">
                    <input
                        type="text"
                        value={text}
                        oninput={on_text_input}
                        placeholder={props.placeholder.clone()}
                        class="w-full px-3 py-2 border border-gray-300 rounded-lg text-sm focus:outline-none focus:ring-2 focus:ring-blue-500"
                    />
                    <input
                        type="file"
                        accept="image/*"
                        class="hidden"
                        ref={file_input_ref}
                        onchange={on_image_change}
                    />
                    <button
                        type="button"
                        onclick={on_pick_image}
                        data-testid="pick-image"
                        class={classes!(
                            "px-3",
                            "py-2",
                            "border",
                            "rounded-lg",
                            "text-sm",
                            if has_preview { "text-emerald-600 border-emerald-400" } else { "text-gray-500 border-gray-300" }
                        )}
                    >
                        {"Image"}
                    </button>
                </div>
                <button
                    type="submit"
                    disabled={!can_submit}
                    class="px-4 py-2 bg-blue-500 text-white rounded-lg text-sm font-medium hover:bg-blue-600 transition-colors disabled:opacity-40 disabled:cursor-not-allowed"
                >
                    {"Send"}
                </button>
            </form>
        </div>
    }
}

/// Read, preview and recompress one picked file, writing results into the
/// draft only while `ticket` is still current.
async fn run_pipeline(
    file: File,
    ticket: PipelineTicket,
    draft: Rc<RefCell<Draft>>,
    update: UseForceUpdateHandle,
    on_error: Callback<String>,
    config: CompressionConfig,
) {
    let preview = match pipeline::read_preview(&file).await {
        Ok(preview) => preview,
        Err(err) => {
            let current = draft.borrow().is_current(ticket);
            if current {
                log::warn!("reading {} failed: {:?}", file.name(), err);
                on_error.emit(err.to_string());
            }
            return;
        }
    };

    let applied = draft.borrow_mut().apply_preview(ticket, preview.clone());
    if applied == Applied::Stale {
        log::debug!("dropping preview of {} from a superseded selection", file.name());
        return;
    }
    update.force_update();

    let result = pipeline::recompress(&preview, &config).await;
    let outcome = draft.borrow_mut().apply_compressed(ticket, result, &config);
    match outcome {
        Ok(Applied::Stored) => {}
        Ok(Applied::Stale) => return,
        Err(err) => {
            log::warn!("attachment {} not usable: {:?}", file.name(), err);
            on_error.emit(err.to_string());
        }
    }
    update.force_update();
}

fn reset_file_input(node: &NodeRef) {
    if let Some(input) = node.cast::<HtmlInputElement>() {
        input.set_value("");
    }
}
