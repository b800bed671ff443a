use yew::prelude::*;

use crate::components::MessageInput;
use crate::config::CompressionConfig;
use crate::sender::MessageSender;
use crate::types::ChatMessage;

#[derive(Properties, PartialEq)]
pub struct ChatPanelProps {
    pub messages: Vec<ChatMessage>,
    pub sender: MessageSender,
    pub on_error: Callback<String>,
    #[prop_or_default]
    pub config: CompressionConfig,
}

#[function_component(ChatPanel)]
pub fn chat_panel(props: &ChatPanelProps) -> Html {
    html! {
        <div class="flex flex-col flex-1 max-w-2xl mx-auto h-full bg-white border-x border-gray-300">
            <div class="p-4 border-b border-gray-300">
                <h2 class="text-lg font-semibold">{"Chat"}</h2>
            </div>

            <div class="flex-1 overflow-y-auto p-4 space-y-3">
                {
                    props.messages.iter().map(|msg| {
                        html! {
                            <div key={msg.id} class="p-3 rounded-lg bg-blue-100 ml-4">
                                if let Some(image) = msg.image.as_ref() {
                                    <img
                                        src={image.as_str().to_string()}
                                        alt="Attachment"
                                        class="max-w-[200px] rounded-md mb-2"
                                    />
                                }
                                if !msg.text.is_empty() {
                                    <div class="text-sm whitespace-pre-wrap">
                                        {&msg.text}
                                    </div>
                                }
                            </div>
                        }
                    }).collect::<Html>()
                }

                if props.messages.is_empty() {
                    <p class="text-sm text-gray-500 text-center py-4">
                        {"No messages yet."}
                    </p>
                }
            </div>

            <div class="border-t border-gray-300">
                <MessageInput
                    sender={props.sender.clone()}
                    on_error={props.on_error.clone()}
                    config={props.config}
                />
            </div>
        </div>
    }
}
