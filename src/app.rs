use gloo::timers::callback::Timeout;
use yew::prelude::*;

use crate::chat_log::{ChatLog, ChatLogAction};
use crate::chat_panel::ChatPanel;
use crate::components::Toaster;
use crate::sender::MessageSender;
use crate::toast::{Toast, ToastAction, ToastStack, TOAST_LIFETIME_MS};

#[function_component(App)]
pub fn app() -> Html {
    let chat_log = use_reducer(ChatLog::new);
    let toasts = use_reducer(ToastStack::default);
    let next_toast_id = use_mut_ref(|| 0u64);

    // Stands in for a chat backend: every message is accepted locally
    let sender = {
        let dispatcher = chat_log.dispatcher();
        use_memo((), move |_| {
            MessageSender::new(move |message| {
                let dispatcher = dispatcher.clone();
                async move {
                    log::info!(
                        "sending message ({} chars, image: {})",
                        message.text.len(),
                        message.image.as_ref().map_or(0, |image| image.encoded_len())
                    );
                    dispatcher.dispatch(ChatLogAction::Append(message));
                    Ok(())
                }
            })
        })
    };

    let on_error = {
        let dispatcher = toasts.dispatcher();
        Callback::from(move |text: String| {
            let id = {
                let mut next = next_toast_id.borrow_mut();
                *next += 1;
                *next
            };
            dispatcher.dispatch(ToastAction::Push(Toast { id, text }));

            let dispatcher = dispatcher.clone();
            Timeout::new(TOAST_LIFETIME_MS, move || {
                dispatcher.dispatch(ToastAction::Dismiss(id));
            })
            .forget();
        })
    };

    let on_dismiss = {
        let dispatcher = toasts.dispatcher();
        Callback::from(move |id: u64| dispatcher.dispatch(ToastAction::Dismiss(id)))
    };

    html! {
        <div class="h-screen w-screen bg-gray-50 flex">
            <ChatPanel
                messages={chat_log.messages.clone()}
                sender={(*sender).clone()}
                on_error={on_error}
            />
            <Toaster
                toasts={toasts.toasts.iter().cloned().collect::<Vec<_>>()}
                on_dismiss={on_dismiss}
            />
        </div>
    }
}
