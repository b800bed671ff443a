use yew::prelude::*;

use crate::toast::Toast;

#[derive(Properties, PartialEq)]
pub struct ToasterProps {
    pub toasts: Vec<Toast>,
    pub on_dismiss: Callback<u64>,
}

#[function_component(Toaster)]
pub fn toaster(props: &ToasterProps) -> Html {
    html! {
        <div class="fixed top-4 right-4 flex flex-col gap-2" style="z-index: 100;">
            {
                props.toasts.iter().map(|toast| {
                    let on_dismiss = props.on_dismiss.clone();
                    let id = toast.id;
                    let onclick = Callback::from(move |_: MouseEvent| on_dismiss.emit(id));

                    html! {
                        <div
                            key={toast.id}
                            {onclick}
                            role="alert"
                            data-testid="toast"
                            class="px-4 py-2 bg-red-50 border border-red-300 text-red-700 rounded-lg text-sm shadow cursor-pointer"
                        >
                            {&toast.text}
                        </div>
                    }
                }).collect::<Html>()
            }
        </div>
    }
}
