//! Toast stack rendered above the page

use leptos::prelude::*;
use shared::events::NotificationLevel;

use crate::state::toast::use_toast_context;

#[component]
pub fn Toaster() -> impl IntoView {
    let toasts = use_toast_context();

    view! {
        <div class="toaster">
            <For
                each=move || toasts.toasts.get()
                key=|toast| toast.id
                children=move |toast| {
                    let class = match toast.level {
                        NotificationLevel::Info => "toast toast-info",
                        NotificationLevel::Success => "toast toast-success",
                        NotificationLevel::Error => "toast toast-error",
                    };
                    let id = toast.id;
                    view! {
                        <div class=class on:click=move |_| toasts.dismiss(id)>
                            {toast.message}
                        </div>
                    }
                }
            />
        </div>
    }
}
