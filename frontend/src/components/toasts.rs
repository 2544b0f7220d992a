use super::utils::generate_id;
use gloo_timers::callback::Timeout;
use shared::{Notification, NotificationLevel};
use yew::prelude::*;

const TOAST_LIFETIME_MS: u32 = 4000;

/// A visible toast. Dropping it cancels its expiry timer.
pub struct ActiveToast {
    pub id: u64,
    pub notification: Notification,
    _expiry: Timeout,
}

impl ActiveToast {
    pub fn schedule(notification: Notification, on_expire: Callback<u64>) -> Self {
        let id = generate_id();
        let expiry = Timeout::new(TOAST_LIFETIME_MS, move || on_expire.emit(id));
        Self {
            id,
            notification,
            _expiry: expiry,
        }
    }
}

pub fn render_toasts(toasts: &[ActiveToast], on_dismiss: Callback<u64>) -> Html {
    if toasts.is_empty() {
        return html! {};
    }

    html! {
        <div class="toast-container">
            { for toasts.iter().map(|toast| {
                let id = toast.id;
                let icon = match toast.notification.level {
                    NotificationLevel::Info => "fa-circle-info",
                    NotificationLevel::Success => "fa-circle-check",
                    NotificationLevel::Error => "fa-circle-xmark",
                };
                html! {
                    <div
                        key={id.to_string()}
                        class={classes!("toast", toast.notification.level.as_ref().to_string())}
                        onclick={on_dismiss.reform(move |_: MouseEvent| id)}
                    >
                        <i class={classes!("fa-solid", icon)}></i>
                        <span>{ &toast.notification.message }</span>
                    </div>
                }
            })}
        </div>
    }
}
