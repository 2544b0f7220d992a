use gloo_timers::callback::Timeout;
use js_sys::Date;
use std::cell::RefCell;
use std::rc::Rc;
use std::sync::atomic::{AtomicU64, Ordering};
use yew::prelude::*;

pub fn generate_id() -> u64 {
    static ID_COUNTER: AtomicU64 = AtomicU64::new(0);
    let now = Date::now() as u64;
    let count = ID_COUNTER.fetch_add(1, Ordering::SeqCst);
    now * 1000 + (count % 1000)
}

// Debounce function to limit button events
pub fn debounce<F>(duration: u32, callback: F) -> Callback<MouseEvent>
where
    F: Fn() + Clone + 'static,
{
    let timeout = Rc::new(RefCell::new(None::<Timeout>));

    Callback::from(move |_| {
        let mut timeout_ref = timeout.borrow_mut();

        if let Some(old_timeout) = timeout_ref.take() {
            old_timeout.cancel();
        }

        let inner_callback = callback.clone();
        *timeout_ref = Some(Timeout::new(duration, move || {
            inner_callback();
        }));
    })
}

/// Shortens long file names for button labels.
pub fn truncate_name(name: &str, max_chars: usize) -> String {
    if name.chars().count() > max_chars {
        let kept: String = name.chars().take(max_chars.saturating_sub(3)).collect();
        format!("{}...", kept)
    } else {
        name.to_string()
    }
}

pub fn render_error_message(error: Option<&str>) -> Html {
    if let Some(error_msg) = error {
        html! {
            <div class="error-message" role="alert">
                <i class="fa-solid fa-circle-exclamation"></i>
                <div>
                    <strong>{"Error"}</strong>
                    <p>{ error_msg }</p>
                </div>
            </div>
        }
    } else {
        html! {}
    }
}
