use std::panic;
use leptos::logging::log;

/// Sets up a panic hook that adds context for Leptos owner disposal panics on top of
/// the console hook.
pub fn set_custom_panic_hook() {
    console_error_panic_hook::set_once();
    let original_hook = panic::take_hook();

    panic::set_hook(Box::new(move |panic_info| {
        original_hook(panic_info);

        let message = if let Some(s) = panic_info.payload().downcast_ref::<String>() {
            s.clone()
        } else if let Some(s) = panic_info.payload().downcast_ref::<&str>() {
            s.to_string()
        } else {
            "Unknown panic".to_string()
        };

        if message.contains("OwnerDisposed") {
            log!("[PANIC] Leptos owner disposal detected. Usually one of:");
            log!("[PANIC] 1. A review mutation resolved after its form was unmounted");
            log!("[PANIC] 2. A toast timer fired after the toast host was removed");
            log!("[PANIC] 3. A resize listener outlived the landing page");
        }
    }));
}

/// Call once from the client entry point.
pub fn init() {
    log!("[PANIC_HOOK] Setting up custom panic hook");
    set_custom_panic_hook();
}
