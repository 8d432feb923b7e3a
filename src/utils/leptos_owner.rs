use leptos::Owner;

/// Runs a closure under an owner captured before an `.await`.
/// When the owning component is already gone, logs and returns None instead of panicking.
pub fn with_owner_safe<F, R>(owner: Option<Owner>, log_context: &str, f: F) -> Option<R>
where
    F: FnOnce() -> R,
{
    let Some(owner) = owner else {
        leptos::logging::log!("[OWNER] No Leptos owner captured: {}", log_context);
        return None;
    };
    match leptos::try_with_owner(owner, f) {
        Ok(result) => Some(result),
        Err(_) => {
            leptos::logging::log!("[OWNER] Owner disposed before completion: {}", log_context);
            None
        }
    }
}
