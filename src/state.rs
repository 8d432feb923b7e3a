/// Shared UI state that crosses page boundaries, passed around as context.
use leptos::*;
use serde_json::Value;

/// Write access the promo cards need: wipe whatever registration form was staged.
pub trait ClearDraft {
    fn clear(&self);
}

/// Registration form data staged by the store / delivery-man registration pages.
#[derive(Debug, Clone, Copy)]
pub struct RegistrationDraft(RwSignal<Option<Value>>);

impl RegistrationDraft {
    pub fn new() -> Self {
        Self(create_rw_signal(None))
    }

    pub fn stage(&self, data: Value) {
        self.0.set(Some(data));
    }

    pub fn get(&self) -> Option<Value> {
        self.0.get()
    }

    pub fn is_empty(&self) -> bool {
        self.0.with_untracked(Option::is_none)
    }
}

impl Default for RegistrationDraft {
    fn default() -> Self {
        Self::new()
    }
}

impl ClearDraft for RegistrationDraft {
    fn clear(&self) {
        logging::log!("[PROMO] Clearing staged registration draft");
        self.0.set(None);
    }
}

/// Draft store from context, creating and providing one when the tree has none.
pub fn use_registration_draft() -> RegistrationDraft {
    use_context::<RegistrationDraft>().unwrap_or_else(|| {
        let draft = RegistrationDraft::new();
        provide_context(draft);
        draft
    })
}
