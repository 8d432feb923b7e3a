pub mod leptos_owner;
pub mod money;
pub mod panic_hook;
pub mod text;
