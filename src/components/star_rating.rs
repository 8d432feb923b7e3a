use leptos::*;

use crate::models::review::Rating;

/// Five clickable stars. Reports the chosen star count, 1..=5.
#[component]
pub fn StarRating(
    #[prop(into)] value: Signal<Option<Rating>>,
    #[prop(into)] on_change: Callback<u8>,
    #[prop(into, default = Signal::derive(|| false))] disabled: Signal<bool>,
    #[prop(default = "2rem")] font_size: &'static str,
) -> impl IntoView {
    let selected = move || value.get().map(Rating::get).unwrap_or(0);

    view! {
        <div class="star-rating" role="radiogroup" style=format!("font-size: {font_size};")>
            {
                (1..=Rating::MAX).map(move |star| view! {
                    <button
                        type="button"
                        class="star"
                        class:filled=move || { selected() >= star }
                        role="radio"
                        aria-checked=move || (selected() == star).to_string()
                        aria-label=format!("{star} star")
                        disabled=move || disabled.get()
                        on:click=move |_| on_change.call(star)
                    >
                        "★"
                    </button>
                }).collect_view()
            }
        </div>
    }
}
