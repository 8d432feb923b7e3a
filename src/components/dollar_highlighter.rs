use leptos::*;

use crate::utils::text::highlight_segments;

/// Renders text with `$...$` spans drawn in the primary color.
#[component]
pub fn DollarSignHighlighter(#[prop(into)] text: String) -> impl IntoView {
    highlight_segments(&text)
        .into_iter()
        .map(|segment| {
            if segment.highlighted {
                view! { <span class="text-primary">{ segment.text }</span> }
            } else {
                view! { <span>{ segment.text }</span> }
            }
        })
        .collect_view()
}
