/// "Earn with us" landing section: heading plus seller / delivery-man signup cards.
use leptos::*;
use leptos_router::use_navigate;

use crate::components::dollar_highlighter::DollarSignHighlighter;
use crate::i18n::use_i18n;
use crate::layout::{CardLayout, PanelLayout, ScreenSize};
use crate::models::promo::{CardAction, CardKind, PromoCard, PromoConfig};
use crate::state::{use_registration_draft, ClearDraft};

/// Card click: drop any staged registration data, then go to the registration page.
pub fn select_card(action: &CardAction, draft: &impl ClearDraft, navigate: impl FnOnce(&str)) {
    draft.clear();
    navigate(&action.href());
}

#[component]
pub fn RegistrationPanel(
    config: PromoConfig,
    #[prop(into)] screen: Signal<ScreenSize>,
) -> impl IntoView {
    let i18n = use_i18n();
    let panel = move || PanelLayout::for_screen(screen.get());

    let title = config.earning_title.clone().unwrap_or_default();
    let sub_title = config
        .earning_sub_title
        .as_deref()
        .map(|s| i18n.t(s))
        .unwrap_or_default();
    let cards = config.cards();
    logging::log!("[PROMO] Rendering {} registration card(s)", cards.len());

    view! {
        <section class="registration-panel container" style=move || panel().style()>
            <div class="registration-heading">
                <h2
                    class=move || if screen.get().is_small() { "h7" } else { "h4" }
                    style=move || format!(
                        "line-height: {}; opacity: .9; text-align: center;",
                        panel().title_line_height
                    )
                >
                    <DollarSignHighlighter text=title />
                </h2>
                <p class="text-secondary" style=move || panel().sub_title_style()>
                    { sub_title }
                </p>
            </div>
            <div class="registration-cards" style=move || panel().cards_style()>
                {
                    cards.into_iter().map(|card| view! {
                        <PromoCardView card=card screen=screen />
                    }).collect_view()
                }
            </div>
        </section>
    }
}

#[component]
pub fn PromoCardView(card: PromoCard, #[prop(into)] screen: Signal<ScreenSize>) -> impl IntoView {
    let i18n = use_i18n();
    let layout = move || CardLayout::for_screen(screen.get());
    let alt = match card.kind {
        CardKind::Seller => i18n.t("Seller"),
        CardKind::DeliveryMan => i18n.t("Delivery man"),
    };

    // No label or no target means no button at all, not a disabled one.
    let button = card.action.clone().map(|action| {
        let draft = use_registration_draft();
        let navigate = use_navigate();
        let label = action.label.clone();
        let on_click = move |_| {
            logging::log!("[PROMO] Card selected, redirecting to {}", action.route);
            select_card(&action, &draft, |href| navigate(href, Default::default()));
        };
        view! {
            <button type="button" class="btn-primary" on:click=on_click>
                <span class=move || layout().body_class style="font-weight: bold;">{ label }</span>
            </button>
        }
    });

    view! {
        <div class="promo-card" data-kind=card.kind.route() style=move || layout().style()>
            <div class="promo-card-image" style=move || layout().image_style()>
                <img src=card.kind.image() alt=alt />
            </div>
            <div class="promo-card-text">
                <h3 style=move || layout().title_style()>
                    <DollarSignHighlighter text=card.title.clone() />
                </h3>
                <p class=move || layout().body_class>
                    <DollarSignHighlighter text=card.sub_title.clone() />
                </p>
            </div>
            <div class="promo-card-action">{ button }</div>
        </div>
    }
}
