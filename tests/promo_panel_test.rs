#![cfg(target_arch = "wasm32")]

use std::cell::RefCell;
use std::rc::Rc;

use leptos::*;
use leptos_router::Router;
use storefront::components::registration::RegistrationPanel;
use storefront::layout::ScreenSize;
use storefront::models::promo::PromoConfig;
use storefront::state::RegistrationDraft;
use wasm_bindgen::JsCast;
use wasm_bindgen_test::*;

wasm_bindgen_test_configure!(run_in_browser);

fn promo_config(seller: bool, dm_button: Option<&str>) -> PromoConfig {
    PromoConfig {
        earning_title: Some("Earn $more$ with us".into()),
        earning_sub_title: Some("Join the marketplace".into()),
        earning_seller_status: seller,
        earning_seller_title: Some("Become a seller".into()),
        earning_seller_sub_title: Some("Open your store".into()),
        earning_seller_button_name: Some("Register".into()),
        earning_dm_status: true,
        earning_dm_title: Some("Deliver with us".into()),
        earning_dm_sub_title: Some("Flexible hours".into()),
        earning_dm_button_name: dm_button.map(str::to_string),
    }
}

// Mounts the panel inside a router and hands back the draft store it was given.
fn mount_panel(
    config: PromoConfig,
) -> (web_sys::HtmlElement, Rc<RefCell<Option<RegistrationDraft>>>) {
    let document = web_sys::window().unwrap().document().unwrap();
    let container = document
        .create_element("div")
        .unwrap()
        .dyn_into::<web_sys::HtmlElement>()
        .unwrap();
    document.body().unwrap().append_child(&container).unwrap();

    let draft_slot = Rc::new(RefCell::new(None));
    let slot = Rc::clone(&draft_slot);
    mount_to(container.clone(), move || {
        let draft = RegistrationDraft::new();
        draft.stage(serde_json::json!({ "store_name": "Corner shop" }));
        provide_context(draft);
        *slot.borrow_mut() = Some(draft);
        view! {
            <Router>
                <RegistrationPanel config=config screen=ScreenSize::Md />
            </Router>
        }
    });
    (container, draft_slot)
}

#[wasm_bindgen_test]
fn renders_enabled_cards_only() {
    let (container, _) = mount_panel(promo_config(false, Some("Join")));

    let cards = container.query_selector_all(".promo-card").unwrap();
    assert_eq!(cards.length(), 1);
    let card = container.query_selector(".promo-card").unwrap().unwrap();
    assert_eq!(
        card.get_attribute("data-kind").as_deref(),
        Some("deliveryman-registration")
    );

    container.remove();
}

#[wasm_bindgen_test]
fn card_without_label_has_no_button() {
    let (container, _) = mount_panel(promo_config(true, None));

    assert_eq!(container.query_selector_all(".promo-card").unwrap().length(), 2);
    assert_eq!(
        container.query_selector_all(".promo-card button").unwrap().length(),
        1
    );

    container.remove();
}

#[wasm_bindgen_test]
fn clicking_a_card_clears_the_staged_draft() {
    let (container, draft_slot) = mount_panel(promo_config(true, Some("Join")));
    let draft = draft_slot.borrow().expect("draft provided");
    assert!(!draft.is_empty());

    let button = container
        .query_selector(".promo-card button")
        .unwrap()
        .unwrap()
        .dyn_into::<web_sys::HtmlElement>()
        .unwrap();
    button.click();

    assert!(draft.is_empty());
    container.remove();
}
