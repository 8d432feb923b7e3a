#![cfg(target_arch = "wasm32")]

use std::cell::RefCell;
use std::rc::Rc;
use std::time::Duration;

use futures::channel::oneshot;
use futures::future::LocalBoxFuture;
use gloo_timers::future::sleep;
use leptos::*;
use storefront::client::{ReviewMutation, ReviewService};
use storefront::components::review_form::{ItemReviewForm, SUCCESS_FALLBACK_KEY};
use storefront::components::toaster::{ToastKind, Toaster};
use storefront::error::{ApiError, ErrorEntry};
use storefront::models::order_item::{ItemDetails, OrderItem};
use storefront::models::review::{ReviewResponse, ReviewSubmission};
use wasm_bindgen::JsCast;
use wasm_bindgen_test::*;

wasm_bindgen_test_configure!(run_in_browser);

type Outcome = Result<ReviewResponse, ApiError>;

/// Holds every request open until the test answers it.
#[derive(Clone, Default)]
struct PendingMutation {
    calls: Rc<RefCell<Vec<ReviewSubmission>>>,
    pending: Rc<RefCell<Option<oneshot::Sender<Outcome>>>>,
}

impl PendingMutation {
    fn answer(&self, outcome: Outcome) {
        let sender = self.pending.borrow_mut().take().expect("a request in flight");
        sender.send(outcome).expect("form still listening");
    }
}

impl ReviewMutation for PendingMutation {
    fn submit(&self, submission: ReviewSubmission) -> LocalBoxFuture<'static, Outcome> {
        self.calls.borrow_mut().push(submission);
        let (tx, rx) = oneshot::channel();
        *self.pending.borrow_mut() = Some(tx);
        Box::pin(async move {
            rx.await
                .unwrap_or_else(|_| Err(ApiError::Network("dropped".into())))
        })
    }
}

struct Mounted {
    container: web_sys::HtmlElement,
    toaster: Toaster,
    mutation: PendingMutation,
}

impl Mounted {
    fn query(&self, selector: &str) -> web_sys::HtmlElement {
        self.container
            .query_selector(selector)
            .unwrap()
            .unwrap_or_else(|| panic!("no element for {selector}"))
            .dyn_into::<web_sys::HtmlElement>()
            .unwrap()
    }

    fn submit_button(&self) -> web_sys::HtmlButtonElement {
        self.query("button[type=submit]").dyn_into().unwrap()
    }

    fn textarea(&self) -> web_sys::HtmlTextAreaElement {
        self.query("textarea").dyn_into().unwrap()
    }

    fn filled_stars(&self) -> u32 {
        self.container.query_selector_all(".star.filled").unwrap().length()
    }

    fn click_star(&self, star: u32) {
        let stars = self.container.query_selector_all(".star").unwrap();
        stars
            .item(star - 1)
            .unwrap()
            .dyn_into::<web_sys::HtmlElement>()
            .unwrap()
            .click();
    }

    fn type_comment(&self, text: &str) {
        let textarea = self.textarea();
        textarea.set_value(text);
        let init = web_sys::EventInit::new();
        init.set_bubbles(true);
        let event = web_sys::Event::new_with_event_init_dict("input", &init).unwrap();
        textarea.dispatch_event(&event).unwrap();
    }

    fn toasts(&self) -> Vec<(ToastKind, String)> {
        self.toaster
            .snapshot()
            .into_iter()
            .map(|t| (t.kind, t.message))
            .collect()
    }
}

impl Drop for Mounted {
    fn drop(&mut self) {
        self.container.remove();
    }
}

fn mount_form() -> Mounted {
    let document = web_sys::window().unwrap().document().unwrap();
    let container = document
        .create_element("div")
        .unwrap()
        .dyn_into::<web_sys::HtmlElement>()
        .unwrap();
    document.body().unwrap().append_child(&container).unwrap();

    let mutation = PendingMutation::default();
    let toaster_slot = Rc::new(RefCell::new(None));
    let slot = Rc::clone(&toaster_slot);
    let service = ReviewService::new(mutation.clone());
    mount_to(container.clone(), move || {
        let toaster = Toaster::new();
        provide_context(toaster);
        provide_context(service);
        *slot.borrow_mut() = Some(toaster);
        let item = OrderItem {
            item_id: 12,
            order_id: 99,
            quantity: 2,
            image_full_url: None,
            item_details: Some(ItemDetails {
                name: Some("Organic honey".into()),
                price: Some(8.5),
            }),
        };
        view! { <ItemReviewForm item=item /> }
    });

    let toaster = toaster_slot.borrow().expect("toaster provided");
    Mounted { container, toaster, mutation }
}

// Lets spawned submissions and their settle callbacks run.
async fn settle() {
    sleep(Duration::from_millis(50)).await;
}

#[wasm_bindgen_test]
async fn failure_reenables_submit_and_keeps_input() {
    let form = mount_form();
    form.click_star(4);
    form.type_comment("Great item");
    assert_eq!(form.filled_stars(), 4);
    assert!(!form.submit_button().disabled());

    form.submit_button().click();
    settle().await;
    assert!(form.submit_button().disabled());
    assert_eq!(form.mutation.calls.borrow().len(), 1);

    // a second click while the request is out goes nowhere
    form.submit_button().click();
    settle().await;
    assert_eq!(form.mutation.calls.borrow().len(), 1);

    let sent = form.mutation.calls.borrow()[0].clone();
    assert_eq!(sent.rating.map(u8::from), Some(4));
    assert_eq!(sent.comment, "Great item");
    assert_eq!((sent.item_id, sent.order_id, sent.delivery_man_id), (12, 99, None));

    form.mutation.answer(Err(ApiError::Rejected {
        status: 422,
        errors: vec![ErrorEntry { code: "comment".into(), message: "Too short".into() }],
    }));
    settle().await;

    assert!(!form.submit_button().disabled());
    assert_eq!(form.textarea().value(), "Great item");
    assert_eq!(form.filled_stars(), 4);
    assert_eq!(form.toasts(), vec![(ToastKind::Error, "Too short".to_string())]);
}

#[wasm_bindgen_test]
async fn success_shows_server_message_and_clears_form() {
    let form = mount_form();
    form.click_star(5);
    form.type_comment("Lovely");

    form.submit_button().click();
    settle().await;
    form.mutation.answer(Ok(ReviewResponse { message: "Thanks!".into() }));
    settle().await;

    assert_eq!(form.toasts(), vec![(ToastKind::Success, "Thanks!".to_string())]);
    assert_eq!(form.textarea().value(), "");
    assert_eq!(form.filled_stars(), 0);
    // nothing left to send until the user edits again
    assert!(form.submit_button().disabled());

    form.type_comment("One more thing");
    assert!(!form.submit_button().disabled());
}

#[wasm_bindgen_test]
async fn empty_success_message_uses_fallback_text() {
    let form = mount_form();
    form.click_star(3);

    form.submit_button().click();
    settle().await;
    form.mutation.answer(Ok(ReviewResponse::default()));
    settle().await;

    assert_eq!(
        form.toasts(),
        vec![(ToastKind::Success, SUCCESS_FALLBACK_KEY.to_string())]
    );
}
