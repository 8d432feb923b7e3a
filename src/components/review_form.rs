use leptos::ev::SubmitEvent;
use leptos::*;

use crate::client::{HttpReviewClient, ReviewService};
use crate::components::star_rating::StarRating;
use crate::components::toaster::use_toaster;
use crate::config::use_app_config;
use crate::error::on_error_response;
use crate::i18n::{use_i18n, Direction};
use crate::models::order_item::OrderItem;
use crate::models::review::{Notice, ReviewFormState, SubmitRejected, ValidationError};
use crate::utils::leptos_owner::with_owner_safe;
use crate::utils::money::format_amount;

pub const SUCCESS_FALLBACK_KEY: &str = "Review submitted successfully";

/// Review form for one delivered order item: summary, star rating, comment.
///
/// The mutation comes from a [`ReviewService`] in context, falling back to the
/// HTTP client built from [`crate::config::AppConfig`].
#[component]
pub fn ItemReviewForm(item: OrderItem) -> impl IntoView {
    let i18n = use_i18n();
    let config = use_app_config();
    let toaster = use_toaster();
    let service = use_context::<ReviewService>()
        .unwrap_or_else(|| ReviewService::new(HttpReviewClient::from_config(&config)));

    let form = create_rw_signal(ReviewFormState::default());
    let (validation, set_validation) = create_signal(None::<ValidationError>);
    let submitting = Signal::derive(move || form.with(ReviewFormState::is_submitting));
    let can_submit = Signal::derive(move || form.with(ReviewFormState::can_submit));
    let target = item.target();
    let policy = config.review_policy;

    let on_rating = Callback::new(move |value: u8| {
        form.update(|f| {
            if let Err(err) = f.set_rating(value) {
                logging::warn!("[REVIEW] {}", err);
            }
        });
        set_validation.set(None);
    });

    let on_comment = move |ev| {
        let value = event_target_value(&ev);
        form.update(|f| f.set_comment(value));
    };

    let on_submit = {
        let i18n = i18n.clone();
        move |ev: SubmitEvent| {
            ev.prevent_default();
            let submission = match form.try_update(|f| f.begin_submit(target, &policy)) {
                Some(Ok(submission)) => submission,
                Some(Err(SubmitRejected::Invalid(err))) => {
                    set_validation.set(Some(err));
                    return;
                }
                Some(Err(rejected)) => {
                    logging::log!("[REVIEW] Submit ignored: {}", rejected);
                    return;
                }
                None => return,
            };
            set_validation.set(None);

            let owner = Owner::current();
            let mutation = service.0.clone();
            let i18n = i18n.clone();
            spawn_local(async move {
                let outcome = mutation.submit(submission).await;
                with_owner_safe(owner, "review submission", move || {
                    match form.try_update(|f| f.settle(outcome)) {
                        Some(Notice::Success(message)) if message.is_empty() => {
                            toaster.success(i18n.t(SUCCESS_FALLBACK_KEY));
                        }
                        Some(Notice::Success(message)) => {
                            toaster.success(message);
                        }
                        Some(Notice::Failure(err)) => on_error_response(&err, &toaster, &i18n),
                        None => {}
                    }
                });
            });
        }
    };

    let name = item.name().to_string();
    let price = format_amount(item.price(), &config.currency);
    let gap = match i18n.direction {
        Direction::Rtl => "1rem",
        Direction::Ltr => "0rem",
    };
    let image = match item.image() {
        Some(url) => view! {
            <img class="item-image" src=url.to_string() alt=name.clone() width="100" height="90" />
        }
        .into_view(),
        None => view! {
            <div class="item-image item-image-placeholder" style="width: 100px; height: 90px;"></div>
        }
        .into_view(),
    };

    let error_i18n = i18n.clone();
    let validation_message = move || {
        validation
            .get()
            .map(|err| view! { <p class="field-error">{ error_i18n.t(&err.to_string()) }</p> })
    };
    let submit_label = {
        let busy = i18n.t("Submitting...");
        let idle = i18n.t("Submit");
        move || if submitting.get() { busy.clone() } else { idle.clone() }
    };

    view! {
        <form class="item-review-form" on:submit=on_submit>
            <div class="review-item-summary">
                <div class="review-item-identity" style=format!("gap: {gap};")>
                    { image }
                    <div>
                        <p class="text-bold">{ name.clone() }</p>
                        <p class="text-bold">{ price }</p>
                    </div>
                </div>
                <div class="review-item-quantity">
                    <span class="text-gray">{ i18n.t("Quantity") }</span>
                    <span class="text-gray">":"</span>
                    <span class="text-primary">{ item.quantity }</span>
                </div>
            </div>
            <hr />
            <div class="review-rating">
                <p class="text-gray">{ i18n.t("Rate the item") }</p>
                <StarRating
                    value=Signal::derive(move || form.with(|f| f.draft().rating))
                    on_change=on_rating
                    disabled=submitting
                />
            </div>
            <div class="review-comment">
                <p class="text-gray">{ i18n.t("Share your opinion") }</p>
                <textarea
                    name="comment"
                    rows="4"
                    placeholder=i18n.t("Comment")
                    prop:value=move || form.with(|f| f.draft().comment.clone())
                    readonly=move || submitting.get()
                    on:input=on_comment
                />
                { validation_message }
            </div>
            <button
                type="submit"
                class="btn-primary btn-full"
                disabled=move || !can_submit.get()
                aria-busy=move || submitting.get().to_string()
            >
                { submit_label }
            </button>
        </form>
    }
}
