/// Root component: provides shared context and routes the landing and review pages.
use leptos::*;
use leptos_meta::*;
use leptos_router::*;

use crate::client::{fetch_landing_config, fetch_order_items};
use crate::components::{
    registration::RegistrationPanel,
    review_form::ItemReviewForm,
    toaster::{ToastHost, Toaster},
};
use crate::config::{use_app_config, AppConfig};
use crate::i18n::{use_i18n, I18n};
use crate::layout::use_screen_size;
use crate::state::RegistrationDraft;

#[component]
pub fn App() -> impl IntoView {
    provide_meta_context();
    provide_context(AppConfig::default());
    provide_context(I18n::default());
    provide_context(Toaster::new());
    provide_context(RegistrationDraft::new());

    view! {
        <Title text="Storefront" />
        <Router>
            <main>
                <Routes>
                    <Route path="" view=LandingPage />
                    <Route path="/orders/:order_id/review" view=OrderReviewPage />
                    <Route path="/store-registration" view=StoreRegistrationPage />
                    <Route path="/deliveryman-registration" view=DeliveryManRegistrationPage />
                </Routes>
            </main>
            <ToastHost />
        </Router>
    }
}

#[component]
fn LandingPage() -> impl IntoView {
    let config = use_app_config();
    let screen = use_screen_size();
    let landing = create_local_resource(|| (), move |_| fetch_landing_config(config.clone()));

    view! {
        <Suspense fallback=|| ()>
            {move || landing.get().map(|result| match result {
                Ok(promo) => view! { <RegistrationPanel config=promo screen=screen /> }.into_view(),
                Err(err) => {
                    logging::error!("[PROMO] Landing config unavailable: {}", err);
                    ().into_view()
                }
            })}
        </Suspense>
    }
}

#[component]
fn OrderReviewPage() -> impl IntoView {
    let config = use_app_config();
    let i18n = use_i18n();
    let params = use_params_map();
    let order_id = move || {
        params.with(|p| p.get("order_id").and_then(|id| id.parse::<u64>().ok()))
    };
    let items = create_local_resource(order_id, move |order_id| {
        let config = config.clone();
        async move {
            match order_id {
                Some(order_id) => fetch_order_items(config, order_id).await,
                None => Ok(Vec::new()),
            }
        }
    });

    view! {
        <section class="order-review container">
            <h1>{ i18n.t("Give review") }</h1>
            <Suspense fallback=|| ()>
                {move || items.get().map(|result| match result {
                    Ok(items) => items
                        .into_iter()
                        .map(|item| view! { <ItemReviewForm item=item /> })
                        .collect_view(),
                    Err(err) => {
                        logging::error!("[REVIEW] Order items unavailable: {}", err);
                        ().into_view()
                    }
                })}
            </Suspense>
        </section>
    }
}

#[component]
fn StoreRegistrationPage() -> impl IntoView {
    view! { <RegistrationLanding title="Store registration" /> }
}

#[component]
fn DeliveryManRegistrationPage() -> impl IntoView {
    view! { <RegistrationLanding title="Delivery man registration" /> }
}

/// Entry point of the registration flows. The flows themselves live elsewhere;
/// this only honours the `active` flag the promo cards set.
#[component]
fn RegistrationLanding(title: &'static str) -> impl IntoView {
    let i18n = use_i18n();
    let query = use_query_map();
    let active = move || {
        query.with(|q| q.get("active").map_or(false, |v| v.as_str() == "active"))
    };

    view! {
        <section class="registration-page container" class:active=active>
            <h1>{ i18n.t(title) }</h1>
        </section>
    }
}
