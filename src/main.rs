#[cfg(feature = "ssr")]
#[actix_web::main]
async fn main() -> std::io::Result<()> {
    use actix_files::Files;
    use actix_web::{web, App, HttpServer};
    use leptos::get_configuration;
    use leptos::logging::{log, warn};
    use leptos_actix::{generate_route_list, LeptosRoutes};
    use storefront::api::{get_landing_config, get_order_items, submit_item_review, Fixtures};
    use storefront::app;
    use storefront::config::BackendConfig;

    // Canned backend data; an unreadable file leaves the dev API empty rather than down.
    let backend = BackendConfig::from_env();
    let fixtures = match Fixtures::load(&backend.fixtures_path) {
        Ok(fixtures) => fixtures,
        Err(err) => {
            warn!("[SERVER] {}; serving empty fixtures", err);
            Fixtures::default()
        }
    };
    let fixtures = web::Data::new(fixtures);

    // Load configuration
    let conf = get_configuration(None)
        .await
        .map_err(|e| std::io::Error::new(std::io::ErrorKind::Other, e.to_string()))?;
    let addr = conf.leptos_options.site_addr;

    // Generate the list of routes in your Leptos App
    let routes = generate_route_list(app::App);
    log!("[SERVER] listening on http://{}", &addr);

    HttpServer::new(move || {
        let leptos_options = &conf.leptos_options;
        let site_root = &leptos_options.site_root;

        App::new()
            .app_data(fixtures.clone())
            // Register the dev backend BEFORE Leptos server functions
            .service(
                web::scope("/api/v1")
                    .route("/landing", web::get().to(get_landing_config))
                    .route("/orders/{order_id}/items", web::get().to(get_order_items))
                    .route("/items/reviews/submit", web::post().to(submit_item_review)),
            )
            .route("/api/{tail:.*}", leptos_actix::handle_server_fns())
            // Serve JS/WASM/CSS from `pkg`
            .service(Files::new("/pkg", format!("{site_root}/pkg")))
            // Serve other assets from the `assets` directory
            .service(Files::new("/assets", site_root))
            .service(favicon)
            .leptos_routes(leptos_options.to_owned(), routes.to_owned(), app::App)
            .app_data(web::Data::new(leptos_options.to_owned()))
    })
    .bind(&addr)?
    .run()
    .await
}

#[cfg(feature = "ssr")]
#[actix_web::get("favicon.ico")]
async fn favicon(
    leptos_options: actix_web::web::Data<leptos::LeptosOptions>,
) -> actix_web::Result<actix_files::NamedFile> {
    let leptos_options = leptos_options.into_inner();
    let site_root = &leptos_options.site_root;
    Ok(actix_files::NamedFile::open(format!(
        "{site_root}/favicon.ico"
    ))?)
}

#[cfg(not(any(feature = "ssr", feature = "csr")))]
pub fn main() {
    // no client-side main function
    // see lib.rs for hydration function instead
}

#[cfg(all(not(feature = "ssr"), feature = "csr"))]
pub fn main() {
    // to run: `trunk serve --open --features csr`
    use storefront::app::App;

    storefront::utils::panic_hook::init();
    leptos::mount_to_body(App);
}
