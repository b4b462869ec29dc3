#[cfg(feature = "ssr")]
#[tokio::main]
async fn main() {
    use barbenheimer::model::AppState;
    use barbenheimer::{app::App, router};
    use leptos::prelude::*;
    use leptos_axum::generate_route_list;

    println!("Starting server...");
    if dotenvy::dotenv().is_err() {
        eprintln!("didn't find env file")
    };
    let conf = get_configuration(None).unwrap();
    let leptos_options: LeptosOptions = conf.leptos_options;
    let addr = leptos_options.site_addr;
    let routes = generate_route_list(App);
    println!("Loading state...");
    let state = AppState::new(leptos_options).await.unwrap();
    let app = router::new(routes, state);

    let listener = tokio::net::TcpListener::bind(&addr).await.unwrap();
    println!("listening on http://{}", &addr);
    axum::serve(listener, app.into_make_service())
        .await
        .unwrap();
}

#[cfg(not(feature = "ssr"))]
pub fn main() {
    // no client-side main function
    // see lib.rs for the hydration entry point instead
}
