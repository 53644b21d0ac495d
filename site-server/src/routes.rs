use axum::{response::Redirect, routing::get, Router};
use tower_http::services::ServeDir;
use tower_http::trace::TraceLayer;

use crate::config::SiteSettings;

/// Static hosting for the exported booking page.
///
/// With a base path the bundle is mounted under it and `/` redirects there,
/// always with a trailing slash so relative asset URLs resolve.
pub fn build_router(settings: &SiteSettings) -> Router {
    let site = ServeDir::new(&settings.dist_dir).append_index_html_on_directories(true);

    let router = if settings.base_path.is_empty() {
        Router::new().fallback_service(site)
    } else {
        let landing = format!("{}/", settings.base_path);
        Router::new()
            .route(
                "/",
                get(move || {
                    let landing = landing.clone();
                    async move { Redirect::permanent(&landing) }
                }),
            )
            .nest_service(&settings.base_path, site)
    };

    router.layer(TraceLayer::new_for_http())
}
