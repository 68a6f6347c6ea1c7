use axum::http::{header, Method};
use axum::{middleware, routing::get, routing::post, Router};

use backend::SharedBackend;
use tower_http::cors::CorsLayer;
use tracing::info;
use utoipa::OpenApi;
use utoipa_rapidoc::RapiDoc;
use utoipa_redoc::{Redoc, Servable};
use utoipa_swagger_ui::SwaggerUi;
use utoipauto::utoipauto;

pub mod account;
pub mod admin;
mod auth;
pub mod healthz;
pub mod not_found;
pub mod post;
mod response;
pub mod seo;
pub mod work;

pub enum ApiError {
    AuthError(String),
    ClientError(String),
    NotFoundError(String),
    ServerError(String),
}

#[derive(Clone, Debug)]
pub struct ApiState {
    backend: SharedBackend,
    config: Config,
}

#[derive(Clone, Debug)]
pub struct Config {
    pub site: Site,
}

#[derive(Clone, Debug)]
pub struct Site {
    pub base_url: String,
    pub cors_origin: String,
}

pub async fn serve(
    backend: SharedBackend,
    config_name: &str,
) -> anyhow::Result<Router> {
    #[utoipauto(paths = "./libs/api/src")]
    #[derive(OpenApi)]
    #[openapi(
        tags(
            (name = "hollyfrank", description = "Marketing site content API")
        )
    )]
    struct ApiDoc;

    info!(task = "start api serving");

    let config = util::load_config(config_name)?;
    let site = Site {
        base_url: config["site"]["base_url"]
            .as_str()
            .unwrap()
            .to_string(),
        cors_origin: config["site"]["cors_origin"]
            .as_str()
            .unwrap()
            .to_string(),
    };

    let state = ApiState {
        backend,
        config: Config { site },
    };

    let origins = [state.config.site.cors_origin.parse().unwrap()];

    // published posts
    let post_router = Router::new()
        .route("/", get(post::get_posts))
        .route("/:slug", get(post::get_post))
        .fallback(not_found::get_404)
        .with_state(state.clone());

    // published works
    let work_router = Router::new()
        .route("/", get(work::get_works))
        .route("/:slug", get(work::get_work))
        .fallback(not_found::get_404)
        .with_state(state.clone());

    // operator accounts
    let account_router = Router::new()
        .route("/sign-in", post(account::sign_in))
        .route("/sign-up", post(account::sign_up))
        .route("/sign-out", post(account::sign_out))
        .route("/session", get(account::get_session))
        .fallback(not_found::get_404)
        .with_state(state.clone());

    // authoring, behind a session token
    let admin_router = Router::new()
        .route(
            "/posts",
            get(admin::get_posts).post(admin::create_post),
        )
        .route(
            "/posts/:id",
            axum::routing::put(admin::update_post)
                .delete(admin::delete_post),
        )
        .route(
            "/posts/:id/published",
            axum::routing::patch(admin::set_post_published),
        )
        .route(
            "/works",
            get(admin::get_works).post(admin::create_work),
        )
        .route(
            "/works/:id",
            axum::routing::put(admin::update_work)
                .delete(admin::delete_work),
        )
        .route(
            "/works/:id/published",
            axum::routing::patch(admin::set_work_published),
        )
        .route_layer(middleware::from_fn_with_state(
            state.clone(),
            auth::auth,
        ))
        .fallback(not_found::get_404)
        .with_state(state.clone());

    let router = Router::new()
        .merge(
            SwaggerUi::new("/swagger-ui")
                .url("/api-docs/openapi.json", ApiDoc::openapi()),
        )
        .merge(Redoc::with_url("/redoc", ApiDoc::openapi()))
        .merge(RapiDoc::new("/api-docs/openapi.json").path("/rapidoc"))
        .route("/healthz", get(healthz::get_health))
        .route("/sitemap.xml", get(seo::get_sitemap))
        .route("/robots.txt", get(seo::get_robots))
        .with_state(state.clone())
        .nest("/posts", post_router)
        .nest("/works", work_router)
        .nest("/auth", account_router)
        .nest("/admin", admin_router)
        .layer(
            CorsLayer::new()
                .allow_origin(origins)
                .allow_methods([
                    Method::GET,
                    Method::POST,
                    Method::PUT,
                    Method::PATCH,
                    Method::DELETE,
                ])
                .allow_headers([
                    header::AUTHORIZATION,
                    header::CONTENT_TYPE,
                ]),
        )
        .fallback(not_found::get_404);

    Ok(router)
}
