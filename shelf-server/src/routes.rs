//! API routes

use crate::config::CorsOrigins;
use crate::handlers;
use crate::state::AppState;
use axum::{
    routing::{delete, get, post, put, MethodRouter},
    Router,
};
use tower_http::{
    cors::{AllowOrigin, Any, CorsLayer},
    trace::TraceLayer,
};

/// One entry of the route table
pub struct Route {
    pub pattern: &'static str,
    pub handler: MethodRouter<AppState>,
    pub description: &'static str,
}

/// Every book endpoint the server exposes
pub fn book_routes() -> Vec<Route> {
    vec![
        Route {
            pattern: "/books",
            handler: get(handlers::list_books),
            description: "GET /books lists every book sorted by title",
        },
        Route {
            pattern: "/books",
            handler: post(handlers::create_book),
            description: "POST /books adds a new book to the library",
        },
        Route {
            pattern: "/books/:id",
            handler: get(handlers::get_book),
            description: "GET /books/{id} returns a single book",
        },
        Route {
            pattern: "/books/:id",
            handler: put(handlers::update_book),
            description: "PUT /books/{id} changes the given fields of a book",
        },
        Route {
            pattern: "/books/:id",
            handler: delete(handlers::delete_book),
            description: "DELETE /books/{id} removes a book",
        },
    ]
}

fn cors_layer(origins: &CorsOrigins) -> CorsLayer {
    let allow_origin = match origins {
        CorsOrigins::Any => AllowOrigin::any(),
        CorsOrigins::List(list) => AllowOrigin::list(list.iter().cloned()),
    };

    CorsLayer::new()
        .allow_origin(allow_origin)
        .allow_methods(Any)
        .allow_headers(Any)
}

/// Create the application router
pub fn create_router(state: AppState, cors: &CorsOrigins) -> Router {
    let api_routes = book_routes()
        .into_iter()
        .fold(Router::new(), |router, route| {
            tracing::debug!(pattern = route.pattern, "{}", route.description);
            router.route(route.pattern, route.handler)
        });

    api_routes
        .route("/health", get(handlers::health_check))
        .layer(TraceLayer::new_for_http())
        .layer(cors_layer(cors))
        .with_state(state)
}
