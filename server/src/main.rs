use axum::{
    extract::Query,
    http::{header, StatusCode},
    response::{IntoResponse, Response},
    routing::get,
    Json, Router,
};
use dropfour::{best_move, Difficulty, MoveRequest};
use tokio::net::TcpListener;
use tower_http::{cors::CorsLayer, services::ServeDir, trace::TraceLayer};
use tracing::{debug, info};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    init_tracing();
    let app = app_router();

    let addr = "0.0.0.0:3000";
    let listener = TcpListener::bind(addr).await?;
    info!("Listening on http://{addr}");
    axum::serve(listener, app).await?;
    Ok(())
}

fn init_tracing() {
    let _ = tracing_subscriber::fmt()
        .with_env_filter("info,tower_http=debug")
        .try_init();
}

fn app_router() -> Router {
    let api = Router::new().route("/move", get(handle_move));
    let spa = Router::new().nest_service(
        "/",
        ServeDir::new("web/dist").append_index_html_on_directories(true),
    );
    Router::new()
        .nest("/api", api)
        .merge(spa)
        .layer(
            CorsLayer::new()
                .allow_methods([axum::http::Method::GET])
                .allow_origin(axum::http::HeaderValue::from_static("*"))
                .allow_headers([header::CONTENT_TYPE]),
        )
        .layer(TraceLayer::new_for_http())
}

#[derive(Debug, serde::Deserialize)]
struct MoveQuery {
    position: String,
    #[serde(default)]
    difficulty: Difficulty,
}

async fn handle_move(Query(query): Query<MoveQuery>) -> Result<impl IntoResponse, ApiError> {
    let req = MoveRequest {
        position: query.position,
        difficulty: query.difficulty,
    };
    let mv = best_move(req)?;
    debug!(column = mv.column, "engine reply");
    let headers = [(header::CACHE_CONTROL, "no-store")];
    Ok((headers, Json(mv)))
}

#[derive(Debug)]
struct ApiError(anyhow::Error);

impl<E: Into<anyhow::Error>> From<E> for ApiError {
    fn from(err: E) -> Self {
        Self(err.into())
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let status = StatusCode::BAD_REQUEST;
        let body = format!("{}", self.0);
        (status, body).into_response()
    }
}
