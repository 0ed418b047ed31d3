use axum::body::Body;
use axum::http::Request;
use axum::middleware::Next;
use axum::response::Response;

/// Простой middleware для логирования запросов
pub async fn request_logger(req: Request<Body>, next: Next) -> Response {
    let start = std::time::Instant::now();
    let method = req.method().clone();
    let uri = req.uri().clone();

    let response = next.run(req).await;

    let status = response.status();
    let elapsed = start.elapsed().as_millis();
    if status.is_server_error() {
        tracing::error!("{:>5}ms | {} {:>6} {}", elapsed, status.as_u16(), method, uri.path());
    } else {
        tracing::info!("{:>5}ms | {} {:>6} {}", elapsed, status.as_u16(), method, uri.path());
    }
    response
}
