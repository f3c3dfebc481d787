//! Request/response logging middleware.

use tower_http::LatencyUnit;
use tower_http::trace::{DefaultMakeSpan, DefaultOnResponse, TraceLayer};
use tracing::Level;

/// Builds the tracing layer applied to every route.
///
/// Opens an `INFO` span per request (method, path, HTTP version) and logs the
/// status code and latency in milliseconds when the response goes out. The
/// `/{public_id}` redirect path runs under the same layer, so click traffic
/// shows up in the logs even though click persistence happens off-request.
pub fn layer()
-> TraceLayer<tower_http::classify::SharedClassifier<tower_http::classify::ServerErrorsAsFailures>>
{
    TraceLayer::new_for_http()
        .make_span_with(DefaultMakeSpan::new().level(Level::INFO))
        .on_response(
            DefaultOnResponse::new()
                .level(Level::INFO)
                .latency_unit(LatencyUnit::Millis),
        )
}
