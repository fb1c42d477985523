use axum::response::{IntoResponse, Response};
use axum_extra::TypedHeader;
use headers::ContentType;

#[derive(Clone, Eq, PartialEq, Debug, Default, Hash)]
pub struct Html(pub String);

impl IntoResponse for Html {
    fn into_response(self) -> Response {
        (TypedHeader(ContentType::from(mime::TEXT_HTML_UTF_8)), self.0).into_response()
    }
}
