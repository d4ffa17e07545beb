use crate::errors::ServerError;
use crate::templates::components::error_page;
use astra::{Body, Response, ResponseBuilder};

pub type ResultResp = Result<Response, ServerError>;

/// Convert a ServerError into a proper HTML response
pub fn error_to_response(err: ServerError) -> Response {
    let (status, message) = match &err {
        ServerError::NotFound => (404, "Not Found".to_string()),
        ServerError::BadRequest(msg) => (400, msg.clone()),
        ServerError::Dataset(_) | ServerError::XlsxError(_) | ServerError::InternalError => {
            log::error!("Request failed: {err}");
            (500, err.to_string())
        }
    };

    let body = error_page(status, &message).into_string();

    ResponseBuilder::new()
        .status(status)
        .header("Content-Type", mime::TEXT_HTML_UTF_8.as_ref())
        .body(Body::from(body))
        .unwrap_or_else(|_| Response::new(Body::from("Internal Server Error")))
}
