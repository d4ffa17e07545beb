use crate::errors::ServerError;
use crate::responses::ResultResp;
use astra::{Body, ResponseBuilder};
use serde::Serialize;

pub fn json_response<T: Serialize>(value: &T) -> ResultResp {
    let body = serde_json::to_vec(value).map_err(|e| {
        log::error!("Failed to serialize JSON view: {e}");
        ServerError::InternalError
    })?;

    ResponseBuilder::new()
        .status(200)
        .header("Content-Type", mime::APPLICATION_JSON.as_ref())
        .body(Body::from(body))
        .map_err(|_| ServerError::InternalError)
}
