mod api_tests;
mod export_tests;
mod hotels_tests;

use crate::router::{handle, AppState};
use crate::responses::ResultResp;
use crate::tests::utils::sample_dataset;
use astra::{Body, Response};
use http::{Method, Request};
use std::io::Read;

pub fn sample_state() -> AppState {
    AppState::new(sample_dataset())
}

pub fn request(method: Method, uri: &str) -> ResultResp {
    let req = Request::builder()
        .method(method)
        .uri(uri)
        .body(Body::empty())
        .unwrap();
    handle(req, &sample_state())
}

pub fn get(uri: &str) -> ResultResp {
    request(Method::GET, uri)
}

pub fn body_bytes(resp: Response) -> Vec<u8> {
    let mut body = Vec::new();
    resp.into_body().reader().read_to_end(&mut body).unwrap();
    body
}

pub fn body_text(resp: Response) -> String {
    String::from_utf8(body_bytes(resp)).expect("Body is not UTF-8")
}
