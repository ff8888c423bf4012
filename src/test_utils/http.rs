use axum::{
    body::{Body, to_bytes},
    response::Response,
};

#[track_caller]
pub(crate) fn assert_content_type(response: &Response<Body>, content_type: &str) {
    let content_type_header = response
        .headers()
        .get("content-type")
        .expect("content-type header missing");
    assert_eq!(content_type_header, content_type);
}

pub(crate) async fn must_read_body(response: Response<Body>) -> String {
    let body_bytes = to_bytes(response.into_body(), usize::MAX)
        .await
        .expect("Could not read response body");

    String::from_utf8(body_bytes.to_vec()).expect("Response body is not UTF-8")
}
