#![allow(missing_docs)]

pub(crate) mod fake_store;
pub(crate) mod http;

pub(crate) use fake_store::FakeStore;
pub(crate) use http::{assert_content_type, must_read_body};
