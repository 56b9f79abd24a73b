#![allow(dead_code)]

pub mod stub_provider;

pub use stub_provider::{RecordedCall, StubProvider};
pub use test_app::{TestApp, TestAppOptions};
