#![allow(clippy::expect_used)]

mod support;

mod classification_test;
mod pipeline_test;
