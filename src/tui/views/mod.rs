mod demo;

pub use demo::{DemoView, DemoViewState};
