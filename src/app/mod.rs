// Application layer: use-case service and the page controller.

pub mod controller;
pub mod service;

pub use controller::{App, View};
pub use service::PortfolioService;
