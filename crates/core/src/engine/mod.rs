//! Validated rate book and the engine facade that serves it.

pub mod book;
pub mod service;

pub use book::RateBook;
pub use service::RateEngine;
