//! Cache-validation core: outbound freshness headers and conditional
//! evaluation of inbound validators.

mod conditional;
mod headers;

pub use conditional::{evaluate, Freshness, RequestValidators};
pub use headers::{http_date, CacheHeaderWriter};
