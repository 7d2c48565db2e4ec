//! HTTP middleware.

mod camel_case;

pub use camel_case::camelize_response;
