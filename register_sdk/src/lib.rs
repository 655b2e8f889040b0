#![deny(unreachable_patterns)]
#![deny(unused_variables)]
#![deny(unused_imports)]
// Unused results is more often than not an error
#![deny(unused_must_use)]

pub use self::api_error::ResponseError;
pub use self::api_error::ERROR_DOMAIN;
pub use self::api_response::ApiResponse;
pub use self::register_error::{RegisterError, RegisterResult};

mod api_error;
mod api_response;
mod parser;
mod register_error;
