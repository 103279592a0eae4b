mod client;
mod errors;
mod runtime;
mod traits;
mod types;


pub use client::ApiClient;
pub use errors::ApiError;
pub use runtime::RuntimeBound;
pub use traits::MediaServer;
pub use types::{ErrorBody, MediaDescriptor, RefreshResponse};
