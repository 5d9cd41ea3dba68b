/// Backend request and response shapes.
pub mod cache_request;
