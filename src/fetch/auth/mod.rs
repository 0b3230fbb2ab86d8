mod url_param;

pub use url_param::UrlParam;

/// Query parameter that carries the API key on every TransLink endpoint.
pub(crate) const API_KEY_PARAM: &str = "apikey";
