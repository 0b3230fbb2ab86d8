use async_trait::async_trait;

use crate::fetch::client::HttpClient;

/// An [`HttpClient`] wrapper that appends the API key as a URL query
/// parameter.
///
/// TransLink authenticates every surface this way: `apikey=<key>` on the
/// query string, never a header. Wrapping the transport keeps the endpoint
/// code free of credentials.
pub struct UrlParam<C> {
    inner: C,
    param_name: String,
    key: String,
}

impl<C> UrlParam<C> {
    pub fn new(inner: C, param_name: impl Into<String>, key: impl Into<String>) -> Self {
        Self {
            inner,
            param_name: param_name.into(),
            key: key.into(),
        }
    }
}

#[async_trait]
impl<C: HttpClient> HttpClient for UrlParam<C> {
    async fn execute(&self, mut req: reqwest::Request) -> reqwest::Result<reqwest::Response> {
        req.url_mut()
            .query_pairs_mut()
            .append_pair(&self.param_name, &self.key);
        self.inner.execute(req).await
    }
}
