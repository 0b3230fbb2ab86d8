use async_trait::async_trait;
use reqwest::{Request, Response};

/// Minimal HTTP execution seam.
///
/// The façade clients are generic over this trait so that auth decoration
/// ([`super::auth::UrlParam`]) and test doubles can be layered in without the
/// endpoint code knowing.
#[async_trait]
pub trait HttpClient: Send + Sync {
    async fn execute(&self, req: Request) -> reqwest::Result<Response>;
}
