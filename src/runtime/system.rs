//! Deployed wiring of the client stack.

use crate::client::{ApiBase, HateoasClient, PostClient, ReqwestTransport};

/// The assembled client stack for the blog API.
///
/// `BlogSystem` is the composition root: it picks the transport and base-URL
/// policy once, and hands out the typed clients built on them. Nothing below
/// this layer reads configuration on its own.
///
/// # Example
///
/// ```ignore
/// let system = BlogSystem::from_env();
/// let page = system.posts.list(Some(1), Some(10)).await?;
/// ```
pub struct BlogSystem {
    /// Client for the post resource family.
    pub posts: PostClient<ReqwestTransport>,
}

impl BlogSystem {
    /// Wires the deployed transport against the given base-URL policy.
    pub fn new(base: ApiBase) -> Self {
        let transport = ReqwestTransport::new();
        let posts = PostClient::new(HateoasClient::new(transport, base));
        Self { posts }
    }

    /// Wires against the environment (`BLOG_API_ORIGIN` / `BLOG_API_URL`),
    /// falling back to the local development endpoint.
    pub fn from_env() -> Self {
        Self::new(ApiBase::from_env())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn system_wires_against_an_explicit_base() {
        let system = BlogSystem::new(ApiBase::endpoint("http://localhost:3000"));
        assert_eq!(
            system.posts.api().base(),
            &ApiBase::endpoint("http://localhost:3000")
        );
    }
}
