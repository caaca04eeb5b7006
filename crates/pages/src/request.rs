//! Request-time page-data loading.

use std::future::Future;

use tinyblog_core::params::ParamError;

use crate::context::PageContext;
use crate::props::ServerSideProps;

/// Loader produced by [`with_request_page_data`].
#[derive(Debug, Clone)]
pub struct ServerSidePropsLoader<F> {
    fetcher: F,
    prop_name: String,
}

/// Wraps `fetcher` as a request-time loader publishing under `prop_name`.
///
/// Unlike [`with_page_data`](crate::with_page_data), failures are not
/// swallowed: a malformed route parameter is converted into the fetcher's
/// error type and fetcher errors are returned unchanged, for the host to turn
/// into an error page.
pub fn with_request_page_data<F>(fetcher: F, prop_name: impl Into<String>) -> ServerSidePropsLoader<F> {
    ServerSidePropsLoader {
        fetcher,
        prop_name: prop_name.into(),
    }
}

impl<F> ServerSidePropsLoader<F> {
    /// Runs the fetcher for `ctx`.
    pub async fn load<T, E, Fut>(&self, ctx: &PageContext) -> Result<ServerSideProps<T>, E>
    where
        F: Fn(Option<String>) -> Fut,
        Fut: Future<Output = Result<T, E>>,
        E: From<ParamError>,
    {
        let id = ctx.id()?;
        let data = (self.fetcher)(id).await?;
        Ok(ServerSideProps {
            prop_name: self.prop_name.clone(),
            data,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[derive(Debug, PartialEq, Eq)]
    enum FetchError {
        Param(ParamError),
        Upstream(u16),
    }

    impl From<ParamError> for FetchError {
        fn from(e: ParamError) -> Self {
            FetchError::Param(e)
        }
    }

    #[tokio::test]
    async fn test_wraps_data_under_prop_name() {
        let loader = with_request_page_data(
            |id: Option<String>| async move { Ok::<_, FetchError>(format!("author {}", id.unwrap_or_default())) },
            "authorPosts",
        );

        let props = loader.load(&PageContext::with_id("7")).await.unwrap();
        assert_eq!(props.prop_name, "authorPosts");
        assert_eq!(props.data, "author 7");
    }

    #[tokio::test]
    async fn test_fetcher_error_propagates_unchanged() {
        let loader = with_request_page_data(
            |_id: Option<String>| async { Err::<String, _>(FetchError::Upstream(503)) },
            "authorPosts",
        );

        let err = loader.load(&PageContext::with_id("7")).await.unwrap_err();
        assert_eq!(err, FetchError::Upstream(503));
    }

    #[tokio::test]
    async fn test_bad_route_param_propagates() {
        let loader = with_request_page_data(
            |_id: Option<String>| async { Ok::<_, FetchError>(()) },
            "authorPosts",
        );

        let ctx = PageContext::new().with_segments("id", vec!["a".to_string(), "b".to_string()]);
        let err = loader.load(&ctx).await.unwrap_err();
        assert_eq!(
            err,
            FetchError::Param(ParamError::NotASingleValue { name: "id", count: 2 })
        );
    }
}
