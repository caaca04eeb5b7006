//! Build-time page-data loading.

use std::fmt::Display;
use std::future::Future;

use tinyblog_core::format::{current_date, DateFormat};

use crate::context::PageContext;
use crate::props::{PageEnvelope, StaticProps};

/// Loader produced by [`with_page_data`].
#[derive(Debug, Clone)]
pub struct StaticPropsLoader<F> {
    fetcher: F,
    prop_name: String,
    revalidate: Option<u32>,
    clock: fn() -> String,
}

/// Wraps `fetcher` as a build-time loader publishing under `prop_name`.
///
/// `revalidate` is the interval in seconds after which the page should be
/// recomputed; pass `None` for pages that never revalidate.
///
/// Failures never escape the loader: a bad route parameter or a fetcher error
/// is logged and turned into `{ props: { <prop_name>: null }, revalidate: 0 }`,
/// so the page renders its empty state instead of failing the build. Pages
/// loaded this way must handle `null` data.
pub fn with_page_data<F>(
    fetcher: F,
    prop_name: impl Into<String>,
    revalidate: Option<u32>,
) -> StaticPropsLoader<F> {
    StaticPropsLoader {
        fetcher,
        prop_name: prop_name.into(),
        revalidate,
        clock: default_clock,
    }
}

fn default_clock() -> String {
    current_date(DateFormat::Default)
}

impl<F> StaticPropsLoader<F> {
    /// Replaces the source of `revalidateAt` timestamps.
    pub fn with_clock(mut self, clock: fn() -> String) -> Self {
        self.clock = clock;
        self
    }

    /// Runs the fetcher for `ctx` and wraps the outcome.
    pub async fn load<T, E, Fut>(&self, ctx: &PageContext) -> StaticProps<T>
    where
        F: Fn(Option<String>) -> Fut,
        Fut: Future<Output = Result<T, E>>,
        E: Display,
    {
        let revalidate_at = (self.clock)();

        let id = match ctx.id() {
            Ok(id) => id,
            Err(e) => {
                tracing::warn!(prop = %self.prop_name, error = %e, "rejected route parameter; serving empty props");
                return StaticProps::empty(self.prop_name.clone());
            }
        };

        match (self.fetcher)(id).await {
            Ok(data) => StaticProps {
                prop_name: self.prop_name.clone(),
                value: Some(PageEnvelope {
                    data,
                    revalidate_at,
                }),
                revalidate: self.revalidate,
            },
            Err(e) => {
                tracing::warn!(prop = %self.prop_name, error = %e, "page data fetch failed; serving empty props");
                StaticProps::empty(self.prop_name.clone())
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use std::sync::{
        atomic::{AtomicUsize, Ordering},
        Arc,
    };

    use super::*;

    fn fixed_clock() -> String {
        "Friday, November 22, 2024, 04:35 PM".to_string()
    }

    #[tokio::test]
    async fn test_wraps_data_with_timestamp() {
        let loader = with_page_data(
            |_id: Option<String>| async { Ok::<_, String>(vec!["a", "b"]) },
            "posts",
            Some(60),
        )
        .with_clock(fixed_clock);

        let props = loader.load(&PageContext::new()).await;
        assert_eq!(props.prop_name, "posts");
        assert_eq!(props.revalidate, Some(60));
        assert_eq!(
            props.value,
            Some(PageEnvelope {
                data: vec!["a", "b"],
                revalidate_at: fixed_clock(),
            })
        );
    }

    #[tokio::test]
    async fn test_passes_route_id_to_fetcher() {
        let loader = with_page_data(
            |id: Option<String>| async move { Ok::<_, String>(id) },
            "post",
            Some(60),
        );

        let props = loader.load(&PageContext::with_id("5")).await;
        assert_eq!(props.value.unwrap().data, Some("5".to_string()));
    }

    #[tokio::test]
    async fn test_fetcher_failure_yields_null_data_and_no_revalidation() {
        let loader = with_page_data(
            |_id: Option<String>| async { Err::<Vec<u32>, _>("upstream returned 500") },
            "posts",
            Some(60),
        );

        let props = loader.load(&PageContext::new()).await;
        assert!(props.is_empty());
        assert_eq!(props.revalidate, Some(0));
        assert_eq!(
            serde_json::to_value(&props).unwrap(),
            serde_json::json!({ "props": { "posts": null }, "revalidate": 0 })
        );
    }

    #[tokio::test]
    async fn test_bad_route_param_is_swallowed_without_fetching() {
        let calls = Arc::new(AtomicUsize::new(0));
        let counter = calls.clone();
        let loader = with_page_data(
            move |_id: Option<String>| {
                counter.fetch_add(1, Ordering::SeqCst);
                async { Ok::<_, String>(1) }
            },
            "post",
            Some(60),
        );

        let ctx = PageContext::new().with_segments("id", vec!["1".to_string(), "2".to_string()]);
        let props = loader.load(&ctx).await;
        assert!(props.is_empty());
        assert_eq!(props.revalidate, Some(0));
        assert_eq!(calls.load(Ordering::SeqCst), 0);
    }

    #[tokio::test]
    async fn test_without_revalidation() {
        let loader = with_page_data(|_id: Option<String>| async { Ok::<_, String>(1) }, "n", None);
        let props = loader.load(&PageContext::new()).await;
        assert_eq!(props.revalidate, None);
        assert!(!props.is_empty());
    }
}
