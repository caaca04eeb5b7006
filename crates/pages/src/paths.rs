//! Static path enumeration for pre-rendered dynamic routes.

use std::collections::BTreeMap;
use std::future::Future;

use serde::Serialize;

/// Parameters for one pre-rendered route, e.g. `{ "id": "1" }`.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct PathParams {
    pub params: BTreeMap<String, String>,
}

impl PathParams {
    pub fn new(name: impl Into<String>, value: impl Into<String>) -> Self {
        let mut params = BTreeMap::new();
        params.insert(name.into(), value.into());
        Self { params }
    }
}

/// `{ "paths": [...], "fallback": bool }`
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct StaticPaths {
    pub paths: Vec<PathParams>,
    /// Whether routes outside `paths` may be rendered on demand.
    pub fallback: bool,
}

/// Loader produced by [`with_static_paths`].
#[derive(Debug, Clone)]
pub struct StaticPathsLoader<G> {
    generate: G,
    fallback: bool,
}

/// Wraps a path generator. Generator errors propagate.
pub fn with_static_paths<G>(generate: G, fallback: bool) -> StaticPathsLoader<G> {
    StaticPathsLoader { generate, fallback }
}

impl<G> StaticPathsLoader<G> {
    pub async fn load<E, Fut>(&self) -> Result<StaticPaths, E>
    where
        G: Fn() -> Fut,
        Fut: Future<Output = Result<Vec<PathParams>, E>>,
    {
        let paths = (self.generate)().await?;
        Ok(StaticPaths {
            paths,
            fallback: self.fallback,
        })
    }
}
