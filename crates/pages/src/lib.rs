//! Page-data loaders.
//!
//! Wraps data fetchers behind the contract pages consume:
//! - [`with_page_data`] fetches at build time, stamps the result with a
//!   revalidation timestamp and degrades any failure to a `null` prop.
//! - [`with_request_page_data`] fetches per request and lets failures
//!   propagate to the host's error handling.
//! - [`with_static_paths`] enumerates the route parameters to pre-render.
//!
//! # Example
//!
//! ```
//! use tinyblog_pages::{with_page_data, PageContext};
//!
//! # tokio_test_block(async {
//! let loader = with_page_data(
//!     |_id: Option<String>| async { Ok::<_, std::io::Error>(vec![1, 2, 3]) },
//!     "posts",
//!     Some(60),
//! );
//!
//! let props = loader.load(&PageContext::new()).await;
//! assert_eq!(props.revalidate, Some(60));
//! assert_eq!(props.value.unwrap().data, vec![1, 2, 3]);
//! # });
//! # fn tokio_test_block<F: std::future::Future>(f: F) {
//! #     tokio::runtime::Builder::new_current_thread().build().unwrap().block_on(f);
//! # }
//! ```

mod context;
mod paths;
mod props;
mod request;
mod static_props;

pub use context::{PageContext, ParamValue};
pub use paths::{with_static_paths, PathParams, StaticPaths, StaticPathsLoader};
pub use props::{PageEnvelope, ServerSideProps, StaticProps};
pub use request::{with_request_page_data, ServerSidePropsLoader};
pub use static_props::{with_page_data, StaticPropsLoader};
