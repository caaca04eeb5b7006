//! Props envelopes in the shape pages consume.

use serde::{ser::SerializeMap, Serialize, Serializer};

/// Fetched data stamped with the moment it was (re)computed.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct PageEnvelope<T> {
    pub data: T,
    pub revalidate_at: String,
}

/// Result of a build-time loader.
///
/// Serializes as `{ "props": { <prop_name>: envelope | null }, "revalidate": n }`.
/// `revalidate` is omitted when the page never revalidates.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StaticProps<T> {
    pub prop_name: String,
    /// `None` when the fetch failed.
    pub value: Option<PageEnvelope<T>>,
    /// Seconds until the page should be recomputed.
    pub revalidate: Option<u32>,
}

impl<T> StaticProps<T> {
    /// The degraded result served when loading failed: `null` data, no caching.
    pub fn empty(prop_name: impl Into<String>) -> Self {
        Self {
            prop_name: prop_name.into(),
            value: None,
            revalidate: Some(0),
        }
    }

    pub fn is_empty(&self) -> bool {
        self.value.is_none()
    }
}

impl<T: Serialize> Serialize for StaticProps<T> {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let len = if self.revalidate.is_some() { 2 } else { 1 };
        let mut map = serializer.serialize_map(Some(len))?;
        map.serialize_entry("props", &Named(&self.prop_name, &self.value))?;
        if let Some(revalidate) = self.revalidate {
            map.serialize_entry("revalidate", &revalidate)?;
        }
        map.end()
    }
}

/// Result of a request-time loader.
///
/// Serializes as `{ "props": { <prop_name>: data } }`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ServerSideProps<T> {
    pub prop_name: String,
    pub data: T,
}

impl<T: Serialize> Serialize for ServerSideProps<T> {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut map = serializer.serialize_map(Some(1))?;
        map.serialize_entry("props", &Named(&self.prop_name, &self.data))?;
        map.end()
    }
}

/// A single-entry map keyed by a runtime name.
struct Named<'a, V>(&'a str, &'a V);

impl<V: Serialize> Serialize for Named<'_, V> {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut map = serializer.serialize_map(Some(1))?;
        map.serialize_entry(self.0, self.1)?;
        map.end()
    }
}

#[cfg(test)]
mod tests {
    use serde_json::json;

    use super::*;

    #[test]
    fn test_static_props_shape() {
        let props = StaticProps {
            prop_name: "recentPosts".to_string(),
            value: Some(PageEnvelope {
                data: vec![1, 2],
                revalidate_at: "Friday, November 22, 2024, 04:35 PM".to_string(),
            }),
            revalidate: Some(60),
        };

        assert_eq!(
            serde_json::to_value(&props).unwrap(),
            json!({
                "props": {
                    "recentPosts": {
                        "data": [1, 2],
                        "revalidateAt": "Friday, November 22, 2024, 04:35 PM"
                    }
                },
                "revalidate": 60
            })
        );
    }

    #[test]
    fn test_empty_static_props_shape() {
        let props: StaticProps<Vec<u32>> = StaticProps::empty("posts");
        assert!(props.is_empty());
        assert_eq!(
            serde_json::to_value(&props).unwrap(),
            json!({ "props": { "posts": null }, "revalidate": 0 })
        );
    }

    #[test]
    fn test_static_props_without_revalidation_omits_key() {
        let props = StaticProps {
            prop_name: "posts".to_string(),
            value: Some(PageEnvelope {
                data: "x",
                revalidate_at: "now".to_string(),
            }),
            revalidate: None,
        };
        let value = serde_json::to_value(&props).unwrap();
        assert!(value.get("revalidate").is_none());
    }

    #[test]
    fn test_server_side_props_shape() {
        let props = ServerSideProps {
            prop_name: "authorPosts".to_string(),
            data: json!({ "author": { "id": 1 }, "posts": [] }),
        };
        assert_eq!(
            serde_json::to_value(&props).unwrap(),
            json!({ "props": { "authorPosts": { "author": { "id": 1 }, "posts": [] } } })
        );
    }
}
