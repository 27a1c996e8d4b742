use serde::Serialize;

/// Hypermedia links attached to a representation
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ResourceLinks {
    #[serde(rename = "self")]
    pub self_link: String,
}
