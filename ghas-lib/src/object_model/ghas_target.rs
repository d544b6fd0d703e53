use serde::Serialize;

#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct GhasTarget {
    #[serde(rename = "repo")]
    pub repo: String,
}
