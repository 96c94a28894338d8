use serde::{Deserialize, Serialize};

use crate::coerce;

pub const LONG_DESCRIPTION: &str = "This is an amazing item that has a long description";

/// Response type for the root greeting
#[derive(Serialize, Deserialize, utoipa::ToSchema)]
pub struct Greeting {
    pub message: String,
}

/// Model architectures accepted by `/models/{model_name}`
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, utoipa::ToSchema)]
#[serde(rename_all = "lowercase")]
pub enum ModelName {
    Alexnet,
    Resnet,
    Lenet,
}

impl ModelName {
    pub fn message(self) -> &'static str {
        match self {
            ModelName::Alexnet => "Deep Learning FTW!",
            ModelName::Lenet => "LeCNN all the images",
            ModelName::Resnet => "Have some residuals",
        }
    }
}

/// Response type for `/models/{model_name}`
#[derive(Serialize, Deserialize, utoipa::ToSchema)]
pub struct ModelResponse {
    pub model_name: ModelName,
    pub message: String,
}

/// Query parameters for the item list endpoint
///
/// Integers beyond `i64` saturate instead of failing; slicing clamps them anyway.
#[derive(Debug, Deserialize)]
pub struct Pagination {
    #[serde(default, deserialize_with = "coerce::saturating_int")]
    pub skip: i64,
    #[serde(default = "default_limit", deserialize_with = "coerce::saturating_int")]
    pub limit: i64,
}

fn default_limit() -> i64 {
    10
}

/// Entry of the fake item list
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, utoipa::ToSchema)]
pub struct FakeItem {
    pub item_name: String,
}

/// Query parameters shared by the single-item read endpoints
#[derive(Debug, Default, Deserialize)]
pub struct ItemQuery {
    pub q: Option<String>,
    #[serde(default, deserialize_with = "coerce::flag")]
    pub short: bool,
}

impl ItemQuery {
    /// `q` only counts when it carries text.
    pub fn search(&self) -> Option<String> {
        self.q.clone().filter(|q| !q.is_empty())
    }
}

/// Response type for single-item reads
#[derive(Debug, Serialize, Deserialize, utoipa::ToSchema)]
pub struct ItemView {
    pub item_id: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub owner_id: Option<i64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub q: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
}

impl ItemView {
    pub fn new(item_id: String, owner_id: Option<i64>, query: &ItemQuery) -> Self {
        ItemView {
            item_id,
            owner_id,
            q: query.search(),
            description: (!query.short).then(|| LONG_DESCRIPTION.to_string()),
        }
    }
}

/// Query parameters for `/items_r/{item_id}`
#[derive(Debug, Deserialize)]
pub struct RequiredQuery {
    pub needy: String,
}

/// Response type for `/items_r/{item_id}`
#[derive(Debug, Serialize, Deserialize, utoipa::ToSchema)]
pub struct RequiredItem {
    pub item_id: String,
    pub needy: String,
}

/// Request body for the write endpoints
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, utoipa::ToSchema)]
pub struct Item {
    pub name: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    #[serde(deserialize_with = "coerce::number")]
    pub price: f64,
    #[serde(
        default,
        deserialize_with = "coerce::optional_number",
        skip_serializing_if = "Option::is_none"
    )]
    pub tax: Option<f64>,
}

impl Item {
    /// A zero tax counts as no tax.
    pub fn price_with_tax(&self) -> Option<f64> {
        self.tax.filter(|tax| *tax != 0.0).map(|tax| self.price + tax)
    }
}

/// Query parameters for `PUT /items/{item_id}`
#[derive(Debug, Default, Deserialize)]
pub struct UpdateQuery {
    pub q: Option<String>,
}

/// Response type for the write endpoints
#[derive(Debug, Serialize, Deserialize, utoipa::ToSchema)]
pub struct ItemResponse {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub item_id: Option<i64>,
    #[serde(flatten)]
    pub item: Item,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub price_with_tax: Option<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub q: Option<String>,
}
