use crate::app::ShoeService;
use serde::Serialize;
use utoipa::{IntoParams, ToSchema};

#[derive(Clone)]
pub struct AppState {
    pub shoes: ShoeService,
}

/// Query string of the id-addressed operations.
#[derive(Debug, Default, IntoParams)]
#[into_params(parameter_in = Query)]
pub struct IdQuery {
    /// Application-level shoe id.
    pub id: Option<String>,
}

impl IdQuery {
    /// Builds the query from decoded `key=value` pairs. A repeated `id` keeps its
    /// first value.
    pub fn from_pairs(pairs: Vec<(String, String)>) -> Self {
        let id = pairs
            .into_iter()
            .find(|(key, _)| key == "id")
            .map(|(_, value)| value);
        Self { id }
    }

    /// The id, if present and non-empty.
    pub fn id(&self) -> Option<&str> {
        self.id.as_deref().filter(|id| !id.is_empty())
    }
}

#[derive(Serialize, Debug, ToSchema)]
pub struct HealthResponse {
    pub status: String,
    pub backend: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
}
