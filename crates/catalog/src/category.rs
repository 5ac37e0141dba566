use serde::{Deserialize, Serialize};

use vitrine_core::{CategoryId, Entity};

/// Catalog category (static reference data).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Category {
    pub id: CategoryId,
    pub name: String,
    /// Icon token understood by the presentation layer (e.g. `"sofa"`).
    pub icon: String,
}

impl Entity for Category {
    type Id = CategoryId;

    fn id(&self) -> &Self::Id {
        &self.id
    }
}
