// Event payload: PortfolioRenamedV1.
//
// Purpose
// - Record that an existing portfolio now goes by a different (validated) name.

use crate::core::portfolio::aggregate::PortfolioId;

#[derive(Debug, Clone, serde::Serialize, serde::Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct PortfolioRenamedV1 {
    pub portfolio_id: PortfolioId,
    pub name: String,
}
