// Event payload: PortfolioOpenedV1.
//
// Purpose
// - Record the business fact that a portfolio was opened.
//
// Versioning and evolution
// - The serialized shape is journaled as `event_data`, so field names are part of the storage contract.

use crate::core::portfolio::aggregate::PortfolioId;

#[derive(Debug, Clone, serde::Serialize, serde::Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct PortfolioOpenedV1 {
    pub portfolio_id: PortfolioId,
}
