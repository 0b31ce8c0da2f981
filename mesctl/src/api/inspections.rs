//! Quality inspections: incoming, in-process, final, and outgoing checks
//! against a material batch, plus result submission.

use chrono::NaiveDateTime;
use serde::{Deserialize, Serialize};

use crate::client::Client;
use crate::errors::Result;
use crate::types::{FactoryId, InspectionId, MaterialId, Page, ProductId, WorkOrderId};

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Inspection {
    pub id: InspectionId,
    /// iqc, ipqc, fqc, or oqc
    pub inspection_type: String,
    pub product_id: Option<ProductId>,
    pub material_id: Option<MaterialId>,
    pub batch_id: Option<String>,
    #[serde(default)]
    pub batch_size: i64,
    pub inspected_qty: Option<i64>,
    pub defective_qty: Option<i64>,
    /// Pass/fail verdict once the result has been submitted.
    pub result: Option<String>,
    pub status: String,
    pub created_at: Option<NaiveDateTime>,
}

/// Filters for `GET /inspections`.
#[derive(Debug, Clone, Default, Serialize)]
pub struct InspectionQuery {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub factory_id: Option<FactoryId>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub inspection_type: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub status: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub work_order_id: Option<WorkOrderId>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub page: Option<i64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub page_size: Option<i64>,
}

/// Payload for `POST /inspections`.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct InspectionCreate {
    pub factory_id: FactoryId,
    pub inspection_type: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub product_id: Option<ProductId>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub material_id: Option<MaterialId>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub batch_id: Option<String>,
    #[serde(default)]
    pub batch_size: i64,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub work_order_id: Option<WorkOrderId>,
    /// AQL sampling strictness; server defaults to 1.0.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub aql_level: Option<f64>,
    /// Server defaults to "general_ii" when omitted.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub inspection_level: Option<String>,
}

/// Payload for `POST /inspections/{id}/submit`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct InspectionResultSubmit {
    pub inspected_qty: i64,
    pub defective_qty: i64,
    /// Free-form defect breakdown forwarded to the server untouched.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub defect_details: Option<serde_json::Value>,
}

impl Client {
    /// `GET /inspections`
    pub async fn list_inspections(&self, query: &InspectionQuery) -> Result<Page<Inspection>> {
        self.get_query("inspections", query).await
    }

    /// `POST /inspections`
    pub async fn create_inspection(&self, request: &InspectionCreate) -> Result<Inspection> {
        self.post("inspections", request).await
    }

    /// `POST /inspections/{id}/submit`
    pub async fn submit_inspection_result(&self, id: &str, request: &InspectionResultSubmit) -> Result<Inspection> {
        self.post(&format!("inspections/{id}/submit"), request).await
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_pending_inspection_decodes_without_result_fields() {
        let inspection: Inspection = serde_json::from_value(json!({
            "id": "insp-1",
            "inspection_type": "iqc",
            "material_id": "M-20",
            "batch_id": "B-0224",
            "batch_size": 1000,
            "status": "pending"
        }))
        .unwrap();

        assert_eq!(inspection.inspection_type, "iqc");
        assert!(inspection.inspected_qty.is_none());
        assert!(inspection.result.is_none());
    }

    #[test]
    fn test_submit_payload_carries_defect_details_verbatim() {
        let submit = InspectionResultSubmit {
            inspected_qty: 200,
            defective_qty: 3,
            defect_details: Some(json!([{"defect_type": "dimension", "qty": 3}])),
        };
        let encoded = serde_json::to_value(&submit).unwrap();
        assert_eq!(encoded["defect_details"][0]["defect_type"], "dimension");
    }

    #[test]
    fn test_create_payload_skips_server_defaults() {
        let create = InspectionCreate {
            factory_id: "F1".to_string(),
            inspection_type: "fqc".to_string(),
            batch_size: 500,
            ..Default::default()
        };
        let encoded = serde_json::to_value(&create).unwrap();
        assert!(encoded.get("aql_level").is_none());
        assert!(encoded.get("inspection_level").is_none());
        assert_eq!(encoded["batch_size"], 500);
    }
}
