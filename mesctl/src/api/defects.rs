//! Defect records and their disposition. The list is read-only; defects are
//! raised server-side from inspections and work orders.

use chrono::NaiveDateTime;
use serde::{Deserialize, Serialize};

use crate::client::Client;
use crate::errors::Result;
use crate::types::{DefectId, FactoryId, Page, WorkOrderId};

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Defect {
    pub id: DefectId,
    pub defect_code: Option<String>,
    /// appearance, dimension, function, performance, material, process, other
    pub defect_type: String,
    /// critical, major, minor, observation
    pub severity: String,
    pub status: String,
    pub work_order_id: Option<WorkOrderId>,
    pub batch_id: Option<String>,
    /// rework, repair, scrap, concession, or return once decided.
    pub disposition: Option<String>,
    pub created_at: Option<NaiveDateTime>,
}

/// Filters for `GET /defects`.
#[derive(Debug, Clone, Default, Serialize)]
pub struct DefectQuery {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub factory_id: Option<FactoryId>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub status: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub defect_type: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub severity: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub work_order_id: Option<WorkOrderId>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub batch_id: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub page: Option<i64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub page_size: Option<i64>,
}

/// Payload for `POST /defects/{id}/disposition`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DispositionSubmit {
    pub disposition: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub disposition_qty: Option<i64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub remark: Option<String>,
}

impl Client {
    /// `GET /defects`
    pub async fn list_defects(&self, query: &DefectQuery) -> Result<Page<Defect>> {
        self.get_query("defects", query).await
    }

    /// `POST /defects/{id}/disposition`
    pub async fn submit_defect_disposition(&self, id: &str, request: &DispositionSubmit) -> Result<Defect> {
        self.post(&format!("defects/{id}/disposition"), request).await
    }
}
