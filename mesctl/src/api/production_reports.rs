//! Production reports: good/defect quantities reported against a work order
//! at a station.

use chrono::NaiveDateTime;
use serde::{Deserialize, Serialize};

use crate::client::Client;
use crate::errors::Result;
use crate::types::{FactoryId, Page, ProductionReportId, StationId, WorkOrderId};

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ProductionReport {
    pub id: ProductionReportId,
    pub work_order_id: WorkOrderId,
    pub factory_id: Option<FactoryId>,
    pub station_id: StationId,
    pub good_qty: i64,
    #[serde(default)]
    pub defect_qty: i64,
    /// normal, additional, or rework
    pub report_type: String,
    pub shift: Option<String>,
    pub operator_id: Option<String>,
    pub remark: Option<String>,
    pub created_at: Option<NaiveDateTime>,
}

/// Filters for `GET /production-reports`.
#[derive(Debug, Clone, Default, Serialize)]
pub struct ProductionReportQuery {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub factory_id: Option<FactoryId>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub work_order_id: Option<WorkOrderId>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub station_id: Option<StationId>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub report_type: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub page: Option<i64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub page_size: Option<i64>,
}

/// Payload for `POST /production-reports`.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ProductionReportCreate {
    pub factory_id: FactoryId,
    pub work_order_id: WorkOrderId,
    pub station_id: StationId,
    pub good_qty: i64,
    pub defect_qty: i64,
    /// Server defaults to "normal" when omitted.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub report_type: Option<String>,
    /// Server defaults to "day" when omitted.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub shift: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub operator_id: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub remark: Option<String>,
}

impl Client {
    /// `GET /production-reports`
    pub async fn list_production_reports(&self, query: &ProductionReportQuery) -> Result<Page<ProductionReport>> {
        self.get_query("production-reports", query).await
    }

    /// `POST /production-reports`
    pub async fn create_production_report(&self, request: &ProductionReportCreate) -> Result<ProductionReport> {
        self.post("production-reports", request).await
    }
}
