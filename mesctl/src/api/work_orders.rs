//! Work orders: the production jobs everything else hangs off.
//!
//! Covers the full lifecycle: create, update, split, and the transition
//! endpoints (release, start, complete, cancel). List filtering is by
//! factory, product, and status.

use chrono::NaiveDateTime;
use serde::{Deserialize, Serialize};

use crate::client::Client;
use crate::errors::Result;
use crate::types::{FactoryId, Page, ProductId, StationId, StatusTransition, WorkOrderId};

/// A production job specifying a product, planned quantity, and progress.
///
/// `status` and `priority` are open strings; render them through
/// [`status_display`](crate::display::status_display) rather than matching
/// exhaustively.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct WorkOrder {
    pub id: WorkOrderId,
    pub work_order_code: String,
    pub factory_id: Option<FactoryId>,
    pub product_id: ProductId,
    pub planned_qty: i64,
    pub unit: Option<String>,
    #[serde(default)]
    pub completed_qty: i64,
    #[serde(default)]
    pub good_qty: i64,
    #[serde(default)]
    pub defect_qty: i64,
    #[serde(default)]
    pub scrap_qty: i64,
    pub status: String,
    pub priority: String,
    pub planned_start: Option<NaiveDateTime>,
    pub planned_due: Option<NaiveDateTime>,
    pub assigned_station_id: Option<StationId>,
    pub remark: Option<String>,
    pub created_at: Option<NaiveDateTime>,
    pub updated_at: Option<NaiveDateTime>,
}

/// Filters for `GET /work-orders`. Absent fields are omitted from the query.
#[derive(Debug, Clone, Default, Serialize)]
pub struct WorkOrderQuery {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub factory_id: Option<FactoryId>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub product_id: Option<ProductId>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub status: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub page: Option<i64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub page_size: Option<i64>,
}

/// Payload for `POST /work-orders`.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct WorkOrderCreate {
    pub factory_id: FactoryId,
    pub product_id: ProductId,
    pub planned_qty: i64,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub planned_due: Option<NaiveDateTime>,
    /// Server defaults to "medium" when omitted.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub priority: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub station_id: Option<StationId>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub bom_version: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub remark: Option<String>,
}

/// Partial update for `PUT /work-orders/{id}`. Only set fields are sent.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct WorkOrderUpdate {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub planned_qty: Option<i64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub planned_due: Option<NaiveDateTime>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub priority: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub station_id: Option<StationId>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub remark: Option<String>,
}

/// Payload for `POST /work-orders/{id}/split`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct WorkOrderSplit {
    /// Quantity carved out of the original order into the new one.
    pub split_qty: i64,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub remark: Option<String>,
}

/// Outcome of a split: the surviving original and the order carved off it.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct WorkOrderSplitOutcome {
    pub original_work_order_id: WorkOrderId,
    pub new_work_order_id: WorkOrderId,
    pub split_qty: i64,
}

impl Client {
    /// `GET /work-orders`
    pub async fn list_work_orders(&self, query: &WorkOrderQuery) -> Result<Page<WorkOrder>> {
        self.get_query("work-orders", query).await
    }

    /// `GET /work-orders/{id}`
    pub async fn get_work_order(&self, id: &str) -> Result<WorkOrder> {
        self.get(&format!("work-orders/{id}")).await
    }

    /// `POST /work-orders`
    pub async fn create_work_order(&self, request: &WorkOrderCreate) -> Result<WorkOrder> {
        self.post("work-orders", request).await
    }

    /// `PUT /work-orders/{id}`
    pub async fn update_work_order(&self, id: &str, request: &WorkOrderUpdate) -> Result<WorkOrder> {
        self.put(&format!("work-orders/{id}"), request).await
    }

    /// `POST /work-orders/{id}/split`
    pub async fn split_work_order(&self, id: &str, request: &WorkOrderSplit) -> Result<WorkOrderSplitOutcome> {
        self.post(&format!("work-orders/{id}/split"), request).await
    }

    /// `POST /work-orders/{id}/release`
    pub async fn release_work_order(&self, id: &str) -> Result<StatusTransition> {
        self.post_empty(&format!("work-orders/{id}/release")).await
    }

    /// `POST /work-orders/{id}/start`
    pub async fn start_work_order(&self, id: &str) -> Result<StatusTransition> {
        self.post_empty(&format!("work-orders/{id}/start")).await
    }

    /// `POST /work-orders/{id}/complete`
    pub async fn complete_work_order(&self, id: &str) -> Result<StatusTransition> {
        self.post_empty(&format!("work-orders/{id}/complete")).await
    }

    /// `POST /work-orders/{id}/cancel`, with the reason passed as a query
    /// parameter the way the server expects it.
    pub async fn cancel_work_order(&self, id: &str, reason: Option<&str>) -> Result<StatusTransition> {
        #[derive(Serialize)]
        struct CancelQuery<'a> {
            #[serde(skip_serializing_if = "Option::is_none")]
            reason: Option<&'a str>,
        }
        self.post_query(&format!("work-orders/{id}/cancel"), &CancelQuery { reason })
            .await
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;
    use wiremock::matchers::{body_json, method, path, query_param};
    use wiremock::{Mock, MockServer, ResponseTemplate};

    fn sample_order_json() -> serde_json::Value {
        json!({
            "id": "wo-1",
            "work_order_code": "WO-F1-20260224-001",
            "factory_id": "F1",
            "product_id": "P-100",
            "planned_qty": 500,
            "unit": "pcs",
            "completed_qty": 120,
            "good_qty": 118,
            "defect_qty": 2,
            "scrap_qty": 0,
            "status": "in_progress",
            "priority": "high",
            "planned_start": "2026-02-24T08:00:00",
            "planned_due": "2026-02-28T18:00:00",
            "assigned_station_id": "ST-3",
            "remark": null,
            "created_at": "2026-02-20T09:30:00",
            "updated_at": "2026-02-24T10:15:00"
        })
    }

    #[test]
    fn test_work_order_decodes_with_missing_progress_counters() {
        // Freshly created orders may omit the progress fields entirely
        let order: WorkOrder = serde_json::from_value(json!({
            "id": "wo-2",
            "work_order_code": "WO-F1-20260224-002",
            "product_id": "P-100",
            "planned_qty": 300,
            "status": "pending",
            "priority": "medium"
        }))
        .unwrap();

        assert_eq!(order.completed_qty, 0);
        assert_eq!(order.good_qty, 0);
        assert!(order.planned_due.is_none());
    }

    #[test]
    fn test_update_payload_omits_unset_fields() {
        let update = WorkOrderUpdate {
            planned_qty: Some(600),
            ..Default::default()
        };
        let body = serde_json::to_string(&update).unwrap();
        assert_eq!(body, r#"{"planned_qty":600}"#);
    }

    #[test]
    fn test_query_omits_unset_filters() {
        let query = WorkOrderQuery {
            status: Some("in_progress".to_string()),
            page_size: Some(10),
            ..Default::default()
        };
        let encoded = serde_json::to_value(&query).unwrap();
        assert_eq!(encoded, json!({"status": "in_progress", "page_size": 10}));
    }

    #[tokio::test]
    async fn test_list_work_orders_hits_versioned_path() {
        let mock_server = MockServer::start().await;
        Mock::given(method("GET"))
            .and(path("/api/v1/work-orders"))
            .and(query_param("status", "in_progress"))
            .respond_with(ResponseTemplate::new(200).set_body_json(json!({
                "items": [sample_order_json()],
                "total": 1,
                "page": 1,
                "page_size": 20
            })))
            .expect(1)
            .mount(&mock_server)
            .await;

        let _ = rustls::crypto::aws_lc_rs::default_provider().install_default();
        let client = Client::builder()
            .base_url(url::Url::parse(&mock_server.uri()).unwrap())
            .build();

        let query = WorkOrderQuery {
            status: Some("in_progress".to_string()),
            ..Default::default()
        };
        let page = client.list_work_orders(&query).await.unwrap();
        assert_eq!(page.total, 1);
        assert_eq!(page.items[0].work_order_code, "WO-F1-20260224-001");
        assert_eq!(page.items[0].planned_start.unwrap().to_string(), "2026-02-24 08:00:00");
    }

    #[tokio::test]
    async fn test_split_posts_to_subresource() {
        let mock_server = MockServer::start().await;
        Mock::given(method("POST"))
            .and(path("/api/v1/work-orders/wo-1/split"))
            .and(body_json(json!({"split_qty": 200})))
            .respond_with(ResponseTemplate::new(200).set_body_json(json!({
                "original_work_order_id": "wo-1",
                "new_work_order_id": "wo-9",
                "split_qty": 200
            })))
            .expect(1)
            .mount(&mock_server)
            .await;

        let _ = rustls::crypto::aws_lc_rs::default_provider().install_default();
        let client = Client::builder()
            .base_url(url::Url::parse(&mock_server.uri()).unwrap())
            .build();

        let outcome = client
            .split_work_order(
                "wo-1",
                &WorkOrderSplit {
                    split_qty: 200,
                    remark: None,
                },
            )
            .await
            .unwrap();
        assert_eq!(outcome.new_work_order_id, "wo-9");
    }

    #[tokio::test]
    async fn test_cancel_sends_reason_as_query_param() {
        let mock_server = MockServer::start().await;
        Mock::given(method("POST"))
            .and(path("/api/v1/work-orders/wo-1/cancel"))
            .and(query_param("reason", "material shortage"))
            .respond_with(ResponseTemplate::new(200).set_body_json(json!({
                "id": "wo-1",
                "status": "cancelled"
            })))
            .expect(1)
            .mount(&mock_server)
            .await;

        let _ = rustls::crypto::aws_lc_rs::default_provider().install_default();
        let client = Client::builder()
            .base_url(url::Url::parse(&mock_server.uri()).unwrap())
            .build();

        let transition = client.cancel_work_order("wo-1", Some("material shortage")).await.unwrap();
        assert_eq!(transition.status, "cancelled");
    }
}
