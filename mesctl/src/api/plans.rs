//! Production plans: master-schedule entries that eventually release into
//! work orders.

use chrono::{NaiveDate, NaiveDateTime};
use serde::{Deserialize, Serialize};

use crate::client::Client;
use crate::errors::Result;
use crate::types::{FactoryId, Page, PlanId, ProductId, StatusTransition};

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Plan {
    pub id: PlanId,
    pub plan_code: Option<String>,
    pub product_id: ProductId,
    pub quantity: i64,
    pub required_date: Option<NaiveDate>,
    /// vip, a, b, or c
    pub customer_level: Option<String>,
    pub priority: Option<i64>,
    pub status: String,
    pub created_at: Option<NaiveDateTime>,
}

/// Filters for `GET /plans`.
#[derive(Debug, Clone, Default, Serialize)]
pub struct PlanQuery {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub factory_id: Option<FactoryId>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub status: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub product_id: Option<ProductId>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub from_date: Option<NaiveDate>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub to_date: Option<NaiveDate>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub page: Option<i64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub page_size: Option<i64>,
}

/// Payload for `POST /plans`.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct PlanCreate {
    pub factory_id: FactoryId,
    pub product_id: ProductId,
    pub quantity: i64,
    pub required_date: NaiveDate,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub sales_order_id: Option<String>,
    /// Server defaults to "b" when omitted.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub customer_level: Option<String>,
    /// Server defaults to 50 when omitted.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub priority: Option<i64>,
}

/// What `POST /plans` hands back: the assigned id and generated plan code.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PlanCreated {
    pub id: PlanId,
    pub plan_code: String,
    pub status: String,
}

impl Client {
    /// `GET /plans`
    pub async fn list_plans(&self, query: &PlanQuery) -> Result<Page<Plan>> {
        self.get_query("plans", query).await
    }

    /// `POST /plans`
    pub async fn create_plan(&self, request: &PlanCreate) -> Result<PlanCreated> {
        self.post("plans", request).await
    }

    /// `POST /plans/{id}/confirm`
    pub async fn confirm_plan(&self, id: &str) -> Result<StatusTransition> {
        self.post_empty(&format!("plans/{id}/confirm")).await
    }

    /// `POST /plans/{id}/release`
    pub async fn release_plan(&self, id: &str) -> Result<StatusTransition> {
        self.post_empty(&format!("plans/{id}/release")).await
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;
    use wiremock::matchers::{method, path};
    use wiremock::{Mock, MockServer, ResponseTemplate};

    #[test]
    fn test_plan_decodes_with_week_coded_plan_code() {
        let plan: Plan = serde_json::from_value(json!({
            "id": "plan-1",
            "plan_code": "MPS-F1-202609",
            "product_id": "P-100",
            "quantity": 2000,
            "required_date": "2026-03-02",
            "customer_level": "vip",
            "priority": 80,
            "status": "draft",
            "created_at": "2026-02-24T09:00:00"
        }))
        .unwrap();

        assert_eq!(plan.plan_code.as_deref(), Some("MPS-F1-202609"));
        assert_eq!(plan.required_date.unwrap().to_string(), "2026-03-02");
    }

    #[test]
    fn test_create_payload_requires_date_and_skips_defaults() {
        let create = PlanCreate {
            factory_id: "F1".to_string(),
            product_id: "P-100".to_string(),
            quantity: 2000,
            required_date: NaiveDate::from_ymd_opt(2026, 3, 2).unwrap(),
            ..Default::default()
        };
        let encoded = serde_json::to_value(&create).unwrap();
        assert_eq!(encoded["required_date"], "2026-03-02");
        assert!(encoded.get("customer_level").is_none());
        assert!(encoded.get("priority").is_none());
    }

    #[tokio::test]
    async fn test_confirm_posts_to_subresource() {
        let mock_server = MockServer::start().await;
        Mock::given(method("POST"))
            .and(path("/api/v1/plans/plan-1/confirm"))
            .respond_with(ResponseTemplate::new(200).set_body_json(json!({"status": "confirmed"})))
            .expect(1)
            .mount(&mock_server)
            .await;

        let _ = rustls::crypto::aws_lc_rs::default_provider().install_default();
        let client = Client::builder()
            .base_url(url::Url::parse(&mock_server.uri()).unwrap())
            .build();

        let transition = client.confirm_plan("plan-1").await.unwrap();
        assert_eq!(transition.status, "confirmed");
    }
}
