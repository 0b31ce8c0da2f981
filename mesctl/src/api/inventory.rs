//! Inventory balances and the movement ledger behind them.

use chrono::{NaiveDate, NaiveDateTime};
use serde::{Deserialize, Serialize};

use crate::client::Client;
use crate::errors::Result;
use crate::types::{FactoryId, MaterialId, Page, WarehouseId, WorkOrderId};

/// A material balance within one warehouse.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct InventoryRecord {
    pub material_id: MaterialId,
    pub material_code: Option<String>,
    pub material_name: Option<String>,
    pub warehouse_id: Option<WarehouseId>,
    pub total_qty: i64,
    pub available_qty: i64,
    #[serde(default)]
    pub reserved_qty: i64,
    pub qc_hold_qty: Option<i64>,
    pub frozen_qty: Option<i64>,
    pub status: Option<String>,
}

/// One movement in the inventory ledger.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct InventoryTransaction {
    pub id: String,
    pub transaction_type: String,
    pub material_id: MaterialId,
    pub warehouse_id: Option<WarehouseId>,
    pub quantity: i64,
    pub batch_code: Option<String>,
    pub work_order_id: Option<WorkOrderId>,
    pub created_at: Option<NaiveDateTime>,
}

/// Filters for `GET /inventory`.
#[derive(Debug, Clone, Default, Serialize)]
pub struct InventoryQuery {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub factory_id: Option<FactoryId>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub material_id: Option<MaterialId>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub warehouse_id: Option<WarehouseId>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub page: Option<i64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub page_size: Option<i64>,
}

/// Filters for `GET /inventory/transactions`.
#[derive(Debug, Clone, Default, Serialize)]
pub struct InventoryTransactionQuery {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub material_id: Option<MaterialId>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub warehouse_id: Option<WarehouseId>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub transaction_type: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub from_date: Option<NaiveDate>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub to_date: Option<NaiveDate>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub page: Option<i64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub page_size: Option<i64>,
}

impl Client {
    /// `GET /inventory`
    pub async fn list_inventory(&self, query: &InventoryQuery) -> Result<Page<InventoryRecord>> {
        self.get_query("inventory", query).await
    }

    /// `GET /inventory/transactions`
    pub async fn list_inventory_transactions(
        &self,
        query: &InventoryTransactionQuery,
    ) -> Result<Page<InventoryTransaction>> {
        self.get_query("inventory/transactions", query).await
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_inventory_record_decodes() {
        let record: InventoryRecord = serde_json::from_value(json!({
            "material_id": "M-20",
            "material_code": "MAT-STEEL-01",
            "material_name": "Cold-rolled steel sheet",
            "warehouse_id": "WH-1",
            "total_qty": 1200,
            "available_qty": 900,
            "reserved_qty": 250,
            "qc_hold_qty": 50,
            "frozen_qty": 0,
            "status": "available"
        }))
        .unwrap();

        assert_eq!(record.available_qty, 900);
        assert_eq!(record.qc_hold_qty, Some(50));
    }

    #[test]
    fn test_transaction_date_filters_serialize_as_plain_dates() {
        let query = InventoryTransactionQuery {
            material_id: Some("M-20".to_string()),
            from_date: Some(NaiveDate::from_ymd_opt(2026, 2, 1).unwrap()),
            to_date: Some(NaiveDate::from_ymd_opt(2026, 2, 28).unwrap()),
            ..Default::default()
        };
        let encoded = serde_json::to_value(&query).unwrap();
        assert_eq!(encoded["from_date"], "2026-02-01");
        assert_eq!(encoded["to_date"], "2026-02-28");
    }
}
