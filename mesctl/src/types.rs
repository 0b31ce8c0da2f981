//! Common type definitions shared across the client and controllers.
//!
//! This module defines:
//! - Type aliases for entity IDs (WorkOrderId, InspectionId, etc.)
//! - [`Page`]: the `{ items, total }` envelope every list endpoint returns
//! - [`RequestParams`]: the opaque filter/pagination map passed to list calls
//!
//! # ID Types
//!
//! Entity IDs are server-assigned opaque strings wrapped in type aliases:
//!
//! - [`WorkOrderId`]: Work order identifier
//! - [`ProductionReportId`]: Production report identifier
//! - [`InspectionId`]: Inspection record identifier
//! - [`DefectId`]: Defect record identifier
//! - [`PlanId`]: Production plan identifier
//! - [`MaterialId`] / [`WarehouseId`] / [`StationId`] / [`FactoryId`] /
//!   [`ProductId`]: master-data identifiers referenced by the entities above

use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

// Type aliases for IDs
pub type WorkOrderId = String;
pub type ProductionReportId = String;
pub type InspectionId = String;
pub type DefectId = String;
pub type PlanId = String;
pub type MaterialId = String;
pub type WarehouseId = String;
pub type StationId = String;
pub type FactoryId = String;
pub type ProductId = String;

/// Opaque query parameters for list endpoints (filters, pagination).
///
/// Keys are unique and passed through unvalidated; the server owns their
/// meaning. A `BTreeMap` keeps serialization order stable for tests and logs.
pub type RequestParams = BTreeMap<String, String>;

/// The paginated collection envelope returned by every list endpoint.
///
/// `total` is authoritative for pagination and is never recomputed from
/// `items.len()`. Some endpoints echo the requested `page`/`page_size`;
/// others omit them.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Page<T> {
    /// Items in server-defined order. A response without this field decodes
    /// as an empty collection rather than an error.
    #[serde(default = "Vec::new")]
    pub items: Vec<T>,
    /// Total matching records on the server, across all pages.
    pub total: i64,
    /// Requested page number, when the endpoint echoes it.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub page: Option<i64>,
    /// Requested page size, when the endpoint echoes it.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub page_size: Option<i64>,
}

impl<T> Page<T> {
    pub fn new(items: Vec<T>, total: i64) -> Self {
        Self {
            items,
            total,
            page: None,
            page_size: None,
        }
    }
}

impl<T> Default for Page<T> {
    fn default() -> Self {
        Self::new(Vec::new(), 0)
    }
}

/// Server acknowledgement of a lifecycle transition (release, confirm,
/// cancel, ...). Transition endpoints return a partial representation; only
/// the new status is guaranteed to be present.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct StatusTransition {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub id: Option<String>,
    pub status: String,
}
