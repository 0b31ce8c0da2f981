//! # mesctl: Client and CLI for a Manufacturing Execution System
//!
//! `mesctl` is a typed client for a manufacturing execution system's REST
//! API: work orders, production reporting, quality inspections, defect
//! tracking, inventory, and production plans. It ships as a library plus a
//! thin command-line binary over the same surface.
//!
//! ## Overview
//!
//! Every resource follows the same contract. Requests go through one shared
//! [`Client`] that prefixes paths with `/api/v1`, injects the current bearer
//! token from a swappable [`CredentialStore`], and decodes responses as an
//! explicit step so malformed bodies surface as decode failures rather than
//! transport noise. List endpoints return a [`Page`](types::Page) envelope
//! in which a missing `items` field decodes as an empty collection.
//!
//! Failures follow a fixed notification contract: each failed request emits
//! exactly one human-readable message through the configured
//! [`Notifier`](notifications::Notifier) sink. Server rejections carrying a
//! `detail` field surface that text verbatim; transport failures surface the
//! underlying error message; everything else collapses to a fixed generic
//! string. The typed error is returned to the caller either way, so callers
//! decide control flow while users see one consistent message stream.
//!
//! ### Core Components
//!
//! The **client layer** ([`client`]) owns the HTTP plumbing: base URL, token
//! injection, the decode step, and the notify-once failure path.
//!
//! The **resource modules** ([`api`]) define the entity, query, and request
//! types per resource and hang the typed calls off [`Client`].
//!
//! The **fetch controller** ([`fetch`]) is the list-screen state machine:
//! loading flag, stored items, derived stats, and issue-ordered application
//! of overlapping fetch outcomes so a stale response never clobbers newer
//! data.
//!
//! The **display tables** ([`display`]) map raw status codes to stable
//! (tone, label) pairs, with a total fallback for codes the tables do not
//! know.
//!
//! ## Quick Start
//!
//! ```no_run
//! use clap::Parser;
//! use mesctl::api::work_orders::WorkOrderQuery;
//! use mesctl::{Client, Config};
//!
//! #[tokio::main]
//! async fn main() -> anyhow::Result<()> {
//!     let args = mesctl::config::Args::parse();
//!     let config = Config::load(&args)?;
//!     let client = Client::from_config(&config);
//!
//!     let query = WorkOrderQuery {
//!         status: Some("in_progress".to_string()),
//!         ..Default::default()
//!     };
//!     let page = client.list_work_orders(&query).await?;
//!     for order in &page.items {
//!         println!("{}: {}", order.work_order_code, order.status);
//!     }
//!     Ok(())
//! }
//! ```
//!
//! ## Configuration
//!
//! See the [`config`] module for configuration options.

pub mod api;
pub mod cli;
pub mod client;
pub mod config;
pub mod display;
pub mod errors;
pub mod fetch;
pub mod notifications;
pub mod telemetry;
pub mod types;

pub use client::{Client, CredentialStore};
pub use config::Config;
pub use errors::{Error, GENERIC_FAILURE_MESSAGE, Result};
pub use types::{
    DefectId, FactoryId, InspectionId, MaterialId, Page, PlanId, ProductId, ProductionReportId,
    RequestParams, StationId, WarehouseId, WorkOrderId,
};
