//! Typed resource modules.
//!
//! One module per MES resource: the entity model, its list-query struct,
//! write payloads, and the [`Client`](crate::client::Client) methods for
//! every operation the API exposes. Status-like fields stay open strings so
//! the display lookup can handle codes this crate has never heard of.

pub mod defects;
pub mod inspections;
pub mod inventory;
pub mod plans;
pub mod production_reports;
pub mod work_orders;
