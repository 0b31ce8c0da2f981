//! Command-line surface.
//!
//! One subcommand tree per resource; verbs mirror the client methods.
//! Create/update bodies are passed as JSON strings and decoded into the typed
//! request structs before anything goes on the wire, so a malformed payload
//! fails locally instead of as a server rejection. List and detail output is
//! pretty-printed JSON on stdout; the dashboard renders a small text summary
//! with human-readable status labels.

use std::sync::Arc;

use anyhow::Context;
use clap::{Parser, Subcommand};
use serde::Serialize;
use serde::de::DeserializeOwned;

use crate::api::defects::{DefectQuery, DispositionSubmit};
use crate::api::inspections::{InspectionCreate, InspectionQuery, InspectionResultSubmit};
use crate::api::inventory::{InventoryQuery, InventoryTransactionQuery};
use crate::api::plans::{PlanCreate, PlanQuery};
use crate::api::production_reports::{ProductionReportCreate, ProductionReportQuery};
use crate::api::work_orders::{WorkOrder, WorkOrderCreate, WorkOrderQuery, WorkOrderSplit, WorkOrderUpdate};
use crate::client::Client;
use crate::config;
use crate::display::{StatusKind, status_display};
use crate::fetch::{EndpointSource, ListController, ListSource};
use crate::types::RequestParams;

#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None, arg_required_else_help = true)]
pub struct Cli {
    #[command(flatten)]
    pub args: config::Args,

    #[command(subcommand)]
    pub command: Option<Command>,
}

#[derive(Subcommand, Debug)]
pub enum Command {
    /// Work order lifecycle and queries
    #[command(subcommand)]
    WorkOrders(WorkOrderCommand),
    /// Shop-floor production reports
    #[command(subcommand)]
    ProductionReports(ProductionReportCommand),
    /// Quality inspections
    #[command(subcommand)]
    Inspections(InspectionCommand),
    /// Defect records and dispositions
    #[command(subcommand)]
    Defects(DefectCommand),
    /// Inventory balances and transaction history
    #[command(subcommand)]
    Inventory(InventoryCommand),
    /// Production plans
    #[command(subcommand)]
    Plans(PlanCommand),
    /// Summary counters over current work orders
    Dashboard,
}

#[derive(Subcommand, Debug)]
pub enum WorkOrderCommand {
    /// List work orders, optionally filtered
    List {
        #[arg(long)]
        factory_id: Option<String>,
        #[arg(long)]
        product_id: Option<String>,
        #[arg(long)]
        status: Option<String>,
        #[arg(long)]
        page: Option<i64>,
        #[arg(long)]
        page_size: Option<i64>,
    },
    /// Show one work order
    Get { id: String },
    /// Create a work order from a JSON body
    Create {
        /// e.g. '{"factory_id":"F1","product_id":"P-100","planned_qty":500}'
        payload: String,
    },
    /// Update mutable fields from a JSON body
    Update { id: String, payload: String },
    /// Carve part of the planned quantity into a new work order
    Split {
        id: String,
        #[arg(long)]
        qty: i64,
        #[arg(long)]
        remark: Option<String>,
    },
    /// Release a pending work order to the shop floor
    Release { id: String },
    /// Start a released work order
    Start { id: String },
    /// Mark a work order completed
    Complete { id: String },
    /// Cancel a work order
    Cancel {
        id: String,
        #[arg(long)]
        reason: Option<String>,
    },
}

#[derive(Subcommand, Debug)]
pub enum ProductionReportCommand {
    /// List production reports, optionally filtered
    List {
        #[arg(long)]
        factory_id: Option<String>,
        #[arg(long)]
        work_order_id: Option<String>,
        #[arg(long)]
        station_id: Option<String>,
        #[arg(long)]
        report_type: Option<String>,
        #[arg(long)]
        page: Option<i64>,
        #[arg(long)]
        page_size: Option<i64>,
    },
    /// Report produced quantities from a JSON body
    Create {
        /// e.g. '{"work_order_id":"wo-1","station_id":"ST-3","good_qty":120,"defect_qty":2}'
        payload: String,
    },
}

#[derive(Subcommand, Debug)]
pub enum InspectionCommand {
    /// List inspections, optionally filtered
    List {
        #[arg(long)]
        factory_id: Option<String>,
        #[arg(long)]
        inspection_type: Option<String>,
        #[arg(long)]
        status: Option<String>,
        #[arg(long)]
        work_order_id: Option<String>,
        #[arg(long)]
        page: Option<i64>,
        #[arg(long)]
        page_size: Option<i64>,
    },
    /// Register an inspection task from a JSON body
    Create { payload: String },
    /// Submit counted results for a pending inspection
    Submit { id: String, payload: String },
}

#[derive(Subcommand, Debug)]
pub enum DefectCommand {
    /// List defects, optionally filtered
    List {
        #[arg(long)]
        factory_id: Option<String>,
        #[arg(long)]
        status: Option<String>,
        #[arg(long)]
        defect_type: Option<String>,
        #[arg(long)]
        severity: Option<String>,
        #[arg(long)]
        work_order_id: Option<String>,
        #[arg(long)]
        batch_id: Option<String>,
        #[arg(long)]
        page: Option<i64>,
        #[arg(long)]
        page_size: Option<i64>,
    },
    /// Submit a disposition decision for a defect
    Disposition { id: String, payload: String },
}

#[derive(Subcommand, Debug)]
pub enum InventoryCommand {
    /// List inventory balances, optionally filtered
    List {
        #[arg(long)]
        factory_id: Option<String>,
        #[arg(long)]
        material_id: Option<String>,
        #[arg(long)]
        warehouse_id: Option<String>,
        #[arg(long)]
        page: Option<i64>,
        #[arg(long)]
        page_size: Option<i64>,
    },
    /// List inventory transactions, optionally filtered
    Transactions {
        #[arg(long)]
        material_id: Option<String>,
        #[arg(long)]
        warehouse_id: Option<String>,
        #[arg(long)]
        transaction_type: Option<String>,
        /// Inclusive lower bound, YYYY-MM-DD
        #[arg(long)]
        from_date: Option<chrono::NaiveDate>,
        /// Inclusive upper bound, YYYY-MM-DD
        #[arg(long)]
        to_date: Option<chrono::NaiveDate>,
        #[arg(long)]
        page: Option<i64>,
        #[arg(long)]
        page_size: Option<i64>,
    },
}

#[derive(Subcommand, Debug)]
pub enum PlanCommand {
    /// List plans, optionally filtered
    List {
        #[arg(long)]
        factory_id: Option<String>,
        #[arg(long)]
        status: Option<String>,
        #[arg(long)]
        product_id: Option<String>,
        #[arg(long)]
        from_date: Option<chrono::NaiveDate>,
        #[arg(long)]
        to_date: Option<chrono::NaiveDate>,
        #[arg(long)]
        page: Option<i64>,
        #[arg(long)]
        page_size: Option<i64>,
    },
    /// Create a plan from a JSON body
    Create {
        /// e.g. '{"factory_id":"F1","product_id":"P-100","quantity":1000,"required_date":"2026-03-15"}'
        payload: String,
    },
    /// Confirm a draft plan
    Confirm { id: String },
    /// Release a confirmed plan to execution
    Release { id: String },
}

/// Execute one parsed command against the client.
pub async fn run(command: Command, client: &Client) -> anyhow::Result<()> {
    match command {
        Command::WorkOrders(command) => run_work_orders(command, client).await,
        Command::ProductionReports(command) => run_production_reports(command, client).await,
        Command::Inspections(command) => run_inspections(command, client).await,
        Command::Defects(command) => run_defects(command, client).await,
        Command::Inventory(command) => run_inventory(command, client).await,
        Command::Plans(command) => run_plans(command, client).await,
        Command::Dashboard => run_dashboard(client).await,
    }
}

async fn run_work_orders(command: WorkOrderCommand, client: &Client) -> anyhow::Result<()> {
    match command {
        WorkOrderCommand::List {
            factory_id,
            product_id,
            status,
            page,
            page_size,
        } => {
            let query = WorkOrderQuery {
                factory_id,
                product_id,
                status,
                page,
                page_size,
            };
            print_json(&client.list_work_orders(&query).await?)
        }
        WorkOrderCommand::Get { id } => print_json(&client.get_work_order(&id).await?),
        WorkOrderCommand::Create { payload } => {
            let request: WorkOrderCreate = parse_payload(&payload)?;
            print_json(&client.create_work_order(&request).await?)
        }
        WorkOrderCommand::Update { id, payload } => {
            let request: WorkOrderUpdate = parse_payload(&payload)?;
            print_json(&client.update_work_order(&id, &request).await?)
        }
        WorkOrderCommand::Split { id, qty, remark } => {
            let request = WorkOrderSplit {
                split_qty: qty,
                remark,
            };
            print_json(&client.split_work_order(&id, &request).await?)
        }
        WorkOrderCommand::Release { id } => print_json(&client.release_work_order(&id).await?),
        WorkOrderCommand::Start { id } => print_json(&client.start_work_order(&id).await?),
        WorkOrderCommand::Complete { id } => print_json(&client.complete_work_order(&id).await?),
        WorkOrderCommand::Cancel { id, reason } => {
            print_json(&client.cancel_work_order(&id, reason.as_deref()).await?)
        }
    }
}

async fn run_production_reports(command: ProductionReportCommand, client: &Client) -> anyhow::Result<()> {
    match command {
        ProductionReportCommand::List {
            factory_id,
            work_order_id,
            station_id,
            report_type,
            page,
            page_size,
        } => {
            let query = ProductionReportQuery {
                factory_id,
                work_order_id,
                station_id,
                report_type,
                page,
                page_size,
            };
            print_json(&client.list_production_reports(&query).await?)
        }
        ProductionReportCommand::Create { payload } => {
            let request: ProductionReportCreate = parse_payload(&payload)?;
            print_json(&client.create_production_report(&request).await?)
        }
    }
}

async fn run_inspections(command: InspectionCommand, client: &Client) -> anyhow::Result<()> {
    match command {
        InspectionCommand::List {
            factory_id,
            inspection_type,
            status,
            work_order_id,
            page,
            page_size,
        } => {
            let query = InspectionQuery {
                factory_id,
                inspection_type,
                status,
                work_order_id,
                page,
                page_size,
            };
            print_json(&client.list_inspections(&query).await?)
        }
        InspectionCommand::Create { payload } => {
            let request: InspectionCreate = parse_payload(&payload)?;
            print_json(&client.create_inspection(&request).await?)
        }
        InspectionCommand::Submit { id, payload } => {
            let request: InspectionResultSubmit = parse_payload(&payload)?;
            print_json(&client.submit_inspection_result(&id, &request).await?)
        }
    }
}

async fn run_defects(command: DefectCommand, client: &Client) -> anyhow::Result<()> {
    match command {
        DefectCommand::List {
            factory_id,
            status,
            defect_type,
            severity,
            work_order_id,
            batch_id,
            page,
            page_size,
        } => {
            let query = DefectQuery {
                factory_id,
                status,
                defect_type,
                severity,
                work_order_id,
                batch_id,
                page,
                page_size,
            };
            print_json(&client.list_defects(&query).await?)
        }
        DefectCommand::Disposition { id, payload } => {
            let request: DispositionSubmit = parse_payload(&payload)?;
            print_json(&client.submit_defect_disposition(&id, &request).await?)
        }
    }
}

async fn run_inventory(command: InventoryCommand, client: &Client) -> anyhow::Result<()> {
    match command {
        InventoryCommand::List {
            factory_id,
            material_id,
            warehouse_id,
            page,
            page_size,
        } => {
            let query = InventoryQuery {
                factory_id,
                material_id,
                warehouse_id,
                page,
                page_size,
            };
            print_json(&client.list_inventory(&query).await?)
        }
        InventoryCommand::Transactions {
            material_id,
            warehouse_id,
            transaction_type,
            from_date,
            to_date,
            page,
            page_size,
        } => {
            let query = InventoryTransactionQuery {
                material_id,
                warehouse_id,
                transaction_type,
                from_date,
                to_date,
                page,
                page_size,
            };
            print_json(&client.list_inventory_transactions(&query).await?)
        }
    }
}

async fn run_plans(command: PlanCommand, client: &Client) -> anyhow::Result<()> {
    match command {
        PlanCommand::List {
            factory_id,
            status,
            product_id,
            from_date,
            to_date,
            page,
            page_size,
        } => {
            let query = PlanQuery {
                factory_id,
                status,
                product_id,
                from_date,
                to_date,
                page,
                page_size,
            };
            print_json(&client.list_plans(&query).await?)
        }
        PlanCommand::Create { payload } => {
            let request: PlanCreate = parse_payload(&payload)?;
            print_json(&client.create_plan(&request).await?)
        }
        PlanCommand::Confirm { id } => print_json(&client.confirm_plan(&id).await?),
        PlanCommand::Release { id } => print_json(&client.release_plan(&id).await?),
    }
}

#[derive(Debug, Clone, Default)]
struct DashboardStats {
    active_orders: usize,
}

// The server exposes no aggregate endpoints; only the active-order count is
// derived from data, the rest are placeholders.
const YIELD_RATE_PERCENT: f64 = 98.5;

async fn run_dashboard(client: &Client) -> anyhow::Result<()> {
    let mut params = RequestParams::new();
    params.insert("limit".to_string(), "10".to_string());

    let source: Arc<dyn ListSource<WorkOrder>> =
        Arc::new(EndpointSource::new(client.clone(), "work-orders"));
    let controller = ListController::new(source, params, |items: &[WorkOrder]| DashboardStats {
        active_orders: items.iter().filter(|wo| wo.status == "in_progress").count(),
    });

    controller.refresh().await;
    let state = controller.state().await;
    if let Some(error) = &state.error {
        anyhow::bail!("Dashboard fetch failed: {error}");
    }

    println!("Production dashboard");
    println!("  Today output:    0 pcs");
    println!("  Yield rate:      {YIELD_RATE_PERCENT} %");
    println!("  Active orders:   {}", state.stats.active_orders);
    println!("  Pending defects: 0");
    println!();
    println!(
        "{:<22} {:<14} {:<10} {:>10} {:>10}",
        "CODE", "STATUS", "PRIORITY", "PLANNED", "COMPLETED"
    );
    for wo in &state.items {
        let status = status_display(StatusKind::WorkOrderStatus, &wo.status);
        let priority = status_display(StatusKind::WorkOrderPriority, &wo.priority);
        println!(
            "{:<22} {:<14} {:<10} {:>10} {:>10}",
            wo.work_order_code, status.label, priority.label, wo.planned_qty, wo.completed_qty
        );
    }

    Ok(())
}

fn parse_payload<T: DeserializeOwned>(payload: &str) -> anyhow::Result<T> {
    serde_json::from_str(payload).context("Invalid JSON payload")
}

fn print_json<T: Serialize>(value: &T) -> anyhow::Result<()> {
    println!("{}", serde_json::to_string_pretty(value)?);
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::CommandFactory;

    #[test]
    fn test_cli_structure_is_valid() {
        Cli::command().debug_assert();
    }

    #[test]
    fn test_parses_work_order_list_filters() {
        let cli = Cli::parse_from([
            "mesctl",
            "work-orders",
            "list",
            "--status",
            "in_progress",
            "--page-size",
            "10",
        ]);
        match cli.command {
            Some(Command::WorkOrders(WorkOrderCommand::List { status, page_size, factory_id, .. })) => {
                assert_eq!(status.as_deref(), Some("in_progress"));
                assert_eq!(page_size, Some(10));
                assert!(factory_id.is_none());
            }
            other => panic!("unexpected parse: {other:?}"),
        }
    }

    #[test]
    fn test_parses_cancel_with_reason() {
        let cli = Cli::parse_from([
            "mesctl",
            "work-orders",
            "cancel",
            "wo-1",
            "--reason",
            "material shortage",
        ]);
        match cli.command {
            Some(Command::WorkOrders(WorkOrderCommand::Cancel { id, reason })) => {
                assert_eq!(id, "wo-1");
                assert_eq!(reason.as_deref(), Some("material shortage"));
            }
            other => panic!("unexpected parse: {other:?}"),
        }
    }

    #[test]
    fn test_parses_transaction_date_bounds() {
        let cli = Cli::parse_from([
            "mesctl",
            "inventory",
            "transactions",
            "--from-date",
            "2026-02-01",
            "--to-date",
            "2026-02-28",
        ]);
        match cli.command {
            Some(Command::Inventory(InventoryCommand::Transactions { from_date, to_date, .. })) => {
                assert_eq!(from_date.unwrap().to_string(), "2026-02-01");
                assert_eq!(to_date.unwrap().to_string(), "2026-02-28");
            }
            other => panic!("unexpected parse: {other:?}"),
        }
    }

    #[test]
    fn test_config_args_flatten_alongside_subcommands() {
        let cli = Cli::parse_from(["mesctl", "-f", "/etc/mesctl.yaml", "dashboard"]);
        assert_eq!(cli.args.config, "/etc/mesctl.yaml");
        assert!(matches!(cli.command, Some(Command::Dashboard)));
    }
}
