//! Status-to-display rendering.
//!
//! One total lookup maps a status code to its display tone and label,
//! parameterized by entity kind. The fallback arm lives here and nowhere
//! else: unknown codes render with the default tone and the raw code as the
//! label, so a server that grows new states never breaks rendering.

/// Semantic display color token, decoupled from any concrete palette.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Tone {
    Default,
    Processing,
    Success,
    Warning,
    Error,
    Red,
    Orange,
}

/// Which fixed status table to consult.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StatusKind {
    WorkOrderStatus,
    WorkOrderPriority,
    ReportType,
    InspectionType,
    InspectionStatus,
    DefectSeverity,
    DefectStatus,
    InventoryStatus,
    PlanStatus,
}

/// What a status code renders as.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StatusDisplay {
    pub tone: Tone,
    pub label: String,
}

/// Map a status code to its display tone and label. Never fails.
pub fn status_display(kind: StatusKind, code: &str) -> StatusDisplay {
    let known = match kind {
        StatusKind::WorkOrderStatus => work_order_status(code),
        StatusKind::WorkOrderPriority => work_order_priority(code),
        StatusKind::ReportType => report_type(code),
        StatusKind::InspectionType => inspection_type(code),
        StatusKind::InspectionStatus => inspection_status(code),
        StatusKind::DefectSeverity => defect_severity(code),
        StatusKind::DefectStatus => defect_status(code),
        StatusKind::InventoryStatus => inventory_status(code),
        StatusKind::PlanStatus => plan_status(code),
    };

    match known {
        Some((tone, label)) => StatusDisplay {
            tone,
            label: label.to_string(),
        },
        None => StatusDisplay {
            tone: Tone::Default,
            label: code.to_string(),
        },
    }
}

fn work_order_status(code: &str) -> Option<(Tone, &'static str)> {
    match code {
        "pending" => Some((Tone::Default, "Pending")),
        "released" => Some((Tone::Processing, "Released")),
        "in_progress" => Some((Tone::Processing, "In Progress")),
        "pending_inbound" => Some((Tone::Warning, "Pending Inbound")),
        "completed" => Some((Tone::Success, "Completed")),
        "cancelled" => Some((Tone::Error, "Cancelled")),
        "on_hold" => Some((Tone::Warning, "On Hold")),
        _ => None,
    }
}

fn work_order_priority(code: &str) -> Option<(Tone, &'static str)> {
    match code {
        "low" => Some((Tone::Default, "Low")),
        "medium" => Some((Tone::Processing, "Medium")),
        "high" => Some((Tone::Orange, "High")),
        "urgent" => Some((Tone::Red, "Urgent")),
        _ => None,
    }
}

fn report_type(code: &str) -> Option<(Tone, &'static str)> {
    match code {
        "normal" => Some((Tone::Default, "Normal")),
        "additional" => Some((Tone::Processing, "Additional")),
        "rework" => Some((Tone::Warning, "Rework")),
        _ => None,
    }
}

fn inspection_type(code: &str) -> Option<(Tone, &'static str)> {
    match code {
        "iqc" => Some((Tone::Default, "Incoming (IQC)")),
        "ipqc" => Some((Tone::Default, "In-Process (IPQC)")),
        "fqc" => Some((Tone::Default, "Final (FQC)")),
        "oqc" => Some((Tone::Default, "Outgoing (OQC)")),
        _ => None,
    }
}

fn inspection_status(code: &str) -> Option<(Tone, &'static str)> {
    match code {
        "pending" => Some((Tone::Default, "Pending")),
        "in_progress" => Some((Tone::Processing, "In Progress")),
        "passed" => Some((Tone::Success, "Passed")),
        "failed" => Some((Tone::Error, "Failed")),
        "rejected" => Some((Tone::Error, "Rejected")),
        _ => None,
    }
}

fn defect_severity(code: &str) -> Option<(Tone, &'static str)> {
    match code {
        "critical" => Some((Tone::Red, "Critical")),
        "major" => Some((Tone::Orange, "Major")),
        "minor" => Some((Tone::Default, "Minor")),
        "observation" => Some((Tone::Default, "Observation")),
        _ => None,
    }
}

fn defect_status(code: &str) -> Option<(Tone, &'static str)> {
    match code {
        "open" => Some((Tone::Error, "Open")),
        "in_progress" => Some((Tone::Processing, "In Progress")),
        "resolved" => Some((Tone::Success, "Resolved")),
        "closed" => Some((Tone::Default, "Closed")),
        "cancelled" => Some((Tone::Default, "Cancelled")),
        _ => None,
    }
}

fn inventory_status(code: &str) -> Option<(Tone, &'static str)> {
    match code {
        "available" => Some((Tone::Success, "Available")),
        "reserved" => Some((Tone::Processing, "Reserved")),
        "qc_hold" => Some((Tone::Warning, "QC Hold")),
        "frozen" => Some((Tone::Error, "Frozen")),
        _ => None,
    }
}

fn plan_status(code: &str) -> Option<(Tone, &'static str)> {
    match code {
        "draft" => Some((Tone::Default, "Draft")),
        "confirmed" => Some((Tone::Processing, "Confirmed")),
        "released" => Some((Tone::Processing, "Released")),
        "in_progress" => Some((Tone::Processing, "In Progress")),
        "completed" => Some((Tone::Success, "Completed")),
        "cancelled" => Some((Tone::Error, "Cancelled")),
        _ => None,
    }
}
