//! Mintsoft order status codes and their display styles.
//!
//! Mintsoft reports an order's state as a numeric `OrderStatusId`. The
//! mapping from id to label and badge colors lives in [`STATUS_TABLE`] and
//! nowhere else; [`status_label`] is the only way callers turn an id into
//! something they can show.

use serde::{Deserialize, Serialize};

/// Neutral badge colors for status ids missing from the table.
const UNKNOWN_BACKGROUND: &str = "#e5e7eb";
const UNKNOWN_FOREGROUND: &str = "#6b7280";

/// Order status as reported by Mintsoft.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum OrderStatus {
    New = 1,
    Printed = 2,
    Cancelled = 3,
    Despatched = 4,
    Invoiced = 5,
    InvoiceFailed = 6,
    Holding = 7,
    Failed = 8,
    OnBackorder = 9,
    AwaitingConfirmation = 10,
}

/// One row of the status table.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct StatusStyle {
    /// Mintsoft `OrderStatusId`.
    pub id: i64,
    pub status: OrderStatus,
    pub label: &'static str,
    pub background_color: &'static str,
    pub foreground_color: &'static str,
}

/// Known Mintsoft statuses, ordered by id starting at 1.
pub const STATUS_TABLE: [StatusStyle; 10] = [
    style(1, OrderStatus::New, "NEW", "#e5e7eb", "#1f2937"),
    style(2, OrderStatus::Printed, "PRINTED", "#bfdbfe", "#1e3a8a"),
    style(3, OrderStatus::Cancelled, "CANCELLED", "#fecaca", "#991b1b"),
    style(4, OrderStatus::Despatched, "DESPATCHED", "#bbf7d0", "#065f46"),
    style(5, OrderStatus::Invoiced, "INVOICED", "#ddd6fe", "#5b21b6"),
    style(6, OrderStatus::InvoiceFailed, "INVOICE FAILED", "#fca5a5", "#7f1d1d"),
    style(7, OrderStatus::Holding, "HOLDING", "#fde68a", "#92400e"),
    style(8, OrderStatus::Failed, "FAILED", "#fecaca", "#991b1b"),
    style(9, OrderStatus::OnBackorder, "ON BACKORDER", "#fed7aa", "#9a3412"),
    style(
        10,
        OrderStatus::AwaitingConfirmation,
        "AWAITING CONFIRMATION",
        "#fef3c7",
        "#92400e",
    ),
];

const fn style(
    id: i64,
    status: OrderStatus,
    label: &'static str,
    background_color: &'static str,
    foreground_color: &'static str,
) -> StatusStyle {
    StatusStyle {
        id,
        status,
        label,
        background_color,
        foreground_color,
    }
}

/// Look up the table row for a status id.
fn style_for(id: i64) -> Option<&'static StatusStyle> {
    let index = usize::try_from(id.checked_sub(1)?).ok()?;
    STATUS_TABLE.get(index)
}

impl OrderStatus {
    /// Resolve a Mintsoft `OrderStatusId`.
    #[must_use]
    pub fn from_id(id: i64) -> Option<Self> {
        style_for(id).map(|s| s.status)
    }

    /// The Mintsoft `OrderStatusId` for this status.
    #[must_use]
    pub const fn id(self) -> i64 {
        self as i64
    }

    /// Human-readable label (e.g. `DESPATCHED`).
    #[must_use]
    pub fn label(self) -> &'static str {
        style_for(self.id()).map_or("", |s| s.label)
    }
}

impl std::fmt::Display for OrderStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.label())
    }
}

/// Badge shown for an order's status.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct StatusDisplay {
    pub label: String,
    pub background_color: &'static str,
    pub foreground_color: &'static str,
}

impl StatusDisplay {
    /// Whether this display came from the fallback for an unknown id.
    #[must_use]
    pub fn is_unknown(&self) -> bool {
        self.label.starts_with("Unknown")
    }
}

/// Map a Mintsoft `OrderStatusId` to its badge.
///
/// Never fails: ids outside the table produce `Unknown (ID: <id>)` with
/// neutral colors, since Mintsoft may add statuses at any time.
#[must_use]
pub fn status_label(id: i64) -> StatusDisplay {
    style_for(id).map_or_else(
        || unknown_status(Some(&id.to_string())),
        |s| StatusDisplay {
            label: s.label.to_owned(),
            background_color: s.background_color,
            foreground_color: s.foreground_color,
        },
    )
}

/// Badge for a status code that is not in the table or not a number.
///
/// `code` is the text Mintsoft sent; `None` when it sent nothing.
#[must_use]
pub fn unknown_status(code: Option<&str>) -> StatusDisplay {
    StatusDisplay {
        label: code.map_or_else(|| "Unknown".to_owned(), |code| format!("Unknown (ID: {code})")),
        background_color: UNKNOWN_BACKGROUND,
        foreground_color: UNKNOWN_FOREGROUND,
    }
}
