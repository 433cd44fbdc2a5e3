//! Static category catalog used to label and colour ledger activity.

use serde::Serialize;

/// Categorises ledger activity for reporting and charting.
#[derive(Debug, Clone, Copy, Serialize, PartialEq, Eq)]
pub struct Category {
    pub id: &'static str,
    pub name: &'static str,
    pub icon: &'static str,
    pub color: &'static str,
}

/// Identifier of the catch-all category.
pub const OTHER_CATEGORY_ID: &str = "other";

/// The fixed catalog. Not user-extensible.
pub const DEFAULT_CATEGORIES: [Category; 7] = [
    Category {
        id: "food",
        name: "Alimentação",
        icon: "Utensils",
        color: "#f59e0b",
    },
    Category {
        id: "transport",
        name: "Transporte",
        icon: "Car",
        color: "#3b82f6",
    },
    Category {
        id: "bills",
        name: "Contas",
        icon: "Zap",
        color: "#ef4444",
    },
    Category {
        id: "leisure",
        name: "Lazer",
        icon: "Gamepad2",
        color: "#8b5cf6",
    },
    Category {
        id: "health",
        name: "Saúde",
        icon: "Heart",
        color: "#ec4899",
    },
    Category {
        id: "income",
        name: "Renda",
        icon: "Wallet",
        color: "#10b981",
    },
    Category {
        id: OTHER_CATEGORY_ID,
        name: "Outros",
        icon: "Circle",
        color: "#64748b",
    },
];

/// Looks up a catalog entry by its identifier.
pub fn find_category(id: &str) -> Option<&'static Category> {
    DEFAULT_CATEGORIES.iter().find(|category| category.id == id)
}

/// Returns the display name for `id`, or the raw id when it is not in the catalog.
pub fn category_label(id: &str) -> String {
    find_category(id)
        .map(|category| category.name.to_string())
        .unwrap_or_else(|| id.to_string())
}

/// Returns the chart colour for `id`; unknown ids share the catch-all colour.
pub fn category_color(id: &str) -> &'static str {
    find_category(id)
        .or_else(|| find_category(OTHER_CATEGORY_ID))
        .map(|category| category.color)
        .unwrap_or("#64748b")
}
