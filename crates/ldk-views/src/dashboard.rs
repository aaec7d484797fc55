//! Dashboard page: static overview cards.
//!
//! The stat values are fixed placeholders; no aggregate endpoints exist to
//! back them.

use serde::Serialize;

/// One overview card.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct StatCard {
    pub title: &'static str,
    pub value: &'static str,
}

/// Controller for the Dashboard page. Holds no transport and no mutable
/// state.
#[derive(Debug, Default, Clone, Copy)]
pub struct DashboardView;

impl DashboardView {
    pub const STAT_CARDS: [StatCard; 4] = [
        StatCard {
            title: "User Activities",
            value: "120",
        },
        StatCard {
            title: "Analytics Events",
            value: "85",
        },
        StatCard {
            title: "Active Sessions",
            value: "32",
        },
        StatCard {
            title: "Audit Logs",
            value: "214",
        },
    ];

    pub const WELCOME: &'static str = "This dashboard provides an overview of your system's \
        activity. You can manage user activities, view analytics, monitor sessions, check audit \
        logs, and import user data.";

    #[must_use]
    pub const fn stat_cards() -> &'static [StatCard] {
        &Self::STAT_CARDS
    }
}

#[cfg(test)]
mod tests {
    use super::DashboardView;

    #[test]
    fn four_cards_with_fixed_values() {
        let cards = DashboardView::stat_cards();
        assert_eq!(cards.len(), 4);
        assert_eq!(cards[0].title, "User Activities");
        assert_eq!(cards[0].value, "120");
        assert_eq!(cards[3].value, "214");
    }
}
