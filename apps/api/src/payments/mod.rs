//! Payment verification and subscription plans.

pub mod handlers;
pub mod poller;
pub mod verifier;

use serde::Serialize;

/// A purchasable subscription plan shown on the plans page.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Plan {
    pub id: &'static str,
    pub name: &'static str,
    pub price_cents: i64,
    /// Billing interval, "month" or "year".
    pub interval: &'static str,
    pub features: &'static [&'static str],
}

pub const PLANS: &[Plan] = &[
    Plan {
        id: "free",
        name: "Free",
        price_cents: 0,
        interval: "month",
        features: &["Basic templates", "Unlimited previews"],
    },
    Plan {
        id: "pro-monthly",
        name: "Pro Monthly",
        price_cents: 999,
        interval: "month",
        features: &["All templates", "Premium designs", "Priority support"],
    },
    Plan {
        id: "pro-yearly",
        name: "Pro Yearly",
        price_cents: 7900,
        interval: "year",
        features: &["All templates", "Premium designs", "Priority support"],
    },
];
