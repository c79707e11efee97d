//! Subscription gate — decides template access from live user state.
//!
//! A gated template is never a hard error: selecting one without access is a
//! soft-deny that leaves the current selection unchanged and carries an
//! informational notice.

use serde::Serialize;

use crate::documents::catalog::{find_template, TemplateDescriptor};
use crate::locale::Locale;
use crate::models::user::User;
use crate::models::DocumentKind;

/// Pro access: subscription status must be "active" and the plan name,
/// lowercased with spaces stripped, must contain "pro". Absent subscription
/// denies.
pub fn has_pro_access(user: Option<&User>) -> bool {
    let Some(sub) = user.and_then(|u| u.subscription.as_ref()) else {
        return false;
    };
    let plan: String = sub
        .plan
        .chars()
        .filter(|c| !c.is_whitespace())
        .collect::<String>()
        .to_lowercase();
    sub.status == "active" && plan.contains("pro")
}

#[derive(Debug, Clone, Serialize)]
#[serde(tag = "status", rename_all = "camelCase")]
pub enum TemplateSelection {
    /// Selection accepted; the client switches to this template.
    Selected { template: &'static TemplateDescriptor },
    /// Soft-deny: selection unchanged, notice shown to the user.
    Denied { notice: String },
}

/// Evaluates a template selection against the user's live subscription state.
/// Returns `None` when the id names no descriptor for this document type.
pub fn select_template(
    kind: DocumentKind,
    template_id: &str,
    user: Option<&User>,
    locale: Locale,
) -> Option<TemplateSelection> {
    let template = find_template(kind, template_id)?;
    if template.requires_subscription && !has_pro_access(user) {
        return Some(TemplateSelection::Denied {
            notice: locale.premium_locked_notice().to_string(),
        });
    }
    Some(TemplateSelection::Selected { template })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::user::Subscription;
    use chrono::Utc;
    use uuid::Uuid;

    fn user_with(sub: Option<Subscription>) -> User {
        User {
            id: Uuid::new_v4(),
            email: "u@example.com".into(),
            display_name: None,
            subscription: sub,
            is_admin: false,
            created_at: Utc::now(),
        }
    }

    #[test]
    fn test_no_user_denied() {
        assert!(!has_pro_access(None));
    }

    #[test]
    fn test_no_subscription_denied() {
        assert!(!has_pro_access(Some(&user_with(None))));
    }

    #[test]
    fn test_active_pro_granted() {
        let u = user_with(Some(Subscription {
            status: "active".into(),
            plan: "Pro Monthly".into(),
        }));
        assert!(has_pro_access(Some(&u)));
    }

    #[test]
    fn test_plan_match_is_case_and_space_insensitive() {
        let u = user_with(Some(Subscription {
            status: "active".into(),
            plan: "  PRO  Annual ".into(),
        }));
        assert!(has_pro_access(Some(&u)));
    }

    #[test]
    fn test_inactive_pro_denied() {
        let u = user_with(Some(Subscription {
            status: "canceled".into(),
            plan: "Pro Monthly".into(),
        }));
        assert!(!has_pro_access(Some(&u)));
    }

    #[test]
    fn test_active_non_pro_denied() {
        let u = user_with(Some(Subscription {
            status: "active".into(),
            plan: "Basic".into(),
        }));
        assert!(!has_pro_access(Some(&u)));
    }

    #[test]
    fn test_select_free_template_without_user() {
        let sel = select_template(DocumentKind::Resume, "classic", None, Locale::En).unwrap();
        assert!(matches!(sel, TemplateSelection::Selected { template } if template.id == "classic"));
    }

    #[test]
    fn test_select_gated_template_without_access_is_soft_deny() {
        let u = user_with(None);
        let sel = select_template(DocumentKind::Resume, "executive", Some(&u), Locale::En).unwrap();
        match sel {
            TemplateSelection::Denied { notice } => {
                assert!(notice.contains("Pro"));
            }
            other => panic!("expected soft-deny, got {other:?}"),
        }
    }

    #[test]
    fn test_select_gated_template_with_access() {
        let u = user_with(Some(Subscription {
            status: "active".into(),
            plan: "pro".into(),
        }));
        let sel = select_template(DocumentKind::Resume, "executive", Some(&u), Locale::En).unwrap();
        assert!(matches!(sel, TemplateSelection::Selected { .. }));
    }

    #[test]
    fn test_unknown_template_is_none() {
        assert!(select_template(DocumentKind::Resume, "bogus", None, Locale::En).is_none());
    }
}
