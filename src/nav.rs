//! Role-driven navigation construction
//!
//! The portal menu is assembled from fixed blocks: a common block everyone
//! sees (guests included), a user block, and an admin block, appended in that
//! order. The view layer renders the returned entries as-is and applies no
//! role filtering of its own.

use crate::session::{ROLE_ADMIN, ROLE_USER};
use std::collections::BTreeSet;

/// One item in the rendered navigation menu
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum NavEntry {
    /// A plain link to a route
    Leaf { label: String, target: String },
    /// A collapsible group of entries
    Group {
        label: String,
        children: Vec<NavEntry>,
    },
    /// A non-interactive section heading
    SectionTitle { label: String },
}

impl NavEntry {
    fn leaf(label: &str, target: &str) -> Self {
        NavEntry::Leaf {
            label: label.to_string(),
            target: target.to_string(),
        }
    }

    fn group(label: &str, children: Vec<NavEntry>) -> Self {
        NavEntry::Group {
            label: label.to_string(),
            children,
        }
    }

    fn title(label: &str) -> Self {
        NavEntry::SectionTitle {
            label: label.to_string(),
        }
    }
}

fn common_block() -> Vec<NavEntry> {
    vec![
        NavEntry::leaf("Home", "/home"),
        NavEntry::leaf("About", "/about"),
    ]
}

fn user_block() -> Vec<NavEntry> {
    vec![
        NavEntry::leaf("Dashboard", "/dashboard"),
        NavEntry::group(
            "Inventory",
            vec![
                NavEntry::leaf("Products", "/products"),
                NavEntry::leaf("Categories", "/categories"),
            ],
        ),
    ]
}

fn admin_block() -> Vec<NavEntry> {
    vec![
        NavEntry::title("Administration"),
        NavEntry::group(
            "Access Control",
            vec![
                NavEntry::leaf("Users", "/admin/users"),
                NavEntry::leaf("Roles", "/admin/roles"),
                NavEntry::leaf("Privileges", "/admin/privileges"),
            ],
        ),
    ]
}

/// Build the ordered navigation entries visible to the given role set.
///
/// Pure function of the role set: blocks are additive, each appended at most
/// once, always in common / user / admin order. Returns a fresh value on
/// every call.
pub fn build(roles: &BTreeSet<String>) -> Vec<NavEntry> {
    let mut entries = common_block();

    if roles.contains(ROLE_USER) {
        entries.extend(user_block());
    }
    if roles.contains(ROLE_ADMIN) {
        entries.extend(admin_block());
    }

    entries
}

#[cfg(test)]
mod tests {
    use super::*;

    fn roles(names: &[&str]) -> BTreeSet<String> {
        names.iter().map(|r| r.to_string()).collect()
    }

    fn labels(entries: &[NavEntry]) -> Vec<&str> {
        entries
            .iter()
            .map(|entry| match entry {
                NavEntry::Leaf { label, .. }
                | NavEntry::Group { label, .. }
                | NavEntry::SectionTitle { label } => label.as_str(),
            })
            .collect()
    }

    #[test]
    fn test_no_roles_yields_common_block_only() {
        let entries = build(&BTreeSet::new());

        assert_eq!(labels(&entries), vec!["Home", "About"]);
    }

    #[test]
    fn test_unknown_role_yields_common_block_only() {
        let entries = build(&roles(&["AUDITOR"]));

        assert_eq!(labels(&entries), vec!["Home", "About"]);
    }

    #[test]
    fn test_user_role_appends_user_block() {
        let entries = build(&roles(&[ROLE_USER]));

        assert_eq!(
            labels(&entries),
            vec!["Home", "About", "Dashboard", "Inventory"]
        );
    }

    #[test]
    fn test_admin_role_appends_admin_block_without_user_block() {
        let entries = build(&roles(&[ROLE_ADMIN]));

        assert_eq!(
            labels(&entries),
            vec!["Home", "About", "Administration", "Access Control"]
        );
    }

    #[test]
    fn test_both_roles_append_both_blocks_in_order() {
        let entries = build(&roles(&[ROLE_USER, ROLE_ADMIN]));

        assert_eq!(
            labels(&entries),
            vec![
                "Home",
                "About",
                "Dashboard",
                "Inventory",
                "Administration",
                "Access Control"
            ]
        );

        let dashboard_count = labels(&entries)
            .iter()
            .filter(|label| **label == "Dashboard")
            .count();
        assert_eq!(dashboard_count, 1);
    }

    #[test]
    fn test_group_children_keep_declared_order() {
        let entries = build(&roles(&[ROLE_ADMIN]));

        let access_control = entries
            .iter()
            .find_map(|entry| match entry {
                NavEntry::Group { label, children } if label == "Access Control" => {
                    Some(children)
                }
                _ => None,
            })
            .expect("admin block carries the Access Control group");

        assert_eq!(labels(access_control), vec!["Users", "Roles", "Privileges"]);
    }

    #[test]
    fn test_repeated_calls_produce_equal_output() {
        let role_set = roles(&[ROLE_USER, ROLE_ADMIN]);

        assert_eq!(build(&role_set), build(&role_set));
    }
}
