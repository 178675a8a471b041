//! Route-guard decisions
//!
//! A pure decision function consulted before rendering any role-restricted
//! view. It reads only the already-resolved session, so it is safe to call on
//! every render pass.

use crate::session::Session;

/// Verdict on whether a protected view may render
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Decision {
    /// The view may render
    Allow,
    /// No authenticated session; send the user to the login screen
    RedirectLogin,
    /// Authenticated but lacking every allowed role
    RedirectForbidden,
}

/// Decide whether a view restricted to `allowed_roles` may render.
///
/// Check order is fixed: authentication first, then role intersection. An
/// empty `allowed_roles` means the view carries no role restriction beyond
/// being logged in.
pub fn decide(session: &Session, allowed_roles: &[&str]) -> Decision {
    if !session.is_authenticated() {
        return Decision::RedirectLogin;
    }

    if allowed_roles.is_empty() || allowed_roles.iter().any(|role| session.has_role(role)) {
        return Decision::Allow;
    }

    Decision::RedirectForbidden
}
