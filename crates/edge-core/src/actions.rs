//! Quick actions and session-based filtering.
//!
//! Every route config carries a set of quick actions for the floating
//! navigator widget. Filtering is the only place the edge looks at who the
//! caller is, and it only ever removes entries; it cannot invent them.

use crate::types::Role;
use serde::Serialize;

// ---------------------------------------------------------------------------
// ActionTarget
// ---------------------------------------------------------------------------

/// Where a quick action navigates. Serialized as the raw route string the
/// widget consumes, with `__BACK__` as the history-back sentinel.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ActionTarget {
    /// Path on the current site.
    Internal(&'static str),
    /// Absolute URL, typically another subdomain.
    External(&'static str),
    /// Navigate back in history.
    Back,
}

pub const BACK_SENTINEL: &str = "__BACK__";

impl ActionTarget {
    pub fn from_route(route: &'static str) -> Self {
        if route == BACK_SENTINEL {
            ActionTarget::Back
        } else if route.starts_with("http://") || route.starts_with("https://") {
            ActionTarget::External(route)
        } else {
            ActionTarget::Internal(route)
        }
    }

    pub fn as_route_str(self) -> &'static str {
        match self {
            ActionTarget::Internal(path) => path,
            ActionTarget::External(url) => url,
            ActionTarget::Back => BACK_SENTINEL,
        }
    }

    pub fn is_external(self) -> bool {
        matches!(self, ActionTarget::External(_))
    }
}

impl Serialize for ActionTarget {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: serde::Serializer,
    {
        serializer.serialize_str(self.as_route_str())
    }
}

// ---------------------------------------------------------------------------
// QuickAction
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, Copy, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct QuickAction {
    pub label: &'static str,
    #[serde(rename = "route")]
    pub target: ActionTarget,
    pub icon: &'static str,
    #[serde(skip_serializing_if = "is_false")]
    pub requires_auth: bool,
    #[serde(skip_serializing_if = "no_roles")]
    pub allowed_roles: &'static [Role],
    #[serde(skip_serializing_if = "is_false")]
    pub always_show: bool,
}

fn is_false(v: &bool) -> bool {
    !*v
}

fn no_roles(roles: &&'static [Role]) -> bool {
    roles.is_empty()
}

// ---------------------------------------------------------------------------
// SessionContext
// ---------------------------------------------------------------------------

/// The caller's standing, as asserted by the frontend. `Guest` with
/// `is_authenticated == false` is the state of an anonymous visitor.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SessionContext {
    pub is_authenticated: bool,
    pub role: Role,
}

impl SessionContext {
    pub fn guest() -> Self {
        Self {
            is_authenticated: false,
            role: Role::Guest,
        }
    }

    pub fn authenticated(role: Role) -> Self {
        Self {
            is_authenticated: true,
            role,
        }
    }
}

impl Default for SessionContext {
    fn default() -> Self {
        Self::guest()
    }
}

// ---------------------------------------------------------------------------
// Filtering
// ---------------------------------------------------------------------------

/// Filter a route's quick actions down to what this session may see, with
/// the global navigation actions prepended. Rules, per action:
/// 1. `always_show` wins unconditionally.
/// 2. `requires_auth` drops the action for unauthenticated sessions.
/// 3. A non-empty `allowed_roles` drops the action unless the session's
///    role is listed.
pub fn filter_actions(actions: &[QuickAction], session: &SessionContext) -> Vec<QuickAction> {
    let globals = crate::catalog::CORE_NAVIGATION_ACTIONS;
    let mut out = Vec::with_capacity(globals.len() + actions.len());
    out.extend_from_slice(&globals);
    out.extend(actions.iter().copied().filter(|a| retained(a, session)));
    out
}

fn retained(action: &QuickAction, session: &SessionContext) -> bool {
    if action.always_show {
        return true;
    }
    if action.requires_auth && !session.is_authenticated {
        return false;
    }
    if !action.allowed_roles.is_empty() && !action.allowed_roles.contains(&session.role) {
        return false;
    }
    true
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
