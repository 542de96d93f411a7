#![deny(unsafe_code)]

use std::collections::HashMap;

use backoffice_model::RoleId;
use tracing::debug;

use crate::{AccessDecision, AccessError, AccessRegistry, resolve_access};

/// Memoizes access decisions per role.
///
/// The shell derives a decision once per authenticated session, not per
/// render; this cache keys by role so a role change (re-login) resolves
/// fresh while repeated lookups stay cheap. `invalidate` is called on
/// sign-out.
#[derive(Debug)]
pub struct AccessCache<'r> {
    registry: &'r AccessRegistry,
    decisions: HashMap<RoleId, AccessDecision>,
}

impl<'r> AccessCache<'r> {
    pub fn new(registry: &'r AccessRegistry) -> Self {
        Self {
            registry,
            decisions: HashMap::new(),
        }
    }

    pub fn registry(&self) -> &'r AccessRegistry {
        self.registry
    }

    /// Resolve (or recall) the decision for `role`.
    ///
    /// Unknown roles are not cached: the error propagates each time so the
    /// caller's deny-all policy stays visible at the call site.
    pub fn decision_for(&mut self, role: &RoleId) -> Result<&AccessDecision, AccessError> {
        if !self.decisions.contains_key(role) {
            let decision = resolve_access(self.registry, role)?;
            debug!(role = %role, "caching access decision");
            self.decisions.insert(role.clone(), decision);
        }
        Ok(&self.decisions[role])
    }

    /// Drop all cached decisions (sign-out).
    pub fn invalidate(&mut self) {
        self.decisions.clear();
    }
}
