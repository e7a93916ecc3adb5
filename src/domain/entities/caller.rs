//! The party invoking a core operation.

/// Who is calling and what they may do.
///
/// Produced by the access policy from request credentials. The core never
/// inspects credentials itself; it only reads these decisions.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Caller {
    /// Opaque identity used as the rate-limit key.
    pub identity: String,
    /// May create short links.
    pub can_create: bool,
    /// May list and delete links.
    pub is_admin: bool,
}

impl Caller {
    /// A caller allowed to create links but not to administer them.
    pub fn creator(identity: impl Into<String>) -> Self {
        Self {
            identity: identity.into(),
            can_create: true,
            is_admin: false,
        }
    }

    /// A caller with every permission.
    pub fn admin(identity: impl Into<String>) -> Self {
        Self {
            identity: identity.into(),
            can_create: true,
            is_admin: true,
        }
    }

    /// A caller with no permissions.
    pub fn anonymous(identity: impl Into<String>) -> Self {
        Self {
            identity: identity.into(),
            can_create: false,
            is_admin: false,
        }
    }
}
