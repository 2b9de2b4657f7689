/// Tenant scope for a single operation. Never persisted.
///
/// A deployment is multi-tenant when the scope is anything other than
/// `Single`; bundle filenames then carry the scope prefix.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TenantScope {
    Single,
    Network,
    Tenant(u64),
}

impl TenantScope {
    /// The canonical filename prefix for this scope.
    pub fn filename_prefix(&self) -> String {
        match self {
            Self::Single => String::new(),
            Self::Network => "network-".to_string(),
            Self::Tenant(id) => format!("tenant{id}-"),
        }
    }

    pub fn is_multi_tenant(&self) -> bool {
        !matches!(self, Self::Single)
    }
}
