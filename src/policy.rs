//! Scheme predicates used by the entity whitelist.
//!
//! The entity index only consults a whitelist when the resource is fetched
//! over a permitted protocol and the site was reached over a supported one.
//! What counts as either is up to the embedding application; [`StandardProtocols`]
//! provides the usual browser answer.

/// Trait for scheme predicates
pub trait ProtocolPolicy: Send + Sync {
    /// Check if a resource may be fetched over `scheme`
    fn is_permitted_resource_protocol(&self, scheme: &str) -> bool;

    /// Check if a page may be navigated to over `scheme`
    fn is_supported_protocol(&self, scheme: &str) -> bool;
}

/// Default scheme predicates.
///
/// Permitted resource schemes start with `http`, `https`, `file` or `data`.
/// Supported navigation schemes are those plus anything starting with `error`.
#[derive(Debug, Clone, Copy, Default)]
pub struct StandardProtocols;

const RESOURCE_SCHEME_PREFIXES: [&str; 4] = ["http", "https", "file", "data"];

impl ProtocolPolicy for StandardProtocols {
    fn is_permitted_resource_protocol(&self, scheme: &str) -> bool {
        RESOURCE_SCHEME_PREFIXES
            .iter()
            .any(|prefix| scheme.starts_with(prefix))
    }

    fn is_supported_protocol(&self, scheme: &str) -> bool {
        self.is_permitted_resource_protocol(scheme) || scheme.starts_with("error")
    }
}
