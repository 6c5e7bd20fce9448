//! Template resolution
//!
//! Resolution works on a failure's type chain (most-derived first) and
//! string containment:
//!
//! 1. a key equal to the concrete type name wins outright
//! 2. otherwise every key is scored by the depth of the first ancestor whose
//!    name contains it, and the shallowest wins
//! 3. equal depths go to the key inserted first

use resterror_core::RestError;

use crate::MappingTable;

/// Depth of the first type in `type_chain` whose name contains `key`
///
/// `Some(0)` is the concrete type; `None` means no type in the chain matches.
pub fn depth(key: &str, type_chain: &[&str]) -> Option<usize> {
    type_chain.iter().position(|name| name.contains(key))
}

/// Best matching template for a type chain
///
/// Returns the winning key with its template.
pub fn resolve<'t>(type_chain: &[&str], table: &'t MappingTable) -> Option<(&'t str, &'t RestError)> {
    if table.is_empty() {
        return None;
    }

    let concrete = type_chain.first()?;
    if let Some(exact) = table.get_key_value(concrete) {
        return Some(exact);
    }

    let mut best: Option<(usize, &str, &RestError)> = None;
    for (key, template) in table.iter() {
        if let Some(depth) = depth(key, type_chain)
            && best.is_none_or(|(shallowest, ..)| depth < shallowest)
        {
            best = Some((depth, key, template));
        }
    }

    best.map(|(_, key, template)| (key, template))
}
