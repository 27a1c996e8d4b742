//! Canonical user identifier policy.
//!
//! A user is named by the triple it authenticated with: the scheme (e.g.
//! `OAuth2`, `LDAP`), the provider inside that scheme (e.g. `GitHub`) and the
//! provider-supplied username. The canonical id joins the three with hyphens,
//! preserving case:
//!
//! ```
//! assert_eq!(
//!     cg_core::derive_user_id("OAuth2", "GitHub", "bob"),
//!     "OAuth2-GitHub-bob"
//! );
//! ```
//!
//! Parts are joined without escaping, so distinct triples whose parts contain
//! hyphens can share an id: `("OAuth2", "Git-Hub", "bob")` and
//! `("OAuth2-Git", "Hub", "bob")` both become `OAuth2-Git-Hub-bob`. The
//! format is fixed by the public API; a store rejects the later of two such
//! users as a conflict.
//!
//! Stores use this to assign ids on insert. Lookups always go through the
//! store, which remains the authority for the persisted id.

/// Separator placed between scheme, provider and username
pub const ID_SEPARATOR: char = '-';

/// Derive the canonical id for a `(scheme, provider, username)` triple.
pub fn derive_user_id(scheme: &str, provider: &str, username: &str) -> String {
    let mut id = String::with_capacity(scheme.len() + provider.len() + username.len() + 2);
    id.push_str(scheme);
    id.push(ID_SEPARATOR);
    id.push_str(provider);
    id.push(ID_SEPARATOR);
    id.push_str(username);
    id
}
