//! Identified resource shape shared by every ESPI entity.
//!
//! Every exposed entity carries the same envelope: a stable UUID identity,
//! optional description, published/updated timestamps and the self/up link
//! pair of its Atom representation. Identity is derived deterministically
//! from the canonical self href (UUID v5 over the URL namespace), so
//! re-deriving from the same URI always yields the same value. Entity
//! equality compares identity only, never the payload fields.

use chrono::{DateTime, Utc};
use uuid::Uuid;

/// Common envelope embedded by every identified resource.
#[derive(Debug, Clone)]
pub struct Resource {
    /// Stable identity, immutable once assigned.
    pub id: Uuid,
    pub description: Option<String>,
    /// Creation timestamp (Atom `published`).
    pub published: DateTime<Utc>,
    /// Last-update timestamp (Atom `updated`).
    pub updated: DateTime<Utc>,
    /// Canonical URI of this resource.
    pub self_href: String,
    /// URI of the parent collection.
    pub up_href: String,
}

impl Resource {
    /// Build a resource envelope whose identity is derived from `self_href`.
    pub fn from_href(
        self_href: impl Into<String>,
        up_href: impl Into<String>,
        description: Option<String>,
        published: DateTime<Utc>,
        updated: DateTime<Utc>,
    ) -> Self {
        let self_href = self_href.into();
        Self {
            id: derive_id(&self_href),
            description,
            published,
            updated,
            self_href,
            up_href: up_href.into(),
        }
    }

    /// URN form used as the Atom entry id.
    pub fn urn(&self) -> String {
        format!("urn:uuid:{}", self.id)
    }
}

/// Derive the stable identity for a canonical resource URI.
///
/// Pure: the same href always maps to the same UUID.
pub fn derive_id(self_href: &str) -> Uuid {
    Uuid::new_v5(&Uuid::NAMESPACE_URL, self_href.as_bytes())
}

/// Implement identity-based equality for an entity embedding a [`Resource`]
/// in a field named `resource`. Two resources of different concrete types
/// can never compare equal; within a type only the identity matters.
macro_rules! impl_identity_eq {
    ($entity:ty) => {
        impl PartialEq for $entity {
            fn eq(&self, other: &Self) -> bool {
                self.resource.id == other.resource.id
            }
        }

        impl Eq for $entity {}

        impl std::hash::Hash for $entity {
            fn hash<H: std::hash::Hasher>(&self, state: &mut H) {
                self.resource.id.hash(state);
            }
        }
    };
}

pub(crate) use impl_identity_eq;

// ── Tests ──────────────────────────────────────────────────────

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn derivation_is_pure() {
        let href = "https://services.greenbuttondata.org/espi/1_1/resource/UsagePoint/1";
        assert_eq!(derive_id(href), derive_id(href));
    }

    #[test]
    fn different_hrefs_yield_different_ids() {
        let a = derive_id("/espi/1_1/resource/UsagePoint/1");
        let b = derive_id("/espi/1_1/resource/UsagePoint/2");
        assert_ne!(a, b);
    }

    #[test]
    fn urn_form() {
        let r = Resource::from_href(
            "/espi/1_1/resource/UsagePoint/1",
            "/espi/1_1/resource/UsagePoint",
            None,
            Utc::now(),
            Utc::now(),
        );
        assert!(r.urn().starts_with("urn:uuid:"));
        assert!(r.urn().ends_with(&r.id.to_string()));
    }
}
