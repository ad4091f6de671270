//! Atom envelope rendering for the usage family
//!
//! ESPI exposes usage resources as Atom entries whose `<content>` carries
//! the ESPI payload element. Payloads are serialized with quick-xml's
//! serde support; the Atom envelope itself is assembled by hand since its
//! shape is fixed.

use chrono::{DateTime, SecondsFormat, Utc};
use quick_xml::escape::escape;
use serde::Serialize;
use std::fmt::Write;

use crate::domain::resource::derive_id;
use crate::domain::{DomainError, DomainResult, Resource};

pub const ATOM_CONTENT_TYPE: &str = "application/atom+xml";

/// One Atom entry with its pre-serialized ESPI content payload.
pub struct AtomEntry {
    pub id: String,
    pub title: String,
    pub self_href: String,
    pub up_href: String,
    pub published: DateTime<Utc>,
    pub updated: DateTime<Utc>,
    pub content_xml: String,
}

impl AtomEntry {
    /// Build the envelope for a resource; the title falls back to the
    /// resource type name when there is no description.
    pub fn from_resource(resource: &Resource, type_name: &str, content_xml: String) -> Self {
        Self {
            id: resource.urn(),
            title: resource
                .description
                .clone()
                .unwrap_or_else(|| type_name.to_string()),
            self_href: resource.self_href.clone(),
            up_href: resource.up_href.clone(),
            published: resource.published,
            updated: resource.updated,
            content_xml,
        }
    }
}

/// Serialize an ESPI payload struct to its content element.
pub fn payload_xml<T: Serialize>(root: &'static str, value: &T) -> DomainResult<String> {
    let mut out = String::new();
    let ser = quick_xml::se::Serializer::with_root(&mut out, Some(root))
        .map_err(|e| DomainError::InvalidValue(format!("XML serialization failed: {}", e)))?;
    value
        .serialize(ser)
        .map_err(|e| DomainError::InvalidValue(format!("XML serialization failed: {}", e)))?;
    Ok(out)
}

fn rfc3339(t: DateTime<Utc>) -> String {
    t.to_rfc3339_opts(SecondsFormat::Secs, true)
}

fn write_entry(xml: &mut String, entry: &AtomEntry) {
    let _ = writeln!(xml, "  <entry>");
    let _ = writeln!(xml, "    <id>{}</id>", escape(&entry.id));
    let _ = writeln!(
        xml,
        r#"    <link rel="self" href="{}"/>"#,
        escape(&entry.self_href)
    );
    let _ = writeln!(
        xml,
        r#"    <link rel="up" href="{}"/>"#,
        escape(&entry.up_href)
    );
    let _ = writeln!(xml, "    <title>{}</title>", escape(&entry.title));
    let _ = writeln!(xml, "    <published>{}</published>", rfc3339(entry.published));
    let _ = writeln!(xml, "    <updated>{}</updated>", rfc3339(entry.updated));
    // The payload is already well-formed XML; it is embedded verbatim.
    let _ = writeln!(xml, "    <content>{}</content>", entry.content_xml);
    let _ = writeln!(xml, "  </entry>");
}

/// Render one standalone entry document.
pub fn render_entry(entry: &AtomEntry) -> String {
    let mut xml = String::new();
    let _ = writeln!(xml, r#"<?xml version="1.0" encoding="UTF-8"?>"#);
    let _ = writeln!(
        xml,
        r#"<entry xmlns="http://www.w3.org/2005/Atom">"#
    );
    let _ = writeln!(xml, "  <id>{}</id>", escape(&entry.id));
    let _ = writeln!(
        xml,
        r#"  <link rel="self" href="{}"/>"#,
        escape(&entry.self_href)
    );
    let _ = writeln!(
        xml,
        r#"  <link rel="up" href="{}"/>"#,
        escape(&entry.up_href)
    );
    let _ = writeln!(xml, "  <title>{}</title>", escape(&entry.title));
    let _ = writeln!(xml, "  <published>{}</published>", rfc3339(entry.published));
    let _ = writeln!(xml, "  <updated>{}</updated>", rfc3339(entry.updated));
    let _ = writeln!(xml, "  <content>{}</content>", entry.content_xml);
    let _ = write!(xml, "</entry>");
    xml
}

/// Render a feed of entries. An empty collection renders an empty feed,
/// never an error.
pub fn render_feed(title: &str, self_href: &str, entries: &[AtomEntry]) -> String {
    let updated = entries
        .iter()
        .map(|e| e.updated)
        .max()
        .unwrap_or_else(Utc::now);

    let mut xml = String::new();
    let _ = writeln!(xml, r#"<?xml version="1.0" encoding="UTF-8"?>"#);
    let _ = writeln!(xml, r#"<feed xmlns="http://www.w3.org/2005/Atom">"#);
    let _ = writeln!(xml, "  <id>urn:uuid:{}</id>", derive_id(self_href));
    let _ = writeln!(xml, "  <title>{}</title>", escape(title));
    let _ = writeln!(
        xml,
        r#"  <link rel="self" href="{}"/>"#,
        escape(self_href)
    );
    let _ = writeln!(xml, "  <updated>{}</updated>", rfc3339(updated));
    for entry in entries {
        write_entry(&mut xml, entry);
    }
    let _ = write!(xml, "</feed>");
    xml
}

// ── Tests ──────────────────────────────────────────────────────

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    fn resource() -> Resource {
        Resource::from_href(
            "/espi/1_1/resource/UsagePoint/1",
            "/espi/1_1/resource/UsagePoint",
            Some("Front Electric Meter".into()),
            Utc.timestamp_opt(1_700_000_000, 0).unwrap(),
            Utc.timestamp_opt(1_700_000_100, 0).unwrap(),
        )
    }

    #[test]
    fn entry_carries_identity_links_and_content() {
        let r = resource();
        let entry = AtomEntry::from_resource(
            &r,
            "UsagePoint",
            r#"<espi:UsagePoint xmlns:espi="http://naesb.org/espi"/>"#.to_string(),
        );
        let xml = render_entry(&entry);
        assert!(xml.contains(&format!("<id>urn:uuid:{}</id>", r.id)));
        assert!(xml.contains(r#"<link rel="self" href="/espi/1_1/resource/UsagePoint/1"/>"#));
        assert!(xml.contains(r#"<link rel="up" href="/espi/1_1/resource/UsagePoint"/>"#));
        assert!(xml.contains("http://naesb.org/espi"));
        assert!(xml.contains("<title>Front Electric Meter</title>"));
    }

    #[test]
    fn empty_feed_renders_without_entries() {
        let xml = render_feed("UsagePoints", "/espi/1_1/resource/UsagePoint", &[]);
        assert!(xml.starts_with(r#"<?xml version="1.0" encoding="UTF-8"?>"#));
        assert!(xml.contains("<feed"));
        assert!(!xml.contains("<entry>"));
    }

    #[test]
    fn feed_updated_is_latest_entry_timestamp() {
        let r = resource();
        let entry = AtomEntry::from_resource(&r, "UsagePoint", String::new());
        let xml = render_feed("UsagePoints", "/espi/1_1/resource/UsagePoint", &[entry]);
        assert!(xml.contains("<updated>2023-11-14T22:15:00Z</updated>"));
    }
}
