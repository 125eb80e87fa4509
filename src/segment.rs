//! Path segments of a qualified property name.
//!
//! Property discovery composes qualified names from local names. For
//! children that are not declared properties the local name follows a fixed
//! convention: collection elements render as `$<index>` (zero-based) and map
//! entries render as the key's string form.

use std::fmt;

use crate::errors::{NameError, NameResult};

/// One step of a qualified property name.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum Segment {
    /// A declared property, addressed by its name.
    Property(String),
    /// An element of an iterable, addressed by position.
    Element(usize),
    /// A map entry, addressed by the key's string form.
    Entry(String),
}

impl Segment {
    /// Local name of this segment, as fed to
    /// [`qualified_property_name`](crate::NodeData::qualified_property_name).
    pub fn local_name(&self) -> String {
        match self {
            Segment::Property(name) => name.clone(),
            Segment::Element(index) => format!("${}", index),
            Segment::Entry(key) => key.clone(),
        }
    }
}

impl fmt::Display for Segment {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Segment::Property(name) => f.write_str(name),
            Segment::Element(index) => write!(f, "${}", index),
            Segment::Entry(key) => f.write_str(key),
        }
    }
}

/// Splits a qualified name into its segments.
///
/// `$`-prefixed segments parse as [`Segment::Element`]. A rendered map entry
/// is indistinguishable from a property name, so bare segments always parse
/// as [`Segment::Property`].
pub fn parse_qualified(name: &str) -> NameResult<Vec<Segment>> {
    if name.is_empty() {
        return Err(NameError::EmptyName);
    }

    let mut segments = Vec::new();
    for part in name.split('.') {
        if part.is_empty() {
            return Err(NameError::EmptySegment {
                name: name.to_string(),
            });
        }
        if let Some(index) = part.strip_prefix('$') {
            let index = index
                .parse::<usize>()
                .map_err(|_| NameError::InvalidElementIndex {
                    name: name.to_string(),
                    segment: part.to_string(),
                })?;
            segments.push(Segment::Element(index));
        } else {
            segments.push(Segment::Property(part.to_string()));
        }
    }
    Ok(segments)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_element_renders_with_dollar_prefix() {
        assert_eq!(Segment::Element(0).local_name(), "$0");
        assert_eq!(Segment::Element(12).to_string(), "$12");
    }

    #[test]
    fn test_entry_renders_as_bare_key() {
        assert_eq!(Segment::Entry("region".to_string()).local_name(), "region");
    }

    #[test]
    fn test_rendered_entry_parses_as_property() {
        let name = Segment::Entry("region".to_string()).local_name();
        assert_eq!(
            parse_qualified(&name).unwrap(),
            vec![Segment::Property("region".to_string())]
        );
    }

    #[test]
    fn test_parse_splits_mixed_segments() {
        let segments = parse_qualified("items.$0.name").unwrap();
        assert_eq!(
            segments,
            vec![
                Segment::Property("items".to_string()),
                Segment::Element(0),
                Segment::Property("name".to_string()),
            ]
        );
    }

    #[test]
    fn test_parse_rejects_empty_name() {
        assert_eq!(parse_qualified(""), Err(NameError::EmptyName));
    }

    #[test]
    fn test_parse_rejects_empty_segment() {
        assert_eq!(
            parse_qualified("a..b"),
            Err(NameError::EmptySegment {
                name: "a..b".to_string()
            })
        );
        assert!(parse_qualified(".a").is_err());
        assert!(parse_qualified("a.").is_err());
    }

    #[test]
    fn test_parse_rejects_malformed_element_index() {
        assert!(matches!(
            parse_qualified("items.$x"),
            Err(NameError::InvalidElementIndex { .. })
        ));
        assert!(parse_qualified("items.$").is_err());
    }
}
