use sha1::{Digest, Sha1};

use crate::element::BoundingBox;

/// Derive the identifier of a detection from its provenance.
///
/// The identifier is the hex-encoded SHA-1 of the concatenation of:
///
/// 1. the parent data element's uuid (a checksum string),
/// 2. the bounding box vertex components, min vertex then max vertex, each
///    in plain decimal with no separator (`10.0` renders as `"10"`),
/// 3. the classification labels as strings, sorted lexicographically,
///    joined with no separator.
///
/// Sorting the labels makes the identifier invariant to the iteration
/// order of the classification map. The function is pure and total:
/// identical inputs yield an identical identifier across runs and
/// processes.
pub fn detection_uuid<I>(data_uuid: &str, bbox: &BoundingBox, labels: I) -> String
where
    I: IntoIterator,
    I::Item: ToString,
{
    let mut hashable = String::from(data_uuid);
    for component in bbox.min_vertex().iter().chain(bbox.max_vertex()) {
        hashable.push_str(&component.to_string());
    }

    let mut labels: Vec<String> = labels.into_iter().map(|label| label.to_string()).collect();
    labels.sort_unstable();
    for label in &labels {
        hashable.push_str(label);
    }

    hex::encode(Sha1::digest(hashable.as_bytes()))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn unit_box() -> BoundingBox {
        BoundingBox::rect(0.0, 0.0, 10.0, 10.0).unwrap()
    }

    #[test]
    fn test_known_digest() {
        // sha1("abc123" + "001010" + "catdog")
        let uuid = detection_uuid("abc123", &unit_box(), ["cat", "dog"]);
        assert_eq!(uuid, "f0db4c48f4ce9852a2b96ebd991a704f4736b489");
    }

    #[test]
    fn test_known_digest_fractional_coordinates() {
        // sha1("abc123" + "0.50.512.520" + "persontruck")
        let bbox = BoundingBox::rect(0.5, 0.5, 12.5, 20.0).unwrap();
        let uuid = detection_uuid("abc123", &bbox, ["truck", "person"]);
        assert_eq!(uuid, "1d686d4c18915875ea20bb7e60a1a3da57b8262e");
    }

    #[test]
    fn test_label_order_invariance() {
        let bbox = unit_box();
        let a = detection_uuid("abc123", &bbox, ["cat", "dog", "horse"]);
        let b = detection_uuid("abc123", &bbox, ["horse", "cat", "dog"]);
        let c = detection_uuid("abc123", &bbox, ["dog", "horse", "cat"]);
        assert_eq!(a, b);
        assert_eq!(a, c);
    }

    #[test]
    fn test_pure_across_calls() {
        let bbox = unit_box();
        assert_eq!(
            detection_uuid("p", &bbox, ["x"]),
            detection_uuid("p", &bbox, ["x"]),
        );
    }

    #[test]
    fn test_sensitive_to_provenance() {
        let bbox = unit_box();
        assert_ne!(
            detection_uuid("abc123", &bbox, ["cat"]),
            detection_uuid("abc124", &bbox, ["cat"]),
        );
    }

    #[test]
    fn test_sensitive_to_geometry() {
        let a = detection_uuid("p", &unit_box(), ["cat"]);
        let shifted = BoundingBox::rect(0.0, 0.0, 10.0, 11.0).unwrap();
        assert_ne!(a, detection_uuid("p", &shifted, ["cat"]));
    }

    #[test]
    fn test_sensitive_to_label_membership() {
        let bbox = unit_box();
        assert_ne!(
            detection_uuid("p", &bbox, ["cat"]),
            detection_uuid("p", &bbox, ["cat", "dog"]),
        );
    }

    #[test]
    fn test_empty_label_set() {
        // Total over any finite label set, including none at all.
        let uuid = detection_uuid("p", &unit_box(), Vec::<String>::new());
        assert_eq!(uuid.len(), 40);
    }
}
