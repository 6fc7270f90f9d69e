use std::borrow::Cow;

/// Source data a detector reads from.
///
/// Implementations own the storage strategy (in-memory buffer, file, remote
/// blob); the detection layer only reads. The `uuid` is expected to be a
/// checksum of the content, so equal content yields an equal provenance
/// string across processes.
pub trait DataElement {
    /// Stable, content-derived unique identifier for this element.
    fn uuid(&self) -> String;

    /// MIME-style content type label, e.g. `"image/png"`.
    fn content_type(&self) -> &str;

    /// Raw content bytes.
    fn bytes(&self) -> Cow<'_, [u8]>;
}
