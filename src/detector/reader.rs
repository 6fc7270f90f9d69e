use ndarray::Array3;

use crate::element::DataElement;

use super::validator::ContentTypeValidator;

/// Decoded image content, height x width x channel.
///
/// Produced per decode call and owned by the caller; the detection layer
/// never caches matrices across calls.
pub type PixelMatrix = Array3<u8>;

/// Capability of decoding a data element into a pixel matrix.
///
/// The reader also defines which content types are decodable at all, via
/// its [`ContentTypeValidator`] supertrait.
pub trait ImageReader: ContentTypeValidator {
    /// Decode the element's content into a pixel matrix.
    ///
    /// Returns `None` when this particular element cannot be decoded
    /// despite a nominally valid content type (truncated file, unsupported
    /// sub-format, ...).
    fn load_as_matrix(&self, data: &dyn DataElement) -> Option<PixelMatrix>;
}

impl std::fmt::Debug for dyn ImageReader + '_ {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ImageReader").finish_non_exhaustive()
    }
}
