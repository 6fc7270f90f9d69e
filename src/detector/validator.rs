use std::collections::HashSet;

use thiserror::Error;

use crate::element::DataElement;

/// Error type for the detect path.
#[derive(Debug, Clone, Error)]
pub enum DetectError {
    /// The data element's content type is not in the detector's accepted
    /// set. Raised before any detection work begins.
    #[error("content type {actual:?} is not valid for this detector (valid: {valid:?})")]
    InvalidContentType {
        actual: String,
        /// Accepted content types, sorted for stable messages.
        valid: Vec<String>,
    },
}

/// Capability of gating data elements by content type.
///
/// Implementors report the set of MIME types they accept; the provided
/// methods derive membership checks from that set. Specializations may
/// delegate both to a collaborator instead (see
/// [`ImageMatrixObjectDetector`](crate::detector::ImageMatrixObjectDetector)).
pub trait ContentTypeValidator {
    /// Set of MIME types valid within the implementing class' context.
    fn valid_content_types(&self) -> HashSet<String>;

    /// Whether the element's content type is one of the valid types.
    fn is_valid_element(&self, data: &dyn DataElement) -> bool {
        self.valid_content_types()
            .contains(data.content_type())
    }

    /// Fail with [`DetectError::InvalidContentType`] if the element is not
    /// valid for this context.
    fn ensure_valid_element(&self, data: &dyn DataElement) -> Result<(), DetectError> {
        if self.is_valid_element(data) {
            return Ok(());
        }
        let mut valid: Vec<String> = self.valid_content_types().into_iter().collect();
        valid.sort_unstable();
        Err(DetectError::InvalidContentType {
            actual: data.content_type().to_owned(),
            valid,
        })
    }
}
