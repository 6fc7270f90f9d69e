use std::collections::HashMap;

/// Discrete probability distribution over candidate labels for one
/// detection. Keys are unique; no ordering is implied.
pub type ClassificationMap = HashMap<String, f64>;

/// Classification result held under a derived identifier and a type tag
/// describing the purpose of the classification.
///
/// Instances are only built through a [`ClassificationElementFactory`] and
/// start out empty; `set_classification` populates them.
pub trait ClassificationElement {
    /// Constant tag identifying the purpose or source of this
    /// classification.
    fn type_tag(&self) -> &str;

    /// Derived identifier this element was created under.
    fn uuid(&self) -> &str;

    /// Store the label distribution, returning the populated element.
    fn set_classification(self, map: ClassificationMap) -> Self;

    /// The stored label distribution, if one has been set.
    fn classification(&self) -> Option<&ClassificationMap>;
}

/// Factory for classification elements.
///
/// The concrete element type decides the storage strategy;
/// [`MemoryClassificationElementFactory`](crate::element::MemoryClassificationElementFactory)
/// is the documented memory-resident default a caller may construct at the
/// call site.
pub trait ClassificationElementFactory {
    type Element: ClassificationElement;

    /// Create a new, unpopulated element under the given type tag and
    /// identifier.
    fn new_classification(&self, type_tag: &str, uuid: &str) -> Self::Element;
}
