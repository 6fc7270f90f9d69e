//! Config-driven construction of image readers.
//!
//! Configuration blocks are JSON-compliant [`serde_json::Value`] trees. A
//! block selecting an implementation has the shape
//!
//! ```json
//! { "type": "stub", "stub": { "channels": 3 } }
//! ```
//!
//! where `"type"` names a tag registered in an [`ImageReaderRegistry`] and
//! the sibling key of the same name holds that implementation's own
//! parameters. An image-matrix detector's configuration always nests such
//! a block under the reserved [`IMAGE_READER_KEY`]; the registry resolves
//! it into an owned reader before the detector itself is constructed.

use std::collections::HashMap;

use serde_json::{Map, Value};
use thiserror::Error;

use super::reader::ImageReader;

/// Reserved key under which a detector configuration nests its image
/// reader block.
pub const IMAGE_READER_KEY: &str = "image_reader";

/// Key naming the selected implementation inside a reader block.
pub const TYPE_KEY: &str = "type";

/// Error type for configuration resolution.
#[derive(Debug, Error)]
pub enum ConfigError {
    /// The block is not a JSON object.
    #[error("configuration block is not a JSON object")]
    NotAnObject,
    /// A required key is absent (or not a string where one is required).
    #[error("configuration block is missing a {0:?} key")]
    MissingKey(&'static str),
    /// The `type` tag names no registered implementation.
    #[error("no image reader registered under type tag {tag:?} (registered: {registered:?})")]
    UnknownType {
        tag: String,
        registered: Vec<String>,
    },
    /// Implementation parameters failed to deserialize.
    #[error(transparent)]
    Deserialize(#[from] serde_json::Error),
}

/// Construction from, and rendering back to, a JSON configuration block.
pub trait FromConfig: Sized {
    /// Default configuration dictionary for this implementation. JSON
    /// value types only; not guaranteed to be valid for construction
    /// as-is.
    fn default_config() -> Value;

    /// Build an instance from the given configuration.
    fn from_config(config: &Value) -> Result<Self, ConfigError>;

    /// Configuration dictionary that could be passed to `from_config` to
    /// produce an instance with identical configuration.
    fn config(&self) -> Value;
}

/// A resolved constructor returns the owned reader together with the
/// instance's own emitted parameters.
type ReaderCtor = fn(&Value) -> Result<(Box<dyn ImageReader>, Value), ConfigError>;

fn construct<R>(config: &Value) -> Result<(Box<dyn ImageReader>, Value), ConfigError>
where
    R: ImageReader + FromConfig + 'static,
{
    let reader = R::from_config(config)?;
    let emitted = reader.config();
    Ok((Box::new(reader), emitted))
}

/// Mapping from type tags to image reader constructors.
///
/// Populated at process start with every reader implementation available
/// for config-driven selection; resolution is explicit, producing a typed,
/// owned reader.
#[derive(Default)]
pub struct ImageReaderRegistry {
    ctors: HashMap<String, ReaderCtor>,
    defaults: HashMap<String, Value>,
}

impl ImageReaderRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    /// Register a reader implementation under the given type tag,
    /// replacing any previous registration of that tag.
    pub fn register<R>(&mut self, tag: impl Into<String>) -> &mut Self
    where
        R: ImageReader + FromConfig + 'static,
    {
        let tag = tag.into();
        self.defaults.insert(tag.clone(), R::default_config());
        self.ctors.insert(tag, construct::<R>);
        self
    }

    /// Registered type tags, sorted.
    pub fn type_tags(&self) -> Vec<String> {
        let mut tags: Vec<String> = self.ctors.keys().cloned().collect();
        tags.sort_unstable();
        tags
    }

    /// Default reader block covering every registered implementation,
    /// with an unselected (`null`) type tag.
    pub fn default_config(&self) -> Value {
        let mut block = Map::new();
        block.insert(TYPE_KEY.to_owned(), Value::Null);
        for (tag, default) in &self.defaults {
            block.insert(tag.clone(), default.clone());
        }
        Value::Object(block)
    }

    /// Resolve a reader block into an owned reader instance.
    ///
    /// The implementation's parameters are taken from the sibling key
    /// matching the selected tag; an absent sibling means an empty
    /// parameter object.
    pub fn resolve(&self, block: &Value) -> Result<Box<dyn ImageReader>, ConfigError> {
        Ok(self.resolve_described(block)?.0)
    }

    /// Resolve a reader block, also returning the block that would
    /// reconstruct the instance: the selected type tag plus the
    /// constructed reader's own emitted parameters.
    pub fn resolve_described(
        &self,
        block: &Value,
    ) -> Result<(Box<dyn ImageReader>, Value), ConfigError> {
        let obj = block.as_object().ok_or(ConfigError::NotAnObject)?;
        let tag = obj
            .get(TYPE_KEY)
            .and_then(Value::as_str)
            .ok_or(ConfigError::MissingKey(TYPE_KEY))?;
        let ctor = self.ctors.get(tag).ok_or_else(|| ConfigError::UnknownType {
            tag: tag.to_owned(),
            registered: self.type_tags(),
        })?;
        let params = obj
            .get(tag)
            .cloned()
            .unwrap_or_else(|| Value::Object(Map::new()));
        let (reader, emitted) = ctor(&params)?;

        let mut described = Map::new();
        described.insert(TYPE_KEY.to_owned(), Value::String(tag.to_owned()));
        described.insert(tag.to_owned(), emitted);
        Ok((reader, Value::Object(described)))
    }

    /// Nest this registry's default reader block under the reserved
    /// [`IMAGE_READER_KEY`] of a detector configuration.
    pub fn nest_reader_config(&self, detector_config: Value) -> Result<Value, ConfigError> {
        let Value::Object(mut map) = detector_config else {
            return Err(ConfigError::NotAnObject);
        };
        map.insert(IMAGE_READER_KEY.to_owned(), self.default_config());
        Ok(Value::Object(map))
    }

    /// Resolve the reader block nested under the reserved
    /// [`IMAGE_READER_KEY`] of a detector configuration.
    pub fn resolve_reader_config(
        &self,
        detector_config: &Value,
    ) -> Result<Box<dyn ImageReader>, ConfigError> {
        let block = detector_config
            .get(IMAGE_READER_KEY)
            .ok_or(ConfigError::MissingKey(IMAGE_READER_KEY))?;
        self.resolve(block)
    }
}
