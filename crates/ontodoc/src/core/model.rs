//! Data model for OntoUML JSON exports
//!
//! These types mirror the shape of the export closely enough for
//! documentation purposes. Fields the pipeline requires (`name`, `id`,
//! `owner.id`) are kept optional here and checked where they are used, so a
//! missing key surfaces as [`DocgenError::MalformedData`] rather than as a
//! parse failure.
//!
//! [`DocgenError::MalformedData`]: crate::core::DocgenError::MalformedData

use serde::de::Error as _;
use serde::{Deserialize, Deserializer};
use serde_json::{Map, Value};

use super::{DocgenError, Result};

/// Discriminator value marking a content entry as a package
pub const PACKAGE_TYPE: &str = "Package";

/// Root of an exported project
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
pub struct Document {
    #[serde(default)]
    pub name: Option<String>,
    #[serde(default)]
    pub model: Option<Package>,
    #[serde(default, deserialize_with = "null_as_empty")]
    pub diagrams: Vec<Diagram>,
}

impl Document {
    /// The document title, required for the top-level heading
    pub fn title(&self) -> Result<&str> {
        self.name
            .as_deref()
            .ok_or_else(|| DocgenError::malformed("name", "document"))
    }

    /// Entries of the model's root package, in export order
    pub fn model_contents(&self) -> &[ContentNode] {
        self.model
            .as_ref()
            .map(|model| model.contents.as_slice())
            .unwrap_or(&[])
    }
}

/// A grouping node in the model tree
///
/// Deserialized through [`serde_json::Value`] and assembled with an explicit
/// stack, so nesting depth is bounded by memory rather than the call stack.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Package {
    pub id: Option<String>,
    pub name: Option<String>,
    pub description: Option<String>,
    pub contents: Vec<ContentNode>,
}

impl Package {
    /// Create a package with an id and a name
    pub fn new(id: impl Into<String>, name: impl Into<String>) -> Self {
        Self {
            id: Some(id.into()),
            name: Some(name.into()),
            ..Self::default()
        }
    }

    /// Builder: set the description
    pub fn with_description(mut self, description: impl Into<String>) -> Self {
        self.description = Some(description.into());
        self
    }

    /// Builder: append a content entry
    pub fn with_content(mut self, content: ContentNode) -> Self {
        self.contents.push(content);
        self
    }

    /// The package id, required for diagram lookup
    pub fn require_id(&self) -> Result<&str> {
        self.id.as_deref().ok_or_else(|| {
            let context = match &self.name {
                Some(name) => format!("package '{}'", name),
                None => "package".to_string(),
            };
            DocgenError::malformed("id", context)
        })
    }

    /// The package name, required for its heading
    pub fn require_name(&self) -> Result<&str> {
        self.name.as_deref().ok_or_else(|| {
            let context = match &self.id {
                Some(id) => format!("package '{}'", id),
                None => "package".to_string(),
            };
            DocgenError::malformed("name", context)
        })
    }

    /// Description text if present and non-empty
    pub fn description(&self) -> Option<&str> {
        self.description.as_deref().filter(|d| !d.is_empty())
    }
}

/// An entry in a package's contents
#[derive(Debug, Clone, PartialEq)]
pub enum ContentNode {
    /// A nested package
    Package(Package),
    /// Any other element (class, relation, generalization, ...)
    Other { kind: String },
    /// An entry lacking the `type` discriminator
    Untyped,
}

impl ContentNode {
    /// Create a non-package content entry
    pub fn other(kind: impl Into<String>) -> Self {
        Self::Other { kind: kind.into() }
    }
}

impl<'de> Deserialize<'de> for ContentNode {
    fn deserialize<D>(deserializer: D) -> std::result::Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        match classify(Value::deserialize(deserializer)?) {
            Entry::Package(map) => package_tree(map)
                .map(ContentNode::Package)
                .map_err(D::Error::custom),
            Entry::Leaf(node) => Ok(node),
        }
    }
}

impl<'de> Deserialize<'de> for Package {
    fn deserialize<D>(deserializer: D) -> std::result::Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        match Value::deserialize(deserializer)? {
            Value::Object(map) => package_tree(map).map_err(D::Error::custom),
            other => Err(D::Error::custom(format!(
                "invalid type: {}, expected a package object",
                json_kind(&other)
            ))),
        }
    }
}

impl From<Package> for ContentNode {
    fn from(pkg: Package) -> Self {
        ContentNode::Package(pkg)
    }
}

/// A diagram owned by exactly one package
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
pub struct Diagram {
    #[serde(default)]
    pub id: Option<String>,
    #[serde(default)]
    pub name: Option<String>,
    #[serde(default, deserialize_with = "lenient_text")]
    pub description: Option<String>,
    #[serde(default)]
    pub owner: Option<OwnerRef>,
}

impl Diagram {
    /// Create a diagram owned by the given package id
    pub fn new(id: impl Into<String>, name: impl Into<String>, owner: impl Into<String>) -> Self {
        Self {
            id: Some(id.into()),
            name: Some(name.into()),
            description: None,
            owner: Some(OwnerRef {
                id: Some(owner.into()),
            }),
        }
    }

    /// Builder: set the description
    pub fn with_description(mut self, description: impl Into<String>) -> Self {
        self.description = Some(description.into());
        self
    }

    fn context(&self) -> String {
        match (&self.id, &self.name) {
            (Some(id), _) => format!("diagram '{}'", id),
            (None, Some(name)) => format!("diagram '{}'", name),
            (None, None) => "diagram".to_string(),
        }
    }

    /// The owning package id
    pub fn owner_id(&self) -> Result<&str> {
        self.owner
            .as_ref()
            .and_then(|owner| owner.id.as_deref())
            .ok_or_else(|| DocgenError::malformed("owner.id", self.context()))
    }

    /// The diagram name, required for its heading
    pub fn require_name(&self) -> Result<&str> {
        self.name
            .as_deref()
            .ok_or_else(|| DocgenError::malformed("name", self.context()))
    }

    /// Description text, empty when absent
    pub fn description(&self) -> &str {
        self.description.as_deref().unwrap_or("")
    }
}

/// Reference from a diagram to its owning package
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
pub struct OwnerRef {
    #[serde(default)]
    pub id: Option<String>,
}

fn null_as_empty<'de, D, T>(deserializer: D) -> std::result::Result<Vec<T>, D::Error>
where
    D: Deserializer<'de>,
    T: Deserialize<'de>,
{
    Ok(Option::<Vec<T>>::deserialize(deserializer)?.unwrap_or_default())
}

fn lenient_text<'de, D>(deserializer: D) -> std::result::Result<Option<String>, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(Option::<Value>::deserialize(deserializer)?.and_then(text_value))
}

type BuildResult<T> = std::result::Result<T, String>;

/// A raw content entry sorted by its `type` discriminator
enum Entry {
    Package(Map<String, Value>),
    Leaf(ContentNode),
}

fn classify(value: Value) -> Entry {
    let Value::Object(map) = value else {
        return Entry::Leaf(ContentNode::Untyped);
    };
    match map.get("type") {
        None => return Entry::Leaf(ContentNode::Untyped),
        Some(Value::String(kind)) if kind == PACKAGE_TYPE => {}
        Some(Value::String(kind)) => return Entry::Leaf(ContentNode::other(kind.as_str())),
        Some(other) => return Entry::Leaf(ContentNode::other(other.to_string())),
    }
    Entry::Package(map)
}

/// Build a package subtree without recursing on nested `contents`
fn package_tree(root: Map<String, Value>) -> BuildResult<Package> {
    let (mut current, contents) = package_shell(root)?;
    let mut pending = contents.into_iter();
    let mut stack = Vec::new();

    loop {
        match pending.next() {
            Some(child) => match classify(child) {
                Entry::Package(map) => {
                    let (package, contents) = package_shell(map)?;
                    let parent = std::mem::replace(&mut current, package);
                    let rest = std::mem::replace(&mut pending, contents.into_iter());
                    stack.push((parent, rest));
                }
                Entry::Leaf(node) => current.contents.push(node),
            },
            None => match stack.pop() {
                Some((parent, rest)) => {
                    let done = std::mem::replace(&mut current, parent);
                    current.contents.push(ContentNode::Package(done));
                    pending = rest;
                }
                None => return Ok(current),
            },
        }
    }
}

/// Split a package object into its own fields and its raw contents
fn package_shell(mut map: Map<String, Value>) -> BuildResult<(Package, Vec<Value>)> {
    let contents = match map.remove("contents") {
        None | Some(Value::Null) => Vec::new(),
        Some(Value::Array(items)) => items,
        Some(other) => {
            return Err(format!(
                "invalid type for 'contents': {}, expected an array",
                json_kind(&other)
            ))
        }
    };

    let package = Package {
        id: string_field(&mut map, "id")?,
        name: string_field(&mut map, "name")?,
        description: map.remove("description").and_then(text_value),
        contents: Vec::with_capacity(contents.len()),
    };
    Ok((package, contents))
}

fn string_field(map: &mut Map<String, Value>, key: &str) -> BuildResult<Option<String>> {
    match map.remove(key) {
        None | Some(Value::Null) => Ok(None),
        Some(Value::String(text)) => Ok(Some(text)),
        Some(other) => Err(format!(
            "invalid type for '{}': {}, expected a string",
            key,
            json_kind(&other)
        )),
    }
}

/// Free text; other scalars are kept in their JSON spelling
fn text_value(value: Value) -> Option<String> {
    match value {
        Value::Null => None,
        Value::String(text) => Some(text),
        other => Some(other.to_string()),
    }
}

fn json_kind(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "boolean",
        Value::Number(_) => "number",
        Value::String(_) => "string",
        Value::Array(_) => "array",
        Value::Object(_) => "object",
    }
}
