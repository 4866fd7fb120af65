//! Tag tree data model
//!
//! The tree lives in an arena owned by [`Document`]; tags reference each
//! other by [`TagId`]. A child link is the owning direction, the parent
//! link is a plain back-reference id never used to drop anything.
//!
//! Attributes and children are kept in ordered `Vec`s rather than maps:
//! duplicate names are legal and lookups are first-match-wins in
//! document order.

/// Opaque handle to a tag in a [`Document`] arena
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct TagId(usize);

/// A name/value pair attached to a tag
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Attribute {
    name: String,
    value: String,
}

impl Attribute {
    /// Create a new attribute
    pub const fn new(name: String, value: String) -> Self {
        Self { name, value }
    }

    /// Get the attribute name
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Get the attribute value
    pub fn value(&self) -> &str {
        &self.value
    }

    /// Replace the attribute value
    pub fn set_value(&mut self, value: String) {
        self.value = value;
    }
}

/// A named node in the parsed tree
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Tag {
    name: String,
    attributes: Vec<Attribute>,
    children: Vec<TagId>,
    parent: Option<TagId>,
}

impl Tag {
    fn new(name: String, parent: Option<TagId>) -> Self {
        Self {
            name,
            attributes: Vec::new(),
            children: Vec::new(),
            parent,
        }
    }

    /// Get the tag name
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Attributes in declaration order
    pub fn attributes(&self) -> &[Attribute] {
        &self.attributes
    }

    /// Children in document order
    pub fn children(&self) -> &[TagId] {
        &self.children
    }

    /// The parent tag, `None` only for the synthetic root
    pub const fn parent(&self) -> Option<TagId> {
        self.parent
    }

    /// Look up an attribute by name, first match wins
    pub fn attribute(&self, name: &str) -> Option<&Attribute> {
        self.attributes.iter().find(|a| a.name == name)
    }
}

/// A parsed markup document: the tag arena plus its synthetic root.
///
/// The root is created up front, named `"root"`, and is the only tag
/// without a parent. Every other tag gets its parent set exactly once,
/// when it is attached as a child.
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Document {
    tags: Vec<Tag>,
}

impl Document {
    /// Create a document holding only the synthetic root
    pub fn new() -> Self {
        Self {
            tags: vec![Tag::new("root".to_string(), None)],
        }
    }

    /// Handle of the synthetic root
    pub const fn root(&self) -> TagId {
        TagId(0)
    }

    /// Look up a tag by id
    pub fn tag(&self, id: TagId) -> Option<&Tag> {
        self.tags.get(id.0)
    }

    /// Append a new named child under `parent`, returning its id
    pub fn add_child(&mut self, parent: TagId, name: String) -> TagId {
        let id = TagId(self.tags.len());
        self.tags.push(Tag::new(name, Some(parent)));
        if let Some(tag) = self.tags.get_mut(parent.0) {
            tag.children.push(id);
        }
        id
    }

    /// Append an attribute to the tag's declaration-ordered list
    pub fn add_attribute(&mut self, id: TagId, name: String, value: String) {
        if let Some(tag) = self.tags.get_mut(id.0) {
            tag.attributes.push(Attribute::new(name, value));
        }
    }

    /// First child of `id` with the given name, in document order
    pub fn child_by_name(&self, id: TagId, name: &str) -> Option<TagId> {
        self.tag(id)?
            .children
            .iter()
            .copied()
            .find(|&child| self.tag(child).is_some_and(|t| t.name == name))
    }

    /// First attribute value with the given name on tag `id`
    pub fn attribute_value(&self, id: TagId, name: &str) -> Option<&str> {
        self.tag(id)?.attribute(name).map(Attribute::value)
    }

    /// Parent of `id`, `None` for the root
    pub fn parent(&self, id: TagId) -> Option<TagId> {
        self.tag(id)?.parent
    }

    /// Nesting depth of `id`: the number of parent ascensions to the root
    pub fn depth(&self, id: TagId) -> usize {
        let mut depth = 0;
        let mut current = id;
        while let Some(parent) = self.parent(current) {
            depth += 1;
            current = parent;
        }
        depth
    }

    /// Number of tags excluding the synthetic root
    pub fn len(&self) -> usize {
        self.tags.len().saturating_sub(1)
    }

    /// Check if the document holds no tags besides the root
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

impl Default for Document {
    fn default() -> Self {
        Self::new()
    }
}
