//! Markup tree types.

/// One node of a markup tree.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Node {
    /// Character data, escaped on output.
    Text(String),
    /// An element with attributes and children.
    Element(Element),
    /// Transparent group of sibling nodes.
    Fragment(Vec<Node>),
}

impl Node {
    /// Whether the node produces no output at all.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        match self {
            Self::Text(s) => s.is_empty(),
            Self::Element(_) => false,
            Self::Fragment(nodes) => nodes.iter().all(Node::is_empty),
        }
    }

    /// Iterate the elements of this node, looking through fragments.
    pub fn elements(&self) -> Box<dyn Iterator<Item = &Element> + '_> {
        match self {
            Self::Text(_) => Box::new(std::iter::empty()),
            Self::Element(el) => Box::new(std::iter::once(el)),
            Self::Fragment(nodes) => Box::new(nodes.iter().flat_map(Node::elements)),
        }
    }
}

impl From<Element> for Node {
    fn from(el: Element) -> Self {
        Self::Element(el)
    }
}

impl From<String> for Node {
    fn from(s: String) -> Self {
        Self::Text(s)
    }
}

impl From<&str> for Node {
    fn from(s: &str) -> Self {
        Self::Text(s.to_owned())
    }
}

impl From<Vec<Node>> for Node {
    fn from(nodes: Vec<Node>) -> Self {
        Self::Fragment(nodes)
    }
}

impl<T: Into<Node>> From<Option<T>> for Node {
    fn from(node: Option<T>) -> Self {
        node.map_or_else(|| Self::Fragment(Vec::new()), Into::into)
    }
}

macro_rules! impl_from_tuple {
    ($($name:ident),+) => {
        impl<$($name: Into<Node>),+> From<($($name,)+)> for Node {
            #[allow(non_snake_case)]
            fn from(($($name,)+): ($($name,)+)) -> Self {
                Self::Fragment(vec![$($name.into()),+])
            }
        }
    };
}

impl_from_tuple!(A, B);
impl_from_tuple!(A, B, C);
impl_from_tuple!(A, B, C, D);
impl_from_tuple!(A, B, C, D, E);
impl_from_tuple!(A, B, C, D, E, F);

/// Create a text node.
pub fn text(s: impl Into<String>) -> Node {
    Node::Text(s.into())
}

/// Create a fragment from any sequence of nodes.
pub fn fragment<I, N>(nodes: I) -> Node
where
    I: IntoIterator<Item = N>,
    N: Into<Node>,
{
    Node::Fragment(nodes.into_iter().map(Into::into).collect())
}

/// An HTML element.
///
/// Attribute names are unique: setting an existing attribute replaces its
/// value in place, so the serialized order follows first insertion.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Element {
    tag: String,
    attributes: Vec<(String, String)>,
    children: Vec<Node>,
}

impl Element {
    /// Create an element with no attributes and no children.
    pub fn new(tag: impl Into<String>) -> Self {
        Self {
            tag: tag.into(),
            attributes: Vec::new(),
            children: Vec::new(),
        }
    }

    /// Set an attribute.
    #[must_use]
    pub fn attr(mut self, name: impl Into<String>, value: impl Into<String>) -> Self {
        self.set_attr(name, value);
        self
    }

    /// Set the `class` attribute.
    #[must_use]
    pub fn class(self, value: impl Into<String>) -> Self {
        self.attr("class", value)
    }

    /// Set the `id` attribute.
    #[must_use]
    pub fn id(self, value: impl Into<String>) -> Self {
        self.attr("id", value)
    }

    /// Append a child.
    ///
    /// Fragments are flattened one level: their items become direct children.
    #[must_use]
    pub fn child(mut self, child: impl Into<Node>) -> Self {
        self.push(child);
        self
    }

    /// Append every item of `children`, flattening fragments one level.
    #[must_use]
    pub fn children<I, N>(mut self, children: I) -> Self
    where
        I: IntoIterator<Item = N>,
        N: Into<Node>,
    {
        for child in children {
            self.push(child);
        }
        self
    }

    /// Set an attribute in place.
    pub fn set_attr(&mut self, name: impl Into<String>, value: impl Into<String>) {
        let name = name.into();
        let value = value.into();
        if let Some(slot) = self.attributes.iter_mut().find(|(n, _)| *n == name) {
            slot.1 = value;
        } else {
            self.attributes.push((name, value));
        }
    }

    /// Append a child in place.
    pub fn push(&mut self, child: impl Into<Node>) {
        match child.into() {
            Node::Fragment(nodes) => self.children.extend(nodes),
            node => self.children.push(node),
        }
    }

    /// Tag name.
    #[must_use]
    pub fn tag(&self) -> &str {
        &self.tag
    }

    /// Attributes in serialization order.
    #[must_use]
    pub fn attributes(&self) -> &[(String, String)] {
        &self.attributes
    }

    /// Look up an attribute value.
    #[must_use]
    pub fn get_attr(&self, name: &str) -> Option<&str> {
        self.attributes
            .iter()
            .find(|(n, _)| n == name)
            .map(|(_, v)| v.as_str())
    }

    /// Children in document order.
    #[must_use]
    pub fn child_nodes(&self) -> &[Node] {
        &self.children
    }

    /// Child elements, looking through nested fragments.
    pub fn child_elements(&self) -> impl Iterator<Item = &Element> {
        self.children.iter().flat_map(Node::elements)
    }

    /// Concatenated text content of this element and its descendants.
    #[must_use]
    pub fn text_content(&self) -> String {
        let mut out = String::new();
        collect_text(&self.children, &mut out);
        out
    }

    /// Count descendant elements (excluding `self`) with the given tag.
    #[must_use]
    pub fn count_descendants(&self, tag: &str) -> usize {
        self.child_elements()
            .map(|el| usize::from(el.tag == tag) + el.count_descendants(tag))
            .sum()
    }
}

fn collect_text(nodes: &[Node], out: &mut String) {
    for node in nodes {
        match node {
            Node::Text(s) => out.push_str(s),
            Node::Element(el) => collect_text(&el.children, out),
            Node::Fragment(inner) => collect_text(inner, out),
        }
    }
}
