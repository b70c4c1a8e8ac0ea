/// A node in the render tree.
///
/// Leaves hold text, optionally wrapped in a tag; parents hold an ordered
/// list of children and always have a tag. A parent exclusively owns its
/// children. Nodes are built bottom-up during block conversion and rendered
/// once.
#[derive(Clone, Debug, Eq, PartialEq)]
pub enum HtmlNode {
    Leaf {
        /// `None` renders the value as raw text with no wrapping element.
        tag: Option<String>,
        value: String,
        attrs: Vec<(String, String)>,
    },
    Parent {
        tag: String,
        children: Vec<HtmlNode>,
        attrs: Vec<(String, String)>,
    },
}

impl HtmlNode {
    /// A raw text leaf with no wrapping element.
    pub fn text(value: impl Into<String>) -> Self {
        HtmlNode::Leaf {
            tag: None,
            value: value.into(),
            attrs: Vec::new(),
        }
    }

    pub fn leaf(tag: impl Into<String>, value: impl Into<String>) -> Self {
        HtmlNode::Leaf {
            tag: Some(tag.into()),
            value: value.into(),
            attrs: Vec::new(),
        }
    }

    pub fn leaf_with_attrs(
        tag: impl Into<String>,
        value: impl Into<String>,
        attrs: Vec<(String, String)>,
    ) -> Self {
        HtmlNode::Leaf {
            tag: Some(tag.into()),
            value: value.into(),
            attrs,
        }
    }

    pub fn parent(tag: impl Into<String>, children: Vec<HtmlNode>) -> Self {
        HtmlNode::Parent {
            tag: tag.into(),
            children,
            attrs: Vec::new(),
        }
    }

    /// Renders the subtree to an HTML string, depth-first.
    ///
    /// Text is emitted verbatim. This dialect does not escape; rendering
    /// already-plain text a second time yields the same output.
    pub fn to_html(&self) -> String {
        match self {
            // A tagless leaf ignores any attrs and passes its text through.
            HtmlNode::Leaf { tag: None, value, .. } => value.clone(),
            HtmlNode::Leaf {
                tag: Some(tag),
                value,
                attrs,
            } => {
                let mut out = String::new();
                push_open_tag(&mut out, tag, attrs);
                out.push_str(value);
                push_close_tag(&mut out, tag);
                out
            }
            HtmlNode::Parent {
                tag,
                children,
                attrs,
            } => {
                let mut out = String::new();
                push_open_tag(&mut out, tag, attrs);
                for child in children {
                    out.push_str(&child.to_html());
                }
                push_close_tag(&mut out, tag);
                out
            }
        }
    }
}

fn push_open_tag(out: &mut String, tag: &str, attrs: &[(String, String)]) {
    out.push('<');
    out.push_str(tag);
    for (name, value) in attrs {
        out.push(' ');
        out.push_str(name);
        out.push_str("=\"");
        out.push_str(value);
        out.push('"');
    }
    out.push('>');
}

fn push_close_tag(out: &mut String, tag: &str) {
    out.push_str("</");
    out.push_str(tag);
    out.push('>');
}
