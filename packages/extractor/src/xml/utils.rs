//! XML utility functions for navigating card entity DOM trees.

use roxmltree::Node;

/// Get the tag name without namespace prefix.
///
/// # Examples
/// ```
/// use roxmltree::Document;
/// use cardjson_extractor::xml::get_tag_name;
///
/// let xml = r#"<CardDefs><Entity CardID="CS2_001"/></CardDefs>"#;
/// let doc = Document::parse(xml).unwrap();
/// let entity = doc.root_element().first_element_child().unwrap();
/// assert_eq!(get_tag_name(entity), "Entity");
/// ```
pub fn get_tag_name<'a>(node: Node<'a, '_>) -> &'a str {
    node.tag_name().name()
}

/// Check if a node is an element with a specific tag name.
pub fn has_tag(node: Node<'_, '_>, tag: &str) -> bool {
    node.is_element() && get_tag_name(node) == tag
}

/// Find the first child element with the given tag name.
///
/// # Examples
/// ```
/// use roxmltree::Document;
/// use cardjson_extractor::xml::find_child;
///
/// let xml = r#"<Tag name="CardName" type="String"><enUS>Wisp</enUS></Tag>"#;
/// let doc = Document::parse(xml).unwrap();
///
/// assert!(find_child(doc.root_element(), "enUS").is_some());
/// assert!(find_child(doc.root_element(), "deDE").is_none());
/// ```
pub fn find_child<'a, 'input>(node: Node<'a, 'input>, tag: &str) -> Option<Node<'a, 'input>> {
    node.children().find(|child| has_tag(*child, tag))
}

/// Find all child elements with the given tag name.
pub fn find_children<'a, 'input>(
    node: Node<'a, 'input>,
    tag: &'a str,
) -> impl Iterator<Item = Node<'a, 'input>> {
    node.children().filter(move |child| has_tag(*child, tag))
}

/// Find the first child element with the given tag name whose attribute
/// `attr` satisfies `matches`.
///
/// # Examples
/// ```
/// use roxmltree::Document;
/// use cardjson_extractor::xml::find_child_by_attribute;
///
/// let xml = r#"<Entity><Tag name="Cost" value="1"/><Tag name="Atk" value="2"/></Entity>"#;
/// let doc = Document::parse(xml).unwrap();
///
/// let atk = find_child_by_attribute(doc.root_element(), "Tag", "name", |v| v == "Atk");
/// assert_eq!(atk.and_then(|n| n.attribute("value")), Some("2"));
/// ```
pub fn find_child_by_attribute<'a, 'input>(
    node: Node<'a, 'input>,
    tag: &str,
    attr: &str,
    matches: impl Fn(&str) -> bool,
) -> Option<Node<'a, 'input>> {
    node.children()
        .find(|child| has_tag(*child, tag) && child.attribute(attr).is_some_and(&matches))
}

/// Get all element children of a node (excludes text nodes, comments, etc.).
pub fn element_children<'a, 'input>(
    node: Node<'a, 'input>,
) -> impl Iterator<Item = Node<'a, 'input>> {
    node.children().filter(|child| child.is_element())
}

/// Get the full text content of a node and its descendants, trimmed.
pub fn get_text(node: Node<'_, '_>) -> String {
    let text: String = node
        .descendants()
        .filter(|n| n.is_text())
        .filter_map(|n| n.text())
        .collect();
    text.trim().to_string()
}

/// Get the node's own text (direct text children only), trimmed.
///
/// Text inside child elements is not included, so a field carrying
/// per-language child nodes yields an empty string here.
pub fn direct_text(node: Node<'_, '_>) -> String {
    let text: String = node
        .children()
        .filter(|n| n.is_text())
        .filter_map(|n| n.text())
        .collect();
    text.trim().to_string()
}
