//! JSON dump of a DOM tree.

use backdrop_dom::{DomTree, NodeId, NodeType};
use serde_json::{Map, Value, json};

/// Convert `id` and its descendants to a JSON object.
pub fn node_to_json(tree: &DomTree, id: NodeId) -> Value {
    let mut obj = Map::new();
    let Some(node) = tree.get(id) else {
        return Value::Object(obj);
    };

    match &node.node_type {
        NodeType::Document => {
            let _ = obj.insert("type".to_string(), json!("document"));
        }
        NodeType::Element(data) => {
            let _ = obj.insert("type".to_string(), json!("element"));
            let _ = obj.insert("tagName".to_string(), json!(data.tag_name));
            let attrs: Map<String, Value> = data
                .attrs
                .iter()
                .map(|(k, v)| (k.clone(), json!(v)))
                .collect();
            let _ = obj.insert("attributes".to_string(), Value::Object(attrs));
        }
        NodeType::Text(text) => {
            let _ = obj.insert("type".to_string(), json!("text"));
            let _ = obj.insert("content".to_string(), json!(text));
        }
        NodeType::Comment(text) => {
            let _ = obj.insert("type".to_string(), json!("comment"));
            let _ = obj.insert("content".to_string(), json!(text));
        }
    }

    if !node.children.is_empty() {
        let children = node
            .children
            .iter()
            .map(|&child| node_to_json(tree, child))
            .collect();
        let _ = obj.insert("children".to_string(), Value::Array(children));
    }

    Value::Object(obj)
}

#[cfg(test)]
mod tests {
    use super::node_to_json;
    use backdrop_dom::DomTree;

    #[test]
    fn test_dump_skeleton() {
        let mut tree = DomTree::html_document("t");
        let _style = tree.append_style_sheet("body {}").unwrap();
        let value = node_to_json(&tree, tree.root());

        assert_eq!(value["type"], "document");
        let html = &value["children"][0];
        assert_eq!(html["tagName"], "html");
        let head = &html["children"][0];
        assert_eq!(head["children"][1]["tagName"], "style");
        assert_eq!(head["children"][1]["children"][0]["content"], "body {}");
    }
}
