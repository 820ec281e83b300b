use super::super::JavaParser;
use super::super::constants::*;
use super::super::literals::{normalize_type_text, string_literal_value};
use super::{line_of, node_text};
use crate::model::{JavaAnnotation, JavaAnnotationArg, JavaElementValue};
use tree_sitter::Node;

fn is_annotation(node: Node) -> bool {
    matches!(node.kind(), KIND_MARKER_ANNOTATION | KIND_ANNOTATION)
}

impl JavaParser {
    /// Appends the annotation at `node`.
    ///
    /// A container annotation whose only argument is an array of annotations
    /// (`@ExtraRoute.List({@ExtraRoute("A"), @ExtraRoute("B")})`) contributes
    /// its elements instead of itself.
    pub(super) fn collect_annotation(
        &self,
        node: Node,
        source: &str,
        out: &mut Vec<JavaAnnotation>,
    ) {
        if let Some(elements) = Self::container_elements(node) {
            for element in elements {
                self.collect_annotation(element, source, out);
            }
            return;
        }

        let Some(name_node) = node.child_by_field_name("name") else {
            return;
        };
        let name: String = node_text(name_node, source)
            .chars()
            .filter(|c| !c.is_whitespace())
            .collect();

        let mut args = Vec::new();
        if let Some(arg_list) = node.child_by_field_name("arguments") {
            let mut cursor = arg_list.walk();
            for arg in arg_list.named_children(&mut cursor) {
                if arg.kind() == KIND_ELEMENT_VALUE_PAIR {
                    let key = arg
                        .child_by_field_name("key")
                        .map(|k| node_text(k, source).to_string());
                    if let Some(value) = arg.child_by_field_name("value") {
                        args.push(JavaAnnotationArg {
                            key,
                            value: Self::element_value(value, source),
                        });
                    }
                } else if arg.is_extra() {
                    continue;
                } else {
                    args.push(JavaAnnotationArg {
                        key: None,
                        value: Self::element_value(arg, source),
                    });
                }
            }
        }

        out.push(JavaAnnotation {
            name,
            args,
            line: line_of(node),
        });
    }

    fn container_elements(node: Node) -> Option<Vec<Node>> {
        let arg_list = node.child_by_field_name("arguments")?;
        let mut cursor = arg_list.walk();
        let args: Vec<Node> = arg_list
            .named_children(&mut cursor)
            .filter(|n| !n.is_extra())
            .collect();
        let [only] = args.as_slice() else {
            return None;
        };
        let array = if only.kind() == KIND_ELEMENT_VALUE_PAIR {
            only.child_by_field_name("value")?
        } else {
            *only
        };
        if array.kind() != KIND_ELEMENT_ARRAY {
            return None;
        }
        let mut cursor = array.walk();
        let elements: Vec<Node> = array
            .named_children(&mut cursor)
            .filter(|n| !n.is_extra())
            .collect();
        if elements.is_empty() || !elements.iter().all(|e| is_annotation(*e)) {
            return None;
        }
        Some(elements)
    }

    pub(super) fn element_value(node: Node, source: &str) -> JavaElementValue {
        match node.kind() {
            KIND_STRING_LITERAL => {
                JavaElementValue::Str(string_literal_value(node_text(node, source)))
            }
            KIND_NULL_LITERAL => JavaElementValue::Null,
            KIND_CLASS_LITERAL => {
                let mut cursor = node.walk();
                let written = node
                    .named_children(&mut cursor)
                    .next()
                    .map(|t| normalize_type_text(node_text(t, source)))
                    .unwrap_or_default();
                JavaElementValue::ClassLiteral(written)
            }
            KIND_PARENTHESIZED_EXPR => match node.named_child(0) {
                Some(inner) => Self::element_value(inner, source),
                None => JavaElementValue::Other(node_text(node, source).to_string()),
            },
            KIND_BINARY_EXPR => Self::concatenation(node, source)
                .map(JavaElementValue::Str)
                .unwrap_or_else(|| {
                    JavaElementValue::Other(node_text(node, source).to_string())
                }),
            _ => JavaElementValue::Other(node_text(node, source).to_string()),
        }
    }

    /// Folds `"a" + "b" + ...` where every operand is a string literal.
    fn concatenation(node: Node, source: &str) -> Option<String> {
        let operator = node.child_by_field_name("operator")?;
        if node_text(operator, source) != "+" {
            return None;
        }
        let left = node.child_by_field_name("left")?;
        let right = node.child_by_field_name("right")?;
        let mut folded = match Self::element_value(left, source) {
            JavaElementValue::Str(s) => s,
            _ => return None,
        };
        match Self::element_value(right, source) {
            JavaElementValue::Str(s) => folded.push_str(&s),
            _ => return None,
        }
        Some(folded)
    }
}
