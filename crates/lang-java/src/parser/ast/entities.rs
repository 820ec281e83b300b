use super::super::JavaParser;
use super::super::constants::*;
use super::{line_of, node_text};
use crate::model::JavaTypeEntity;
use routegen_api::TypeKind;
use tree_sitter::Node;

fn type_kind(ts_kind: &str) -> Option<TypeKind> {
    match ts_kind {
        KIND_CLASS_DECL => Some(TypeKind::Class),
        KIND_RECORD_DECL => Some(TypeKind::Record),
        KIND_INTERFACE_DECL => Some(TypeKind::Interface),
        KIND_ENUM_DECL => Some(TypeKind::Enum),
        KIND_ANNOTATION_DECL => Some(TypeKind::Annotation),
        _ => None,
    }
}

impl JavaParser {
    /// Records `node` if it declares a type, then descends into its body.
    ///
    /// Only member types are visited; local and anonymous classes inside
    /// method bodies are not part of the model.
    pub(super) fn collect_type(
        &self,
        node: Node,
        source: &str,
        enclosing: &[String],
        out: &mut Vec<JavaTypeEntity>,
    ) {
        let Some(kind) = type_kind(node.kind()) else {
            return;
        };
        let Some(name_node) = node.child_by_field_name("name") else {
            return;
        };
        let name = node_text(name_node, source).to_string();
        if name.is_empty() {
            return;
        }

        let mut is_abstract = matches!(kind, TypeKind::Interface | TypeKind::Annotation);
        let mut annotations = Vec::new();
        let mut cursor = node.walk();
        for child in node.children(&mut cursor) {
            if child.kind() != KIND_MODIFIERS {
                continue;
            }
            let mut mods = child.walk();
            for modifier in child.children(&mut mods) {
                match modifier.kind() {
                    KIND_ABSTRACT => is_abstract = true,
                    KIND_MARKER_ANNOTATION | KIND_ANNOTATION => {
                        self.collect_annotation(modifier, source, &mut annotations)
                    }
                    _ => {}
                }
            }
        }

        out.push(JavaTypeEntity {
            name: name.clone(),
            enclosing: enclosing.to_vec(),
            kind,
            is_abstract,
            annotations,
            line: line_of(name_node),
        });

        let Some(body) = node.child_by_field_name("body") else {
            return;
        };
        let mut nested = enclosing.to_vec();
        nested.push(name);

        let mut cursor = body.walk();
        for member in body.named_children(&mut cursor) {
            if member.kind() == KIND_ENUM_BODY_DECLS {
                let mut inner = member.walk();
                for decl in member.named_children(&mut inner) {
                    self.collect_type(decl, source, &nested, out);
                }
            } else {
                self.collect_type(member, source, &nested, out);
            }
        }
    }
}
