// --- Tree-sitter Node Kind Constants ---
pub const KIND_PACKAGE_DECL: &str = "package_declaration";
pub const KIND_IMPORT_DECL: &str = "import_declaration";
pub const KIND_CLASS_DECL: &str = "class_declaration";
pub const KIND_RECORD_DECL: &str = "record_declaration";
pub const KIND_INTERFACE_DECL: &str = "interface_declaration";
pub const KIND_ENUM_DECL: &str = "enum_declaration";
pub const KIND_ANNOTATION_DECL: &str = "annotation_type_declaration";
pub const KIND_ENUM_BODY_DECLS: &str = "enum_body_declarations";
pub const KIND_MODIFIERS: &str = "modifiers";
pub const KIND_ABSTRACT: &str = "abstract";

// --- Annotation Node Kinds ---
pub const KIND_MARKER_ANNOTATION: &str = "marker_annotation";
pub const KIND_ANNOTATION: &str = "annotation";
pub const KIND_ELEMENT_VALUE_PAIR: &str = "element_value_pair";
pub const KIND_ELEMENT_ARRAY: &str = "element_value_array_initializer";

// --- Literal Node Kinds ---
pub const KIND_STRING_LITERAL: &str = "string_literal";
pub const KIND_CLASS_LITERAL: &str = "class_literal";
pub const KIND_NULL_LITERAL: &str = "null_literal";
pub const KIND_BINARY_EXPR: &str = "binary_expression";
pub const KIND_PARENTHESIZED_EXPR: &str = "parenthesized_expression";

// --- Name Node Kinds ---
pub const KIND_IDENTIFIER: &str = "identifier";
pub const KIND_SCOPED_IDENTIFIER: &str = "scoped_identifier";
