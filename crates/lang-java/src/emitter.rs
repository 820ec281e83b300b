use routegen_core::emit::ROUTES_UNIT;
use routegen_core::{Result, RouteTable, SourceEmitter};

const JAVA_RESERVED: &[&str] = &[
    "abstract",
    "assert",
    "boolean",
    "break",
    "byte",
    "case",
    "catch",
    "char",
    "class",
    "const",
    "continue",
    "default",
    "do",
    "double",
    "else",
    "enum",
    "extends",
    "final",
    "finally",
    "float",
    "for",
    "goto",
    "if",
    "implements",
    "import",
    "instanceof",
    "int",
    "interface",
    "long",
    "native",
    "new",
    "package",
    "private",
    "protected",
    "public",
    "return",
    "short",
    "static",
    "strictfp",
    "super",
    "switch",
    "synchronized",
    "this",
    "throw",
    "throws",
    "transient",
    "try",
    "void",
    "volatile",
    "while",
    "true",
    "false",
    "null",
    "_",
    // members of the generated class
    "AllRoutes",
    "RouteTypeMap",
    // a field named `java` would obscure the qualified `java.util` references
    "java",
];

/// Renders the route table as a `Routes` Java class.
#[derive(Debug, Default, Clone, Copy)]
pub struct JavaRoutesEmitter;

impl JavaRoutesEmitter {
    pub fn new() -> Self {
        Self
    }
}

/// Escapes `value` for use inside a Java string literal.
pub fn java_string_literal(value: &str) -> String {
    let mut out = String::with_capacity(value.len() + 2);
    out.push('"');
    for c in value.chars() {
        match c {
            '"' => out.push_str("\\\""),
            '\\' => out.push_str("\\\\"),
            '\n' => out.push_str("\\n"),
            '\r' => out.push_str("\\r"),
            '\t' => out.push_str("\\t"),
            c if c.is_control() => {
                out.push_str(&format!("\\u{:04x}", c as u32));
            }
            c => out.push(c),
        }
    }
    out.push('"');
    out
}

impl SourceEmitter for JavaRoutesEmitter {
    fn file_extension(&self) -> &str {
        "java"
    }

    fn reserved_words(&self) -> &[&str] {
        JAVA_RESERVED
    }

    fn render(&self, namespace: &str, table: &RouteTable) -> Result<String> {
        let mut out = String::new();
        out.push_str("// <auto-generated/>\n");
        if !namespace.is_empty() {
            out.push_str(&format!("package {};\n", namespace));
        }
        out.push('\n');

        out.push_str(&format!("public final class {} {{\n", ROUTES_UNIT));
        out.push_str(&format!("    private {}() {{\n", ROUTES_UNIT));
        out.push_str("    }\n");

        if !table.is_empty() {
            out.push('\n');
        }
        for route in table.all_routes() {
            out.push_str(&format!(
                "    public static final String {} = {};\n",
                route,
                java_string_literal(route)
            ));
        }

        out.push('\n');
        let routes: Vec<&str> = table.all_routes().collect();
        if routes.is_empty() {
            out.push_str("    public static final java.util.List<String> AllRoutes = java.util.List.of();\n");
        } else {
            out.push_str("    public static final java.util.List<String> AllRoutes = java.util.List.of(\n");
            out.push_str(&format!("        {}\n", routes.join(",\n        ")));
            out.push_str("    );\n");
        }

        out.push('\n');
        out.push_str("    public static final java.util.Map<String, String> RouteTypeMap;\n");
        out.push('\n');
        out.push_str("    static {\n");
        out.push_str(
            "        java.util.Map<String, String> routeTypes = new java.util.LinkedHashMap<>();\n",
        );
        for (route, type_name) in table.route_type_map() {
            out.push_str(&format!(
                "        routeTypes.put({}, {});\n",
                java_string_literal(route),
                java_string_literal(type_name)
            ));
        }
        out.push_str("        RouteTypeMap = java.util.Collections.unmodifiableMap(routeTypes);\n");
        out.push_str("    }\n");
        out.push_str("}\n");
        Ok(out)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_render_full_table() {
        let table: RouteTable = vec![
            ("AudiPage".to_string(), Some("com.example.AudiPage".to_string())),
            ("SomeOtherRoute".to_string(), None),
        ]
        .into_iter()
        .collect();

        let text = JavaRoutesEmitter.render("com.example", &table).unwrap();
        let expected = r#"// <auto-generated/>
package com.example;

public final class Routes {
    private Routes() {
    }

    public static final String AudiPage = "AudiPage";
    public static final String SomeOtherRoute = "SomeOtherRoute";

    public static final java.util.List<String> AllRoutes = java.util.List.of(
        AudiPage,
        SomeOtherRoute
    );

    public static final java.util.Map<String, String> RouteTypeMap;

    static {
        java.util.Map<String, String> routeTypes = new java.util.LinkedHashMap<>();
        routeTypes.put("AudiPage", "com.example.AudiPage");
        RouteTypeMap = java.util.Collections.unmodifiableMap(routeTypes);
    }
}
"#;
        assert_eq!(text, expected);
    }

    #[test]
    fn test_render_empty_table_in_default_package() {
        let text = JavaRoutesEmitter
            .render("", &RouteTable::default())
            .unwrap();
        assert!(text.starts_with("// <auto-generated/>\n\npublic final class Routes {"));
        assert!(!text.contains("package"));
        assert!(text.contains("AllRoutes = java.util.List.of();"));
    }

    #[test]
    fn test_string_literal_escaping() {
        assert_eq!(java_string_literal("a\"b\\c"), r#""a\"b\\c""#);
        assert_eq!(java_string_literal("x\ny"), r#""x\ny""#);
        assert_eq!(java_string_literal("\u{1}"), r#""\u0001""#);
    }

    #[test]
    fn test_reserved_words_cover_keywords_and_members() {
        let reserved = JavaRoutesEmitter.reserved_words();
        for word in ["class", "null", "AllRoutes", "RouteTypeMap", "_"] {
            assert!(reserved.contains(&word), "{} should be reserved", word);
        }
        assert!(!reserved.contains(&"HomePage"));
    }
}
