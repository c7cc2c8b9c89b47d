//! Tree-sitter walk from a Java compilation unit to descriptors.

use miette::NamedSource;
use repogen_ir::{ClassDescriptor, FieldDescriptor, SourceUnit};
use tree_sitter::{Node, Parser};

use crate::{Error, ImportTable, Result};

/// Reusable Java parser.
pub struct Inspector {
    parser: Parser,
}

impl Inspector {
    pub fn new() -> Result<Self> {
        let mut parser = Parser::new();
        parser
            .set_language(&tree_sitter_java::LANGUAGE.into())
            .map_err(|e| Box::new(Error::Grammar { source: e }))?;
        Ok(Self { parser })
    }

    /// Describe the package and top-level classes of a compilation unit.
    ///
    /// Classes are returned in declaration order. Interfaces, enums and
    /// records are not classes and are left out.
    pub fn inspect(&mut self, source: &str, filename: &str) -> Result<SourceUnit> {
        let tree = self.parser.parse(source, None).ok_or_else(|| {
            Box::new(Error::Parse {
                src: NamedSource::new(filename, source.to_string()),
            })
        })?;
        let root = tree.root_node();

        if let Some(node) = first_error(root) {
            let message = if node.is_missing() {
                format!("expected `{}`", node.kind())
            } else {
                "unexpected input".to_string()
            };
            let start = node.start_byte();
            return Err(Error::syntax(
                source,
                filename,
                (start, node.end_byte() - start),
                message,
            ));
        }

        let bytes = source.as_bytes();
        let mut package = None;
        let mut imports = ImportTable::new();

        let mut cursor = root.walk();
        for child in root.children(&mut cursor) {
            match child.kind() {
                "package_declaration" => package = declared_name(child, bytes),
                "import_declaration" => record_import(child, bytes, &mut imports),
                _ => {}
            }
        }

        let classes: Vec<ClassDescriptor> = root
            .children(&mut cursor)
            .filter(|child| child.kind() == "class_declaration")
            .map(|child| describe_class(child, bytes, package.as_deref(), &imports))
            .collect();

        tracing::debug!(
            file = filename,
            package = package.as_deref().unwrap_or(""),
            classes = classes.len(),
            "inspected source"
        );

        Ok(SourceUnit { package, classes })
    }
}

fn text<'a>(node: Node, bytes: &'a [u8]) -> &'a str {
    node.utf8_text(bytes).unwrap_or_default()
}

/// Depth-first search for the first ERROR or MISSING node.
fn first_error(node: Node<'_>) -> Option<Node<'_>> {
    if node.is_error() || node.is_missing() {
        return Some(node);
    }
    if !node.has_error() {
        return None;
    }
    let mut cursor = node.walk();
    for child in node.children(&mut cursor) {
        if let Some(found) = first_error(child) {
            return Some(found);
        }
    }
    None
}

/// The dotted name of a package or import declaration.
fn declared_name(node: Node, bytes: &[u8]) -> Option<String> {
    let mut cursor = node.walk();
    node.children(&mut cursor)
        .find(|c| matches!(c.kind(), "identifier" | "scoped_identifier"))
        .map(|c| text(c, bytes).to_string())
}

fn record_import(node: Node, bytes: &[u8], imports: &mut ImportTable) {
    let mut cursor = node.walk();
    let mut is_static = false;
    let mut on_demand = false;
    for child in node.children(&mut cursor) {
        match child.kind() {
            "static" => is_static = true,
            "asterisk" => on_demand = true,
            _ => {}
        }
    }
    if is_static {
        return;
    }

    let Some(name) = declared_name(node, bytes) else {
        return;
    };
    if on_demand {
        imports.add_on_demand(&name);
    } else {
        imports.add_single(&name);
    }
}

/// Resolved annotation names from a declaration's `modifiers` child.
fn annotations(node: Node, bytes: &[u8], imports: &ImportTable) -> Vec<String> {
    let mut cursor = node.walk();
    let Some(modifiers) = node
        .children(&mut cursor)
        .find(|c| c.kind() == "modifiers")
    else {
        return Vec::new();
    };

    let mut names = Vec::new();
    let mut cursor = modifiers.walk();
    for child in modifiers.children(&mut cursor) {
        if !matches!(child.kind(), "marker_annotation" | "annotation") {
            continue;
        }
        if let Some(name) = child.child_by_field_name("name") {
            names.extend(imports.resolve_annotation(text(name, bytes)));
        }
    }
    names
}

fn describe_class(
    node: Node,
    bytes: &[u8],
    package: Option<&str>,
    imports: &ImportTable,
) -> ClassDescriptor {
    let name = node
        .child_by_field_name("name")
        .map(|n| text(n, bytes))
        .unwrap_or_default();

    let mut class = ClassDescriptor::new(name);
    class.package = package.map(str::to_string);
    class.annotations.extend(annotations(node, bytes, imports));

    if let Some(body) = node.child_by_field_name("body") {
        let mut cursor = body.walk();
        for member in body.children(&mut cursor) {
            if member.kind() == "field_declaration" {
                class.fields.extend(describe_fields(member, bytes, imports));
            }
        }
    }

    class
}

/// One descriptor per declarator: `Long a, b;` declares two fields.
fn describe_fields(node: Node, bytes: &[u8], imports: &ImportTable) -> Vec<FieldDescriptor> {
    let field_annotations = annotations(node, bytes, imports);
    let base_type = node
        .child_by_field_name("type")
        .map(|ty| type_name(ty, bytes, imports))
        .unwrap_or_default();

    let mut cursor = node.walk();
    node.children_by_field_name("declarator", &mut cursor)
        .filter_map(|declarator| {
            let name = declarator.child_by_field_name("name")?;
            let mut ty = base_type.clone();
            if let Some(dims) = declarator.child_by_field_name("dimensions") {
                ty.push_str(&normalize(text(dims, bytes)));
            }
            let mut field = FieldDescriptor::new(text(name, bytes), ty);
            field.annotations.extend(field_annotations.iter().cloned());
            Some(field)
        })
        .collect()
}

/// Canonical text of a type: every simple type name is resolved through the
/// imports, type annotations are dropped, and whitespace is kept only between
/// words (`? extends Number`).
fn type_name(node: Node, bytes: &[u8], imports: &ImportTable) -> String {
    let mut out = String::new();
    write_type(node, bytes, imports, &mut out);
    out
}

fn write_type(node: Node, bytes: &[u8], imports: &ImportTable, out: &mut String) {
    match node.kind() {
        "marker_annotation" | "annotation" | "line_comment" | "block_comment" => {}
        "type_identifier" => push_token(out, &imports.resolve_type(text(node, bytes))),
        "scoped_type_identifier" => push_token(out, &normalize(text(node, bytes))),
        _ if node.child_count() == 0 => push_token(out, text(node, bytes)),
        _ => {
            let mut cursor = node.walk();
            for child in node.children(&mut cursor) {
                write_type(child, bytes, imports, out);
            }
        }
    }
}

fn push_token(out: &mut String, token: &str) {
    let joins_words = out.ends_with(|c: char| c.is_alphanumeric() || c == '_' || c == '$' || c == '?')
        && token.starts_with(|c: char| c.is_alphanumeric() || c == '_' || c == '$');
    if joins_words {
        out.push(' ');
    }
    out.push_str(token);
}

/// Drop the whitespace a name may be written with (`java.util . List`).
fn normalize(s: &str) -> String {
    s.split_whitespace().collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_normalize() {
        assert_eq!(normalize("Map<String, Long>"), "Map<String,Long>");
        assert_eq!(normalize("[ ]"), "[]");
        assert_eq!(normalize("Long"), "Long");
    }

    fn field_types(source: &str) -> Vec<String> {
        let unit = Inspector::new().unwrap().inspect(source, "T.java").unwrap();
        unit.classes[0]
            .fields
            .iter()
            .map(|f| f.type_canonical_name.clone())
            .collect()
    }

    #[test]
    fn test_nested_type_names_are_resolved() {
        let types = field_types(
            r#"
            import java.util.List;
            import java.util.Map;
            import java.math.BigDecimal;

            class T {
                List<String> names;
                Map<String, List<BigDecimal>> prices;
                List<? extends Number> numbers;
                BigDecimal[] totals;
                java.util.Set<BigDecimal> set;
                int count;
                long[] stamps;
            }
            "#,
        );

        assert_eq!(
            types,
            [
                "java.util.List<String>",
                "java.util.Map<String,java.util.List<java.math.BigDecimal>>",
                "java.util.List<? extends Number>",
                "java.math.BigDecimal[]",
                "java.util.Set<java.math.BigDecimal>",
                "int",
                "long[]",
            ]
        );
    }

    #[test]
    fn test_type_annotations_are_dropped() {
        let types = field_types(
            r#"
            import java.util.List;
            class T { List<@Valid String> names; }
            "#,
        );
        assert_eq!(types, ["java.util.List<String>"]);
    }

    #[test]
    fn test_inspector_is_reusable() {
        let mut inspector = Inspector::new().unwrap();
        let first = inspector.inspect("class A {}", "A.java").unwrap();
        let second = inspector.inspect("class B {}", "B.java").unwrap();

        assert_eq!(first.classes[0].name, "A");
        assert_eq!(second.classes[0].name, "B");
    }
}
