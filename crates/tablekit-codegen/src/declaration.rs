//! TypeScript declaration generation.
//!
//! Projects a table's field tree into interface text. Two shapes exist:
//! a table whose records are themselves lists gets an `<Name>Item`
//! interface plus an array alias; everything else gets a single flat
//! interface. Both are wrapped into a generated file together with a
//! `<Name>Map` collection alias.

use tablekit_model::{FieldDef, FieldKind, SelectValueType, TableDef};

const INDENT: &str = "    ";

/// Declaration name for a table key: PascalCase with an `I` prefix.
///
/// `levelConf` becomes `ILevelConf`, `item_data` becomes `IItemData`.
pub fn declaration_name(table_key: &str) -> String {
    let mut pascal = String::with_capacity(table_key.len() + 1);
    pascal.push('I');
    let mut upper_next = true;
    for ch in table_key.chars() {
        if ch == '_' || ch == '-' {
            upper_next = true;
            continue;
        }
        if upper_next {
            pascal.extend(ch.to_uppercase());
            upper_next = false;
        } else {
            pascal.push(ch);
        }
    }
    pascal
}

/// File name of a table's declaration, mirroring the declaration name.
pub fn declaration_file_name(table_key: &str) -> String {
    format!("{}.ts", declaration_name(table_key))
}

/// TypeScript type text for one field, recursing into composites.
/// `indent` is the nesting depth of the surrounding declaration.
fn field_type(field: &FieldDef, indent: usize) -> String {
    match &field.kind {
        FieldKind::String { .. } => "string".to_owned(),
        FieldKind::Number { .. } => "number".to_owned(),
        FieldKind::Boolean { .. } => "boolean".to_owned(),
        FieldKind::Select { value_type, .. } => match value_type {
            Some(SelectValueType::Number) => "number".to_owned(),
            _ => "string".to_owned(),
        },
        FieldKind::Reward { .. } => "{ id: string; count: number }".to_owned(),
        FieldKind::Array { element, .. } => {
            format!("Array<{}>", field_type(element, indent))
        }
        FieldKind::Object { properties } => inline_object(properties, indent),
    }
}

/// Inline nested record type, indented one level deeper than its parent.
fn inline_object(properties: &[FieldDef], indent: usize) -> String {
    if properties.is_empty() {
        return "Record<string, any>".to_owned();
    }

    let pad = INDENT.repeat(indent + 1);
    let close_pad = INDENT.repeat(indent);
    let mut lines = vec!["{".to_owned()];
    for property in properties {
        if let Some(comment) = doc_comment(property) {
            lines.push(format!("{pad}/** {comment} */"));
        }
        lines.push(format!(
            "{pad}{}: {};",
            property.key,
            field_type(property, indent + 1)
        ));
    }
    lines.push(format!("{close_pad}}}"));
    lines.join("\n")
}

/// Inline doc comment for a field: display name and description, joined
/// when both are present.
fn doc_comment(field: &FieldDef) -> Option<String> {
    let mut parts = Vec::new();
    if !field.name.is_empty() {
        parts.push(field.name.as_str());
    }
    if let Some(desc) = field.desc.as_deref()
        && !desc.is_empty()
    {
        parts.push(desc);
    }
    if parts.is_empty() {
        None
    } else {
        Some(parts.join(" - "))
    }
}

fn push_field_lines(lines: &mut Vec<String>, fields: &[FieldDef]) {
    for field in fields {
        if let Some(comment) = doc_comment(field) {
            lines.push(format!("{INDENT}/** {comment} */"));
        }
        lines.push(format!("{INDENT}{}: {};", field.key, field_type(field, 1)));
    }
}

/// The declaration block for one table, without the file header.
pub fn table_declaration(table_key: &str, table: &TableDef) -> String {
    let name = declaration_name(table_key);
    let display = if table.name.is_empty() {
        table_key
    } else {
        table.name.as_str()
    };
    let comment = if table.desc.is_empty() {
        display.to_owned()
    } else {
        format!("{display} - {}", table.desc)
    };

    if table.fields.is_empty() {
        return format!(
            "/** {comment} */\nexport interface {name} {{\n{INDENT}[key: string]: any;\n}}"
        );
    }

    let mut lines = Vec::new();
    if table.is_list_data() {
        // List-shaped payloads get an element interface plus an alias.
        lines.push(format!("/** {comment} - list element */"));
        lines.push(format!("export interface {name}Item {{"));
        push_field_lines(&mut lines, &table.fields);
        lines.push("}".to_owned());
        lines.push(String::new());
        lines.push(format!("/** {comment} */"));
        lines.push(format!("export type {name} = Array<{name}Item>;"));
    } else {
        lines.push(format!("/** {comment} */"));
        lines.push(format!("export interface {name} {{"));
        push_field_lines(&mut lines, &table.fields);
        lines.push("}".to_owned());
    }
    lines.join("\n")
}

/// Full declaration file for one table: generated header, declaration
/// block, and the keyed collection alias.
pub fn declaration_file(table_key: &str, table: &TableDef, generated_at: &str) -> String {
    let name = declaration_name(table_key);
    let display = if table.name.is_empty() {
        name.clone()
    } else {
        table.name.clone()
    };

    let mut lines = generated_header(&format!("{display} - data interface declarations"), generated_at);
    lines.push(String::new());
    lines.push(table_declaration(table_key, table));
    lines.push(String::new());
    lines.push(format!("/** {display} collection */"));
    lines.push(format!("export type {name}Map = Record<string, {name}>;"));
    lines.push(String::new());
    lines.join("\n")
}

/// Shared header block for generated files. The timestamp line is the one
/// [`crate::strip_timestamp`] removes for comparisons.
pub(crate) fn generated_header(title: &str, generated_at: &str) -> Vec<String> {
    vec![
        "/**".to_owned(),
        format!(" * {title}"),
        " *".to_owned(),
        " * Generated by tablekit. Do not edit.".to_owned(),
        format!(" * Generated at: {generated_at}"),
        " */".to_owned(),
    ]
}
