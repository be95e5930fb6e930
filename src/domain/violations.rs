//! Flattening of `validator` errors into the API violation shape
//!
//! `validator::Validate::validate()` returns a tree (nested structs become
//! `ValidationErrorsKind::Struct`). The API reports a flat list of
//! `{ property, constraints }` entries with dotted paths, so the tree is
//! walked here. Output is sorted by property, which makes the violation set
//! deterministic regardless of hash-map iteration order.

use validator::{ValidationErrors, ValidationErrorsKind};

use super::error::FieldViolation;

/// Collect every constraint failure in `errors` into a sorted flat list.
pub fn collect_violations(errors: &ValidationErrors) -> Vec<FieldViolation> {
    let mut violations = Vec::new();
    walk(errors, "", &mut violations);
    violations.sort_by(|a, b| a.property.cmp(&b.property));
    violations
}

fn walk(errors: &ValidationErrors, prefix: &str, out: &mut Vec<FieldViolation>) {
    for (field, kind) in errors.errors() {
        let property = if prefix.is_empty() {
            field.to_string()
        } else {
            format!("{}.{}", prefix, field)
        };

        match kind {
            ValidationErrorsKind::Field(field_errors) => {
                let mut constraints: Vec<String> = field_errors
                    .iter()
                    .map(|e| {
                        e.message
                            .as_ref()
                            .map(|m| m.to_string())
                            .unwrap_or_else(|| e.code.to_string())
                    })
                    .collect();
                constraints.sort();
                out.push(FieldViolation {
                    property,
                    constraints,
                });
            }
            ValidationErrorsKind::Struct(nested) => {
                walk(nested, &property, out);
            }
            ValidationErrorsKind::List(items) => {
                for (index, nested) in items {
                    walk(nested, &format!("{}[{}]", property, index), out);
                }
            }
        }
    }
}
