//! Query commands and how their answers are printed

use clap::Subcommand;
use objscope_resolve::ScopedObjectResolver;
use serde_json::{Value, json};

#[derive(Debug, Clone, Subcommand)]
pub enum Query {
    /// List every object in scope
    Objects,
    /// List object and group names containing a term (case-insensitive)
    Search {
        #[arg(default_value = "")]
        term: String,
    },
    /// Expand a group into the objects it contains
    Expand {
        name: String,
        /// Only keep this object if it belongs to the group
        #[arg(long)]
        prefer: Option<String>,
    },
    /// Type of an object, or of a group whose objects share one type
    Type { name: String },
    /// Behaviors shared by every object
    Behaviors {
        name: String,
        /// Only behaviors of this type
        #[arg(long)]
        behavior_type: Option<String>,
        /// Treat group names as unknown
        #[arg(long)]
        no_groups: bool,
    },
    /// Whether every object has a behavior
    HasBehavior { name: String, behavior: String },
    /// Type of a behavior shared by every object
    BehaviorType {
        name: String,
        behavior: String,
        #[arg(long)]
        no_groups: bool,
    },
    /// Existence and type of a variable
    Variable { name: String, variable: String },
    /// Variables whose name contains a term
    Variables {
        name: String,
        #[arg(long, default_value = "")]
        search: String,
    },
    /// Animation names shared by every object
    Animations { name: String },
}

/// Answer a query as a JSON value
pub fn answer(resolver: &ScopedObjectResolver<'_>, query: &Query) -> Value {
    match query {
        Query::Objects => Value::Array(
            resolver
                .objects()
                .map(|o| json!({ "name": o.name, "type": o.object_type }))
                .collect(),
        ),
        Query::Search { term } => Value::Array(
            resolver
                .names_matching(term)
                .map(|found| {
                    let kind = if found.configuration.is_some() { "object" } else { "group" };
                    json!({ "name": found.name, "kind": kind })
                })
                .collect(),
        ),
        Query::Expand { name, prefer } => {
            json!(resolver.expand_object_name(name, prefer.as_deref()))
        }
        Query::Type { name } => json!({
            "type": resolver.type_of_object(name),
            "source": resolver.source_type_of(name).as_str(),
        }),
        Query::Behaviors {
            name,
            behavior_type,
            no_groups,
        } => match behavior_type {
            Some(behavior_type) => {
                json!(resolver.behavior_names_in_object_or_group(name, behavior_type, !no_groups))
            }
            None => json!(resolver.behaviors_of_object(name, !no_groups)),
        },
        Query::HasBehavior { name, behavior } => {
            json!(resolver.has_behavior_in_object_or_group(name, behavior))
        }
        Query::BehaviorType {
            name,
            behavior,
            no_groups,
        } => json!(resolver.type_of_behavior_in_object_or_group(name, behavior, !no_groups)),
        Query::Variable { name, variable } => json!({
            "existence": resolver.has_object_or_group_with_variable_named(name, variable).as_str(),
            "type": resolver
                .type_of_object_or_group_variable(name, variable)
                .map(|t| t.as_str()),
        }),
        Query::Variables { name, search } => Value::Array(
            resolver
                .variables_matching(name, search)
                .map(|(variable, value)| {
                    json!({
                        "name": variable,
                        "type": value.variable_type().as_str(),
                        "value": value,
                    })
                })
                .collect(),
        ),
        Query::Animations { name } => json!(resolver.animation_names_of_object(name)),
    }
}

/// Plain text rendering: one line per list item or per field
pub fn render_text(answer: &Value) -> String {
    let mut out = String::new();
    match answer {
        Value::Array(items) => {
            for item in items {
                out.push_str(&inline(item));
                out.push('\n');
            }
        }
        Value::Object(fields) => {
            for (key, value) in fields {
                out.push_str(&format!("{}: {}\n", key, inline(value)));
            }
        }
        other => {
            out.push_str(&inline(other));
            out.push('\n');
        }
    }
    out
}

fn inline(value: &Value) -> String {
    match value {
        Value::Null => "-".to_string(),
        Value::String(s) => s.clone(),
        Value::Array(items) => items.iter().map(inline).collect::<Vec<_>>().join(", "),
        Value::Object(fields) => fields.values().map(inline).collect::<Vec<_>>().join("\t"),
        other => other.to_string(),
    }
}
