// Property-based tests for scoped resolution
//
// These tests verify, over random global + local tables:
// 1. has_object_or_group_named agrees with find_object / find_group
// 2. A local object always shadows a global object of the same name
// 3. Expansion only yields declared objects, and collapses on a preferred member
// 4. Variable existence follows the four-state law over expanded members
// 5. Group type and behavior queries follow their merge policies
// 6. Queries are idempotent
// 7. The empty search yields every declared name exactly once

use std::collections::HashSet;

use objscope_model::{Object, ObjectGroup, ObjectsContainer, ObjectsTable, SourceType, Variable};
use objscope_resolve::{ScopedObjectResolver, VariableExistence};
use proptest::prelude::*;

const NAMES: [&str; 6] = ["A", "B", "C", "D", "E", "F"];
const TYPES: [&str; 2] = ["Sprite", "Text"];
const BEHAVIORS: [&str; 2] = ["Physics", "Flash"];
const VARIABLES: [&str; 2] = ["x", "y"];

#[derive(Debug, Clone)]
enum Decl {
    Nothing,
    Object {
        ty: usize,
        behaviors: Vec<bool>,
        variables: Vec<bool>,
    },
    Group(Vec<usize>),
}

fn decl() -> impl Strategy<Value = Decl> {
    prop_oneof![
        Just(Decl::Nothing),
        (
            0..TYPES.len(),
            prop::collection::vec(any::<bool>(), BEHAVIORS.len()),
            prop::collection::vec(any::<bool>(), VARIABLES.len()),
        )
            .prop_map(|(ty, behaviors, variables)| Decl::Object {
                ty,
                behaviors,
                variables,
            }),
        prop::collection::vec(0..NAMES.len(), 0..4).prop_map(Decl::Group),
    ]
}

fn table() -> impl Strategy<Value = Vec<Decl>> {
    prop::collection::vec(decl(), NAMES.len())
}

fn build(source_type: SourceType, decls: &[Decl]) -> ObjectsContainer {
    let mut container = ObjectsContainer::new(source_type);
    for (name, decl) in NAMES.iter().zip(decls) {
        match decl {
            Decl::Nothing => {}
            Decl::Object {
                ty,
                behaviors,
                variables,
            } => {
                let mut object = Object::new(*name, TYPES[*ty]);
                for (behavior, present) in BEHAVIORS.iter().zip(behaviors) {
                    if *present {
                        object = object.with_behavior(*behavior, format!("{}::{}", behavior, ty));
                    }
                }
                for (variable, present) in VARIABLES.iter().zip(variables) {
                    if *present {
                        object = object.with_variable(*variable, Variable::Number(1.0));
                    }
                }
                container.add_object(object).unwrap();
            }
            Decl::Group(members) => {
                let members = members.iter().map(|i| NAMES[*i]);
                container.add_group(ObjectGroup::new(*name, members)).unwrap();
            }
        }
    }
    container
}

fn query_names() -> impl Iterator<Item = &'static str> {
    NAMES.iter().copied().chain(["Z"])
}

fn is_group(resolver: &ScopedObjectResolver<'_>, name: &str) -> bool {
    resolver
        .find_container_containing(name)
        .is_some_and(|table| table.has_group_named(name))
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(200))]

    /// Property: a name exists iff it is found as an object or as a group
    #[test]
    fn existence_matches_lookups(global in table(), local in table()) {
        let global = build(SourceType::Global, &global);
        let local = build(SourceType::Scene, &local);
        let resolver = ScopedObjectResolver::for_containers(&global, &local);

        for name in query_names() {
            let found = resolver.find_object(name).is_some() || resolver.find_group(name).is_some();
            prop_assert_eq!(resolver.has_object_or_group_named(name), found);
        }
    }

    /// Property: the table added last wins on a name collision
    #[test]
    fn local_objects_shadow_global(global in table(), local in table()) {
        let global = build(SourceType::Global, &global);
        let local = build(SourceType::Scene, &local);
        let resolver = ScopedObjectResolver::for_containers(&global, &local);

        for name in NAMES {
            if let Some(local_object) = local.object(name) {
                let found = resolver.find_object(name).unwrap();
                prop_assert!(std::ptr::eq(found, local_object));
            }
        }
    }

    /// Property: expansion yields declared objects, a plain object expands to
    /// itself, and a preferred member collapses the expansion
    #[test]
    fn expansion_laws(global in table(), local in table()) {
        let global = build(SourceType::Global, &global);
        let local = build(SourceType::Scene, &local);
        let resolver = ScopedObjectResolver::for_containers(&global, &local);

        for name in query_names() {
            let expanded = resolver.expand_object_name(name, None);
            for member in &expanded {
                prop_assert!(resolver.has_object_named(member));
            }
            if !resolver.has_object_or_group_named(name) {
                prop_assert!(expanded.is_empty());
            } else if !is_group(&resolver, name) {
                prop_assert_eq!(expanded.clone(), vec![name]);
            } else {
                for member in &expanded {
                    prop_assert_eq!(
                        resolver.expand_object_name(name, Some(*member)),
                        vec![*member]
                    );
                }
                prop_assert_eq!(resolver.expand_object_name(name, Some("Z")), expanded);
            }
        }
    }

    /// Property: four-state law of variable existence
    #[test]
    fn variable_existence_law(global in table(), local in table()) {
        let global = build(SourceType::Global, &global);
        let local = build(SourceType::Scene, &local);
        let resolver = ScopedObjectResolver::for_containers(&global, &local);

        for name in query_names() {
            for variable in VARIABLES {
                let existence = resolver.has_object_or_group_with_variable_named(name, variable);
                if !resolver.has_object_or_group_named(name) {
                    prop_assert_eq!(existence, VariableExistence::DoesNotExist);
                    continue;
                }

                let members = resolver.expand_object_name(name, None);
                let declared = members
                    .iter()
                    .filter(|m| resolver.find_object(m).unwrap().variables.has(variable))
                    .count();
                let expected = if members.is_empty() {
                    VariableExistence::GroupIsEmpty
                } else if declared == members.len() {
                    VariableExistence::Exists
                } else if declared == 0 {
                    VariableExistence::DoesNotExist
                } else {
                    VariableExistence::ExistsOnlyOnSomeObjectsOfTheGroup
                };
                prop_assert_eq!(existence, expected);
            }
        }
    }

    /// Property: a group has a type only when all its objects share it, and a
    /// behavior only when all its objects have it
    #[test]
    fn merge_policies(global in table(), local in table()) {
        let global = build(SourceType::Global, &global);
        let local = build(SourceType::Scene, &local);
        let resolver = ScopedObjectResolver::for_containers(&global, &local);

        for name in query_names() {
            let members: Vec<_> = resolver
                .expand_object_name(name, None)
                .into_iter()
                .map(|m| resolver.find_object(m).unwrap())
                .collect();

            let types: HashSet<_> = members.iter().map(|o| o.object_type.as_str()).collect();
            let expected_type = if types.len() == 1 { types.into_iter().next() } else { None };
            prop_assert_eq!(resolver.type_of_object(name), expected_type);

            for behavior in BEHAVIORS {
                let expected = !members.is_empty() && members.iter().all(|o| o.has_behavior_named(behavior));
                prop_assert_eq!(resolver.has_behavior_in_object_or_group(name, behavior), expected);
            }
        }
    }

    /// Property: repeated queries give identical answers
    #[test]
    fn queries_are_idempotent(global in table(), local in table()) {
        let global = build(SourceType::Global, &global);
        let local = build(SourceType::Scene, &local);
        let resolver = ScopedObjectResolver::for_containers(&global, &local);

        for name in query_names() {
            prop_assert_eq!(resolver.expand_object_name(name, None), resolver.expand_object_name(name, None));
            prop_assert_eq!(resolver.type_of_object(name), resolver.type_of_object(name));
            prop_assert_eq!(resolver.behaviors_of_object(name, true), resolver.behaviors_of_object(name, true));
            prop_assert_eq!(
                resolver.has_object_or_group_with_variable_named(name, "x"),
                resolver.has_object_or_group_with_variable_named(name, "x")
            );
            let first: Vec<_> = resolver.variables_matching(name, "").map(|(n, _)| n).collect();
            let second: Vec<_> = resolver.variables_matching(name, "").map(|(n, _)| n).collect();
            prop_assert_eq!(first, second);
        }
    }

    /// Property: the empty search yields each declared name once
    #[test]
    fn empty_search_yields_every_name_once(global in table(), local in table()) {
        let global = build(SourceType::Global, &global);
        let local = build(SourceType::Scene, &local);
        let resolver = ScopedObjectResolver::for_containers(&global, &local);

        let found: Vec<_> = resolver.names_matching("").map(|m| m.name).collect();
        let unique: HashSet<_> = found.iter().copied().collect();
        prop_assert_eq!(found.len(), unique.len());

        let declared: HashSet<_> = NAMES
            .into_iter()
            .filter(|name| resolver.has_object_or_group_named(name))
            .collect();
        prop_assert_eq!(unique, declared);

        let objects: Vec<_> = resolver.objects().map(|o| o.name.as_str()).collect();
        let object_names: HashSet<_> = objects.iter().copied().collect();
        prop_assert_eq!(objects.len(), object_names.len());
    }
}
