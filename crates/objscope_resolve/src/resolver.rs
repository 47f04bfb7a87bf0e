//! Scoped resolution of object and group names over a stack of tables

use std::collections::HashSet;

use objscope_model::{
    Layout, Object, ObjectConfiguration, ObjectGroup, ObjectsTable, Project, SourceType, Variable,
    VariableType, VariablesContainer,
};
use tracing::{debug, trace};

use crate::merge::{self, VariableExistence};
use crate::search::SearchMatcher;

/// A name found by `names_matching`
#[derive(Debug, Clone, Copy)]
pub struct NameMatch<'a> {
    pub name: &'a str,
    /// Configuration of the object, `None` for a group
    pub configuration: Option<&'a ObjectConfiguration>,
}

/// What a name is declared as, in the table that wins the lookup
#[derive(Debug, Clone, Copy)]
enum Declaration<'a> {
    Object(&'a Object),
    Group(&'a ObjectGroup),
}

/// Resolves object and group names over an ordered stack of tables.
///
/// The first table is the most global, the last one the most local: when
/// two tables declare the same name, the later one wins. The resolver only
/// borrows its tables and cannot outlive them.
#[derive(Clone, Default)]
pub struct ScopedObjectResolver<'a> {
    tables: Vec<&'a dyn ObjectsTable>,
}

impl std::fmt::Debug for ScopedObjectResolver<'_> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let sources: Vec<SourceType> = self.tables.iter().map(|t| t.source_type()).collect();
        f.debug_struct("ScopedObjectResolver")
            .field("tables", &sources)
            .finish()
    }
}

impl<'a> ScopedObjectResolver<'a> {
    pub fn empty() -> Self {
        Self { tables: Vec::new() }
    }

    /// Global objects of the project only
    pub fn for_project(project: &'a Project) -> Self {
        trace!(project = %project.name, "resolver for project");
        let mut resolver = Self::empty();
        resolver.push(&project.objects);
        resolver
    }

    /// Global objects of the project, shadowed by the objects of the layout
    pub fn for_project_and_layout(project: &'a Project, layout: &'a Layout) -> Self {
        trace!(project = %project.name, layout = %layout.name, "resolver for project and layout");
        let mut resolver = Self::empty();
        resolver.push(&project.objects);
        resolver.push(&layout.objects);
        resolver
    }

    pub fn for_containers(global: &'a dyn ObjectsTable, local: &'a dyn ObjectsTable) -> Self {
        let mut resolver = Self::empty();
        resolver.push(global);
        resolver.push(local);
        resolver
    }

    pub fn for_container(table: &'a dyn ObjectsTable) -> Self {
        let mut resolver = Self::empty();
        resolver.push(table);
        resolver
    }

    fn push(&mut self, table: &'a dyn ObjectsTable) {
        self.tables.push(table);
    }

    /// Tables from the most local to the most global
    fn local_first(&self) -> impl Iterator<Item = &'a dyn ObjectsTable> + '_ {
        self.tables.iter().rev().copied()
    }

    fn declaration(&self, name: &str) -> Option<Declaration<'a>> {
        for table in self.local_first() {
            if let Some(object) = table.object(name) {
                return Some(Declaration::Object(object));
            }
            if let Some(group) = table.group(name) {
                return Some(Declaration::Group(group));
            }
        }
        None
    }

    // ---------------------------------------------------------------
    // Table-stack lookup
    // ---------------------------------------------------------------

    /// Find an object, ignoring groups
    pub fn find_object(&self, name: &str) -> Option<&'a Object> {
        self.local_first().find_map(|table| table.object(name))
    }

    /// Find a group, ignoring objects
    pub fn find_group(&self, name: &str) -> Option<&'a ObjectGroup> {
        self.local_first().find_map(|table| table.group(name))
    }

    /// The table declaring `name` as an object or a group
    pub fn find_container_containing(&self, name: &str) -> Option<&'a dyn ObjectsTable> {
        self.local_first()
            .find(|table| table.has_object_named(name) || table.has_group_named(name))
    }

    /// Where `name` is declared, `Unknown` if it is not
    pub fn source_type_of(&self, name: &str) -> SourceType {
        self.find_container_containing(name)
            .map_or(SourceType::Unknown, |table| table.source_type())
    }

    /// Table at `index`, 0 being the most global.
    ///
    /// Tables may hold objects that only exist for the events being edited,
    /// such as function parameters. Do not use them to edit objects.
    pub fn container(&self, index: usize) -> Option<&'a dyn ObjectsTable> {
        self.tables.get(index).copied()
    }

    pub fn containers_count(&self) -> usize {
        self.tables.len()
    }

    pub fn has_object_or_group_named(&self, name: &str) -> bool {
        self.find_container_containing(name).is_some()
    }

    pub fn has_object_named(&self, name: &str) -> bool {
        self.find_object(name).is_some()
    }

    // ---------------------------------------------------------------
    // Group expansion
    // ---------------------------------------------------------------

    /// Names of the objects `name` refers to.
    ///
    /// An object expands to itself, a group to its members in declaration
    /// order. When `preferred` is a member of the group, only that member is
    /// returned. Members that are not declared as objects anywhere in the
    /// stack are left out.
    pub fn expand_object_name(&self, name: &str, preferred: Option<&str>) -> Vec<&'a str> {
        match self.declaration(name) {
            None => Vec::new(),
            Some(Declaration::Object(object)) => vec![object.name.as_str()],
            Some(Declaration::Group(group)) => {
                if let Some(preferred) = preferred {
                    let member = group.objects.iter().find(|m| m.as_str() == preferred);
                    if let Some(member) = member.filter(|m| self.has_object_named(m)) {
                        return vec![member.as_str()];
                    }
                }
                group
                    .objects
                    .iter()
                    .filter(|member| {
                        let exists = self.has_object_named(member);
                        if !exists {
                            debug!(group = %group.name, member = %member, "group member is not a declared object");
                        }
                        exists
                    })
                    .map(String::as_str)
                    .collect()
            }
        }
    }

    /// Objects `name` stands for. `None` when the name is unknown, or is a
    /// group and `search_in_groups` is off.
    fn members(&self, name: &str, search_in_groups: bool) -> Option<Vec<&'a Object>> {
        match self.declaration(name)? {
            Declaration::Object(object) => Some(vec![object]),
            Declaration::Group(_) if !search_in_groups => None,
            Declaration::Group(_) => Some(
                self.expand_object_name(name, None)
                    .into_iter()
                    .filter_map(|member| self.find_object(member))
                    .collect(),
            ),
        }
    }

    // ---------------------------------------------------------------
    // Merged queries
    // ---------------------------------------------------------------

    /// Type of an object, or of a group whose objects all share one type.
    ///
    /// `None` means no specific type: unknown name, empty group, or objects
    /// of different types.
    pub fn type_of_object(&self, name: &str) -> Option<&'a str> {
        let members = self.members(name, true)?;
        merge::unify(members.iter().map(|o| Some(o.object_type.as_str())))
    }

    /// True when the object, or every object of the group, has the behavior
    pub fn has_behavior_in_object_or_group(&self, name: &str, behavior: &str) -> bool {
        self.members(name, true).is_some_and(|members| {
            merge::all_members(members.iter().map(|o| o.has_behavior_named(behavior)))
        })
    }

    /// Type of the behavior, if every object has it with the same type
    pub fn type_of_behavior_in_object_or_group(
        &self,
        name: &str,
        behavior: &str,
        search_in_groups: bool,
    ) -> Option<&'a str> {
        let members = self.members(name, search_in_groups)?;
        merge::unify(
            members
                .iter()
                .map(|o| o.behavior(behavior).map(|b| b.behavior_type.as_str())),
        )
    }

    /// Behavior names shared by every object
    pub fn behaviors_of_object(&self, name: &str, search_in_groups: bool) -> Vec<&'a str> {
        self.members(name, search_in_groups)
            .map(|members| {
                merge::intersect_names(members.iter().map(|o| o.behavior_names().collect()))
            })
            .unwrap_or_default()
    }

    /// Behavior names that every object has, with the given behavior type
    pub fn behavior_names_in_object_or_group(
        &self,
        name: &str,
        behavior_type: &str,
        search_in_groups: bool,
    ) -> Vec<&'a str> {
        self.members(name, search_in_groups)
            .map(|members| {
                merge::intersect_names(members.iter().map(|o| {
                    o.behaviors
                        .iter()
                        .filter(|b| b.behavior_type == behavior_type)
                        .map(|b| b.name.as_str())
                        .collect()
                }))
            })
            .unwrap_or_default()
    }

    /// Animation names shared by every object
    pub fn animation_names_of_object(&self, name: &str) -> Vec<&'a str> {
        self.members(name, true)
            .map(|members| merge::intersect_names(members.iter().map(|o| o.animation_names().collect())))
            .unwrap_or_default()
    }

    pub fn has_object_or_group_with_variable_named(
        &self,
        name: &str,
        variable: &str,
    ) -> VariableExistence {
        match self.members(name, true) {
            Some(members) => merge::existence(members.iter().map(|o| o.variables.has(variable))),
            None => VariableExistence::DoesNotExist,
        }
    }

    /// Type of the variable when every object declares it.
    ///
    /// For a group, the declaration of the first object gives the type; other
    /// objects may declare the variable with another type.
    pub fn type_of_object_or_group_variable(&self, name: &str, variable: &str) -> Option<VariableType> {
        let members = self.members(name, true)?;
        if merge::existence(members.iter().map(|o| o.variables.has(variable)))
            != VariableExistence::Exists
        {
            return None;
        }
        members
            .first()
            .and_then(|o| o.variables.get(variable))
            .map(Variable::variable_type)
    }

    /// True if `variables` is the container of the object, or of one of the
    /// objects of the group
    pub fn has_object_or_group_variables_container(
        &self,
        name: &str,
        variables: &VariablesContainer,
    ) -> bool {
        self.members(name, true)
            .is_some_and(|members| members.iter().any(|o| std::ptr::eq(&o.variables, variables)))
    }

    /// Variables of the object, or of the *first* object of a group.
    ///
    /// Groups have no variables of their own: the answer for a group is an
    /// approximation. Use `has_object_or_group_with_variable_named` to know
    /// whether a variable exists on every object.
    pub fn first_member_variables_container(&self, name: &str) -> Option<&'a VariablesContainer> {
        self.members(name, true)?.first().map(|o| &o.variables)
    }

    // ---------------------------------------------------------------
    // Enumeration
    // ---------------------------------------------------------------

    /// Every object of the stack once, the most local declaration of a name
    /// hiding the others. Local tables come first.
    pub fn objects(&self) -> impl Iterator<Item = &'a Object> + '_ {
        let mut seen = HashSet::new();
        self.local_first()
            .flat_map(|table| table.objects())
            .filter(move |object| seen.insert(object.name.as_str()))
    }

    /// Object and group names containing `search`, ignoring case.
    ///
    /// Each name is yielded once, from the most local table declaring it.
    pub fn names_matching(&self, search: &str) -> impl Iterator<Item = NameMatch<'a>> + '_ {
        let matcher = SearchMatcher::new(search);
        let mut seen = HashSet::new();
        self.local_first()
            .flat_map(|table| {
                let objects = table.objects().map(|o| NameMatch {
                    name: o.name.as_str(),
                    configuration: Some(&o.configuration),
                });
                let groups = table.groups().map(|g| NameMatch {
                    name: g.name.as_str(),
                    configuration: None,
                });
                objects.chain(groups)
            })
            .filter(move |found| matcher.is_match(found.name) && seen.insert(found.name))
    }

    /// Variables of the object, or of the objects of the group, whose name
    /// contains `search`.
    ///
    /// For a group, a name declared by several objects is yielded once, with
    /// the variable of the first object declaring it.
    pub fn variables_matching(
        &self,
        name: &str,
        search: &str,
    ) -> impl Iterator<Item = (&'a str, &'a Variable)> + use<'a> {
        let matcher = SearchMatcher::new(search);
        let mut seen = HashSet::new();
        self.members(name, true)
            .unwrap_or_default()
            .into_iter()
            .flat_map(|object| object.variables.iter())
            .filter(move |(variable, _)| matcher.is_match(variable) && seen.insert(*variable))
    }
}
