//! Merge policies: how per-object answers combine into one answer for a group

/// Whether a variable is declared on an object or on the objects of a group
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum VariableExistence {
    DoesNotExist,
    /// Declared on the object, or on every object of the group
    Exists,
    /// The group has no objects, so the question has no answer
    GroupIsEmpty,
    /// Declared on some objects of the group but not all of them
    ExistsOnlyOnSomeObjectsOfTheGroup,
}

impl VariableExistence {
    pub fn as_str(&self) -> &'static str {
        match self {
            VariableExistence::DoesNotExist => "does-not-exist",
            VariableExistence::Exists => "exists",
            VariableExistence::GroupIsEmpty => "group-is-empty",
            VariableExistence::ExistsOnlyOnSomeObjectsOfTheGroup => "exists-only-on-some-objects",
        }
    }
}

impl std::fmt::Display for VariableExistence {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// The common answer if every member gives the same one, `None` otherwise.
///
/// A member without an answer, or no members at all, also gives `None`.
pub fn unify<T: PartialEq>(answers: impl IntoIterator<Item = Option<T>>) -> Option<T> {
    let mut answers = answers.into_iter();
    let first = answers.next()??;
    for answer in answers {
        if answer.as_ref() != Some(&first) {
            return None;
        }
    }
    Some(first)
}

/// True when every member answers true. No members answers false.
pub fn all_members(answers: impl IntoIterator<Item = bool>) -> bool {
    let mut any = false;
    for answer in answers {
        if !answer {
            return false;
        }
        any = true;
    }
    any
}

/// Names present in every list, in the order of the first list
pub fn intersect_names<'a>(lists: impl IntoIterator<Item = Vec<&'a str>>) -> Vec<&'a str> {
    let mut lists = lists.into_iter();
    let Some(first) = lists.next() else {
        return Vec::new();
    };

    let mut common: Vec<&'a str> = Vec::with_capacity(first.len());
    for name in first {
        if !common.contains(&name) {
            common.push(name);
        }
    }
    for list in lists {
        if common.is_empty() {
            break;
        }
        common.retain(|name| list.contains(name));
    }
    common
}

/// Four-valued existence from "is it declared?" asked of each member
pub fn existence(per_member: impl IntoIterator<Item = bool>) -> VariableExistence {
    let mut members = 0usize;
    let mut declared = 0usize;
    for has in per_member {
        members += 1;
        if has {
            declared += 1;
        }
    }

    if members == 0 {
        VariableExistence::GroupIsEmpty
    } else if declared == members {
        VariableExistence::Exists
    } else if declared == 0 {
        VariableExistence::DoesNotExist
    } else {
        VariableExistence::ExistsOnlyOnSomeObjectsOfTheGroup
    }
}
