//! Field-keyed grouping and counting.
//!
//! Groups keep first-encounter order; callers that want a ranking sort the
//! result explicitly with [`sort_by_count_desc`].

use std::collections::HashMap;

use crate::core::{CategoryCount, Turno, TurnoField};

/// Records sharing one group name.
#[derive(Debug, Clone)]
pub struct Group<'a, T> {
    pub name: String,
    pub members: Vec<&'a T>,
}

/// Inclusion predicate applied to group names.
pub type IncludeIf<'p> = &'p dyn Fn(&str) -> bool;

/// Group arbitrary items by a derived key, in first-encounter order.
pub fn group_by_key<'a, T, I, K>(items: I, key: K) -> Vec<Group<'a, T>>
where
    I: IntoIterator<Item = &'a T>,
    K: Fn(&T) -> String,
    T: 'a,
{
    let mut index: HashMap<String, usize> = HashMap::new();
    let mut groups: Vec<Group<'a, T>> = Vec::new();

    for item in items {
        let name = key(item);
        match index.get(&name) {
            Some(&position) => groups[position].members.push(item),
            None => {
                index.insert(name.clone(), groups.len());
                groups.push(Group {
                    name,
                    members: vec![item],
                });
            }
        }
    }

    groups
}

/// Group name of a record for a field; absent values map to the field's
/// `Sin <field>` bucket. Blank values are kept verbatim as their own group.
pub fn group_name(turno: &Turno, field: TurnoField) -> String {
    match turno.field(field) {
        Some(value) => value.to_string(),
        None => field.missing_label(),
    }
}

/// Group records by a field.
pub fn group_by(records: &[Turno], field: TurnoField) -> Vec<Group<'_, Turno>> {
    group_by_key(records, |turno| group_name(turno, field))
}

/// Occurrences per group name, in first-encounter order.
pub fn count_by(records: &[Turno], field: TurnoField) -> Vec<CategoryCount> {
    group_by(records, field)
        .into_iter()
        .map(|group| CategoryCount::new(group.name, group.members.len()))
        .collect()
}

/// Category counts for a field.
///
/// Groups whose name fails `include_if` are dropped entirely rather than
/// merged into an "other" bucket.
pub fn group_count(
    records: &[Turno],
    field: TurnoField,
    include_if: Option<IncludeIf<'_>>,
) -> Vec<CategoryCount> {
    count_by(records, field)
        .into_iter()
        .filter(|entry| include_if.is_none_or(|include| include(&entry.name)))
        .collect()
}

/// Order by count, highest first. Stable: equal counts keep their order.
pub fn sort_by_count_desc(mut series: Vec<CategoryCount>) -> Vec<CategoryCount> {
    series.sort_by(|a, b| b.value.cmp(&a.value));
    series
}

/// Highest `n` categories by count.
pub fn top_n(series: Vec<CategoryCount>, n: usize) -> Vec<CategoryCount> {
    let mut ranked = sort_by_count_desc(series);
    ranked.truncate(n);
    ranked
}
