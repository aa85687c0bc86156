use crate::fields::{Record, SortKey};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum SortOrder {
    #[default]
    Asc,
    Desc,
}

impl SortOrder {
    /// `asc` in any case is ascending; any other value is descending.
    pub fn parse(value: Option<&str>) -> Self {
        match value {
            None => SortOrder::Asc,
            Some(v) if v.eq_ignore_ascii_case("asc") => SortOrder::Asc,
            Some(_) => SortOrder::Desc,
        }
    }
}

/// Orders `records` by the named field.
///
/// Keys are extracted once per record. The sort is stable, so records with
/// equal keys (including every record when `field` is unknown) keep their
/// incoming order in both directions.
pub fn sort_records<R: Record>(records: &mut Vec<&R>, field: &str, order: SortOrder) {
    let mut keyed: Vec<(SortKey, &R)> = records
        .drain(..)
        .map(|r| (SortKey::of(r, field), r))
        .collect();

    keyed.sort_by(|(a, _), (b, _)| match order {
        SortOrder::Asc => a.cmp(b),
        SortOrder::Desc => b.cmp(a),
    });

    records.extend(keyed.into_iter().map(|(_, r)| r));
}
