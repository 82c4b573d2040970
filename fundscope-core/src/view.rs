//! Filtered and sorted fund table views
//!
//! Global invariants enforced:
//! - `compute_view` is a pure function of (records, query, sort)
//! - Filtering is a case-insensitive substring match over name, company and category
//! - Sorting is stable: equal keys keep their input order

use crate::fund::{FundRecord, SortField, SortKey};
use serde::{Deserialize, Serialize};
use std::cmp::Ordering;
use unicode_normalization::char::is_combining_mark;
use unicode_normalization::UnicodeNormalization;

/// Direction of the active sort
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SortDirection {
    Ascending,
    Descending,
    #[default]
    None,
}

impl SortDirection {
    pub fn as_str(&self) -> &'static str {
        match self {
            SortDirection::Ascending => "asc",
            SortDirection::Descending => "desc",
            SortDirection::None => "none",
        }
    }

    pub fn parse(s: &str) -> Option<SortDirection> {
        match s.trim().to_lowercase().as_str() {
            "asc" | "ascending" => Some(SortDirection::Ascending),
            "desc" | "descending" => Some(SortDirection::Descending),
            "none" | "" => Some(SortDirection::None),
            _ => None,
        }
    }
}

/// Sort field and direction applied to a view
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct SortDirective {
    pub field: Option<SortField>,
    pub direction: SortDirection,
}

impl SortDirective {
    pub fn unsorted() -> Self {
        SortDirective::default()
    }

    pub fn ascending(field: SortField) -> Self {
        SortDirective {
            field: Some(field),
            direction: SortDirection::Ascending,
        }
    }

    pub fn descending(field: SortField) -> Self {
        SortDirective {
            field: Some(field),
            direction: SortDirection::Descending,
        }
    }

    /// The field to sort by, or `None` when the view keeps input order
    fn active(&self) -> Option<(SortField, bool)> {
        match (self.field, self.direction) {
            (Some(field), SortDirection::Ascending) => Some((field, false)),
            (Some(field), SortDirection::Descending) => Some((field, true)),
            _ => None,
        }
    }
}

/// Header-click sort cycle
///
/// Selecting the same field walks `Unsorted -> Ascending -> Descending -> Unsorted`;
/// selecting a different field always starts at `Ascending` on that field.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum SortState {
    #[default]
    Unsorted,
    Ascending(SortField),
    Descending(SortField),
}

impl SortState {
    /// Transition for one selection of `field`
    pub fn select(self, field: SortField) -> SortState {
        match self {
            SortState::Ascending(current) if current == field => SortState::Descending(field),
            SortState::Descending(current) if current == field => SortState::Unsorted,
            _ => SortState::Ascending(field),
        }
    }

    pub fn field(&self) -> Option<SortField> {
        match self {
            SortState::Unsorted => None,
            SortState::Ascending(f) | SortState::Descending(f) => Some(*f),
        }
    }

    pub fn direction(&self) -> SortDirection {
        match self {
            SortState::Unsorted => SortDirection::None,
            SortState::Ascending(_) => SortDirection::Ascending,
            SortState::Descending(_) => SortDirection::Descending,
        }
    }

    pub fn directive(&self) -> SortDirective {
        SortDirective {
            field: self.field(),
            direction: self.direction(),
        }
    }
}

impl From<SortDirective> for SortState {
    fn from(directive: SortDirective) -> Self {
        match directive.active() {
            Some((field, false)) => SortState::Ascending(field),
            Some((field, true)) => SortState::Descending(field),
            None => SortState::Unsorted,
        }
    }
}

impl From<SortState> for SortDirective {
    fn from(state: SortState) -> Self {
        state.directive()
    }
}

/// Case-insensitive substring match over name, company and category
pub fn matches_query(record: &FundRecord, query: &str) -> bool {
    if query.is_empty() {
        return true;
    }
    let needle = query.to_lowercase();
    [&record.name, &record.company, &record.category]
        .iter()
        .any(|field| field.to_lowercase().contains(&needle))
}

/// Collation for text columns.
///
/// Compares base letters first, ignoring case and accents, so "Émile" sorts
/// next to "Emile" and "Ömer" before "Ozan". Ties fall back to the accented
/// form (unaccented first), then to case (lowercase first).
pub fn locale_cmp(a: &str, b: &str) -> Ordering {
    base_letters(a)
        .cmp(base_letters(b))
        .then_with(|| folded(a).cmp(folded(b)))
        // Lowercase code points sort after uppercase ones, so reverse
        .then_with(|| b.cmp(a))
}

/// Lowercased letters with combining marks removed; dotless `ı` folds to `i`
fn base_letters(s: &str) -> impl Iterator<Item = char> + '_ {
    s.nfd()
        .filter(|c| !is_combining_mark(*c))
        .flat_map(char::to_lowercase)
        .map(|c| if c == 'ı' { 'i' } else { c })
}

/// Lowercased canonical decomposition, marks kept
fn folded(s: &str) -> impl Iterator<Item = char> + '_ {
    s.nfd().flat_map(char::to_lowercase)
}

fn compare_keys(a: SortKey<'_>, b: SortKey<'_>) -> Ordering {
    match (a, b) {
        (SortKey::Number(x), SortKey::Number(y)) => {
            x.partial_cmp(&y).unwrap_or(Ordering::Equal)
        }
        (SortKey::Text(x), SortKey::Text(y)) => locale_cmp(x, y),
        // A field always yields one kind of key
        _ => Ordering::Equal,
    }
}

/// Compute the filtered, sorted view of `records`
pub fn compute_view(records: &[FundRecord], query: &str, sort: &SortDirective) -> Vec<FundRecord> {
    view_indices(records, query, sort)
        .into_iter()
        .map(|i| records[i].clone())
        .collect()
}

/// Positions in `records` of the view rows, in view order
pub fn view_indices(records: &[FundRecord], query: &str, sort: &SortDirective) -> Vec<usize> {
    let mut view: Vec<usize> = records
        .iter()
        .enumerate()
        .filter(|(_, record)| matches_query(record, query))
        .map(|(i, _)| i)
        .collect();

    if let Some((field, descending)) = sort.active() {
        // slice::sort_by is stable
        view.sort_by(|&a, &b| {
            let ordering = compare_keys(field.key(&records[a]), field.key(&records[b]));
            if descending {
                ordering.reverse()
            } else {
                ordering
            }
        });
    }

    tracing::debug!(
        total = records.len(),
        matched = view.len(),
        query,
        sort_field = sort.field.map(|f| f.as_str()).unwrap_or("none"),
        sort_direction = sort.direction.as_str(),
        "computed fund view"
    );

    view
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::fund::RiskLevel;

    fn fund(name: &str, one_year: f64) -> FundRecord {
        FundRecord::new(name, "Co", "Bond Funds", one_year, 0.0, RiskLevel::Low)
    }

    #[test]
    fn test_sort_cycle_same_field() {
        let s0 = SortState::Unsorted;
        let s1 = s0.select(SortField::Name);
        let s2 = s1.select(SortField::Name);
        let s3 = s2.select(SortField::Name);
        assert_eq!(s1, SortState::Ascending(SortField::Name));
        assert_eq!(s2, SortState::Descending(SortField::Name));
        assert_eq!(s3, SortState::Unsorted);
        assert_eq!(
            [s1.direction(), s2.direction(), s3.direction()],
            [
                SortDirection::Ascending,
                SortDirection::Descending,
                SortDirection::None
            ]
        );
    }

    #[test]
    fn test_sort_cycle_switching_field_resets_to_ascending() {
        let asc = SortState::Ascending(SortField::Name);
        let desc = SortState::Descending(SortField::Name);
        assert_eq!(
            asc.select(SortField::Company),
            SortState::Ascending(SortField::Company)
        );
        assert_eq!(
            desc.select(SortField::OneYearReturn),
            SortState::Ascending(SortField::OneYearReturn)
        );
    }

    #[test]
    fn test_directive_without_field_keeps_order() {
        let records = vec![fund("b", 2.0), fund("a", 1.0)];
        let directive = SortDirective {
            field: None,
            direction: SortDirection::Ascending,
        };
        let view = compute_view(&records, "", &directive);
        assert_eq!(view, records);
    }

    #[test]
    fn test_locale_cmp_ignores_case_first() {
        assert_eq!(locale_cmp("apple", "Banana"), Ordering::Less);
        assert_eq!(locale_cmp("Zeta", "alpha"), Ordering::Greater);
        assert_eq!(locale_cmp("a", "A"), Ordering::Less);
        assert_eq!(locale_cmp("same", "same"), Ordering::Equal);
    }

    #[test]
    fn test_locale_cmp_uses_base_letters() {
        let records = vec![
            fund("Zeta Fund", 0.0),
            fund("Ömer Fund", 0.0),
            fund("Ozan Fund", 0.0),
            fund("Émile Fund", 0.0),
        ];
        let view = compute_view(&records, "", &SortDirective::ascending(SortField::Name));
        let names: Vec<&str> = view.iter().map(|r| r.name.as_str()).collect();
        assert_eq!(names, vec!["Émile Fund", "Ömer Fund", "Ozan Fund", "Zeta Fund"]);
    }

    #[test]
    fn test_locale_cmp_turkish_letters() {
        assert_eq!(locale_cmp("İş Bankası", "Garanti"), Ordering::Greater);
        assert_eq!(locale_cmp("İş Bankası", "Ziraat"), Ordering::Less);
        assert_eq!(locale_cmp("Yapı Kredi", "Yapi Kredi"), Ordering::Greater);
        assert_eq!(locale_cmp("Yapı Kredi", "Yapz"), Ordering::Less);
        // Unaccented sorts before accented, then lowercase before uppercase
        assert_eq!(locale_cmp("ozan", "özan"), Ordering::Less);
        assert_eq!(locale_cmp("özan", "Özan"), Ordering::Less);
    }

    #[test]
    fn test_view_indices_track_duplicates() {
        let records = vec![fund("same", 1.0), fund("same", 1.0), fund("other", 0.5)];
        let indices = view_indices(&records, "", &SortDirective::ascending(SortField::OneYearReturn));
        assert_eq!(indices, vec![2, 0, 1]);
    }

    #[test]
    fn test_risk_level_sorts_by_label_text() {
        let mut records = vec![
            fund("x", 0.0),
            fund("y", 0.0),
            fund("z", 0.0),
        ];
        records[0].risk_level = RiskLevel::VeryLow;
        records[1].risk_level = RiskLevel::High;
        records[2].risk_level = RiskLevel::Medium;
        let view = compute_view(&records, "", &SortDirective::ascending(SortField::RiskLevel));
        let labels: Vec<&str> = view.iter().map(|r| r.risk_level.as_str()).collect();
        assert_eq!(labels, vec!["High", "Medium", "Very Low"]);
    }

    #[test]
    fn test_descending_is_stable_for_ties() {
        let records = vec![fund("first", 5.0), fund("second", 5.0), fund("third", 9.0)];
        let view = compute_view(
            &records,
            "",
            &SortDirective::descending(SortField::OneYearReturn),
        );
        let names: Vec<&str> = view.iter().map(|r| r.name.as_str()).collect();
        assert_eq!(names, vec!["third", "first", "second"]);
    }

    #[test]
    fn test_state_directive_round_trip() {
        let state = SortState::Descending(SortField::Category);
        let directive: SortDirective = state.into();
        assert_eq!(SortState::from(directive), state);
        assert_eq!(SortState::from(SortDirective::unsorted()), SortState::Unsorted);
    }
}
