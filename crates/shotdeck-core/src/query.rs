use std::collections::{BTreeSet, HashSet};

use crate::catalogs::FLAT_GROUP;
use crate::types::*;

/// Apply search, component, state and tag filters.
pub fn filter_screenshots<'a>(
    records: &'a [ScreenshotRecord],
    filters: &FilterOptions,
) -> Vec<&'a ScreenshotRecord> {
    let search = filters.search.to_lowercase();

    records
        .iter()
        .filter(|s| {
            if !search.is_empty() {
                let hit = s.component.to_lowercase().contains(&search)
                    || s.state.to_lowercase().contains(&search)
                    || s.description.to_lowercase().contains(&search)
                    || s.tags.iter().any(|t| t.to_lowercase().contains(&search));
                if !hit {
                    return false;
                }
            }

            if !filters.component.is_empty() && s.component != filters.component {
                return false;
            }
            if !filters.state.is_empty() && s.state != filters.state {
                return false;
            }

            if !filters.tags.is_empty() {
                let mut wanted = filters.tags.iter();
                let ok = match filters.tag_filter_mode {
                    TagFilterMode::And => wanted.all(|t| s.tags.contains(t)),
                    TagFilterMode::Or => wanted.any(|t| s.tags.contains(t)),
                };
                if !ok {
                    return false;
                }
            }

            true
        })
        .collect()
}

/// Group records by component, state, or into a single flat group.
/// Groups appear in first-seen order.
pub fn group_screenshots<'a>(
    records: &[&'a ScreenshotRecord],
    group_by: GroupBy,
) -> Vec<ScreenshotGroup<'a>> {
    let mut groups: Vec<ScreenshotGroup<'a>> = Vec::new();

    for &record in records {
        let key = match group_by {
            GroupBy::Component => record.component.as_str(),
            GroupBy::State => record.state.as_str(),
            GroupBy::Flat => FLAT_GROUP,
        };
        match groups.iter_mut().find(|g| g.key == key) {
            Some(group) => group.screenshots.push(record),
            None => groups.push(ScreenshotGroup {
                key: key.to_string(),
                screenshots: vec![record],
            }),
        }
    }

    groups
}

/// Stable sort by component name or by date.
pub fn sort_screenshots(records: &mut [&ScreenshotRecord], sort_by: SortBy, order: SortOrder) {
    records.sort_by(|a, b| {
        let ord = match sort_by {
            SortBy::Alphabetical => a.component.cmp(&b.component),
            SortBy::Date => a.date.cmp(&b.date),
        };
        match order {
            SortOrder::Asc => ord,
            SortOrder::Desc => ord.reverse(),
        }
    });
}

pub fn unique_components(records: &[ScreenshotRecord]) -> Vec<String> {
    sorted_unique(records.iter().map(|s| s.component.as_str()))
}

pub fn unique_states(records: &[ScreenshotRecord]) -> Vec<String> {
    sorted_unique(records.iter().map(|s| s.state.as_str()))
}

pub fn unique_tags(records: &[ScreenshotRecord]) -> Vec<String> {
    sorted_unique(records.iter().flat_map(|s| s.tags.iter().map(String::as_str)))
}

fn sorted_unique<'a>(values: impl Iterator<Item = &'a str>) -> Vec<String> {
    values
        .collect::<BTreeSet<_>>()
        .into_iter()
        .map(str::to_string)
        .collect()
}

/// Property pairs first, then the tags no property key or value covers.
pub fn group_tags(tags: &[String], controls: &[PropertyControl]) -> Vec<TagChip> {
    let mut chips: Vec<TagChip> = controls
        .iter()
        .map(|c| TagChip::Property {
            key: c.key.clone(),
            value: c.value.clone(),
        })
        .collect();

    let keys: HashSet<String> = controls.iter().map(|c| c.key.to_lowercase()).collect();
    let values: HashSet<String> = controls.iter().map(|c| c.value.to_lowercase()).collect();

    for tag in tags {
        let lower = tag.to_lowercase();
        if !keys.contains(&lower) && !values.contains(&lower) {
            chips.push(TagChip::Tag { tag: tag.clone() });
        }
    }

    chips
}

/// Step to the previous/next record, wrapping around at either end.
pub fn navigate<'a>(
    records: &[&'a ScreenshotRecord],
    current_id: &str,
    direction: Direction,
) -> Option<&'a ScreenshotRecord> {
    let idx = records.iter().position(|s| s.id == current_id)?;
    let last = records.len() - 1;
    let next = match direction {
        Direction::Prev if idx == 0 => last,
        Direction::Prev => idx - 1,
        Direction::Next if idx == last => 0,
        Direction::Next => idx + 1,
    };
    Some(records[next])
}

/// Whether previous/next records exist without wrapping.
pub fn navigation_state(records: &[&ScreenshotRecord], current_id: &str) -> NavigationState {
    match records.iter().position(|s| s.id == current_id) {
        Some(idx) => NavigationState {
            has_previous: idx > 0,
            has_next: idx + 1 < records.len(),
        },
        None => NavigationState::default(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog::build_catalog;
    use pretty_assertions::assert_eq;

    fn catalog(names: &[(&str, &str)]) -> Vec<ScreenshotRecord> {
        let files: Vec<FileEntry> = names
            .iter()
            .map(|(n, d)| FileEntry {
                filename: n.to_string(),
                date: Some(d.to_string()),
            })
            .collect();
        build_catalog(&files, &Documentation::new(), ProjectInfo::default()).screenshots
    }

    fn sample() -> Vec<ScreenshotRecord> {
        catalog(&[
            ("Button_primary_default.png", "2024-03-01T00:00:00.000Z"),
            ("Button_secondary_hover.png", "2024-01-01T00:00:00.000Z"),
            ("Input_text_focused.png", "2024-02-01T00:00:00.000Z"),
            ("Card_size-large_theme-dark.png", "2024-04-01T00:00:00.000Z"),
        ])
    }

    #[test]
    fn search_is_case_insensitive() {
        let recs = sample();
        let filters = FilterOptions {
            search: "BUTTON".into(),
            ..Default::default()
        };
        assert_eq!(filter_screenshots(&recs, &filters).len(), 2);
    }

    #[test]
    fn search_matches_tags() {
        let recs = sample();
        let filters = FilterOptions {
            search: "dark".into(),
            ..Default::default()
        };
        let hits = filter_screenshots(&recs, &filters);
        assert_eq!(hits.len(), 1);
        assert_eq!(hits[0].component, "Card");
    }

    #[test]
    fn component_and_state_are_exact() {
        let recs = sample();
        let filters = FilterOptions {
            component: "Button".into(),
            state: "secondary_hover".into(),
            ..Default::default()
        };
        assert_eq!(filter_screenshots(&recs, &filters).len(), 1);
    }

    #[test]
    fn tag_modes() {
        let recs = sample();
        let mut filters = FilterOptions {
            tags: vec!["button".into(), "hover".into()],
            ..Default::default()
        };
        assert_eq!(filter_screenshots(&recs, &filters).len(), 1);

        filters.tag_filter_mode = TagFilterMode::Or;
        assert_eq!(filter_screenshots(&recs, &filters).len(), 2);
    }

    #[test]
    fn grouping_keeps_first_seen_order() {
        let recs = sample();
        let all: Vec<&ScreenshotRecord> = recs.iter().collect();
        let groups = group_screenshots(&all, GroupBy::Component);
        let keys: Vec<&str> = groups.iter().map(|g| g.key.as_str()).collect();
        assert_eq!(keys, vec!["Button", "Input", "Card"]);
        assert_eq!(groups[0].screenshots.len(), 2);

        let flat = group_screenshots(&all, GroupBy::Flat);
        assert_eq!(flat.len(), 1);
        assert_eq!(flat[0].key, "All Screenshots");
    }

    #[test]
    fn sorting() {
        let recs = sample();
        let mut all: Vec<&ScreenshotRecord> = recs.iter().collect();
        sort_screenshots(&mut all, SortBy::Alphabetical, SortOrder::Asc);
        assert_eq!(all[0].component, "Button");
        assert_eq!(all[1].component, "Button");
        assert_eq!(all[3].component, "Input");

        sort_screenshots(&mut all, SortBy::Date, SortOrder::Desc);
        assert_eq!(all[0].component, "Card");
        assert_eq!(all[3].state, "secondary_hover");
    }

    #[test]
    fn unique_values() {
        let recs = sample();
        assert_eq!(unique_components(&recs), vec!["Button", "Card", "Input"]);
        assert!(unique_tags(&recs).contains(&"large".to_string()));
        assert_eq!(unique_states(&recs).len(), 4);
    }

    #[test]
    fn tag_chips_skip_covered_tags() {
        let recs = sample();
        let card = &recs[3];
        let chips = group_tags(&card.tags, &card.property_controls);
        assert_eq!(
            chips,
            vec![
                TagChip::Property {
                    key: "size".into(),
                    value: "large".into()
                },
                TagChip::Property {
                    key: "theme".into(),
                    value: "dark".into()
                },
                TagChip::Tag { tag: "card".into() },
                TagChip::Tag {
                    tag: "default".into()
                },
            ]
        );
    }

    #[test]
    fn navigation_wraps() {
        let recs = sample();
        let all: Vec<&ScreenshotRecord> = recs.iter().collect();
        let first = &all[0].id;
        let last = &all[3].id;

        assert_eq!(navigate(&all, first, Direction::Prev).unwrap().id, *last);
        assert_eq!(navigate(&all, last, Direction::Next).unwrap().id, *first);
        assert!(navigate(&all, "missing", Direction::Next).is_none());

        let state = navigation_state(&all, first);
        assert!(!state.has_previous);
        assert!(state.has_next);
    }
}
