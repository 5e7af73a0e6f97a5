use std::path::Path;

use chrono::{DateTime, Duration, Utc};
use clap::ValueEnum;
use shotdeck_core::query::group_tags;
use shotdeck_core::{
    filter_screenshots, group_screenshots, sort_screenshots, FilterOptions, GroupBy,
    ScreenshotRecord, SortBy, SortOrder, TagChip, TagFilterMode,
};

use crate::load_catalog;

/// Screenshots captured within this window are marked as new.
const NEW_WINDOW_DAYS: i64 = 7;

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum GroupByArg {
    Component,
    State,
    Flat,
}

impl From<GroupByArg> for GroupBy {
    fn from(arg: GroupByArg) -> Self {
        match arg {
            GroupByArg::Component => GroupBy::Component,
            GroupByArg::State => GroupBy::State,
            GroupByArg::Flat => GroupBy::Flat,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum SortArg {
    Alphabetical,
    Date,
}

impl From<SortArg> for SortBy {
    fn from(arg: SortArg) -> Self {
        match arg {
            SortArg::Alphabetical => SortBy::Alphabetical,
            SortArg::Date => SortBy::Date,
        }
    }
}

#[derive(Debug, Clone)]
pub struct ListArgs {
    pub search: Option<String>,
    pub component: Option<String>,
    pub state: Option<String>,
    pub tags: Vec<String>,
    pub any_tags: bool,
    pub group_by: GroupByArg,
    pub sort: SortArg,
    pub desc: bool,
}

impl ListArgs {
    fn filters(&self) -> FilterOptions {
        FilterOptions {
            search: self.search.clone().unwrap_or_default(),
            component: self.component.clone().unwrap_or_default(),
            state: self.state.clone().unwrap_or_default(),
            tags: self.tags.clone(),
            tag_filter_mode: if self.any_tags {
                TagFilterMode::Or
            } else {
                TagFilterMode::And
            },
        }
    }
}

pub fn run_list(input_path: &Path, args: &ListArgs) -> Result<String, String> {
    let (catalog, _) = load_catalog(input_path)?;
    let now = Utc::now();

    let mut matches = filter_screenshots(&catalog.screenshots, &args.filters());
    let order = if args.desc {
        SortOrder::Desc
    } else {
        SortOrder::Asc
    };
    sort_screenshots(&mut matches, args.sort.into(), order);

    let mut lines: Vec<String> = Vec::new();
    for group in group_screenshots(&matches, args.group_by.into()) {
        lines.push(format!("{} ({})", group.key, group.screenshots.len()));
        for record in &group.screenshots {
            lines.push(format!("  {}", render_record(record, now)));
        }
        lines.push(String::new());
    }

    let total = catalog.screenshots.len();
    let word = if total == 1 { "screenshot" } else { "screenshots" };
    lines.push(format!("{} of {total} {word} shown.", matches.len()));

    Ok(lines.join("\n"))
}

fn render_record(record: &ScreenshotRecord, now: DateTime<Utc>) -> String {
    let chips: Vec<String> = group_tags(&record.tags, &record.property_controls)
        .into_iter()
        .filter_map(|chip| match chip {
            TagChip::Property { key, value } => Some(format!("{key}={value}")),
            TagChip::Tag { .. } => None,
        })
        .collect();

    let mut line = format!("{}  [{}]", record.filename, record.state);
    if !chips.is_empty() {
        line.push_str(&format!("  {}", chips.join(" ")));
    }
    if let Some(date) = parse_date(&record.date) {
        line.push_str(&format!("  {}", format_relative(date, now)));
        if is_new(date, now) {
            line.push_str("  NEW");
        }
    }
    line
}

fn parse_date(date: &str) -> Option<DateTime<Utc>> {
    DateTime::parse_from_rfc3339(date)
        .ok()
        .map(|d| d.with_timezone(&Utc))
}

fn plural(n: i64, unit: &str) -> String {
    if n == 1 {
        format!("{n} {unit} ago")
    } else {
        format!("{n} {unit}s ago")
    }
}

/// "3 days ago" style rendering of a capture date.
pub fn format_relative(date: DateTime<Utc>, now: DateTime<Utc>) -> String {
    let diff = now.signed_duration_since(date);
    let minutes = diff.num_minutes();
    let hours = diff.num_hours();
    let days = diff.num_days();

    if minutes < 1 {
        "just now".to_string()
    } else if minutes < 60 {
        plural(minutes, "minute")
    } else if hours < 24 {
        plural(hours, "hour")
    } else if days < 30 {
        plural(days, "day")
    } else if days / 30 < 12 {
        plural(days / 30, "month")
    } else {
        plural(days / 365, "year")
    }
}

pub fn is_new(date: DateTime<Utc>, now: DateTime<Utc>) -> bool {
    date > now - Duration::days(NEW_WINDOW_DAYS)
}
