//! Plain-text rendering for terminal output.

use chrono::{DateTime, Datelike, Utc};

use crate::models::{MarketSegment, Prospect, SavedSearch, SearchResult, SourceKind};
use crate::pipeline::{StageBoard, StageStatus};

const NAME_WIDTH: usize = 32;
const PHONE_WIDTH: usize = 16;
const EMAIL_WIDTH: usize = 28;
const LOCATION_WIDTH: usize = 40;

fn status_marker(status: StageStatus) -> &'static str {
    match status {
        StageStatus::Idle => "[ ]",
        StageStatus::Processing => "[~]",
        StageStatus::Success => "[✓]",
        StageStatus::Error => "[✗]",
    }
}

/// One line per stage, e.g. `[✓] Maps lookup`
pub fn render_stage_board(board: &StageBoard) -> String {
    board
        .iter()
        .map(|(stage, status)| format!("{} {}", status_marker(status), stage))
        .collect::<Vec<_>>()
        .join("\n")
}

/// Truncate to `width` characters, marking the cut with an ellipsis
fn fit(value: &str, width: usize) -> String {
    if value.chars().count() <= width {
        return format!("{:<width$}", value, width = width);
    }
    let cut: String = value.chars().take(width.saturating_sub(1)).collect();
    format!("{}…", cut)
}

fn dash_if_empty(value: &str) -> &str {
    if value.is_empty() { "-" } else { value }
}

fn city_line(p: &Prospect) -> String {
    format!("{}, {} {}", p.city, p.state, p.zip).trim().to_string()
}

pub fn render_prospects(prospects: &[Prospect]) -> String {
    let mut out = format!(
        "{} {} {} {}\n",
        fit("Prospect", NAME_WIDTH),
        fit("Phone", PHONE_WIDTH),
        fit("Email", EMAIL_WIDTH),
        "Location"
    );
    out.push_str(&"-".repeat(NAME_WIDTH + PHONE_WIDTH + EMAIL_WIDTH + LOCATION_WIDTH + 3));

    for p in prospects {
        let location = format!("{}, {}", p.address, city_line(p));
        out.push('\n');
        out.push_str(&format!(
            "{} {} {} {}",
            fit(&p.name, NAME_WIDTH),
            fit(dash_if_empty(&p.phone), PHONE_WIDTH),
            fit(dash_if_empty(&p.email), EMAIL_WIDTH),
            fit(&location, LOCATION_WIDTH).trim_end()
        ));
    }
    out
}

pub fn render_sources(result: &SearchResult) -> String {
    if result.sources.is_empty() {
        return "Sources: none".to_string();
    }
    let mut out = format!("Sources ({}):", result.sources.len());
    for source in &result.sources {
        let tag = match source.kind {
            SourceKind::Maps => "maps",
            SourceKind::Web => "web",
        };
        out.push_str(&format!("\n  [{}] {} - {}", tag, source.title, source.uri));
    }
    out
}

pub fn render_segments(segments: &[MarketSegment]) -> String {
    segments
        .iter()
        .map(|s| {
            let subs = s.sub_segments.iter().map(|sub| format!("    - {}", sub));
            std::iter::once(format!("{} ({})", s.name, s.id)).chain(subs).collect::<Vec<_>>().join("\n")
        })
        .collect::<Vec<_>>()
        .join("\n")
}

/// Tiered timestamp: relative under a week ("3h ago"), absolute after ("Jan 15")
pub fn format_timestamp(timestamp: &DateTime<Utc>, now: &DateTime<Utc>) -> String {
    let elapsed = now.signed_duration_since(*timestamp);
    if elapsed.num_days() >= 7 {
        return if timestamp.year() == now.year() {
            timestamp.format("%b %-d").to_string()
        } else {
            timestamp.format("%b %-d, %Y").to_string()
        };
    }

    let minutes = elapsed.num_minutes();
    if elapsed.num_days() > 0 {
        format!("{}d ago", elapsed.num_days())
    } else if elapsed.num_hours() > 0 {
        format!("{}h ago", elapsed.num_hours())
    } else if minutes > 0 {
        format!("{}m ago", minutes)
    } else {
        "just now".to_string()
    }
}

/// One summary line per saved search, newest first
pub fn render_history(entries: &[SavedSearch], now: &DateTime<Utc>) -> String {
    entries
        .iter()
        .map(|entry| {
            format!(
                "{}  {:>10}  {:>3} result(s)  {}",
                entry.id,
                format_timestamp(&entry.timestamp, now),
                entry.result_count,
                entry.params.label()
            )
        })
        .collect::<Vec<_>>()
        .join("\n")
}
