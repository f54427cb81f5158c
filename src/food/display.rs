use crate::food::variance::FeedingStatus;

pub fn status_label(status: FeedingStatus) -> &'static str {
    match status {
        FeedingStatus::Overfeeding => "Overfeeding",
        FeedingStatus::SlightlyOver => "Slightly overfeeding",
        FeedingStatus::Normal => "On track",
        FeedingStatus::SlightlyUnder => "Slightly underfeeding",
        FeedingStatus::Underfeeding => "Underfeeding",
    }
}

pub fn status_icon(status: FeedingStatus) -> &'static str {
    match status {
        FeedingStatus::Overfeeding => "🔴",
        FeedingStatus::SlightlyOver => "🟠",
        FeedingStatus::Normal => "🟢",
        FeedingStatus::SlightlyUnder => "🟡",
        FeedingStatus::Underfeeding => "🔴",
    }
}

/// Display line for a finished entry. Over/under statuses carry the absolute
/// day drift; on-track entries get the bare label.
pub fn format_status_message(
    status: FeedingStatus,
    actual_days_elapsed: i64,
    expected_days: i64,
) -> String {
    let icon = status_icon(status);
    let label = status_label(status);
    match status {
        FeedingStatus::Normal => format!("{icon} {label}"),
        _ => {
            let drift = (actual_days_elapsed - expected_days).abs();
            let noun = if drift == 1 { "day" } else { "days" };
            format!("{icon} {label} by ~{drift} {noun}")
        }
    }
}
