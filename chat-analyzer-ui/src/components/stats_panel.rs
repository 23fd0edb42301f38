//! Statistics Components
//!
//! Headline numbers for the current filter and the date-range summary.

use leptos::*;

use crate::state::global::RangeSummary;
use crate::state::use_analyzer_state;

/// Format an integer with comma thousands separators
pub fn group_thousands(n: u64) -> String {
    let digits = n.to_string();
    let mut out = String::with_capacity(digits.len() + digits.len() / 3);
    for (i, ch) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            out.push(',');
        }
        out.push(ch);
    }
    out
}

#[component]
fn StatCard(label: &'static str, value: String) -> impl IntoView {
    view! {
        <div class="bg-gray-800 rounded-lg p-4 border border-gray-700">
            <span class="text-gray-400 text-sm">{label}</span>
            <div class="text-3xl font-bold mt-2">{value}</div>
        </div>
    }
}

/// Active Days, Messages, Words and Avg Words
#[component]
pub fn StatsPanel() -> impl IntoView {
    let state = use_analyzer_state();

    view! {
        {move || state.stats.get().map(|stats| {
            let heading = match stats.sender.as_deref() {
                Some(sender) if !sender.is_empty() => sender.to_string(),
                _ => "All Users".to_string(),
            };
            view! {
                <section>
                    <h2 class="text-xl font-semibold mb-3">{heading}</h2>
                    <div class="grid grid-cols-2 md:grid-cols-4 gap-4">
                        <StatCard label="Active Days" value=group_thousands(stats.total_days) />
                        <StatCard label="Messages" value=group_thousands(stats.total_messages) />
                        <StatCard label="Words" value=group_thousands(stats.total_words) />
                        <StatCard label="Avg Words" value=group_thousands(stats.average_words()) />
                    </div>
                </section>
            }
        })}
    }
}

fn summary_lines(summary: &RangeSummary) -> Vec<(&'static str, String)> {
    let mut lines = vec![("Total messages", group_thousands(summary.total_messages))];
    if let Some(sender) = &summary.top_sender {
        lines.push((
            "Top sender",
            format!("{} ({})", sender, group_thousands(summary.top_sender_count)),
        ));
    }
    if let Some(hour) = summary.most_active_hour {
        lines.push(("Most active hour", format!("{}:00", hour)));
    }
    if !summary.top_words.is_empty() {
        lines.push(("Top words", summary.top_words.join(", ")));
    }
    lines
}

/// Summary of the selected date range
#[component]
pub fn SummaryCard() -> impl IntoView {
    let state = use_analyzer_state();

    view! {
        {move || state.summary.get().map(|summary| {
            let title = format!(
                "Summary ({} – {})",
                state.from_date.get_untracked(),
                state.to_date.get_untracked()
            );
            view! {
                <section class="bg-gray-800 rounded-xl p-4 border border-gray-700">
                    <h2 class="text-lg font-semibold mb-2">{title}</h2>
                    <dl class="space-y-1 text-sm">
                        {summary_lines(&summary).into_iter().map(|(label, value)| view! {
                            <div class="flex justify-between">
                                <dt class="text-gray-400">{label}</dt>
                                <dd>{value}</dd>
                            </div>
                        }).collect_view()}
                    </dl>
                </section>
            }
        })}
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_group_thousands() {
        assert_eq!(group_thousands(0), "0");
        assert_eq!(group_thousands(999), "999");
        assert_eq!(group_thousands(1000), "1,000");
        assert_eq!(group_thousands(1234567), "1,234,567");
    }

    #[test]
    fn test_summary_lines_skip_missing_fields() {
        let summary = RangeSummary {
            total_messages: 12,
            top_sender: None,
            top_sender_count: 0,
            most_active_hour: Some(21),
            top_words: vec![],
        };
        let lines = summary_lines(&summary);
        assert_eq!(lines.len(), 2);
        assert_eq!(lines[1], ("Most active hour", "21:00".to_string()));
    }

    #[test]
    fn test_summary_lines_full() {
        let summary = RangeSummary {
            total_messages: 1500,
            top_sender: Some("Ana".into()),
            top_sender_count: 900,
            most_active_hour: Some(9),
            top_words: vec!["hola".into(), "ok".into()],
        };
        let lines = summary_lines(&summary);
        assert_eq!(lines[0].1, "1,500");
        assert_eq!(lines[1].1, "Ana (900)");
        assert_eq!(lines[3].1, "hola, ok");
    }
}
