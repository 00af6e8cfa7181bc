use api::{ActivitySummary, ChangeLog, ChangeLogParams, CHANGE_TYPES, ENTITY_TYPES, PERIODS};
use chrono::Utc;
use dioxus::prelude::*;

use crate::components::{Badge, EmptyState, ErrorBanner, Select, Spinner, StatCard};
use crate::filters::{change_description, change_type_badge, format_timestamp, relative_time};
use crate::query::{use_query, QueryKey, ACTIVITY_SUMMARY, CHANGE_LOGS};

const VIEWS_CSS: Asset = asset!("/src/views/views.css");

fn options(all_label: &str, pairs: &[(&str, &str)]) -> Vec<(String, String)> {
    std::iter::once((String::new(), all_label.to_string()))
        .chain(pairs.iter().map(|(v, l)| (v.to_string(), l.to_string())))
        .collect()
}

/// Read-only audit trail with an activity summary for the chosen period.
#[component]
pub fn ActivityLogsView() -> Element {
    let mut last_days = use_signal(|| ChangeLogParams::default().last_days);
    let mut entity_type = use_signal(String::new);
    let mut change_type = use_signal(String::new);

    let params = use_memo(move || ChangeLogParams {
        last_days: last_days(),
        entity_type: entity_type(),
        change_type: change_type(),
        ..Default::default()
    });
    let mut logs = use_query(
        move || QueryKey::new(CHANGE_LOGS).with(&params()),
        move |api| {
            let params = params();
            async move { api.list_change_logs(&params).await }
        },
    );
    let summary = use_query(
        move || QueryKey::new(ACTIVITY_SUMMARY).with(&last_days()),
        move |api| {
            let days = last_days();
            async move { api.activity_summary(days).await }
        },
    );

    let period_options: Vec<(String, String)> = PERIODS
        .iter()
        .map(|(days, label)| (days.to_string(), label.to_string()))
        .collect();

    rsx! {
        document::Link { rel: "stylesheet", href: VIEWS_CSS }
        div {
            class: "page",
            div {
                class: "page-header",
                div {
                    h1 { class: "page-title", "Activity Logs" }
                    p { class: "page-subtitle", "Every change made in your organization" }
                }
                Select {
                    value: last_days().to_string(),
                    options: period_options,
                    onchange: move |evt: FormEvent| {
                        if let Ok(days) = evt.value().parse() {
                            last_days.set(days);
                        }
                    },
                }
            }

            match &*summary.read() {
                Some(Ok(summary)) => rsx! { SummaryPanel { summary: summary.clone() } },
                Some(Err(e)) => rsx! { ErrorBanner { message: e.to_string() } },
                None => rsx! {},
            }

            div {
                class: "filter-bar",
                Select {
                    value: entity_type(),
                    options: options("All Entities", &ENTITY_TYPES),
                    onchange: move |evt: FormEvent| entity_type.set(evt.value()),
                }
                Select {
                    value: change_type(),
                    options: options("All Changes", &CHANGE_TYPES),
                    onchange: move |evt: FormEvent| change_type.set(evt.value()),
                }
            }

            match &*logs.read() {
                None => rsx! { Spinner { label: "Loading activity..." } },
                Some(Err(e)) => rsx! {
                    ErrorBanner {
                        message: e.to_string(),
                        on_retry: move |_| logs.restart(),
                    }
                },
                Some(Ok(entries)) if entries.is_empty() => rsx! { EmptyState { message: "No activity in this period" } },
                Some(Ok(entries)) => rsx! {
                    ul {
                        class: "log-list",
                        for entry in entries.iter().cloned() {
                            LogEntry { key: "{entry.id}", entry }
                        }
                    }
                },
            }
        }
    }
}

#[component]
fn SummaryPanel(summary: ActivitySummary) -> Element {
    rsx! {
        div {
            class: "stat-grid stat-grid-3",
            StatCard { title: "Total Changes", value: summary.total_changes.to_string() }
            StatCard { title: "Last 24 Hours", value: summary.recent_changes.to_string() }
            div {
                class: "stat-card",
                p { class: "stat-card-title", "Top Users" }
                if summary.top_users.is_empty() {
                    p { class: "cell-detail", "No activity" }
                }
                for user in summary.top_users.iter() {
                    div {
                        key: "{user.user_id}",
                        class: "summary-row",
                        span { "{user.user_name}" }
                        span { class: "mono", "{user.changes}" }
                    }
                }
            }
        }
        if !summary.changes_by_type.is_empty() {
            div {
                class: "chip-row",
                for (kind, count) in summary.changes_by_type.iter() {
                    Badge { key: "{kind}", class: change_type_badge(kind), "{kind}: {count}" }
                }
            }
        }
    }
}

#[component]
fn LogEntry(entry: ChangeLog) -> Element {
    let actor = entry.user_name.clone().unwrap_or_else(|| "System".to_string());
    let when = relative_time(entry.created_at, Utc::now());
    let exact = format_timestamp(entry.created_at);
    let field_change = entry.field_name.as_ref().map(|field| {
        format!(
            "{field}: {} \u{2192} {}",
            entry.old_value.as_deref().unwrap_or("-"),
            entry.new_value.as_deref().unwrap_or("-")
        )
    });

    rsx! {
        li {
            class: "log-entry",
            div {
                class: "log-entry-head",
                Badge { class: change_type_badge(&entry.change_type), "{entry.change_type}" }
                span { class: "cell-title", {change_description(&entry)} }
            }
            if let Some(name) = &entry.sku_name {
                p { class: "cell-detail", "{name}" }
            }
            if let Some(change) = field_change {
                p { class: "log-entry-change mono", "{change}" }
            }
            if let Some(reason) = &entry.reason {
                p { class: "cell-detail", "Reason: {reason}" }
            }
            p {
                class: "log-entry-meta",
                title: "{exact}",
                "{actor} \u{2022} {when}"
            }
        }
    }
}
