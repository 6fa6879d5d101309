// SPDX-License-Identifier: MIT
// Copyright 2026 Roland Dreier <roland@rolandd.dev>

use chrono::{DateTime, TimeZone, Utc};
use mockito::{Matcher, Mock, ServerGuard};
use serde_json::{json, Value};

/// 09:30 JST on 2024-03-10.
#[allow(dead_code)]
pub fn fixed_now() -> DateTime<Utc> {
    Utc.with_ymd_and_hms(2024, 3, 10, 0, 30, 0).unwrap()
}

pub const YESTERDAY: &str = "2024-03-09";
pub const TODAY: &str = "2024-03-10";

#[allow(dead_code)]
pub fn activity_item() -> Value {
    json!({
        "id": "act-1",
        "day": TODAY,
        "score": 80,
        "total_calories": 2000,
        "non_wear_time": 600
    })
}

#[allow(dead_code)]
pub fn sleep_item() -> Value {
    json!({
        "id": "sleep-1",
        "day": TODAY,
        "bedtime_start": "2024-03-09T23:30:00+09:00",
        "bedtime_end": "2024-03-10T07:45:30+09:00",
        "deep_sleep_duration": 5400,
        "light_sleep_duration": 16200,
        "rem_sleep_duration": 7200,
        "total_sleep_duration": 28800,
        "efficiency": 90,
        "low_battery_alert": false
    })
}

#[allow(dead_code)]
pub fn sleep_score_item() -> Value {
    json!({
        "id": "ds-1",
        "day": TODAY,
        "score": 85,
        "contributors": {
            "deep_sleep": 80,
            "rem_sleep": 81,
            "restfulness": 82,
            "total_sleep": 83
        }
    })
}

/// Wrap items in the Oura pagination envelope.
#[allow(dead_code)]
pub fn page(items: Vec<Value>) -> String {
    json!({ "data": items, "next_token": null }).to_string()
}

/// Mock one Oura resource for the given window.
#[allow(dead_code)]
pub async fn mock_oura(
    server: &mut ServerGuard,
    resource: &str,
    start_date: &str,
    end_date: &str,
    status: usize,
    body: String,
) -> Mock {
    server
        .mock("GET", format!("/{}", resource).as_str())
        .match_header("authorization", "Bearer test_oura_token")
        .match_query(Matcher::AllOf(vec![
            Matcher::UrlEncoded("start_date".into(), start_date.into()),
            Matcher::UrlEncoded("end_date".into(), end_date.into()),
        ]))
        .with_status(status)
        .with_header("content-type", "application/json")
        .with_body(body)
        .create_async()
        .await
}

/// Mock all three Oura resources for the fixed run date.
#[allow(dead_code)]
pub async fn mock_all_oura(
    server: &mut ServerGuard,
    activity: Vec<Value>,
    sleep: Vec<Value>,
    sleep_score: Vec<Value>,
) -> Vec<Mock> {
    vec![
        mock_oura(server, "daily_activity", YESTERDAY, TODAY, 200, page(activity)).await,
        mock_oura(server, "sleep", YESTERDAY, TODAY, 200, page(sleep)).await,
        mock_oura(server, "daily_sleep", TODAY, TODAY, 200, page(sleep_score)).await,
    ]
}

/// Mock the LINE push endpoint, expecting exactly `hits` calls with `text`.
#[allow(dead_code)]
pub async fn mock_push(server: &mut ServerGuard, text: &str, status: usize, hits: usize) -> Mock {
    server
        .mock("POST", "/message/push")
        .match_header("authorization", "Bearer test_line_token")
        .match_header("content-type", "application/json")
        .match_body(Matcher::Json(json!({
            "to": "U_test_recipient",
            "messages": [{ "type": "text", "text": text }]
        })))
        .with_status(status)
        .with_body("{}")
        .expect(hits)
        .create_async()
        .await
}

/// Mock the LINE push endpoint for any body, expecting exactly `hits` calls.
#[allow(dead_code)]
pub async fn mock_any_push(server: &mut ServerGuard, hits: usize) -> Mock {
    server
        .mock("POST", "/message/push")
        .with_status(200)
        .with_body("{}")
        .expect(hits)
        .create_async()
        .await
}
