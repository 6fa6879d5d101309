// SPDX-License-Identifier: MIT
// Copyright 2026 Roland Dreier <roland@rolandd.dev>

//! Report formatting.
//!
//! The layout is consumed as-is by people reading it in LINE, so the
//! section order, tab stops and ideographic-space (U+3000) indentation
//! are fixed.

use crate::models::{ActivityRecord, SleepRecord, SleepScoreRecord};
use crate::time_utils::{format_duration, format_local_datetime};

/// Sent instead of a report when any category has no record for the window.
pub const FALLBACK_MESSAGE: &str = "⚠データが取得できませんでした!\n\nデータが同期されていない可能性があります。\n\nアプリ上でデータの連携状況\n及び、リングの残バッテリー量を確認してください!";

const LOW_BATTERY_MESSAGE: &str = "バッテリー残量が少なくなっています。";
const BATTERY_OK_MESSAGE: &str = "バッテリー残量は十分です。";

/// Battery-status line for the top of the report.
pub fn battery_status_message(low_battery_alert: bool) -> &'static str {
    if low_battery_alert {
        LOW_BATTERY_MESSAGE
    } else {
        BATTERY_OK_MESSAGE
    }
}

/// Build the daily report from one record of each category.
pub fn compose(
    activity: &ActivityRecord,
    sleep: &SleepRecord,
    sleep_score: &SleepScoreRecord,
) -> String {
    let contributors = &sleep_score.contributors;

    format!(
        concat!(
            "■低バッテリーアラート:\n",
            "\t{battery}\n",
            "\n",
            "■睡眠データ:\n",
            "  ・合計睡眠時間:\n\u{3000}\u{3000}\u{3000}\u{3000}\u{3000}{total_sleep}\n",
            "  ・睡眠効率:\t\t{efficiency}%\n",
            "  ・就寝時間:\n\t\t\u{3000}\u{3000}\u{3000}\u{3000}{bedtime_start}\n",
            "  ・起床時間:\n\t\t\u{3000}\u{3000}\u{3000}\u{3000}{bedtime_end}\n",
            "  ・深い睡眠時間:\n\t\t\u{3000}\u{3000}\u{3000}\u{3000}\u{3000}{deep}\n",
            "  ・浅い睡眠時間:\n\t\t\u{3000}\u{3000}\u{3000}\u{3000}\u{3000}{light}\n",
            "  ・REM睡眠時間:\n\t\t\u{3000}\u{3000}\u{3000}\u{3000}\u{3000}{rem}\n",
            "\t\n",
            "■睡眠スコアデータ:\n",
            "  ・睡眠スコア:\t\t{score}/100\n",
            "  ・安眠度のスコア:\t\t{restfulness}/100\n",
            "  ・睡眠時間のスコア:\t\t{total_sleep_score}/100\n",
            "  ・深い睡眠のスコア:\t\t{deep_score}/100\n",
            "  ・REM睡眠のスコア:\t\t{rem_score}/100\n",
            "\t\n",
            "■活動量データ:\n",
            "  ・アクティブスコア:\t\t{active_score}/100\n",
            "  ・総消費カロリー:\t\t{calories} kcal\n",
            "  ・着用していない時間:\n\t\t\u{3000}\u{3000}\u{3000}\u{3000}\u{3000}{non_wear}",
        ),
        battery = battery_status_message(sleep.low_battery_alert),
        total_sleep = format_duration(sleep.total_sleep_seconds),
        efficiency = sleep.efficiency_percent,
        bedtime_start = format_local_datetime(&sleep.bedtime_start),
        bedtime_end = format_local_datetime(&sleep.bedtime_end),
        deep = format_duration(sleep.deep_sleep_seconds),
        light = format_duration(sleep.light_sleep_seconds),
        rem = format_duration(sleep.rem_sleep_seconds),
        score = sleep_score.score,
        restfulness = contributors.restfulness,
        total_sleep_score = contributors.total_sleep,
        deep_score = contributors.deep_sleep,
        rem_score = contributors.rem_sleep,
        active_score = activity.active_score,
        calories = activity.total_calories,
        non_wear = format_duration(activity.non_wear_seconds),
    )
}
