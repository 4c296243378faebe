// benches/schedule.rs
use chrono::NaiveDate;
use criterion::{black_box, criterion_group, criterion_main, Criterion};

use pl_portal::api::Event;
use pl_portal::views::schedule::{group_by_date, merge_unique, week_matches};

/// A full 380-fixture season, ten matches per round, one round a week.
fn season() -> Vec<Event> {
    let start = NaiveDate::from_ymd_opt(2024, 8, 16).unwrap_or_default();
    (0..380u32)
        .map(|i| {
            let date = start + chrono::Duration::days(i64::from(i / 10) * 7 + i64::from(i % 3));
            Event {
                id_event: (2_000_000 + i).to_string(),
                str_home_team: format!("Team {}", i % 20),
                str_away_team: format!("Team {}", (i + 7) % 20),
                date_event: date.format("%Y-%m-%d").to_string(),
                str_time: Some(if i % 2 == 0 { "14:00:00".into() } else { "19:30:00".into() }),
                ..Event::default()
            }
        })
        .collect()
}

fn bench_schedule(c: &mut Criterion) {
    let all = season();
    let recent: Vec<Event> = all[..15].to_vec();
    let anchor = NaiveDate::from_ymd_opt(2024, 12, 26).unwrap_or_default();

    c.bench_function("merge_unique", |b| {
        b.iter(|| black_box(merge_unique(recent.clone(), all.clone()).len()))
    });

    c.bench_function("group_by_date", |b| {
        b.iter(|| black_box(group_by_date(black_box(&all)).len()))
    });

    c.bench_function("week_matches", |b| {
        b.iter(|| black_box(week_matches(black_box(&all), anchor).len()))
    });
}

criterion_group!(benches, bench_schedule);
criterion_main!(benches);
