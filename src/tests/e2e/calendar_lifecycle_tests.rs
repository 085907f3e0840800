use crate::modules::calendar::core::errors::CalendarError;
use crate::modules::calendar::use_cases::delete_event::command::DeleteEvent;
use crate::modules::calendar::use_cases::get_events::queries::{
    GetEventsForDay, GetEventsForMonth, GetEventsForWeek,
};
use crate::modules::calendar::use_cases::update_event::command::UpdateEvent;
use crate::shared::core::cancellation::Cancellation;
use crate::tests::fixtures::commands::create_event::CreateEventBuilder;
use crate::tests::fixtures::use_case::make_calendar_use_case;
use chrono::{Duration, TimeZone, Utc};
use std::sync::Arc;
use tokio::sync::Barrier;
use tokio::task::JoinSet;

#[tokio::test]
async fn walks_an_event_through_its_whole_lifecycle() {
    let (_, logger, calendar) = make_calendar_use_case();
    let never = Cancellation::never();
    let monday = Utc.with_ymd_and_hms(2024, 1, 15, 0, 0, 0).unwrap();

    let commands: Vec<_> = [9, 13, 48]
        .into_iter()
        .map(|hours| {
            CreateEventBuilder::new()
                .event(format!("at-{hours}"))
                .date(monday + Duration::hours(hours))
                .build()
        })
        .collect();
    let user_id = commands[0].user_id.clone();

    let mut ids = Vec::new();
    for command in commands.iter().cloned() {
        ids.push(calendar.create_event(command).await.unwrap());
    }

    let day = calendar
        .get_events_for_day(
            GetEventsForDay {
                user_id: user_id.clone(),
                date: monday,
            },
            &never,
        )
        .await
        .unwrap();
    assert_eq!(day.len(), 2);
    assert_eq!(day[0].id.to_string(), ids[0]);

    calendar
        .update_event(UpdateEvent {
            id: ids[1].clone(),
            user_id: user_id.clone(),
            event: "moved to next week".into(),
            date: monday + Duration::days(8),
        })
        .await
        .unwrap();

    let week = calendar
        .get_events_for_week(
            GetEventsForWeek {
                user_id: user_id.clone(),
                date_start: monday,
            },
            &never,
        )
        .await
        .unwrap();
    assert_eq!(week.len(), 2);
    assert!(week.iter().all(|event| event.id.to_string() != ids[1]));

    calendar
        .delete_event(DeleteEvent {
            id: ids[0].clone(),
            user_id: user_id.clone(),
        })
        .await
        .unwrap();

    let month = calendar
        .get_events_for_month(
            GetEventsForMonth {
                user_id: user_id.clone(),
                date_start: Utc.with_ymd_and_hms(2024, 1, 1, 0, 0, 0).unwrap(),
            },
            &never,
        )
        .await
        .unwrap();
    let labels: Vec<_> = month.iter().map(|event| event.event.as_str()).collect();
    assert_eq!(labels, vec!["at-48", "moved to next week"]);

    let emptied = calendar
        .get_events_for_day(
            GetEventsForDay {
                user_id,
                date: monday,
            },
            &never,
        )
        .await
        .unwrap_err();
    assert!(matches!(emptied.kind(), CalendarError::NoEventsFound));
    assert!(logger.messages().contains(&"No events found for day".to_string()));
}

#[tokio::test(flavor = "multi_thread", worker_threads = 4)]
async fn keeps_every_concurrent_create() {
    const N: usize = 50;
    let (_, _, calendar) = make_calendar_use_case();
    let calendar = Arc::new(calendar);
    let day = Utc.with_ymd_and_hms(2024, 6, 1, 0, 0, 0).unwrap();

    let mut tasks = JoinSet::new();
    for minute in 0..N {
        let calendar = calendar.clone();
        tasks.spawn(async move {
            let command = CreateEventBuilder::new()
                .event(format!("slot-{minute}"))
                .date(day + Duration::minutes(minute as i64))
                .build();
            calendar.create_event(command).await
        });
    }
    while let Some(joined) = tasks.join_next().await {
        joined.unwrap().unwrap();
    }

    let events = calendar
        .get_events_for_day(
            GetEventsForDay {
                user_id: CreateEventBuilder::new().build().user_id,
                date: day,
            },
            &Cancellation::never(),
        )
        .await
        .unwrap();
    assert_eq!(events.len(), N);
}

#[tokio::test(flavor = "multi_thread", worker_threads = 4)]
async fn never_resurrects_an_event_deleted_during_an_update() {
    let (store, _, calendar) = make_calendar_use_case();
    let calendar = Arc::new(calendar);

    for _ in 0..500 {
        let create = CreateEventBuilder::new().build();
        let id = calendar.create_event(create.clone()).await.unwrap();
        let update = UpdateEvent {
            id: id.clone(),
            user_id: create.user_id.clone(),
            event: "renamed".into(),
            date: create.date,
        };
        let delete = DeleteEvent {
            id: id.clone(),
            user_id: create.user_id.clone(),
        };
        let start = Arc::new(Barrier::new(2));

        let updater = {
            let calendar = calendar.clone();
            let start = start.clone();
            let update = update.clone();
            tokio::spawn(async move {
                start.wait().await;
                calendar.update_event(update).await
            })
        };
        let deleter = {
            let calendar = calendar.clone();
            let start = start.clone();
            tokio::spawn(async move {
                start.wait().await;
                calendar.delete_event(delete).await
            })
        };
        let updated = updater.await.unwrap();
        deleter.await.unwrap().unwrap();

        if let Err(error) = updated {
            assert!(matches!(error.kind(), CalendarError::EventDoesNotExist));
        }
        assert!(store.get(&create.user_id, &id).await.is_err());
        let late = calendar.update_event(update).await.unwrap_err();
        assert!(matches!(late.kind(), CalendarError::EventDoesNotExist));
    }
}
