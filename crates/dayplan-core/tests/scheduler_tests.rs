mod common;

use common::create_test_scheduler;
use dayplan_core::{
    params::{AddBusy, AddTask, Day, GeneratePlan, SetAvailability, SetDone},
    PlacementStrategy, SchedulerError, TimeOfDay,
};
use jiff::civil::{date, Date};

fn t(text: &str) -> TimeOfDay {
    text.parse().expect("valid time")
}

fn test_date() -> Date {
    date(2026, 3, 14)
}

#[tokio::test]
async fn test_complete_day_workflow() {
    let (_temp_dir, scheduler) = create_test_scheduler().await;
    let day = test_date();

    // Declare the day's time budget
    scheduler
        .set_availability(&SetAvailability {
            date: day,
            start: t("09:00"),
            end: t("18:00"),
        })
        .await
        .expect("Failed to set availability");
    scheduler
        .add_busy(&AddBusy {
            date: day,
            start: t("12:00"),
            end: t("13:00"),
        })
        .await
        .expect("Failed to add busy block");

    // Capture tasks: one fixed meeting, two flexible blocks
    let meeting = scheduler
        .add_task(&AddTask {
            date: day,
            fixed_start: Some(t("10:00")),
            duration_min: Some(60),
            text: "Design review".to_string(),
        })
        .await
        .expect("Failed to add task");
    let report = scheduler
        .add_task(&AddTask {
            date: day,
            fixed_start: None,
            duration_min: Some(90),
            text: "Quarterly report".to_string(),
        })
        .await
        .expect("Failed to add task");
    let email = scheduler
        .add_task(&AddTask {
            date: day,
            fixed_start: None,
            duration_min: Some(30),
            text: "Inbox zero".to_string(),
        })
        .await
        .expect("Failed to add task");

    // Generate: the meeting holds 10:00, the report fills the next
    // gap that fits (13:00 after lunch), email takes the morning gap
    let (plan, unscheduled) = scheduler
        .generate_plan(&GeneratePlan {
            date: day,
            strategy: None,
        })
        .await
        .expect("Failed to generate plan");

    assert_eq!(plan.version, 1);
    assert!(unscheduled.is_empty());
    assert_eq!(plan.items.len(), 3);

    let by_task = |id: u64| {
        plan.items
            .iter()
            .find(|i| i.task_id == id)
            .expect("task should be placed")
    };
    assert_eq!(by_task(meeting.id).start, t("10:00"));
    assert_eq!(by_task(report.id).start, t("13:00"));
    assert_eq!(by_task(email.id).start, t("09:00"));

    // Items come back ordered by start time
    let starts: Vec<TimeOfDay> = plan.items.iter().map(|i| i.start).collect();
    let mut sorted = starts.clone();
    sorted.sort();
    assert_eq!(starts, sorted);

    // Finish the email task and regenerate: version bumps, item drops
    scheduler
        .set_done(&SetDone {
            id: email.id,
            done: true,
        })
        .await
        .expect("Failed to set done");
    let (plan, unscheduled) = scheduler
        .generate_plan(&GeneratePlan {
            date: day,
            strategy: None,
        })
        .await
        .expect("Failed to regenerate plan");
    assert_eq!(plan.version, 2);
    assert!(unscheduled.is_empty());
    assert_eq!(plan.items.len(), 2);
    assert!(plan.items.iter().all(|i| i.task_id != email.id));

    // Lock the day and confirm regeneration is refused
    let locked = scheduler
        .lock_plan(&Day { date: day })
        .await
        .expect("Failed to lock plan");
    assert_eq!(locked.version, 2);

    let result = scheduler
        .generate_plan(&GeneratePlan {
            date: day,
            strategy: None,
        })
        .await;
    assert!(matches!(result, Err(SchedulerError::PlanLocked { .. })));

    // The locked plan still reads back fully
    let shown = scheduler
        .show_plan(&Day { date: day })
        .await
        .expect("Failed to show plan")
        .expect("Plan should exist");
    assert!(shown.locked);
    assert_eq!(shown.items.len(), 2);
}

#[tokio::test]
async fn test_fixed_conflict_is_reported_not_moved() {
    let (_temp_dir, scheduler) = create_test_scheduler().await;
    let day = test_date();

    scheduler
        .add_busy(&AddBusy {
            date: day,
            start: t("10:00"),
            end: t("11:00"),
        })
        .await
        .expect("Failed to add busy block");

    let clashing = scheduler
        .add_task(&AddTask {
            date: day,
            fixed_start: Some(t("10:30")),
            duration_min: Some(30),
            text: "Clashes with the meeting".to_string(),
        })
        .await
        .expect("Failed to add task");

    for strategy in [PlacementStrategy::FirstFit, PlacementStrategy::CursorProbe] {
        let (plan, unscheduled) = scheduler
            .generate_plan(&GeneratePlan {
                date: day,
                strategy: Some(strategy),
            })
            .await
            .expect("Generation should succeed");
        assert!(plan.items.is_empty());
        assert_eq!(unscheduled, vec![clashing.id]);
    }
}

#[tokio::test]
async fn test_strategies_diverge_on_gap_reuse() {
    let (_temp_dir, scheduler) = create_test_scheduler().await;
    let day = test_date();

    scheduler
        .set_availability(&SetAvailability {
            date: day,
            start: t("09:00"),
            end: t("17:00"),
        })
        .await
        .expect("Failed to set availability");

    // A long task, then a short one that fits in the leftover gap
    // before the long task would end
    scheduler
        .add_busy(&AddBusy {
            date: day,
            start: t("09:30"),
            end: t("11:00"),
        })
        .await
        .expect("Failed to add busy block");
    let long = scheduler
        .add_task(&AddTask {
            date: day,
            fixed_start: None,
            duration_min: Some(60),
            text: "Long".to_string(),
        })
        .await
        .expect("Failed to add task");
    let short = scheduler
        .add_task(&AddTask {
            date: day,
            fixed_start: None,
            duration_min: Some(30),
            text: "Short".to_string(),
        })
        .await
        .expect("Failed to add task");

    // First-fit reuses the 09:00-09:30 gap for the short task
    let (plan, _) = scheduler
        .generate_plan(&GeneratePlan {
            date: day,
            strategy: Some(PlacementStrategy::FirstFit),
        })
        .await
        .expect("Failed to generate plan");
    let find = |p: &dayplan_core::Plan, id: u64| {
        p.items
            .iter()
            .find(|i| i.task_id == id)
            .map(|i| i.start)
            .expect("task should be placed")
    };
    assert_eq!(find(&plan, long.id), t("11:00"));
    assert_eq!(find(&plan, short.id), t("09:00"));

    // The cursor variant never walks back past the long task
    let (plan, _) = scheduler
        .generate_plan(&GeneratePlan {
            date: day,
            strategy: Some(PlacementStrategy::CursorProbe),
        })
        .await
        .expect("Failed to generate plan");
    assert_eq!(find(&plan, long.id), t("11:00"));
    assert_eq!(find(&plan, short.id), t("12:00"));
}
