use dayplan_core::{Database, PlacementStrategy, SchedulerError, TimeOfDay};
use jiff::civil::{date, Date};
use tempfile::NamedTempFile;

/// Helper function to create a temporary database for testing
fn create_test_db() -> (NamedTempFile, Database) {
    let temp_file = NamedTempFile::new().expect("Failed to create temporary file");
    let db = Database::new(temp_file.path()).expect("Failed to create test database");
    (temp_file, db)
}

fn t(text: &str) -> TimeOfDay {
    text.parse().expect("valid time")
}

fn test_date() -> Date {
    date(2026, 3, 14)
}

#[test]
fn test_database_initialization() {
    let (_temp_file, _db) = create_test_db();

    assert!(_temp_file.path().exists());
}

#[test]
fn test_add_task_defaults() {
    let (_temp_file, mut db) = create_test_db();

    let task = db
        .add_task(test_date(), None, None, "Default duration")
        .expect("Failed to add task");
    assert_eq!(task.duration_min, 30);
    assert!(!task.done);
    assert!(task.id > 0);

    // Zero duration is normalized to the default
    let task = db
        .add_task(test_date(), None, Some(0), "Zero duration")
        .expect("Failed to add task");
    assert_eq!(task.duration_min, 30);
}

#[test]
fn test_add_task_empty_text_rejected() {
    let (_temp_file, mut db) = create_test_db();

    let result = db.add_task(test_date(), None, None, "   ");
    assert!(matches!(result, Err(SchedulerError::InvalidInput { .. })));
}

#[test]
fn test_get_tasks_delivery_order() {
    let (_temp_file, mut db) = create_test_db();

    db.add_task(test_date(), None, Some(30), "Unfixed first")
        .expect("Failed to add task");
    db.add_task(test_date(), Some(t("14:00")), Some(30), "Fixed late")
        .expect("Failed to add task");
    db.add_task(test_date(), Some(t("09:00")), Some(30), "Fixed early")
        .expect("Failed to add task");
    db.add_task(test_date(), None, Some(30), "Unfixed second")
        .expect("Failed to add task");

    let tasks = db.get_tasks(test_date()).expect("Failed to get tasks");
    let texts: Vec<&str> = tasks.iter().map(|t| t.text.as_str()).collect();
    assert_eq!(
        texts,
        vec!["Fixed early", "Fixed late", "Unfixed first", "Unfixed second"]
    );
}

#[test]
fn test_set_done_filters_pending() {
    let (_temp_file, mut db) = create_test_db();

    let task = db
        .add_task(test_date(), None, None, "Finish me")
        .expect("Failed to add task");
    db.add_task(test_date(), None, None, "Leave me")
        .expect("Failed to add task");

    let updated = db.set_done(task.id, true).expect("Failed to set done");
    assert!(updated.done);

    let pending = db
        .get_pending_tasks(test_date())
        .expect("Failed to get pending tasks");
    assert_eq!(pending.len(), 1);
    assert_eq!(pending[0].text, "Leave me");

    let all = db.get_tasks(test_date()).expect("Failed to get tasks");
    assert_eq!(all.len(), 2);
}

#[test]
fn test_set_done_unknown_task() {
    let (_temp_file, mut db) = create_test_db();

    let result = db.set_done(42, true);
    assert!(matches!(result, Err(SchedulerError::TaskNotFound { id: 42 })));
}

#[test]
fn test_availability_upsert() {
    let (_temp_file, mut db) = create_test_db();

    assert!(db
        .get_availability(test_date())
        .expect("Failed to get availability")
        .is_none());

    db.set_availability(test_date(), t("09:00"), t("17:00"))
        .expect("Failed to set availability");
    db.set_availability(test_date(), t("08:00"), t("16:00"))
        .expect("Failed to replace availability");

    let avail = db
        .get_availability(test_date())
        .expect("Failed to get availability")
        .expect("Availability should exist");
    assert_eq!(avail.start, t("08:00"));
    assert_eq!(avail.end, t("16:00"));
}

#[test]
fn test_invalid_spans_rejected() {
    let (_temp_file, mut db) = create_test_db();

    let result = db.set_availability(test_date(), t("17:00"), t("09:00"));
    assert!(matches!(result, Err(SchedulerError::InvalidInput { .. })));

    let result = db.add_busy(test_date(), t("12:00"), t("12:00"));
    assert!(matches!(result, Err(SchedulerError::InvalidInput { .. })));
}

#[test]
fn test_busy_blocks_sorted() {
    let (_temp_file, mut db) = create_test_db();

    db.add_busy(test_date(), t("15:00"), t("16:00"))
        .expect("Failed to add busy block");
    db.add_busy(test_date(), t("10:00"), t("11:00"))
        .expect("Failed to add busy block");

    let busy = db.get_busy(test_date()).expect("Failed to get busy blocks");
    assert_eq!(busy.len(), 2);
    assert_eq!(busy[0].start, t("10:00"));
    assert_eq!(busy[1].start, t("15:00"));
}

#[test]
fn test_generate_plan_versions() {
    let (_temp_file, mut db) = create_test_db();

    db.add_task(test_date(), None, Some(60), "Task")
        .expect("Failed to add task");

    let (first, unscheduled) = db
        .generate_plan(test_date(), PlacementStrategy::FirstFit)
        .expect("Failed to generate plan");
    assert_eq!(first.version, 1);
    assert!(unscheduled.is_empty());
    assert_eq!(first.items.len(), 1);
    // Default availability starts at 09:00
    assert_eq!(first.items[0].start, t("09:00"));
    assert_eq!(first.items[0].end, t("10:00"));

    let (second, _) = db
        .generate_plan(test_date(), PlacementStrategy::FirstFit)
        .expect("Failed to regenerate plan");
    assert_eq!(second.version, 2);

    // Both versions remain stored; the latest wins on lookup
    let latest = db
        .get_latest_plan(test_date())
        .expect("Failed to get latest plan")
        .expect("Plan should exist");
    assert_eq!(latest.version, 2);
    assert_eq!(latest.items.len(), 1);
    assert_eq!(latest.items[0].task_text, "Task");
}

#[test]
fn test_generate_plan_respects_busy_blocks() {
    let (_temp_file, mut db) = create_test_db();

    db.set_availability(test_date(), t("09:00"), t("12:00"))
        .expect("Failed to set availability");
    db.add_busy(test_date(), t("09:00"), t("10:30"))
        .expect("Failed to add busy block");
    db.add_task(test_date(), None, Some(60), "After the meeting")
        .expect("Failed to add task");

    let (plan, unscheduled) = db
        .generate_plan(test_date(), PlacementStrategy::FirstFit)
        .expect("Failed to generate plan");
    assert!(unscheduled.is_empty());
    assert_eq!(plan.items[0].start, t("10:30"));
    assert_eq!(plan.items[0].end, t("11:30"));
}

#[test]
fn test_locked_plan_blocks_generation() {
    let (_temp_file, mut db) = create_test_db();

    db.add_task(test_date(), None, None, "Task")
        .expect("Failed to add task");
    db.generate_plan(test_date(), PlacementStrategy::FirstFit)
        .expect("Failed to generate plan");

    let locked = db.lock_plan(test_date()).expect("Failed to lock plan");
    assert!(locked.locked);
    assert_eq!(locked.version, 1);
    assert_eq!(locked.items.len(), 1);

    let result = db.generate_plan(test_date(), PlacementStrategy::FirstFit);
    assert!(matches!(result, Err(SchedulerError::PlanLocked { .. })));

    // No second version was written
    let latest = db
        .get_latest_plan(test_date())
        .expect("Failed to get latest plan")
        .expect("Plan should exist");
    assert_eq!(latest.version, 1);
}

#[test]
fn test_lock_is_idempotent() {
    let (_temp_file, mut db) = create_test_db();

    db.add_task(test_date(), None, None, "Task")
        .expect("Failed to add task");
    db.generate_plan(test_date(), PlacementStrategy::FirstFit)
        .expect("Failed to generate plan");

    let first = db.lock_plan(test_date()).expect("Failed to lock plan");
    let second = db.lock_plan(test_date()).expect("Relock should succeed");
    assert_eq!(first.id, second.id);
    assert!(second.locked);
}

#[test]
fn test_lock_without_plan() {
    let (_temp_file, mut db) = create_test_db();

    let result = db.lock_plan(test_date());
    assert!(matches!(result, Err(SchedulerError::PlanNotFound { .. })));
}

#[test]
fn test_dates_are_isolated() {
    let (_temp_file, mut db) = create_test_db();

    db.add_task(test_date(), None, None, "Saturday task")
        .expect("Failed to add task");
    db.generate_plan(test_date(), PlacementStrategy::FirstFit)
        .expect("Failed to generate plan");
    db.lock_plan(test_date()).expect("Failed to lock plan");

    // Another date starts fresh: no tasks, no plan, no lock
    let sunday = date(2026, 3, 15);
    assert!(db.get_tasks(sunday).expect("Failed to get tasks").is_empty());
    assert!(db
        .get_latest_plan(sunday)
        .expect("Failed to get latest plan")
        .is_none());

    db.add_task(sunday, None, None, "Sunday task")
        .expect("Failed to add task");
    let (plan, _) = db
        .generate_plan(sunday, PlacementStrategy::FirstFit)
        .expect("Lock on another date must not interfere");
    assert_eq!(plan.version, 1);
}
