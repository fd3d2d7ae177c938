use dayplan_core::SchedulerBuilder;
use tempfile::TempDir;

/// Helper function to create a test scheduler
pub async fn create_test_scheduler() -> (TempDir, dayplan_core::Scheduler) {
    let temp_dir = TempDir::new().expect("Failed to create temp dir");
    let db_path = temp_dir.path().join("test.db");
    let scheduler = SchedulerBuilder::new()
        .with_database_path(Some(&db_path))
        .build()
        .await
        .expect("Failed to create scheduler");
    (temp_dir, scheduler)
}
