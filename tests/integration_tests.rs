use predicates::prelude::PredicateBooleanExt;
use predicates::str::contains;

mod common;
use common::{future_date, init_test_db, list_ids, rin, setup_test_db};

fn add_args<'a>(
    db: &'a str,
    candidate: &'a str,
    interviewer: &'a str,
    date: &'a str,
    start: &'a str,
) -> Vec<&'a str> {
    vec![
        "--db",
        db,
        "add",
        "--candidate",
        candidate,
        "--interviewer",
        interviewer,
        "--date",
        date,
        "--start",
        start,
        "--type",
        "technical",
        "--no-email",
    ]
}

#[test]
fn test_init_creates_database() {
    let db_path = setup_test_db("init");

    rin()
        .args(["--db", &db_path, "--test", "init"])
        .assert()
        .success()
        .stdout(contains("Database initialized"));

    assert!(std::path::Path::new(&db_path).exists());
}

#[test]
fn test_add_and_list() {
    let db_path = init_test_db("add_list");
    let date = future_date(3);

    rin()
        .args(add_args(&db_path, "Alice", "Bob", &date, "10:00"))
        .assert()
        .success()
        .stdout(contains("Scheduled Alice with Bob"));

    rin()
        .args(["--db", &db_path, "list"])
        .assert()
        .success()
        .stdout(contains("Alice"))
        .stdout(contains("Bob"))
        .stdout(contains("10:00 AM - 10:10 AM"))
        .stdout(contains("Technical"));

    assert_eq!(list_ids(&db_path).len(), 1);
}

#[test]
fn test_add_duplicate_slot_is_conflict() {
    let db_path = init_test_db("conflict");
    let date = future_date(2);

    rin()
        .args(add_args(&db_path, "Alice", "Bob", &date, "10:00"))
        .assert()
        .success();

    rin()
        .args(add_args(&db_path, "Alice", "Carol", &date, "10:00"))
        .assert()
        .failure()
        .stderr(contains("Conflict"));

    // one minute later is fine under exact-match rules
    rin()
        .args(add_args(&db_path, "Alice", "Carol", &date, "10:01"))
        .assert()
        .success();

    assert_eq!(list_ids(&db_path).len(), 2);
}

#[test]
fn test_add_requires_fields_and_valid_slot() {
    let db_path = init_test_db("add_validation");
    let date = future_date(2);

    rin()
        .args([
            "--db", &db_path, "add", "--interviewer", "Bob", "--date", &date, "--start", "10:00",
            "--type", "hr", "--no-email",
        ])
        .assert()
        .failure()
        .stderr(contains("Candidate name is required."));

    rin()
        .args([
            "--db", &db_path, "add", "-c", "Alice", "-i", "Bob", "-d", &date, "-s", "10:00", "-e",
            "10:05", "-t", "hr", "--no-email",
        ])
        .assert()
        .failure()
        .stderr(contains("at least 10 minutes"));

    rin()
        .args([
            "--db", &db_path, "add", "-c", "Alice", "-i", "Bob", "-d", &date, "-s", "23:55", "-t",
            "hr", "--no-email",
        ])
        .assert()
        .failure()
        .stderr(contains("Start time too late"));

    rin()
        .args([
            "--db", &db_path, "add", "-c", "Alice", "-i", "Bob", "-d", &date, "-s", "10:00", "-t",
            "lunch", "--no-email",
        ])
        .assert()
        .failure()
        .stderr(contains("Invalid interview type"));

    assert!(list_ids(&db_path).is_empty());
}

#[test]
fn test_add_in_the_past_is_rejected() {
    let db_path = init_test_db("add_past");

    rin()
        .args(add_args(&db_path, "Alice", "Bob", "2020-01-01", "10:00"))
        .assert()
        .failure()
        .stderr(contains("past date"));
}

#[test]
fn test_add_without_recipient_email_is_rejected() {
    let db_path = init_test_db("no_recipient");
    let date = future_date(2);

    rin()
        .args([
            "--db", &db_path, "add", "-c", "Alice", "-i", "Bob", "-d", &date, "-s", "10:00", "-t",
            "hr",
        ])
        .assert()
        .failure()
        .stderr(contains("Recipient email not found"));

    assert!(list_ids(&db_path).is_empty());
}

#[test]
fn test_email_set_and_show() {
    let db_path = init_test_db("email");

    rin()
        .args(["--db", &db_path, "email"])
        .assert()
        .success()
        .stdout(contains("No recipient email set"));

    rin()
        .args(["--db", &db_path, "email", "--set", "broken"])
        .assert()
        .failure()
        .stderr(contains("Invalid email address"));

    rin()
        .args(["--db", &db_path, "email", "--set", "hr@example.com"])
        .assert()
        .success();

    rin()
        .args(["--db", &db_path, "email"])
        .assert()
        .success()
        .stdout(contains("hr@example.com"));
}

#[test]
fn test_edit_changes_fields_and_keeps_id() {
    let db_path = init_test_db("edit");
    let date = future_date(4);

    rin()
        .args(add_args(&db_path, "Alice", "Bob", &date, "10:00"))
        .assert()
        .success();
    let id = list_ids(&db_path).remove(0);

    rin()
        .args([
            "--db", &db_path, "edit", &id, "--interviewer", "Dana", "--start", "14:00", "--type",
            "behavioral",
        ])
        .assert()
        .success()
        .stdout(contains("Slot updated"));

    rin()
        .args(["--db", &db_path, "list", "--json"])
        .assert()
        .success()
        .stdout(contains(id.as_str()))
        .stdout(contains("\"interviewer\": \"Dana\""))
        .stdout(contains("\"timeSlotStart\": \"14:00\""))
        .stdout(contains("\"timeSlotEnd\": \"14:10\""))
        .stdout(contains("Behavioral"));

    rin()
        .args(["--db", &db_path, "edit", "missing-id", "--candidate", "X"])
        .assert()
        .failure()
        .stderr(contains("not found"));
}

#[test]
fn test_move_keeps_duration() {
    let db_path = init_test_db("move");
    let date = future_date(2);
    let target = future_date(5);

    rin()
        .args([
            "--db", &db_path, "add", "-c", "Alice", "-i", "Bob", "-d", &date, "-s", "09:00", "-e",
            "09:45", "-t", "HR", "--no-email",
        ])
        .assert()
        .success();
    let id = list_ids(&db_path).remove(0);

    rin()
        .args(["--db", &db_path, "move", &id, "--date", &target, "--start", "16:00"])
        .assert()
        .success()
        .stdout(contains("4:00 PM - 4:45 PM"));

    rin()
        .args(["--db", &db_path, "move", &id, "--date", "2020-01-01", "--start", "16:00"])
        .assert()
        .failure()
        .stderr(contains("past date"));
}

#[test]
fn test_delete_is_idempotent() {
    let db_path = init_test_db("del");
    let date = future_date(2);

    rin()
        .args(add_args(&db_path, "Alice", "Bob", &date, "10:00"))
        .assert()
        .success();
    let id = list_ids(&db_path).remove(0);

    rin()
        .args(["--db", &db_path, "del", &id, "--yes"])
        .assert()
        .success()
        .stdout(contains("Slot deleted"));

    rin()
        .args(["--db", &db_path, "del", &id, "--yes"])
        .assert()
        .success()
        .stdout(contains("nothing to delete"));

    assert!(list_ids(&db_path).is_empty());
}

#[test]
fn test_delete_cancelled_without_confirmation() {
    let db_path = init_test_db("del_cancel");
    let date = future_date(2);

    rin()
        .args(add_args(&db_path, "Alice", "Bob", &date, "10:00"))
        .assert()
        .success();
    let id = list_ids(&db_path).remove(0);

    rin()
        .args(["--db", &db_path, "del", &id])
        .write_stdin("n\n")
        .assert()
        .success()
        .stdout(contains("Operation cancelled"));

    assert_eq!(list_ids(&db_path), vec![id]);
}

#[test]
fn test_list_filters() {
    let db_path = init_test_db("list_filter");
    let d1 = future_date(2);
    let d2 = future_date(3);

    rin()
        .args(add_args(&db_path, "Alice Smith", "Bob", &d1, "10:00"))
        .assert()
        .success();
    rin()
        .args(add_args(&db_path, "Carol", "Eve", &d2, "11:00"))
        .assert()
        .success();

    rin()
        .args(["--db", &db_path, "list", "--candidate", "alice"])
        .assert()
        .success()
        .stdout(contains("Alice Smith").and(contains("Carol").not()));

    rin()
        .args(["--db", &db_path, "list", "--date", &d2])
        .assert()
        .success()
        .stdout(contains("Carol").and(contains("Alice").not()));

    rin()
        .args(["--db", &db_path, "list", "--interviewer", "zzz"])
        .assert()
        .success()
        .stdout(contains("No interviews match the filter."));
}

#[test]
fn test_notify_ignores_far_interviews() {
    let db_path = init_test_db("notify");
    let date = future_date(10);

    rin()
        .args(add_args(&db_path, "Alice", "Bob", &date, "10:00"))
        .assert()
        .success();

    rin()
        .args(["--db", &db_path, "notify"])
        .assert()
        .success()
        .stdout(contains("No upcoming interviews within the next 2h."));
}

#[test]
fn test_slots_helper() {
    rin()
        .args(["slots", "09:00"])
        .assert()
        .success()
        .stdout(contains("09:10"))
        .stdout(contains("09:30"))
        .stdout(contains("9:30 AM"));

    rin()
        .args(["slots", "23:55"])
        .assert()
        .success()
        .stdout(contains("Start time too late"));

    rin()
        .args(["slots", "25:00"])
        .assert()
        .failure()
        .stderr(contains("Invalid time format"));
}

#[test]
fn test_log_records_operations() {
    let db_path = init_test_db("log");
    let date = future_date(2);

    rin()
        .args(add_args(&db_path, "Alice", "Bob", &date, "10:00"))
        .assert()
        .success();

    rin()
        .args(["--db", &db_path, "log", "--print"])
        .assert()
        .success()
        .stdout(contains("init"))
        .stdout(contains("add"))
        .stdout(contains("Alice / Bob"));
}

#[test]
fn test_notify_rejects_out_of_range_window() {
    let db_path = init_test_db("notify_window");

    rin()
        .args(["--db", &db_path, "notify", "--window", "9223372036854775807"])
        .assert()
        .failure()
        .code(1)
        .stderr(contains("Notification window must be a positive number of minutes"));

    rin()
        .args(["--db", &db_path, "notify", "--window", "0"])
        .assert()
        .failure()
        .code(1)
        .stderr(contains("Notification window"));
}

#[test]
fn test_multiline_name_is_rejected() {
    let db_path = init_test_db("multiline_name");
    let date = future_date(2);

    rin()
        .args(add_args(&db_path, "Ali\nce", "Bob", &date, "10:00"))
        .assert()
        .failure()
        .stderr(contains("must not contain control characters"));

    rin()
        .args(["--db", &db_path, "list"])
        .assert()
        .success()
        .stdout(contains("No interviews scheduled."));
}

#[test]
fn test_list_survives_multiline_name_in_stored_snapshot() {
    use rinterviews::db::pool::DbPool;
    use rinterviews::db::storage::{INTERVIEWS_KEY, SnapshotStorage};

    let db_path = init_test_db("multiline_snapshot");
    let date = future_date(2);
    {
        let mut pool = DbPool::open(&db_path).unwrap();
        let snapshot = format!(
            r#"[{{"id":"a","candidate":"Ali\nce","interviewer":"Bob","date":"{d}","timeSlotStart":"10:00","timeSlotEnd":"10:10","interviewType":"HR"}},
               {{"id":"b","candidate":"Carol","interviewer":"Eve","date":"{d}","timeSlotStart":"11:00","timeSlotEnd":"11:10","interviewType":"Technical"}}]"#,
            d = date
        );
        pool.write(INTERVIEWS_KEY, &snapshot).unwrap();
    }

    rin()
        .args(["--db", &db_path, "list"])
        .assert()
        .success()
        .stdout(contains("Ali ce"))
        .stdout(contains("Carol"))
        .stdout(contains("2 interview(s)"));
}

#[test]
fn test_list_json_on_fresh_database_is_pure_json() {
    let db_path = setup_test_db("fresh_json");

    let out = rin()
        .args(["--db", &db_path, "list", "--json"])
        .output()
        .expect("failed to run list --json");
    assert!(out.status.success());

    let v: serde_json::Value =
        serde_json::from_slice(&out.stdout).expect("stdout is a JSON document");
    assert_eq!(v, serde_json::json!([]));
}

#[test]
fn test_init_reports_migrations() {
    let db_path = setup_test_db("init_migrations");

    rin()
        .args(["--db", &db_path, "--test", "init"])
        .assert()
        .success()
        .stdout(contains("Migration applied: 20250301_0001_create_kv_store"));
}
