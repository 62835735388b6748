use std::collections::HashSet;

use card_file_db::{RecordFilter, SortKey};
use card_file_model::types::RecordStatus;
use card_file_service::{RecordService, ServiceError};
use uuid::Uuid;

fn service() -> RecordService {
    RecordService::open_memory().unwrap()
}

#[test]
fn create_then_list_shows_active_record() {
    let svc = service();
    let created = svc.create("Task A", Some("first one")).unwrap();

    let rows = svc
        .list(&RecordFilter::default(), SortKey::Latest, 1, 10)
        .unwrap();
    assert_eq!(rows.len(), 1);
    assert_eq!(rows[0].id, created.id);
    assert_eq!(rows[0].name, "Task A");
    assert_eq!(rows[0].status, RecordStatus::Active);
}

#[test]
fn invalid_create_persists_nothing() {
    let svc = service();
    let err = svc.create("ab", None).unwrap_err();
    assert!(matches!(err, ServiceError::Validation(_)));
    assert_eq!(svc.count(&RecordFilter::default()).unwrap(), 0);
}

#[test]
fn create_validates_description_too() {
    let svc = service();
    let long = "d".repeat(256);
    let err = svc.create("Valid name", Some(&long)).unwrap_err();
    assert!(err.to_string().contains("cannot exceed 255"));
    assert_eq!(svc.count(&RecordFilter::default()).unwrap(), 0);
}

#[test]
fn update_with_short_name_leaves_row_unchanged() {
    let svc = service();
    let created = svc.create("Original name", None).unwrap();

    let err = svc
        .update(created.id, "AB", None, RecordStatus::Active)
        .unwrap_err();
    assert!(err.to_string().contains("between 3 and 50"));

    let stored = svc.get(created.id).unwrap().unwrap();
    assert_eq!(stored, created);
}

#[test]
fn update_missing_id_is_not_found() {
    let svc = service();
    let id = Uuid::new_v4();
    let err = svc
        .update(id, "Good name", None, RecordStatus::Active)
        .unwrap_err();
    assert!(matches!(err, ServiceError::NotFound(missing) if missing == id));
}

#[test]
fn update_overwrites_and_bumps_updated_at() {
    let svc = service();
    let created = svc.create("Before rename", Some("old text")).unwrap();

    let updated = svc
        .update(created.id, "After rename", None, RecordStatus::Archived)
        .unwrap();
    assert_eq!(updated.name, "After rename");
    assert_eq!(updated.description, None);
    assert_eq!(updated.status, RecordStatus::Archived);
    assert_eq!(updated.created_at, created.created_at);
    assert!(updated.updated_at >= created.updated_at);

    let stored = svc.get(created.id).unwrap().unwrap();
    assert_eq!(stored, updated);
}

#[test]
fn delete_twice_succeeds() {
    let svc = service();
    let created = svc.create("Short lived", None).unwrap();

    svc.delete(created.id).unwrap();
    svc.delete(created.id).unwrap();
    assert!(svc.get(created.id).unwrap().is_none());
}

#[test]
fn pages_partition_the_whole_set() {
    let svc = service();
    for i in 1..=15 {
        svc.create(&format!("Task {i:02}"), None).unwrap();
    }

    let mut seen = HashSet::new();
    for page in 1..=3 {
        let rows = svc
            .list(&RecordFilter::default(), SortKey::Name, page, 5)
            .unwrap();
        assert_eq!(rows.len(), 5);
        for row in rows {
            assert!(seen.insert(row.id), "row appeared on two pages");
        }
    }
    assert_eq!(seen.len(), 15);

    let past_end = svc
        .list(&RecordFilter::default(), SortKey::Name, 4, 5)
        .unwrap();
    assert!(past_end.is_empty());
}

#[test]
fn zero_page_or_page_size_is_rejected() {
    let svc = service();
    let err = svc
        .list(&RecordFilter::default(), SortKey::Latest, 0, 10)
        .unwrap_err();
    assert!(matches!(
        err,
        ServiceError::InvalidPage {
            page: 0,
            page_size: 10
        }
    ));

    let err = svc
        .list(&RecordFilter::default(), SortKey::Latest, 1, 0)
        .unwrap_err();
    assert!(matches!(
        err,
        ServiceError::InvalidPage {
            page: 1,
            page_size: 0
        }
    ));
}

#[test]
fn list_page_reports_totals() {
    let svc = service();
    for i in 1..=7 {
        svc.create(&format!("Task {i}"), None).unwrap();
    }

    let page = svc
        .list_page(&RecordFilter::default(), SortKey::Name, 2, 3)
        .unwrap();
    assert_eq!(page.records.len(), 3);
    assert_eq!(page.total, 7);
    assert_eq!(page.total_pages(), 3);
    assert!(page.has_prev());
    assert!(page.has_next());

    let last = svc
        .list_page(&RecordFilter::default(), SortKey::Name, 3, 3)
        .unwrap();
    assert_eq!(last.records.len(), 1);
    assert!(!last.has_next());
}

#[test]
fn empty_store_still_reports_one_page() {
    let svc = service();
    let page = svc
        .list_page(&RecordFilter::default(), SortKey::Latest, 1, 10)
        .unwrap();
    assert!(page.records.is_empty());
    assert_eq!(page.total, 0);
    assert_eq!(page.total_pages(), 1);
    assert!(!page.has_prev());
    assert!(!page.has_next());
}

#[test]
fn filtered_listing_and_count_agree() {
    let svc = service();
    svc.create("Grocery run", Some("milk and eggs")).unwrap();
    svc.create("Work report", Some("quarterly milk numbers"))
        .unwrap();
    let old = svc.create("Old plan", None).unwrap();
    svc.update(old.id, "Old plan", None, RecordStatus::Archived)
        .unwrap();

    let milk = RecordFilter {
        search: Some("milk"),
        ..Default::default()
    };
    let rows = svc.list(&milk, SortKey::Name, 1, 10).unwrap();
    assert_eq!(rows.len(), 2);
    assert_eq!(svc.count(&milk).unwrap(), 2);

    let archived = RecordFilter {
        status: Some(RecordStatus::Archived),
        ..Default::default()
    };
    let rows = svc.list(&archived, SortKey::Name, 1, 10).unwrap();
    assert_eq!(rows.len(), 1);
    assert_eq!(rows[0].name, "Old plan");
}

#[test]
fn seeding_runs_only_on_empty_store() {
    let svc = service();
    assert_eq!(svc.seed_demo_records().unwrap(), 3);
    assert_eq!(svc.seed_demo_records().unwrap(), 0);

    let stats = svc.stats().unwrap();
    assert_eq!(stats.total, 3);
    assert_eq!(stats.active, 2);
    assert_eq!(stats.inactive, 1);
    assert_eq!(stats.archived, 0);
}

#[test]
fn open_creates_database_file() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("records.db");

    {
        let svc = RecordService::open(&path).unwrap();
        svc.create("Persisted task", None).unwrap();
    }

    let svc = RecordService::open(&path).unwrap();
    assert_eq!(svc.count(&RecordFilter::default()).unwrap(), 1);
}
