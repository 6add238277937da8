use mindvault_core::{
    KvStudyRepository, MemoryStore, NoteFile, ReviewService, ReviewStatus, ServiceError,
    StudyRepository,
};
use uuid::Uuid;

fn seeded_store(names: &[&str]) -> MemoryStore {
    let mut store = MemoryStore::new();
    let files = names
        .iter()
        .map(|name| NoteFile::new(*name, "Physics"))
        .collect::<Vec<_>>();
    KvStudyRepository::new(&mut store).save_files(&files).unwrap();
    store
}

fn names(files: &[NoteFile]) -> Vec<&str> {
    files.iter().map(|file| file.name.as_str()).collect()
}

#[test]
fn delete_shifts_following_files_down() {
    let mut service = ReviewService::new(KvStudyRepository::new(seeded_store(&["a", "b", "c"])));

    let after_delete = service.delete_file(1).unwrap();
    assert_eq!(names(&after_delete), vec!["a", "c"]);

    let after_status = service.set_status(1, ReviewStatus::Reviewed).unwrap();
    assert_eq!(after_status[1].name, "c");
    assert!(after_status[1].is_reviewed());
    assert_eq!(after_status[0].status, None);
}

#[test]
fn latest_status_write_wins() {
    let mut service = ReviewService::new(KvStudyRepository::new(seeded_store(&["a"])));
    service.set_status(0, ReviewStatus::Reviewed).unwrap();
    service.set_status(0, ReviewStatus::ToReview).unwrap();

    let files = service.list().unwrap();
    assert_eq!(files[0].status, Some(ReviewStatus::ToReview));
}

#[test]
fn mutations_persist_across_service_instances() {
    let mut store = seeded_store(&["a", "b"]);
    ReviewService::new(KvStudyRepository::new(&mut store))
        .set_status(1, ReviewStatus::Reviewed)
        .unwrap();

    let files = KvStudyRepository::new(&mut store).load_files().unwrap();
    assert!(files[1].is_reviewed());
}

#[test]
fn out_of_range_index_is_reported_and_nothing_changes() {
    let mut store = seeded_store(&["a", "b", "c"]);
    let before = store.clone();
    let mut service = ReviewService::new(KvStudyRepository::new(&mut store));

    let err = service.set_status(3, ReviewStatus::Reviewed).unwrap_err();
    assert!(matches!(
        err,
        ServiceError::IndexOutOfRange { index: 3, len: 3 }
    ));
    let err = service.delete_file(10).unwrap_err();
    assert!(matches!(
        err,
        ServiceError::IndexOutOfRange { index: 10, len: 3 }
    ));
    assert_eq!(store, before);
}

#[test]
fn id_addressing_survives_deletes() {
    let mut service = ReviewService::new(KvStudyRepository::new(seeded_store(&["a", "b", "c"])));
    let files = service.list().unwrap();
    let third_id = files[2].id;

    service.delete_file_by_id(files[0].id).unwrap();
    let updated = service
        .set_status_by_id(third_id, ReviewStatus::Reviewed)
        .unwrap();
    assert_eq!(names(&updated), vec!["b", "c"]);
    assert!(updated[1].is_reviewed());

    let err = service.delete_file_by_id(Uuid::new_v4()).unwrap_err();
    assert!(matches!(err, ServiceError::FileNotFound(_)));
}

#[test]
fn legacy_ids_seen_on_read_address_the_same_file_on_write() {
    let mut store = MemoryStore::new().with_item(
        mindvault_core::store::KEY_UPLOADED_FILES,
        r#"[{"name":"a","tag":"X"},{"name":"b","tag":"X"}]"#,
    );
    let listed = KvStudyRepository::new(&mut store).load_files().unwrap();

    let updated = ReviewService::new(KvStudyRepository::new(&mut store))
        .set_status_by_id(listed[1].id, ReviewStatus::Reviewed)
        .unwrap();
    assert_eq!(updated[1].id, listed[1].id);
    assert!(updated[1].is_reviewed());

    let reloaded = KvStudyRepository::new(&mut store).load_files().unwrap();
    assert_eq!(reloaded, updated);
}
