use mindvault_core::store::{KeyValueStore, KEY_UPLOADED_FILES, KEY_UPLOADED_LINKS, KEY_USERNAME};
use mindvault_core::{
    DashboardService, KvStudyRepository, MemoryStore, SelectedFile, UploadService,
    DEFAULT_SUBJECTS, EMPTY_SUBJECT_PLACEHOLDER,
};

fn seeded_store() -> MemoryStore {
    MemoryStore::new()
        .with_item(
            KEY_UPLOADED_FILES,
            r#"[{"name":"a","tag":"X"},{"name":"b","tag":"Y"},{"name":"c","tag":"X"}]"#,
        )
        .with_item(
            KEY_UPLOADED_LINKS,
            r#"[{"link":"https://x/1","tag":"X"},{"link":"https://y/1","tag":"Y"}]"#,
        )
}

#[test]
fn filter_returns_only_exact_matches_in_insertion_order() {
    let dashboard = DashboardService::new(KvStudyRepository::new(seeded_store()));
    let filtered = dashboard.filter_by_subject("X").unwrap();

    let names = filtered
        .files
        .iter()
        .map(|file| file.name.as_str())
        .collect::<Vec<_>>();
    assert_eq!(names, vec!["a", "c"]);
    assert!(filtered.files.iter().all(|file| file.tag == "X"));
    assert_eq!(filtered.links.len(), 1);
    assert_eq!(filtered.links[0].link, "https://x/1");
}

#[test]
fn two_file_example_keeps_first_only() {
    let store = MemoryStore::new().with_item(
        KEY_UPLOADED_FILES,
        r#"[{"name":"a","tag":"X"},{"name":"b","tag":"Y"}]"#,
    );
    let dashboard = DashboardService::new(KvStudyRepository::new(store));
    let filtered = dashboard.filter_by_subject("X").unwrap();
    assert_eq!(filtered.files.len(), 1);
    assert_eq!(filtered.files[0].name, "a");
    assert_eq!(filtered.files[0].tag, "X");
    assert!(filtered.links.is_empty());
}

#[test]
fn section_is_tri_state() {
    let dashboard = DashboardService::new(KvStudyRepository::new(seeded_store()));

    assert!(dashboard.section(None).unwrap().is_none());
    assert!(dashboard.section(Some("")).unwrap().is_none());

    let populated = dashboard.section(Some("Y")).unwrap().unwrap();
    assert!(!populated.is_empty());
    assert_eq!(populated.placeholder(), None);

    let empty = dashboard.section(Some("Deep Learning")).unwrap().unwrap();
    assert_eq!(empty.subject, "Deep Learning");
    assert!(empty.is_empty());
    assert_eq!(empty.placeholder(), Some(EMPTY_SUBJECT_PLACEHOLDER));
}

#[test]
fn snapshot_reflects_uploads_and_username() {
    let mut store = MemoryStore::new().with_item(KEY_USERNAME, "\"Ada\"");
    {
        let mut uploads = UploadService::new(KvStudyRepository::new(&mut store));
        uploads
            .upload_file(Some(&SelectedFile::new("svm.pdf")), "Kernels")
            .unwrap();
        uploads.upload_link("https://youtu.be/k", "Kernels").unwrap();
    }

    let snapshot = DashboardService::new(KvStudyRepository::new(&mut store))
        .snapshot()
        .unwrap();
    assert_eq!(snapshot.username.as_deref(), Some("Ada"));
    assert_eq!(snapshot.subjects.len(), DEFAULT_SUBJECTS.len() + 1);
    assert_eq!(snapshot.subjects[DEFAULT_SUBJECTS.len()], "Kernels");
    assert_eq!(snapshot.files.len(), 1);
    assert_eq!(snapshot.links.len(), 1);
}

#[test]
fn empty_store_snapshot_has_defaults_only() {
    let snapshot = DashboardService::new(KvStudyRepository::new(MemoryStore::new()))
        .snapshot()
        .unwrap();
    assert!(snapshot.username.is_none());
    assert_eq!(snapshot.subjects, DEFAULT_SUBJECTS.to_vec());
    assert!(snapshot.files.is_empty());
    assert!(snapshot.links.is_empty());
}

#[test]
fn dashboard_reads_leave_legacy_and_malformed_records_untouched() {
    let files = r#"[{"name":"a","tag":"X"},{"tag":"X"},{"name":"c","tag":"X"}]"#;
    let mut store = seeded_store().with_item(KEY_UPLOADED_FILES, files);
    let before = store.clone();

    let dashboard = DashboardService::new(KvStudyRepository::new(&mut store));
    let filtered = dashboard.filter_by_subject("X").unwrap();
    assert_eq!(filtered.files.len(), 2);
    dashboard.snapshot().unwrap();
    dashboard.section(Some("X")).unwrap();
    dashboard.section(Some("Nothing here")).unwrap();
    drop(dashboard);

    assert_eq!(store, before);
    assert_eq!(store.get_item(KEY_UPLOADED_FILES).unwrap().as_deref(), Some(files));
}

#[test]
fn legacy_file_ids_match_across_dashboard_reads() {
    let dashboard = DashboardService::new(KvStudyRepository::new(seeded_store()));
    let first = dashboard.snapshot().unwrap();
    let second = dashboard.filter_by_subject("X").unwrap();
    assert_eq!(first.files[0].id, second.files[0].id);
    assert_eq!(first.files[2].id, second.files[1].id);
}
