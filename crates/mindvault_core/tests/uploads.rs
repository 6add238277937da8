use mindvault_core::store::{KEY_SUBJECTS, KEY_UPLOADED_FILES, KEY_UPLOADED_LINKS};
use mindvault_core::{
    KeyValueStore, KvStudyRepository, MemoryStore, SelectedFile, ServiceError, StudyRepository,
    UploadService, ValidationError, ValidationMode,
};
use serde_json::Value;

#[test]
fn upload_file_appends_and_persists_record() {
    let mut store = MemoryStore::new();
    let created = {
        let mut uploads = UploadService::new(KvStudyRepository::new(&mut store));
        uploads
            .upload_file(Some(&SelectedFile::new("week1.pdf")), "Deep Learning")
            .unwrap()
            .expect("valid upload should create a record")
    };
    assert_eq!(created.name, "week1.pdf");
    assert_eq!(created.tag, "Deep Learning");
    assert_eq!(created.status, None);

    let raw = store.get_item(KEY_UPLOADED_FILES).unwrap().unwrap();
    let persisted: Value = serde_json::from_str(&raw).unwrap();
    assert_eq!(persisted.as_array().map(Vec::len), Some(1));
    assert_eq!(persisted[0]["name"], "week1.pdf");
    assert_eq!(persisted[0]["tag"], "Deep Learning");
    assert_eq!(persisted[0]["id"], created.id.to_string());
    assert!(persisted[0].get("status").is_none());
}

#[test]
fn upload_preserves_existing_records_and_order() {
    let mut store = MemoryStore::new().with_item(
        KEY_UPLOADED_FILES,
        r#"[{"name":"old.pdf","tag":"Biology","status":"Reviewed"}]"#,
    );
    let mut repo = KvStudyRepository::new(&mut store);
    {
        let mut uploads = UploadService::new(&mut repo);
        uploads
            .upload_file(Some(&SelectedFile::new("new.pdf")), "Biology")
            .unwrap();
    }
    let files = repo.load_files().unwrap();
    let names = files.iter().map(|f| f.name.as_str()).collect::<Vec<_>>();
    assert_eq!(names, vec!["old.pdf", "new.pdf"]);
    assert!(files[0].is_reviewed());
}

#[test]
fn invalid_file_uploads_are_silent_noops() {
    let mut store = MemoryStore::new();
    {
        let mut uploads = UploadService::new(KvStudyRepository::new(&mut store));
        assert!(uploads.upload_file(None, "Physics").unwrap().is_none());
        assert!(uploads
            .upload_file(Some(&SelectedFile::new("")), "Physics")
            .unwrap()
            .is_none());
        assert!(uploads
            .upload_file(Some(&SelectedFile::new("a.pdf")), "")
            .unwrap()
            .is_none());
        assert!(uploads
            .upload_file(Some(&SelectedFile::new("a.pdf")), "  \t")
            .unwrap()
            .is_none());
    }
    assert!(store.is_empty());
}

#[test]
fn invalid_link_uploads_are_silent_noops() {
    let mut store = MemoryStore::new();
    {
        let mut uploads = UploadService::new(KvStudyRepository::new(&mut store));
        assert!(uploads.upload_link("   ", "Physics").unwrap().is_none());
        assert!(uploads
            .upload_link("https://youtu.be/x", "")
            .unwrap()
            .is_none());
    }
    assert!(store.is_empty());
}

#[test]
fn strict_mode_reports_validation_errors() {
    let mut uploads = UploadService::with_validation(
        KvStudyRepository::new(MemoryStore::new()),
        ValidationMode::Strict,
    );
    let err = uploads.upload_file(None, "Physics").unwrap_err();
    assert!(matches!(
        err,
        ServiceError::Validation(ValidationError::MissingFile)
    ));
    let err = uploads.upload_link("https://x", " ").unwrap_err();
    assert!(matches!(
        err,
        ServiceError::Validation(ValidationError::EmptyTag)
    ));
}

#[test]
fn upload_link_appends_and_registers_subject() {
    let mut store = MemoryStore::new();
    {
        let mut uploads = UploadService::new(KvStudyRepository::new(&mut store));
        let link = uploads
            .upload_link("https://youtu.be/abc", "Statistics")
            .unwrap()
            .unwrap();
        assert_eq!(link.link, "https://youtu.be/abc");
        uploads
            .upload_link("https://youtu.be/def", "Statistics")
            .unwrap();
    }

    let links: Value =
        serde_json::from_str(&store.get_item(KEY_UPLOADED_LINKS).unwrap().unwrap()).unwrap();
    assert_eq!(links.as_array().map(Vec::len), Some(2));
    assert_eq!(links[1], serde_json::json!({"link": "https://youtu.be/def", "tag": "Statistics"}));

    let subjects: Vec<String> =
        serde_json::from_str(&store.get_item(KEY_SUBJECTS).unwrap().unwrap()).unwrap();
    assert_eq!(subjects.iter().filter(|s| *s == "Statistics").count(), 1);
}

#[test]
fn uploading_under_default_subject_does_not_touch_subjects_key() {
    let mut store = MemoryStore::new();
    {
        let mut uploads = UploadService::new(KvStudyRepository::new(&mut store));
        uploads
            .upload_file(Some(&SelectedFile::new("nn.pdf")), "Neural Networks")
            .unwrap();
    }
    assert!(store.get_item(KEY_SUBJECTS).unwrap().is_none());
}
