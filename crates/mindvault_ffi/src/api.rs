//! FFI use-case API for Flutter-facing calls.
//!
//! # Responsibility
//! - Expose the dashboard, upload, review, flashcard and quiz operations to
//!   the UI shell.
//! - Open the persisted store per call so each call sees committed state.
//!
//! # Invariants
//! - Exported functions must not panic across FFI boundary.
//! - File records cross the boundary by stable id string, never by pointer.
//! - Silent validation rejections return `ok=false` with a `skipped` message.

use mindvault_core::{
    core_version as core_version_inner, epoch_day_from_millis, init_logging as init_logging_inner,
    open_store, ping as ping_inner, CoreConfig, DashboardService, Difficulty, Flashcard,
    FlashcardService, KvStudyRepository, LinkEntry, NoteFile, QuizQuestion, QuizService,
    ReviewService, ReviewStatus, SelectedFile, ServiceError, SqliteStore, SubjectRegistry,
    UploadService,
};
use log::warn;
use std::path::PathBuf;
use std::sync::OnceLock;
use std::time::{SystemTime, UNIX_EPOCH};
use uuid::Uuid;

const STORE_FILE_NAME: &str = "mindvault.sqlite3";
const STORE_PATH_ENV: &str = "MINDVAULT_DB_PATH";
const FLASHCARD_DEFAULT_COUNT: u32 = 5;
const FLASHCARD_COUNT_MAX: u32 = 50;
static CORE_CONFIG: OnceLock<CoreConfig> = OnceLock::new();
static STORE_PATH: OnceLock<PathBuf> = OnceLock::new();

/// Minimal health-check API for FRB smoke integration.
#[flutter_rust_bridge::frb(sync)]
pub fn ping() -> String {
    ping_inner().to_owned()
}

/// Expose core crate version through FFI.
#[flutter_rust_bridge::frb(sync)]
pub fn core_version() -> String {
    core_version_inner().to_owned()
}

/// Initializes Rust core logging once per process.
///
/// Returns an empty string on success and an error message on failure.
#[flutter_rust_bridge::frb(sync)]
pub fn init_logging(level: String, log_dir: String) -> String {
    match init_logging_inner(level.as_str(), log_dir.as_str()) {
        Ok(()) => String::new(),
        Err(err) => err,
    }
}

/// Applies a JSON core config (`{"validation": "strict", "store_path": "..."}`).
///
/// # FFI contract
/// - Must be called before the first store-backed call to take effect.
/// - Only the first successful call wins; later calls return an error.
/// - Returns empty string on success.
#[flutter_rust_bridge::frb(sync)]
pub fn configure(config_json: String) -> String {
    let config = match CoreConfig::from_json_str(config_json.as_str()) {
        Ok(config) => config,
        Err(err) => return format!("invalid config: {err}"),
    };
    match CORE_CONFIG.set(config) {
        Ok(()) => String::new(),
        Err(_) => "config already applied".to_string(),
    }
}

/// One uploaded file as shown by the views.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FileItem {
    pub id: String,
    pub name: String,
    pub tag: String,
    /// `Reviewed` or `To Review`; unset status is reported as `To Review`.
    pub status: String,
}

/// One uploaded link as shown by the views.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LinkItem {
    pub link: String,
    pub tag: String,
}

/// Dashboard payload rendered on mount.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DashboardResponse {
    pub username: Option<String>,
    pub subjects: Vec<String>,
    pub files: Vec<FileItem>,
    pub links: Vec<LinkItem>,
    /// Empty on success; error text otherwise.
    pub message: String,
}

/// Filtered section for a selected subject.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SectionResponse {
    /// `false` when no subject is selected; other fields are then empty.
    pub selected: bool,
    pub files: Vec<FileItem>,
    pub links: Vec<LinkItem>,
    /// Placeholder text when the selected subject has no material.
    pub placeholder: Option<String>,
    pub message: String,
}

/// File list returned after review mutations.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FilesResponse {
    pub ok: bool,
    pub files: Vec<FileItem>,
    pub message: String,
}

/// One flashcard as shown by the deck view.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FlashcardItem {
    pub id: u32,
    pub content: String,
    /// Days since the Unix epoch; `None` until the card is first rated.
    pub next_review_epoch_day: Option<i64>,
    pub easiness_streak: u32,
}

/// Flashcard list envelope.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FlashcardsResponse {
    pub ok: bool,
    pub cards: Vec<FlashcardItem>,
    pub message: String,
}

/// One stored multiple-choice question.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct QuizItem {
    pub question: String,
    pub options: Vec<String>,
    pub answer: String,
}

/// Stored quiz envelope.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct QuizResponse {
    pub ok: bool,
    pub questions: Vec<QuizItem>,
    pub message: String,
}

/// Generic action response envelope.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ActionResponse {
    pub ok: bool,
    /// Created or affected record id, when there is one.
    pub id: Option<String>,
    pub message: String,
}

impl ActionResponse {
    fn success(message: impl Into<String>, id: Option<String>) -> Self {
        Self {
            ok: true,
            id,
            message: message.into(),
        }
    }

    fn skipped(operation: &str) -> Self {
        Self::failure(format!("{operation} skipped: missing input"))
    }

    fn failure(message: impl Into<String>) -> Self {
        Self {
            ok: false,
            id: None,
            message: message.into(),
        }
    }
}

impl FilesResponse {
    fn from_result(operation: &str, result: Result<Vec<NoteFile>, String>) -> Self {
        match result {
            Ok(files) => Self {
                ok: true,
                files: files.iter().map(to_file_item).collect(),
                message: String::new(),
            },
            Err(err) => Self {
                ok: false,
                files: Vec::new(),
                message: format!("{operation} failed: {err}"),
            },
        }
    }
}

impl FlashcardsResponse {
    fn from_result(operation: &str, result: Result<Vec<Flashcard>, String>) -> Self {
        match result {
            Ok(cards) => Self {
                ok: true,
                cards: cards.iter().map(to_flashcard_item).collect(),
                message: String::new(),
            },
            Err(err) => Self {
                ok: false,
                cards: Vec::new(),
                message: format!("{operation} failed: {err}"),
            },
        }
    }
}

impl QuizResponse {
    fn from_result(operation: &str, result: Result<Vec<QuizQuestion>, String>) -> Self {
        match result {
            Ok(questions) => Self {
                ok: true,
                questions: questions.iter().map(to_quiz_item).collect(),
                message: String::new(),
            },
            Err(err) => Self {
                ok: false,
                questions: Vec::new(),
                message: format!("{operation} failed: {err}"),
            },
        }
    }
}

/// Loads everything the dashboard shows before a subject is picked.
#[flutter_rust_bridge::frb(sync)]
pub fn dashboard_snapshot() -> DashboardResponse {
    let result = with_store(|store| {
        DashboardService::new(KvStudyRepository::new(store))
            .snapshot()
            .map_err(|err| err.to_string())
    });
    match result {
        Ok(snapshot) => DashboardResponse {
            username: snapshot.username,
            subjects: snapshot.subjects,
            files: snapshot.files.iter().map(to_file_item).collect(),
            links: snapshot.links.iter().map(to_link_item).collect(),
            message: String::new(),
        },
        Err(err) => DashboardResponse {
            username: None,
            subjects: Vec::new(),
            files: Vec::new(),
            links: Vec::new(),
            message: format!("dashboard_snapshot failed: {err}"),
        },
    }
}

/// Filters files and links for the selected subject (`None` = no selection).
#[flutter_rust_bridge::frb(sync)]
pub fn dashboard_section(subject: Option<String>) -> SectionResponse {
    let result = with_store(|store| {
        DashboardService::new(KvStudyRepository::new(store))
            .section(subject.as_deref())
            .map_err(|err| err.to_string())
    });
    match result {
        Ok(Some(section)) => SectionResponse {
            selected: true,
            placeholder: section.placeholder().map(str::to_string),
            files: section.matches.files.iter().map(to_file_item).collect(),
            links: section.matches.links.iter().map(to_link_item).collect(),
            message: String::new(),
        },
        Ok(None) => SectionResponse {
            selected: false,
            files: Vec::new(),
            links: Vec::new(),
            placeholder: None,
            message: String::new(),
        },
        Err(err) => SectionResponse {
            selected: subject.is_some(),
            files: Vec::new(),
            links: Vec::new(),
            placeholder: None,
            message: format!("dashboard_section failed: {err}"),
        },
    }
}

/// Adds a subject and returns the full list (defaults first).
///
/// Returns an empty list only on storage failure.
#[flutter_rust_bridge::frb(sync)]
pub fn subjects_add(name: String) -> Vec<String> {
    with_store(|store| {
        SubjectRegistry::with_validation(KvStudyRepository::new(store), validation_mode())
            .add(name.as_str())
            .map_err(|err| err.to_string())
    })
    .unwrap_or_default()
}

/// Records an uploaded file (`file_name=None` when nothing is selected).
#[flutter_rust_bridge::frb(sync)]
pub fn upload_file(file_name: Option<String>, tag: String) -> ActionResponse {
    let selected = file_name.map(SelectedFile::new);
    let result = with_store(|store| {
        UploadService::with_validation(KvStudyRepository::new(store), validation_mode())
            .upload_file(selected.as_ref(), tag.as_str())
            .map_err(|err| err.to_string())
    });
    match result {
        Ok(Some(file)) => ActionResponse::success("File uploaded.", Some(file.id.to_string())),
        Ok(None) => ActionResponse::skipped("upload_file"),
        Err(err) => ActionResponse::failure(format!("upload_file failed: {err}")),
    }
}

/// Records an uploaded lecture link.
#[flutter_rust_bridge::frb(sync)]
pub fn upload_link(url: String, tag: String) -> ActionResponse {
    let result = with_store(|store| {
        UploadService::with_validation(KvStudyRepository::new(store), validation_mode())
            .upload_link(url.as_str(), tag.as_str())
            .map_err(|err| err.to_string())
    });
    match result {
        Ok(Some(_)) => ActionResponse::success("Link uploaded.", None),
        Ok(None) => ActionResponse::skipped("upload_link"),
        Err(err) => ActionResponse::failure(format!("upload_link failed: {err}")),
    }
}

/// Lists uploaded files in display order.
#[flutter_rust_bridge::frb(sync)]
pub fn review_list() -> FilesResponse {
    FilesResponse::from_result(
        "review_list",
        with_review(|service| service.list()),
    )
}

/// Sets review status (`Reviewed` or `To Review`) on the file with `file_id`.
#[flutter_rust_bridge::frb(sync)]
pub fn review_set_status(file_id: String, status: String) -> FilesResponse {
    let parsed = parse_file_id(file_id.as_str()).and_then(|id| {
        ReviewStatus::parse(status.trim())
            .map(|status| (id, status))
            .ok_or_else(|| format!("unknown review status `{status}`"))
    });
    let result = parsed.and_then(|(id, status)| {
        with_review(|service| service.set_status_by_id(id, status))
    });
    FilesResponse::from_result("review_set_status", result)
}

/// Deletes the file with `file_id`.
#[flutter_rust_bridge::frb(sync)]
pub fn review_delete(file_id: String) -> FilesResponse {
    let result = parse_file_id(file_id.as_str())
        .and_then(|id| with_review(|service| service.delete_file_by_id(id)));
    FilesResponse::from_result("review_delete", result)
}

/// Generates flashcards from extracted study text and returns the new cards.
///
/// `count` defaults to 5 and is capped at 50.
#[flutter_rust_bridge::frb(sync)]
pub fn flashcards_generate(text: String, count: Option<u32>) -> FlashcardsResponse {
    let count = normalize_flashcard_count(count);
    let result = with_store(|store| {
        FlashcardService::new(KvStudyRepository::new(store))
            .generate(text.as_str(), count as usize)
            .map_err(|err| err.to_string())
    });
    FlashcardsResponse::from_result("flashcards_generate", result)
}

/// Lists every stored flashcard in id order.
#[flutter_rust_bridge::frb(sync)]
pub fn flashcards_list() -> FlashcardsResponse {
    let result = with_store(|store| {
        FlashcardService::new(KvStudyRepository::new(store))
            .list()
            .map_err(|err| err.to_string())
    });
    FlashcardsResponse::from_result("flashcards_list", result)
}

/// Lists flashcards due today (never rated, or scheduled on or before today).
#[flutter_rust_bridge::frb(sync)]
pub fn flashcards_due() -> FlashcardsResponse {
    let today = today_epoch_day();
    let result = with_store(|store| {
        FlashcardService::new(KvStudyRepository::new(store))
            .due(today)
            .map_err(|err| err.to_string())
    });
    FlashcardsResponse::from_result("flashcards_due", result)
}

/// Rates one flashcard (`Easy|Medium|Hard`); message carries the next review day.
#[flutter_rust_bridge::frb(sync)]
pub fn flashcard_rate(card_id: u32, difficulty: String) -> ActionResponse {
    let Some(difficulty) = Difficulty::parse(difficulty.as_str()) else {
        return ActionResponse::failure(format!("unknown difficulty `{difficulty}`"));
    };
    let today = today_epoch_day();
    let result = with_store(|store| {
        FlashcardService::new(KvStudyRepository::new(store))
            .rate(card_id, difficulty, today)
            .map_err(|err| err.to_string())
    });
    match result {
        Ok(next_review) => ActionResponse::success(
            format!("next_review_epoch_day={next_review}"),
            Some(card_id.to_string()),
        ),
        Err(err) => ActionResponse::failure(format!("flashcard_rate failed: {err}")),
    }
}

/// Parses generated quiz text and replaces the stored quiz with the result.
///
/// Text without any complete question stores an empty quiz.
#[flutter_rust_bridge::frb(sync)]
pub fn quiz_store(raw: String) -> QuizResponse {
    let result = with_store(|store| {
        QuizService::new(KvStudyRepository::new(store))
            .store(raw.as_str())
            .map_err(|err| err.to_string())
    });
    QuizResponse::from_result("quiz_store", result)
}

/// Returns the stored quiz questions.
#[flutter_rust_bridge::frb(sync)]
pub fn quiz_list() -> QuizResponse {
    let result = with_store(|store| {
        QuizService::new(KvStudyRepository::new(store))
            .list()
            .map_err(|err| err.to_string())
    });
    QuizResponse::from_result("quiz_list", result)
}

fn validation_mode() -> mindvault_core::ValidationMode {
    CORE_CONFIG
        .get()
        .map(|config| config.validation)
        .unwrap_or_default()
}

fn resolve_store_path() -> PathBuf {
    STORE_PATH
        .get_or_init(|| {
            if let Some(path) = CORE_CONFIG
                .get()
                .and_then(|config| config.store_path.clone())
            {
                return path;
            }
            if let Ok(raw) = std::env::var(STORE_PATH_ENV) {
                let trimmed = raw.trim();
                if !trimmed.is_empty() {
                    return PathBuf::from(trimmed);
                }
            }
            std::env::temp_dir().join(STORE_FILE_NAME)
        })
        .clone()
}

fn with_store<T>(f: impl FnOnce(&mut SqliteStore) -> Result<T, String>) -> Result<T, String> {
    let path = resolve_store_path();
    let mut store = open_store(&path).map_err(|err| {
        warn!("event=ffi_call module=ffi status=error error_code=store_open_failed");
        format!("store open failed: {err}")
    })?;
    f(&mut store)
}

fn with_review(
    f: impl FnOnce(
        &mut ReviewService<KvStudyRepository<&mut SqliteStore>>,
    ) -> Result<Vec<NoteFile>, ServiceError>,
) -> Result<Vec<NoteFile>, String> {
    with_store(|store| {
        let mut service = ReviewService::new(KvStudyRepository::new(store));
        f(&mut service).map_err(|err| err.to_string())
    })
}

fn parse_file_id(value: &str) -> Result<Uuid, String> {
    Uuid::parse_str(value.trim()).map_err(|_| format!("invalid file id `{value}`"))
}

fn normalize_flashcard_count(count: Option<u32>) -> u32 {
    match count {
        Some(0) | None => FLASHCARD_DEFAULT_COUNT,
        Some(value) if value > FLASHCARD_COUNT_MAX => FLASHCARD_COUNT_MAX,
        Some(value) => value,
    }
}

fn today_epoch_day() -> i64 {
    let millis = SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .map(|elapsed| i64::try_from(elapsed.as_millis()).unwrap_or(i64::MAX))
        .unwrap_or(0);
    epoch_day_from_millis(millis)
}

fn to_file_item(file: &NoteFile) -> FileItem {
    FileItem {
        id: file.id.to_string(),
        name: file.name.clone(),
        tag: file.tag.clone(),
        status: file.effective_status().as_str().to_string(),
    }
}

fn to_link_item(link: &LinkEntry) -> LinkItem {
    LinkItem {
        link: link.link.clone(),
        tag: link.tag.clone(),
    }
}

fn to_flashcard_item(card: &Flashcard) -> FlashcardItem {
    FlashcardItem {
        id: card.id,
        content: card.content.clone(),
        next_review_epoch_day: card.next_review,
        easiness_streak: card.easiness_streak,
    }
}

fn to_quiz_item(question: &QuizQuestion) -> QuizItem {
    QuizItem {
        question: question.question.clone(),
        options: question.options.clone(),
        answer: question.answer.clone(),
    }
}
