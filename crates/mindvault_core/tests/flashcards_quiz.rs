use mindvault_core::{
    Difficulty, FlashcardService, KvStudyRepository, MemoryStore, QuizService, ServiceError,
};

const TEXT: &str = "Neurons sum weighted inputs. Activations add non-linearity. \
                    Backpropagation computes gradients. Dropout regularizes training";

#[test]
fn generate_appends_with_continuing_ids() {
    let mut service = FlashcardService::new(KvStudyRepository::new(MemoryStore::new()));

    let first = service.generate(TEXT, 2).unwrap();
    assert_eq!(
        first.iter().map(|card| card.id).collect::<Vec<_>>(),
        vec![1, 2]
    );
    assert_eq!(first[0].content, "Neurons sum weighted inputs");

    let second = service.generate(TEXT, 10).unwrap();
    assert_eq!(second.len(), 4);
    assert_eq!(second[0].id, 3);
    assert_eq!(service.list().unwrap().len(), 6);
}

#[test]
fn generate_from_blank_text_creates_nothing() {
    let mut service = FlashcardService::new(KvStudyRepository::new(MemoryStore::new()));
    assert!(service.generate("   ", 5).unwrap().is_empty());
    assert!(service.generate(TEXT, 0).unwrap().is_empty());
    assert!(service.list().unwrap().is_empty());
}

#[test]
fn rating_schedules_and_persists_next_review() {
    let mut store = MemoryStore::new();
    let mut service = FlashcardService::new(KvStudyRepository::new(&mut store));
    service.generate(TEXT, 2).unwrap();

    assert_eq!(service.rate(1, Difficulty::Easy, 1_000).unwrap(), 1_007);
    assert_eq!(service.rate(1, Difficulty::Easy, 1_007).unwrap(), 1_037);
    assert_eq!(service.rate(2, Difficulty::Hard, 1_000).unwrap(), 1_002);

    let due = service.due(1_002).unwrap();
    assert_eq!(due.len(), 1);
    assert_eq!(due[0].id, 2);

    let cards = service.list().unwrap();
    assert_eq!(cards[0].easiness_streak, 2);
    assert_eq!(cards[0].next_review, Some(1_037));
}

#[test]
fn rating_unknown_card_fails() {
    let mut service = FlashcardService::new(KvStudyRepository::new(MemoryStore::new()));
    let err = service.rate(9, Difficulty::Medium, 0).unwrap_err();
    assert!(matches!(err, ServiceError::FlashcardNotFound(9)));
}

#[test]
fn stored_quiz_replaces_previous_one() {
    let mut service = QuizService::new(KvStudyRepository::new(MemoryStore::new()));
    let first = service
        .store("Q: 1+1?\nA) 1\nB) 2\nC) 3\nD) 4\nAnswer: B")
        .unwrap();
    assert_eq!(first.len(), 1);

    service.store("no questions here").unwrap();
    assert!(service.list().unwrap().is_empty());
}
