//! End-to-end test for the request summary emitted by `recommend`.

use std::io;
use std::sync::{Arc, Mutex};

use matchme_engine::{
    CommitmentLevel, EngineConfig, EventBio, EventId, MemoryStore, Motivation, Participant,
    ParticipantId, Recommender, SkillBio, SkillLevel,
};

const EVENT: EventId = EventId(3);

/// Writer that appends formatted log lines to a shared buffer.
#[derive(Clone, Default)]
struct Capture(Arc<Mutex<Vec<u8>>>);

impl Capture {
    fn contents(&self) -> String {
        String::from_utf8_lossy(&self.0.lock().unwrap()).into_owned()
    }
}

impl io::Write for Capture {
    fn write(&mut self, buf: &[u8]) -> io::Result<usize> {
        self.0.lock().unwrap().extend_from_slice(buf);
        Ok(buf.len())
    }

    fn flush(&mut self) -> io::Result<()> {
        Ok(())
    }
}

fn seed(store: &MemoryStore, id: u64, furry: bool) -> ParticipantId {
    let pid = ParticipantId(id);
    store.insert_participant(
        Participant::new(pid)
            .with_furry(furry)
            .with_profile_complete(true)
            .with_active_event(EVENT),
    );
    store
        .put_event_bio(
            pid,
            EventBio::new(EVENT, Motivation::Social, CommitmentLevel::Casual)
                .with_roles_offered(&format!("Offer {id}"))
                .with_roles_sought(&format!("Seek {id}")),
        )
        .unwrap();
    store.add_skill_bio(pid, SkillBio::new("Product Manager", SkillLevel::Beginner)).unwrap();
    pid
}

#[tokio::test]
async fn test_summary_reports_candidate_eligible_and_returned_counts() {
    let capture = Capture::default();
    let writer = capture.clone();
    let subscriber = tracing_subscriber::fmt()
        .with_ansi(false)
        .with_writer(move || writer.clone())
        .finish();
    let _guard = tracing::subscriber::set_default(subscriber);

    let config = EngineConfig { max_results: 1, ..EngineConfig::default() };
    let engine = Recommender::in_memory().with_config(config).unwrap();
    let store = engine.store();
    let me = seed(store, 1, false);
    seed(store, 2, false);
    seed(store, 3, false);
    // Fails the furry gate
    seed(store, 4, true);

    let result = engine.recommend(me).await.unwrap();
    assert_eq!(result, vec![ParticipantId(2)]);

    let logs = capture.contents();
    let summary = logs
        .lines()
        .find(|line| line.contains("recommendations computed"))
        .expect("summary line");
    assert!(summary.contains("candidates=3"), "{summary}");
    assert!(summary.contains("eligible=2"), "{summary}");
    assert!(summary.contains("returned=1"), "{summary}");
}
