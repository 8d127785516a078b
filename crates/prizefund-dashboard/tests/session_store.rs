#![allow(clippy::unwrap_used)]
#![allow(clippy::expect_used)]
#![allow(clippy::panic)]

use std::collections::HashSet;
use std::time::{Duration, Instant};

use prizefund_core::reward::ScoreSet;
use prizefund_dashboard::session::{SessionMarks, SessionStore};

const IDLE: Duration = Duration::from_secs(60);

fn marks() -> SessionMarks {
    SessionMarks::new(ScoreSet::new(589, 550, 480), ScoreSet::new(585, 545, 480))
}

#[test]
fn create_get_update_remove() {
    let store = SessionStore::new(IDLE, 16);
    let a = store.create(marks());
    let b = store.create(marks());
    assert_ne!(a, b);
    assert_eq!(store.len(), 2);

    assert_eq!(store.get(&a), Some(marks()));
    assert!(!store.get(&a).unwrap().editing);

    let updated = store
        .update(&a, |m| {
            m.editing = true;
            m.public = ScoreSet::new(1, 2, 3);
        })
        .unwrap();
    assert!(updated.editing);
    assert_eq!(store.get(&a).unwrap().public, ScoreSet::new(1, 2, 3));
    // other sessions are untouched
    assert_eq!(store.get(&b), Some(marks()));

    assert!(store.remove(&a));
    assert!(!store.remove(&a));
    assert_eq!(store.get(&a), None);
    assert_eq!(store.len(), 1);
}

#[test]
fn ids_are_random_uuids() {
    let store = SessionStore::new(IDLE, 64);
    let ids: Vec<String> = (0..32).map(|_| store.create(marks())).collect();

    let unique: HashSet<&String> = ids.iter().collect();
    assert_eq!(unique.len(), ids.len());

    for id in &ids {
        let parsed = uuid::Uuid::parse_str(id).expect("session id must be a uuid");
        assert_eq!(parsed.get_version_num(), 4, "id={id}");
    }

    // no shared counter prefix between consecutive ids
    let prefixes: HashSet<&str> = ids.iter().map(|id| &id[..8]).collect();
    assert!(prefixes.len() > 1);
    assert!(!ids[0].starts_with("1-"));
}

#[test]
fn unknown_session_is_none() {
    let store = SessionStore::new(IDLE, 16);
    assert_eq!(store.get("nope"), None);
    assert_eq!(store.update("nope", |m| m.editing = true), None);
    assert!(store.is_empty());
}

#[test]
fn access_after_idle_expires_the_session() {
    let store = SessionStore::new(IDLE, 16);
    let t0 = Instant::now();
    let id = store.create_at(marks(), t0);

    // touching inside the window keeps it alive and moves the clock
    assert!(store.get_at(&id, t0 + Duration::from_secs(30)).is_some());
    assert!(store.get_at(&id, t0 + Duration::from_secs(80)).is_some());

    assert_eq!(store.get_at(&id, t0 + Duration::from_secs(141)), None);
    assert!(store.is_empty());
}

#[test]
fn prune_drops_idle_sessions() {
    let store = SessionStore::new(IDLE, 16);
    store.create(marks());
    store.create(marks());

    assert_eq!(store.prune_idle_at(Instant::now()), 0);
    assert_eq!(store.len(), 2);

    let later = Instant::now() + Duration::from_secs(61);
    assert_eq!(store.prune_idle_at(later), 2);
    assert!(store.is_empty());
}

#[test]
fn full_store_evicts_least_recently_seen() {
    let store = SessionStore::new(IDLE, 2);
    let t0 = Instant::now();
    let a = store.create_at(marks(), t0);
    let b = store.create_at(marks(), t0 + Duration::from_secs(1));

    // a is refreshed, so b becomes the oldest
    assert!(store.get_at(&a, t0 + Duration::from_secs(2)).is_some());

    let c = store.create_at(marks(), t0 + Duration::from_secs(3));
    assert_eq!(store.len(), 2);
    assert_eq!(store.capacity(), 2);
    assert!(store.get_at(&a, t0 + Duration::from_secs(4)).is_some());
    assert!(store.get_at(&c, t0 + Duration::from_secs(4)).is_some());
    assert_eq!(store.get_at(&b, t0 + Duration::from_secs(4)), None);
}

#[test]
fn full_store_prefers_dropping_idle_sessions() {
    let store = SessionStore::new(IDLE, 2);
    let t0 = Instant::now();
    store.create_at(marks(), t0);
    store.create_at(marks(), t0);

    let fresh = store.create_at(marks(), t0 + Duration::from_secs(120));
    assert_eq!(store.len(), 1);
    assert!(store.get_at(&fresh, t0 + Duration::from_secs(121)).is_some());
}
