//! Process-lifetime response cache.
//!
//! Keys are fingerprints over the clinically relevant subset of the intake
//! assessment; values are complete generated plans. Bounded capacity with
//! FIFO eviction — insertion order decides the victim, a `get` never
//! refreshes an entry. No TTL: entries live until evicted or the process
//! exits.

use std::collections::{HashMap, VecDeque};

use crate::config::DEFAULT_CACHE_CAPACITY;
use crate::models::{AssessmentInput, RehabPlanOutput};

/// Normalized cache key for one assessment.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Fingerprint(String);

impl Fingerprint {
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

/// Compute the cache fingerprint for an assessment.
///
/// Covers only the fields that affect plan content: age, gender, symptoms,
/// neck, trunk, standing, walking, medications, fractures. Free-text fields
/// are lower-cased and trimmed so whitespace/casing variants share an entry.
/// `job` is deliberately excluded — it does not participate in cache
/// addressing even though the fallback plan embeds it.
pub fn fingerprint(input: &AssessmentInput) -> Fingerprint {
    fn norm(s: &str) -> String {
        s.trim().to_lowercase()
    }

    Fingerprint(format!(
        "age={}|gender={}|symptoms={}|neck={}|trunk={}|standing={}|walking={}|medications={}|fractures={}",
        input.age,
        input.gender.as_str(),
        norm(&input.symptoms),
        input.neck_control.as_str(),
        input.trunk_control.as_str(),
        input.standing.as_str(),
        input.walking.as_str(),
        norm(&input.medications),
        norm(&input.fractures),
    ))
}

/// Bounded FIFO cache from fingerprint to generated plan.
///
/// Single-threaded state — the orchestrator wraps it in a `Mutex` so
/// concurrent requests cannot lose an insert or evict an entry mid-read.
pub struct PlanCache {
    capacity: usize,
    entries: HashMap<Fingerprint, RehabPlanOutput>,
    order: VecDeque<Fingerprint>,
}

impl PlanCache {
    /// Cache with the default capacity (50 entries).
    pub fn new() -> Self {
        Self::with_capacity(DEFAULT_CACHE_CAPACITY)
    }

    /// Cache with an explicit capacity. A capacity of zero caches nothing.
    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            capacity,
            entries: HashMap::new(),
            order: VecDeque::new(),
        }
    }

    pub fn get(&self, key: &Fingerprint) -> Option<&RehabPlanOutput> {
        self.entries.get(key)
    }

    /// Insert a plan, evicting the oldest-inserted entry when over capacity.
    ///
    /// Re-inserting an existing key replaces the value wholesale without
    /// granting it a fresh order slot. (Unreachable through the orchestrator,
    /// where a hit short-circuits generation.)
    pub fn put(&mut self, key: Fingerprint, plan: RehabPlanOutput) {
        if self.capacity == 0 {
            return;
        }

        if self.entries.insert(key.clone(), plan).is_none() {
            self.order.push_back(key);
        }

        while self.entries.len() > self.capacity {
            if let Some(oldest) = self.order.pop_front() {
                tracing::debug!(key = %oldest.as_str(), "Evicting oldest cached plan");
                self.entries.remove(&oldest);
            } else {
                break;
            }
        }
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

impl Default for PlanCache {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{Gender, Mobility, Support};

    fn sample_input() -> AssessmentInput {
        AssessmentInput {
            job: "engineer".into(),
            symptoms: "Back Pain".into(),
            age: 35,
            gender: Gender::Male,
            neck_control: Support::Yes,
            trunk_control: Support::Yes,
            standing: Mobility::Yes,
            walking: Mobility::Yes,
            medications: "No".into(),
            fractures: "no".into(),
        }
    }

    fn sample_plan(tag: &str) -> RehabPlanOutput {
        RehabPlanOutput {
            initial_diagnosis: tag.into(),
            prognosis: "p".into(),
            rehab_plan: "r".into(),
            precautions: "pr".into(),
            medications_influence: "m".into(),
            fractures_influence: "f".into(),
            review_appointments: "ra".into(),
        }
    }

    fn keyed(tag: &str) -> Fingerprint {
        let mut input = sample_input();
        input.symptoms = tag.to_string();
        fingerprint(&input)
    }

    #[test]
    fn job_does_not_affect_the_fingerprint() {
        let a = sample_input();
        let mut b = sample_input();
        b.job = "carpenter".into();
        assert_eq!(fingerprint(&a), fingerprint(&b));
    }

    #[test]
    fn free_text_case_and_whitespace_are_normalized() {
        let a = sample_input();
        let mut b = sample_input();
        b.symptoms = "  back pain ".into();
        b.medications = "no".into();
        assert_eq!(fingerprint(&a), fingerprint(&b));
    }

    #[test]
    fn clinical_fields_change_the_fingerprint() {
        let a = sample_input();

        let mut b = sample_input();
        b.age = 36;
        assert_ne!(fingerprint(&a), fingerprint(&b));

        let mut c = sample_input();
        c.walking = Mobility::No;
        assert_ne!(fingerprint(&a), fingerprint(&c));
    }

    #[test]
    fn get_returns_inserted_plan() {
        let mut cache = PlanCache::new();
        let key = fingerprint(&sample_input());

        assert!(cache.get(&key).is_none());
        cache.put(key.clone(), sample_plan("one"));
        assert_eq!(cache.get(&key).unwrap().initial_diagnosis, "one");
    }

    #[test]
    fn fifo_eviction_removes_oldest_first() {
        let mut cache = PlanCache::with_capacity(3);

        for tag in ["a", "b", "c"] {
            cache.put(keyed(tag), sample_plan(tag));
        }
        assert_eq!(cache.len(), 3);

        cache.put(keyed("d"), sample_plan("d"));
        assert_eq!(cache.len(), 3);
        assert!(cache.get(&keyed("a")).is_none(), "oldest must be evicted");
        assert!(cache.get(&keyed("b")).is_some());
        assert!(cache.get(&keyed("d")).is_some());
    }

    #[test]
    fn get_does_not_refresh_insertion_order() {
        let mut cache = PlanCache::with_capacity(2);
        cache.put(keyed("a"), sample_plan("a"));
        cache.put(keyed("b"), sample_plan("b"));

        // Touch "a" — under FIFO this must not save it.
        assert!(cache.get(&keyed("a")).is_some());

        cache.put(keyed("c"), sample_plan("c"));
        assert!(cache.get(&keyed("a")).is_none());
        assert!(cache.get(&keyed("b")).is_some());
    }

    #[test]
    fn fifty_one_distinct_keys_evict_only_the_first() {
        let mut cache = PlanCache::new();

        for i in 0..51 {
            cache.put(keyed(&format!("symptom {i}")), sample_plan("x"));
        }

        assert_eq!(cache.len(), 50);
        assert!(cache.get(&keyed("symptom 0")).is_none());
        assert!(cache.get(&keyed("symptom 1")).is_some());
        assert!(cache.get(&keyed("symptom 50")).is_some());
    }

    #[test]
    fn reinsert_replaces_without_new_order_slot() {
        let mut cache = PlanCache::with_capacity(2);
        cache.put(keyed("a"), sample_plan("a1"));
        cache.put(keyed("b"), sample_plan("b"));
        cache.put(keyed("a"), sample_plan("a2"));

        assert_eq!(cache.len(), 2);
        assert_eq!(cache.get(&keyed("a")).unwrap().initial_diagnosis, "a2");

        // "a" kept its original slot, so it is still the eviction victim.
        cache.put(keyed("c"), sample_plan("c"));
        assert!(cache.get(&keyed("a")).is_none());
        assert!(cache.get(&keyed("b")).is_some());
    }

    #[test]
    fn zero_capacity_caches_nothing() {
        let mut cache = PlanCache::with_capacity(0);
        cache.put(keyed("a"), sample_plan("a"));
        assert!(cache.is_empty());
        assert!(cache.get(&keyed("a")).is_none());
    }
}
