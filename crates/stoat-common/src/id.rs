use std::collections::HashSet;

/// Prefix for generated instance ids.
pub const INSTANCE_ID_PREFIX: &str = "instance-";

/// Generates time-based instance ids (`instance-<unix millis>`).
///
/// Ids are strictly increasing within one generator, so two adds in the
/// same millisecond still get distinct ids.
#[derive(Debug, Default)]
pub struct InstanceIdGenerator {
    last: i64,
}

impl InstanceIdGenerator {
    pub fn new() -> Self {
        Self::default()
    }

    /// Produce a fresh id that does not collide with any of `existing`.
    pub fn next<'a>(&mut self, existing: impl IntoIterator<Item = &'a str>) -> String {
        let existing: HashSet<&str> = existing.into_iter().collect();
        let floor = existing
            .iter()
            .filter_map(|id| id.strip_prefix(INSTANCE_ID_PREFIX))
            .filter_map(|n| n.parse::<i64>().ok())
            .max()
            .unwrap_or(0);
        self.next_at(chrono::Utc::now().timestamp_millis(), floor, &existing)
    }

    fn next_at(&mut self, now_millis: i64, floor: i64, existing: &HashSet<&str>) -> String {
        let stamp = now_millis
            .max(self.last.saturating_add(1))
            .max(floor.saturating_add(1));
        self.last = stamp;

        let id = format!("{INSTANCE_ID_PREFIX}{stamp}");
        if !existing.contains(id.as_str()) {
            return id;
        }

        // The stamp saturated at i64::MAX; disambiguate with a suffix.
        let mut n: u64 = 1;
        loop {
            let candidate = format!("{id}-{n}");
            if !existing.contains(candidate.as_str()) {
                return candidate;
            }
            n += 1;
        }
    }
}
