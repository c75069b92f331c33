// libs/availability-cell/src/services/store.rs
use std::collections::BTreeMap;

use tokio::sync::RwLock;
use tracing::debug;

use shared_models::error::FieldError;
use shared_utils::validation::parse_clock_time;

use crate::models::{
    AvailabilityError, AvailabilityRule, AvailabilityRuleChanges, NewAvailabilityRule,
};
use crate::services::validation::check_order;

const DEFAULT_OPEN: &str = "09:00";
const DEFAULT_CLOSE: &str = "17:00";

#[derive(Default)]
struct StoreInner {
    rules: BTreeMap<i64, AvailabilityRule>,
    last_id: i64,
}

impl StoreInner {
    fn insert(&mut self, new: NewAvailabilityRule) -> AvailabilityRule {
        self.last_id += 1;
        let rule = AvailabilityRule {
            id: self.last_id,
            day_of_week: new.day_of_week,
            start_time: new.start_time,
            end_time: new.end_time,
            is_available: new.is_available,
        };
        self.rules.insert(rule.id, rule.clone());
        rule
    }
}

/// Weekly availability rules. Rules are independent records; overlapping
/// rules for the same day are kept as-is.
#[derive(Default)]
pub struct AvailabilityStore {
    inner: RwLock<StoreInner>,
}

impl AvailabilityStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Monday to Friday, 09:00-17:00, as rules 1 through 5.
    pub fn with_default_hours() -> Self {
        let mut inner = StoreInner::default();
        for day_of_week in 1..=5 {
            inner.insert(NewAvailabilityRule {
                day_of_week,
                start_time: DEFAULT_OPEN.to_string(),
                end_time: DEFAULT_CLOSE.to_string(),
                is_available: true,
            });
        }
        Self {
            inner: RwLock::new(inner),
        }
    }

    pub async fn create(&self, new: NewAvailabilityRule) -> AvailabilityRule {
        let rule = self.inner.write().await.insert(new);
        debug!("Created availability rule {} for day {}", rule.id, rule.day_of_week);
        rule
    }

    pub async fn list(&self) -> Vec<AvailabilityRule> {
        self.inner.read().await.rules.values().cloned().collect()
    }

    pub async fn by_day(&self, day_of_week: u8) -> Vec<AvailabilityRule> {
        self.inner
            .read()
            .await
            .rules
            .values()
            .filter(|rule| rule.day_of_week == day_of_week)
            .cloned()
            .collect()
    }

    /// Shallow merge. The merged rule must still open before it closes.
    pub async fn update(
        &self,
        id: i64,
        changes: AvailabilityRuleChanges,
    ) -> Result<AvailabilityRule, AvailabilityError> {
        let mut inner = self.inner.write().await;
        let rule = inner.rules.get_mut(&id).ok_or(AvailabilityError::NotFound)?;

        let start_time = changes.start_time.unwrap_or_else(|| rule.start_time.clone());
        let end_time = changes.end_time.unwrap_or_else(|| rule.end_time.clone());

        let mut errors: Vec<FieldError> = Vec::new();
        if let (Some(start), Some(end)) = (parse_clock_time(&start_time), parse_clock_time(&end_time)) {
            check_order(start, end, &mut errors);
        }
        if !errors.is_empty() {
            return Err(AvailabilityError::Validation(errors));
        }

        if let Some(day_of_week) = changes.day_of_week {
            rule.day_of_week = day_of_week;
        }
        if let Some(is_available) = changes.is_available {
            rule.is_available = is_available;
        }
        rule.start_time = start_time;
        rule.end_time = end_time;

        debug!("Updated availability rule {}", id);
        Ok(rule.clone())
    }

    pub async fn delete(&self, id: i64) -> bool {
        let removed = self.inner.write().await.rules.remove(&id).is_some();
        if removed {
            debug!("Deleted availability rule {}", id);
        }
        removed
    }
}
