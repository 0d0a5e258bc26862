use crate::models::{AppData, TrackedItem, UserRecord};
use chrono::{DateTime, Duration, Utc};
use uuid::Uuid;

impl AppData {
    pub fn user_by_email(&self, email: &str) -> Option<&UserRecord> {
        self.users.get(email)
    }

    pub fn user_by_id(&self, user_id: &str) -> Option<&UserRecord> {
        self.users.values().find(|record| record.id == user_id)
    }

    pub fn user_by_id_mut(&mut self, user_id: &str) -> Option<&mut UserRecord> {
        self.users.values_mut().find(|record| record.id == user_id)
    }

    pub fn items_for(&self, user_id: &str) -> &[TrackedItem] {
        self.items.get(user_id).map(Vec::as_slice).unwrap_or_default()
    }

    pub fn item_mut(&mut self, user_id: &str, item_id: &str) -> Option<&mut TrackedItem> {
        self.items
            .get_mut(user_id)?
            .iter_mut()
            .find(|item| item.id == item_id)
    }

    pub fn insert_item(&mut self, user_id: &str, item: TrackedItem) {
        self.items.entry(user_id.to_string()).or_default().push(item);
    }

    pub fn remove_item(&mut self, user_id: &str, item_id: &str) -> Option<TrackedItem> {
        let items = self.items.get_mut(user_id)?;
        let index = items.iter().position(|item| item.id == item_id)?;
        Some(items.remove(index))
    }

    /// Seeds the two example items for accounts that have never had a
    /// collection. An existing (even empty) collection is left alone, so
    /// deleting every item does not bring the examples back.
    pub fn ensure_seed_items(&mut self, user_id: &str, now: DateTime<Utc>) {
        if self.items.contains_key(user_id) {
            return;
        }

        let examples = vec![
            TrackedItem {
                id: Uuid::new_v4().to_string(),
                name: "No Junk Food".to_string(),
                start_date: now - Duration::days(7),
                description: Some("Staying away from unhealthy snacks".to_string()),
                color: Some("#06b6d4".to_string()),
                target_days: Some(30),
            },
            TrackedItem {
                id: Uuid::new_v4().to_string(),
                name: "Daily Exercise".to_string(),
                start_date: now - Duration::days(3),
                description: Some("At least 30 minutes per day".to_string()),
                color: Some("#14b8a6".to_string()),
                target_days: Some(15),
            },
        ];
        self.items.insert(user_id.to_string(), examples);
    }
}
