use {
    crate::{domain::TokenRecord, utils::AppInstant},
    std::{collections::HashMap, time::Duration},
};

#[cfg(debug_assertions)]
use crate::config::DF;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FlashDirection {
    Up,
    Down,
}

/// Per-row price flash state. Compares each observed list with the previous
/// prices by id; a moved price highlights the row until its deadline.
#[derive(Debug)]
pub struct FlashTracker {
    duration: Duration,
    last_prices: HashMap<String, f64>,
    active: HashMap<String, (FlashDirection, AppInstant)>,
    primed: bool,
}

impl FlashTracker {
    pub fn new(duration: Duration) -> Self {
        Self {
            duration,
            last_prices: HashMap::new(),
            active: HashMap::new(),
            primed: false,
        }
    }

    /// Records `tokens` as the latest prices and starts a flash for every row
    /// whose price moved. The first call only records. A new move on a row
    /// that is still flashing replaces its direction and deadline.
    /// Returns how many rows started flashing.
    pub fn observe(&mut self, tokens: &[TokenRecord], now: AppInstant) -> usize {
        let mut started = 0;
        let mut seen: HashMap<String, f64> = HashMap::with_capacity(tokens.len());

        for token in tokens {
            if self.primed {
                if let Some(&prev) = self.last_prices.get(&token.id) {
                    if prev != token.price {
                        let direction = if token.price > prev {
                            FlashDirection::Up
                        } else {
                            FlashDirection::Down
                        };
                        self.active
                            .insert(token.id.clone(), (direction, now + self.duration));
                        started += 1;

                        #[cfg(debug_assertions)]
                        if DF.log_flash {
                            log::info!("FLASH: {} {:?}", token.id, direction);
                        }
                    }
                }
            }
            seen.insert(token.id.clone(), token.price);
        }

        self.last_prices = seen;
        self.active.retain(|id, _| self.last_prices.contains_key(id));
        self.primed = true;
        started
    }

    /// Active flash for `id` at `now`, if any.
    pub fn get(&self, id: &str, now: AppInstant) -> Option<FlashDirection> {
        self.active
            .get(id)
            .filter(|(_, until)| *until > now)
            .map(|(dir, _)| *dir)
    }

    /// Drops expired flashes.
    pub fn prune(&mut self, now: AppInstant) {
        self.active.retain(|_, (_, until)| *until > now);
    }

    /// Earliest pending deadline, for scheduling the next repaint.
    pub fn next_deadline(&self) -> Option<AppInstant> {
        self.active.values().map(|(_, until)| *until).min()
    }

    /// Forgets everything, including the first-population marker.
    pub fn reset(&mut self) {
        self.last_prices.clear();
        self.active.clear();
        self.primed = false;
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::Category;

    const FLASH: Duration = Duration::from_millis(700);

    fn priced(id: &str, price: f64) -> TokenRecord {
        let mut t = TokenRecord::new(id, id.to_uppercase(), Category::New);
        t.price = price;
        t
    }

    #[test]
    fn first_population_never_flashes() {
        let mut tracker = FlashTracker::new(FLASH);
        let now = AppInstant::now();
        assert_eq!(tracker.observe(&[priced("a", 1.0), priced("b", 2.0)], now), 0);
        assert_eq!(tracker.get("a", now), None);
    }

    #[test]
    fn moved_price_flashes_in_its_direction() {
        let mut tracker = FlashTracker::new(FLASH);
        let t0 = AppInstant::now();
        tracker.observe(&[priced("a", 1.0), priced("b", 2.0)], t0);

        let n = tracker.observe(&[priced("a", 1.1), priced("b", 1.9)], t0);
        assert_eq!(n, 2);
        assert_eq!(tracker.get("a", t0), Some(FlashDirection::Up));
        assert_eq!(tracker.get("b", t0), Some(FlashDirection::Down));
    }

    #[test]
    fn unchanged_price_does_not_flash() {
        let mut tracker = FlashTracker::new(FLASH);
        let t0 = AppInstant::now();
        tracker.observe(&[priced("a", 1.0)], t0);
        assert_eq!(tracker.observe(&[priced("a", 1.0)], t0), 0);
        assert_eq!(tracker.get("a", t0), None);
    }

    #[test]
    fn flash_expires_after_duration() {
        let mut tracker = FlashTracker::new(FLASH);
        let t0 = AppInstant::now();
        tracker.observe(&[priced("a", 1.0)], t0);
        tracker.observe(&[priced("a", 2.0)], t0);

        assert!(tracker.get("a", t0 + Duration::from_millis(699)).is_some());
        assert!(tracker.get("a", t0 + FLASH).is_none());

        tracker.prune(t0 + FLASH);
        assert_eq!(tracker.next_deadline(), None);
    }

    #[test]
    fn new_change_replaces_pending_flash() {
        let mut tracker = FlashTracker::new(FLASH);
        let t0 = AppInstant::now();
        tracker.observe(&[priced("a", 1.0)], t0);
        tracker.observe(&[priced("a", 2.0)], t0);

        let t1 = t0 + Duration::from_millis(500);
        tracker.observe(&[priced("a", 1.5)], t1);

        // The first deadline (t0 + 700) no longer applies.
        let later = t0 + Duration::from_millis(900);
        assert_eq!(tracker.get("a", later), Some(FlashDirection::Down));
        assert_eq!(tracker.next_deadline(), Some(t1 + FLASH));
    }

    #[test]
    fn vanished_rows_are_forgotten() {
        let mut tracker = FlashTracker::new(FLASH);
        let t0 = AppInstant::now();
        tracker.observe(&[priced("a", 1.0), priced("b", 1.0)], t0);
        tracker.observe(&[priced("a", 1.0), priced("b", 3.0)], t0);
        tracker.observe(&[priced("a", 1.0)], t0);
        assert_eq!(tracker.get("b", t0), None);
        assert_eq!(tracker.next_deadline(), None);
    }

    #[test]
    fn reset_skips_next_population() {
        let mut tracker = FlashTracker::new(FLASH);
        let t0 = AppInstant::now();
        tracker.observe(&[priced("a", 1.0)], t0);
        tracker.reset();
        assert_eq!(tracker.observe(&[priced("a", 5.0)], t0), 0);
    }
}
