use std::collections::HashMap;
use std::time::{SystemTime, UNIX_EPOCH};
use lazy_static::lazy_static;
use serenity::model::id::UserId;
use tokio::sync::Mutex;

lazy_static! {
    static ref COMMAND_COOLDOWNS: Mutex<Cooldowns> = Mutex::new(Cooldowns::default());
}

/// Last accepted use of each command per user
#[derive(Debug, Default)]
pub struct Cooldowns {
    last_used: HashMap<(UserId, String), u64>,
}

impl Cooldowns {
    /// Record a use at `now` (seconds) if the cooldown has passed.
    /// Returns the remaining seconds otherwise. Expired entries are dropped.
    pub fn check(&mut self, user_id: UserId, command: &str, now: u64, cooldown_secs: u64) -> Result<(), u64> {
        self.last_used
            .retain(|_, last_time| now.saturating_sub(*last_time) < cooldown_secs);

        let key = (user_id, command.to_string());

        if let Some(&last_time) = self.last_used.get(&key) {
            let elapsed = now.saturating_sub(last_time);
            if elapsed < cooldown_secs {
                return Err(cooldown_secs - elapsed);
            }
        }

        self.last_used.insert(key, now);
        Ok(())
    }
}

/// Check the shared cooldown table for a user and command
pub async fn check_cooldown(user_id: UserId, command: &str, cooldown_secs: u64) -> Result<(), u64> {
    let now = SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .unwrap_or_default()
        .as_secs();

    COMMAND_COOLDOWNS.lock().await.check(user_id, command, now, cooldown_secs)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_first_use_is_allowed() {
        let mut cooldowns = Cooldowns::default();
        assert_eq!(cooldowns.check(UserId::new(1), "$ticker", 100, 5), Ok(()));
    }

    #[test]
    fn test_repeat_within_cooldown_is_blocked() {
        let mut cooldowns = Cooldowns::default();
        let user = UserId::new(1);
        cooldowns.check(user, "$ticker", 100, 5).unwrap();

        assert_eq!(cooldowns.check(user, "$ticker", 102, 5), Err(3));
        // a blocked attempt does not restart the window
        assert_eq!(cooldowns.check(user, "$ticker", 105, 5), Ok(()));
    }

    #[test]
    fn test_cooldowns_are_per_user_and_command() {
        let mut cooldowns = Cooldowns::default();
        cooldowns.check(UserId::new(1), "$ticker", 100, 5).unwrap();

        assert_eq!(cooldowns.check(UserId::new(2), "$ticker", 101, 5), Ok(()));
        assert_eq!(cooldowns.check(UserId::new(1), "$chart", 101, 5), Ok(()));
    }

    #[test]
    fn test_expired_entries_are_evicted() {
        let mut cooldowns = Cooldowns::default();
        for id in 1..=3 {
            cooldowns.check(UserId::new(id), "$ticker", 100, 5).unwrap();
        }
        assert_eq!(cooldowns.last_used.len(), 3);

        cooldowns.check(UserId::new(4), "$chart", 110, 5).unwrap();
        assert_eq!(cooldowns.last_used.len(), 1);
        assert_eq!(cooldowns.check(UserId::new(4), "$chart", 112, 5), Err(3));
    }

    #[test]
    fn test_zero_cooldown_never_blocks() {
        let mut cooldowns = Cooldowns::default();
        let user = UserId::new(9);
        for _ in 0..3 {
            assert_eq!(cooldowns.check(user, "$feed", 50, 0), Ok(()));
        }
    }
}
