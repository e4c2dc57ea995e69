use std::sync::atomic::{AtomicU64, Ordering};

use crate::model::AccountNumber;

/// Seed of the process-wide generator; the first account gets `DEFAULT_SEED + 1`.
pub const DEFAULT_SEED: AccountNumber = 1000;

static GLOBAL: AccountNumbers = AccountNumbers::starting_at(DEFAULT_SEED);

/// Hands out unique, increasing account numbers.
///
/// Safe to share between threads: each call to [`next`](Self::next) is a
/// single atomic increment.
#[derive(Debug)]
pub struct AccountNumbers {
    last: AtomicU64,
}

impl AccountNumbers {
    pub const fn starting_at(seed: AccountNumber) -> Self {
        Self {
            last: AtomicU64::new(seed),
        }
    }

    /// The generator used by the plain `Account` constructors.
    pub fn global() -> &'static AccountNumbers {
        &GLOBAL
    }

    /// Advance the counter and return the new value.
    pub fn next(&self) -> AccountNumber {
        self.last.fetch_add(1, Ordering::Relaxed) + 1
    }
}

impl Default for AccountNumbers {
    fn default() -> Self {
        Self::starting_at(DEFAULT_SEED)
    }
}

#[cfg(test)]
mod tests {
    use std::collections::HashSet;
    use std::sync::Arc;
    use std::thread;

    use super::*;

    #[test]
    fn first_number_follows_seed() {
        let numbers = AccountNumbers::default();
        assert_eq!(numbers.next(), 1001);
        assert_eq!(numbers.next(), 1002);
    }

    #[test]
    fn custom_seed() {
        let numbers = AccountNumbers::starting_at(0);
        assert_eq!(numbers.next(), 1);
    }

    #[test]
    fn global_numbers_increase() {
        let first = AccountNumbers::global().next();
        let second = AccountNumbers::global().next();
        assert!(second > first);
        assert!(first > DEFAULT_SEED);
    }

    #[test]
    fn concurrent_numbers_are_unique() {
        let numbers = Arc::new(AccountNumbers::default());
        let handles: Vec<_> = (0..4)
            .map(|_| {
                let numbers = Arc::clone(&numbers);
                thread::spawn(move || (0..250).map(|_| numbers.next()).collect::<Vec<_>>())
            })
            .collect();

        let all: HashSet<_> = handles
            .into_iter()
            .flat_map(|h| h.join().unwrap())
            .collect();
        assert_eq!(all.len(), 1000);
        assert_eq!(numbers.next(), 2001);
    }
}
