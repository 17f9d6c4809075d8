//! # Singleton Holder
//!
//! [`Singleton<T>`] is an explicit, process-wide holder for a single value. It is declared as a
//! `static`, stays empty until the first access, and then keeps the value for the rest of the
//! process. There is no teardown.
//!
//! ```rust
//! use pattern_framework::Singleton;
//!
//! static GREETING: Singleton<String> = Singleton::new();
//!
//! let first = GREETING.get_or_init(|| "hello".to_string());
//! let again = GREETING.get_or_init(|| "ignored".to_string());
//! assert!(std::ptr::eq(first, again));
//! assert_eq!(GREETING.constructions(), 1);
//! ```

use std::any::type_name;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::{Mutex, OnceLock};
use tracing::{debug, info};

/// A lazily constructed, never replaced, process-wide value.
///
/// # Architecture Note
/// Initialization is double-checked: readers first look at the `OnceLock` without locking; only
/// callers that find it empty take the mutex, look again, and the one that still finds it empty
/// runs `init`. Everyone else observes the value that caller stored.
pub struct Singleton<T> {
    cell: OnceLock<T>,
    guard: Mutex<()>,
    constructions: AtomicUsize,
}

impl<T> Singleton<T> {
    pub const fn new() -> Self {
        Self {
            cell: OnceLock::new(),
            guard: Mutex::new(()),
            constructions: AtomicUsize::new(0),
        }
    }

    /// Returns the instance, constructing it with `init` on the first call.
    pub fn get_or_init<F>(&self, init: F) -> &T
    where
        F: FnOnce() -> T,
    {
        if let Some(value) = self.cell.get() {
            return value;
        }

        // A poisoned guard only means another initializer panicked; the cell is still consistent.
        let _lock = self.guard.lock().unwrap_or_else(|poisoned| poisoned.into_inner());

        if let Some(value) = self.cell.get() {
            debug!(kind = short_name::<T>(), "Initialized by another caller");
            return value;
        }

        let value = init();
        self.constructions.fetch_add(1, Ordering::SeqCst);
        info!(kind = short_name::<T>(), "Singleton constructed");
        self.cell.get_or_init(|| value)
    }

    /// The instance, if it has been constructed.
    pub fn get(&self) -> Option<&T> {
        self.cell.get()
    }

    pub fn is_initialized(&self) -> bool {
        self.cell.get().is_some()
    }

    /// How many times an initializer has run. Never more than one.
    pub fn constructions(&self) -> usize {
        self.constructions.load(Ordering::SeqCst)
    }
}

impl<T> Default for Singleton<T> {
    fn default() -> Self {
        Self::new()
    }
}

fn short_name<T>() -> &'static str {
    type_name::<T>().split("::").last().unwrap_or("Unknown")
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::thread;

    #[derive(Debug)]
    struct Planet {
        name: &'static str,
    }

    #[test]
    fn empty_until_first_access() {
        let holder: Singleton<Planet> = Singleton::new();
        assert!(!holder.is_initialized());
        assert!(holder.get().is_none());

        let planet = holder.get_or_init(|| Planet { name: "Earth" });
        assert_eq!(planet.name, "Earth");
        assert!(holder.is_initialized());
    }

    #[test]
    fn later_initializers_are_ignored() {
        let holder = Singleton::new();
        holder.get_or_init(|| Planet { name: "Earth" });
        let second = holder.get_or_init(|| Planet { name: "Mars" });
        assert_eq!(second.name, "Earth");
        assert_eq!(holder.constructions(), 1);
    }

    #[test]
    fn concurrent_first_use_builds_once() {
        static SHARED: Singleton<Planet> = Singleton::new();

        let addresses: Vec<usize> = thread::scope(|scope| {
            let workers: Vec<_> = (0..16)
                .map(|_| {
                    scope.spawn(|| {
                        let planet = SHARED.get_or_init(|| {
                            thread::yield_now();
                            Planet { name: "Earth" }
                        });
                        planet as *const Planet as usize
                    })
                })
                .collect();
            workers.into_iter().map(|w| w.join().unwrap()).collect()
        });

        assert_eq!(SHARED.constructions(), 1);
        assert!(addresses.windows(2).all(|pair| pair[0] == pair[1]));
    }
}
