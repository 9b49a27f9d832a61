use std::ops::{Deref, DerefMut};

/// Owns `value` for the length of a scope and hands it to `cleanup` when
/// the scope exits, whether it returns normally or unwinds.
pub struct CleanupGuard<T, F>
where
    F: FnOnce(&mut T),
{
    value: T,
    cleanup: Option<F>,
}

impl<T, F> CleanupGuard<T, F>
where
    F: FnOnce(&mut T),
{
    pub fn new(value: T, cleanup: F) -> Self {
        Self {
            value,
            cleanup: Some(cleanup),
        }
    }
}

impl<T, F> Deref for CleanupGuard<T, F>
where
    F: FnOnce(&mut T),
{
    type Target = T;

    fn deref(&self) -> &T {
        &self.value
    }
}

impl<T, F> DerefMut for CleanupGuard<T, F>
where
    F: FnOnce(&mut T),
{
    fn deref_mut(&mut self) -> &mut T {
        &mut self.value
    }
}

impl<T, F> Drop for CleanupGuard<T, F>
where
    F: FnOnce(&mut T),
{
    fn drop(&mut self) {
        if let Some(cleanup) = self.cleanup.take() {
            cleanup(&mut self.value);
        }
    }
}
