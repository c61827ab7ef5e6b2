//! Persisted display mode.
//!
//! The watchface keeps a single integer in durable storage: the last mode
//! applied from a configuration message. It is written on every successful
//! update and read once at startup.

use core::convert::Infallible;

use log::warn;

use crate::scheme::DisplayMode;

/// Abstract persistence backend for the display mode slot.
pub trait ModeStore {
    type Error;

    /// Read the stored mode tag. `Ok(None)` means nothing was ever written.
    fn read_mode(&mut self) -> Result<Option<i32>, Self::Error>;

    /// Overwrite the stored mode tag.
    fn write_mode(
        &mut self,
        mode: i32,
    ) -> Result<(), Self::Error>;
}

/// In-memory slot. Survives for the lifetime of the value only.
#[derive(Clone, Copy, PartialEq, Eq, Default, Debug)]
pub struct MemoryStore {
    slot: Option<i32>,
}

impl MemoryStore {
    pub const fn new() -> Self { Self { slot: None } }

    /// Store pre-seeded with `raw`, as if written by an earlier run.
    pub const fn with_mode(raw: i32) -> Self { Self { slot: Some(raw) } }

    /// Current raw contents of the slot.
    #[inline]
    pub const fn slot(&self) -> Option<i32> { self.slot }
}

impl ModeStore for MemoryStore {
    type Error = Infallible;

    fn read_mode(&mut self) -> Result<Option<i32>, Self::Error> { Ok(self.slot) }

    fn write_mode(
        &mut self,
        mode: i32,
    ) -> Result<(), Self::Error> {
        self.slot = Some(mode);
        Ok(())
    }
}

impl<T: ModeStore + ?Sized> ModeStore for &mut T {
    type Error = T::Error;

    fn read_mode(&mut self) -> Result<Option<i32>, Self::Error> { (**self).read_mode() }

    fn write_mode(
        &mut self,
        mode: i32,
    ) -> Result<(), Self::Error> {
        (**self).write_mode(mode)
    }
}

/// Load the mode to start with.
///
/// Absent, out-of-range and unreadable values all yield
/// [`DisplayMode::Normal`]; a read failure is logged, never surfaced.
pub fn restore_mode<S: ModeStore>(store: &mut S) -> DisplayMode {
    match store.read_mode() {
        Ok(Some(raw)) => {
            let mode = DisplayMode::from_raw(raw);
            if mode.raw() != raw {
                warn!("stored mode {} out of range, using {:?}", raw, mode);
            }
            mode
        }
        Ok(None) => DisplayMode::Normal,
        Err(_) => {
            warn!("mode storage unreadable, using {:?}", DisplayMode::Normal);
            DisplayMode::Normal
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    struct BrokenStore;

    impl ModeStore for BrokenStore {
        type Error = ();

        fn read_mode(&mut self) -> Result<Option<i32>, Self::Error> { Err(()) }

        fn write_mode(
            &mut self,
            _mode: i32,
        ) -> Result<(), Self::Error> {
            Err(())
        }
    }

    #[test]
    fn test_memory_store_starts_empty() {
        let mut store = MemoryStore::new();
        assert_eq!(store.read_mode(), Ok(None));
    }

    #[test]
    fn test_memory_store_write_then_read() {
        let mut store = MemoryStore::new();
        store.write_mode(2).unwrap();
        assert_eq!(store.read_mode(), Ok(Some(2)));
        assert_eq!(store.slot(), Some(2));
    }

    #[test]
    fn test_restore_absent_is_normal() {
        assert_eq!(restore_mode(&mut MemoryStore::new()), DisplayMode::Normal);
    }

    #[test]
    fn test_restore_each_mode() {
        for mode in DisplayMode::ALL {
            let mut store = MemoryStore::with_mode(mode.raw());
            assert_eq!(restore_mode(&mut store), mode);
        }
    }

    #[test]
    fn test_restore_out_of_range_is_normal() {
        assert_eq!(restore_mode(&mut MemoryStore::with_mode(7)), DisplayMode::Normal);
        assert_eq!(restore_mode(&mut MemoryStore::with_mode(-3)), DisplayMode::Normal);
    }

    #[test]
    fn test_restore_read_error_is_normal() {
        assert_eq!(restore_mode(&mut BrokenStore), DisplayMode::Normal);
    }

    #[test]
    fn test_store_through_mut_reference() {
        fn persist<S: ModeStore>(mut store: S) -> Result<(), S::Error> { store.write_mode(1) }

        let mut store = MemoryStore::new();
        persist(&mut store).unwrap();
        assert_eq!(store.slot(), Some(1));
    }
}
