//! Core trait for streaming checksums.
//!
//! The I/O adapters in [`io`](crate::io) and `async_io` are generic over
//! this trait rather than tied to [`Crc`](crate::Crc).

/// A resettable, streaming checksum.
///
/// Implementations must give the same [`checksum`](Checksum::checksum) for a
/// byte sequence no matter how it is split across
/// [`update`](Checksum::update) calls.
pub trait Checksum {
    /// Discard any in-progress computation.
    fn reset(&mut self);

    /// Feed more bytes.
    fn update(&mut self, data: &[u8]);

    /// Finalized checksum of everything fed since the last reset.
    ///
    /// Does not consume or modify the running state.
    fn checksum(&self) -> u64;

    /// Number of significant bits in [`checksum`](Checksum::checksum).
    fn width(&self) -> u8;

    /// Reset, feed `data`, and return the checksum (convenience method).
    fn checksum_of(&mut self, data: &[u8]) -> u64 {
        self.reset();
        self.update(data);
        self.checksum()
    }
}

impl<C: Checksum + ?Sized> Checksum for &mut C {
    fn reset(&mut self) {
        (**self).reset();
    }

    fn update(&mut self, data: &[u8]) {
        (**self).update(data);
    }

    fn checksum(&self) -> u64 {
        (**self).checksum()
    }

    fn width(&self) -> u8 {
        (**self).width()
    }
}

impl<C: Checksum + ?Sized> Checksum for Box<C> {
    fn reset(&mut self) {
        (**self).reset();
    }

    fn update(&mut self, data: &[u8]) {
        (**self).update(data);
    }

    fn checksum(&self) -> u64 {
        (**self).checksum()
    }

    fn width(&self) -> u8 {
        (**self).width()
    }
}
