//! Sink wrapper for writers that borrow their output

use std::io::{self, Write};

/// Forwards writes and flushes to a borrowed sink and never closes it
///
/// Generators own their writer and drop it when done. Wrapping a caller's
/// sink in a `CloseShield` hands the generator a value it may drop freely,
/// while the sink itself stays open and usable after the write.
pub struct CloseShield<'a, W: Write + ?Sized> {
    inner: &'a mut W,
    written: usize,
}

impl<'a, W: Write + ?Sized> CloseShield<'a, W> {
    pub fn new(inner: &'a mut W) -> Self {
        Self { inner, written: 0 }
    }

    /// Bytes forwarded so far
    pub fn written(&self) -> usize {
        self.written
    }
}

impl<W: Write + ?Sized> Write for CloseShield<'_, W> {
    fn write(&mut self, buf: &[u8]) -> io::Result<usize> {
        let n = self.inner.write(buf)?;
        self.written += n;
        Ok(n)
    }

    fn flush(&mut self) -> io::Result<()> {
        self.inner.flush()
    }
}

#[cfg(test)]
mod tests {
    #![allow(non_snake_case)]

    use super::*;

    #[test]
    fn CloseShield___write___forwards_to_sink() {
        let mut sink = Vec::new();

        {
            let mut shield = CloseShield::new(&mut sink);
            shield.write_all(b"abc").unwrap();
            assert_eq!(shield.written(), 3);
        }

        assert_eq!(sink, b"abc");
    }

    #[test]
    fn CloseShield___drop___leaves_sink_usable() {
        let mut sink = Vec::new();

        drop(CloseShield::new(&mut sink));
        sink.write_all(b"after").unwrap();

        assert_eq!(sink, b"after");
    }
}
