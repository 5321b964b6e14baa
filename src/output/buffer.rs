// src/output/buffer.rs

use std::{
    io::{self, Write},
    sync::{Arc, Mutex, PoisonError},
};

/// A cloneable in-memory sink. One clone goes into an `Output`, the other
/// stays with the caller to read what was written.
#[derive(Debug, Clone, Default)]
pub struct OutputBuffer {
    bytes: Arc<Mutex<Vec<u8>>>,
}

impl OutputBuffer {
    /// Everything written so far, lossily decoded as UTF-8.
    pub fn contents(&self) -> String {
        let bytes = self.bytes.lock().unwrap_or_else(PoisonError::into_inner);
        String::from_utf8_lossy(&bytes).into_owned()
    }

    pub fn clear(&self) {
        self.bytes
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .clear();
    }

    /// Returns the contents and clears the buffer.
    pub fn take(&self) -> String {
        let mut bytes = self.bytes.lock().unwrap_or_else(PoisonError::into_inner);
        let taken = std::mem::take(&mut *bytes);
        String::from_utf8_lossy(&taken).into_owned()
    }
}

impl Write for OutputBuffer {
    fn write(&mut self, buf: &[u8]) -> io::Result<usize> {
        self.bytes
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .extend_from_slice(buf);
        Ok(buf.len())
    }

    fn flush(&mut self) -> io::Result<()> {
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_clones_share_bytes() {
        let buffer = OutputBuffer::default();
        let mut writer = buffer.clone();
        writer.write_all(b"abc").unwrap();
        assert_eq!(buffer.contents(), "abc");
        assert_eq!(buffer.take(), "abc");
        assert_eq!(buffer.contents(), "");

        writer.write_all(b"x").unwrap();
        buffer.clear();
        assert_eq!(buffer.contents(), "");
    }
}
