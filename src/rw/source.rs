/// Cursor-driven byte source the decoder reads from. Reads that cannot be
/// satisfied in full do not move the cursor; the decoder turns them into
/// default values.
pub trait Source {
    /// The next `n` bytes, advancing past them; `None` if fewer remain.
    fn take(&mut self, n: usize) -> Option<&[u8]>;

    fn take_arr<const N: usize>(&mut self) -> Option<[u8; N]> {
        self.take(N).map(|b| {
            let mut arr = [0u8; N];
            arr.copy_from_slice(b);
            arr
        })
    }

    /// Up to `n` bytes, short when the source is short.
    fn take_bytes(&mut self, n: usize) -> Vec<u8>;

    /// Advances `n` bytes, or not at all if fewer remain.
    fn skip(&mut self, n: usize);

    /// Jumps to `pos` if it lies within the buffer.
    fn seek(&mut self, pos: usize);

    fn can_take(&self, n: usize) -> bool;

    /// Total bytes consumed so far; the read cursor position.
    fn count(&self) -> usize;

    fn remaining(&self) -> usize;
}

/// Source over a borrowed byte slice. A borrowed vector and a raw
/// pointer-plus-length region are both just `&[u8]` here.
pub struct ByteSource<'a> {
    data: &'a [u8],
    pos: usize,
}

impl<'a> ByteSource<'a> {
    pub fn new(data: &'a [u8]) -> Self {
        Self { data, pos: 0 }
    }

    pub fn reset(&mut self, data: &'a [u8]) {
        self.data = data;
        self.pos = 0;
    }
}

impl Source for ByteSource<'_> {
    fn take(&mut self, n: usize) -> Option<&[u8]> {
        if self.remaining() < n {
            return None;
        }
        let out = &self.data[self.pos..self.pos + n];
        self.pos += n;
        Some(out)
    }

    fn take_bytes(&mut self, n: usize) -> Vec<u8> {
        let n = n.min(self.remaining());
        let out = self.data[self.pos..self.pos + n].to_vec();
        self.pos += n;
        out
    }

    fn skip(&mut self, n: usize) {
        if self.remaining() >= n {
            self.pos += n;
        }
    }

    fn seek(&mut self, pos: usize) {
        if pos < self.data.len() {
            self.pos = pos;
        }
    }

    fn can_take(&self, n: usize) -> bool {
        self.remaining() >= n
    }

    fn count(&self) -> usize {
        self.pos
    }

    fn remaining(&self) -> usize {
        self.data.len() - self.pos
    }
}
