/// Decodes a 28-bit ID3v2 synchsafe integer: the low 7 bits of each byte, most significant first.
#[inline]
pub fn synchsafe_u28(bytes: [u8; 4]) -> u32 {
    (u32::from(bytes[0] & 0x7F) << 21)
        | (u32::from(bytes[1] & 0x7F) << 14)
        | (u32::from(bytes[2] & 0x7F) << 7)
        | u32::from(bytes[3] & 0x7F)
}

#[inline]
pub fn be_u24(bytes: [u8; 3]) -> u32 {
    u32::from_be_bytes([0, bytes[0], bytes[1], bytes[2]])
}

#[inline]
pub fn be_u32(bytes: [u8; 4]) -> u32 {
    u32::from_be_bytes(bytes)
}

#[inline]
pub fn le_u16(bytes: [u8; 2]) -> u16 {
    u16::from_le_bytes(bytes)
}

#[inline]
pub fn le_u32(bytes: [u8; 4]) -> u32 {
    u32::from_le_bytes(bytes)
}

/// Copies `N` bytes starting at `offset`, or `None` if that would run past the slice.
#[inline]
pub fn array_at<const N: usize>(data: &[u8], offset: usize) -> Option<[u8; N]> {
    let end = offset.checked_add(N)?;
    data.get(offset..end)?.try_into().ok()
}

/// Forward-only reader over `data[..limit]`.
///
/// Every read checks the remaining length first; running past the limit
/// returns `None` and leaves the cursor where it was.
#[derive(Debug, Clone)]
pub struct ByteCursor<'a> {
    data: &'a [u8],
    pos: usize,
}

impl<'a> ByteCursor<'a> {
    /// `limit` is clamped to `data.len()`, and `start` to `limit`.
    pub fn new(data: &'a [u8], start: usize, limit: usize) -> Self {
        let data = &data[..limit.min(data.len())];
        let pos = start.min(data.len());
        Self { data, pos }
    }

    #[inline]
    pub fn position(&self) -> usize {
        self.pos
    }

    #[inline]
    pub fn remaining(&self) -> usize {
        self.data.len() - self.pos
    }

    pub fn read_u8(&mut self) -> Option<u8> {
        let byte = *self.data.get(self.pos)?;
        self.pos += 1;
        Some(byte)
    }

    pub fn skip(&mut self, n: usize) -> Option<()> {
        if n > self.remaining() {
            return None;
        }
        self.pos += n;
        Some(())
    }

    /// Advances past the next `0x00` byte.
    pub fn skip_until_nul(&mut self) -> Option<()> {
        let rest = &self.data[self.pos..];
        let idx = rest.iter().position(|&b| b == 0)?;
        self.pos += idx + 1;
        Some(())
    }

    /// Advances two bytes at a time past the next `0x00 0x00` pair.
    ///
    /// Pairs are compared at even steps from the current position, so a lone
    /// zero byte inside a UTF-16 code unit does not terminate the scan.
    pub fn skip_until_nul_pair(&mut self) -> Option<()> {
        let rest = &self.data[self.pos..];
        let idx = rest.chunks_exact(2).position(|pair| pair == [0, 0])?;
        self.pos += idx * 2 + 2;
        Some(())
    }
}
