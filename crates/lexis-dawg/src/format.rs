// Binary dictionary header: tag, declared byte order, bracketed size fields.

use crate::DawgError;

/// Dictionary tag for files whose edge records are little-endian.
pub const TAG_LITTLE: &[u8; 6] = b"DAWGLE";

/// Dictionary tag for files whose edge records are big-endian.
pub const TAG_BIG: &[u8; 6] = b"DAWGBE";

/// Byte order of the packed edge records, declared by the file tag.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ByteOrder {
    Little,
    Big,
}

impl ByteOrder {
    /// The byte order of the host.
    pub fn native() -> Self {
        if cfg!(target_endian = "little") {
            ByteOrder::Little
        } else {
            ByteOrder::Big
        }
    }
}

/// Parsed dictionary file header.
///
/// The header is textual and sits directly in front of the raw edge
/// records:
///
/// 1. 6 ASCII bytes: `DAWGLE` or `DAWGBE` (the suffix names the byte
///    order of the records that follow)
/// 2. `[<edgeCount>]` -- literal brackets around a base-10 integer
/// 3. `[<startIndex>]` -- same format, the root sibling-run index
///
/// Whitespace may appear around the brackets and the digits. The edge
/// records begin at `body_offset` and occupy the rest of the file.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FileHeader {
    pub byte_order: ByteOrder,
    pub edge_count: u32,
    pub start_index: u32,
    pub body_offset: usize,
}

/// Parse and validate the dictionary header.
///
/// Checks the tag and both bracketed fields; range validation of
/// `start_index` and of the body length against `edge_count` is the
/// loader's job since it owns the remaining bytes.
pub fn parse_header(data: &[u8]) -> Result<FileHeader, DawgError> {
    let tag = data.get(..TAG_LITTLE.len()).ok_or(DawgError::InvalidTag)?;
    let byte_order = match tag {
        t if t == TAG_LITTLE => ByteOrder::Little,
        t if t == TAG_BIG => ByteOrder::Big,
        _ => return Err(DawgError::InvalidTag),
    };

    let mut pos = TAG_LITTLE.len();
    let edge_count = parse_bracketed(data, &mut pos, "edge count")?;
    let start_index = parse_bracketed(data, &mut pos, "start index")?;

    Ok(FileHeader {
        byte_order,
        edge_count,
        start_index,
        body_offset: pos,
    })
}

/// Parse one whitespace-tolerant `[<integer>]` field starting at `*pos`,
/// advancing `*pos` past the closing bracket.
fn parse_bracketed(data: &[u8], pos: &mut usize, field: &'static str) -> Result<u32, DawgError> {
    let malformed = || DawgError::MalformedHeaderField { field };

    skip_whitespace(data, pos);
    if data.get(*pos) != Some(&b'[') {
        return Err(malformed());
    }
    *pos += 1;

    skip_whitespace(data, pos);
    let digits_start = *pos;
    let mut value: u32 = 0;
    while let Some(&b @ b'0'..=b'9') = data.get(*pos) {
        value = value
            .checked_mul(10)
            .and_then(|v| v.checked_add((b - b'0') as u32))
            .ok_or_else(malformed)?;
        *pos += 1;
    }
    if *pos == digits_start {
        return Err(malformed());
    }

    skip_whitespace(data, pos);
    if data.get(*pos) != Some(&b']') {
        return Err(malformed());
    }
    *pos += 1;

    Ok(value)
}

fn skip_whitespace(data: &[u8], pos: &mut usize) {
    while data.get(*pos).is_some_and(|b| b.is_ascii_whitespace()) {
        *pos += 1;
    }
}
