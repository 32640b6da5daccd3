//! Huffman decoding for HPACK string literals (RFC 7541 Appendix B)
//!
//! Decoding walks a precomputed table four bits at a time. Each state is a
//! node of the canonical code tree; each `(state, nibble)` entry names the
//! next state, the octet emitted on the way (if any) and whether the walk
//! is still on a valid path or may stop here. The table is generated from
//! the Appendix B code and checked against the Appendix C vectors in the
//! tests below.

use super::DecodeError;

/// Entry emits one octet.
const DECODES: u8 = 0x01;
/// Entry is a legal state to be in after consuming the nibble.
const VALID: u8 = 0x02;
/// Stopping in this state is valid end-of-input padding.
const LAST: u8 = 0x04;

#[derive(Debug, Clone, Copy)]
struct Entry {
    next_state: u8,
    value: u8,
    flags: u8,
}

const fn e(next_state: u8, value: u8, flags: u8) -> Entry {
    Entry {
        next_state,
        value,
        flags,
    }
}

/// Decode a Huffman-coded string literal.
///
/// Fails if the input strays off the code tree, contains the EOS symbol, or
/// ends with padding other than a partial EOS prefix of at most 7 bits.
pub(crate) fn decode(input: &[u8]) -> Result<Vec<u8>, DecodeError> {
    let mut out = Vec::with_capacity(input.len() * 2);
    let mut state = 0usize;
    let mut flags = VALID | LAST;

    for &byte in input {
        for nibble in [byte >> 4, byte & 0x0f] {
            let entry = DECODE_TABLE[state][nibble as usize];
            if entry.flags & VALID == 0 {
                return Err(DecodeError::InvalidHuffman);
            }
            if entry.flags & DECODES != 0 {
                out.push(entry.value);
            }
            state = entry.next_state as usize;
            flags = entry.flags;
        }
    }

    if flags & LAST == 0 {
        return Err(DecodeError::InvalidHuffman);
    }
    Ok(out)
}

#[rustfmt::skip]
static DECODE_TABLE: [[Entry; 16]; 256] = [
    [e(15, 0, 2), e(16, 0, 2), e(17, 0, 2), e(18, 0, 2), e(19, 0, 2), e(20, 0, 2), e(21, 0, 2), e(22, 0, 2), e(23, 0, 2), e(24, 0, 2), e(25, 0, 2), e(26, 0, 2), e(27, 0, 2), e(28, 0, 2), e(29, 0, 2), e(30, 0, 6)],
    [e(0, 48, 7), e(0, 49, 7), e(0, 50, 7), e(0, 97, 7), e(0, 99, 7), e(0, 101, 7), e(0, 105, 7), e(0, 111, 7), e(0, 115, 7), e(0, 116, 7), e(31, 0, 2), e(32, 0, 2), e(33, 0, 2), e(34, 0, 2), e(35, 0, 2), e(36, 0, 2)],
    [e(37, 0, 2), e(38, 0, 2), e(39, 0, 2), e(40, 0, 2), e(41, 0, 2), e(42, 0, 2), e(43, 0, 2), e(44, 0, 2), e(45, 0, 2), e(46, 0, 2), e(47, 0, 2), e(48, 0, 2), e(49, 0, 2), e(50, 0, 2), e(51, 0, 2), e(52, 0, 6)],
    [e(1, 48, 3), e(2, 48, 7), e(1, 49, 3), e(2, 49, 7), e(1, 50, 3), e(2, 50, 7), e(1, 97, 3), e(2, 97, 7), e(1, 99, 3), e(2, 99, 7), e(1, 101, 3), e(2, 101, 7), e(1, 105, 3), e(2, 105, 7), e(1, 111, 3), e(2, 111, 7)],
    [e(1, 115, 3), e(2, 115, 7), e(1, 116, 3), e(2, 116, 7), e(0, 32, 7), e(0, 37, 7), e(0, 45, 7), e(0, 46, 7), e(0, 47, 7), e(0, 51, 7), e(0, 52, 7), e(0, 53, 7), e(0, 54, 7), e(0, 55, 7), e(0, 56, 7), e(0, 57, 7)],
    [e(0, 61, 7), e(0, 65, 7), e(0, 95, 7), e(0, 98, 7), e(0, 100, 7), e(0, 102, 7), e(0, 103, 7), e(0, 104, 7), e(0, 108, 7), e(0, 109, 7), e(0, 110, 7), e(0, 112, 7), e(0, 114, 7), e(0, 117, 7), e(53, 0, 2), e(54, 0, 2)],
    [e(55, 0, 2), e(56, 0, 2), e(57, 0, 2), e(58, 0, 2), e(59, 0, 2), e(60, 0, 2), e(61, 0, 2), e(62, 0, 2), e(63, 0, 2), e(64, 0, 2), e(65, 0, 2), e(66, 0, 2), e(67, 0, 2), e(68, 0, 2), e(69, 0, 2), e(70, 0, 6)],
    [e(3, 48, 3), e(4, 48, 3), e(5, 48, 3), e(6, 48, 7), e(3, 49, 3), e(4, 49, 3), e(5, 49, 3), e(6, 49, 7), e(3, 50, 3), e(4, 50, 3), e(5, 50, 3), e(6, 50, 7), e(3, 97, 3), e(4, 97, 3), e(5, 97, 3), e(6, 97, 7)],
    [e(3, 99, 3), e(4, 99, 3), e(5, 99, 3), e(6, 99, 7), e(3, 101, 3), e(4, 101, 3), e(5, 101, 3), e(6, 101, 7), e(3, 105, 3), e(4, 105, 3), e(5, 105, 3), e(6, 105, 7), e(3, 111, 3), e(4, 111, 3), e(5, 111, 3), e(6, 111, 7)],
    [e(3, 115, 3), e(4, 115, 3), e(5, 115, 3), e(6, 115, 7), e(3, 116, 3), e(4, 116, 3), e(5, 116, 3), e(6, 116, 7), e(1, 32, 3), e(2, 32, 7), e(1, 37, 3), e(2, 37, 7), e(1, 45, 3), e(2, 45, 7), e(1, 46, 3), e(2, 46, 7)],
    [e(1, 47, 3), e(2, 47, 7), e(1, 51, 3), e(2, 51, 7), e(1, 52, 3), e(2, 52, 7), e(1, 53, 3), e(2, 53, 7), e(1, 54, 3), e(2, 54, 7), e(1, 55, 3), e(2, 55, 7), e(1, 56, 3), e(2, 56, 7), e(1, 57, 3), e(2, 57, 7)],
    [e(1, 61, 3), e(2, 61, 7), e(1, 65, 3), e(2, 65, 7), e(1, 95, 3), e(2, 95, 7), e(1, 98, 3), e(2, 98, 7), e(1, 100, 3), e(2, 100, 7), e(1, 102, 3), e(2, 102, 7), e(1, 103, 3), e(2, 103, 7), e(1, 104, 3), e(2, 104, 7)],
    [e(1, 108, 3), e(2, 108, 7), e(1, 109, 3), e(2, 109, 7), e(1, 110, 3), e(2, 110, 7), e(1, 112, 3), e(2, 112, 7), e(1, 114, 3), e(2, 114, 7), e(1, 117, 3), e(2, 117, 7), e(0, 58, 7), e(0, 66, 7), e(0, 67, 7), e(0, 68, 7)],
    [e(0, 69, 7), e(0, 70, 7), e(0, 71, 7), e(0, 72, 7), e(0, 73, 7), e(0, 74, 7), e(0, 75, 7), e(0, 76, 7), e(0, 77, 7), e(0, 78, 7), e(0, 79, 7), e(0, 80, 7), e(0, 81, 7), e(0, 82, 7), e(0, 83, 7), e(0, 84, 7)],
    [e(0, 85, 7), e(0, 86, 7), e(0, 87, 7), e(0, 89, 7), e(0, 106, 7), e(0, 107, 7), e(0, 113, 7), e(0, 118, 7), e(0, 119, 7), e(0, 120, 7), e(0, 121, 7), e(0, 122, 7), e(71, 0, 2), e(72, 0, 2), e(73, 0, 2), e(74, 0, 6)],
    [e(7, 48, 3), e(8, 48, 3), e(9, 48, 3), e(10, 48, 3), e(11, 48, 3), e(12, 48, 3), e(13, 48, 3), e(14, 48, 7), e(7, 49, 3), e(8, 49, 3), e(9, 49, 3), e(10, 49, 3), e(11, 49, 3), e(12, 49, 3), e(13, 49, 3), e(14, 49, 7)],
    [e(7, 50, 3), e(8, 50, 3), e(9, 50, 3), e(10, 50, 3), e(11, 50, 3), e(12, 50, 3), e(13, 50, 3), e(14, 50, 7), e(7, 97, 3), e(8, 97, 3), e(9, 97, 3), e(10, 97, 3), e(11, 97, 3), e(12, 97, 3), e(13, 97, 3), e(14, 97, 7)],
    [e(7, 99, 3), e(8, 99, 3), e(9, 99, 3), e(10, 99, 3), e(11, 99, 3), e(12, 99, 3), e(13, 99, 3), e(14, 99, 7), e(7, 101, 3), e(8, 101, 3), e(9, 101, 3), e(10, 101, 3), e(11, 101, 3), e(12, 101, 3), e(13, 101, 3), e(14, 101, 7)],
    [e(7, 105, 3), e(8, 105, 3), e(9, 105, 3), e(10, 105, 3), e(11, 105, 3), e(12, 105, 3), e(13, 105, 3), e(14, 105, 7), e(7, 111, 3), e(8, 111, 3), e(9, 111, 3), e(10, 111, 3), e(11, 111, 3), e(12, 111, 3), e(13, 111, 3), e(14, 111, 7)],
    [e(7, 115, 3), e(8, 115, 3), e(9, 115, 3), e(10, 115, 3), e(11, 115, 3), e(12, 115, 3), e(13, 115, 3), e(14, 115, 7), e(7, 116, 3), e(8, 116, 3), e(9, 116, 3), e(10, 116, 3), e(11, 116, 3), e(12, 116, 3), e(13, 116, 3), e(14, 116, 7)],
    [e(3, 32, 3), e(4, 32, 3), e(5, 32, 3), e(6, 32, 7), e(3, 37, 3), e(4, 37, 3), e(5, 37, 3), e(6, 37, 7), e(3, 45, 3), e(4, 45, 3), e(5, 45, 3), e(6, 45, 7), e(3, 46, 3), e(4, 46, 3), e(5, 46, 3), e(6, 46, 7)],
    [e(3, 47, 3), e(4, 47, 3), e(5, 47, 3), e(6, 47, 7), e(3, 51, 3), e(4, 51, 3), e(5, 51, 3), e(6, 51, 7), e(3, 52, 3), e(4, 52, 3), e(5, 52, 3), e(6, 52, 7), e(3, 53, 3), e(4, 53, 3), e(5, 53, 3), e(6, 53, 7)],
    [e(3, 54, 3), e(4, 54, 3), e(5, 54, 3), e(6, 54, 7), e(3, 55, 3), e(4, 55, 3), e(5, 55, 3), e(6, 55, 7), e(3, 56, 3), e(4, 56, 3), e(5, 56, 3), e(6, 56, 7), e(3, 57, 3), e(4, 57, 3), e(5, 57, 3), e(6, 57, 7)],
    [e(3, 61, 3), e(4, 61, 3), e(5, 61, 3), e(6, 61, 7), e(3, 65, 3), e(4, 65, 3), e(5, 65, 3), e(6, 65, 7), e(3, 95, 3), e(4, 95, 3), e(5, 95, 3), e(6, 95, 7), e(3, 98, 3), e(4, 98, 3), e(5, 98, 3), e(6, 98, 7)],
    [e(3, 100, 3), e(4, 100, 3), e(5, 100, 3), e(6, 100, 7), e(3, 102, 3), e(4, 102, 3), e(5, 102, 3), e(6, 102, 7), e(3, 103, 3), e(4, 103, 3), e(5, 103, 3), e(6, 103, 7), e(3, 104, 3), e(4, 104, 3), e(5, 104, 3), e(6, 104, 7)],
    [e(3, 108, 3), e(4, 108, 3), e(5, 108, 3), e(6, 108, 7), e(3, 109, 3), e(4, 109, 3), e(5, 109, 3), e(6, 109, 7), e(3, 110, 3), e(4, 110, 3), e(5, 110, 3), e(6, 110, 7), e(3, 112, 3), e(4, 112, 3), e(5, 112, 3), e(6, 112, 7)],
    [e(3, 114, 3), e(4, 114, 3), e(5, 114, 3), e(6, 114, 7), e(3, 117, 3), e(4, 117, 3), e(5, 117, 3), e(6, 117, 7), e(1, 58, 3), e(2, 58, 7), e(1, 66, 3), e(2, 66, 7), e(1, 67, 3), e(2, 67, 7), e(1, 68, 3), e(2, 68, 7)],
    [e(1, 69, 3), e(2, 69, 7), e(1, 70, 3), e(2, 70, 7), e(1, 71, 3), e(2, 71, 7), e(1, 72, 3), e(2, 72, 7), e(1, 73, 3), e(2, 73, 7), e(1, 74, 3), e(2, 74, 7), e(1, 75, 3), e(2, 75, 7), e(1, 76, 3), e(2, 76, 7)],
    [e(1, 77, 3), e(2, 77, 7), e(1, 78, 3), e(2, 78, 7), e(1, 79, 3), e(2, 79, 7), e(1, 80, 3), e(2, 80, 7), e(1, 81, 3), e(2, 81, 7), e(1, 82, 3), e(2, 82, 7), e(1, 83, 3), e(2, 83, 7), e(1, 84, 3), e(2, 84, 7)],
    [e(1, 85, 3), e(2, 85, 7), e(1, 86, 3), e(2, 86, 7), e(1, 87, 3), e(2, 87, 7), e(1, 89, 3), e(2, 89, 7), e(1, 106, 3), e(2, 106, 7), e(1, 107, 3), e(2, 107, 7), e(1, 113, 3), e(2, 113, 7), e(1, 118, 3), e(2, 118, 7)],
    [e(1, 119, 3), e(2, 119, 7), e(1, 120, 3), e(2, 120, 7), e(1, 121, 3), e(2, 121, 7), e(1, 122, 3), e(2, 122, 7), e(0, 38, 7), e(0, 42, 7), e(0, 44, 7), e(0, 59, 7), e(0, 88, 7), e(0, 90, 7), e(75, 0, 2), e(76, 0, 2)],
    [e(7, 32, 3), e(8, 32, 3), e(9, 32, 3), e(10, 32, 3), e(11, 32, 3), e(12, 32, 3), e(13, 32, 3), e(14, 32, 7), e(7, 37, 3), e(8, 37, 3), e(9, 37, 3), e(10, 37, 3), e(11, 37, 3), e(12, 37, 3), e(13, 37, 3), e(14, 37, 7)],
    [e(7, 45, 3), e(8, 45, 3), e(9, 45, 3), e(10, 45, 3), e(11, 45, 3), e(12, 45, 3), e(13, 45, 3), e(14, 45, 7), e(7, 46, 3), e(8, 46, 3), e(9, 46, 3), e(10, 46, 3), e(11, 46, 3), e(12, 46, 3), e(13, 46, 3), e(14, 46, 7)],
    [e(7, 47, 3), e(8, 47, 3), e(9, 47, 3), e(10, 47, 3), e(11, 47, 3), e(12, 47, 3), e(13, 47, 3), e(14, 47, 7), e(7, 51, 3), e(8, 51, 3), e(9, 51, 3), e(10, 51, 3), e(11, 51, 3), e(12, 51, 3), e(13, 51, 3), e(14, 51, 7)],
    [e(7, 52, 3), e(8, 52, 3), e(9, 52, 3), e(10, 52, 3), e(11, 52, 3), e(12, 52, 3), e(13, 52, 3), e(14, 52, 7), e(7, 53, 3), e(8, 53, 3), e(9, 53, 3), e(10, 53, 3), e(11, 53, 3), e(12, 53, 3), e(13, 53, 3), e(14, 53, 7)],
    [e(7, 54, 3), e(8, 54, 3), e(9, 54, 3), e(10, 54, 3), e(11, 54, 3), e(12, 54, 3), e(13, 54, 3), e(14, 54, 7), e(7, 55, 3), e(8, 55, 3), e(9, 55, 3), e(10, 55, 3), e(11, 55, 3), e(12, 55, 3), e(13, 55, 3), e(14, 55, 7)],
    [e(7, 56, 3), e(8, 56, 3), e(9, 56, 3), e(10, 56, 3), e(11, 56, 3), e(12, 56, 3), e(13, 56, 3), e(14, 56, 7), e(7, 57, 3), e(8, 57, 3), e(9, 57, 3), e(10, 57, 3), e(11, 57, 3), e(12, 57, 3), e(13, 57, 3), e(14, 57, 7)],
    [e(7, 61, 3), e(8, 61, 3), e(9, 61, 3), e(10, 61, 3), e(11, 61, 3), e(12, 61, 3), e(13, 61, 3), e(14, 61, 7), e(7, 65, 3), e(8, 65, 3), e(9, 65, 3), e(10, 65, 3), e(11, 65, 3), e(12, 65, 3), e(13, 65, 3), e(14, 65, 7)],
    [e(7, 95, 3), e(8, 95, 3), e(9, 95, 3), e(10, 95, 3), e(11, 95, 3), e(12, 95, 3), e(13, 95, 3), e(14, 95, 7), e(7, 98, 3), e(8, 98, 3), e(9, 98, 3), e(10, 98, 3), e(11, 98, 3), e(12, 98, 3), e(13, 98, 3), e(14, 98, 7)],
    [e(7, 100, 3), e(8, 100, 3), e(9, 100, 3), e(10, 100, 3), e(11, 100, 3), e(12, 100, 3), e(13, 100, 3), e(14, 100, 7), e(7, 102, 3), e(8, 102, 3), e(9, 102, 3), e(10, 102, 3), e(11, 102, 3), e(12, 102, 3), e(13, 102, 3), e(14, 102, 7)],
    [e(7, 103, 3), e(8, 103, 3), e(9, 103, 3), e(10, 103, 3), e(11, 103, 3), e(12, 103, 3), e(13, 103, 3), e(14, 103, 7), e(7, 104, 3), e(8, 104, 3), e(9, 104, 3), e(10, 104, 3), e(11, 104, 3), e(12, 104, 3), e(13, 104, 3), e(14, 104, 7)],
    [e(7, 108, 3), e(8, 108, 3), e(9, 108, 3), e(10, 108, 3), e(11, 108, 3), e(12, 108, 3), e(13, 108, 3), e(14, 108, 7), e(7, 109, 3), e(8, 109, 3), e(9, 109, 3), e(10, 109, 3), e(11, 109, 3), e(12, 109, 3), e(13, 109, 3), e(14, 109, 7)],
    [e(7, 110, 3), e(8, 110, 3), e(9, 110, 3), e(10, 110, 3), e(11, 110, 3), e(12, 110, 3), e(13, 110, 3), e(14, 110, 7), e(7, 112, 3), e(8, 112, 3), e(9, 112, 3), e(10, 112, 3), e(11, 112, 3), e(12, 112, 3), e(13, 112, 3), e(14, 112, 7)],
    [e(7, 114, 3), e(8, 114, 3), e(9, 114, 3), e(10, 114, 3), e(11, 114, 3), e(12, 114, 3), e(13, 114, 3), e(14, 114, 7), e(7, 117, 3), e(8, 117, 3), e(9, 117, 3), e(10, 117, 3), e(11, 117, 3), e(12, 117, 3), e(13, 117, 3), e(14, 117, 7)],
    [e(3, 58, 3), e(4, 58, 3), e(5, 58, 3), e(6, 58, 7), e(3, 66, 3), e(4, 66, 3), e(5, 66, 3), e(6, 66, 7), e(3, 67, 3), e(4, 67, 3), e(5, 67, 3), e(6, 67, 7), e(3, 68, 3), e(4, 68, 3), e(5, 68, 3), e(6, 68, 7)],
    [e(3, 69, 3), e(4, 69, 3), e(5, 69, 3), e(6, 69, 7), e(3, 70, 3), e(4, 70, 3), e(5, 70, 3), e(6, 70, 7), e(3, 71, 3), e(4, 71, 3), e(5, 71, 3), e(6, 71, 7), e(3, 72, 3), e(4, 72, 3), e(5, 72, 3), e(6, 72, 7)],
    [e(3, 73, 3), e(4, 73, 3), e(5, 73, 3), e(6, 73, 7), e(3, 74, 3), e(4, 74, 3), e(5, 74, 3), e(6, 74, 7), e(3, 75, 3), e(4, 75, 3), e(5, 75, 3), e(6, 75, 7), e(3, 76, 3), e(4, 76, 3), e(5, 76, 3), e(6, 76, 7)],
    [e(3, 77, 3), e(4, 77, 3), e(5, 77, 3), e(6, 77, 7), e(3, 78, 3), e(4, 78, 3), e(5, 78, 3), e(6, 78, 7), e(3, 79, 3), e(4, 79, 3), e(5, 79, 3), e(6, 79, 7), e(3, 80, 3), e(4, 80, 3), e(5, 80, 3), e(6, 80, 7)],
    [e(3, 81, 3), e(4, 81, 3), e(5, 81, 3), e(6, 81, 7), e(3, 82, 3), e(4, 82, 3), e(5, 82, 3), e(6, 82, 7), e(3, 83, 3), e(4, 83, 3), e(5, 83, 3), e(6, 83, 7), e(3, 84, 3), e(4, 84, 3), e(5, 84, 3), e(6, 84, 7)],
    [e(3, 85, 3), e(4, 85, 3), e(5, 85, 3), e(6, 85, 7), e(3, 86, 3), e(4, 86, 3), e(5, 86, 3), e(6, 86, 7), e(3, 87, 3), e(4, 87, 3), e(5, 87, 3), e(6, 87, 7), e(3, 89, 3), e(4, 89, 3), e(5, 89, 3), e(6, 89, 7)],
    [e(3, 106, 3), e(4, 106, 3), e(5, 106, 3), e(6, 106, 7), e(3, 107, 3), e(4, 107, 3), e(5, 107, 3), e(6, 107, 7), e(3, 113, 3), e(4, 113, 3), e(5, 113, 3), e(6, 113, 7), e(3, 118, 3), e(4, 118, 3), e(5, 118, 3), e(6, 118, 7)],
    [e(3, 119, 3), e(4, 119, 3), e(5, 119, 3), e(6, 119, 7), e(3, 120, 3), e(4, 120, 3), e(5, 120, 3), e(6, 120, 7), e(3, 121, 3), e(4, 121, 3), e(5, 121, 3), e(6, 121, 7), e(3, 122, 3), e(4, 122, 3), e(5, 122, 3), e(6, 122, 7)],
    [e(1, 38, 3), e(2, 38, 7), e(1, 42, 3), e(2, 42, 7), e(1, 44, 3), e(2, 44, 7), e(1, 59, 3), e(2, 59, 7), e(1, 88, 3), e(2, 88, 7), e(1, 90, 3), e(2, 90, 7), e(77, 0, 2), e(78, 0, 2), e(79, 0, 2), e(80, 0, 2)],
    [e(7, 58, 3), e(8, 58, 3), e(9, 58, 3), e(10, 58, 3), e(11, 58, 3), e(12, 58, 3), e(13, 58, 3), e(14, 58, 7), e(7, 66, 3), e(8, 66, 3), e(9, 66, 3), e(10, 66, 3), e(11, 66, 3), e(12, 66, 3), e(13, 66, 3), e(14, 66, 7)],
    [e(7, 67, 3), e(8, 67, 3), e(9, 67, 3), e(10, 67, 3), e(11, 67, 3), e(12, 67, 3), e(13, 67, 3), e(14, 67, 7), e(7, 68, 3), e(8, 68, 3), e(9, 68, 3), e(10, 68, 3), e(11, 68, 3), e(12, 68, 3), e(13, 68, 3), e(14, 68, 7)],
    [e(7, 69, 3), e(8, 69, 3), e(9, 69, 3), e(10, 69, 3), e(11, 69, 3), e(12, 69, 3), e(13, 69, 3), e(14, 69, 7), e(7, 70, 3), e(8, 70, 3), e(9, 70, 3), e(10, 70, 3), e(11, 70, 3), e(12, 70, 3), e(13, 70, 3), e(14, 70, 7)],
    [e(7, 71, 3), e(8, 71, 3), e(9, 71, 3), e(10, 71, 3), e(11, 71, 3), e(12, 71, 3), e(13, 71, 3), e(14, 71, 7), e(7, 72, 3), e(8, 72, 3), e(9, 72, 3), e(10, 72, 3), e(11, 72, 3), e(12, 72, 3), e(13, 72, 3), e(14, 72, 7)],
    [e(7, 73, 3), e(8, 73, 3), e(9, 73, 3), e(10, 73, 3), e(11, 73, 3), e(12, 73, 3), e(13, 73, 3), e(14, 73, 7), e(7, 74, 3), e(8, 74, 3), e(9, 74, 3), e(10, 74, 3), e(11, 74, 3), e(12, 74, 3), e(13, 74, 3), e(14, 74, 7)],
    [e(7, 75, 3), e(8, 75, 3), e(9, 75, 3), e(10, 75, 3), e(11, 75, 3), e(12, 75, 3), e(13, 75, 3), e(14, 75, 7), e(7, 76, 3), e(8, 76, 3), e(9, 76, 3), e(10, 76, 3), e(11, 76, 3), e(12, 76, 3), e(13, 76, 3), e(14, 76, 7)],
    [e(7, 77, 3), e(8, 77, 3), e(9, 77, 3), e(10, 77, 3), e(11, 77, 3), e(12, 77, 3), e(13, 77, 3), e(14, 77, 7), e(7, 78, 3), e(8, 78, 3), e(9, 78, 3), e(10, 78, 3), e(11, 78, 3), e(12, 78, 3), e(13, 78, 3), e(14, 78, 7)],
    [e(7, 79, 3), e(8, 79, 3), e(9, 79, 3), e(10, 79, 3), e(11, 79, 3), e(12, 79, 3), e(13, 79, 3), e(14, 79, 7), e(7, 80, 3), e(8, 80, 3), e(9, 80, 3), e(10, 80, 3), e(11, 80, 3), e(12, 80, 3), e(13, 80, 3), e(14, 80, 7)],
    [e(7, 81, 3), e(8, 81, 3), e(9, 81, 3), e(10, 81, 3), e(11, 81, 3), e(12, 81, 3), e(13, 81, 3), e(14, 81, 7), e(7, 82, 3), e(8, 82, 3), e(9, 82, 3), e(10, 82, 3), e(11, 82, 3), e(12, 82, 3), e(13, 82, 3), e(14, 82, 7)],
    [e(7, 83, 3), e(8, 83, 3), e(9, 83, 3), e(10, 83, 3), e(11, 83, 3), e(12, 83, 3), e(13, 83, 3), e(14, 83, 7), e(7, 84, 3), e(8, 84, 3), e(9, 84, 3), e(10, 84, 3), e(11, 84, 3), e(12, 84, 3), e(13, 84, 3), e(14, 84, 7)],
    [e(7, 85, 3), e(8, 85, 3), e(9, 85, 3), e(10, 85, 3), e(11, 85, 3), e(12, 85, 3), e(13, 85, 3), e(14, 85, 7), e(7, 86, 3), e(8, 86, 3), e(9, 86, 3), e(10, 86, 3), e(11, 86, 3), e(12, 86, 3), e(13, 86, 3), e(14, 86, 7)],
    [e(7, 87, 3), e(8, 87, 3), e(9, 87, 3), e(10, 87, 3), e(11, 87, 3), e(12, 87, 3), e(13, 87, 3), e(14, 87, 7), e(7, 89, 3), e(8, 89, 3), e(9, 89, 3), e(10, 89, 3), e(11, 89, 3), e(12, 89, 3), e(13, 89, 3), e(14, 89, 7)],
    [e(7, 106, 3), e(8, 106, 3), e(9, 106, 3), e(10, 106, 3), e(11, 106, 3), e(12, 106, 3), e(13, 106, 3), e(14, 106, 7), e(7, 107, 3), e(8, 107, 3), e(9, 107, 3), e(10, 107, 3), e(11, 107, 3), e(12, 107, 3), e(13, 107, 3), e(14, 107, 7)],
    [e(7, 113, 3), e(8, 113, 3), e(9, 113, 3), e(10, 113, 3), e(11, 113, 3), e(12, 113, 3), e(13, 113, 3), e(14, 113, 7), e(7, 118, 3), e(8, 118, 3), e(9, 118, 3), e(10, 118, 3), e(11, 118, 3), e(12, 118, 3), e(13, 118, 3), e(14, 118, 7)],
    [e(7, 119, 3), e(8, 119, 3), e(9, 119, 3), e(10, 119, 3), e(11, 119, 3), e(12, 119, 3), e(13, 119, 3), e(14, 119, 7), e(7, 120, 3), e(8, 120, 3), e(9, 120, 3), e(10, 120, 3), e(11, 120, 3), e(12, 120, 3), e(13, 120, 3), e(14, 120, 7)],
    [e(7, 121, 3), e(8, 121, 3), e(9, 121, 3), e(10, 121, 3), e(11, 121, 3), e(12, 121, 3), e(13, 121, 3), e(14, 121, 7), e(7, 122, 3), e(8, 122, 3), e(9, 122, 3), e(10, 122, 3), e(11, 122, 3), e(12, 122, 3), e(13, 122, 3), e(14, 122, 7)],
    [e(3, 38, 3), e(4, 38, 3), e(5, 38, 3), e(6, 38, 7), e(3, 42, 3), e(4, 42, 3), e(5, 42, 3), e(6, 42, 7), e(3, 44, 3), e(4, 44, 3), e(5, 44, 3), e(6, 44, 7), e(3, 59, 3), e(4, 59, 3), e(5, 59, 3), e(6, 59, 7)],
    [e(3, 88, 3), e(4, 88, 3), e(5, 88, 3), e(6, 88, 7), e(3, 90, 3), e(4, 90, 3), e(5, 90, 3), e(6, 90, 7), e(0, 33, 7), e(0, 34, 7), e(0, 40, 7), e(0, 41, 7), e(0, 63, 7), e(81, 0, 2), e(82, 0, 2), e(83, 0, 2)],
    [e(7, 38, 3), e(8, 38, 3), e(9, 38, 3), e(10, 38, 3), e(11, 38, 3), e(12, 38, 3), e(13, 38, 3), e(14, 38, 7), e(7, 42, 3), e(8, 42, 3), e(9, 42, 3), e(10, 42, 3), e(11, 42, 3), e(12, 42, 3), e(13, 42, 3), e(14, 42, 7)],
    [e(7, 44, 3), e(8, 44, 3), e(9, 44, 3), e(10, 44, 3), e(11, 44, 3), e(12, 44, 3), e(13, 44, 3), e(14, 44, 7), e(7, 59, 3), e(8, 59, 3), e(9, 59, 3), e(10, 59, 3), e(11, 59, 3), e(12, 59, 3), e(13, 59, 3), e(14, 59, 7)],
    [e(7, 88, 3), e(8, 88, 3), e(9, 88, 3), e(10, 88, 3), e(11, 88, 3), e(12, 88, 3), e(13, 88, 3), e(14, 88, 7), e(7, 90, 3), e(8, 90, 3), e(9, 90, 3), e(10, 90, 3), e(11, 90, 3), e(12, 90, 3), e(13, 90, 3), e(14, 90, 7)],
    [e(1, 33, 3), e(2, 33, 7), e(1, 34, 3), e(2, 34, 7), e(1, 40, 3), e(2, 40, 7), e(1, 41, 3), e(2, 41, 7), e(1, 63, 3), e(2, 63, 7), e(0, 39, 7), e(0, 43, 7), e(0, 124, 7), e(84, 0, 2), e(85, 0, 2), e(86, 0, 2)],
    [e(3, 33, 3), e(4, 33, 3), e(5, 33, 3), e(6, 33, 7), e(3, 34, 3), e(4, 34, 3), e(5, 34, 3), e(6, 34, 7), e(3, 40, 3), e(4, 40, 3), e(5, 40, 3), e(6, 40, 7), e(3, 41, 3), e(4, 41, 3), e(5, 41, 3), e(6, 41, 7)],
    [e(3, 63, 3), e(4, 63, 3), e(5, 63, 3), e(6, 63, 7), e(1, 39, 3), e(2, 39, 7), e(1, 43, 3), e(2, 43, 7), e(1, 124, 3), e(2, 124, 7), e(0, 35, 7), e(0, 62, 7), e(87, 0, 2), e(88, 0, 2), e(89, 0, 2), e(90, 0, 2)],
    [e(7, 33, 3), e(8, 33, 3), e(9, 33, 3), e(10, 33, 3), e(11, 33, 3), e(12, 33, 3), e(13, 33, 3), e(14, 33, 7), e(7, 34, 3), e(8, 34, 3), e(9, 34, 3), e(10, 34, 3), e(11, 34, 3), e(12, 34, 3), e(13, 34, 3), e(14, 34, 7)],
    [e(7, 40, 3), e(8, 40, 3), e(9, 40, 3), e(10, 40, 3), e(11, 40, 3), e(12, 40, 3), e(13, 40, 3), e(14, 40, 7), e(7, 41, 3), e(8, 41, 3), e(9, 41, 3), e(10, 41, 3), e(11, 41, 3), e(12, 41, 3), e(13, 41, 3), e(14, 41, 7)],
    [e(7, 63, 3), e(8, 63, 3), e(9, 63, 3), e(10, 63, 3), e(11, 63, 3), e(12, 63, 3), e(13, 63, 3), e(14, 63, 7), e(3, 39, 3), e(4, 39, 3), e(5, 39, 3), e(6, 39, 7), e(3, 43, 3), e(4, 43, 3), e(5, 43, 3), e(6, 43, 7)],
    [e(3, 124, 3), e(4, 124, 3), e(5, 124, 3), e(6, 124, 7), e(1, 35, 3), e(2, 35, 7), e(1, 62, 3), e(2, 62, 7), e(0, 0, 7), e(0, 36, 7), e(0, 64, 7), e(0, 91, 7), e(0, 93, 7), e(0, 126, 7), e(91, 0, 2), e(92, 0, 2)],
    [e(7, 39, 3), e(8, 39, 3), e(9, 39, 3), e(10, 39, 3), e(11, 39, 3), e(12, 39, 3), e(13, 39, 3), e(14, 39, 7), e(7, 43, 3), e(8, 43, 3), e(9, 43, 3), e(10, 43, 3), e(11, 43, 3), e(12, 43, 3), e(13, 43, 3), e(14, 43, 7)],
    [e(7, 124, 3), e(8, 124, 3), e(9, 124, 3), e(10, 124, 3), e(11, 124, 3), e(12, 124, 3), e(13, 124, 3), e(14, 124, 7), e(3, 35, 3), e(4, 35, 3), e(5, 35, 3), e(6, 35, 7), e(3, 62, 3), e(4, 62, 3), e(5, 62, 3), e(6, 62, 7)],
    [e(1, 0, 3), e(2, 0, 7), e(1, 36, 3), e(2, 36, 7), e(1, 64, 3), e(2, 64, 7), e(1, 91, 3), e(2, 91, 7), e(1, 93, 3), e(2, 93, 7), e(1, 126, 3), e(2, 126, 7), e(0, 94, 7), e(0, 125, 7), e(93, 0, 2), e(94, 0, 2)],
    [e(7, 35, 3), e(8, 35, 3), e(9, 35, 3), e(10, 35, 3), e(11, 35, 3), e(12, 35, 3), e(13, 35, 3), e(14, 35, 7), e(7, 62, 3), e(8, 62, 3), e(9, 62, 3), e(10, 62, 3), e(11, 62, 3), e(12, 62, 3), e(13, 62, 3), e(14, 62, 7)],
    [e(3, 0, 3), e(4, 0, 3), e(5, 0, 3), e(6, 0, 7), e(3, 36, 3), e(4, 36, 3), e(5, 36, 3), e(6, 36, 7), e(3, 64, 3), e(4, 64, 3), e(5, 64, 3), e(6, 64, 7), e(3, 91, 3), e(4, 91, 3), e(5, 91, 3), e(6, 91, 7)],
    [e(3, 93, 3), e(4, 93, 3), e(5, 93, 3), e(6, 93, 7), e(3, 126, 3), e(4, 126, 3), e(5, 126, 3), e(6, 126, 7), e(1, 94, 3), e(2, 94, 7), e(1, 125, 3), e(2, 125, 7), e(0, 60, 7), e(0, 96, 7), e(0, 123, 7), e(95, 0, 2)],
    [e(7, 0, 3), e(8, 0, 3), e(9, 0, 3), e(10, 0, 3), e(11, 0, 3), e(12, 0, 3), e(13, 0, 3), e(14, 0, 7), e(7, 36, 3), e(8, 36, 3), e(9, 36, 3), e(10, 36, 3), e(11, 36, 3), e(12, 36, 3), e(13, 36, 3), e(14, 36, 7)],
    [e(7, 64, 3), e(8, 64, 3), e(9, 64, 3), e(10, 64, 3), e(11, 64, 3), e(12, 64, 3), e(13, 64, 3), e(14, 64, 7), e(7, 91, 3), e(8, 91, 3), e(9, 91, 3), e(10, 91, 3), e(11, 91, 3), e(12, 91, 3), e(13, 91, 3), e(14, 91, 7)],
    [e(7, 93, 3), e(8, 93, 3), e(9, 93, 3), e(10, 93, 3), e(11, 93, 3), e(12, 93, 3), e(13, 93, 3), e(14, 93, 7), e(7, 126, 3), e(8, 126, 3), e(9, 126, 3), e(10, 126, 3), e(11, 126, 3), e(12, 126, 3), e(13, 126, 3), e(14, 126, 7)],
    [e(3, 94, 3), e(4, 94, 3), e(5, 94, 3), e(6, 94, 7), e(3, 125, 3), e(4, 125, 3), e(5, 125, 3), e(6, 125, 7), e(1, 60, 3), e(2, 60, 7), e(1, 96, 3), e(2, 96, 7), e(1, 123, 3), e(2, 123, 7), e(96, 0, 2), e(97, 0, 2)],
    [e(7, 94, 3), e(8, 94, 3), e(9, 94, 3), e(10, 94, 3), e(11, 94, 3), e(12, 94, 3), e(13, 94, 3), e(14, 94, 7), e(7, 125, 3), e(8, 125, 3), e(9, 125, 3), e(10, 125, 3), e(11, 125, 3), e(12, 125, 3), e(13, 125, 3), e(14, 125, 7)],
    [e(3, 60, 3), e(4, 60, 3), e(5, 60, 3), e(6, 60, 7), e(3, 96, 3), e(4, 96, 3), e(5, 96, 3), e(6, 96, 7), e(3, 123, 3), e(4, 123, 3), e(5, 123, 3), e(6, 123, 7), e(98, 0, 2), e(99, 0, 2), e(100, 0, 2), e(101, 0, 2)],
    [e(7, 60, 3), e(8, 60, 3), e(9, 60, 3), e(10, 60, 3), e(11, 60, 3), e(12, 60, 3), e(13, 60, 3), e(14, 60, 7), e(7, 96, 3), e(8, 96, 3), e(9, 96, 3), e(10, 96, 3), e(11, 96, 3), e(12, 96, 3), e(13, 96, 3), e(14, 96, 7)],
    [e(7, 123, 3), e(8, 123, 3), e(9, 123, 3), e(10, 123, 3), e(11, 123, 3), e(12, 123, 3), e(13, 123, 3), e(14, 123, 7), e(102, 0, 2), e(103, 0, 2), e(104, 0, 2), e(105, 0, 2), e(106, 0, 2), e(107, 0, 2), e(108, 0, 2), e(109, 0, 2)],
    [e(0, 92, 7), e(0, 195, 7), e(0, 208, 7), e(110, 0, 2), e(111, 0, 2), e(112, 0, 2), e(113, 0, 2), e(114, 0, 2), e(115, 0, 2), e(116, 0, 2), e(117, 0, 2), e(118, 0, 2), e(119, 0, 2), e(120, 0, 2), e(121, 0, 2), e(122, 0, 2)],
    [e(1, 92, 3), e(2, 92, 7), e(1, 195, 3), e(2, 195, 7), e(1, 208, 3), e(2, 208, 7), e(0, 128, 7), e(0, 130, 7), e(0, 131, 7), e(0, 162, 7), e(0, 184, 7), e(0, 194, 7), e(0, 224, 7), e(0, 226, 7), e(123, 0, 2), e(124, 0, 2)],
    [e(125, 0, 2), e(126, 0, 2), e(127, 0, 2), e(128, 0, 2), e(129, 0, 2), e(130, 0, 2), e(131, 0, 2), e(132, 0, 2), e(133, 0, 2), e(134, 0, 2), e(135, 0, 2), e(136, 0, 2), e(137, 0, 2), e(138, 0, 2), e(139, 0, 2), e(140, 0, 2)],
    [e(3, 92, 3), e(4, 92, 3), e(5, 92, 3), e(6, 92, 7), e(3, 195, 3), e(4, 195, 3), e(5, 195, 3), e(6, 195, 7), e(3, 208, 3), e(4, 208, 3), e(5, 208, 3), e(6, 208, 7), e(1, 128, 3), e(2, 128, 7), e(1, 130, 3), e(2, 130, 7)],
    [e(1, 131, 3), e(2, 131, 7), e(1, 162, 3), e(2, 162, 7), e(1, 184, 3), e(2, 184, 7), e(1, 194, 3), e(2, 194, 7), e(1, 224, 3), e(2, 224, 7), e(1, 226, 3), e(2, 226, 7), e(0, 153, 7), e(0, 161, 7), e(0, 167, 7), e(0, 172, 7)],
    [e(0, 176, 7), e(0, 177, 7), e(0, 179, 7), e(0, 209, 7), e(0, 216, 7), e(0, 217, 7), e(0, 227, 7), e(0, 229, 7), e(0, 230, 7), e(141, 0, 2), e(142, 0, 2), e(143, 0, 2), e(144, 0, 2), e(145, 0, 2), e(146, 0, 2), e(147, 0, 2)],
    [e(148, 0, 2), e(149, 0, 2), e(150, 0, 2), e(151, 0, 2), e(152, 0, 2), e(153, 0, 2), e(154, 0, 2), e(155, 0, 2), e(156, 0, 2), e(157, 0, 2), e(158, 0, 2), e(159, 0, 2), e(160, 0, 2), e(161, 0, 2), e(162, 0, 2), e(163, 0, 2)],
    [e(7, 92, 3), e(8, 92, 3), e(9, 92, 3), e(10, 92, 3), e(11, 92, 3), e(12, 92, 3), e(13, 92, 3), e(14, 92, 7), e(7, 195, 3), e(8, 195, 3), e(9, 195, 3), e(10, 195, 3), e(11, 195, 3), e(12, 195, 3), e(13, 195, 3), e(14, 195, 7)],
    [e(7, 208, 3), e(8, 208, 3), e(9, 208, 3), e(10, 208, 3), e(11, 208, 3), e(12, 208, 3), e(13, 208, 3), e(14, 208, 7), e(3, 128, 3), e(4, 128, 3), e(5, 128, 3), e(6, 128, 7), e(3, 130, 3), e(4, 130, 3), e(5, 130, 3), e(6, 130, 7)],
    [e(3, 131, 3), e(4, 131, 3), e(5, 131, 3), e(6, 131, 7), e(3, 162, 3), e(4, 162, 3), e(5, 162, 3), e(6, 162, 7), e(3, 184, 3), e(4, 184, 3), e(5, 184, 3), e(6, 184, 7), e(3, 194, 3), e(4, 194, 3), e(5, 194, 3), e(6, 194, 7)],
    [e(3, 224, 3), e(4, 224, 3), e(5, 224, 3), e(6, 224, 7), e(3, 226, 3), e(4, 226, 3), e(5, 226, 3), e(6, 226, 7), e(1, 153, 3), e(2, 153, 7), e(1, 161, 3), e(2, 161, 7), e(1, 167, 3), e(2, 167, 7), e(1, 172, 3), e(2, 172, 7)],
    [e(1, 176, 3), e(2, 176, 7), e(1, 177, 3), e(2, 177, 7), e(1, 179, 3), e(2, 179, 7), e(1, 209, 3), e(2, 209, 7), e(1, 216, 3), e(2, 216, 7), e(1, 217, 3), e(2, 217, 7), e(1, 227, 3), e(2, 227, 7), e(1, 229, 3), e(2, 229, 7)],
    [e(1, 230, 3), e(2, 230, 7), e(0, 129, 7), e(0, 132, 7), e(0, 133, 7), e(0, 134, 7), e(0, 136, 7), e(0, 146, 7), e(0, 154, 7), e(0, 156, 7), e(0, 160, 7), e(0, 163, 7), e(0, 164, 7), e(0, 169, 7), e(0, 170, 7), e(0, 173, 7)],
    [e(0, 178, 7), e(0, 181, 7), e(0, 185, 7), e(0, 186, 7), e(0, 187, 7), e(0, 189, 7), e(0, 190, 7), e(0, 196, 7), e(0, 198, 7), e(0, 228, 7), e(0, 232, 7), e(0, 233, 7), e(164, 0, 2), e(165, 0, 2), e(166, 0, 2), e(167, 0, 2)],
    [e(168, 0, 2), e(169, 0, 2), e(170, 0, 2), e(171, 0, 2), e(172, 0, 2), e(173, 0, 2), e(174, 0, 2), e(175, 0, 2), e(176, 0, 2), e(177, 0, 2), e(178, 0, 2), e(179, 0, 2), e(180, 0, 2), e(181, 0, 2), e(182, 0, 2), e(183, 0, 2)],
    [e(7, 128, 3), e(8, 128, 3), e(9, 128, 3), e(10, 128, 3), e(11, 128, 3), e(12, 128, 3), e(13, 128, 3), e(14, 128, 7), e(7, 130, 3), e(8, 130, 3), e(9, 130, 3), e(10, 130, 3), e(11, 130, 3), e(12, 130, 3), e(13, 130, 3), e(14, 130, 7)],
    [e(7, 131, 3), e(8, 131, 3), e(9, 131, 3), e(10, 131, 3), e(11, 131, 3), e(12, 131, 3), e(13, 131, 3), e(14, 131, 7), e(7, 162, 3), e(8, 162, 3), e(9, 162, 3), e(10, 162, 3), e(11, 162, 3), e(12, 162, 3), e(13, 162, 3), e(14, 162, 7)],
    [e(7, 184, 3), e(8, 184, 3), e(9, 184, 3), e(10, 184, 3), e(11, 184, 3), e(12, 184, 3), e(13, 184, 3), e(14, 184, 7), e(7, 194, 3), e(8, 194, 3), e(9, 194, 3), e(10, 194, 3), e(11, 194, 3), e(12, 194, 3), e(13, 194, 3), e(14, 194, 7)],
    [e(7, 224, 3), e(8, 224, 3), e(9, 224, 3), e(10, 224, 3), e(11, 224, 3), e(12, 224, 3), e(13, 224, 3), e(14, 224, 7), e(7, 226, 3), e(8, 226, 3), e(9, 226, 3), e(10, 226, 3), e(11, 226, 3), e(12, 226, 3), e(13, 226, 3), e(14, 226, 7)],
    [e(3, 153, 3), e(4, 153, 3), e(5, 153, 3), e(6, 153, 7), e(3, 161, 3), e(4, 161, 3), e(5, 161, 3), e(6, 161, 7), e(3, 167, 3), e(4, 167, 3), e(5, 167, 3), e(6, 167, 7), e(3, 172, 3), e(4, 172, 3), e(5, 172, 3), e(6, 172, 7)],
    [e(3, 176, 3), e(4, 176, 3), e(5, 176, 3), e(6, 176, 7), e(3, 177, 3), e(4, 177, 3), e(5, 177, 3), e(6, 177, 7), e(3, 179, 3), e(4, 179, 3), e(5, 179, 3), e(6, 179, 7), e(3, 209, 3), e(4, 209, 3), e(5, 209, 3), e(6, 209, 7)],
    [e(3, 216, 3), e(4, 216, 3), e(5, 216, 3), e(6, 216, 7), e(3, 217, 3), e(4, 217, 3), e(5, 217, 3), e(6, 217, 7), e(3, 227, 3), e(4, 227, 3), e(5, 227, 3), e(6, 227, 7), e(3, 229, 3), e(4, 229, 3), e(5, 229, 3), e(6, 229, 7)],
    [e(3, 230, 3), e(4, 230, 3), e(5, 230, 3), e(6, 230, 7), e(1, 129, 3), e(2, 129, 7), e(1, 132, 3), e(2, 132, 7), e(1, 133, 3), e(2, 133, 7), e(1, 134, 3), e(2, 134, 7), e(1, 136, 3), e(2, 136, 7), e(1, 146, 3), e(2, 146, 7)],
    [e(1, 154, 3), e(2, 154, 7), e(1, 156, 3), e(2, 156, 7), e(1, 160, 3), e(2, 160, 7), e(1, 163, 3), e(2, 163, 7), e(1, 164, 3), e(2, 164, 7), e(1, 169, 3), e(2, 169, 7), e(1, 170, 3), e(2, 170, 7), e(1, 173, 3), e(2, 173, 7)],
    [e(1, 178, 3), e(2, 178, 7), e(1, 181, 3), e(2, 181, 7), e(1, 185, 3), e(2, 185, 7), e(1, 186, 3), e(2, 186, 7), e(1, 187, 3), e(2, 187, 7), e(1, 189, 3), e(2, 189, 7), e(1, 190, 3), e(2, 190, 7), e(1, 196, 3), e(2, 196, 7)],
    [e(1, 198, 3), e(2, 198, 7), e(1, 228, 3), e(2, 228, 7), e(1, 232, 3), e(2, 232, 7), e(1, 233, 3), e(2, 233, 7), e(0, 1, 7), e(0, 135, 7), e(0, 137, 7), e(0, 138, 7), e(0, 139, 7), e(0, 140, 7), e(0, 141, 7), e(0, 143, 7)],
    [e(0, 147, 7), e(0, 149, 7), e(0, 150, 7), e(0, 151, 7), e(0, 152, 7), e(0, 155, 7), e(0, 157, 7), e(0, 158, 7), e(0, 165, 7), e(0, 166, 7), e(0, 168, 7), e(0, 174, 7), e(0, 175, 7), e(0, 180, 7), e(0, 182, 7), e(0, 183, 7)],
    [e(0, 188, 7), e(0, 191, 7), e(0, 197, 7), e(0, 231, 7), e(0, 239, 7), e(184, 0, 2), e(185, 0, 2), e(186, 0, 2), e(187, 0, 2), e(188, 0, 2), e(189, 0, 2), e(190, 0, 2), e(191, 0, 2), e(192, 0, 2), e(193, 0, 2), e(194, 0, 2)],
    [e(7, 153, 3), e(8, 153, 3), e(9, 153, 3), e(10, 153, 3), e(11, 153, 3), e(12, 153, 3), e(13, 153, 3), e(14, 153, 7), e(7, 161, 3), e(8, 161, 3), e(9, 161, 3), e(10, 161, 3), e(11, 161, 3), e(12, 161, 3), e(13, 161, 3), e(14, 161, 7)],
    [e(7, 167, 3), e(8, 167, 3), e(9, 167, 3), e(10, 167, 3), e(11, 167, 3), e(12, 167, 3), e(13, 167, 3), e(14, 167, 7), e(7, 172, 3), e(8, 172, 3), e(9, 172, 3), e(10, 172, 3), e(11, 172, 3), e(12, 172, 3), e(13, 172, 3), e(14, 172, 7)],
    [e(7, 176, 3), e(8, 176, 3), e(9, 176, 3), e(10, 176, 3), e(11, 176, 3), e(12, 176, 3), e(13, 176, 3), e(14, 176, 7), e(7, 177, 3), e(8, 177, 3), e(9, 177, 3), e(10, 177, 3), e(11, 177, 3), e(12, 177, 3), e(13, 177, 3), e(14, 177, 7)],
    [e(7, 179, 3), e(8, 179, 3), e(9, 179, 3), e(10, 179, 3), e(11, 179, 3), e(12, 179, 3), e(13, 179, 3), e(14, 179, 7), e(7, 209, 3), e(8, 209, 3), e(9, 209, 3), e(10, 209, 3), e(11, 209, 3), e(12, 209, 3), e(13, 209, 3), e(14, 209, 7)],
    [e(7, 216, 3), e(8, 216, 3), e(9, 216, 3), e(10, 216, 3), e(11, 216, 3), e(12, 216, 3), e(13, 216, 3), e(14, 216, 7), e(7, 217, 3), e(8, 217, 3), e(9, 217, 3), e(10, 217, 3), e(11, 217, 3), e(12, 217, 3), e(13, 217, 3), e(14, 217, 7)],
    [e(7, 227, 3), e(8, 227, 3), e(9, 227, 3), e(10, 227, 3), e(11, 227, 3), e(12, 227, 3), e(13, 227, 3), e(14, 227, 7), e(7, 229, 3), e(8, 229, 3), e(9, 229, 3), e(10, 229, 3), e(11, 229, 3), e(12, 229, 3), e(13, 229, 3), e(14, 229, 7)],
    [e(7, 230, 3), e(8, 230, 3), e(9, 230, 3), e(10, 230, 3), e(11, 230, 3), e(12, 230, 3), e(13, 230, 3), e(14, 230, 7), e(3, 129, 3), e(4, 129, 3), e(5, 129, 3), e(6, 129, 7), e(3, 132, 3), e(4, 132, 3), e(5, 132, 3), e(6, 132, 7)],
    [e(3, 133, 3), e(4, 133, 3), e(5, 133, 3), e(6, 133, 7), e(3, 134, 3), e(4, 134, 3), e(5, 134, 3), e(6, 134, 7), e(3, 136, 3), e(4, 136, 3), e(5, 136, 3), e(6, 136, 7), e(3, 146, 3), e(4, 146, 3), e(5, 146, 3), e(6, 146, 7)],
    [e(3, 154, 3), e(4, 154, 3), e(5, 154, 3), e(6, 154, 7), e(3, 156, 3), e(4, 156, 3), e(5, 156, 3), e(6, 156, 7), e(3, 160, 3), e(4, 160, 3), e(5, 160, 3), e(6, 160, 7), e(3, 163, 3), e(4, 163, 3), e(5, 163, 3), e(6, 163, 7)],
    [e(3, 164, 3), e(4, 164, 3), e(5, 164, 3), e(6, 164, 7), e(3, 169, 3), e(4, 169, 3), e(5, 169, 3), e(6, 169, 7), e(3, 170, 3), e(4, 170, 3), e(5, 170, 3), e(6, 170, 7), e(3, 173, 3), e(4, 173, 3), e(5, 173, 3), e(6, 173, 7)],
    [e(3, 178, 3), e(4, 178, 3), e(5, 178, 3), e(6, 178, 7), e(3, 181, 3), e(4, 181, 3), e(5, 181, 3), e(6, 181, 7), e(3, 185, 3), e(4, 185, 3), e(5, 185, 3), e(6, 185, 7), e(3, 186, 3), e(4, 186, 3), e(5, 186, 3), e(6, 186, 7)],
    [e(3, 187, 3), e(4, 187, 3), e(5, 187, 3), e(6, 187, 7), e(3, 189, 3), e(4, 189, 3), e(5, 189, 3), e(6, 189, 7), e(3, 190, 3), e(4, 190, 3), e(5, 190, 3), e(6, 190, 7), e(3, 196, 3), e(4, 196, 3), e(5, 196, 3), e(6, 196, 7)],
    [e(3, 198, 3), e(4, 198, 3), e(5, 198, 3), e(6, 198, 7), e(3, 228, 3), e(4, 228, 3), e(5, 228, 3), e(6, 228, 7), e(3, 232, 3), e(4, 232, 3), e(5, 232, 3), e(6, 232, 7), e(3, 233, 3), e(4, 233, 3), e(5, 233, 3), e(6, 233, 7)],
    [e(1, 1, 3), e(2, 1, 7), e(1, 135, 3), e(2, 135, 7), e(1, 137, 3), e(2, 137, 7), e(1, 138, 3), e(2, 138, 7), e(1, 139, 3), e(2, 139, 7), e(1, 140, 3), e(2, 140, 7), e(1, 141, 3), e(2, 141, 7), e(1, 143, 3), e(2, 143, 7)],
    [e(1, 147, 3), e(2, 147, 7), e(1, 149, 3), e(2, 149, 7), e(1, 150, 3), e(2, 150, 7), e(1, 151, 3), e(2, 151, 7), e(1, 152, 3), e(2, 152, 7), e(1, 155, 3), e(2, 155, 7), e(1, 157, 3), e(2, 157, 7), e(1, 158, 3), e(2, 158, 7)],
    [e(1, 165, 3), e(2, 165, 7), e(1, 166, 3), e(2, 166, 7), e(1, 168, 3), e(2, 168, 7), e(1, 174, 3), e(2, 174, 7), e(1, 175, 3), e(2, 175, 7), e(1, 180, 3), e(2, 180, 7), e(1, 182, 3), e(2, 182, 7), e(1, 183, 3), e(2, 183, 7)],
    [e(1, 188, 3), e(2, 188, 7), e(1, 191, 3), e(2, 191, 7), e(1, 197, 3), e(2, 197, 7), e(1, 231, 3), e(2, 231, 7), e(1, 239, 3), e(2, 239, 7), e(0, 9, 7), e(0, 142, 7), e(0, 144, 7), e(0, 145, 7), e(0, 148, 7), e(0, 159, 7)],
    [e(0, 171, 7), e(0, 206, 7), e(0, 215, 7), e(0, 225, 7), e(0, 236, 7), e(0, 237, 7), e(195, 0, 2), e(196, 0, 2), e(197, 0, 2), e(198, 0, 2), e(199, 0, 2), e(200, 0, 2), e(201, 0, 2), e(202, 0, 2), e(203, 0, 2), e(204, 0, 2)],
    [e(7, 129, 3), e(8, 129, 3), e(9, 129, 3), e(10, 129, 3), e(11, 129, 3), e(12, 129, 3), e(13, 129, 3), e(14, 129, 7), e(7, 132, 3), e(8, 132, 3), e(9, 132, 3), e(10, 132, 3), e(11, 132, 3), e(12, 132, 3), e(13, 132, 3), e(14, 132, 7)],
    [e(7, 133, 3), e(8, 133, 3), e(9, 133, 3), e(10, 133, 3), e(11, 133, 3), e(12, 133, 3), e(13, 133, 3), e(14, 133, 7), e(7, 134, 3), e(8, 134, 3), e(9, 134, 3), e(10, 134, 3), e(11, 134, 3), e(12, 134, 3), e(13, 134, 3), e(14, 134, 7)],
    [e(7, 136, 3), e(8, 136, 3), e(9, 136, 3), e(10, 136, 3), e(11, 136, 3), e(12, 136, 3), e(13, 136, 3), e(14, 136, 7), e(7, 146, 3), e(8, 146, 3), e(9, 146, 3), e(10, 146, 3), e(11, 146, 3), e(12, 146, 3), e(13, 146, 3), e(14, 146, 7)],
    [e(7, 154, 3), e(8, 154, 3), e(9, 154, 3), e(10, 154, 3), e(11, 154, 3), e(12, 154, 3), e(13, 154, 3), e(14, 154, 7), e(7, 156, 3), e(8, 156, 3), e(9, 156, 3), e(10, 156, 3), e(11, 156, 3), e(12, 156, 3), e(13, 156, 3), e(14, 156, 7)],
    [e(7, 160, 3), e(8, 160, 3), e(9, 160, 3), e(10, 160, 3), e(11, 160, 3), e(12, 160, 3), e(13, 160, 3), e(14, 160, 7), e(7, 163, 3), e(8, 163, 3), e(9, 163, 3), e(10, 163, 3), e(11, 163, 3), e(12, 163, 3), e(13, 163, 3), e(14, 163, 7)],
    [e(7, 164, 3), e(8, 164, 3), e(9, 164, 3), e(10, 164, 3), e(11, 164, 3), e(12, 164, 3), e(13, 164, 3), e(14, 164, 7), e(7, 169, 3), e(8, 169, 3), e(9, 169, 3), e(10, 169, 3), e(11, 169, 3), e(12, 169, 3), e(13, 169, 3), e(14, 169, 7)],
    [e(7, 170, 3), e(8, 170, 3), e(9, 170, 3), e(10, 170, 3), e(11, 170, 3), e(12, 170, 3), e(13, 170, 3), e(14, 170, 7), e(7, 173, 3), e(8, 173, 3), e(9, 173, 3), e(10, 173, 3), e(11, 173, 3), e(12, 173, 3), e(13, 173, 3), e(14, 173, 7)],
    [e(7, 178, 3), e(8, 178, 3), e(9, 178, 3), e(10, 178, 3), e(11, 178, 3), e(12, 178, 3), e(13, 178, 3), e(14, 178, 7), e(7, 181, 3), e(8, 181, 3), e(9, 181, 3), e(10, 181, 3), e(11, 181, 3), e(12, 181, 3), e(13, 181, 3), e(14, 181, 7)],
    [e(7, 185, 3), e(8, 185, 3), e(9, 185, 3), e(10, 185, 3), e(11, 185, 3), e(12, 185, 3), e(13, 185, 3), e(14, 185, 7), e(7, 186, 3), e(8, 186, 3), e(9, 186, 3), e(10, 186, 3), e(11, 186, 3), e(12, 186, 3), e(13, 186, 3), e(14, 186, 7)],
    [e(7, 187, 3), e(8, 187, 3), e(9, 187, 3), e(10, 187, 3), e(11, 187, 3), e(12, 187, 3), e(13, 187, 3), e(14, 187, 7), e(7, 189, 3), e(8, 189, 3), e(9, 189, 3), e(10, 189, 3), e(11, 189, 3), e(12, 189, 3), e(13, 189, 3), e(14, 189, 7)],
    [e(7, 190, 3), e(8, 190, 3), e(9, 190, 3), e(10, 190, 3), e(11, 190, 3), e(12, 190, 3), e(13, 190, 3), e(14, 190, 7), e(7, 196, 3), e(8, 196, 3), e(9, 196, 3), e(10, 196, 3), e(11, 196, 3), e(12, 196, 3), e(13, 196, 3), e(14, 196, 7)],
    [e(7, 198, 3), e(8, 198, 3), e(9, 198, 3), e(10, 198, 3), e(11, 198, 3), e(12, 198, 3), e(13, 198, 3), e(14, 198, 7), e(7, 228, 3), e(8, 228, 3), e(9, 228, 3), e(10, 228, 3), e(11, 228, 3), e(12, 228, 3), e(13, 228, 3), e(14, 228, 7)],
    [e(7, 232, 3), e(8, 232, 3), e(9, 232, 3), e(10, 232, 3), e(11, 232, 3), e(12, 232, 3), e(13, 232, 3), e(14, 232, 7), e(7, 233, 3), e(8, 233, 3), e(9, 233, 3), e(10, 233, 3), e(11, 233, 3), e(12, 233, 3), e(13, 233, 3), e(14, 233, 7)],
    [e(3, 1, 3), e(4, 1, 3), e(5, 1, 3), e(6, 1, 7), e(3, 135, 3), e(4, 135, 3), e(5, 135, 3), e(6, 135, 7), e(3, 137, 3), e(4, 137, 3), e(5, 137, 3), e(6, 137, 7), e(3, 138, 3), e(4, 138, 3), e(5, 138, 3), e(6, 138, 7)],
    [e(3, 139, 3), e(4, 139, 3), e(5, 139, 3), e(6, 139, 7), e(3, 140, 3), e(4, 140, 3), e(5, 140, 3), e(6, 140, 7), e(3, 141, 3), e(4, 141, 3), e(5, 141, 3), e(6, 141, 7), e(3, 143, 3), e(4, 143, 3), e(5, 143, 3), e(6, 143, 7)],
    [e(3, 147, 3), e(4, 147, 3), e(5, 147, 3), e(6, 147, 7), e(3, 149, 3), e(4, 149, 3), e(5, 149, 3), e(6, 149, 7), e(3, 150, 3), e(4, 150, 3), e(5, 150, 3), e(6, 150, 7), e(3, 151, 3), e(4, 151, 3), e(5, 151, 3), e(6, 151, 7)],
    [e(3, 152, 3), e(4, 152, 3), e(5, 152, 3), e(6, 152, 7), e(3, 155, 3), e(4, 155, 3), e(5, 155, 3), e(6, 155, 7), e(3, 157, 3), e(4, 157, 3), e(5, 157, 3), e(6, 157, 7), e(3, 158, 3), e(4, 158, 3), e(5, 158, 3), e(6, 158, 7)],
    [e(3, 165, 3), e(4, 165, 3), e(5, 165, 3), e(6, 165, 7), e(3, 166, 3), e(4, 166, 3), e(5, 166, 3), e(6, 166, 7), e(3, 168, 3), e(4, 168, 3), e(5, 168, 3), e(6, 168, 7), e(3, 174, 3), e(4, 174, 3), e(5, 174, 3), e(6, 174, 7)],
    [e(3, 175, 3), e(4, 175, 3), e(5, 175, 3), e(6, 175, 7), e(3, 180, 3), e(4, 180, 3), e(5, 180, 3), e(6, 180, 7), e(3, 182, 3), e(4, 182, 3), e(5, 182, 3), e(6, 182, 7), e(3, 183, 3), e(4, 183, 3), e(5, 183, 3), e(6, 183, 7)],
    [e(3, 188, 3), e(4, 188, 3), e(5, 188, 3), e(6, 188, 7), e(3, 191, 3), e(4, 191, 3), e(5, 191, 3), e(6, 191, 7), e(3, 197, 3), e(4, 197, 3), e(5, 197, 3), e(6, 197, 7), e(3, 231, 3), e(4, 231, 3), e(5, 231, 3), e(6, 231, 7)],
    [e(3, 239, 3), e(4, 239, 3), e(5, 239, 3), e(6, 239, 7), e(1, 9, 3), e(2, 9, 7), e(1, 142, 3), e(2, 142, 7), e(1, 144, 3), e(2, 144, 7), e(1, 145, 3), e(2, 145, 7), e(1, 148, 3), e(2, 148, 7), e(1, 159, 3), e(2, 159, 7)],
    [e(1, 171, 3), e(2, 171, 7), e(1, 206, 3), e(2, 206, 7), e(1, 215, 3), e(2, 215, 7), e(1, 225, 3), e(2, 225, 7), e(1, 236, 3), e(2, 236, 7), e(1, 237, 3), e(2, 237, 7), e(0, 199, 7), e(0, 207, 7), e(0, 234, 7), e(0, 235, 7)],
    [e(205, 0, 2), e(206, 0, 2), e(207, 0, 2), e(208, 0, 2), e(209, 0, 2), e(210, 0, 2), e(211, 0, 2), e(212, 0, 2), e(213, 0, 2), e(214, 0, 2), e(215, 0, 2), e(216, 0, 2), e(217, 0, 2), e(218, 0, 2), e(219, 0, 2), e(220, 0, 2)],
    [e(7, 1, 3), e(8, 1, 3), e(9, 1, 3), e(10, 1, 3), e(11, 1, 3), e(12, 1, 3), e(13, 1, 3), e(14, 1, 7), e(7, 135, 3), e(8, 135, 3), e(9, 135, 3), e(10, 135, 3), e(11, 135, 3), e(12, 135, 3), e(13, 135, 3), e(14, 135, 7)],
    [e(7, 137, 3), e(8, 137, 3), e(9, 137, 3), e(10, 137, 3), e(11, 137, 3), e(12, 137, 3), e(13, 137, 3), e(14, 137, 7), e(7, 138, 3), e(8, 138, 3), e(9, 138, 3), e(10, 138, 3), e(11, 138, 3), e(12, 138, 3), e(13, 138, 3), e(14, 138, 7)],
    [e(7, 139, 3), e(8, 139, 3), e(9, 139, 3), e(10, 139, 3), e(11, 139, 3), e(12, 139, 3), e(13, 139, 3), e(14, 139, 7), e(7, 140, 3), e(8, 140, 3), e(9, 140, 3), e(10, 140, 3), e(11, 140, 3), e(12, 140, 3), e(13, 140, 3), e(14, 140, 7)],
    [e(7, 141, 3), e(8, 141, 3), e(9, 141, 3), e(10, 141, 3), e(11, 141, 3), e(12, 141, 3), e(13, 141, 3), e(14, 141, 7), e(7, 143, 3), e(8, 143, 3), e(9, 143, 3), e(10, 143, 3), e(11, 143, 3), e(12, 143, 3), e(13, 143, 3), e(14, 143, 7)],
    [e(7, 147, 3), e(8, 147, 3), e(9, 147, 3), e(10, 147, 3), e(11, 147, 3), e(12, 147, 3), e(13, 147, 3), e(14, 147, 7), e(7, 149, 3), e(8, 149, 3), e(9, 149, 3), e(10, 149, 3), e(11, 149, 3), e(12, 149, 3), e(13, 149, 3), e(14, 149, 7)],
    [e(7, 150, 3), e(8, 150, 3), e(9, 150, 3), e(10, 150, 3), e(11, 150, 3), e(12, 150, 3), e(13, 150, 3), e(14, 150, 7), e(7, 151, 3), e(8, 151, 3), e(9, 151, 3), e(10, 151, 3), e(11, 151, 3), e(12, 151, 3), e(13, 151, 3), e(14, 151, 7)],
    [e(7, 152, 3), e(8, 152, 3), e(9, 152, 3), e(10, 152, 3), e(11, 152, 3), e(12, 152, 3), e(13, 152, 3), e(14, 152, 7), e(7, 155, 3), e(8, 155, 3), e(9, 155, 3), e(10, 155, 3), e(11, 155, 3), e(12, 155, 3), e(13, 155, 3), e(14, 155, 7)],
    [e(7, 157, 3), e(8, 157, 3), e(9, 157, 3), e(10, 157, 3), e(11, 157, 3), e(12, 157, 3), e(13, 157, 3), e(14, 157, 7), e(7, 158, 3), e(8, 158, 3), e(9, 158, 3), e(10, 158, 3), e(11, 158, 3), e(12, 158, 3), e(13, 158, 3), e(14, 158, 7)],
    [e(7, 165, 3), e(8, 165, 3), e(9, 165, 3), e(10, 165, 3), e(11, 165, 3), e(12, 165, 3), e(13, 165, 3), e(14, 165, 7), e(7, 166, 3), e(8, 166, 3), e(9, 166, 3), e(10, 166, 3), e(11, 166, 3), e(12, 166, 3), e(13, 166, 3), e(14, 166, 7)],
    [e(7, 168, 3), e(8, 168, 3), e(9, 168, 3), e(10, 168, 3), e(11, 168, 3), e(12, 168, 3), e(13, 168, 3), e(14, 168, 7), e(7, 174, 3), e(8, 174, 3), e(9, 174, 3), e(10, 174, 3), e(11, 174, 3), e(12, 174, 3), e(13, 174, 3), e(14, 174, 7)],
    [e(7, 175, 3), e(8, 175, 3), e(9, 175, 3), e(10, 175, 3), e(11, 175, 3), e(12, 175, 3), e(13, 175, 3), e(14, 175, 7), e(7, 180, 3), e(8, 180, 3), e(9, 180, 3), e(10, 180, 3), e(11, 180, 3), e(12, 180, 3), e(13, 180, 3), e(14, 180, 7)],
    [e(7, 182, 3), e(8, 182, 3), e(9, 182, 3), e(10, 182, 3), e(11, 182, 3), e(12, 182, 3), e(13, 182, 3), e(14, 182, 7), e(7, 183, 3), e(8, 183, 3), e(9, 183, 3), e(10, 183, 3), e(11, 183, 3), e(12, 183, 3), e(13, 183, 3), e(14, 183, 7)],
    [e(7, 188, 3), e(8, 188, 3), e(9, 188, 3), e(10, 188, 3), e(11, 188, 3), e(12, 188, 3), e(13, 188, 3), e(14, 188, 7), e(7, 191, 3), e(8, 191, 3), e(9, 191, 3), e(10, 191, 3), e(11, 191, 3), e(12, 191, 3), e(13, 191, 3), e(14, 191, 7)],
    [e(7, 197, 3), e(8, 197, 3), e(9, 197, 3), e(10, 197, 3), e(11, 197, 3), e(12, 197, 3), e(13, 197, 3), e(14, 197, 7), e(7, 231, 3), e(8, 231, 3), e(9, 231, 3), e(10, 231, 3), e(11, 231, 3), e(12, 231, 3), e(13, 231, 3), e(14, 231, 7)],
    [e(7, 239, 3), e(8, 239, 3), e(9, 239, 3), e(10, 239, 3), e(11, 239, 3), e(12, 239, 3), e(13, 239, 3), e(14, 239, 7), e(3, 9, 3), e(4, 9, 3), e(5, 9, 3), e(6, 9, 7), e(3, 142, 3), e(4, 142, 3), e(5, 142, 3), e(6, 142, 7)],
    [e(3, 144, 3), e(4, 144, 3), e(5, 144, 3), e(6, 144, 7), e(3, 145, 3), e(4, 145, 3), e(5, 145, 3), e(6, 145, 7), e(3, 148, 3), e(4, 148, 3), e(5, 148, 3), e(6, 148, 7), e(3, 159, 3), e(4, 159, 3), e(5, 159, 3), e(6, 159, 7)],
    [e(3, 171, 3), e(4, 171, 3), e(5, 171, 3), e(6, 171, 7), e(3, 206, 3), e(4, 206, 3), e(5, 206, 3), e(6, 206, 7), e(3, 215, 3), e(4, 215, 3), e(5, 215, 3), e(6, 215, 7), e(3, 225, 3), e(4, 225, 3), e(5, 225, 3), e(6, 225, 7)],
    [e(3, 236, 3), e(4, 236, 3), e(5, 236, 3), e(6, 236, 7), e(3, 237, 3), e(4, 237, 3), e(5, 237, 3), e(6, 237, 7), e(1, 199, 3), e(2, 199, 7), e(1, 207, 3), e(2, 207, 7), e(1, 234, 3), e(2, 234, 7), e(1, 235, 3), e(2, 235, 7)],
    [e(0, 192, 7), e(0, 193, 7), e(0, 200, 7), e(0, 201, 7), e(0, 202, 7), e(0, 205, 7), e(0, 210, 7), e(0, 213, 7), e(0, 218, 7), e(0, 219, 7), e(0, 238, 7), e(0, 240, 7), e(0, 242, 7), e(0, 243, 7), e(0, 255, 7), e(221, 0, 2)],
    [e(222, 0, 2), e(223, 0, 2), e(224, 0, 2), e(225, 0, 2), e(226, 0, 2), e(227, 0, 2), e(228, 0, 2), e(229, 0, 2), e(230, 0, 2), e(231, 0, 2), e(232, 0, 2), e(233, 0, 2), e(234, 0, 2), e(235, 0, 2), e(236, 0, 2), e(237, 0, 2)],
    [e(7, 9, 3), e(8, 9, 3), e(9, 9, 3), e(10, 9, 3), e(11, 9, 3), e(12, 9, 3), e(13, 9, 3), e(14, 9, 7), e(7, 142, 3), e(8, 142, 3), e(9, 142, 3), e(10, 142, 3), e(11, 142, 3), e(12, 142, 3), e(13, 142, 3), e(14, 142, 7)],
    [e(7, 144, 3), e(8, 144, 3), e(9, 144, 3), e(10, 144, 3), e(11, 144, 3), e(12, 144, 3), e(13, 144, 3), e(14, 144, 7), e(7, 145, 3), e(8, 145, 3), e(9, 145, 3), e(10, 145, 3), e(11, 145, 3), e(12, 145, 3), e(13, 145, 3), e(14, 145, 7)],
    [e(7, 148, 3), e(8, 148, 3), e(9, 148, 3), e(10, 148, 3), e(11, 148, 3), e(12, 148, 3), e(13, 148, 3), e(14, 148, 7), e(7, 159, 3), e(8, 159, 3), e(9, 159, 3), e(10, 159, 3), e(11, 159, 3), e(12, 159, 3), e(13, 159, 3), e(14, 159, 7)],
    [e(7, 171, 3), e(8, 171, 3), e(9, 171, 3), e(10, 171, 3), e(11, 171, 3), e(12, 171, 3), e(13, 171, 3), e(14, 171, 7), e(7, 206, 3), e(8, 206, 3), e(9, 206, 3), e(10, 206, 3), e(11, 206, 3), e(12, 206, 3), e(13, 206, 3), e(14, 206, 7)],
    [e(7, 215, 3), e(8, 215, 3), e(9, 215, 3), e(10, 215, 3), e(11, 215, 3), e(12, 215, 3), e(13, 215, 3), e(14, 215, 7), e(7, 225, 3), e(8, 225, 3), e(9, 225, 3), e(10, 225, 3), e(11, 225, 3), e(12, 225, 3), e(13, 225, 3), e(14, 225, 7)],
    [e(7, 236, 3), e(8, 236, 3), e(9, 236, 3), e(10, 236, 3), e(11, 236, 3), e(12, 236, 3), e(13, 236, 3), e(14, 236, 7), e(7, 237, 3), e(8, 237, 3), e(9, 237, 3), e(10, 237, 3), e(11, 237, 3), e(12, 237, 3), e(13, 237, 3), e(14, 237, 7)],
    [e(3, 199, 3), e(4, 199, 3), e(5, 199, 3), e(6, 199, 7), e(3, 207, 3), e(4, 207, 3), e(5, 207, 3), e(6, 207, 7), e(3, 234, 3), e(4, 234, 3), e(5, 234, 3), e(6, 234, 7), e(3, 235, 3), e(4, 235, 3), e(5, 235, 3), e(6, 235, 7)],
    [e(1, 192, 3), e(2, 192, 7), e(1, 193, 3), e(2, 193, 7), e(1, 200, 3), e(2, 200, 7), e(1, 201, 3), e(2, 201, 7), e(1, 202, 3), e(2, 202, 7), e(1, 205, 3), e(2, 205, 7), e(1, 210, 3), e(2, 210, 7), e(1, 213, 3), e(2, 213, 7)],
    [e(1, 218, 3), e(2, 218, 7), e(1, 219, 3), e(2, 219, 7), e(1, 238, 3), e(2, 238, 7), e(1, 240, 3), e(2, 240, 7), e(1, 242, 3), e(2, 242, 7), e(1, 243, 3), e(2, 243, 7), e(1, 255, 3), e(2, 255, 7), e(0, 203, 7), e(0, 204, 7)],
    [e(0, 211, 7), e(0, 212, 7), e(0, 214, 7), e(0, 221, 7), e(0, 222, 7), e(0, 223, 7), e(0, 241, 7), e(0, 244, 7), e(0, 245, 7), e(0, 246, 7), e(0, 247, 7), e(0, 248, 7), e(0, 250, 7), e(0, 251, 7), e(0, 252, 7), e(0, 253, 7)],
    [e(0, 254, 7), e(238, 0, 2), e(239, 0, 2), e(240, 0, 2), e(241, 0, 2), e(242, 0, 2), e(243, 0, 2), e(244, 0, 2), e(245, 0, 2), e(246, 0, 2), e(247, 0, 2), e(248, 0, 2), e(249, 0, 2), e(250, 0, 2), e(251, 0, 2), e(252, 0, 2)],
    [e(7, 199, 3), e(8, 199, 3), e(9, 199, 3), e(10, 199, 3), e(11, 199, 3), e(12, 199, 3), e(13, 199, 3), e(14, 199, 7), e(7, 207, 3), e(8, 207, 3), e(9, 207, 3), e(10, 207, 3), e(11, 207, 3), e(12, 207, 3), e(13, 207, 3), e(14, 207, 7)],
    [e(7, 234, 3), e(8, 234, 3), e(9, 234, 3), e(10, 234, 3), e(11, 234, 3), e(12, 234, 3), e(13, 234, 3), e(14, 234, 7), e(7, 235, 3), e(8, 235, 3), e(9, 235, 3), e(10, 235, 3), e(11, 235, 3), e(12, 235, 3), e(13, 235, 3), e(14, 235, 7)],
    [e(3, 192, 3), e(4, 192, 3), e(5, 192, 3), e(6, 192, 7), e(3, 193, 3), e(4, 193, 3), e(5, 193, 3), e(6, 193, 7), e(3, 200, 3), e(4, 200, 3), e(5, 200, 3), e(6, 200, 7), e(3, 201, 3), e(4, 201, 3), e(5, 201, 3), e(6, 201, 7)],
    [e(3, 202, 3), e(4, 202, 3), e(5, 202, 3), e(6, 202, 7), e(3, 205, 3), e(4, 205, 3), e(5, 205, 3), e(6, 205, 7), e(3, 210, 3), e(4, 210, 3), e(5, 210, 3), e(6, 210, 7), e(3, 213, 3), e(4, 213, 3), e(5, 213, 3), e(6, 213, 7)],
    [e(3, 218, 3), e(4, 218, 3), e(5, 218, 3), e(6, 218, 7), e(3, 219, 3), e(4, 219, 3), e(5, 219, 3), e(6, 219, 7), e(3, 238, 3), e(4, 238, 3), e(5, 238, 3), e(6, 238, 7), e(3, 240, 3), e(4, 240, 3), e(5, 240, 3), e(6, 240, 7)],
    [e(3, 242, 3), e(4, 242, 3), e(5, 242, 3), e(6, 242, 7), e(3, 243, 3), e(4, 243, 3), e(5, 243, 3), e(6, 243, 7), e(3, 255, 3), e(4, 255, 3), e(5, 255, 3), e(6, 255, 7), e(1, 203, 3), e(2, 203, 7), e(1, 204, 3), e(2, 204, 7)],
    [e(1, 211, 3), e(2, 211, 7), e(1, 212, 3), e(2, 212, 7), e(1, 214, 3), e(2, 214, 7), e(1, 221, 3), e(2, 221, 7), e(1, 222, 3), e(2, 222, 7), e(1, 223, 3), e(2, 223, 7), e(1, 241, 3), e(2, 241, 7), e(1, 244, 3), e(2, 244, 7)],
    [e(1, 245, 3), e(2, 245, 7), e(1, 246, 3), e(2, 246, 7), e(1, 247, 3), e(2, 247, 7), e(1, 248, 3), e(2, 248, 7), e(1, 250, 3), e(2, 250, 7), e(1, 251, 3), e(2, 251, 7), e(1, 252, 3), e(2, 252, 7), e(1, 253, 3), e(2, 253, 7)],
    [e(1, 254, 3), e(2, 254, 7), e(0, 2, 7), e(0, 3, 7), e(0, 4, 7), e(0, 5, 7), e(0, 6, 7), e(0, 7, 7), e(0, 8, 7), e(0, 11, 7), e(0, 12, 7), e(0, 14, 7), e(0, 15, 7), e(0, 16, 7), e(0, 17, 7), e(0, 18, 7)],
    [e(0, 19, 7), e(0, 20, 7), e(0, 21, 7), e(0, 23, 7), e(0, 24, 7), e(0, 25, 7), e(0, 26, 7), e(0, 27, 7), e(0, 28, 7), e(0, 29, 7), e(0, 30, 7), e(0, 31, 7), e(0, 127, 7), e(0, 220, 7), e(0, 249, 7), e(253, 0, 2)],
    [e(7, 192, 3), e(8, 192, 3), e(9, 192, 3), e(10, 192, 3), e(11, 192, 3), e(12, 192, 3), e(13, 192, 3), e(14, 192, 7), e(7, 193, 3), e(8, 193, 3), e(9, 193, 3), e(10, 193, 3), e(11, 193, 3), e(12, 193, 3), e(13, 193, 3), e(14, 193, 7)],
    [e(7, 200, 3), e(8, 200, 3), e(9, 200, 3), e(10, 200, 3), e(11, 200, 3), e(12, 200, 3), e(13, 200, 3), e(14, 200, 7), e(7, 201, 3), e(8, 201, 3), e(9, 201, 3), e(10, 201, 3), e(11, 201, 3), e(12, 201, 3), e(13, 201, 3), e(14, 201, 7)],
    [e(7, 202, 3), e(8, 202, 3), e(9, 202, 3), e(10, 202, 3), e(11, 202, 3), e(12, 202, 3), e(13, 202, 3), e(14, 202, 7), e(7, 205, 3), e(8, 205, 3), e(9, 205, 3), e(10, 205, 3), e(11, 205, 3), e(12, 205, 3), e(13, 205, 3), e(14, 205, 7)],
    [e(7, 210, 3), e(8, 210, 3), e(9, 210, 3), e(10, 210, 3), e(11, 210, 3), e(12, 210, 3), e(13, 210, 3), e(14, 210, 7), e(7, 213, 3), e(8, 213, 3), e(9, 213, 3), e(10, 213, 3), e(11, 213, 3), e(12, 213, 3), e(13, 213, 3), e(14, 213, 7)],
    [e(7, 218, 3), e(8, 218, 3), e(9, 218, 3), e(10, 218, 3), e(11, 218, 3), e(12, 218, 3), e(13, 218, 3), e(14, 218, 7), e(7, 219, 3), e(8, 219, 3), e(9, 219, 3), e(10, 219, 3), e(11, 219, 3), e(12, 219, 3), e(13, 219, 3), e(14, 219, 7)],
    [e(7, 238, 3), e(8, 238, 3), e(9, 238, 3), e(10, 238, 3), e(11, 238, 3), e(12, 238, 3), e(13, 238, 3), e(14, 238, 7), e(7, 240, 3), e(8, 240, 3), e(9, 240, 3), e(10, 240, 3), e(11, 240, 3), e(12, 240, 3), e(13, 240, 3), e(14, 240, 7)],
    [e(7, 242, 3), e(8, 242, 3), e(9, 242, 3), e(10, 242, 3), e(11, 242, 3), e(12, 242, 3), e(13, 242, 3), e(14, 242, 7), e(7, 243, 3), e(8, 243, 3), e(9, 243, 3), e(10, 243, 3), e(11, 243, 3), e(12, 243, 3), e(13, 243, 3), e(14, 243, 7)],
    [e(7, 255, 3), e(8, 255, 3), e(9, 255, 3), e(10, 255, 3), e(11, 255, 3), e(12, 255, 3), e(13, 255, 3), e(14, 255, 7), e(3, 203, 3), e(4, 203, 3), e(5, 203, 3), e(6, 203, 7), e(3, 204, 3), e(4, 204, 3), e(5, 204, 3), e(6, 204, 7)],
    [e(3, 211, 3), e(4, 211, 3), e(5, 211, 3), e(6, 211, 7), e(3, 212, 3), e(4, 212, 3), e(5, 212, 3), e(6, 212, 7), e(3, 214, 3), e(4, 214, 3), e(5, 214, 3), e(6, 214, 7), e(3, 221, 3), e(4, 221, 3), e(5, 221, 3), e(6, 221, 7)],
    [e(3, 222, 3), e(4, 222, 3), e(5, 222, 3), e(6, 222, 7), e(3, 223, 3), e(4, 223, 3), e(5, 223, 3), e(6, 223, 7), e(3, 241, 3), e(4, 241, 3), e(5, 241, 3), e(6, 241, 7), e(3, 244, 3), e(4, 244, 3), e(5, 244, 3), e(6, 244, 7)],
    [e(3, 245, 3), e(4, 245, 3), e(5, 245, 3), e(6, 245, 7), e(3, 246, 3), e(4, 246, 3), e(5, 246, 3), e(6, 246, 7), e(3, 247, 3), e(4, 247, 3), e(5, 247, 3), e(6, 247, 7), e(3, 248, 3), e(4, 248, 3), e(5, 248, 3), e(6, 248, 7)],
    [e(3, 250, 3), e(4, 250, 3), e(5, 250, 3), e(6, 250, 7), e(3, 251, 3), e(4, 251, 3), e(5, 251, 3), e(6, 251, 7), e(3, 252, 3), e(4, 252, 3), e(5, 252, 3), e(6, 252, 7), e(3, 253, 3), e(4, 253, 3), e(5, 253, 3), e(6, 253, 7)],
    [e(3, 254, 3), e(4, 254, 3), e(5, 254, 3), e(6, 254, 7), e(1, 2, 3), e(2, 2, 7), e(1, 3, 3), e(2, 3, 7), e(1, 4, 3), e(2, 4, 7), e(1, 5, 3), e(2, 5, 7), e(1, 6, 3), e(2, 6, 7), e(1, 7, 3), e(2, 7, 7)],
    [e(1, 8, 3), e(2, 8, 7), e(1, 11, 3), e(2, 11, 7), e(1, 12, 3), e(2, 12, 7), e(1, 14, 3), e(2, 14, 7), e(1, 15, 3), e(2, 15, 7), e(1, 16, 3), e(2, 16, 7), e(1, 17, 3), e(2, 17, 7), e(1, 18, 3), e(2, 18, 7)],
    [e(1, 19, 3), e(2, 19, 7), e(1, 20, 3), e(2, 20, 7), e(1, 21, 3), e(2, 21, 7), e(1, 23, 3), e(2, 23, 7), e(1, 24, 3), e(2, 24, 7), e(1, 25, 3), e(2, 25, 7), e(1, 26, 3), e(2, 26, 7), e(1, 27, 3), e(2, 27, 7)],
    [e(1, 28, 3), e(2, 28, 7), e(1, 29, 3), e(2, 29, 7), e(1, 30, 3), e(2, 30, 7), e(1, 31, 3), e(2, 31, 7), e(1, 127, 3), e(2, 127, 7), e(1, 220, 3), e(2, 220, 7), e(1, 249, 3), e(2, 249, 7), e(254, 0, 2), e(255, 0, 2)],
    [e(7, 203, 3), e(8, 203, 3), e(9, 203, 3), e(10, 203, 3), e(11, 203, 3), e(12, 203, 3), e(13, 203, 3), e(14, 203, 7), e(7, 204, 3), e(8, 204, 3), e(9, 204, 3), e(10, 204, 3), e(11, 204, 3), e(12, 204, 3), e(13, 204, 3), e(14, 204, 7)],
    [e(7, 211, 3), e(8, 211, 3), e(9, 211, 3), e(10, 211, 3), e(11, 211, 3), e(12, 211, 3), e(13, 211, 3), e(14, 211, 7), e(7, 212, 3), e(8, 212, 3), e(9, 212, 3), e(10, 212, 3), e(11, 212, 3), e(12, 212, 3), e(13, 212, 3), e(14, 212, 7)],
    [e(7, 214, 3), e(8, 214, 3), e(9, 214, 3), e(10, 214, 3), e(11, 214, 3), e(12, 214, 3), e(13, 214, 3), e(14, 214, 7), e(7, 221, 3), e(8, 221, 3), e(9, 221, 3), e(10, 221, 3), e(11, 221, 3), e(12, 221, 3), e(13, 221, 3), e(14, 221, 7)],
    [e(7, 222, 3), e(8, 222, 3), e(9, 222, 3), e(10, 222, 3), e(11, 222, 3), e(12, 222, 3), e(13, 222, 3), e(14, 222, 7), e(7, 223, 3), e(8, 223, 3), e(9, 223, 3), e(10, 223, 3), e(11, 223, 3), e(12, 223, 3), e(13, 223, 3), e(14, 223, 7)],
    [e(7, 241, 3), e(8, 241, 3), e(9, 241, 3), e(10, 241, 3), e(11, 241, 3), e(12, 241, 3), e(13, 241, 3), e(14, 241, 7), e(7, 244, 3), e(8, 244, 3), e(9, 244, 3), e(10, 244, 3), e(11, 244, 3), e(12, 244, 3), e(13, 244, 3), e(14, 244, 7)],
    [e(7, 245, 3), e(8, 245, 3), e(9, 245, 3), e(10, 245, 3), e(11, 245, 3), e(12, 245, 3), e(13, 245, 3), e(14, 245, 7), e(7, 246, 3), e(8, 246, 3), e(9, 246, 3), e(10, 246, 3), e(11, 246, 3), e(12, 246, 3), e(13, 246, 3), e(14, 246, 7)],
    [e(7, 247, 3), e(8, 247, 3), e(9, 247, 3), e(10, 247, 3), e(11, 247, 3), e(12, 247, 3), e(13, 247, 3), e(14, 247, 7), e(7, 248, 3), e(8, 248, 3), e(9, 248, 3), e(10, 248, 3), e(11, 248, 3), e(12, 248, 3), e(13, 248, 3), e(14, 248, 7)],
    [e(7, 250, 3), e(8, 250, 3), e(9, 250, 3), e(10, 250, 3), e(11, 250, 3), e(12, 250, 3), e(13, 250, 3), e(14, 250, 7), e(7, 251, 3), e(8, 251, 3), e(9, 251, 3), e(10, 251, 3), e(11, 251, 3), e(12, 251, 3), e(13, 251, 3), e(14, 251, 7)],
    [e(7, 252, 3), e(8, 252, 3), e(9, 252, 3), e(10, 252, 3), e(11, 252, 3), e(12, 252, 3), e(13, 252, 3), e(14, 252, 7), e(7, 253, 3), e(8, 253, 3), e(9, 253, 3), e(10, 253, 3), e(11, 253, 3), e(12, 253, 3), e(13, 253, 3), e(14, 253, 7)],
    [e(7, 254, 3), e(8, 254, 3), e(9, 254, 3), e(10, 254, 3), e(11, 254, 3), e(12, 254, 3), e(13, 254, 3), e(14, 254, 7), e(3, 2, 3), e(4, 2, 3), e(5, 2, 3), e(6, 2, 7), e(3, 3, 3), e(4, 3, 3), e(5, 3, 3), e(6, 3, 7)],
    [e(3, 4, 3), e(4, 4, 3), e(5, 4, 3), e(6, 4, 7), e(3, 5, 3), e(4, 5, 3), e(5, 5, 3), e(6, 5, 7), e(3, 6, 3), e(4, 6, 3), e(5, 6, 3), e(6, 6, 7), e(3, 7, 3), e(4, 7, 3), e(5, 7, 3), e(6, 7, 7)],
    [e(3, 8, 3), e(4, 8, 3), e(5, 8, 3), e(6, 8, 7), e(3, 11, 3), e(4, 11, 3), e(5, 11, 3), e(6, 11, 7), e(3, 12, 3), e(4, 12, 3), e(5, 12, 3), e(6, 12, 7), e(3, 14, 3), e(4, 14, 3), e(5, 14, 3), e(6, 14, 7)],
    [e(3, 15, 3), e(4, 15, 3), e(5, 15, 3), e(6, 15, 7), e(3, 16, 3), e(4, 16, 3), e(5, 16, 3), e(6, 16, 7), e(3, 17, 3), e(4, 17, 3), e(5, 17, 3), e(6, 17, 7), e(3, 18, 3), e(4, 18, 3), e(5, 18, 3), e(6, 18, 7)],
    [e(3, 19, 3), e(4, 19, 3), e(5, 19, 3), e(6, 19, 7), e(3, 20, 3), e(4, 20, 3), e(5, 20, 3), e(6, 20, 7), e(3, 21, 3), e(4, 21, 3), e(5, 21, 3), e(6, 21, 7), e(3, 23, 3), e(4, 23, 3), e(5, 23, 3), e(6, 23, 7)],
    [e(3, 24, 3), e(4, 24, 3), e(5, 24, 3), e(6, 24, 7), e(3, 25, 3), e(4, 25, 3), e(5, 25, 3), e(6, 25, 7), e(3, 26, 3), e(4, 26, 3), e(5, 26, 3), e(6, 26, 7), e(3, 27, 3), e(4, 27, 3), e(5, 27, 3), e(6, 27, 7)],
    [e(3, 28, 3), e(4, 28, 3), e(5, 28, 3), e(6, 28, 7), e(3, 29, 3), e(4, 29, 3), e(5, 29, 3), e(6, 29, 7), e(3, 30, 3), e(4, 30, 3), e(5, 30, 3), e(6, 30, 7), e(3, 31, 3), e(4, 31, 3), e(5, 31, 3), e(6, 31, 7)],
    [e(3, 127, 3), e(4, 127, 3), e(5, 127, 3), e(6, 127, 7), e(3, 220, 3), e(4, 220, 3), e(5, 220, 3), e(6, 220, 7), e(3, 249, 3), e(4, 249, 3), e(5, 249, 3), e(6, 249, 7), e(0, 10, 7), e(0, 13, 7), e(0, 22, 7), e(0, 0, 0)],
    [e(7, 2, 3), e(8, 2, 3), e(9, 2, 3), e(10, 2, 3), e(11, 2, 3), e(12, 2, 3), e(13, 2, 3), e(14, 2, 7), e(7, 3, 3), e(8, 3, 3), e(9, 3, 3), e(10, 3, 3), e(11, 3, 3), e(12, 3, 3), e(13, 3, 3), e(14, 3, 7)],
    [e(7, 4, 3), e(8, 4, 3), e(9, 4, 3), e(10, 4, 3), e(11, 4, 3), e(12, 4, 3), e(13, 4, 3), e(14, 4, 7), e(7, 5, 3), e(8, 5, 3), e(9, 5, 3), e(10, 5, 3), e(11, 5, 3), e(12, 5, 3), e(13, 5, 3), e(14, 5, 7)],
    [e(7, 6, 3), e(8, 6, 3), e(9, 6, 3), e(10, 6, 3), e(11, 6, 3), e(12, 6, 3), e(13, 6, 3), e(14, 6, 7), e(7, 7, 3), e(8, 7, 3), e(9, 7, 3), e(10, 7, 3), e(11, 7, 3), e(12, 7, 3), e(13, 7, 3), e(14, 7, 7)],
    [e(7, 8, 3), e(8, 8, 3), e(9, 8, 3), e(10, 8, 3), e(11, 8, 3), e(12, 8, 3), e(13, 8, 3), e(14, 8, 7), e(7, 11, 3), e(8, 11, 3), e(9, 11, 3), e(10, 11, 3), e(11, 11, 3), e(12, 11, 3), e(13, 11, 3), e(14, 11, 7)],
    [e(7, 12, 3), e(8, 12, 3), e(9, 12, 3), e(10, 12, 3), e(11, 12, 3), e(12, 12, 3), e(13, 12, 3), e(14, 12, 7), e(7, 14, 3), e(8, 14, 3), e(9, 14, 3), e(10, 14, 3), e(11, 14, 3), e(12, 14, 3), e(13, 14, 3), e(14, 14, 7)],
    [e(7, 15, 3), e(8, 15, 3), e(9, 15, 3), e(10, 15, 3), e(11, 15, 3), e(12, 15, 3), e(13, 15, 3), e(14, 15, 7), e(7, 16, 3), e(8, 16, 3), e(9, 16, 3), e(10, 16, 3), e(11, 16, 3), e(12, 16, 3), e(13, 16, 3), e(14, 16, 7)],
    [e(7, 17, 3), e(8, 17, 3), e(9, 17, 3), e(10, 17, 3), e(11, 17, 3), e(12, 17, 3), e(13, 17, 3), e(14, 17, 7), e(7, 18, 3), e(8, 18, 3), e(9, 18, 3), e(10, 18, 3), e(11, 18, 3), e(12, 18, 3), e(13, 18, 3), e(14, 18, 7)],
    [e(7, 19, 3), e(8, 19, 3), e(9, 19, 3), e(10, 19, 3), e(11, 19, 3), e(12, 19, 3), e(13, 19, 3), e(14, 19, 7), e(7, 20, 3), e(8, 20, 3), e(9, 20, 3), e(10, 20, 3), e(11, 20, 3), e(12, 20, 3), e(13, 20, 3), e(14, 20, 7)],
    [e(7, 21, 3), e(8, 21, 3), e(9, 21, 3), e(10, 21, 3), e(11, 21, 3), e(12, 21, 3), e(13, 21, 3), e(14, 21, 7), e(7, 23, 3), e(8, 23, 3), e(9, 23, 3), e(10, 23, 3), e(11, 23, 3), e(12, 23, 3), e(13, 23, 3), e(14, 23, 7)],
    [e(7, 24, 3), e(8, 24, 3), e(9, 24, 3), e(10, 24, 3), e(11, 24, 3), e(12, 24, 3), e(13, 24, 3), e(14, 24, 7), e(7, 25, 3), e(8, 25, 3), e(9, 25, 3), e(10, 25, 3), e(11, 25, 3), e(12, 25, 3), e(13, 25, 3), e(14, 25, 7)],
    [e(7, 26, 3), e(8, 26, 3), e(9, 26, 3), e(10, 26, 3), e(11, 26, 3), e(12, 26, 3), e(13, 26, 3), e(14, 26, 7), e(7, 27, 3), e(8, 27, 3), e(9, 27, 3), e(10, 27, 3), e(11, 27, 3), e(12, 27, 3), e(13, 27, 3), e(14, 27, 7)],
    [e(7, 28, 3), e(8, 28, 3), e(9, 28, 3), e(10, 28, 3), e(11, 28, 3), e(12, 28, 3), e(13, 28, 3), e(14, 28, 7), e(7, 29, 3), e(8, 29, 3), e(9, 29, 3), e(10, 29, 3), e(11, 29, 3), e(12, 29, 3), e(13, 29, 3), e(14, 29, 7)],
    [e(7, 30, 3), e(8, 30, 3), e(9, 30, 3), e(10, 30, 3), e(11, 30, 3), e(12, 30, 3), e(13, 30, 3), e(14, 30, 7), e(7, 31, 3), e(8, 31, 3), e(9, 31, 3), e(10, 31, 3), e(11, 31, 3), e(12, 31, 3), e(13, 31, 3), e(14, 31, 7)],
    [e(7, 127, 3), e(8, 127, 3), e(9, 127, 3), e(10, 127, 3), e(11, 127, 3), e(12, 127, 3), e(13, 127, 3), e(14, 127, 7), e(7, 220, 3), e(8, 220, 3), e(9, 220, 3), e(10, 220, 3), e(11, 220, 3), e(12, 220, 3), e(13, 220, 3), e(14, 220, 7)],
    [e(7, 249, 3), e(8, 249, 3), e(9, 249, 3), e(10, 249, 3), e(11, 249, 3), e(12, 249, 3), e(13, 249, 3), e(14, 249, 7), e(1, 10, 3), e(2, 10, 7), e(1, 13, 3), e(2, 13, 7), e(1, 22, 3), e(2, 22, 7), e(0, 0, 0), e(0, 0, 0)],
    [e(3, 10, 3), e(4, 10, 3), e(5, 10, 3), e(6, 10, 7), e(3, 13, 3), e(4, 13, 3), e(5, 13, 3), e(6, 13, 7), e(3, 22, 3), e(4, 22, 3), e(5, 22, 3), e(6, 22, 7), e(0, 0, 0), e(0, 0, 0), e(0, 0, 0), e(0, 0, 0)],
    [e(7, 10, 3), e(8, 10, 3), e(9, 10, 3), e(10, 10, 3), e(11, 10, 3), e(12, 10, 3), e(13, 10, 3), e(14, 10, 7), e(7, 13, 3), e(8, 13, 3), e(9, 13, 3), e(10, 13, 3), e(11, 13, 3), e(12, 13, 3), e(13, 13, 3), e(14, 13, 7)],
    [e(7, 22, 3), e(8, 22, 3), e(9, 22, 3), e(10, 22, 3), e(11, 22, 3), e(12, 22, 3), e(13, 22, 3), e(14, 22, 7), e(0, 0, 0), e(0, 0, 0), e(0, 0, 0), e(0, 0, 0), e(0, 0, 0), e(0, 0, 0), e(0, 0, 0), e(0, 0, 0)],
];

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_rfc7541_request_vectors() {
        // RFC 7541 Appendix C.4
        assert_eq!(
            decode(&[0xf1, 0xe3, 0xc2, 0xe5, 0xf2, 0x3a, 0x6b, 0xa0, 0xab, 0x90, 0xf4, 0xff])
                .unwrap(),
            b"www.example.com"
        );
        assert_eq!(
            decode(&[0xa8, 0xeb, 0x10, 0x64, 0x9c, 0xbf]).unwrap(),
            b"no-cache"
        );
        assert_eq!(
            decode(&[0x25, 0xa8, 0x49, 0xe9, 0x5b, 0xa9, 0x7d, 0x7f]).unwrap(),
            b"custom-key"
        );
        assert_eq!(
            decode(&[0x25, 0xa8, 0x49, 0xe9, 0x5b, 0xb8, 0xe8, 0xb4, 0xbf]).unwrap(),
            b"custom-value"
        );
    }

    #[test]
    fn test_rfc7541_response_vectors() {
        // RFC 7541 Appendix C.6
        assert_eq!(decode(&[0x64, 0x02]).unwrap(), b"302");
        assert_eq!(decode(&[0xae, 0xc3, 0x77, 0x1a, 0x4b]).unwrap(), b"private");
        assert_eq!(
            decode(&[
                0xd0, 0x7a, 0xbe, 0x94, 0x10, 0x54, 0xd4, 0x44, 0xa8, 0x20, 0x05, 0x95, 0x04,
                0x0b, 0x81, 0x66, 0xe0, 0x82, 0xa6, 0x2d, 0x1b, 0xff,
            ])
            .unwrap(),
            b"Mon, 21 Oct 2013 20:13:21 GMT"
        );
        assert_eq!(
            decode(&[
                0x9d, 0x29, 0xad, 0x17, 0x18, 0x63, 0xc7, 0x8f, 0x0b, 0x97, 0xc8, 0xe9, 0xae,
                0x82, 0xae, 0x43, 0xd3,
            ])
            .unwrap(),
            b"https://www.example.com"
        );
    }

    #[test]
    fn test_empty_input_is_valid() {
        assert_eq!(decode(&[]).unwrap(), b"");
    }

    #[test]
    fn test_overlong_padding_is_rejected() {
        // a full byte of ones is 8 padding bits; at most 7 are allowed
        assert_eq!(decode(&[0xff]), Err(DecodeError::InvalidHuffman));
    }

    #[test]
    fn test_eos_in_payload_is_rejected() {
        // '0' (00000) followed by the 30-bit EOS code and padding
        assert_eq!(
            decode(&[0x07, 0xff, 0xff, 0xff, 0xff]),
            Err(DecodeError::InvalidHuffman)
        );
    }

    #[test]
    fn test_partial_symbol_is_rejected() {
        // 'A' is 100001 (6 bits); padding the byte with 01 strays off the
        // EOS path
        assert_eq!(decode(&[0x85]), Err(DecodeError::InvalidHuffman));
    }

    #[test]
    fn test_single_symbols() {
        assert_eq!(decode(&[0x07]).unwrap(), b"0"); // 00000 + 111 padding
        assert_eq!(decode(&[0x1f]).unwrap(), b"a"); // 00011 + 111 padding
        assert_eq!(decode(&[0x5b]).unwrap(), b"-"); // 010110 + 11 padding
    }
}
