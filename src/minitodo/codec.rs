//! # Persistence Codec
//!
//! Binary layout of the todo file. There is no magic number, version or
//! checksum:
//!
//! ```text
//! [i32 count][count × record]
//!
//! record (272 bytes)
//!   0..128    text, NUL-terminated
//!   128..256  category, NUL-terminated
//!   256..264  due date, i64 seconds since the epoch, <= 0 = none
//!   264..268  done, i32, non-zero = done
//!   268..272  padding, zero
//! ```
//!
//! Integers are little-endian. The record matches the in-memory layout of the
//! equivalent C struct on 64-bit targets, trailing alignment padding
//! included, so files stay interchangeable with that layout.
//!
//! Decoding is forgiving: a negative count reads as zero, a count above the
//! list capacity is clamped, and a file that ends early yields the complete
//! records found before the end.

use std::io::{self, Read, Write};

use chrono::{DateTime, Utc};
use tracing::warn;

use crate::error::{Result, TodoError};
use crate::model::{Todo, MAX_LENGTH};

pub const RECORD_SIZE: usize = 272;

const CATEGORY_OFFSET: usize = MAX_LENGTH;
const DUE_OFFSET: usize = 2 * MAX_LENGTH;
const DONE_OFFSET: usize = DUE_OFFSET + 8;

pub fn encode<W: Write>(writer: &mut W, todos: &[Todo]) -> Result<()> {
    let count = i32::try_from(todos.len())
        .map_err(|_| TodoError::Codec(format!("too many todos: {}", todos.len())))?;
    writer.write_all(&count.to_le_bytes())?;
    for todo in todos {
        writer.write_all(&encode_record(todo))?;
    }
    Ok(())
}

pub fn decode<R: Read>(reader: &mut R, capacity: usize) -> Result<Vec<Todo>> {
    let mut header = [0u8; 4];
    reader.read_exact(&mut header).map_err(|e| match e.kind() {
        io::ErrorKind::UnexpectedEof => TodoError::Codec("missing item count".to_string()),
        _ => TodoError::Io(e),
    })?;

    let declared = i32::from_le_bytes(header);
    let count = usize::try_from(declared).unwrap_or(0).min(capacity);
    if count as i64 != i64::from(declared) {
        warn!(declared, count, "item count out of range, clamped");
    }

    let mut todos = Vec::with_capacity(count);
    let mut record = [0u8; RECORD_SIZE];
    for _ in 0..count {
        match reader.read_exact(&mut record) {
            Ok(()) => todos.push(decode_record(&record)),
            Err(e) if e.kind() == io::ErrorKind::UnexpectedEof => {
                warn!(expected = count, read = todos.len(), "todo file ends early");
                break;
            }
            Err(e) => return Err(e.into()),
        }
    }
    Ok(todos)
}

fn encode_record(todo: &Todo) -> [u8; RECORD_SIZE] {
    let mut record = [0u8; RECORD_SIZE];
    put_str(&mut record[..CATEGORY_OFFSET], todo.text());
    put_str(&mut record[CATEGORY_OFFSET..DUE_OFFSET], todo.category());

    let due = todo.due_date().map_or(0, |d| d.timestamp());
    record[DUE_OFFSET..DONE_OFFSET].copy_from_slice(&due.to_le_bytes());

    let done = i32::from(todo.is_done());
    record[DONE_OFFSET..DONE_OFFSET + 4].copy_from_slice(&done.to_le_bytes());
    record
}

fn decode_record(record: &[u8; RECORD_SIZE]) -> Todo {
    let text = get_str(&record[..CATEGORY_OFFSET]);
    let category = get_str(&record[CATEGORY_OFFSET..DUE_OFFSET]);

    let mut due = [0u8; 8];
    due.copy_from_slice(&record[DUE_OFFSET..DONE_OFFSET]);
    let due = match i64::from_le_bytes(due) {
        secs if secs <= 0 => None,
        secs => DateTime::<Utc>::from_timestamp(secs, 0),
    };

    let mut done = [0u8; 4];
    done.copy_from_slice(&record[DONE_OFFSET..DONE_OFFSET + 4]);
    let done = i32::from_le_bytes(done) != 0;

    Todo::from_parts(&text, &category, due, done)
}

/// Copies `s` into `buf`, always leaving room for the terminating NUL.
fn put_str(buf: &mut [u8], s: &str) {
    let bytes = s.as_bytes();
    let len = bytes.len().min(buf.len() - 1);
    buf[..len].copy_from_slice(&bytes[..len]);
}

fn get_str(buf: &[u8]) -> String {
    let end = buf.iter().position(|&b| b == 0).unwrap_or(buf.len());
    String::from_utf8_lossy(&buf[..end]).into_owned()
}
