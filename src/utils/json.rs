//! JSON rendering for objects written to the output bucket.

use serde::Serialize;
use serde_json::ser::{PrettyFormatter, Serializer};

use crate::error::Result;

/// Render `value` with sorted keys and 4-space indentation.
pub fn to_sorted_pretty<T: Serialize + ?Sized>(value: &T) -> Result<Vec<u8>> {
    // `Value` objects are BTreeMap-backed, which sorts every nested key.
    let value = serde_json::to_value(value)?;

    let mut buf = Vec::new();
    let mut ser = Serializer::with_formatter(&mut buf, PrettyFormatter::with_indent(b"    "));
    value.serialize(&mut ser)?;
    Ok(buf)
}
