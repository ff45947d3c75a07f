//! Rolling index-name derivation.

use chrono::NaiveDate;

/// Date format appended to the index prefix, one index per UTC day.
pub const INDEX_DATE_FORMAT: &str = "%Y.%m.%d";

/// Derive the rolling index name for a prefix and calendar date.
pub fn rolling_index_name(prefix: &str, date: NaiveDate) -> String {
    format!("{}-{}", prefix, date.format(INDEX_DATE_FORMAT))
}
