// src/extract.rs

use once_cell::sync::Lazy;
use regex::Regex;
use tracing::{debug, instrument, trace};

use crate::error::{Error, Result};
use crate::table::{is_country_code, CodeTable};

pub const BODY_START: &str = "<tbody>";
pub const BODY_END: &str = "</tbody>";

/// Six `<td>…</td>` cells in a row; cell text may not contain `<`.
static ROW: Lazy<Regex> = Lazy::new(|| {
    Regex::new(&r"<td>([^<]*)</td>".repeat(6)).expect("row regex should compile")
});

/// Scan the `<tbody>` section of `html` and collect MCC → ISO code entries.
///
/// Lines before the start marker are ignored and the end marker stops the
/// scan. Inside the body, lines that are not six-cell rows are skipped, as
/// are rows whose upper-cased third cell is not exactly two characters.
/// A qualifying row whose first cell is not an integer aborts with
/// [`Error::Parse`].
#[instrument(level = "debug", skip(html), fields(html_len = html.len()))]
pub fn extract_table(html: &str) -> Result<CodeTable> {
    let mut table = CodeTable::new();
    let mut in_body = false;
    let mut saw_end = false;
    let (mut unmatched, mut wrong_length) = (0usize, 0usize);

    for (idx, line) in html.split('\n').enumerate() {
        if line.contains(BODY_START) {
            in_body = true;
            continue;
        } else if line.contains(BODY_END) {
            saw_end = true;
            break;
        } else if !in_body {
            continue;
        }

        let Some(caps) = ROW.captures(line) else {
            trace!(line = idx + 1, "Skipping non-row line");
            unmatched += 1;
            continue;
        };

        let raw_mcc = &caps[1];
        let mcc: i64 = raw_mcc.trim().parse().map_err(|source| Error::Parse {
            line: idx + 1,
            value: raw_mcc.to_string(),
            source,
        })?;

        let iso = caps[3].to_ascii_uppercase();
        if !is_country_code(&iso) {
            trace!(line = idx + 1, mcc, iso = %iso, "Skipping row without a two-letter code");
            wrong_length += 1;
            continue;
        }

        table.insert(mcc, iso);
    }

    debug!(
        entries = table.len(),
        unmatched,
        wrong_length,
        saw_end,
        "Extracted code table"
    );
    Ok(table)
}
