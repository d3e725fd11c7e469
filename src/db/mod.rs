pub mod expenses;
pub mod initialize;
pub mod log;
pub mod migrate;
pub mod photos;
pub mod pool;
pub mod queries;
pub mod stats;

/// Rows read from a sheet plus the problems met while reading them.
///
/// Malformed rows are not fatal: they are skipped and described in
/// `warnings`, which callers surface to the user.
#[derive(Debug)]
pub struct Loaded<T> {
    pub records: Vec<T>,
    pub warnings: Vec<String>,
}

impl<T> Default for Loaded<T> {
    fn default() -> Self {
        Self {
            records: Vec::new(),
            warnings: Vec::new(),
        }
    }
}

impl<T> Loaded<T> {
    /// Print every warning through the UI layer.
    pub fn report(&self) {
        for w in &self.warnings {
            crate::ui::messages::warning(w);
        }
    }
}

/// Collect `query_map` results, turning conversion failures (bad dates,
/// times) into warnings and propagating real database errors.
pub(crate) fn collect_rows<T, I>(sheet: &str, rows: I) -> rusqlite::Result<Loaded<T>>
where
    I: Iterator<Item = rusqlite::Result<T>>,
{
    let mut out = Loaded::default();
    for r in rows {
        match r {
            Ok(v) => out.records.push(v),
            Err(rusqlite::Error::FromSqlConversionFailure(_, _, e)) => {
                out.warnings
                    .push(format!("Skipped malformed row in '{sheet}': {e}"));
            }
            Err(e) => return Err(e),
        }
    }
    Ok(out)
}
