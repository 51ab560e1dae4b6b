use regex::Regex;

use std::sync::OnceLock;

use trivet_core::{ConstraintError, Error, ValidationError};

/// MySQL: foreign-key reference missing (ER_NO_REFERENCED_ROW)
pub(crate) const ER_NO_REFERENCED_ROW: u16 = 1452;

/// MySQL: unique-constraint duplicate (ER_DUP_ENTRY)
pub(crate) const ER_DUP_ENTRY: u16 = 1062;

/// MySQL: row is referenced by another table (ER_ROW_IS_REFERENCED)
pub(crate) const ER_ROW_IS_REFERENCED: u16 = 1451;

/// Translates a storage failure into the domain taxonomy.
///
/// Field recovery prefers the structured `column` / `index` metadata a
/// driver may attach; only when that is missing does it fall back to
/// parsing the engine's message, pinned to the known MySQL formats. An
/// unparseable message passes through untranslated rather than producing a
/// mis-attributed violation. Errors already in the domain taxonomy pass
/// through unchanged.
pub(crate) fn translate(id_field: &str, err: Error) -> Error {
    let driver = match err.as_driver() {
        Some(driver) => driver.clone(),
        None => return err,
    };

    match driver.code {
        Some(ER_NO_REFERENCED_ROW) => {
            let Some(field) = driver
                .column
                .or_else(|| parse_fk_column(&driver.message))
            else {
                return err;
            };

            let mut validation = ValidationError::new();
            validation.add(field, "reference not found");
            validation.into()
        }
        Some(ER_DUP_ENTRY) => {
            let Some(key) = driver.index.or_else(|| parse_dup_key(&driver.message)) else {
                return err;
            };

            // MySQL names the primary key "PRIMARY"; report it as the
            // configured identity field.
            let key = strip_table_prefix(&key);
            let field = if key == "PRIMARY" { id_field } else { key };

            let mut validation = ValidationError::new();
            validation.add(field, "already exists");
            validation.into()
        }
        Some(ER_ROW_IS_REFERENCED) => ConstraintError::new().into(),
        _ => err,
    }
}

/// `... FOREIGN KEY (`col`) REFERENCES ...`
fn parse_fk_column(message: &str) -> Option<String> {
    static RE: OnceLock<Regex> = OnceLock::new();
    let re = RE.get_or_init(|| {
        Regex::new(r"FOREIGN KEY \(`([^`]+)`\)").expect("foreign-key pattern is valid")
    });
    re.captures(message).map(|caps| caps[1].to_string())
}

/// `Duplicate entry '...' for key 'name'`; MySQL 8 reports
/// `'table.name'`.
fn parse_dup_key(message: &str) -> Option<String> {
    static RE: OnceLock<Regex> = OnceLock::new();
    let re = RE.get_or_init(|| {
        Regex::new(r"for key '([^']+)'").expect("duplicate-key pattern is valid")
    });
    re.captures(message).map(|caps| caps[1].to_string())
}

fn strip_table_prefix(key: &str) -> &str {
    key.rsplit('.').next().unwrap_or(key)
}
