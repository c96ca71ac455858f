//! Testdata command handler.

use crate::error::{CasegenError, Result};
use crate::output::print_table;
use crate::testdata::{generate_rows, FieldSpec};

/// Generate random test data for the given `name[:type]` field specs and
/// print it as an aligned table.
pub fn testdata_command(field_specs: &[String], rows: usize) -> Result<()> {
    if field_specs.is_empty() {
        return Err(CasegenError::InvalidFieldSpec(
            "at least one --field is required".into(),
        ));
    }

    let fields = field_specs
        .iter()
        .map(|s| FieldSpec::parse(s))
        .collect::<Result<Vec<_>>>()?;

    let data = generate_rows(&fields, rows)?;
    let headers: Vec<String> = fields.iter().map(|f| f.name.clone()).collect();
    print_table(&headers, &data);
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_no_fields_is_an_error() {
        let err = testdata_command(&[], 5).unwrap_err().to_string();
        assert!(err.contains("at least one --field"));
    }

    #[test]
    fn test_bad_field_spec_is_an_error() {
        let fields = vec!["name:notatype".to_string()];
        assert!(matches!(
            testdata_command(&fields, 5),
            Err(CasegenError::InvalidFieldSpec(_))
        ));
    }

    #[test]
    fn test_valid_fields_succeed() {
        let fields = vec!["customerName".to_string(), "email:email".to_string()];
        assert!(testdata_command(&fields, 3).is_ok());
    }
}
