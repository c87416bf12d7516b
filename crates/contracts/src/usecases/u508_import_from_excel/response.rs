use serde::{Deserialize, Serialize};

use super::messages::Locale;

/// Server-side outcome of one workbook import.
///
/// Counts are unsigned: a payload carrying negative numbers does not
/// deserialize and is reported as a bad response.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct ImportResult {
    pub total: u32,
    pub successful: u32,
    pub failed: u32,
}

impl ImportResult {
    pub fn new(total: u32, successful: u32, failed: u32) -> Self {
        Self {
            total,
            successful,
            failed,
        }
    }

    /// Notification text shown once the import has finished.
    pub fn summary(&self, locale: Locale) -> String {
        locale.summary(self)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_deserialize_server_payload() {
        let result: ImportResult =
            serde_json::from_str(r#"{"total":10,"successful":9,"failed":1}"#).unwrap();
        assert_eq!(result, ImportResult::new(10, 9, 1));
    }

    #[test]
    fn test_deserialize_ignores_unknown_fields() {
        let result: ImportResult = serde_json::from_str(
            r#"{"total":3,"successful":3,"failed":0,"failedExcelData":null}"#,
        )
        .unwrap();
        assert_eq!(result.total, 3);
    }

    #[test]
    fn test_deserialize_rejects_incomplete_payload() {
        assert!(serde_json::from_str::<ImportResult>(r#"{"total":3,"failed":0}"#).is_err());
        assert!(serde_json::from_str::<ImportResult>(r#"{"total":-1,"successful":0,"failed":0}"#).is_err());
        assert!(serde_json::from_str::<ImportResult>("Import done").is_err());
    }

    #[test]
    fn test_summary_keeps_counts_in_order() {
        let summary = ImportResult::new(10, 9, 1).summary(Locale::En);
        let total = summary.find("10").unwrap();
        let successful = summary.find("9 successful").unwrap();
        let failed = summary.find("1 failed").unwrap();
        assert!(total < successful && successful < failed);
    }
}
