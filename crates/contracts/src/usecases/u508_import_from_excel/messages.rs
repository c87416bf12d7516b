//! User-facing texts of the import form.

use serde::{Deserialize, Serialize};

use super::form::{FieldError, ImportField};
use super::response::ImportResult;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Locale {
    #[default]
    En,
    Sv,
}

/// Static labels for one locale
#[derive(Debug)]
pub struct Texts {
    pub title: &'static str,
    pub description: &'static str,
    pub file_label: &'static str,
    pub email_label: &'static str,
    pub email_placeholder: &'static str,
    pub submit: &'static str,
    pub busy: &'static str,
    pub file_required: &'static str,
    pub email_required: &'static str,
}

static EN: Texts = Texts {
    title: "Import from Excel",
    description: "The result of the import is sent by email, failed rows attached as a workbook.",
    file_label: "Excel file",
    email_label: "Email address",
    email_placeholder: "name@example.com",
    submit: "Import",
    busy: "Importing...",
    file_required: "Select an Excel file to import",
    email_required: "Enter an email address to send the result to",
};

static SV: Texts = Texts {
    title: "Import från Excel",
    description: "Resultatet av importen skickas med e-post, misslyckade poster bifogas som Excel-fil.",
    file_label: "Excel-fil",
    email_label: "E-postadress",
    email_placeholder: "namn@exempel.se",
    submit: "Importera",
    busy: "Importerar...",
    file_required: "Välj en Excel-fil att importera",
    email_required: "Ange en e-postadress att skicka resultatet till",
};

impl Locale {
    /// Maps a language tag such as `sv`, `sv-SE` or `en_GB`.
    pub fn from_tag(tag: &str) -> Option<Self> {
        let primary = tag
            .trim()
            .split(['-', '_'])
            .next()
            .unwrap_or_default()
            .to_ascii_lowercase();
        match primary.as_str() {
            "en" => Some(Locale::En),
            "sv" => Some(Locale::Sv),
            _ => None,
        }
    }

    pub fn texts(self) -> &'static Texts {
        match self {
            Locale::En => &EN,
            Locale::Sv => &SV,
        }
    }

    pub fn summary(self, result: &ImportResult) -> String {
        match self {
            Locale::En => format!(
                "Import finished!\n\nTotal {} record(s):\n\n    {} successful\n    {} failed",
                result.total, result.successful, result.failed
            ),
            Locale::Sv => format!(
                "Import klar!\n\nTotalt {} post(er):\n\n    {} lyckad(e)\n    {} misslyckad(e)",
                result.total, result.successful, result.failed
            ),
        }
    }
}

impl Texts {
    /// One message per field, whichever rule failed.
    pub fn field_error(&self, error: &FieldError) -> &'static str {
        match error.field {
            ImportField::File => self.file_required,
            ImportField::Email => self.email_required,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::usecases::u508_import_from_excel::form::FieldErrorKind;

    #[test]
    fn test_from_tag() {
        assert_eq!(Locale::from_tag("sv"), Some(Locale::Sv));
        assert_eq!(Locale::from_tag("sv-SE"), Some(Locale::Sv));
        assert_eq!(Locale::from_tag(" EN_gb "), Some(Locale::En));
        assert_eq!(Locale::from_tag("de"), None);
        assert_eq!(Locale::from_tag(""), None);
    }

    #[test]
    fn test_field_error_messages() {
        let texts = Locale::En.texts();
        let file = FieldError::new(ImportField::File, FieldErrorKind::Required);
        let email = FieldError::new(ImportField::Email, FieldErrorKind::InvalidEmail);
        assert_eq!(texts.field_error(&file), "Select an Excel file to import");
        assert_eq!(
            texts.field_error(&email),
            "Enter an email address to send the result to"
        );
        assert_eq!(
            Locale::Sv.texts().field_error(&file),
            "Välj en Excel-fil att importera"
        );
    }

    #[test]
    fn test_swedish_summary() {
        let summary = Locale::Sv.summary(&ImportResult::new(4, 3, 1));
        assert!(summary.starts_with("Import klar!"));
        assert!(summary.contains("Totalt 4 post(er)"));
        assert!(summary.contains("3 lyckad(e)"));
        assert!(summary.contains("1 misslyckad(e)"));
    }
}
