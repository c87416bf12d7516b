use validator::ValidateEmail;

/// Multipart field carrying the workbook
pub const FILE_FIELD: &str = "file";
/// Multipart field carrying the recipient of the result mail
pub const EMAIL_FIELD: &str = "email";

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ImportField {
    File,
    Email,
}

impl ImportField {
    pub fn name(self) -> &'static str {
        match self {
            ImportField::File => FILE_FIELD,
            ImportField::Email => EMAIL_FIELD,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FieldErrorKind {
    Required,
    InvalidEmail,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FieldError {
    pub field: ImportField,
    pub kind: FieldErrorKind,
}

impl FieldError {
    pub fn new(field: ImportField, kind: FieldErrorKind) -> Self {
        Self { field, kind }
    }
}

/// Snapshot of the import form taken when the user submits it.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ImportForm {
    /// Name of the selected workbook, `None` when nothing is selected
    pub file_name: Option<String>,
    pub email: String,
}

impl ImportForm {
    pub fn new(file_name: Option<String>, email: impl Into<String>) -> Self {
        let file_name = file_name.filter(|name| !name.trim().is_empty());
        let email = email.into().trim().to_string();
        Self { file_name, email }
    }

    /// Checks both fields and reports every violation, file first.
    pub fn validate(&self) -> Result<(), Vec<FieldError>> {
        let mut errors = Vec::new();

        if self.file_name.is_none() {
            errors.push(FieldError::new(ImportField::File, FieldErrorKind::Required));
        }

        if self.email.is_empty() {
            errors.push(FieldError::new(ImportField::Email, FieldErrorKind::Required));
        } else if !self.email.validate_email() {
            errors.push(FieldError::new(
                ImportField::Email,
                FieldErrorKind::InvalidEmail,
            ));
        }

        if errors.is_empty() {
            Ok(())
        } else {
            Err(errors)
        }
    }
}
