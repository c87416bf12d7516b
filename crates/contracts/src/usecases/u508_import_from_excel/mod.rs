pub mod form;
pub mod messages;
pub mod response;

pub use form::{FieldError, FieldErrorKind, ImportField, ImportForm};
pub use messages::{Locale, Texts};
pub use response::ImportResult;

use crate::usecases::common::UseCaseMetadata;

pub struct ImportFromExcel;

impl UseCaseMetadata for ImportFromExcel {
    fn usecase_index() -> &'static str {
        "u508"
    }

    fn usecase_name() -> &'static str {
        "import_from_excel"
    }

    fn display_name() -> &'static str {
        "Excel import"
    }
}
