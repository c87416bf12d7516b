/// UseCase identification shared by the client and the server
pub trait UseCaseMetadata {
    /// Index of the UseCase (e.g. "u508")
    fn usecase_index() -> &'static str;

    /// Technical name (e.g. "import_from_excel")
    fn usecase_name() -> &'static str;

    /// Name shown in the UI
    fn display_name() -> &'static str;

    fn description() -> &'static str {
        ""
    }

    /// Full name such as "u508_import_from_excel"
    fn full_name() -> String {
        format!("{}_{}", Self::usecase_index(), Self::usecase_name())
    }
}
