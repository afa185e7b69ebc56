/// Identification of a UseCase, used to tag its log lines
pub trait UseCaseMetadata {
    /// Index (e.g. "u501")
    fn usecase_index() -> &'static str;

    /// Technical name (e.g. "send_contact_message")
    fn usecase_name() -> &'static str;

    /// Name shown in the UI
    fn display_name() -> &'static str;

    /// Full name of the form "u501_send_contact_message"
    fn full_name() -> String {
        format!("{}_{}", Self::usecase_index(), Self::usecase_name())
    }
}
