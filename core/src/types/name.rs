use nutype::nutype;

pub const MAX_NAME_LENGTH: usize = 120;

/// User-assigned label of a saved code.
#[nutype(
    sanitize(trim),
    validate(not_empty, len_char_max = MAX_NAME_LENGTH),
    derive(
        Debug,
        Clone,
        PartialEq,
        Eq,
        AsRef,
        Deref,
        TryFrom,
        Into,
        Display,
        Serialize,
        Deserialize,
    )
)]
pub struct RecordName(String);

impl RecordName {
    /// Parses user input where blank text means "no name".
    pub fn parse_optional(input: &str) -> Result<Option<Self>, RecordNameError> {
        if input.trim().is_empty() {
            return Ok(None);
        }
        Self::try_new(input).map(Some)
    }
}
