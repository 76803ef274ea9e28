//! Pure text-field validation for profile and archive names.
//!
//! No I/O: the duplicate-check states ([`FieldValidation::Available`],
//! [`FieldValidation::AlreadyUsed`]) are only ever assigned from a server
//! response inside a reducer.

/// Which text field is being validated. Archive names additionally allow
/// spaces.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Field {
    Nickname,
    ArchiveName,
}

/// Classification of a text field's contents.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum FieldValidation {
    #[default]
    Blank,
    /// Contains characters outside Hangul syllables / ASCII alphanumerics
    /// (plus spaces, for archive names).
    DisallowedCharacters,
    /// Weighted length exceeds 16.
    TooLong,
    /// Locally valid; a server-side duplicate check is still required.
    ReadyForDuplicateCheck,
    /// Duplicate check confirmed the name is free.
    Available,
    /// Duplicate check found the name taken.
    AlreadyUsed,
}

impl FieldValidation {
    /// Whether this field currently blocks the next-step control.
    pub fn blocks_advance(self) -> bool {
        self != FieldValidation::Available
    }
}

const MAX_WEIGHTED_LEN: usize = 16;

/// Classify raw input for `field`. Pure and deterministic.
///
/// Precedence: blank, then disallowed characters, then length. Never returns
/// a duplicate-check outcome.
pub fn classify(field: Field, input: &str) -> FieldValidation {
    if input.is_empty() {
        return FieldValidation::Blank;
    }
    if !input.chars().all(|c| is_allowed(field, c)) {
        return FieldValidation::DisallowedCharacters;
    }
    if weighted_len(input) > MAX_WEIGHTED_LEN {
        return FieldValidation::TooLong;
    }
    FieldValidation::ReadyForDuplicateCheck
}

/// Character count where multi-byte characters (Hangul etc.) weigh double.
pub fn weighted_len(input: &str) -> usize {
    input
        .chars()
        .map(|c| if c.len_utf8() > 1 { 2 } else { 1 })
        .sum()
}

fn is_allowed(field: Field, c: char) -> bool {
    if c.is_ascii_alphanumeric() || ('가'..='힣').contains(&c) {
        return true;
    }
    field == Field::ArchiveName && c == ' '
}
