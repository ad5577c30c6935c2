/// The eight NDEF type name format values, as delivered by the platform.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash, uniffi::Enum)]
pub enum TypeNameFormat {
    Empty,
    WellKnown,
    Mime,
    AbsoluteUri,
    External,
    Unknown,
    Unchanged,
    Reserved,
}

#[derive(Debug, Copy, Clone, PartialEq, Eq, thiserror::Error, uniffi::Error)]
pub enum TypeNameFormatError {
    #[error("type name format code out of range: {0}")]
    OutOfRange(u8),
}

impl TryFrom<u8> for TypeNameFormat {
    type Error = TypeNameFormatError;

    /// The type name format is a 3 bit field, anything above 7 is not a TNF code.
    fn try_from(code: u8) -> Result<Self, Self::Error> {
        let tnf = match code {
            0 => Self::Empty,
            1 => Self::WellKnown,
            2 => Self::Mime,
            3 => Self::AbsoluteUri,
            4 => Self::External,
            5 => Self::Unknown,
            6 => Self::Unchanged,
            7 => Self::Reserved,
            other => return Err(TypeNameFormatError::OutOfRange(other)),
        };

        Ok(tnf)
    }
}

#[uniffi::export]
fn type_name_format_from_code(code: u8) -> Result<TypeNameFormat, TypeNameFormatError> {
    TypeNameFormat::try_from(code)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_all_codes_round_trip() {
        let expected = [
            TypeNameFormat::Empty,
            TypeNameFormat::WellKnown,
            TypeNameFormat::Mime,
            TypeNameFormat::AbsoluteUri,
            TypeNameFormat::External,
            TypeNameFormat::Unknown,
            TypeNameFormat::Unchanged,
            TypeNameFormat::Reserved,
        ];

        for (code, tnf) in expected.into_iter().enumerate() {
            assert_eq!(TypeNameFormat::try_from(code as u8), Ok(tnf));
        }
    }

    #[test]
    fn test_out_of_range_code() {
        assert_eq!(
            TypeNameFormat::try_from(8),
            Err(TypeNameFormatError::OutOfRange(8))
        );

        assert_eq!(
            TypeNameFormat::try_from(255),
            Err(TypeNameFormatError::OutOfRange(255))
        );
    }
}
