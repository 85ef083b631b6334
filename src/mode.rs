use crate::converter::{self, ConversionError};

/// Direction of the conversion currently offered to the user.
#[derive(Copy, Clone, PartialEq, Eq, Debug, Default)]
pub enum ConversionMode {
    #[default]
    DecToBin,
    BinToDec,
}

impl ConversionMode {
    pub const ALL: [Self; 2] = [Self::DecToBin, Self::BinToDec];

    pub const fn flipped(self) -> Self {
        match self {
            Self::DecToBin => Self::BinToDec,
            Self::BinToDec => Self::DecToBin,
        }
    }

    pub const fn title(self) -> &'static str {
        match self {
            Self::DecToBin => "Decimal to Binary Converter",
            Self::BinToDec => "Binary to Decimal Converter",
        }
    }

    pub const fn prompt(self) -> &'static str {
        match self {
            Self::DecToBin => "Enter a decimal number",
            Self::BinToDec => "Enter a binary number",
        }
    }

    pub const fn result_label(self) -> &'static str {
        match self {
            Self::DecToBin => "converted to binary is:",
            Self::BinToDec => "converted to decimal is:",
        }
    }

    pub const fn menu_label(self) -> &'static str {
        match self {
            Self::DecToBin => "decimal -> binary",
            Self::BinToDec => "binary  -> decimal",
        }
    }

    pub fn convert(self, input: &str) -> Result<String, ConversionError> {
        match self {
            Self::DecToBin => converter::decimal_to_binary(input),
            Self::BinToDec => converter::binary_to_decimal(input),
        }
    }
}
