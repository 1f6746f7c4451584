//! Decimal digit representation.

use std::fmt::{self, Display};

/// A decimal digit in the range 0-9.
///
/// Digit keys can only ever produce one of these values, so the calculator
/// never has to validate the digit it is asked to append.
///
/// # Examples
///
/// ```
/// use calculator_core::Digit;
///
/// let digit = Digit::D7;
/// assert_eq!(digit.value(), 7);
/// assert_eq!(Digit::from_value(0), Digit::D0);
///
/// for digit in Digit::ALL {
///     assert!(digit.value() <= 9);
/// }
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[repr(u8)]
pub enum Digit {
    /// The digit 0.
    D0 = 0,
    /// The digit 1.
    D1 = 1,
    /// The digit 2.
    D2 = 2,
    /// The digit 3.
    D3 = 3,
    /// The digit 4.
    D4 = 4,
    /// The digit 5.
    D5 = 5,
    /// The digit 6.
    D6 = 6,
    /// The digit 7.
    D7 = 7,
    /// The digit 8.
    D8 = 8,
    /// The digit 9.
    D9 = 9,
}

impl Digit {
    /// Array containing all digits from 0 to 9, in ascending order.
    pub const ALL: [Self; 10] = [
        Self::D0,
        Self::D1,
        Self::D2,
        Self::D3,
        Self::D4,
        Self::D5,
        Self::D6,
        Self::D7,
        Self::D8,
        Self::D9,
    ];

    /// Creates a digit from a u8 value in the range 0-9.
    ///
    /// # Panics
    ///
    /// Panics if `value` is greater than 9.
    ///
    /// ```should_panic
    /// use calculator_core::Digit;
    ///
    /// let _ = Digit::from_value(10);
    /// ```
    #[must_use]
    pub fn from_value(value: u8) -> Self {
        Self::try_from_value(value).unwrap_or_else(|| panic!("Invalid digit value: {value}"))
    }

    /// Creates a digit from a u8 value, returning `None` if it is greater than 9.
    #[must_use]
    pub const fn try_from_value(value: u8) -> Option<Self> {
        let digit = match value {
            0 => Self::D0,
            1 => Self::D1,
            2 => Self::D2,
            3 => Self::D3,
            4 => Self::D4,
            5 => Self::D5,
            6 => Self::D6,
            7 => Self::D7,
            8 => Self::D8,
            9 => Self::D9,
            _ => return None,
        };
        Some(digit)
    }

    /// Creates a digit from an ASCII decimal character.
    ///
    /// ```
    /// use calculator_core::Digit;
    ///
    /// assert_eq!(Digit::from_char('4'), Some(Digit::D4));
    /// assert_eq!(Digit::from_char('x'), None);
    /// ```
    #[must_use]
    pub fn from_char(ch: char) -> Option<Self> {
        let value = ch.to_digit(10)?;
        u8::try_from(value).ok().and_then(Self::try_from_value)
    }

    /// Returns the numeric value of this digit (0-9).
    #[must_use]
    pub const fn value(&self) -> u8 {
        *self as u8
    }

    /// Returns the digit as a static string, suitable for a button caption.
    #[must_use]
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::D0 => "0",
            Self::D1 => "1",
            Self::D2 => "2",
            Self::D3 => "3",
            Self::D4 => "4",
            Self::D5 => "5",
            Self::D6 => "6",
            Self::D7 => "7",
            Self::D8 => "8",
            Self::D9 => "9",
        }
    }
}

impl Display for Digit {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl From<Digit> for i32 {
    fn from(digit: Digit) -> i32 {
        i32::from(digit.value())
    }
}
