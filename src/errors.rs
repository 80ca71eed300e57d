#[cfg(feature = "defmt")]
use defmt::Format;

/// Represents potential errors when interacting with the BQ25672 chip.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(Format))]
pub enum Error<E> {
    /// The transport reported a failure while completing a transaction.
    Bus(E),
    /// The requested bytes did not become available within the configured timeout.
    Timeout,
    /// The value does not fit into the bit-field it was written to.
    OutOfRange,
    /// The field is a status or ADC result and cannot be written.
    ReadOnly,
    /// One or more flag registers could not be read during a flag refresh.
    FlagRefresh {
        /// Bit `i` is set when flag register index `i` failed. Those entries keep
        /// their previous snapshot value.
        failed: u8,
    },
    /// A raw code read from the chip has no typed meaning.
    InvalidData,
}

impl<E> Error<E> {
    /// Returns `true` if the error was raised before any bus activity took place.
    pub fn is_rejected_locally(&self) -> bool {
        matches!(self, Error::OutOfRange | Error::ReadOnly)
    }
}
