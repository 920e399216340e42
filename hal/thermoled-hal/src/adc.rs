//! Analog input abstraction

/// Single-channel ADC
pub trait AdcReader {
    /// Perform one conversion and return the raw count
    #[allow(clippy::result_unit_err)]
    fn read(&mut self) -> Result<u16, ()>;
}

impl<T: AdcReader + ?Sized> AdcReader for &mut T {
    fn read(&mut self) -> Result<u16, ()> {
        (**self).read()
    }
}
