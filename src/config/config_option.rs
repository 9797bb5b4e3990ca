use crate::types::err::{self};

/// A configurable value, together with the bounds the value must respect.
#[derive(Clone, Debug)]
pub struct ConfigOption<T> {
    pub name: &'static str,
    pub min: T,
    pub max: T,
    pub value: T,
}

impl<T: Clone + PartialOrd> ConfigOption<T> {
    /// Sets the value of the option, so long as the value is within the bounds of the option.
    pub fn set(&mut self, value: T) -> Result<(), err::ContextError> {
        if value < self.min || self.max < value {
            log::warn!("Value for {} outside of bounds", self.name);
            return Err(err::ContextError::ConfigBounds(self.name));
        }
        self.value = value;
        Ok(())
    }
}
