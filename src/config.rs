use crate::ListError;

/// The default initial capacity and the default floor capacity of a list.
pub const DEFAULT_FLOOR: usize = 10;

/// Capacity settings of an [`ArrayList`] buffer.
///
/// The `initial_capacity` is the number of slots allocated when the list is
/// created. The `floor` is the minimum capacity the buffer is ever shrunk to;
/// a buffer created below the floor stays there until it grows.
///
/// # Examples
///
/// ```
/// use array_list::{ArrayList, BufferConfig};
///
/// let config = BufferConfig::new().initial_capacity(4).floor(4);
/// let list: ArrayList<u8> = ArrayList::with_config(config).unwrap();
/// assert_eq!(list.capacity(), 4);
/// assert_eq!(list.floor(), 4);
///
/// assert!(BufferConfig::new().floor(0).validate().is_err());
/// ```
///
/// [`ArrayList`]: crate::ArrayList
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct BufferConfig {
    pub(crate) initial_capacity: usize,
    pub(crate) floor: usize,
}

impl BufferConfig {
    /// Create the default config: capacity and floor both [`DEFAULT_FLOOR`].
    pub const fn new() -> Self {
        Self {
            initial_capacity: DEFAULT_FLOOR,
            floor: DEFAULT_FLOOR,
        }
    }

    /// Set the number of slots allocated up front.
    pub const fn initial_capacity(mut self, initial_capacity: usize) -> Self {
        self.initial_capacity = initial_capacity;
        self
    }

    /// Set the minimum capacity the buffer shrinks to.
    pub const fn floor(mut self, floor: usize) -> Self {
        self.floor = floor;
        self
    }

    /// Check that both capacities are positive.
    pub fn validate(&self) -> Result<(), ListError> {
        if self.initial_capacity == 0 {
            return Err(ListError::IllegalArgument(
                "the initial capacity must be positive",
            ));
        }
        if self.floor == 0 {
            return Err(ListError::IllegalArgument(
                "the floor capacity must be positive",
            ));
        }
        Ok(())
    }
}

impl Default for BufferConfig {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::{BufferConfig, DEFAULT_FLOOR};
    use crate::ListError;

    #[test]
    fn config_default() {
        let config = BufferConfig::default();
        assert_eq!(config.initial_capacity, DEFAULT_FLOOR);
        assert_eq!(config.floor, DEFAULT_FLOOR);
        assert_eq!(config.validate(), Ok(()));
    }

    #[test]
    fn config_rejects_zero() {
        assert!(matches!(
            BufferConfig::new().initial_capacity(0).validate(),
            Err(ListError::IllegalArgument(_))
        ));
        assert!(matches!(
            BufferConfig::new().floor(0).validate(),
            Err(ListError::IllegalArgument(_))
        ));
        assert_eq!(BufferConfig::new().initial_capacity(1).floor(1).validate(), Ok(()));
    }
}
