/// A configurable value, with the range of values permitted.
#[derive(Clone, Debug)]
pub struct ConfigOption<T> {
    /// The name of the option, as used by the cli.
    pub name: &'static str,

    /// The least permitted value.
    pub min: T,

    /// The greatest permitted value.
    pub max: T,

    /// The current value.
    pub value: T,
}

impl<T: Clone + PartialOrd> ConfigOption<T> {
    pub fn min_max(&self) -> (T, T) {
        (self.min.clone(), self.max.clone())
    }

    /// Sets the value of the option to `value`, if `value` is within the permitted range.
    ///
    /// Returns true if the value was set, and false otherwise.
    pub fn set(&mut self, value: T) -> bool {
        match self.min <= value && value <= self.max {
            true => {
                self.value = value;
                true
            }
            false => false,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn bounded_set() {
        let mut option = ConfigOption {
            name: "test",
            min: 0.0,
            max: 1.0,
            value: 0.5,
        };
        assert!(!option.set(1.5));
        assert_eq!(option.value, 0.5);
        assert!(option.set(1.0));
        assert_eq!(option.value, 1.0);
    }
}
