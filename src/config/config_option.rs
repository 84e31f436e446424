/// A configuration value, with bounds on the value and a name to report the value with.
#[derive(Clone, Debug)]
pub struct ConfigOption<T> {
    pub name: &'static str,
    pub min: T,
    pub max: T,
    pub value: T,
}

impl<T: Clone + PartialOrd> ConfigOption<T> {
    pub fn min_max(&self) -> (T, T) {
        (self.min.clone(), self.max.clone())
    }

    /// Sets the value of the option, if the value is within bounds.
    /// Otherwise, the value is returned.
    pub fn set(&mut self, value: T) -> Result<(), T> {
        match self.min <= value && value <= self.max {
            true => {
                self.value = value;
                Ok(())
            }
            false => Err(value),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn bounds() {
        let mut option = ConfigOption {
            name: "test",
            min: 1_usize,
            max: 10,
            value: 5,
        };

        assert_eq!(option.set(0), Err(0));
        assert_eq!(option.set(11), Err(11));
        assert_eq!(option.value, 5);

        assert_eq!(option.set(10), Ok(()));
        assert_eq!(option.value, 10);
        assert_eq!(option.min_max(), (1, 10));
    }
}
