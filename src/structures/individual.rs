/*!
An individual, aka. a member of the domain of discourse.

An individual is a name made of (lower or upper case) ascii letters, other than `x` or `y`, as these are [reserved](crate::structures::variable) for variables.
Two individuals are the same if and only if their names are the same.

```rust
# use finite_fol::structures::individual::Individual;
let goku = Individual::new("goku").unwrap();
assert_eq!(goku.name(), "goku");
assert_eq!(goku, Individual::new("goku").unwrap());

assert!(Individual::new("x").is_err());
assert!(Individual::new("goku9").is_err());
```
*/

use crate::{
    builder::names,
    types::err::{self},
};

/// An individual.
#[derive(Clone, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Individual {
    name: String,
}

impl Individual {
    /// An individual with the given name, if the name is valid.
    pub fn new(name: impl Into<String>) -> Result<Self, err::BuildError> {
        let name = name.into();

        if names::is_reserved(&name) {
            return Err(err::BuildError::ReservedName(name));
        }

        if !names::is_name(&name) {
            return Err(err::BuildError::InvalidName(name));
        }

        Ok(Individual { name })
    }

    /// The name of the individual.
    pub fn name(&self) -> &str {
        &self.name
    }
}

impl std::fmt::Display for Individual {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.name)
    }
}
