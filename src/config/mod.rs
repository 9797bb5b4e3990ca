/*!
Configuration of a context.

All configuration for a context is contained within the [Config] structure, and each configurable value is a [ConfigOption], which carries the bounds of the value alongside the value.

The free procedures ([quantifiers](crate::procedures::quantifiers) and [modus ponens](crate::procedures::modus_ponens)) take no configuration.
Instead, a [context](crate::context) uses the configuration to decide what it accepts before calling a procedure.

```rust
# use finite_fol::config::Config;
let mut config = Config::default();
assert!(config.population_limit.set(8).is_ok());
assert!(config.population_limit.set(0).is_err());
```
*/

mod config_option;
pub use config_option::ConfigOption;

/// The representation of a limit on the count of individuals.
pub type PopulationLimit = usize;

/// The primary configuration structure.
#[derive(Clone, Debug)]
pub struct Config {
    /// The maximum count of individuals a context will accept.
    ///
    /// Enumeration of bindings is bounded by the count of injective maps from variables to individuals, and so grows quickly with the population.
    pub population_limit: ConfigOption<PopulationLimit>,

    /// Require sentences and axioms added to a context to use known predicates and individuals.
    pub strict_sentences: ConfigOption<bool>,
}

impl Default for Config {
    fn default() -> Self {
        Config {
            population_limit: ConfigOption {
                name: "population_limit",
                min: 1,
                max: PopulationLimit::MAX,
                value: 64,
            },

            strict_sentences: ConfigOption {
                name: "strict_sentences",
                min: false,
                max: true,
                value: true,
            },
        }
    }
}
