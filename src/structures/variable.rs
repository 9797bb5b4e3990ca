/*!
(The representation of) a variable.

A variable is a single lowercase ascii letter, e.g. `x`, `y`, or `z`.
Variables occur only in the slots of a [predicate](crate::structures::predicate) used as part of a [formula](crate::structures::formula), and are replaced by individuals when the formula is bound to a [binding](crate::structures::binding).

The variables `x` and `y` are the default variables of a predicate, and for this reason are reserved --- no [individual](crate::structures::individual) may be named `x` or `y`.

```rust
# use finite_fol::structures::variable::{is_variable, Variable};
let z: Variable = 'z';
assert!(is_variable(z));
assert!(!is_variable('Z'));
```
*/

/// A variable.
pub type Variable = char;

/// The default variable of the first slot of a predicate.
pub const FIRST_VARIABLE: Variable = 'x';

/// The default variable of the second slot of a predicate.
pub const SECOND_VARIABLE: Variable = 'y';

/// Whether the char is a variable, i.e. a lowercase ascii letter.
pub fn is_variable(variable: Variable) -> bool {
    variable.is_ascii_lowercase()
}
