/*!
A binding, aka. a (partial, injective) map from declared variables to individuals.

A binding is made of an ordered collection of declared [variables](crate::structures::variable), each of which is either unbound or bound to some [individual](crate::structures::individual).
No individual is bound to two variables at once.

Bindings are used to instantiate a [template formula](crate::structures::formula::Formula) as a [ground formula](crate::structures::formula::GroundFormula), and are built up and torn down variable by variable during the [enumeration](crate::procedures::enumerate) of bindings.

The typical lifecycle of a binding is:
- Declare variables with [declare_all](Binding::declare_all).
- Bind individuals with [bind_next](Binding::bind_next), which binds the first unbound variable.
- Release individuals with [release_individual](Binding::release_individual), to backtrack.

```rust
# use finite_fol::structures::binding::Binding;
# use finite_fol::structures::individual::Individual;
let goku = Individual::new("goku").unwrap();
let gohan = Individual::new("gohan").unwrap();

let mut binding = Binding::default();
assert!(binding.declare_all(['x', 'y']).is_ok());

assert!(binding.bind_next(goku.clone()).is_ok());
assert!(!binding.is_complete());
assert_eq!(binding.value_of('x'), Some(Some(&goku)));

// No individual is bound twice.
assert!(binding.bind_next(goku.clone()).is_err());

assert!(binding.bind_next(gohan).is_ok());
assert!(binding.is_complete());

assert!(binding.release_individual(&goku).is_ok());
assert_eq!(binding.value_of('x'), Some(None));
```
*/

use crate::{
    structures::{individual::Individual, variable::Variable},
    types::err::{self},
};

/// A binding.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct Binding {
    slots: Vec<(Variable, Option<Individual>)>,
}

impl Binding {
    /// Declares a variable, initially unbound.
    pub fn declare(&mut self, variable: Variable) -> Result<(), err::BindingError> {
        if self.has_variable(variable) {
            return Err(err::BindingError::DuplicateVariable(variable));
        }
        self.slots.push((variable, None));
        Ok(())
    }

    /// Declares each variable, in order.
    ///
    /// At least one variable must be given, though on error some variables may have been declared.
    pub fn declare_all(
        &mut self,
        variables: impl IntoIterator<Item = Variable>,
    ) -> Result<(), err::BindingError> {
        let mut declared = false;
        for variable in variables {
            self.declare(variable)?;
            declared = true;
        }

        match declared {
            true => Ok(()),
            false => Err(err::BindingError::NoVariables),
        }
    }

    /// Removes a declared variable, together with any individual bound to the variable.
    pub fn undeclare(&mut self, variable: Variable) -> Result<(), err::BindingError> {
        let index = self.index_of(variable)?;
        self.slots.remove(index);
        Ok(())
    }

    /// Binds an unbound declared variable to an individual not bound to any other variable.
    pub fn bind(&mut self, variable: Variable, individual: Individual) -> Result<(), err::BindingError> {
        let index = self.index_of(variable)?;

        if self.slots[index].1.is_some() {
            return Err(err::BindingError::AlreadyBound(variable));
        }

        if self.has_individual(&individual) {
            return Err(err::BindingError::IndividualInUse(individual.name().to_string()));
        }

        self.slots[index].1 = Some(individual);
        Ok(())
    }

    /// Binds the first unbound variable (in order of declaration) to an individual not bound to any other variable.
    pub fn bind_next(&mut self, individual: Individual) -> Result<(), err::BindingError> {
        if self.has_individual(&individual) {
            return Err(err::BindingError::IndividualInUse(individual.name().to_string()));
        }

        match self.slots.iter_mut().find(|(_, bound)| bound.is_none()) {
            Some((variable, slot)) => {
                log::trace!(target: crate::misc::log::targets::BINDING, "{variable} ↦ {individual}");
                *slot = Some(individual);
                Ok(())
            }
            None => Err(err::BindingError::Complete),
        }
    }

    /// Unbinds a declared variable, returning the individual the variable was bound to, if any.
    pub fn release(&mut self, variable: Variable) -> Result<Option<Individual>, err::BindingError> {
        let index = self.index_of(variable)?;
        Ok(self.slots[index].1.take())
    }

    /// Unbinds whichever variable the individual is bound to.
    pub fn release_individual(&mut self, individual: &Individual) -> Result<(), err::BindingError> {
        match self
            .slots
            .iter_mut()
            .find(|(_, bound)| bound.as_ref() == Some(individual))
        {
            Some((_, slot)) => {
                *slot = None;
                Ok(())
            }
            None => Err(err::BindingError::IndividualMissing(individual.name().to_string())),
        }
    }

    /// The value of a variable on the binding:
    /// - None, if the variable is not declared.
    /// - Some(None), if the variable is declared but unbound.
    /// - Some(Some(*i*)), if the variable is bound to *i*.
    pub fn value_of(&self, variable: Variable) -> Option<Option<&Individual>> {
        self.slots
            .iter()
            .find(|(declared, _)| *declared == variable)
            .map(|(_, bound)| bound.as_ref())
    }

    /// Whether the declared variable is bound.
    pub fn is_bound(&self, variable: Variable) -> Result<bool, err::BindingError> {
        let index = self.index_of(variable)?;
        Ok(self.slots[index].1.is_some())
    }

    pub fn has_variable(&self, variable: Variable) -> bool {
        self.slots.iter().any(|(declared, _)| *declared == variable)
    }

    pub fn has_individual(&self, individual: &Individual) -> bool {
        self.slots
            .iter()
            .any(|(_, bound)| bound.as_ref() == Some(individual))
    }

    /// Whether every declared variable is bound.
    ///
    /// A binding without any variables is complete.
    pub fn is_complete(&self) -> bool {
        self.slots.iter().all(|(_, bound)| bound.is_some())
    }

    /// The declared variables, in order of declaration.
    pub fn variables(&self) -> impl Iterator<Item = Variable> + '_ {
        self.slots.iter().map(|(variable, _)| *variable)
    }

    /// The (variable, individual) pairs of bound variables, in order of declaration.
    pub fn bound_pairs(&self) -> impl Iterator<Item = (Variable, &Individual)> {
        self.slots
            .iter()
            .filter_map(|(variable, bound)| bound.as_ref().map(|individual| (*variable, individual)))
    }

    fn index_of(&self, variable: Variable) -> Result<usize, err::BindingError> {
        self.slots
            .iter()
            .position(|(declared, _)| *declared == variable)
            .ok_or(err::BindingError::UndeclaredVariable(variable))
    }
}

impl std::fmt::Display for Binding {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{{")?;
        for (index, (variable, bound)) in self.slots.iter().enumerate() {
            if index > 0 {
                write!(f, ", ")?;
            }
            match bound {
                Some(individual) => write!(f, "{variable} ↦ {individual}")?,
                None => write!(f, "{variable} ↦ _")?,
            }
        }
        write!(f, "}}")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn individual(name: &str) -> Individual {
        Individual::new(name).unwrap()
    }

    #[test]
    fn declarations() {
        let mut binding = Binding::default();
        assert_eq!(
            binding.declare_all(Vec::default()),
            Err(err::BindingError::NoVariables)
        );

        assert!(binding.declare('x').is_ok());
        assert_eq!(
            binding.declare('x'),
            Err(err::BindingError::DuplicateVariable('x'))
        );

        assert!(binding.declare_all(['y', 'z']).is_ok());
        assert_eq!(binding.variables().collect::<Vec<_>>(), vec!['x', 'y', 'z']);

        assert!(binding.undeclare('y').is_ok());
        assert_eq!(binding.variables().collect::<Vec<_>>(), vec!['x', 'z']);
        assert_eq!(
            binding.undeclare('y'),
            Err(err::BindingError::UndeclaredVariable('y'))
        );
    }

    #[test]
    fn lookups_on_undeclared_variables() {
        let mut binding = Binding::default();
        assert_eq!(binding.value_of('x'), None);
        assert_eq!(
            binding.bind('x', individual("A")),
            Err(err::BindingError::UndeclaredVariable('x'))
        );
        assert_eq!(
            binding.is_bound('x'),
            Err(err::BindingError::UndeclaredVariable('x'))
        );
        assert_eq!(
            binding.release('x'),
            Err(err::BindingError::UndeclaredVariable('x'))
        );
    }

    #[test]
    fn bind_and_bind_next() {
        let mut binding = Binding::default();
        assert!(binding.declare_all(['x', 'y', 'z']).is_ok());

        assert!(binding.bind('x', individual("A")).is_ok());
        assert!(binding.bind('y', individual("B")).is_ok());
        assert_eq!(binding.is_bound('x'), Ok(true));
        assert_eq!(binding.is_bound('z'), Ok(false));
        assert!(!binding.is_complete());

        assert_eq!(
            binding.bind('x', individual("C")),
            Err(err::BindingError::AlreadyBound('x'))
        );
        assert_eq!(
            binding.bind('z', individual("A")),
            Err(err::BindingError::IndividualInUse("A".to_string()))
        );

        assert!(binding.bind_next(individual("C")).is_ok());
        assert_eq!(binding.value_of('z'), Some(Some(&individual("C"))));
        assert!(binding.is_complete());

        assert_eq!(
            binding.bind_next(individual("D")),
            Err(err::BindingError::Complete)
        );
    }

    #[test]
    fn releases() {
        let mut binding = Binding::default();
        assert!(binding.declare_all(['x', 'y']).is_ok());
        assert!(binding.bind('x', individual("A")).is_ok());
        assert!(binding.bind('y', individual("B")).is_ok());

        assert_eq!(binding.release('y'), Ok(Some(individual("B"))));
        assert!(!binding.is_complete());
        assert_eq!(binding.value_of('y'), Some(None));

        assert!(binding.release_individual(&individual("A")).is_ok());
        assert!(!binding.has_individual(&individual("A")));
        assert_eq!(
            binding.release_individual(&individual("A")),
            Err(err::BindingError::IndividualMissing("A".to_string()))
        );
    }

    #[test]
    fn copies_are_independent() {
        let mut binding = Binding::default();
        assert!(binding.declare_all(['x', 'y']).is_ok());
        assert!(binding.bind('x', individual("A")).is_ok());

        let copy = binding.clone();
        assert!(binding.release('x').is_ok());

        assert_eq!(copy.value_of('x'), Some(Some(&individual("A"))));
        assert_eq!(copy.to_string(), "{x ↦ A, y ↦ _}");
    }
}
