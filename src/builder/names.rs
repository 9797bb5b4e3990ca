/*!
Validation of names and of the textual forms of predicates and sentences.

- A *name* is a non-empty string of ascii letters.
- An *individual name* is a name other than `x` or `y`.
- A *predicate form* is an optional `~` (for reflexivity), followed by a non-empty string of ascii letters or digits, optionally followed by either `[v]` or `[v,w]` for variables `v` and `w`.
- A *sentence form* is an optional `~` (for reflexivity), followed by a non-empty string of ascii letters or digits, optionally followed by either `[a]` or `[a,b]` for names `a` and `b`.
  The `~` is only permitted with two names, so the canonical form of any sentence is a sentence form.

Note, predicate and sentence forms permit digits in the name of the predicate, while [predicates](crate::structures::predicate::Predicate) do not.
So, some well-formed inputs fail to build.

```rust
# use finite_fol::builder::names;
assert!(names::is_predicate_form("~Rivals[x,y]"));
assert!(names::is_predicate_form("Saiyan[x]"));
assert!(!names::is_predicate_form("Saiyan[goku]"));

assert!(names::is_sentence_form("Saiyan[goku]"));
assert!(names::is_sentence_form("~Rivals[goku,vegeta]"));
assert!(!names::is_sentence_form("~Saiyan[goku]"));
```
*/

use crate::structures::variable::{is_variable, FIRST_VARIABLE, SECOND_VARIABLE};

/// Whether the string is a name, i.e. non-empty and made only of ascii letters.
pub fn is_name(name: &str) -> bool {
    !name.is_empty() && name.chars().all(|c| c.is_ascii_alphabetic())
}

/// Whether the string is a name which is not reserved for a variable.
pub fn is_individual_name(name: &str) -> bool {
    is_name(name) && !is_reserved(name)
}

/// Whether the string is one of the reserved variables.
pub(crate) fn is_reserved(name: &str) -> bool {
    let mut chars = name.chars();
    match (chars.next(), chars.next()) {
        (Some(c), None) => c == FIRST_VARIABLE || c == SECOND_VARIABLE,
        _ => false,
    }
}

/// Whether the string is the textual form of a predicate.
pub fn is_predicate_form(input: &str) -> bool {
    match split_form(input) {
        Some(form) => form.arguments.iter().all(|argument| {
            let mut chars = argument.chars();
            matches!((chars.next(), chars.next()), (Some(c), None) if is_variable(c))
        }),
        None => false,
    }
}

/// Whether the string is the textual form of a sentence.
pub fn is_sentence_form(input: &str) -> bool {
    match split_form(input) {
        Some(form) => {
            (!form.reflexive || form.arguments.len() == 2)
                && form.arguments.iter().all(|argument| is_name(argument))
        }
        None => false,
    }
}

/// The parts of a textual form: `~name[a,b]`.
pub(crate) struct Form<'i> {
    pub reflexive: bool,
    pub name: &'i str,
    pub arguments: Vec<&'i str>,
}

/// Splits a textual form into parts, if the form has the shape `~?name([a]|[a,b])?` with a non-empty alphanumeric name and non-empty arguments.
///
/// The arguments themselves are not checked.
pub(crate) fn split_form(input: &str) -> Option<Form> {
    let (reflexive, input) = match input.strip_prefix('~') {
        Some(rest) => (true, rest),
        None => (false, input),
    };

    let (name, arguments) = match input.split_once('[') {
        None => (input, Vec::default()),
        Some((name, rest)) => {
            let inner = rest.strip_suffix(']')?;
            if inner.contains(['[', ']']) {
                return None;
            }
            let arguments = inner.split(',').collect::<Vec<_>>();
            if arguments.len() > 2 || arguments.iter().any(|argument| argument.is_empty()) {
                return None;
            }
            (name, arguments)
        }
    };

    if name.is_empty() || !name.chars().all(|c| c.is_ascii_alphanumeric()) {
        return None;
    }

    Some(Form {
        reflexive,
        name,
        arguments,
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn names() {
        assert!(is_name("goku"));
        assert!(is_name("Goku"));
        assert!(!is_name(""));
        assert!(!is_name("goku9"));
        assert!(!is_name("go-ku"));

        assert!(is_individual_name("z"));
        assert!(!is_individual_name("x"));
        assert!(!is_individual_name("y"));
        assert!(is_individual_name("xy"));
    }

    #[test]
    fn predicate_forms() {
        for form in ["A", "A1", "~A", "A[x]", "A[z]", "A[x,y]", "~A[z,w]"] {
            assert!(is_predicate_form(form), "{form}");
        }

        for form in [
            "", "~", "[x]", "A[]", "A[X]", "A[xy]", "A[x,]", "A[x,y,z]", "A[x", "A[x]]", "A x",
            "~~A",
        ] {
            assert!(!is_predicate_form(form), "{form}");
        }
    }

    #[test]
    fn sentence_forms() {
        for form in ["A", "A[goku]", "A[goku,vegeta]", "Son[Goku,Gohan]", "~A[goku,vegeta]"] {
            assert!(is_sentence_form(form), "{form}");
        }

        for form in ["", "~A", "~A[goku]", "A[]", "A[goku9]", "A[goku,]", "A[a,b,c]", "A[goku"] {
            assert!(!is_sentence_form(form), "{form}");
        }
    }
}
