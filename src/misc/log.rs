/*!
Miscelanous items related to [logging](log).

Bindings, quantifier checks, rounds of the reasoner, and changes to the truth table are logged under the targets below.
Filtering on a target (e.g. `RUST_LOG=reasoner=trace`) follows a single area.

Note, no log implementation is provided.
For more details, see [log].
*/

/// Targets to be used within a [log]! macro.
pub mod targets {
    /// Logs related to [bindings](crate::structures::binding) and their [enumeration](crate::procedures::enumerate)
    pub const BINDING: &str = "binding";

    /// Logs related to [quantifiers](crate::procedures::quantifiers)
    pub const QUANTIFIER: &str = "quantifier";

    /// Logs related to [modus ponens](crate::procedures::modus_ponens)
    pub const REASONER: &str = "reasoner";

    /// Logs related to the [truth table](crate::db::truth_table)
    pub const TRUTH_TABLE: &str = "truth_table";

    /// Logs related to a [context](crate::context)
    pub const CONTEXT: &str = "context";
}
