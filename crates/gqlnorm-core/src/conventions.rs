//! The directive and naming conventions the passes key off of.

/// Prefix of directives that mark a field as writable-constrained; they
/// move from object types onto the matching `Add<T>Input` and `<T>Patch`
/// inputs.
pub const WRITE_PREFIX: &str = "w_";

/// Prefix of exposure-control directives; they move onto `<T>Patch`
/// inputs.
pub const EXPOSURE_PREFIX: &str = "x_";

/// The type-level hook directive. Its applications are stripped from the
/// rendered type and re-emitted, suffixed with the operation name, on the
/// root fields that operate on the type.
pub const HOOK_DIRECTIVE: &str = "hook_";

/// Installed on a patch-input field that ends up with no directives at
/// all, marking it read-only by default.
pub const PATCH_READONLY_DIRECTIVE: &str = "x_patch_ro";

/// Placeholder field injected into a type whose own fields were all
/// hoisted to its interface. Never merged between fragments.
pub const VOID_FIELD: &str = "_VOID";

/// Root-field prefixes that identify the operation a field performs, in
/// match order. Longer operations must come before their prefixes.
pub const OPERATION_PREFIXES: [&str; 5] = ["query", "get", "add", "update", "delete"];

/// Root operation types whose fields receive hook directives.
pub const ROOT_TYPES: [&str; 2] = ["Query", "Mutation"];

/// The directives dgraph understands. Everything else is filtered out of
/// a dgraph-targeted document.
pub const DGRAPH_DIRECTIVES: [&str; 12] = [
    "id",
    "search",
    "hasInverse",
    "remote",
    "custom",
    "auth",
    "lambda",
    "generate",
    "secret",
    "dgraph",
    "default",
    "cacheControl",
];

/// Leading text of the dgraph authorization pragma comment, the one
/// comment a dgraph-targeted render preserves.
pub const AUTH_PRAGMA_PREFIX: &str = "# Dgraph.Authorization";

/// Resolves a root field name to `(operation, type name)` when it follows
/// the operation naming convention.
pub fn split_operation(field_name: &str) -> Option<(&'static str, &str)> {
    for op in OPERATION_PREFIXES {
        if let Some(rest) = field_name.strip_prefix(op)
            && !rest.is_empty()
        {
            return Some((op, rest));
        }
    }
    None
}
