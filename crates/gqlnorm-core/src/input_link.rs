/// The naming-convention link from an input object to the object type it
/// mirrors.
///
/// `Add<T>Input` carries the writable payload of a create mutation;
/// `<T>Patch` carries the partial payload of an update mutation. Both
/// receive directives propagated from `T`'s fields.
#[derive(Clone, Debug, Eq, PartialEq)]
pub enum InputLink {
    Add(String),
    Patch(String),
}

impl InputLink {
    /// Matches `Add<T>Input` first, then `<T>Patch`.
    pub fn from_name(name: &str) -> Option<Self> {
        if let Some(base) = name.strip_prefix("Add").and_then(|r| r.strip_suffix("Input"))
            && !base.is_empty()
        {
            return Some(InputLink::Add(base.to_string()));
        }
        if let Some(base) = name.strip_suffix("Patch")
            && !base.is_empty()
        {
            return Some(InputLink::Patch(base.to_string()));
        }
        None
    }

    /// The mirrored object type's name.
    pub fn base(&self) -> &str {
        match self {
            InputLink::Add(base) | InputLink::Patch(base) => base,
        }
    }
}
