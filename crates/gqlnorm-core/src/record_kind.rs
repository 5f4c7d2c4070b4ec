/// Which of the registry's namespaces a definition lives in.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum RecordKind {
    Interface,
    Type,
    Input,
}
