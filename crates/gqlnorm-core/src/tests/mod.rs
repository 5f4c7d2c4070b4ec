mod dgraph_tests;
mod printer_tests;
mod registry_tests;

use crate::{TargetEngine, normalize};

pub(crate) fn gqlgen(source: &str) -> String {
    normalize(source, TargetEngine::Gqlgen)
        .expect("document should normalize")
        .text
}

pub(crate) fn dgraph(source: &str) -> String {
    normalize(source, TargetEngine::Dgraph)
        .expect("document should normalize")
        .text
}
