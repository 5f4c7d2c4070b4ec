use gqlnorm_parser::{ParseError, SdlParser};
use gqlnorm_parser::tree::{NodeId, Tree};

use crate::SemanticError;
use crate::printer::Printer;
use crate::semantics::{DgraphSemantics, GqlgenSemantics};

/// Which schema engine the document is being rewritten for.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum TargetEngine {
    /// Resolver-generator engines: interfaces flatten into plain types.
    Gqlgen,
    /// The dgraph engine: interfaces stay first-class, unknown directives
    /// are filtered out.
    Dgraph,
}

pub type NormalizeError = ParseError<SemanticError>;

/// A normalized document: the rendered text plus the rewritten tree it
/// came from, for callers that want to inspect or dump the structure.
pub struct NormalizeOutput {
    pub text: String,
    pub tree: Tree,
    pub root: NodeId,
}

/// Parses, rewrites, and re-renders an SDL document for a target engine
/// in one pass.
pub fn normalize(source: &str, engine: TargetEngine) -> Result<NormalizeOutput, NormalizeError> {
    let mut tree = Tree::new();
    let root = match engine {
        TargetEngine::Gqlgen => {
            let mut semantics = GqlgenSemantics::new();
            SdlParser::new(source, &mut tree, &mut semantics).parse_document()?
        }
        TargetEngine::Dgraph => {
            let mut semantics = DgraphSemantics::new();
            SdlParser::new(source, &mut tree, &mut semantics).parse_document()?
        }
    };
    log::debug!("Rendering {} nodes for {engine:?}.", tree_size(&tree, root));
    let printer = Printer::new(engine == TargetEngine::Dgraph);
    let text = printer.render(&tree, root);
    Ok(NormalizeOutput { text, tree, root })
}

fn tree_size(tree: &Tree, root: NodeId) -> usize {
    use gqlnorm_parser::tree::TreeNode;
    match tree.node(root) {
        TreeNode::Terminal(_) | TreeNode::Absent => 1,
        TreeNode::Sequence(items) => 1 + items.iter().map(|i| tree_size(tree, *i)).sum::<usize>(),
        TreeNode::Record(entries) => {
            1 + entries
                .iter()
                .map(|e| tree_size(tree, e.value))
                .sum::<usize>()
        }
    }
}
