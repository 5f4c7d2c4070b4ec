use gqlnorm_parser::tree::{NodeId, RecordEntry, SpaceTag, Tree, TreeNode, labels};

use crate::conventions;

/// Layout context threaded through the render walk.
///
/// `prev` and `next` are the true neighboring nodes of the value being
/// rendered: inside a record or sequence they are the adjacent children,
/// and at the boundaries they fall back to the parent's own neighbors, so
/// lookahead works across fragment boundaries.
#[derive(Clone, Copy, Default)]
struct RenderContext {
    prev: Option<NodeId>,
    next: Option<NodeId>,
    /// Set once an argument list opens; newline-producing labels render
    /// inline for the rest of the enclosing record and its subtree.
    suppress_newline: bool,
}

/// The position-driven pretty-printer.
///
/// Layout is decided entirely by each record entry's label and space tag
/// plus one token of lookahead; the tree carries no stored whitespace.
/// Output is accumulated as a buffer of pieces because one rule edits
/// already-emitted text: the first field after a `{` retroactively pins a
/// space onto the token preceding the brace.
pub struct Printer {
    /// Keep the `# Dgraph.Authorization` pragma comment, which the dgraph
    /// engine reads. Every other comment is dropped.
    keep_auth_pragma: bool,
}

impl Printer {
    pub fn new(keep_auth_pragma: bool) -> Self {
        Self { keep_auth_pragma }
    }

    pub fn render(&self, tree: &Tree, root: NodeId) -> String {
        let mut out = vec!["\n".to_string()];
        self.render_node(tree, root, &mut out, RenderContext::default());
        out.concat()
    }

    fn render_node(&self, tree: &Tree, id: NodeId, out: &mut Vec<String>, ctx: RenderContext) {
        match tree.node(id) {
            TreeNode::Absent => (),
            TreeNode::Terminal(text) => {
                // A closing brace always lands on its own line.
                if text == "}" {
                    out.push("\n".to_string());
                }
                out.push(text.clone());
            }
            TreeNode::Sequence(items) => {
                for (i, item) in items.iter().enumerate() {
                    // Items that render nothing (dropped comments, absent
                    // slots) are invisible to their siblings' layout.
                    let item_ctx = RenderContext {
                        prev: items[..i]
                            .iter()
                            .rev()
                            .copied()
                            .find(|id| !self.renders_nothing(tree, *id))
                            .or(ctx.prev),
                        next: items[i + 1..]
                            .iter()
                            .copied()
                            .find(|id| !self.renders_nothing(tree, *id))
                            .or(ctx.next),
                        suppress_newline: ctx.suppress_newline,
                    };
                    self.render_node(tree, *item, out, item_ctx);
                }
            }
            TreeNode::Record(entries) => self.render_record(tree, entries, out, ctx),
        }
    }

    fn render_record(
        &self,
        tree: &Tree,
        entries: &[RecordEntry],
        out: &mut Vec<String>,
        ctx: RenderContext,
    ) {
        let mut suppress_newline = ctx.suppress_newline;
        for (i, entry) in entries.iter().enumerate() {
            let value = entry.value;
            if tree.is_absent(value) {
                continue;
            }
            let prev = if i > 0 {
                Some(entries[i - 1].value)
            } else {
                ctx.prev
            };
            let next = if i + 1 < entries.len() {
                Some(entries[i + 1].value)
            } else {
                ctx.next
            };

            let mut trailing_space = false;
            match entry.label.tag {
                SpaceTag::None => (),
                SpaceTag::Before => ensure_space(out),
                SpaceTag::After => trailing_space = true,
                SpaceTag::Surround => {
                    // Surround only ever tags bare punctuation terminals.
                    if let Some(text) = tree.as_terminal(value) {
                        if last_piece(out) == Some(" ") {
                            out.push(format!("{text} "));
                        } else {
                            out.push(format!(" {text} "));
                        }
                        continue;
                    }
                }
            }

            let label = entry.label;
            if label.name == labels::COMMENT || label.name == labels::DOC {
                let keep = self.keep_auth_pragma
                    && tree
                        .as_terminal(value)
                        .is_some_and(|text| text.starts_with(conventions::AUTH_PRAGMA_PREFIX));
                if !keep {
                    continue;
                }
                out.push("\n".to_string());
                out.push("\n".to_string());
            } else if label.name == labels::ARGS && !label.internal {
                suppress_newline = true;
            } else if label.name == labels::NAME && !label.internal {
                self.render_name(tree, value, out, prev, next);
                continue;
            } else if label.internal {
                // Structural slot: the value renders with no layout of
                // its own.
            } else if label.name.ends_with("_definition") {
                out.push("\n".to_string());
                out.push("\n".to_string());
            } else if !suppress_newline {
                out.push("\n".to_string());
            }

            self.render_node(
                tree,
                value,
                out,
                RenderContext {
                    prev,
                    next,
                    suppress_newline,
                },
            );
            if trailing_space {
                out.push(" ".to_string());
            }
        }
    }

    /// Layout for a non-internal `name` entry: indentation at the start
    /// of a field line, a separating space elsewhere, and a pinned
    /// trailing space when a block or implements clause follows.
    fn render_name(
        &self,
        tree: &Tree,
        value: NodeId,
        out: &mut Vec<String>,
        prev: Option<NodeId>,
        next: Option<NodeId>,
    ) {
        if last_piece(out) == Some("\n") {
            let after_open_brace = prev.is_some_and(|p| tree.as_terminal(p) == Some("{"));
            if after_open_brace {
                // First field of a block: pin the space between the
                // definition header and its brace, which was not known
                // to be needed when the brace was emitted.
                let n = out.len();
                if n >= 3 && !out[n - 3].ends_with(' ') {
                    out[n - 3].push(' ');
                }
            }
            out.push("  ".to_string());
        } else if !matches!(last_piece(out), Some("[") | Some("(") | Some("@")) {
            out.push(" ".to_string());
        }

        let followed_by_block = matches!(
            next.and_then(|n| leading_terminal(tree, n)),
            Some("{") | Some("implements"),
        );
        match tree.as_terminal(value) {
            Some(text) if followed_by_block => out.push(format!("{text} ")),
            Some(text) => out.push(text.to_string()),
            None => self.render_node(tree, value, out, RenderContext::default()),
        }
    }

    /// Whether a node produces no output at all: an absent slot, or a
    /// comment/doc wrapper this render drops.
    fn renders_nothing(&self, tree: &Tree, id: NodeId) -> bool {
        match tree.node(id) {
            TreeNode::Absent => true,
            TreeNode::Record(entries) => match entries.as_slice() {
                [entry]
                    if entry.label.name == labels::COMMENT || entry.label.name == labels::DOC =>
                {
                    !(self.keep_auth_pragma
                        && tree
                            .as_terminal(entry.value)
                            .is_some_and(|text| text.starts_with(conventions::AUTH_PRAGMA_PREFIX)))
                }
                _ => false,
            },
            _ => false,
        }
    }
}

fn ensure_space(out: &mut Vec<String>) {
    if last_piece(out) != Some(" ") {
        out.push(" ".to_string());
    }
}

fn last_piece(out: &[String]) -> Option<&str> {
    out.last().map(String::as_str)
}

/// The terminal a node starts with, looking only through sequences.
fn leading_terminal(tree: &Tree, id: NodeId) -> Option<&str> {
    match tree.node(id) {
        TreeNode::Terminal(text) => Some(text),
        TreeNode::Sequence(items) => {
            let first = items.first()?;
            tree.as_terminal(*first)
        }
        _ => None,
    }
}
