use crate::arena::NodeId;
use crate::bst::node::Augment;
use crate::bst::tree::BinarySearchTree;
use std::fmt;

const PENDING: &str = "│  ";
const BLANK: &str = "   ";
const LEFT_WITH_SIBLING: &str = "├─›";
const LEFT_ALONE: &str = "└─›";
const RIGHT: &str = "└─»";

/// Renders the tree one node per line with box-drawing connectors.
///
/// Left children are drawn before right children. A column keeps its `│` while a right sibling
/// is still pending at that depth.
///
/// ```text
/// 4
/// ├─›2
/// │  ├─›1
/// │  └─»3
/// └─»6
/// ```
impl<T, M> fmt::Display for BinarySearchTree<T, M>
where
    T: fmt::Display,
    M: Augment,
{
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        // (node, text before its label, columns drawn before its children's connectors)
        let mut stack: Vec<(NodeId, String, String)> = self
            .root
            .map(|id| (id, String::new(), String::new()))
            .into_iter()
            .collect();

        while let Some((id, lead, columns)) = stack.pop() {
            f.write_str(&lead)?;
            M::write_label(&self.node_ref(id), f)?;
            f.write_str("\n")?;

            let node = &self.arena[id];
            match (node.left, node.right) {
                (Some(left), Some(right)) => {
                    stack.push((
                        right,
                        format!("{}{}", columns, RIGHT),
                        format!("{}{}", columns, BLANK),
                    ));
                    stack.push((
                        left,
                        format!("{}{}", columns, LEFT_WITH_SIBLING),
                        format!("{}{}", columns, PENDING),
                    ));
                },
                (Some(left), None) => {
                    stack.push((
                        left,
                        format!("{}{}", columns, LEFT_ALONE),
                        format!("{}{}", columns, BLANK),
                    ));
                },
                (None, Some(right)) => {
                    stack.push((
                        right,
                        format!("{}{}", columns, RIGHT),
                        format!("{}{}", columns, BLANK),
                    ));
                },
                (None, None) => {},
            }
        }
        Ok(())
    }
}
