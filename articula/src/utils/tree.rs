//! Tree rendering for segment hierarchies

use articula_model::{Model, RotationAxis};
use console::Style;

/// Represents a node in a tree structure
#[derive(Debug, Clone)]
pub struct TreeNode {
    pub name: String,
    pub node_type: NodeType,
    pub children: Vec<TreeNode>,
    /// Shown in insertion order
    pub metadata: Vec<(String, String)>,
}

/// Types of nodes in the tree
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NodeType {
    /// The model itself
    Root,
    /// A segment whose joint can rotate
    Joint,
    /// A segment rigidly attached to its parent
    Fixed,
}

/// Options for tree rendering
#[derive(Debug, Clone)]
pub struct TreeOptions {
    pub max_depth: Option<usize>,
    pub no_color: bool,
    pub show_metadata: bool,
    pub compact: bool,
}

impl Default for TreeOptions {
    fn default() -> Self {
        Self {
            max_depth: None,
            no_color: false,
            show_metadata: true,
            compact: false,
        }
    }
}

impl TreeNode {
    /// Create a new tree node
    pub fn new(name: impl Into<String>, node_type: NodeType) -> Self {
        Self {
            name: name.into(),
            node_type,
            children: Vec::new(),
            metadata: Vec::new(),
        }
    }

    /// Add a child node
    pub fn add_child(mut self, child: TreeNode) -> Self {
        self.children.push(child);
        self
    }

    /// Add metadata
    pub fn with_metadata(mut self, key: &str, value: impl Into<String>) -> Self {
        self.metadata.push((key.to_string(), value.into()));
        self
    }

    /// Build the hierarchy of `model`, one node per segment
    pub fn from_model(model: &Model, title: &str) -> Self {
        // Reverse pre-order finishes every child before its parent
        let mut nodes: Vec<Option<TreeNode>> = vec![None; model.segment_count()];
        for &index in model.traversal_order().iter().rev() {
            let mut node = segment_node(model, index);
            for child in model.children_of(index) {
                if let Some(child_node) = nodes[child].take() {
                    node.children.push(child_node);
                }
            }
            nodes[index] = Some(node);
        }

        let mut root = TreeNode::new(title, NodeType::Root)
            .with_metadata("segments", model.segment_count().to_string())
            .with_metadata("vertices", model.vertices().len().to_string())
            .with_metadata("surface", model.surface_mode().to_string());
        if let Some(segments) = nodes.get_mut(model.root()).and_then(Option::take) {
            root = root.add_child(segments);
        }
        root
    }
}

impl Drop for TreeNode {
    fn drop(&mut self) {
        let mut pending = std::mem::take(&mut self.children);
        while let Some(mut node) = pending.pop() {
            pending.append(&mut node.children);
        }
    }
}

/// One segment without its children
fn segment_node(model: &Model, index: usize) -> TreeNode {
    let Some(segment) = model.segment(index) else {
        return TreeNode::new(format!("#{index}"), NodeType::Fixed);
    };

    let node_type = if segment.is_bounded() && segment.rotation_axis != RotationAxis::None {
        NodeType::Joint
    } else {
        NodeType::Fixed
    };

    let j = segment.joint;
    TreeNode::new(
        format!("{} #{}", segment.display_name(index), index),
        node_type,
    )
    .with_metadata("axis", segment.rotation_axis.to_string())
    .with_metadata(
        "limits",
        format!("[{}, {}]", segment.angle_min, segment.angle_max),
    )
    .with_metadata("joint", format!("({}, {}, {})", j.x, j.y, j.z))
    .with_metadata("faces", segment.face_count().to_string())
}

impl NodeType {
    /// Get icon for node type
    pub fn icon(&self) -> &'static str {
        match self {
            NodeType::Root => "📦",
            NodeType::Joint => "🦴",
            NodeType::Fixed => "🔒",
        }
    }

    /// Get color style for node type
    pub fn style(&self, no_color: bool) -> Style {
        if no_color {
            Style::new()
        } else {
            match self {
                NodeType::Root => Style::new().bold().cyan(),
                NodeType::Joint => Style::new().green(),
                NodeType::Fixed => Style::new().yellow(),
            }
        }
    }
}

/// Render a tree structure to string
pub fn render_tree(root: &TreeNode, options: &TreeOptions) -> String {
    let mut output = String::new();
    // (node, prefix, is_last, depth); children are pushed in reverse so the
    // first child is rendered first
    let mut stack = vec![(root, String::new(), true, 0usize)];

    while let Some((node, prefix, is_last, depth)) = stack.pop() {
        if let Some(max_depth) = options.max_depth
            && depth > max_depth
        {
            continue;
        }
        render_node(node, &mut output, &prefix, is_last, depth, options);

        let child_prefix = if depth == 0 {
            ""
        } else if is_last {
            "    "
        } else {
            "│   "
        };
        let new_prefix = format!("{prefix}{child_prefix}");
        let last = node.children.len().saturating_sub(1);
        for (i, child) in node.children.iter().enumerate().rev() {
            stack.push((child, new_prefix.clone(), i == last, depth + 1));
        }
    }

    output
}

/// Render a single node line and its metadata
fn render_node(
    node: &TreeNode,
    output: &mut String,
    prefix: &str,
    is_last: bool,
    depth: usize,
    options: &TreeOptions,
) {
    let icon = node.node_type.icon();
    let style = node.node_type.style(options.no_color);
    let connector = if depth == 0 {
        ""
    } else if is_last {
        "└── "
    } else {
        "├── "
    };

    let mut line = format!(
        "{}{}{} {}",
        prefix,
        connector,
        icon,
        style.apply_to(&node.name)
    );

    if options.show_metadata && options.compact && !node.metadata.is_empty() {
        let parts: Vec<String> = node
            .metadata
            .iter()
            .map(|(key, value)| format!("{key}:{value}"))
            .collect();
        line.push_str(&format!(" [{}]", parts.join(", ")));
    }

    output.push_str(&line);
    output.push('\n');

    if options.show_metadata && !options.compact {
        let child_prefix = if depth == 0 {
            ""
        } else if is_last {
            "    "
        } else {
            "│   "
        };
        let meta_prefix = format!("{prefix}{child_prefix}    ");
        let meta_style = if options.no_color {
            Style::new()
        } else {
            Style::new().dim()
        };
        for (key, value) in &node.metadata {
            output.push_str(&format!(
                "{}🏷️  {}: {}\n",
                meta_prefix,
                meta_style.apply_to(key),
                value
            ));
        }
    }
}
