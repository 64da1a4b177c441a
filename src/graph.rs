//! Verb-frequency graph rendering.
//!
//! Builds an undirected hub graph (the disease term in the middle, one node
//! per verb, edges weighted by count) and renders it as a static SVG image.
//! Node sizes scale linearly with count, normalized by the most frequent
//! verb.

use std::f64::consts::{FRAC_PI_2, TAU};
use std::fmt;
use std::path::Path;

use petgraph::dot::Dot;
use petgraph::graph::{NodeIndex, UnGraph};

use crate::models::VerbCount;

const CANVAS: f64 = 640.0;
const CENTER: f64 = CANVAS / 2.0;
const RING_RADIUS: f64 = 220.0;
const HUB_RADIUS: f64 = 56.0;
const MIN_NODE_RADIUS: f64 = 12.0;
const MAX_NODE_RADIUS: f64 = 48.0;

const HUB_FILL: &str = "#e45756";
const NODE_FILL: &str = "#4c78a8";
const EDGE_STROKE: &str = "#9aa5b1";

/// Graph rendering errors
#[derive(Debug, thiserror::Error)]
pub enum GraphError {
    #[error("No verbs to draw")]
    Empty,

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

/// One node of the verb graph
#[derive(Debug, Clone)]
pub struct GraphNode {
    pub label: String,
    pub count: u64,
}

impl fmt::Display for GraphNode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} ({})", self.label, self.count)
    }
}

/// Hub graph over the most frequent verbs for one disease term
#[derive(Debug)]
pub struct VerbGraph {
    graph: UnGraph<GraphNode, u64>,
    hub: NodeIndex,
    max_count: u64,
}

impl VerbGraph {
    /// Build the graph from frequency counts, keeping the top `top` verbs
    pub fn build(term: &str, counts: &[VerbCount], top: usize) -> Result<Self, GraphError> {
        let mut ordered: Vec<&VerbCount> = counts.iter().filter(|c| c.count > 0).collect();
        ordered.sort_by(|a, b| b.count.cmp(&a.count).then_with(|| a.verb.cmp(&b.verb)));
        ordered.truncate(top);

        if ordered.is_empty() {
            return Err(GraphError::Empty);
        }

        let max_count = ordered.iter().map(|c| c.count).max().unwrap_or(1);

        let mut graph = UnGraph::new_undirected();
        let hub = graph.add_node(GraphNode {
            label: term.to_string(),
            count: 0,
        });

        for entry in ordered {
            let node = graph.add_node(GraphNode {
                label: entry.verb.clone(),
                count: entry.count,
            });
            graph.add_edge(hub, node, entry.count);
        }

        Ok(Self {
            graph,
            hub,
            max_count,
        })
    }

    /// Number of verb nodes
    pub fn verb_count(&self) -> usize {
        self.graph.node_count() - 1
    }

    /// Verb nodes in rendering order
    fn verbs(&self) -> Vec<&GraphNode> {
        self.graph
            .node_indices()
            .filter(|&idx| idx != self.hub)
            .filter_map(|idx| self.graph.node_weight(idx))
            .collect()
    }

    /// Radius for a verb node, linear in count and normalized by the max
    fn node_radius(&self, count: u64) -> f64 {
        let share = count as f64 / self.max_count as f64;
        MIN_NODE_RADIUS + share * (MAX_NODE_RADIUS - MIN_NODE_RADIUS)
    }

    /// Render the graph as an SVG document
    pub fn to_svg(&self) -> String {
        let verbs = self.verbs();
        let total = verbs.len();

        let mut svg = String::new();
        svg.push_str(&format!(
            "<svg xmlns=\"http://www.w3.org/2000/svg\" width=\"{c}\" height=\"{c}\" \
             viewBox=\"0 0 {c} {c}\">\n",
            c = CANVAS as u64
        ));
        svg.push_str(&format!(
            "  <rect width=\"{c}\" height=\"{c}\" fill=\"white\"/>\n",
            c = CANVAS as u64
        ));

        let positions: Vec<(f64, f64)> = (0..total)
            .map(|i| {
                let angle = TAU * i as f64 / total as f64 - FRAC_PI_2;
                (
                    CENTER + RING_RADIUS * angle.cos(),
                    CENTER + RING_RADIUS * angle.sin(),
                )
            })
            .collect();

        // edges go under the nodes
        for (node, (x, y)) in verbs.iter().zip(&positions) {
            let width = 1.0 + 4.0 * node.count as f64 / self.max_count as f64;
            svg.push_str(&format!(
                "  <line x1=\"{:.1}\" y1=\"{:.1}\" x2=\"{:.1}\" y2=\"{:.1}\" \
                 stroke=\"{}\" stroke-width=\"{:.1}\"/>\n",
                CENTER, CENTER, x, y, EDGE_STROKE, width
            ));
        }

        for (node, (x, y)) in verbs.iter().zip(&positions) {
            let radius = self.node_radius(node.count);
            svg.push_str(&format!(
                "  <circle cx=\"{:.1}\" cy=\"{:.1}\" r=\"{:.1}\" fill=\"{}\" \
                 fill-opacity=\"0.85\"/>\n",
                x, y, radius, NODE_FILL
            ));
            svg.push_str(&format!(
                "  <text x=\"{:.1}\" y=\"{:.1}\" text-anchor=\"middle\" \
                 font-family=\"sans-serif\" font-size=\"13\">{} ({})</text>\n",
                x,
                y + radius + 16.0,
                escape(&node.label),
                node.count
            ));
        }

        let hub_label = self
            .graph
            .node_weight(self.hub)
            .map(|n| n.label.as_str())
            .unwrap_or_default();
        svg.push_str(&format!(
            "  <circle cx=\"{c:.1}\" cy=\"{c:.1}\" r=\"{r:.1}\" fill=\"{fill}\"/>\n",
            c = CENTER,
            r = HUB_RADIUS,
            fill = HUB_FILL
        ));
        svg.push_str(&format!(
            "  <text x=\"{:.1}\" y=\"{:.1}\" text-anchor=\"middle\" \
             font-family=\"sans-serif\" font-size=\"15\" fill=\"white\">{}</text>\n",
            CENTER,
            CENTER + 5.0,
            escape(hub_label)
        ));

        svg.push_str("</svg>\n");
        svg
    }

    /// Write the SVG rendering to a file
    pub fn render_svg(&self, path: impl AsRef<Path>) -> Result<(), GraphError> {
        std::fs::write(path.as_ref(), self.to_svg())?;
        Ok(())
    }

    /// Graphviz DOT form, handy for piping into other tools
    pub fn to_dot(&self) -> String {
        format!("{}", Dot::new(&self.graph))
    }

    /// Write the DOT form to a file
    pub fn render_dot(&self, path: impl AsRef<Path>) -> Result<(), GraphError> {
        std::fs::write(path.as_ref(), self.to_dot())?;
        Ok(())
    }
}

/// Derive the image name from the frequency CSV it was built from
pub fn graph_image_name(input: impl AsRef<Path>) -> String {
    let stem = input
        .as_ref()
        .file_stem()
        .map(|s| s.to_string_lossy().to_string())
        .unwrap_or_else(|| "verbs".to_string());
    format!("{}_graph.svg", stem)
}

/// Escape text for embedding in SVG/XML
fn escape(text: &str) -> String {
    let mut escaped = String::with_capacity(text.len());
    for c in text.chars() {
        match c {
            '&' => escaped.push_str("&amp;"),
            '<' => escaped.push_str("&lt;"),
            '>' => escaped.push_str("&gt;"),
            '"' => escaped.push_str("&quot;"),
            '\'' => escaped.push_str("&apos;"),
            _ => escaped.push(c),
        }
    }
    escaped
}
