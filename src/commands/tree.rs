//! # Tree Command Implementation
//!
//! This module implements the `tree` subcommand, which displays the modules of
//! an aggregation run and the inputs each one contributes.
//!
//! ## Functionality
//!
//! - **Module Visualization**: One branch per included module, in merge order,
//!   labelled with its namespace when it has one.
//! - **Inputs**: Source roots, classpath entries, snippet directories and
//!   doc-resource directories under each module.
//! - **Depth Control**: `--depth 0` shows only the output root, `--depth 1`
//!   adds the modules, and so on.
//!
//! This command is a safe, read-only operation that does not modify any files.

use std::borrow::Cow;
use std::path::PathBuf;

use anyhow::Result;
use clap::Args;
use ptree::{print_tree, TreeItem};

use doc_aggregate::config::DEFAULT_CONFIG_FILE;
use doc_aggregate::job::AggregationJob;
use doc_aggregate::module::Module;
use doc_aggregate::orchestrator;

/// Display the included modules and their inputs
#[derive(Args, Debug)]
pub struct TreeArgs {
    /// Path to the .doc-aggregate.yaml configuration file.
    #[arg(short, long, value_name = "FILE", default_value = DEFAULT_CONFIG_FILE)]
    pub config: PathBuf,

    /// Maximum depth to display in the tree.
    ///
    /// If not specified, displays the full tree.
    #[arg(long, value_name = "NUM")]
    pub depth: Option<usize>,
}

/// Execute the `tree` command.
pub fn execute(args: TreeArgs) -> Result<()> {
    let config = super::load_config(&args.config)?;
    let graph = config.graph()?;
    let job = orchestrator::run(&config.aggregate, &graph)
        .map_err(|e| anyhow::anyhow!("Failed to aggregate modules: {}", e))?;

    let tree_root = build_job_tree(&job).prune(args.depth.unwrap_or(usize::MAX));
    print_tree(&tree_root).map_err(|e| anyhow::anyhow!("Failed to display tree: {}", e))?;

    Ok(())
}

fn build_job_tree(job: &AggregationJob) -> TreeNode {
    TreeNode {
        label: job.output_directory().display().to_string(),
        children: job.included_modules().iter().map(build_module_node).collect(),
    }
}

fn build_module_node(module: &Module) -> TreeNode {
    let label = match &module.namespace {
        Some(namespace) => format!("{} [{}]", module.name, namespace),
        None => module.name.clone(),
    };

    let groups = [
        ("sources", paths_of(&module.source_directories)),
        ("classpath", paths_of(&module.classpath_entries)),
        ("snippets", paths_of(&module.snippet_directories)),
        ("doc-files", paths_of(&module.resource_directories)),
    ];

    TreeNode {
        label,
        children: groups
            .into_iter()
            .filter(|(_, entries)| !entries.is_empty())
            .map(|(name, entries)| TreeNode {
                label: name.to_string(),
                children: entries.into_iter().map(TreeNode::leaf).collect(),
            })
            .collect(),
    }
}

fn paths_of<'a, I>(paths: I) -> Vec<String>
where
    I: IntoIterator<Item = &'a PathBuf>,
{
    paths
        .into_iter()
        .map(|path| path.display().to_string())
        .collect()
}

/// Tree node structure for ptree visualization
#[derive(Clone, Debug, PartialEq)]
struct TreeNode {
    label: String,
    children: Vec<TreeNode>,
}

impl TreeNode {
    fn leaf(label: String) -> Self {
        Self {
            label,
            children: Vec::new(),
        }
    }

    /// Drop everything below `depth` levels.
    fn prune(mut self, depth: usize) -> Self {
        if depth == 0 {
            self.children.clear();
        } else {
            self.children = self
                .children
                .into_iter()
                .map(|child| child.prune(depth - 1))
                .collect();
        }
        self
    }
}

impl TreeItem for TreeNode {
    type Child = TreeNode;

    fn write_self<W: std::io::Write>(
        &self,
        f: &mut W,
        _style: &ptree::Style,
    ) -> std::io::Result<()> {
        write!(f, "{}", self.label)
    }

    fn children(&self) -> Cow<'_, [Self::Child]> {
        Cow::Borrowed(&self.children)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use doc_aggregate::graph::{DeclaredGraph, ModuleHandle};
    use doc_aggregate::orchestrator::Orchestrator;
    use std::fs;
    use tempfile::TempDir;

    #[test]
    fn test_execute_missing_config() {
        let args = TreeArgs {
            config: PathBuf::from("/nonexistent/config.yaml"),
            depth: None,
        };

        let result = execute(args);
        assert!(result.is_err());
        assert!(result
            .unwrap_err()
            .to_string()
            .contains("Failed to load config"));
    }

    #[test]
    fn test_module_tree_and_pruning() {
        let temp = TempDir::new().unwrap();
        let src = temp.path().join("core/java");
        fs::create_dir_all(src.join("io/core/snippet-files")).unwrap();
        fs::write(src.join("io/core/Api.java"), "").unwrap();

        let graph = DeclaredGraph::new(vec![
            ModuleHandle::new("core", &src).with_namespace("io.core")
        ])
        .unwrap();
        let job = Orchestrator::new(temp.path().join("out"))
            .include("core")
            .run(&graph)
            .unwrap();

        let tree = build_job_tree(&job);
        assert_eq!(tree.children.len(), 1);
        let module = &tree.children[0];
        assert_eq!(module.label, "core [io.core]");
        let groups: Vec<&str> = module.children.iter().map(|c| c.label.as_str()).collect();
        assert_eq!(groups, vec!["sources", "snippets"]);

        let pruned = tree.clone().prune(1);
        assert_eq!(pruned.children.len(), 1);
        assert!(pruned.children[0].children.is_empty());
        assert!(tree.prune(0).children.is_empty());
    }
}
