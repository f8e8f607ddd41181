use crate::plan::FilePlan;
use colored::Colorize;
use std::cell::RefCell;
use std::collections::HashMap;
use std::path::{Path, PathBuf};
use std::rc::Rc;

/// Represents a node in the tree (either file or directory).
#[derive(Debug)]
struct TreeNode {
    name: String,
    children: Vec<Rc<RefCell<TreeNode>>>,
    is_file: bool,
}
impl TreeNode {
    fn new(name: String, is_file: bool) -> Self {
        Self {
            name,
            children: Vec::new(),
            is_file,
        }
    }
}

/// Build the directory tree for a plan, rooted at the destination directory.
fn build_tree(plan: &FilePlan, destination: &Path) -> Rc<RefCell<TreeNode>> {
    let root_name = destination
        .file_name()
        .map(|os| os.to_string_lossy().to_string())
        .unwrap_or_else(|| destination.display().to_string());

    let root = Rc::new(RefCell::new(TreeNode::new(root_name, false)));

    // map relative path to node; files are attached after directories, which
    // the plan already lists ancestors-first
    let mut lookup: HashMap<PathBuf, Rc<RefCell<TreeNode>>> = HashMap::new();
    lookup.insert(PathBuf::new(), Rc::clone(&root));

    let attach = |lookup: &mut HashMap<PathBuf, Rc<RefCell<TreeNode>>>,
                  path: &Path,
                  is_file: bool| {
        let parent_path = path.parent().unwrap_or_else(|| Path::new(""));

        let parent_node = match lookup.get(parent_path) {
            Some(node) => Rc::clone(node),
            None => {
                log::debug!(
                    "parent: {}, not found for path: {}",
                    parent_path.display(),
                    path.display()
                );
                return;
            }
        };

        let name = path
            .file_name()
            .map(|os| os.to_string_lossy().to_string())
            .unwrap_or_else(|| path.display().to_string());

        let node = Rc::new(RefCell::new(TreeNode::new(name, is_file)));

        parent_node.borrow_mut().children.push(Rc::clone(&node));

        lookup.insert(path.to_path_buf(), node);
    };

    for dir in plan.dirs() {
        attach(&mut lookup, dir, false);
    }
    for file in plan.files() {
        attach(&mut lookup, &file.path, true);
    }

    root
}

/// Print the tree with a nice ASCII style.
fn print_tree(node: &Rc<RefCell<TreeNode>>, prefix: &str, is_last: bool) {
    let node_borrow = node.borrow();

    let connector = if is_last {
        "└── ".yellow()
    } else {
        "├── ".yellow()
    };
    let name = if node_borrow.is_file {
        node_borrow.name.green()
    } else {
        node_borrow.name.blue()
    };
    println!("{}{}{}", prefix.yellow(), connector, name);

    let child_prefix = if is_last {
        format!("{}    ", prefix.yellow())
    } else {
        format!("{}│   ", prefix.yellow())
    };

    let len = node_borrow.children.len();
    for (i, child) in node_borrow.children.iter().enumerate() {
        let last = i == len - 1;
        print_tree(child, &child_prefix, last);
    }
}

pub fn preview_as_tree(plan: &FilePlan, destination: &Path) {
    let tree_root = build_tree(plan, destination);

    println!(
        "Legend: {} = (directory), {} = (file)",
        "blue".blue(),
        "green".green()
    );

    let header = format!(
        "{} {}\n",
        "┌─".bold().bright_blue(),
        "Preview".bold().bright_blue(),
    );

    println!("{}", header);

    print_tree(&tree_root, "", true);
}
