use std::collections::BTreeSet;
use std::fs;
use std::path::{Path, PathBuf};

use syn::{Item, UseTree, Visibility};

const REQUIRED_WIDGET_FILES: [&str; 4] =
    ["event.rs", "mod.rs", "reducer.rs", "view.rs"];

#[test]
fn given_widgets_when_validating_conventions_then_all_widgets_comply() {
    let manifest_dir = PathBuf::from(env!("CARGO_MANIFEST_DIR"));
    let widgets_dir = manifest_dir.join("src/widgets");
    let mut violations: Vec<String> = Vec::new();

    let declared = declared_modules(&widgets_dir.join("mod.rs"), &mut violations);
    let on_disk = widget_dirs(&widgets_dir);
    if declared != on_disk {
        violations.push(format!(
            "{}: declared widgets {declared:?} do not match directories {on_disk:?}",
            widgets_dir.display()
        ));
    }

    for widget in &on_disk {
        validate_widget(&widgets_dir.join(widget), widget, &mut violations);
    }

    assert!(
        violations.is_empty(),
        "widget convention violations:\n{}",
        violations.join("\n")
    );
}

fn validate_widget(dir: &Path, widget: &str, violations: &mut Vec<String>) {
    for required in REQUIRED_WIDGET_FILES {
        if !dir.join(required).is_file() {
            violations.push(format!(
                "{}: missing required file {required}",
                dir.display()
            ));
        }
    }

    let declared = declared_modules(&dir.join("mod.rs"), violations);
    let on_disk = rust_file_stems(dir);
    if declared != on_disk {
        violations.push(format!(
            "{}: declared modules {declared:?} do not match files {on_disk:?}",
            dir.display()
        ));
    }

    for stem in &on_disk {
        let file = parse(&dir.join(format!("{stem}.rs")));
        for item in &file.items {
            if let Item::Use(item_use) = item {
                if use_tree_has_glob(&item_use.tree) {
                    violations.push(format!(
                        "{}/{stem}.rs: wildcard use/import is forbidden",
                        dir.display()
                    ));
                }
            }
        }
    }

    let prefix = snake_to_pascal_case(widget);
    validate_event_file(&dir.join("event.rs"), &prefix, violations);
    validate_view_file(&dir.join("view.rs"), &prefix, violations);
}

fn validate_event_file(
    file_path: &Path,
    prefix: &str,
    violations: &mut Vec<String>,
) {
    let file = parse(file_path);
    let enums: BTreeSet<String> = file
        .items
        .iter()
        .filter_map(|item| match item {
            Item::Enum(item_enum) => Some(item_enum.ident.to_string()),
            _ => None,
        })
        .collect();

    for suffix in ["Event", "Intent", "Effect"] {
        let expected = format!("{prefix}{suffix}");
        if !enums.contains(&expected) {
            violations.push(format!(
                "{}: missing event contract {expected}",
                file_path.display()
            ));
        }
    }
}

fn validate_view_file(
    file_path: &Path,
    prefix: &str,
    violations: &mut Vec<String>,
) {
    let source = read(file_path);
    let file = parse(file_path);

    for forbidden in ["log::", "std::fs::", "Task::", "iced::Task", "tokio::"]
    {
        if source.contains(forbidden) {
            violations.push(format!(
                "{}: forbidden side-effect pattern detected: {forbidden}",
                file_path.display()
            ));
        }
    }

    let mut view_count = 0usize;
    let mut props_names: Vec<String> = Vec::new();
    for item in &file.items {
        match item {
            Item::Fn(item_fn) if item_fn.sig.ident == "view" => {
                if is_pub_crate(&item_fn.vis) {
                    view_count += 1;
                } else {
                    violations.push(format!(
                        "{}: view must be pub(crate)",
                        file_path.display()
                    ));
                }
            },
            Item::Struct(item_struct) => {
                let name = item_struct.ident.to_string();
                if name.ends_with("Props") {
                    props_names.push(name);
                }
            },
            _ => {},
        }
    }

    if view_count != 1 {
        violations.push(format!(
            "{}: expected exactly one pub(crate) fn view, found {view_count}",
            file_path.display()
        ));
    }
    if props_names.len() != 1 {
        violations.push(format!(
            "{}: expected exactly one *Props type, found {}",
            file_path.display(),
            props_names.len()
        ));
    }
    for name in props_names {
        if name != format!("{prefix}Props") {
            violations.push(format!(
                "{}: props type '{name}' must be named '{prefix}Props'",
                file_path.display()
            ));
        }
    }
}

fn declared_modules(
    mod_rs: &Path,
    violations: &mut Vec<String>,
) -> BTreeSet<String> {
    let file = parse(mod_rs);
    let mut modules = BTreeSet::new();

    for item in &file.items {
        match item {
            Item::Mod(item_mod) if item_mod.content.is_none() => {
                modules.insert(item_mod.ident.to_string());
            },
            Item::Mod(item_mod) => violations.push(format!(
                "{}: inline module '{}' is forbidden",
                mod_rs.display(),
                item_mod.ident
            )),
            Item::Use(item_use) if use_tree_has_glob(&item_use.tree) => {
                violations.push(format!(
                    "{}: wildcard use/import is forbidden",
                    mod_rs.display()
                ));
            },
            _ => {},
        }
    }

    modules
}

fn widget_dirs(widgets_dir: &Path) -> BTreeSet<String> {
    dir_entries(widgets_dir)
        .into_iter()
        .filter(|path| path.is_dir())
        .filter_map(|path| file_stem(&path))
        .collect()
}

fn rust_file_stems(dir: &Path) -> BTreeSet<String> {
    dir_entries(dir)
        .into_iter()
        .filter(|path| path.is_file())
        .filter(|path| path.extension().is_some_and(|ext| ext == "rs"))
        .filter_map(|path| file_stem(&path))
        .filter(|stem| stem != "mod")
        .collect()
}

fn dir_entries(dir: &Path) -> Vec<PathBuf> {
    let entries = fs::read_dir(dir).unwrap_or_else(|err| {
        panic!("failed to read dir {}: {err}", dir.display())
    });

    entries
        .map(|entry| {
            entry
                .unwrap_or_else(|err| panic!("failed to read dir entry: {err}"))
                .path()
        })
        .collect()
}

fn file_stem(path: &Path) -> Option<String> {
    path.file_stem()
        .map(|stem| stem.to_string_lossy().to_string())
}

fn read(path: &Path) -> String {
    fs::read_to_string(path).unwrap_or_else(|err| {
        panic!("failed to read {}: {err}", path.display())
    })
}

fn parse(path: &Path) -> syn::File {
    syn::parse_file(&read(path)).unwrap_or_else(|err| {
        panic!("failed to parse {}: {err}", path.display())
    })
}

fn snake_to_pascal_case(value: &str) -> String {
    value
        .split('_')
        .filter(|part| !part.is_empty())
        .map(|part| {
            let mut chars = part.chars();
            let Some(first) = chars.next() else {
                return String::new();
            };
            let mut pascal = String::new();
            pascal.extend(first.to_uppercase());
            pascal.push_str(chars.as_str());
            pascal
        })
        .collect::<String>()
}

fn use_tree_has_glob(tree: &UseTree) -> bool {
    match tree {
        UseTree::Glob(_) => true,
        UseTree::Group(group) => group.items.iter().any(use_tree_has_glob),
        UseTree::Path(path) => use_tree_has_glob(&path.tree),
        UseTree::Name(_) | UseTree::Rename(_) => false,
    }
}

fn is_pub_crate(vis: &Visibility) -> bool {
    match vis {
        Visibility::Restricted(restricted) => {
            restricted.in_token.is_none() && restricted.path.is_ident("crate")
        },
        _ => false,
    }
}
