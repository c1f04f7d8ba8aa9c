use std::path::{Component, Path};

/// Expresses `file` relative to `root` as a `/`-separated URI reference.
///
/// Purely lexical: symlinks are not resolved and nothing is read from disk.
/// Files outside `root` climb out with `..` segments; a relative `file` is
/// taken to be relative to `root` already.
pub fn relative_uri(file: &Path, root: &Path) -> String {
    let anchored;
    let file = if file.has_root() {
        file
    } else {
        anchored = root.join(file);
        anchored.as_path()
    };

    let file = lexical_components(file);
    let root = lexical_components(root);

    let shared = file
        .iter()
        .zip(root.iter())
        .take_while(|(left, right)| left == right)
        .count();

    // No common anchor, e.g. two different drive prefixes.
    if shared == 0 {
        return render(&file);
    }

    let mut segments = vec![Component::ParentDir; root.len() - shared];
    segments.extend_from_slice(&file[shared..]);
    render(&segments)
}

fn lexical_components(path: &Path) -> Vec<Component<'_>> {
    let mut components: Vec<Component<'_>> = Vec::new();
    for component in path.components() {
        match component {
            Component::CurDir => {}
            Component::ParentDir => match components.last() {
                Some(Component::Normal(_)) => {
                    components.pop();
                }
                Some(Component::RootDir) | Some(Component::Prefix(_)) => {}
                _ => components.push(component),
            },
            other => components.push(other),
        }
    }
    components
}

fn render(components: &[Component<'_>]) -> String {
    let mut uri = String::new();
    for component in components {
        match component {
            Component::Prefix(prefix) => uri.push_str(&prefix.as_os_str().to_string_lossy()),
            Component::RootDir => uri.push('/'),
            other => {
                if !uri.is_empty() && !uri.ends_with('/') {
                    uri.push('/');
                }
                uri.push_str(&other.as_os_str().to_string_lossy());
            }
        }
    }

    if uri.is_empty() {
        ".".to_string()
    } else {
        uri
    }
}
