use camino::Utf8Path;
use camino::Utf8PathBuf;
use ignore::overrides::OverrideBuilder;
use ignore::WalkBuilder;

/// How `walk_templates` traverses directories.
#[derive(Clone, Debug, Default)]
pub struct WalkOptions {
    /// Include hidden files and directories (those starting with `.`).
    pub hidden: bool,
    /// Gitignore-style glob patterns. Prefix with `!` to exclude.
    pub globs: Vec<String>,
    /// Disable `.gitignore`, `.ignore` and friends.
    pub no_ignore: bool,
}

/// Whether `path` looks like an e-mail template.
#[must_use]
pub fn is_template(path: &Utf8Path) -> bool {
    path.extension()
        .is_some_and(|ext| ext.eq_ignore_ascii_case("html") || ext.eq_ignore_ascii_case("htm"))
}

/// Collect the templates under `paths`.
///
/// Files are taken as given when they are templates; directories are walked
/// recursively. `.gitignore` rules apply even outside a git checkout.
///
/// Returns a sorted, deduplicated list of absolute paths.
#[must_use]
pub fn walk_templates(paths: &[Utf8PathBuf], options: &WalkOptions) -> Vec<Utf8PathBuf> {
    let mut files = Vec::new();

    for path in paths {
        if path.is_file() {
            if is_template(path) {
                let resolved = dunce_utf8(path).unwrap_or_else(|_| path.clone());
                files.push(resolved);
            }
            continue;
        }

        if !path.is_dir() {
            tracing::warn!("skipping `{path}`: not a file or directory");
            continue;
        }

        let mut builder = WalkBuilder::new(path.as_std_path());
        // standard_filters resets hidden and the ignore flags, so it goes first.
        builder
            .standard_filters(!options.no_ignore)
            .hidden(!options.hidden)
            .require_git(false);

        if !options.globs.is_empty() {
            let mut overrides = OverrideBuilder::new(path.as_std_path());
            for glob in &options.globs {
                if let Err(err) = overrides.add(glob) {
                    tracing::warn!("ignoring glob `{glob}`: {err}");
                }
            }
            match overrides.build() {
                Ok(built) => {
                    builder.overrides(built);
                }
                Err(err) => tracing::warn!("ignoring globs: {err}"),
            }
        }

        for entry in builder.build().filter_map(Result::ok) {
            if !entry.file_type().is_some_and(|ft| ft.is_file()) {
                continue;
            }
            let Some(utf8) = Utf8Path::from_path(entry.path()) else {
                continue;
            };
            if is_template(utf8) {
                let resolved = dunce_utf8(utf8).unwrap_or_else(|_| utf8.to_owned());
                files.push(resolved);
            }
        }
    }

    files.sort();
    files.dedup();
    tracing::debug!(count = files.len(), "discovered templates");
    files
}

fn dunce_utf8(path: &Utf8Path) -> std::io::Result<Utf8PathBuf> {
    let canonical = dunce::canonicalize(path.as_std_path())?;
    Utf8PathBuf::from_path_buf(canonical)
        .map_err(|_| std::io::Error::new(std::io::ErrorKind::InvalidData, "non-UTF-8 path"))
}
