use std::path::{Path, PathBuf};

use cg::CONFIG_FILE_NAME;

/// Arguments of the default (generate) invocation.
pub(crate) struct Options {
    pub name: Option<String>,
    pub dir: Option<PathBuf>,
    pub config: Option<PathBuf>,
    pub dry_run: bool,
    pub verbose: bool,
}

pub(crate) fn run(opts: Options) {
    if let Err(e) = generate(opts) {
        eprintln!("cg: {e}");
        std::process::exit(1);
    }
}

fn generate(opts: Options) -> cg::Result<()> {
    let (base_dir, config_path) = resolve_paths(opts.dir, opts.config);

    // Configuration is checked before asking for a name.
    let config = cg::load_config_from(&config_path)?;

    let raw = match opts.name {
        Some(name) => name,
        None => {
            let mut stdin = std::io::stdin().lock();
            let mut stdout = std::io::stdout().lock();
            cg::prompt_component_name(&mut stdin, &mut stdout)?
        }
    };
    let name = cg::validate_component_name(&raw)?;

    if opts.dry_run {
        for planned in cg::preview(&name, &config, &base_dir)? {
            println!(
                "{} -> {}",
                planned.template.display(),
                planned.output.display()
            );
        }
        return Ok(());
    }

    let result = cg::materialize(&name, &config, &base_dir)?;
    if opts.verbose {
        for file in &result.files {
            eprintln!("wrote {}", file.display());
        }
    }
    println!(
        "Created component '{}' at {}",
        result.name,
        result.output_dir.display()
    );
    Ok(())
}

/// Work out the base directory and the configuration file.
///
/// `--dir` wins as the base directory. Otherwise an explicit `--config`
/// anchors paths at its parent directory, and the default is `.`.
fn resolve_paths(dir: Option<PathBuf>, config: Option<PathBuf>) -> (PathBuf, PathBuf) {
    match (dir, config) {
        (Some(dir), Some(config)) => (dir, config),
        (Some(dir), None) => {
            let config = dir.join(CONFIG_FILE_NAME);
            (dir, config)
        }
        (None, Some(config)) => (parent_or_current(&config), config),
        (None, None) => (PathBuf::from("."), PathBuf::from(CONFIG_FILE_NAME)),
    }
}

fn parent_or_current(path: &Path) -> PathBuf {
    match path.parent() {
        Some(p) if !p.as_os_str().is_empty() => p.to_path_buf(),
        _ => PathBuf::from("."),
    }
}
