use std::path::{Path, PathBuf};

use cg::Config;

/// Write the sample configuration and point at the template directory it expects.
pub(crate) fn run(dir: Option<PathBuf>, force: bool) {
    let target = dir.unwrap_or_else(|| PathBuf::from("."));
    let path = cg::init_config(&target, force).unwrap_or_else(|e| {
        eprintln!("cg init: {e}");
        std::process::exit(1);
    });
    println!("Created {}", path.display());

    let sample = Config::sample();
    let template: PathBuf = target.join(&sample.template_dir).components().collect();
    if !template.is_dir() {
        println!("{}", template_hint(&template, &sample));
    }
}

fn template_hint(template: &Path, config: &Config) -> String {
    format!(
        "Next: add template files to {} (use {} where the component name goes)",
        template.display(),
        config.placeholder
    )
}
