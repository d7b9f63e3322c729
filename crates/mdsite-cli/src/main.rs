mod generate;

use std::{env, fs, path::PathBuf, process};

use anyhow::{Context, Result};
use mdsite_config::SiteConfig;

fn main() -> Result<()> {
    let args: Vec<String> = env::args().collect();
    let site_root = match args.len() {
        1 => PathBuf::from("."),
        2 => PathBuf::from(&args[1]),
        _ => {
            eprintln!("Usage: {} [site-root]", args[0]);
            eprintln!(
                "Reads {} from the site root when present; otherwise uses the \
                 content/, static/, template.html, public/ layout",
                SiteConfig::FILE_NAME
            );
            process::exit(1);
        }
    };

    let config = SiteConfig::load_or_default(&site_root)?;
    let content_dir = site_root.join(&config.content_dir);
    let static_dir = site_root.join(&config.static_dir);
    let template_path = site_root.join(&config.template_path);
    let output_dir = site_root.join(&config.output_dir);

    let template = fs::read_to_string(&template_path)
        .with_context(|| format!("reading template {}", template_path.display()))?;

    // Start from a clean output directory every run.
    if output_dir.exists() {
        fs::remove_dir_all(&output_dir)
            .with_context(|| format!("clearing output dir {}", output_dir.display()))?;
    }
    fs::create_dir_all(&output_dir)
        .with_context(|| format!("creating output dir {}", output_dir.display()))?;

    if static_dir.exists() {
        generate::copy_static(&static_dir, &output_dir)?;
    }
    generate::generate_pages_recursive(&content_dir, &template, &output_dir)?;

    Ok(())
}
