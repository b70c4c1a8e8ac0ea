use std::env;
use std::error::Error;
use std::fs;
use std::io;
use std::path::{Path, PathBuf};
use std::process;

use sitemark_core::{extract_title, render_html};

const TITLE_PLACEHOLDER: &str = "{{ Title }}";
const CONTENT_PLACEHOLDER: &str = "{{ Content }}";

/// Where a site's pieces live. Defaults mirror the conventional layout:
/// content and static assets beside a template, output under ./public.
struct SiteConfig {
    content_dir: PathBuf,
    static_dir: PathBuf,
    template_path: PathBuf,
    output_dir: PathBuf,
}

impl Default for SiteConfig {
    fn default() -> Self {
        Self {
            content_dir: PathBuf::from("./content"),
            static_dir: PathBuf::from("./static"),
            template_path: PathBuf::from("./template.html"),
            output_dir: PathBuf::from("./public"),
        }
    }
}

fn main() {
    let mut config = SiteConfig::default();

    let mut args = env::args().skip(1);
    while let Some(arg) = args.next() {
        match arg.as_str() {
            "-h" | "--help" => {
                print_usage();
                return;
            }
            "--content" => config.content_dir = expect_value(&mut args, "--content"),
            "--static" => config.static_dir = expect_value(&mut args, "--static"),
            "--template" => config.template_path = expect_value(&mut args, "--template"),
            "--out" => config.output_dir = expect_value(&mut args, "--out"),
            _ => {
                eprintln!("unexpected argument: {}", arg);
                print_usage();
                process::exit(2);
            }
        }
    }

    if let Err(err) = build_site(&config) {
        eprintln!("build failed: {}", err);
        process::exit(1);
    }
}

fn print_usage() {
    eprintln!("Usage: sitemark-cli [--content DIR] [--static DIR] [--template FILE] [--out DIR]");
}

fn expect_value(args: &mut impl Iterator<Item = String>, flag: &str) -> PathBuf {
    match args.next() {
        Some(value) => PathBuf::from(value),
        None => {
            eprintln!("{} expects a path", flag);
            print_usage();
            process::exit(2);
        }
    }
}

/// Builds the whole site: resets the output directory, copies static assets,
/// then renders every Markdown page through the template. The first failing
/// page aborts the build.
fn build_site(config: &SiteConfig) -> Result<(), Box<dyn Error>> {
    let template = fs::read_to_string(&config.template_path).map_err(|err| {
        format!(
            "failed to read template {}: {}",
            config.template_path.display(),
            err
        )
    })?;

    if config.output_dir.exists() {
        eprintln!("Clearing output directory {}", config.output_dir.display());
        fs::remove_dir_all(&config.output_dir)?;
    }

    if config.static_dir.exists() {
        eprintln!(
            "Copying static files from {} to {}",
            config.static_dir.display(),
            config.output_dir.display()
        );
        copy_dir_recursive(&config.static_dir, &config.output_dir)?;
    } else {
        fs::create_dir_all(&config.output_dir)?;
    }

    generate_pages(
        &config.content_dir,
        &config.content_dir,
        &template,
        &config.output_dir,
    )
}

fn copy_dir_recursive(src: &Path, dest: &Path) -> io::Result<()> {
    fs::create_dir_all(dest)?;
    for entry in fs::read_dir(src)? {
        let entry = entry?;
        let from = entry.path();
        let to = dest.join(entry.file_name());
        if entry.file_type()?.is_dir() {
            copy_dir_recursive(&from, &to)?;
        } else {
            fs::copy(&from, &to)?;
        }
    }
    Ok(())
}

fn generate_pages(
    content_root: &Path,
    dir: &Path,
    template: &str,
    output_dir: &Path,
) -> Result<(), Box<dyn Error>> {
    for entry in fs::read_dir(dir)
        .map_err(|err| format!("failed to read content dir {}: {}", dir.display(), err))?
    {
        let entry = entry?;
        let path = entry.path();
        if entry.file_type()?.is_dir() {
            generate_pages(content_root, &path, template, output_dir)?;
        } else if path.extension().and_then(|ext| ext.to_str()) == Some("md") {
            let rel = path.strip_prefix(content_root)?;
            let dest = output_dir.join(rel).with_extension("html");
            generate_page(&path, &dest, template)?;
        }
    }
    Ok(())
}

fn generate_page(source: &Path, dest: &Path, template: &str) -> Result<(), Box<dyn Error>> {
    eprintln!("Generating page: {} -> {}", source.display(), dest.display());
    let markdown = fs::read_to_string(source)?;

    let title = extract_title(&markdown)
        .map_err(|err| format!("{}: {}", source.display(), err))?;
    let content = render_html(&markdown)
        .map_err(|err| format!("{}: {}", source.display(), err))?;

    let page = template
        .replace(TITLE_PLACEHOLDER, &title)
        .replace(CONTENT_PLACEHOLDER, &content);

    if let Some(parent) = dest.parent() {
        fs::create_dir_all(parent)?;
    }
    fs::write(dest, page)?;
    Ok(())
}
