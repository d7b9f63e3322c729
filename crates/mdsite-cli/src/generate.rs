//! Site generation: static asset copying, page rendering, template filling.

use std::fs;
use std::path::Path;

use anyhow::{Context, Result};
use mdsite_engine::{extract_title, markdown_to_document};

/// Substitutes the extracted title and rendered HTML into the page template.
///
/// Every `{{ Title }}` and `{{ Content }}` occurrence is replaced; all other
/// template text passes through untouched.
pub fn fill_template(template: &str, title: &str, content: &str) -> String {
    template
        .replace("{{ Title }}", title)
        .replace("{{ Content }}", content)
}

/// Recursively copies the static directory into the output directory.
pub fn copy_static(src: &Path, dest: &Path) -> Result<()> {
    let entries =
        fs::read_dir(src).with_context(|| format!("reading static dir {}", src.display()))?;
    for entry in entries {
        let entry = entry?;
        let path = entry.path();
        let target = dest.join(entry.file_name());
        if path.is_dir() {
            fs::create_dir_all(&target)?;
            copy_static(&path, &target)?;
        } else {
            fs::copy(&path, &target)
                .with_context(|| format!("copying {} to {}", path.display(), target.display()))?;
        }
    }
    Ok(())
}

/// Renders one Markdown file through the template to `dest`.
pub fn generate_page(from: &Path, template: &str, dest: &Path) -> Result<()> {
    println!("generating {} -> {}", from.display(), dest.display());

    let markdown = fs::read_to_string(from)
        .with_context(|| format!("reading page source {}", from.display()))?;

    let document = markdown_to_document(&markdown)
        .with_context(|| format!("parsing {}", from.display()))?;
    let content = document
        .render()
        .with_context(|| format!("rendering {}", from.display()))?;
    let title = extract_title(&markdown)
        .with_context(|| format!("extracting title from {}", from.display()))?;

    let page = fill_template(template, &title, &content);

    if let Some(parent) = dest.parent() {
        fs::create_dir_all(parent)?;
    }
    fs::write(dest, page).with_context(|| format!("writing {}", dest.display()))?;
    Ok(())
}

/// Walks the content tree and generates a mirrored `.html` page for every
/// `.md` file. Other files are skipped.
pub fn generate_pages_recursive(content_dir: &Path, template: &str, dest_dir: &Path) -> Result<()> {
    let entries = fs::read_dir(content_dir)
        .with_context(|| format!("reading content dir {}", content_dir.display()))?;
    for entry in entries {
        let entry = entry?;
        let path = entry.path();
        if path.is_dir() {
            generate_pages_recursive(&path, template, &dest_dir.join(entry.file_name()))?;
        } else if let Some(ext) = path.extension()
            && ext == "md"
        {
            let mut dest = dest_dir.join(entry.file_name());
            dest.set_extension("html");
            generate_page(&path, template, &dest)?;
        }
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    const TEMPLATE: &str =
        "<html><head><title>{{ Title }}</title></head><body>{{ Content }}</body></html>";

    #[test]
    fn fills_both_placeholders() {
        let page = fill_template(TEMPLATE, "Home", "<div><h1>Home</h1></div>");
        assert_eq!(
            page,
            "<html><head><title>Home</title></head>\
             <body><div><h1>Home</h1></div></body></html>"
        );
    }

    #[test]
    fn copies_static_tree_recursively() {
        let site = tempfile::tempdir().unwrap();
        let src = site.path().join("static");
        let dest = site.path().join("public");
        fs::create_dir_all(src.join("css")).unwrap();
        fs::create_dir_all(&dest).unwrap();
        fs::write(src.join("index.css"), "body {}").unwrap();
        fs::write(src.join("css").join("extra.css"), "p {}").unwrap();

        copy_static(&src, &dest).unwrap();

        assert_eq!(fs::read_to_string(dest.join("index.css")).unwrap(), "body {}");
        assert_eq!(
            fs::read_to_string(dest.join("css").join("extra.css")).unwrap(),
            "p {}"
        );
    }

    #[test]
    fn generates_a_page_through_the_template() {
        let site = tempfile::tempdir().unwrap();
        let from = site.path().join("index.md");
        let dest = site.path().join("public").join("index.html");
        fs::write(&from, "# Welcome\n\nSome **bold** text").unwrap();

        generate_page(&from, TEMPLATE, &dest).unwrap();

        assert_eq!(
            fs::read_to_string(&dest).unwrap(),
            "<html><head><title>Welcome</title></head>\
             <body><div><h1>Welcome</h1><p>Some <b>bold</b> text</p></div></body></html>"
        );
    }

    #[test]
    fn page_without_title_fails() {
        let site = tempfile::tempdir().unwrap();
        let from = site.path().join("untitled.md");
        fs::write(&from, "## only a subheading\n\ntext").unwrap();

        let result = generate_page(&from, TEMPLATE, &site.path().join("out.html"));
        assert!(result.is_err());
    }

    #[test]
    fn walks_content_tree_and_skips_non_markdown() {
        let site = tempfile::tempdir().unwrap();
        let content = site.path().join("content");
        let out = site.path().join("public");
        fs::create_dir_all(content.join("blog")).unwrap();
        fs::write(content.join("index.md"), "# Home\n\nhi").unwrap();
        fs::write(content.join("blog").join("post.md"), "# Post\n\nbody").unwrap();
        fs::write(content.join("notes.txt"), "not a page").unwrap();

        generate_pages_recursive(&content, TEMPLATE, &out).unwrap();

        assert!(out.join("index.html").exists());
        assert!(out.join("blog").join("post.html").exists());
        assert!(!out.join("notes.txt").exists());
        assert!(!out.join("notes.html").exists());
    }
}
