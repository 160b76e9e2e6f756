use super::{LoadError, LoadedDocument};
use ::epub::doc::EpubDoc;
use std::io::{Read, Seek};
use std::path::Path;
use tracing::debug;

/// Separator placed between the text of consecutive chapters.
const CHAPTER_BREAK: &str = "\n\n";

/// Load text from an EPUB file using the epub crate.
///
/// Chapters are read in spine order; chapters without text are skipped and
/// the rest are joined with a blank line.
pub fn load(path: &Path) -> Result<LoadedDocument, LoadError> {
    if !path.exists() {
        return Err(LoadError::FileNotFound(path.to_path_buf()));
    }

    let mut doc = EpubDoc::new(path).map_err(|e| LoadError::EpubParse(e.to_string()))?;
    let chapters = chapter_texts(&mut doc);
    debug!(
        spine = doc.get_num_chapters(),
        with_text = chapters.len(),
        "epub chapters read"
    );

    if chapters.is_empty() {
        return Err(LoadError::EpubParse(
            "No extractable text content found in EPUB".to_string(),
        ));
    }

    Ok(LoadedDocument {
        content: chapters.join(CHAPTER_BREAK),
        source: format!("epub:{}", path.display()),
    })
}

/// Plain text of every spine chapter that has any.
fn chapter_texts<R: Read + Seek>(doc: &mut EpubDoc<R>) -> Vec<String> {
    (0..doc.get_num_chapters())
        .filter_map(|idx| {
            if !doc.set_current_chapter(idx) {
                return None;
            }
            doc.get_current_str()
                .map(|(html, _mime)| extract_plain_text(&html))
        })
        .filter(|text| !text.is_empty())
        .collect()
}

/// Strip markup from chapter XHTML, keeping text nodes.
///
/// Tags are replaced by a space so that `<p>a</p><p>b</p>` does not glue
/// `a` and `b` into one word.
fn extract_plain_text(html: &str) -> String {
    let mut result = String::with_capacity(html.len());
    let mut in_tag = false;

    for c in html.chars() {
        match c {
            '<' => in_tag = true,
            '>' if in_tag => {
                in_tag = false;
                result.push(' ');
            }
            _ if !in_tag => result.push(c),
            _ => {}
        }
    }

    result
        .lines()
        .map(str::trim)
        .filter(|line| !line.is_empty())
        .collect::<Vec<_>>()
        .join("\n")
}
