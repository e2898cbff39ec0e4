use anyhow::{Result, anyhow};
use yaml_rust2::{Yaml, YamlEmitter, YamlLoader};

/// One parsed document extracted from the input stream.
#[derive(Debug)]
pub struct Record {
    /// Top-level `kind` field, or empty when absent or not a scalar.
    pub kind: String,
    /// Nested `metadata.name` field, same fallback.
    pub name: String,
    /// Re-serialized document text, newline terminated.
    pub yaml: String,
}

/// Splits a concatenated YAML stream into one `Record` per document.
///
/// Empty documents (stray separators, comment-only sections) are dropped.
pub fn split_documents(input: &str) -> Result<Vec<Record>> {
    let docs =
        YamlLoader::load_from_str(input).map_err(|e| anyhow!("could not parse input: {e}"))?;

    let mut records = Vec::with_capacity(docs.len());
    for doc in &docs {
        if doc.is_null() || doc.is_badvalue() {
            continue;
        }
        records.push(Record {
            kind: scalar_field(&doc["kind"]),
            name: scalar_field(&doc["metadata"]["name"]),
            yaml: render(doc)?,
        });
    }
    Ok(records)
}

fn scalar_field(value: &Yaml) -> String {
    value.as_str().unwrap_or_default().to_string()
}

fn render(doc: &Yaml) -> Result<String> {
    let mut out = String::new();
    YamlEmitter::new(&mut out)
        .dump(doc)
        .map_err(|e| anyhow!("could not serialize document: {e}"))?;

    // The emitter opens every document with a `---` marker; the split files
    // are single-document, so drop it.
    let body = out.strip_prefix("---\n").unwrap_or(&out);
    let mut body = body.to_string();
    if !body.ends_with('\n') {
        body.push('\n');
    }
    Ok(body)
}
