use std::fs;
use std::io;
use std::path::Path;

use wayhire_core::{ResumeFile, RESUME_CONTENT_TYPE};

/// Describes a local file as an upload would: name, media type, size.
pub fn resume_from_path(path: &Path) -> io::Result<ResumeFile> {
    let meta = fs::metadata(path)?;
    if !meta.is_file() {
        return Err(io::Error::new(
            io::ErrorKind::InvalidInput,
            format!("{} is not a file", path.display()),
        ));
    }
    let file_name = path
        .file_name()
        .map(|name| name.to_string_lossy().into_owned())
        .unwrap_or_default();
    Ok(ResumeFile {
        content_type: content_type_for(path).to_string(),
        file_name,
        size_bytes: meta.len(),
    })
}

fn content_type_for(path: &Path) -> &'static str {
    let extension = path
        .extension()
        .map(|ext| ext.to_string_lossy().to_ascii_lowercase());
    match extension.as_deref() {
        Some("pdf") => RESUME_CONTENT_TYPE,
        Some("doc") => "application/msword",
        Some("docx") => "application/vnd.openxmlformats-officedocument.wordprocessingml.document",
        Some("txt") => "text/plain",
        Some("rtf") => "application/rtf",
        _ => "application/octet-stream",
    }
}
