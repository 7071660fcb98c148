// src/utils.rs
use crate::error::ClientError;

/// Get file extension in lowercase
pub fn get_file_extension(filename: &str) -> Option<String> {
    std::path::Path::new(filename)
        .extension()
        .and_then(|ext| ext.to_str())
        .map(|ext| ext.to_lowercase())
}

/// Validate file extension against allowed types
pub fn validate_file_extension(filename: &str, allowed: &[&str]) -> Result<(), ClientError> {
    let ext = get_file_extension(filename).ok_or_else(|| {
        ClientError::validation(format!("Please select a PDF or DOCX file: {filename}"))
    })?;

    if !allowed.contains(&ext.as_str()) {
        return Err(ClientError::validation(format!(
            "Please select a PDF or DOCX file, got .{ext}"
        )));
    }

    Ok(())
}

/// MIME type for an upload, derived from the filename.
pub fn content_type_for(file_name: &str) -> Result<&'static str, ClientError> {
    let lower_name = file_name.to_lowercase();
    if lower_name.ends_with(".pdf") {
        Ok("application/pdf")
    } else if lower_name.ends_with(".docx") {
        Ok("application/vnd.openxmlformats-officedocument.wordprocessingml.document")
    } else {
        Err(ClientError::validation(format!(
            "Unsupported file format: {file_name}"
        )))
    }
}
