#![allow(dead_code)]

pub mod config;
pub mod mock_elevenlabs;
pub mod server;

/// Build a multipart body by hand, for parts reqwest cannot express
///
/// Each part is `(name, filename, content)`; a `None` filename omits the
/// `filename` parameter entirely.
pub fn raw_multipart(boundary: &str, parts: &[(&str, Option<&str>, &str)]) -> String {
    let mut body = String::new();

    for (name, filename, content) in parts {
        body.push_str(&format!("--{boundary}\r\n"));
        match filename {
            Some(filename) => {
                body.push_str(&format!(
                    "Content-Disposition: form-data; name=\"{name}\"; filename=\"{filename}\"\r\n"
                ));
                body.push_str("Content-Type: application/octet-stream\r\n");
            }
            None => body.push_str(&format!("Content-Disposition: form-data; name=\"{name}\"\r\n")),
        }
        body.push_str("\r\n");
        body.push_str(content);
        body.push_str("\r\n");
    }

    body.push_str(&format!("--{boundary}--\r\n"));
    body
}

/// Number of entries left in a staging directory
pub fn staged_files(dir: &std::path::Path) -> usize {
    std::fs::read_dir(dir).map(Iterator::count).unwrap_or(0)
}
