use std::fs::File;
use std::io::{self, BufRead, BufReader, BufWriter, IsTerminal, Write};
use std::path::Path;

use anyhow::{Context, Result};

use cjson_forge::io::Format;

/// Returns `true` if stderr is a terminal (interactive).
pub fn stderr_is_tty() -> bool {
    io::stderr().is_terminal()
}

/// Returns `true` if stdin is a terminal (interactive).
pub fn stdin_is_tty() -> bool {
    io::stdin().is_terminal()
}

/// A CJSON document source together with the name used in messages.
pub struct Input {
    pub label: String,
    pub reader: Box<dyn BufRead>,
}

/// Opens `path`, or stdin when no path is given.
pub fn open_input(path: Option<&Path>) -> Result<Input> {
    let Some(path) = path else {
        return Ok(Input {
            label: "<stdin>".to_string(),
            reader: Box::new(io::stdin().lock()),
        });
    };

    let file = File::open(path)
        .with_context(|| format!("Failed to open input file: {}", path.display()))?;
    Ok(Input {
        label: path.display().to_string(),
        reader: Box::new(BufReader::new(file)),
    })
}

/// Creates `path` for writing, or locks stdout when no path is given.
pub fn create_output(path: Option<&Path>) -> Result<Box<dyn Write>> {
    let Some(path) = path else {
        return Ok(Box::new(BufWriter::new(io::stdout().lock())));
    };

    let known = path
        .extension()
        .and_then(|e| e.to_str())
        .and_then(Format::from_extension)
        .is_some();
    if !known {
        tracing::warn!(
            "output file '{}' does not use the .cjson extension",
            path.display()
        );
    }

    let file = File::create(path)
        .with_context(|| format!("Failed to create output file: {}", path.display()))?;
    Ok(Box::new(BufWriter::new(file)))
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Read;

    #[test]
    fn input_carries_path_label_and_contents() {
        let name = format!("cjforge-input-{}.cjson", std::process::id());
        let path = std::env::temp_dir().join(name);
        std::fs::write(&path, "{\"chemical json\": 0}").unwrap();

        let mut input = open_input(Some(&path)).unwrap();
        let mut text = String::new();
        input.reader.read_to_string(&mut text).unwrap();
        std::fs::remove_file(&path).unwrap();

        assert_eq!(input.label, path.display().to_string());
        assert_eq!(text, "{\"chemical json\": 0}");
    }

    #[test]
    fn missing_input_reports_path() {
        let path = Path::new("/nonexistent/cjforge/missing.cjson");
        let err = open_input(Some(path)).err().unwrap();
        assert!(err.to_string().contains("missing.cjson"));
    }

    #[test]
    fn output_file_receives_written_bytes() {
        let name = format!("cjforge-output-{}.cjson", std::process::id());
        let path = std::env::temp_dir().join(name);
        {
            let mut output = create_output(Some(&path)).unwrap();
            output.write_all(b"{}\n").unwrap();
            output.flush().unwrap();
        }
        let written = std::fs::read_to_string(&path).unwrap();
        std::fs::remove_file(&path).unwrap();
        assert_eq!(written, "{}\n");
    }
}
