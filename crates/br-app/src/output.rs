use std::fs::File;
use std::io::{BufWriter, Write};
use std::path::Path;

use anyhow::{Context, Result};

/// Écrit le rendu suivi d'un saut de ligne final.
///
/// # Errors
/// Returns an error if writing fails.
pub fn write_to<W: Write>(mut writer: W, text: &str) -> Result<()> {
    writer.write_all(text.as_bytes())?;
    writer.write_all(b"\n")?;
    writer.flush()?;
    Ok(())
}

/// Écrit le rendu dans `target` (créé ou tronqué), ou sur stdout si `None`.
///
/// # Errors
/// Returns an error if the file cannot be created or written.
pub fn write_output(text: &str, target: Option<&Path>) -> Result<()> {
    if let Some(path) = target {
        let file = File::create(path)
            .with_context(|| format!("Impossible de créer {}", path.display()))?;
        write_to(BufWriter::new(file), text)
            .with_context(|| format!("Erreur d'écriture dans {}", path.display()))?;
        log::info!("Rendu écrit dans {}", path.display());
    } else {
        let stdout = std::io::stdout();
        write_to(BufWriter::new(stdout.lock()), text).context("Erreur d'écriture sur stdout")?;
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn appends_final_newline() {
        let mut buf = Vec::new();
        write_to(&mut buf, "⣿⣿\n⠁⠁").unwrap();
        assert_eq!(String::from_utf8(buf).unwrap(), "⣿⣿\n⠁⠁\n");
    }

    #[test]
    fn file_is_truncated() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("out.txt");
        std::fs::write(&path, "ancien contenu bien plus long").unwrap();

        write_output("⣿", Some(&path)).unwrap();
        assert_eq!(std::fs::read_to_string(&path).unwrap(), "⣿\n");
    }

    #[test]
    fn missing_directory_is_error() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("absent").join("out.txt");
        assert!(write_output("⣿", Some(&path)).is_err());
    }
}
