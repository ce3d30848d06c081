//! DIMACS CNF rendering

use super::Cnf;
use anyhow::{Context, Result};
use std::io::Write;
use std::path::Path;

/// Write a CNF in DIMACS format: a `p cnf <variables> <clauses>` header
/// followed by one clause per line, literals space-separated and
/// terminated with `0`.
pub fn write_dimacs<W: Write>(writer: &mut W, cnf: &Cnf) -> Result<()> {
    writeln!(writer, "p cnf {} {}", cnf.variable_count(), cnf.clause_count())
        .context("Failed to write DIMACS header")?;

    for clause in cnf.clauses() {
        for literal in &clause.literals {
            write!(writer, "{} ", literal).context("Failed to write DIMACS clause")?;
        }
        writeln!(writer, "0").context("Failed to write DIMACS clause")?;
    }

    Ok(())
}

/// Render a CNF to a DIMACS string
pub fn dimacs_to_string(cnf: &Cnf) -> String {
    let mut buffer = Vec::new();
    // Writing to a Vec cannot fail
    write_dimacs(&mut buffer, cnf).expect("in-memory write");
    String::from_utf8(buffer).expect("DIMACS output is ASCII")
}

/// Write a CNF to a DIMACS file, creating parent directories as needed
pub fn save_dimacs_to_file<P: AsRef<Path>>(cnf: &Cnf, path: P) -> Result<()> {
    if let Some(parent) = path.as_ref().parent() {
        if !parent.as_os_str().is_empty() {
            std::fs::create_dir_all(parent)
                .with_context(|| format!("Failed to create directory: {}", parent.display()))?;
        }
    }

    let file = std::fs::File::create(&path)
        .with_context(|| format!("Failed to create DIMACS file: {}", path.as_ref().display()))?;
    let mut writer = std::io::BufWriter::new(file);
    write_dimacs(&mut writer, cnf)?;
    writer
        .flush()
        .with_context(|| format!("Failed to flush DIMACS file: {}", path.as_ref().display()))?;

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::sat::Clause;
    use tempfile::tempdir;

    fn sample_cnf() -> Cnf {
        let mut cnf = Cnf::new(4);
        cnf.push(Clause::unit(4));
        cnf.push(Clause::binary(-1, 2));
        cnf.push(Clause::new(vec![1, -2, 3]));
        cnf
    }

    #[test]
    fn test_dimacs_rendering() {
        let text = dimacs_to_string(&sample_cnf());
        assert_eq!(text, "p cnf 4 3\n4 0\n-1 2 0\n1 -2 3 0\n");
    }

    #[test]
    fn test_save_to_file() {
        let temp_dir = tempdir().unwrap();
        let path = temp_dir.path().join("out.cnf");

        save_dimacs_to_file(&sample_cnf(), &path).unwrap();

        let content = std::fs::read_to_string(&path).unwrap();
        assert!(content.starts_with("p cnf 4 3\n"));
        assert!(content.ends_with("1 -2 3 0\n"));
    }
}
