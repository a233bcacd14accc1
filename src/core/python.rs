//! Python source detection for staged files.

use crate::core::error::{Error, Result};
use std::fs::File;
use std::io::{BufRead, BufReader};
use std::path::Path;

/// Checks whether a file looks like a Python source.
///
/// Returns true if the path ends in `.py`, or if the file's first line
/// contains both `"python"` and `"#!"`. The shebang heuristic is
/// deliberately permissive: it is a substring check, not anchored to the
/// start of the line, so `#!/usr/bin/env python3` and friends all match.
///
/// A missing file surfaces as [`Error::FileNotFound`]; a file staged and
/// then deleted is common, and the caller skips it rather than aborting.
pub fn is_python_file(path: &Path) -> Result<bool> {
    if !path.exists() {
        return Err(Error::FileNotFound {
            path: path.to_path_buf(),
        });
    }

    if path.to_string_lossy().ends_with(".py") {
        return Ok(true);
    }

    let file = File::open(path).map_err(|e| Error::io(format!("open {}", path.display()), e))?;

    // Only the first line matters; the file may be large or binary.
    let mut first_line = Vec::new();
    BufReader::new(file)
        .read_until(b'\n', &mut first_line)
        .map_err(|e| Error::io(format!("read {}", path.display()), e))?;
    let first_line = String::from_utf8_lossy(&first_line);

    Ok(first_line.contains("python") && first_line.contains("#!"))
}
