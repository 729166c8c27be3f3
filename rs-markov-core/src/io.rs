use std::fs::File;
use std::io::Read;
use std::path::Path;
use std::{fs, io};

/// Reads a whole text file as the training corpus.
///
/// - Reads the entire file into memory
/// - Keeps line endings: they are part of the character stream
pub fn read_corpus<P: AsRef<Path>>(filename: P) -> io::Result<String> {
	let mut contents = String::new();
	File::open(filename)?.read_to_string(&mut contents)?;
	Ok(contents)
}

/// Extracts the base filename without extension.
///
/// Examples:
/// - `"./data/shakespeare.txt"` → `"shakespeare"`
/// - `"shakespeare.txt"` → `"shakespeare"`
pub fn get_filename<P: AsRef<Path>>(input_path: P) -> io::Result<String> {
	let stem = input_path
		.as_ref()
		.file_stem()
		.ok_or_else(|| io::Error::new(io::ErrorKind::InvalidInput, "Path has no filename"))?;

	Ok(stem.to_string_lossy().to_string())
}

/// Lists all files with a given extension in a directory.
///
/// Returns file names only (no paths), sorted so listings such as
/// the server's corpus list come out in a stable order.
pub fn list_files<P: AsRef<Path>>(dir: P, extension: &str) -> io::Result<Vec<String>> {
	let mut files = Vec::new();

	for entry in fs::read_dir(dir)? {
		let path = entry?.path();
		if path.is_file() && path.extension() == Some(std::ffi::OsStr::new(extension)) {
			if let Some(name) = path.file_name() {
				files.push(name.to_string_lossy().to_string());
			}
		}
	}

	files.sort();
	Ok(files)
}

#[cfg(test)]
mod tests {
	use super::*;

	#[test]
	fn test_get_filename() {
		assert_eq!(get_filename("./data/poems.txt").unwrap(), "poems");
		assert_eq!(get_filename("poems").unwrap(), "poems");
		assert!(get_filename("..").is_err());
	}

	#[test]
	fn test_read_and_list() {
		let dir = std::env::temp_dir().join(format!("rs-markov-io-{}", std::process::id()));
		fs::create_dir_all(&dir).unwrap();
		fs::write(dir.join("b.txt"), "line one\nline two\n").unwrap();
		fs::write(dir.join("a.txt"), "x").unwrap();
		fs::write(dir.join("skip.bin"), "x").unwrap();

		assert_eq!(read_corpus(dir.join("b.txt")).unwrap(), "line one\nline two\n");
		assert_eq!(list_files(&dir, "txt").unwrap(), vec!["a.txt", "b.txt"]);

		fs::remove_dir_all(&dir).unwrap();
	}
}
