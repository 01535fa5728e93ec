//! File system practical
//!
//! Creates `student.txt`, reads it back, then deletes it, narrating each
//! step on stdout.

use std::fs;
use std::io;
use std::path::Path;

const FILE_NAME: &str = "student.txt";
const CONTENT: &str = "Welcome to the Rust File System Module";

fn create_file(path: &Path, content: &str) -> io::Result<()> {
    fs::write(path, content)
}

fn read_file(path: &Path) -> io::Result<String> {
    fs::read_to_string(path)
}

fn delete_file(path: &Path) -> io::Result<()> {
    fs::remove_file(path)
}

fn main() -> io::Result<()> {
    let path = Path::new(FILE_NAME);

    println!("Step 1: Creating file and writing content...");
    create_file(path, CONTENT)?;
    println!("File '{FILE_NAME}' created successfully!\n");

    println!("Step 2: Reading file contents...");
    let file_content = read_file(path)?;
    println!("File Contents:");
    println!("{file_content}\n");

    println!("Step 3: Deleting file...");
    delete_file(path)?;
    println!("File '{FILE_NAME}' has been deleted successfully!");

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_create_read_delete_round_trip() {
        let path = std::env::temp_dir().join("file_demo_round_trip.txt");

        create_file(&path, CONTENT).unwrap();
        assert_eq!(read_file(&path).unwrap(), CONTENT);

        delete_file(&path).unwrap();
        assert!(!path.exists());
    }
}
