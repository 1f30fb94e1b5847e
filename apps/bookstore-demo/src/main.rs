//! # Bookstore Demo Entry Point
//!
//! No flags, no arguments. Prints the demo to stdout and exits successfully.
//! See [`bookstore_demo::run`].

fn main() -> Result<(), Box<dyn std::error::Error>> {
    bookstore_demo::run()?;
    Ok(())
}
