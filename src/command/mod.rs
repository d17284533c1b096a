mod generate;

pub use generate::{generate, generate_file, render_file, GenerateError, RunReport};
