use clap::Parser;
use std::path::PathBuf;

#[derive(Parser, Debug)]
#[command(
    name = "codify",
    version,
    about = "Have files you want accessible in the binary of your C program? Codify them."
)]
pub struct Cli {
    /// Base name for the generated files and the header-guard macro
    pub pack_name: String,

    /// Resource files to embed, read as raw bytes
    #[arg(required = true)]
    pub resources: Vec<PathBuf>,

    /// Where to output the files
    #[arg(long, default_value = ".")]
    pub outdir: PathBuf,

    /// Directory segment prefixed to the generated #include path
    #[arg(long, default_value = "")]
    pub include_prefix: String,
}
