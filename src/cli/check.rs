use std::path::PathBuf;

use clap::Args;

/// Arguments for the check command
#[derive(Args, Debug)]
#[command(after_help = "EXAMPLES:\n  \
                  Report duplicate keys:\n    iis-rewrite check -f rewriteMap.config\n\n\
                  Remove duplicates in place:\n    iis-rewrite check -f rewriteMap.config --fix\n\n\
                  Write a corrected copy:\n    iis-rewrite check -f rewriteMap.config -o rewriteMap.fixed.config")]
pub struct CheckArgs {
    /// Rewrite map .config file
    #[arg(long, short = 'f', value_name = "XML")]
    pub file: PathBuf,

    /// Automatically fix duplicates in the source file
    #[arg(long, short = 'x')]
    pub fix: bool,

    /// Write the corrected rewrite map to this path instead of the source file
    #[arg(long, short = 'o', value_name = "PATH")]
    pub output: Option<PathBuf>,
}
