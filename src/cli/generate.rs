use std::path::PathBuf;

use clap::Args;

use crate::commands::generate::DEFAULT_OUTPUT;
use crate::rewrite::reader::DEFAULT_SEPARATOR;

/// Arguments for the generate command
#[derive(Args, Debug)]
#[command(after_help = "EXAMPLES:\n  \
                  Generate rewriteMap.config from a CSV file:\n    iis-rewrite generate -f redirects.csv -n Redirects\n\n\
                  Use a semicolon separated file:\n    iis-rewrite generate -f redirects.txt -n Redirects -s ';'\n\n\
                  Strip scheme and host from every URL:\n    iis-rewrite generate -f redirects.csv -n Redirects --strip-domains\n\n\
                  Write somewhere else without echoing entries:\n    iis-rewrite generate -f redirects.csv -n Redirects -o web/rewriteMaps.config -q")]
pub struct GenerateArgs {
    /// Rewrite map CSV file
    #[arg(long, short = 'f', value_name = "CSV", required = true)]
    pub file: Option<PathBuf>,

    /// Rewrite map name
    #[arg(long, short = 'n', value_name = "NAME", required = true)]
    pub name: Option<String>,

    /// CSV separator
    #[arg(long, short = 's', default_value = DEFAULT_SEPARATOR)]
    pub separator: String,

    /// Silent mode, only errors are printed
    #[arg(long, short = 'q')]
    pub silent: bool,

    /// Strip scheme and host from both sides of every redirect
    #[arg(long = "strip-domains", alias = "stripDomains")]
    pub strip_domains: bool,

    /// Remove every occurrence of this text from both sides of every redirect
    #[arg(long = "domain-to-remove", alias = "domainToRemove", value_name = "TEXT")]
    pub domain_to_remove: Option<String>,

    /// Output file
    #[arg(long, short = 'o', value_name = "PATH", default_value = DEFAULT_OUTPUT)]
    pub output: PathBuf,
}
