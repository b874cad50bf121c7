use clap::Parser;

/// Arguments for completions command
#[derive(Parser, Debug)]
#[command(after_help = "EXAMPLES:\n  \
                  Generate bash completions:\n    iis-rewrite completions bash > ~/.bash_completion.d/iis-rewrite\n\n\
                  Generate zsh completions:\n    iis-rewrite completions zsh > ~/.zfunc/_iis-rewrite\n\n\
                  Generate PowerShell completions:\n    iis-rewrite completions powershell")]
pub struct CompletionsArgs {
    /// Shell type (bash, elvish, fish, powershell, zsh)
    pub shell: String,
}
